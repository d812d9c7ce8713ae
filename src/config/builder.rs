use std::path::Path;

use serde::de::DeserializeOwned;

use super::env::EnvSource;
use super::file::FileSource;
use super::source::{deep_merge, ConfigSource, StaticSource};
use super::ConfigError;
use crate::properties::PropertySet;

/// Builder for loading a [`PropertySet`] from layered sources.
///
/// Sources are applied in registration order; a key set by a later source
/// overrides the same key from an earlier one.
///
/// ## Example
///
/// ```no_run
/// use dragon_render::{Config, Prefix};
///
/// let mut properties = Config::builder()
///     .with_file("config/notification.properties", true)
///     .with_file("config/local.toml", false)
///     .with_env("NOTIFY", "__")
///     .build()?;
///
/// let recipients = properties.extract_indexed(&Prefix::new("email.to")?);
/// # Ok::<(), dragon_render::Error>(())
/// ```
#[derive(Debug, Default)]
#[must_use = "builders do nothing until .build() is called"]
pub struct Config {
    sources: Vec<Box<dyn ConfigSource>>,
}

impl Config {
    /// Creates a new configuration builder.
    pub fn builder() -> Self {
        Self::default()
    }

    /// Adds in-memory properties, usually as the first layer of defaults.
    pub fn with_properties(self, properties: PropertySet) -> Self {
        self.with_source(StaticSource(properties))
    }

    /// Adds a properties or TOML file to be loaded.
    ///
    /// If `required` is `true`, the build will fail if the file doesn't exist.
    /// Optional files that are missing are silently skipped.
    pub fn with_file(self, path: impl AsRef<Path>, required: bool) -> Self {
        self.with_source(FileSource::new(path, required))
    }

    /// Loads properties from environment variables with the given prefix.
    ///
    /// Variable names are mapped to keys by removing the prefix and
    /// separator, splitting the rest on the separator, lowercasing each
    /// segment and joining them with `.`.
    pub fn with_env(self, prefix: impl Into<String>, separator: impl Into<String>) -> Self {
        self.with_source(EnvSource::new(prefix, separator))
    }

    /// Adds any other [`ConfigSource`].
    pub fn with_source(mut self, source: impl ConfigSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Loads and merges every source into one flat set.
    pub fn build(self) -> Result<PropertySet, ConfigError> {
        let mut merged = PropertySet::new();

        for source in &self.sources {
            merged.merge(source.properties()?);
        }

        Ok(merged)
    }

    /// Loads every source and deserializes the result into `T`.
    ///
    /// Dotted keys become nested tables, so `render.start_marker` fills the
    /// `start_marker` field of a `render` section. TOML files keep their own
    /// value types. Values from untyped sources (properties files, the
    /// environment, in-memory properties) that look like booleans or numbers
    /// are converted before deserialization.
    pub fn build_into<T: DeserializeOwned>(self) -> Result<T, ConfigError> {
        let mut merged = toml::Table::new();

        for source in &self.sources {
            deep_merge(&mut merged, source.table()?);
        }

        let value = toml::Value::Table(merged);
        value.try_into().map_err(ConfigError::DeserializeError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    #[derive(Debug, Deserialize)]
    struct Mail {
        mail: MailSection,
    }

    #[derive(Debug, Deserialize)]
    struct MailSection {
        host: String,
        port: u16,
        tls: bool,
    }

    #[test]
    fn test_later_sources_override() {
        let mut base = NamedTempFile::new().unwrap();
        writeln!(base, "mail.host=localhost\nmail.port=25").unwrap();

        let mut local = Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(local, "[mail]\nport = 2525").unwrap();

        let properties = Config::builder()
            .with_file(base.path(), true)
            .with_file(local.path(), true)
            .build()
            .unwrap();

        assert_eq!(properties.get("mail.host"), Some("localhost"));
        assert_eq!(properties.get("mail.port"), Some("2525"));
    }

    #[test]
    fn test_defaults_then_missing_optional_file() {
        let defaults: PropertySet = [("mail.host", "localhost")].into_iter().collect();

        let properties = Config::builder()
            .with_properties(defaults.clone())
            .with_file("/nonexistent/local.properties", false)
            .build()
            .unwrap();

        assert_eq!(properties, defaults);
    }

    #[test]
    fn test_missing_required_file_fails() {
        let result = Config::builder()
            .with_file("/nonexistent/notification.properties", true)
            .build();

        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_build_into_typed_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "mail.host = smtp.example.com\nmail.port = 587\nmail.tls = true").unwrap();

        let config: Mail = Config::builder()
            .with_file(file.path(), true)
            .build_into()
            .unwrap();

        assert_eq!(config.mail.host, "smtp.example.com");
        assert_eq!(config.mail.port, 587);
        assert!(config.mail.tls);
    }

    #[derive(Debug, Deserialize)]
    struct Labels {
        labels: LabelSection,
    }

    #[derive(Debug, Deserialize)]
    struct LabelSection {
        year: String,
        flag: String,
        code: String,
    }

    #[test]
    fn test_build_into_keeps_numeric_looking_toml_strings() {
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[labels]\nyear = \"2024\"\nflag = \"true\"\ncode = \"007\"").unwrap();

        let config: Labels = Config::builder()
            .with_file(file.path(), true)
            .build_into()
            .unwrap();

        assert_eq!(config.labels.year, "2024");
        assert_eq!(config.labels.flag, "true");
        assert_eq!(config.labels.code, "007");
    }

    #[test]
    fn test_build_into_later_layers_override_typed_values() {
        let mut base = Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(base, "[mail]\nhost = \"localhost\"\nport = 25\ntls = false").unwrap();

        let overrides: PropertySet = [("mail.port", "2525")].into_iter().collect();

        let config: Mail = Config::builder()
            .with_file(base.path(), true)
            .with_properties(overrides)
            .build_into()
            .unwrap();

        assert_eq!(config.mail.host, "localhost");
        assert_eq!(config.mail.port, 2525);
        assert!(!config.mail.tls);
    }

    #[test]
    fn test_build_into_type_mismatch() {
        let defaults: PropertySet = [("mail.host", "h"), ("mail.port", "not-a-port"), ("mail.tls", "false")]
            .into_iter()
            .collect();

        let result = Config::builder().with_properties(defaults).build_into::<Mail>();

        assert!(matches!(result, Err(ConfigError::DeserializeError(_))));
    }
}
