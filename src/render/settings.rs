use std::path::PathBuf;

use serde::Deserialize;

use crate::config::{Config, ConfigError};

/// Settings for a [`Renderer`](super::Renderer).
///
/// Usually read from the `render` section of the configuration:
///
/// ```toml
/// [render]
/// start_marker = "{{"
/// end_marker = "}}"
/// scope = "email.welcome"
/// template = "templates/welcome.txt"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Marker opening a placeholder.
    pub start_marker: String,
    /// Marker closing a placeholder.
    pub end_marker: String,
    /// When set, only properties under this prefix are used, keyed by their
    /// last segment.
    pub scope: Option<String>,
    /// Template used by [`Renderer::render_configured`](super::Renderer::render_configured).
    pub template: Option<PathBuf>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            start_marker: "${".to_string(),
            end_marker: "}".to_string(),
            scope: None,
            template: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct Sections {
    #[serde(default)]
    render: RenderSettings,
}

impl RenderSettings {
    /// Reads the `render` section from `config`, falling back to defaults for
    /// anything not set.
    pub fn from_config(config: Config) -> Result<Self, ConfigError> {
        Ok(config.build_into::<Sections>()?.render)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::PropertySet;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_defaults_when_section_missing() {
        let properties: PropertySet = [("email.host", "localhost")].into_iter().collect();

        let settings = RenderSettings::from_config(Config::builder().with_properties(properties)).unwrap();

        assert_eq!(settings, RenderSettings::default());
    }

    #[test]
    fn test_reads_render_section_from_toml() {
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
            [render]
            start_marker = "{{{{"
            end_marker = "}}}}"
            scope = "email.welcome"
            template = "templates/welcome.txt"

            [email.welcome]
            subject = "Hi"
            "#
        )
        .unwrap();

        let settings = RenderSettings::from_config(Config::builder().with_file(file.path(), true)).unwrap();

        assert_eq!(settings.start_marker, "{{");
        assert_eq!(settings.end_marker, "}}");
        assert_eq!(settings.scope.as_deref(), Some("email.welcome"));
        assert_eq!(settings.template, Some(PathBuf::from("templates/welcome.txt")));
    }

    #[test]
    fn test_toml_strings_stay_strings() {
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[render]\nscope = \"2024\"\nend_marker = \"true\"").unwrap();

        let settings = RenderSettings::from_config(Config::builder().with_file(file.path(), true)).unwrap();

        assert_eq!(settings.scope.as_deref(), Some("2024"));
        assert_eq!(settings.end_marker, "true");
        assert_eq!(settings.start_marker, "${");
    }
}
