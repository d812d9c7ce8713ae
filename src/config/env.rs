use super::source::ConfigSource;
use super::ConfigError;
use crate::properties::PropertySet;

/// Reads properties from environment variables.
///
/// `MYAPP__EMAIL__HOST=smtp` with prefix `MYAPP` and separator `__` becomes
/// the property `email.host = smtp`.
#[derive(Debug, Clone)]
pub struct EnvSource {
    prefix: String,
    separator: String,
}

impl EnvSource {
    pub fn new(prefix: impl Into<String>, separator: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            separator: separator.into(),
        }
    }

    fn collect(&self, vars: impl IntoIterator<Item = (String, String)>) -> Result<PropertySet, ConfigError> {
        if self.separator.is_empty() {
            return Err(ConfigError::EmptySeparator(self.prefix.clone()));
        }

        let prefix_with_sep = format!("{}{}", self.prefix, self.separator);
        let mut properties = PropertySet::new();

        for (key, value) in vars {
            if let Some(path_str) = key.strip_prefix(&prefix_with_sep) {
                if path_str.is_empty() {
                    continue;
                }

                let key: Vec<String> = path_str
                    .split(&self.separator)
                    .map(|s| s.to_lowercase())
                    .collect();

                properties.insert(key.join("."), value);
            }
        }

        Ok(properties)
    }
}

impl ConfigSource for EnvSource {
    fn properties(&self) -> Result<PropertySet, ConfigError> {
        self.collect(std::env::vars())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_maps_segments_to_dotted_keys() {
        let source = EnvSource::new("APP", "__");
        let properties = source
            .collect(vars(&[
                ("APP__EMAIL__HOST", "smtp"),
                ("APP__SMS__1", "+100"),
                ("APP__", "ignored"),
                ("OTHER__EMAIL__HOST", "nope"),
            ]))
            .unwrap();

        assert_eq!(properties.get("email.host"), Some("smtp"));
        assert_eq!(properties.get("sms.1"), Some("+100"));
        assert_eq!(properties.len(), 2);
    }

    #[test]
    fn test_empty_separator_rejected() {
        let source = EnvSource::new("APP", "");
        let result = source.collect(vars(&[("APP_X", "1")]));

        assert!(matches!(result, Err(ConfigError::EmptySeparator(_))));
    }
}
