//! File-based configuration source.

use std::path::{Path, PathBuf};

use toml::Table;

use super::source::{expand, flatten_table, ConfigSource};
use super::ConfigError;
use crate::properties::PropertySet;

/// A configuration source that loads a properties or TOML file.
///
/// Files ending in `.toml` are parsed as TOML and flattened to dotted keys;
/// anything else is read as `key=value` lines.
///
/// Files can be marked as required or optional. Required files that don't exist
/// cause an error; optional files that don't exist are silently skipped.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    required: bool,
}

impl FileSource {
    /// Creates a new file source.
    ///
    /// If `required` is true, the build will fail if the file doesn't exist.
    pub fn new(path: impl AsRef<Path>, required: bool) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            required,
        }
    }
}

impl ConfigSource for FileSource {
    fn properties(&self) -> Result<PropertySet, ConfigError> {
        Ok(match load_config_file(&self.path, self.required)? {
            Some(Loaded::Toml(table)) => flatten_table(&table),
            Some(Loaded::Properties(properties)) => properties,
            None => PropertySet::new(),
        })
    }

    fn table(&self) -> Result<Table, ConfigError> {
        Ok(match load_config_file(&self.path, self.required)? {
            Some(Loaded::Toml(table)) => table,
            Some(Loaded::Properties(properties)) => expand(&properties),
            None => Table::new(),
        })
    }
}

/// A parsed config file. TOML keeps its value types; properties files are
/// plain strings.
enum Loaded {
    Toml(Table),
    Properties(PropertySet),
}

/// Loads and parses a config file.
///
/// Returns `Ok(None)` if the file doesn't exist and `required` is false.
fn load_config_file(path: &Path, required: bool) -> Result<Option<Loaded>, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => {
            if is_toml(path) {
                let table = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                    path: path.to_path_buf(),
                    source: e,
                })?;
                Ok(Some(Loaded::Toml(table)))
            } else {
                Ok(Some(Loaded::Properties(parse_properties(&contents))))
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            if required {
                Err(ConfigError::FileNotFound(path.to_path_buf()))
            } else {
                Ok(None)
            }
        }
        Err(e) => Err(ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}

/// Parses `key=value` lines.
///
/// Blank lines and lines starting with `#` or `!` are skipped. The key ends at
/// the first `=` or `:`; a line with neither is a key with an empty value.
/// Surrounding whitespace is trimmed from keys and values.
pub fn parse_properties(contents: &str) -> PropertySet {
    let mut properties = PropertySet::new();

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }

        let (key, value) = match line.find(|c: char| c == '=' || c == ':') {
            Some(pos) => (&line[..pos], &line[pos + 1..]),
            None => (line, ""),
        };
        properties.insert(key.trim(), value.trim());
    }

    properties
}
