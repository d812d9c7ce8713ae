use toml::{Table, Value};

use super::ConfigError;
use crate::properties::PropertySet;

/// A layer of configuration properties.
pub trait ConfigSource: Send + Sync + std::fmt::Debug {
    /// The layer as flat string properties.
    fn properties(&self) -> Result<PropertySet, ConfigError>;

    /// The layer as a nested table, used for typed deserialization.
    ///
    /// Untyped layers are expanded from [`properties`](Self::properties) with
    /// scalar coercion. Typed layers (TOML files) override this to keep their
    /// own value types.
    fn table(&self) -> Result<Table, ConfigError> {
        Ok(expand(&self.properties()?))
    }
}

/// Properties supplied directly by the caller, typically defaults.
#[derive(Debug, Clone, Default)]
pub struct StaticSource(pub PropertySet);

impl ConfigSource for StaticSource {
    fn properties(&self) -> Result<PropertySet, ConfigError> {
        Ok(self.0.clone())
    }
}

/// Expands dotted keys into nested tables.
///
/// `mail.smtp.port = 25` becomes `[mail.smtp] port = 25`. Values are coerced
/// to the most specific scalar type. When a key is both a value and a parent
/// (`mail` and `mail.host`), the table wins since the parent sorts first.
pub fn expand(properties: &PropertySet) -> Table {
    let mut table = Table::new();
    for (key, value) in properties.iter() {
        let path: Vec<String> = key.split('.').map(str::to_string).collect();
        merge_at_path(&mut table, &path, coerce_value(value));
    }
    table
}

fn merge_at_path(table: &mut Table, path: &[String], value: Value) {
    let Some((first, rest)) = path.split_first() else {
        return;
    };

    if rest.is_empty() {
        match table.get(first) {
            Some(Value::Table(_)) => {}
            _ => {
                table.insert(first.clone(), value);
            }
        }
        return;
    }

    if !matches!(table.get(first), Some(Value::Table(_))) {
        table.insert(first.clone(), Value::Table(Table::new()));
    }

    if let Some(Value::Table(nested)) = table.get_mut(first) {
        merge_at_path(nested, rest, value);
    }
}

/// Merges `overlay` into `base`. Nested tables are merged recursively; other
/// values (including arrays) are replaced entirely.
pub fn deep_merge(base: &mut Table, overlay: Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(Value::Table(base_table)), Value::Table(overlay_table)) => {
                deep_merge(base_table, overlay_table);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

/// Flattens a TOML table into dotted keys.
///
/// Arrays become numbered children starting at 1, the same shape
/// [`extract_indexed`](crate::properties::extract_indexed) collects.
pub fn flatten_table(table: &Table) -> PropertySet {
    let mut properties = PropertySet::new();
    for (key, value) in table {
        flatten_value(key, value, &mut properties);
    }
    properties
}

fn flatten_value(key: &str, value: &Value, out: &mut PropertySet) {
    match value {
        Value::Table(t) => {
            for (child, v) in t {
                flatten_value(&format!("{key}.{child}"), v, out);
            }
        }
        Value::Array(items) => {
            for (i, v) in items.iter().enumerate() {
                flatten_value(&format!("{key}.{}", i + 1), v, out);
            }
        }
        Value::String(s) => {
            out.insert(key, s.clone());
        }
        Value::Integer(i) => {
            out.insert(key, i.to_string());
        }
        Value::Float(f) => {
            out.insert(key, f.to_string());
        }
        Value::Boolean(b) => {
            out.insert(key, b.to_string());
        }
        Value::Datetime(dt) => {
            out.insert(key, dt.to_string());
        }
    }
}

fn coerce_value(s: &str) -> Value {
    // Try boolean first (case-insensitive)
    if s.eq_ignore_ascii_case("true") {
        return Value::Boolean(true);
    }
    if s.eq_ignore_ascii_case("false") {
        return Value::Boolean(false);
    }

    if looks_like_integer(s) {
        if let Ok(i) = s.parse::<i64>() {
            return Value::Integer(i);
        }
    }

    if s.contains('.') {
        if let Ok(f) = s.parse::<f64>() {
            return Value::Float(f);
        }
    }

    Value::String(s.to_string())
}

fn looks_like_integer(s: &str) -> bool {
    let s = s.strip_prefix('-').unwrap_or(s);
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}
