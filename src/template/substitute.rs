//! Placeholder substitution.

use std::sync::Arc;

use super::TemplateError;
use crate::logging::{default_logger, Level, Logger};
use crate::properties::PropertySet;

/// The start and end markers delimiting a placeholder, e.g. `${` and `}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    start: String,
    end: String,
}

impl Markers {
    /// Creates a marker pair. Neither marker may be empty.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Result<Self, TemplateError> {
        let start = start.into();
        let end = end.into();
        if start.is_empty() {
            return Err(TemplateError::EmptyMarker("start"));
        }
        if end.is_empty() {
            return Err(TemplateError::EmptyMarker("end"));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    /// Returns the placeholder token for `key`.
    pub fn placeholder(&self, key: &str) -> String {
        format!("{}{}{}", self.start, key, self.end)
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            start: "${".to_string(),
            end: "}".to_string(),
        }
    }
}

/// Replaces every placeholder in `template` that names a key of `properties`.
///
/// Keys are applied one after another in lexicographic order, each working on
/// the output of the previous one, and every occurrence of a key's
/// placeholder is replaced. Replacement is literal: neither keys nor values
/// are interpreted as patterns. A value that itself contains a placeholder for
/// a later key will be expanded by that key.
///
/// Placeholders without a matching property are left untouched. If the start
/// marker does not occur at all, the template is returned as is.
pub fn substitute(template: &str, markers: &Markers, properties: &PropertySet) -> String {
    if !template.contains(markers.start()) {
        return template.to_string();
    }
    replace_all(template, markers, properties)
}

fn replace_all(template: &str, markers: &Markers, properties: &PropertySet) -> String {
    properties
        .iter()
        .fold(template.to_string(), |content, (key, value)| {
            content.replace(&markers.placeholder(key), value)
        })
}

/// [`substitute`] bound to a marker pair and a [`Logger`].
#[derive(Debug, Clone)]
pub struct Substitutor {
    markers: Markers,
    logger: Arc<dyn Logger>,
}

impl Substitutor {
    pub fn new(markers: Markers) -> Self {
        Self {
            markers,
            logger: default_logger(),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    pub fn substitute(&self, template: &str, properties: &PropertySet) -> String {
        if self.logger.enabled(Level::Debug) {
            self.logger
                .debug(&format!("replacing placeholders of template: {template}"));
        }

        if !template.contains(self.markers.start()) {
            self.logger.debug("no placeholders found to replace");
            return template.to_string();
        }

        replace_all(template, &self.markers, properties)
    }
}
