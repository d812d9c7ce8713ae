use crate::config::ConfigError;
use crate::properties::PropertiesError;
use crate::template::TemplateError;
use thiserror::Error;

/// Top-level error type for the dragon-render library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("property error: {0}")]
    Properties(#[from] PropertiesError),

    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    #[error("no template configured for rendering")]
    MissingTemplate,
}
