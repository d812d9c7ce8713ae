use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TemplateError {
    #[error("template path must not be blank")]
    BlankPath,

    #[error("failed to read template '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("placeholder {0} marker must not be empty")]
    EmptyMarker(&'static str),
}
