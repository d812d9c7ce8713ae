use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PropertiesError {
    #[error("property prefix must not be empty")]
    InvalidPrefix,
}
