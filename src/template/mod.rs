//! Template loading and placeholder substitution.

mod error;
mod loader;
mod substitute;

pub use error::TemplateError;
pub use loader::{TemplateLoader, LINE_SEPARATOR};
pub use substitute::{substitute, Markers, Substitutor};
