pub mod config;
mod error;
pub mod logging;
pub mod properties;
pub mod render;
pub mod template;

pub use config::{Config, ConfigError};
pub use error::Error;
pub use logging::{LogFacade, Logger, MemoryLogger};
pub use properties::{
    extract_indexed, filter_by_prefix, flatten, Extraction, Prefix, PropertiesError, PropertySet,
};
pub use render::{RenderSettings, Rendered, Renderer};
pub use template::{substitute, Markers, Substitutor, TemplateError, TemplateLoader};
