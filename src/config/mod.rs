//! Configuration loading and management.

mod builder;
mod env;
mod error;
mod file;
mod source;

pub use builder::Config;
pub use env::EnvSource;
pub use error::ConfigError;
pub use file::{parse_properties, FileSource};
pub use source::{ConfigSource, StaticSource};
