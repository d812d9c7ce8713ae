//! Reads template text from the filesystem.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;

use super::TemplateError;
use crate::logging::{default_logger, Level, Logger};

/// Separator appended after every line read from a template.
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
/// Separator appended after every line read from a template.
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Loads template files, reporting read failures to a [`Logger`].
#[derive(Debug, Clone)]
pub struct TemplateLoader {
    logger: Arc<dyn Logger>,
}

impl Default for TemplateLoader {
    fn default() -> Self {
        Self::new(default_logger())
    }
}

impl TemplateLoader {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self { logger }
    }

    /// Reads the template at `path`.
    ///
    /// The file is split into lines at `\n`, `\r\n` or a lone `\r`, and every
    /// line, the last one included, is terminated with [`LINE_SEPARATOR`]. So
    /// `\r\n` and `\r` endings come out as `\n` on Unix, and a file without a
    /// trailing newline gains one.
    ///
    /// A blank path fails with [`TemplateError::BlankPath`] before anything is
    /// touched. Read failures are logged at error level and returned as
    /// [`TemplateError::Read`]; an empty file is `Ok("")`, never an error.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<String, TemplateError> {
        let path = path.as_ref();
        if path.as_os_str().to_string_lossy().trim().is_empty() {
            return Err(TemplateError::BlankPath);
        }

        if self.logger.enabled(Level::Debug) {
            self.logger
                .debug(&format!("reading template file {}", path.display()));
        }

        read_lines(path).map_err(|source| {
            self.logger.error(&format!(
                "error while reading template {}: {source}",
                path.display()
            ));
            TemplateError::Read {
                path: path.to_path_buf(),
                source,
            }
        })
    }

    /// Like [`load`](Self::load), but absorbs read failures.
    ///
    /// Returns `None` when the file cannot be read; the cause only reaches
    /// the logger. Callers must check for `None` before rendering. A blank
    /// path is still an error.
    pub fn load_or_none(&self, path: impl AsRef<Path>) -> Result<Option<String>, TemplateError> {
        match self.load(path) {
            Ok(text) => Ok(Some(text)),
            Err(TemplateError::Read { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

fn read_lines(path: &Path) -> std::io::Result<String> {
    let mut contents = String::new();
    BufReader::new(File::open(path)?).read_to_string(&mut contents)?;

    let mut template = String::with_capacity(contents.len());
    let mut rest = contents.as_str();

    while !rest.is_empty() {
        match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(pos) => {
                template.push_str(&rest[..pos]);
                template.push_str(LINE_SEPARATOR);
                let terminator = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[pos + terminator..];
            }
            None => {
                template.push_str(rest);
                template.push_str(LINE_SEPARATOR);
                break;
            }
        }
    }

    Ok(template)
}
