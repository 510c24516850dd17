use std::io;
use std::path::Path;

use crate::error::GloxError;

/// Read a script file as UTF-8 text.
///
/// A missing file is reported as [`GloxError::FileNotFound`] so the caller can
/// give it its own exit code; every other failure is [`GloxError::Io`].
#[tracing::instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn read_source(path: &Path) -> Result<String, GloxError> {
    match std::fs::read_to_string(path) {
        Ok(text) => {
            tracing::debug!(bytes = text.len(), "read source");
            Ok(text)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(GloxError::FileNotFound {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(GloxError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}
