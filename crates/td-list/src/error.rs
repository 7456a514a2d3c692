// error.rs: Error types for the goal list engine.

use std::path::Path;

use thiserror::Error;

/// Errors that can occur while loading, decoding, or persisting a goal list.
#[derive(Debug, Error)]
pub enum ListError {
    /// A file I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    IoError {
        path: String,
        source: std::io::Error,
    },

    /// A persisted line carries neither the `[ ]` nor the `[x]` marker.
    #[error("malformed line {line_number}: {line:?} has no status marker")]
    MalformedLine { line_number: usize, line: String },

    /// The configuration file could not be parsed.
    #[error("invalid config at {path}: {message}")]
    ConfigError { path: String, message: String },

    /// No home directory could be resolved for the list files.
    #[error("could not determine a home directory; set TODO_HOME")]
    NoHomeDir,
}

impl ListError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        ListError::IoError {
            path: path.display().to_string(),
            source,
        }
    }
}
