//! Unified error types for the varspec toolkit.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur during varspec operations.
#[derive(Error, Debug)]
pub enum VarSpecError {
    // --- Layout ---

    /// A wrap width of zero was requested. Every layout operation needs at
    /// least one column to place text in.
    #[error("wrap width must be at least 1 column, got {0}")]
    InvalidWidth(usize),

    /// A hanging indent would leave no room for text on continuation lines.
    #[error("hanging indent of {indent} leaves no room within a width of {width} (indent must be less than width)")]
    IndentTooWide { indent: usize, width: usize },

    // --- Templates ---

    /// Handlebars template rendering failed (invalid template or missing variables).
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    // --- Spec files ---

    /// Checking whether the target path exists failed (e.g. permission denied).
    #[error("failed to stat {path:?}")]
    StatFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Refused to overwrite an existing specification file.
    #[error("file {0:?} already exists")]
    FileExists(PathBuf),

    /// Writing the specification file failed.
    #[error("failed to write {path:?}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Alias for `Result<T, VarSpecError>`.
pub type Result<T> = std::result::Result<T, VarSpecError>;
