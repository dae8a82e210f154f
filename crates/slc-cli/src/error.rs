//! Error types for the SLC command-line tool.

use std::{io, path::PathBuf};

use thiserror::Error;

use slc_parser::error::Diagnostic;

use crate::config::ConfigError;

/// The main error type for CLI operations.
///
/// The `Parse` variant keeps the source text next to the diagnostic so the
/// error can be rendered with a snippet of the offending code.
#[derive(Debug, Error)]
pub enum SlcError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{diagnostic}")]
    Parse { diagnostic: Diagnostic, src: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("File already exists: {0}")]
    AlreadyExists(PathBuf),
}

impl SlcError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(diagnostic: Diagnostic, src: impl Into<String>) -> Self {
        Self::Parse {
            diagnostic,
            src: src.into(),
        }
    }
}
