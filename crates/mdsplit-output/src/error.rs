//! Error types for output derivation and writing.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when deriving or writing output files.
#[derive(Debug, Error)]
pub enum OutputError {
    /// A heading title or fallback name sanitized to nothing usable.
    #[error("could not derive file name from '{name}'")]
    InvalidName {
        /// The name that could not be sanitized.
        name: String,
    },

    /// A filesystem operation on an output path failed.
    #[error("failed to write {path}: {source}")]
    Write {
        /// The path that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}
