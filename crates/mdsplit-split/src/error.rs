//! Error types for chapter splitting.

use std::io;

use thiserror::Error;

/// Errors that can occur while splitting a document into chapters.
#[derive(Debug, Error)]
pub enum SplitError {
    /// Failed to read a line from the input source.
    #[error("failed to read input: {source}")]
    Read {
        /// Underlying I/O error.
        source: io::Error,
    },
}
