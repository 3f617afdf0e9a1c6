//! Error types for the mdsplit run driver.

use std::{io, path::PathBuf};

use mdsplit_output::OutputError;
use mdsplit_split::SplitError;
use thiserror::Error;

/// Fatal errors that abort a split run.
///
/// There is no retry and no partial-success mode: files already written
/// when an error occurs stay on disk, but the run reports failure.
#[derive(Debug, Error)]
pub enum RunError {
    /// The input path does not exist.
    #[error("input file/directory '{path}' does not exist")]
    InputNotFound {
        /// The missing input path.
        path: PathBuf,
    },

    /// The output directory exists and overwriting was not forced.
    #[error("output directory '{path}' already exists (use --force to write into it)")]
    OutputExists {
        /// The pre-existing output directory.
        path: PathBuf,
    },

    /// The requested encoding label is not recognized.
    #[error("unknown encoding label '{label}'")]
    UnknownEncoding {
        /// The unrecognized label.
        label: String,
    },

    /// An input file could not be opened.
    #[error("failed to read input {path}: {source}")]
    ReadInput {
        /// The unreadable input file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Walking the input directory failed.
    #[error("failed to walk input directory: {source}")]
    Walk {
        /// Underlying traversal error.
        source: walkdir::Error,
    },

    /// Reading from the line source failed mid-document.
    #[error(transparent)]
    Split(#[from] SplitError),

    /// Deriving or writing an output file failed.
    #[error(transparent)]
    Output(#[from] OutputError),
}
