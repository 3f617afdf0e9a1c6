//! Filesystem output with caller-selected text encoding.

use std::{fs, io::Write, path::Path};

use encoding_rs::Encoding;

use crate::OutputError;

/// The write operations the split driver needs from its output store.
pub trait OutputSink {
    /// Creates `path` and any missing ancestors; succeeds if it already
    /// exists.
    fn ensure_dir(&self, path: &Path) -> Result<(), OutputError>;

    /// Appends `text` to `path`, creating the file if absent.
    fn append_text(&self, path: &Path, text: &str) -> Result<(), OutputError>;

    /// Overwrites `path` with `text`.
    fn write_text(&self, path: &Path, text: &str) -> Result<(), OutputError>;

    /// Whether `path` exists at all.
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// [`OutputSink`] over the real filesystem.
///
/// Text is encoded with the configured encoding on the way out; the
/// default sink writes UTF-8.
#[derive(Debug, Clone, Copy)]
pub struct FsSink {
    /// Encoding applied to all written text.
    encoding: &'static Encoding,
}

impl FsSink {
    /// Creates a sink writing in `encoding`.
    pub fn new(encoding: &'static Encoding) -> Self {
        Self { encoding }
    }

    /// Encodes `text` for writing.
    fn encode(&self, text: &str) -> Vec<u8> {
        let (bytes, _, _) = self.encoding.encode(text);
        bytes.into_owned()
    }
}

impl Default for FsSink {
    fn default() -> Self {
        Self::new(encoding_rs::UTF_8)
    }
}

impl OutputSink for FsSink {
    fn ensure_dir(&self, path: &Path) -> Result<(), OutputError> {
        fs::create_dir_all(path).map_err(|source| OutputError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    fn append_text(&self, path: &Path, text: &str) -> Result<(), OutputError> {
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| OutputError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        file.write_all(&self.encode(text))
            .map_err(|source| OutputError::Write {
                path: path.to_path_buf(),
                source,
            })
    }

    fn write_text(&self, path: &Path, text: &str) -> Result<(), OutputError> {
        fs::write(path, self.encode(text)).map_err(|source| OutputError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}
