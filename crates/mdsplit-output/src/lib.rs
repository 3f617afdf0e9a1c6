//! Output derivation for mdsplit.
//!
//! Maps chapters produced by `mdsplit-split` to sanitized directories and
//! file names under an output root, detects same-name merges, accumulates
//! the optional table of contents, and persists everything through an
//! encoding-aware filesystem sink.

#![warn(missing_docs)]

mod error;
mod filename;
mod resolve;
mod sink;
mod toc;

pub use error::OutputError;
pub use filename::sanitize;
pub use resolve::{HeadingTitle, PathResolver, ResolvedTarget, TitleToFilename};
pub use sink::{FsSink, OutputSink};
pub use toc::TocBuilder;
