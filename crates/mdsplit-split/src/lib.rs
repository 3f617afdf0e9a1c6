//! Streaming chapter splitting for markdown documents.
//!
//! This crate turns a lazy stream of raw lines into a lazy stream of
//! chapters. Lines are classified as they arrive (fence marker, ATX
//! heading, plain text), heading ancestry is tracked per level, and a
//! chapter boundary is cut at every heading up to a configured depth.
//! Chapters carry their raw lines untouched, so concatenating the emitted
//! chapters reproduces the input line for line.

#![warn(missing_docs)]

mod error;
mod hierarchy;
mod line;
mod splitter;

pub use error::SplitError;
pub use hierarchy::Hierarchy;
pub use line::{Heading, Line, MAX_HEADING_LEVEL};
pub use splitter::{Chapter, ChapterSplitter, split};
