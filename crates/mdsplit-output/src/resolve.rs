//! Chapter-to-path resolution and merge detection.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use mdsplit_split::Chapter;

use crate::{OutputError, filename::sanitize};

/// Derives a chapter's output file name (without extension).
///
/// This is the seam for customizing how files are named: the resolver is
/// constructed with one strategy and applies it to every chapter.
pub trait TitleToFilename {
    /// Returns the file name body for `chapter`, with `fallback` standing
    /// in for the heading-less preamble.
    fn filename(&self, chapter: &Chapter, fallback: &str) -> Result<String, OutputError>;
}

/// Default strategy: the sanitized heading title, or the sanitized
/// fallback name for the preamble.
#[derive(Debug, Default)]
pub struct HeadingTitle;

impl TitleToFilename for HeadingTitle {
    fn filename(&self, chapter: &Chapter, fallback: &str) -> Result<String, OutputError> {
        match &chapter.heading {
            Some(heading) => sanitize(&heading.title),
            None => sanitize(fallback),
        }
    }
}

/// The output location resolved for one chapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    /// Directory the chapter file lives in.
    pub dir: PathBuf,
    /// Full path of the chapter file.
    pub path: PathBuf,
    /// Whether this run produced the path for the first time. A repeat
    /// resolution is a merge: the caller appends and records no new
    /// table-of-contents entry.
    pub is_new: bool,
}

/// Maps chapters to output paths under one output root.
///
/// The directory is the root joined with the sanitized ancestor titles in
/// order; the file is the naming strategy's result plus the `.md`
/// extension. The resolver remembers every path it has produced, so
/// chapters with the same heading name at the same ancestor path share a
/// file. One resolver lives per output root.
pub struct PathResolver {
    /// The output root all targets live under.
    root: PathBuf,
    /// The filename strategy.
    naming: Box<dyn TitleToFilename>,
    /// Every file path produced so far.
    seen: HashSet<PathBuf>,
}

impl PathResolver {
    /// Creates a resolver over `root` with the [`HeadingTitle`] strategy.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_naming(root, Box::new(HeadingTitle))
    }

    /// Creates a resolver over `root` with a custom filename strategy.
    pub fn with_naming(root: impl Into<PathBuf>, naming: Box<dyn TitleToFilename>) -> Self {
        Self {
            root: root.into(),
            naming,
            seen: HashSet::new(),
        }
    }

    /// Returns the output root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves the directory and file a chapter is written to.
    ///
    /// Preamble and top-level chapters resolve directly under the root.
    pub fn resolve(
        &mut self,
        chapter: &Chapter,
        fallback: &str,
    ) -> Result<ResolvedTarget, OutputError> {
        let mut dir = self.root.clone();
        for parent in &chapter.parents {
            dir.push(sanitize(parent)?);
        }

        let name = self.naming.filename(chapter, fallback)?;
        let path = dir.join(format!("{name}.md"));
        let is_new = self.seen.insert(path.clone());

        Ok(ResolvedTarget { dir, path, is_new })
    }
}
