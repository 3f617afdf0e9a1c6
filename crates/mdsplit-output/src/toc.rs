//! Table-of-contents accumulation.

use std::path::Path;

use mdsplit_split::Chapter;

/// Heading line the finished table of contents starts with.
const TOC_HEADING: &str = "# Table of Contents\n";

/// Accumulates one nested-list entry per newly created chapter file.
///
/// Entries are indented by the chapter's ancestor count and link to the
/// file relative to the output root. Link targets are wrapped in angle
/// brackets so titles with spaces stay valid markdown. Merged chapters
/// get no second entry; the caller only records targets that were new.
#[derive(Debug, Default)]
pub struct TocBuilder {
    /// The accumulated list entries.
    entries: String,
}

impl TocBuilder {
    /// Creates an empty table of contents.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an entry for a chapter written to `rel_path`, which must be
    /// relative to the output root.
    ///
    /// The display title is the chapter's heading title, or for the
    /// preamble the fallback name with any `.md` suffix stripped.
    pub fn record(&mut self, chapter: &Chapter, rel_path: &Path, fallback: &str) {
        let indent = "  ".repeat(chapter.parents.len());
        let title = match &chapter.heading {
            Some(heading) => heading.title.as_str(),
            None => strip_md_suffix(fallback),
        };
        self.entries.push_str(&format!(
            "\n{indent}- [{title}](<./{}>)",
            rel_path.display()
        ));
    }

    /// Returns the finished table-of-contents text.
    pub fn finalize(self) -> String {
        let mut toc = String::from(TOC_HEADING);
        toc.push_str(&self.entries);
        toc
    }
}

/// Strips a `.md` suffix from a fallback name for display.
fn strip_md_suffix(name: &str) -> &str {
    name.strip_suffix(".md").unwrap_or(name)
}
