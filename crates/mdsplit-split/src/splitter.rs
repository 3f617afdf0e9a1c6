//! The chapter-boundary state machine.
//!
//! [`split`] consumes a lazy stream of raw lines and yields chapters in
//! document order. Processing is a single pass with no lookahead: each
//! line either extends the open chapter or closes it and opens the next.

use std::{io, mem};

use crate::{Heading, Hierarchy, Line, SplitError};

/// A maximal run of lines belonging to one heading (or the preamble).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    /// Titles of the still-open ancestor headings, shallowest first.
    pub parents: Vec<String>,
    /// The chapter's own heading; `None` for the preamble.
    pub heading: Option<Heading>,
    /// The raw lines of the chapter, its heading line first when present.
    pub lines: Vec<String>,
}

impl Chapter {
    /// Renders the chapter back to text: lines joined with `\n` plus one
    /// trailing newline.
    ///
    /// Concatenating the text of every chapter of a document, in emission
    /// order, reproduces the document's logical lines. Original CRLF line
    /// endings come back as `\n`.
    pub fn text(&self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

/// Splits a stream of lines into chapters.
///
/// A heading line cuts a boundary when it is not inside a fenced block and
/// its level is at most `max_level`; deeper headings stay embedded in the
/// enclosing chapter. Content before the first qualifying heading becomes
/// a preamble chapter without a heading.
pub fn split<I>(lines: I, max_level: usize) -> ChapterSplitter<I::IntoIter>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    ChapterSplitter {
        lines: lines.into_iter(),
        max_level,
        inside_fence: false,
        current_heading: None,
        buffer: Vec::new(),
        hierarchy: Hierarchy::new(),
        finished: false,
    }
}

/// Lazy iterator over the chapters of one document.
///
/// Created by [`split`]. Yields at least one chapter for any input,
/// including the empty one.
#[derive(Debug)]
pub struct ChapterSplitter<I> {
    /// The line source.
    lines: I,
    /// Maximum heading level that cuts a boundary.
    max_level: usize,
    /// Whether the cursor is inside a fenced block.
    inside_fence: bool,
    /// The heading owning the buffered lines, if any.
    current_heading: Option<Heading>,
    /// Raw lines of the chapter currently being collected.
    buffer: Vec<String>,
    /// Ancestor titles committed so far.
    hierarchy: Hierarchy,
    /// Whether the terminal chapter has been emitted.
    finished: bool,
}

impl<I> ChapterSplitter<I> {
    /// Closes the open chapter: builds it from the buffered lines and
    /// commits its heading to the hierarchy.
    fn take_chapter(&mut self) -> Chapter {
        let heading = self.current_heading.take();
        let level = heading.as_ref().map_or(0, |h| h.level);
        let parents = self.hierarchy.parents_for(level);
        if let Some(heading) = &heading {
            self.hierarchy.commit(heading.level, &heading.title);
        }
        Chapter {
            parents,
            heading,
            lines: mem::take(&mut self.buffer),
        }
    }
}

impl<I> Iterator for ChapterSplitter<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    type Item = Result<Chapter, SplitError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let Some(next) = self.lines.next() else {
                // Terminal emission: whatever remains, even when empty.
                self.finished = true;
                return Some(Ok(self.take_chapter()));
            };

            let line = match next {
                Ok(text) => Line::classify(text),
                Err(source) => {
                    self.finished = true;
                    return Some(Err(SplitError::Read { source }));
                }
            };

            if line.is_fence() {
                self.inside_fence = !self.inside_fence;
            }

            let boundary = !self.inside_fence
                && line.heading().is_some_and(|h| h.level <= self.max_level);

            if boundary {
                let emitted = (!self.buffer.is_empty()).then(|| self.take_chapter());
                self.current_heading = line.heading().cloned();
                self.buffer.push(line.into_text());
                if let Some(chapter) = emitted {
                    return Some(Ok(chapter));
                }
            } else {
                self.buffer.push(line.into_text());
            }
        }
    }
}
