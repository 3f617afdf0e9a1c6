//! Encoding-aware line reading.
//!
//! Reads raw bytes up to each `\n`, normalizes CRLF and LF endings to one
//! logical line, and decodes with the selected encoding. Reading is lazy:
//! one line is pulled from the underlying reader per iteration.

use std::io::{self, BufRead};

use encoding_rs::Encoding;

/// Lazy iterator over the decoded lines of a byte stream.
#[derive(Debug)]
pub struct LineSource<R> {
    /// The underlying byte reader.
    reader: R,
    /// Encoding used to decode each line.
    encoding: &'static Encoding,
    /// Whether the next line is the first of the stream.
    first: bool,
}

impl<R: BufRead> LineSource<R> {
    /// Creates a line source decoding `reader` with `encoding`.
    pub fn new(reader: R, encoding: &'static Encoding) -> Self {
        Self {
            reader,
            encoding,
            first: true,
        }
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut bytes = Vec::new();
        match self.reader.read_until(b'\n', &mut bytes) {
            Ok(0) => None,
            Ok(_) => {
                if bytes.last() == Some(&b'\n') {
                    bytes.pop();
                    if bytes.last() == Some(&b'\r') {
                        bytes.pop();
                    }
                }
                let (text, _) = self.encoding.decode_without_bom_handling(&bytes);
                let mut text = text.into_owned();
                // Drop a byte-order mark at the very start of the stream.
                if self.first {
                    self.first = false;
                    if let Some(stripped) = text.strip_prefix('\u{feff}') {
                        text = stripped.to_string();
                    }
                }
                Some(Ok(text))
            }
            Err(e) => Some(Err(e)),
        }
    }
}
