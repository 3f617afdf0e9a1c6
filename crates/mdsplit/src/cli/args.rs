//! Clap argument definitions for the `mdsplit` CLI.

use std::path::PathBuf;

use clap::Parser;
use mdsplit_split::MAX_HEADING_LEVEL;

/// Input value meaning "read from stdin".
pub const STDIN_INPUT: &str = "-";

/// Extended help shown below the option list.
const AFTER_HELP: &str = "\
Each chapter (or subchapter) is written to its own file, named after its
heading title, inside subdirectories representing the document structure.

Notes:
  - Code blocks (``` or ~~~) are detected; headings inside are ignored
  - The output text is identical with the input (apart from the
    separation into multiple files); list markers and whitespace are
    never touched
  - Text before the first heading is written to a file named after the
    input document
  - Chapters with the same heading name are appended to the same file
  - Only ATX headings (e.g. # Heading 1) are supported";

/// Top-level CLI options.
#[derive(Parser, Debug)]
#[command(name = "mdsplit")]
#[command(about = "Split markdown files into chapters at a given heading level")]
#[command(after_help = AFTER_HELP)]
pub struct Args {
    /// Path to input file/folder (omit or use '-' to read from stdin)
    #[arg(default_value = STDIN_INPUT)]
    pub input: String,

    /// Force a specific text encoding (e.g. utf-8, windows-1252) [default: utf-8]
    #[arg(short, long)]
    pub encoding: Option<String>,

    /// Maximum heading level to split (1-6)
    #[arg(short = 'l', long = "max-level", default_value_t = 1, value_parser = parse_level)]
    pub max_level: usize,

    /// Generate a table of contents (one toc.md per input file)
    #[arg(short = 't', long = "table-of-contents")]
    pub toc: bool,

    /// Path to output folder (must not exist)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write into the output folder even if it already exists
    #[arg(short, long)]
    pub force: bool,

    /// Print progress for each processed file and chapter
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the run statistics as JSON
    #[arg(long)]
    pub json: bool,
}

/// Parses the split level, accepting only 1 through 6.
fn parse_level(value: &str) -> Result<usize, String> {
    let level: usize = value
        .parse()
        .map_err(|_| format!("invalid heading level '{value}'"))?;
    if (1..=MAX_HEADING_LEVEL).contains(&level) {
        Ok(level)
    } else {
        Err(format!(
            "heading level must be between 1 and {MAX_HEADING_LEVEL}"
        ))
    }
}
