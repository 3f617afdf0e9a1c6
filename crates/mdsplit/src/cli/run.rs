//! The split run driver: stdin, file, and directory modes.

use std::{
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};

use encoding_rs::Encoding;
use mdsplit_output::{FsSink, OutputSink, PathResolver, TocBuilder};
use mdsplit_split::split;
use serde::Serialize;
use walkdir::WalkDir;

use crate::{
    cli::args::{Args, STDIN_INPUT},
    error::RunError,
    source::LineSource,
};

/// Default output folder for stdin input, and the suffix appended to a
/// directory input's name.
const DIR_SUFFIX: &str = "_split";

/// Fallback document name when reading from stdin.
const STDIN_NAME: &str = "stdin";

/// File name of the generated table of contents.
const TOC_FILENAME: &str = "toc.md";

/// Counters reported at the end of a run.
#[derive(Debug, Default, Serialize)]
pub struct Stats {
    /// Number of input documents processed.
    pub in_files: usize,
    /// Number of chapters extracted across all documents.
    pub chapters: usize,
    /// Number of distinct output files created.
    pub new_out_files: usize,
}

/// Executes one `mdsplit` invocation and returns its statistics.
pub fn run(args: &Args) -> Result<Stats, RunError> {
    let encoding = resolve_encoding(args.encoding.as_deref())?;
    let mut driver = Driver {
        args,
        encoding,
        sink: FsSink::new(encoding),
        stats: Stats::default(),
    };

    if args.input == STDIN_INPUT {
        let out_root = args
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DIR_SUFFIX));
        driver.check_out_root(&out_root)?;
        if args.verbose {
            println!("Processing stdin");
        }
        let stdin = io::stdin();
        let lines = LineSource::new(stdin.lock(), encoding);
        driver.process_stream(lines, STDIN_NAME, &out_root)?;
    } else {
        let input = Path::new(&args.input);
        if !driver.sink.exists(input) {
            return Err(RunError::InputNotFound {
                path: input.to_path_buf(),
            });
        }

        if driver.sink.is_dir(input) {
            let out_root = args
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(format!("{}{DIR_SUFFIX}", base_name(input))));
            driver.check_out_root(&out_root)?;
            driver.process_directory(input, &out_root)?;
        } else {
            let out_root = args
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(base_name(input)));
            driver.check_out_root(&out_root)?;
            driver.process_file(input, &out_root)?;
        }
    }

    Ok(driver.stats)
}

/// Prints the end-of-run summary.
pub fn report(args: &Args, stats: &Stats) {
    if args.json {
        let json = serde_json::to_string_pretty(stats).expect("stats serialize to JSON");
        println!("{json}");
    } else {
        println!("Number of input files: {}", stats.in_files);
        println!("Number of extracted chapters: {}", stats.chapters);
        println!("Number of new output files: {}", stats.new_out_files);
    }
}

/// Resolves an encoding label, defaulting to UTF-8.
fn resolve_encoding(label: Option<&str>) -> Result<&'static Encoding, RunError> {
    match label {
        None => Ok(encoding_rs::UTF_8),
        Some(label) => {
            Encoding::for_label(label.as_bytes()).ok_or_else(|| RunError::UnknownEncoding {
                label: label.to_string(),
            })
        }
    }
}

/// Returns a path's file name without its extension, for deriving output
/// folder and fallback names.
fn base_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| STDIN_NAME.to_string())
}

/// Run state shared by all documents of one invocation.
struct Driver<'a> {
    /// The parsed CLI options.
    args: &'a Args,
    /// Input text encoding.
    encoding: &'static Encoding,
    /// Output writer, encoding text the same way.
    sink: FsSink,
    /// Accumulated counters.
    stats: Stats,
}

impl Driver<'_> {
    /// Rejects a pre-existing output directory unless `--force` is set.
    fn check_out_root(&self, out_root: &Path) -> Result<(), RunError> {
        if self.sink.is_dir(out_root) {
            if !self.args.force {
                return Err(RunError::OutputExists {
                    path: out_root.to_path_buf(),
                });
            }
            println!(
                "Warning: writing output to existing directory '{}'",
                out_root.display()
            );
        }
        Ok(())
    }

    /// Splits every `.md` file under `in_dir`, mirroring its directory
    /// structure below `out_root`.
    ///
    /// The walk is strictly sequential and depth-first so that merge
    /// detection for one document always sees the writes of the previous
    /// one.
    fn process_directory(&mut self, in_dir: &Path, out_root: &Path) -> Result<(), RunError> {
        for entry in WalkDir::new(in_dir).follow_links(false).sort_by_file_name() {
            let entry = entry.map_err(|source| RunError::Walk { source })?;
            let rel = match entry.path().strip_prefix(in_dir) {
                Ok(rel) => rel,
                Err(_) => continue,
            };
            if rel.as_os_str().is_empty() {
                continue;
            }

            if entry.file_type().is_dir() {
                self.sink.ensure_dir(&out_root.join(rel))?;
            } else if entry.file_type().is_file()
                && rel.extension().and_then(|e| e.to_str()) == Some("md")
            {
                let doc_out = out_root.join(rel.with_extension(""));
                self.process_file(entry.path(), &doc_out)?;
            }
        }
        Ok(())
    }

    /// Splits a single markdown file into `out_root`.
    fn process_file(&mut self, path: &Path, out_root: &Path) -> Result<(), RunError> {
        if self.args.verbose {
            println!("Processing file: {}", path.display());
        }

        let file = File::open(path).map_err(|source| RunError::ReadInput {
            path: path.to_path_buf(),
            source,
        })?;
        let lines = LineSource::new(BufReader::new(file), self.encoding);
        self.process_stream(lines, &base_name(path), out_root)
    }

    /// Splits one document from a line stream into `out_root`.
    ///
    /// Each chapter is appended to its resolved file (chapters resolving
    /// to the same file merge in encounter order), and a table of
    /// contents is written when requested.
    fn process_stream<I>(
        &mut self,
        lines: I,
        fallback: &str,
        out_root: &Path,
    ) -> Result<(), RunError>
    where
        I: Iterator<Item = io::Result<String>>,
    {
        if self.args.verbose {
            println!("Create output folder '{}'", out_root.display());
        }
        self.stats.in_files += 1;

        let mut resolver = PathResolver::new(out_root);
        let mut toc = TocBuilder::new();

        for chapter in split(lines, self.args.max_level) {
            let chapter = chapter?;
            self.stats.chapters += 1;

            let target = resolver.resolve(&chapter, fallback)?;
            self.sink.ensure_dir(&target.dir)?;

            if self.args.verbose {
                println!(
                    "Write {} lines to '{}'",
                    chapter.lines.len(),
                    target.path.display()
                );
            }

            if target.is_new {
                self.stats.new_out_files += 1;
                let rel = target.path.strip_prefix(out_root).unwrap_or(&target.path);
                toc.record(&chapter, rel, fallback);
            }

            self.sink.append_text(&target.path, &chapter.text())?;
        }

        if self.args.toc {
            let toc_path = out_root.join(TOC_FILENAME);
            self.sink.write_text(&toc_path, &toc.finalize())?;
            self.stats.new_out_files += 1;
            if self.args.verbose {
                println!("Write table of contents to {}", toc_path.display());
            }
        }

        Ok(())
    }
}
