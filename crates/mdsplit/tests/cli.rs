//! CLI integration tests for mdsplit.
//!
//! These tests exercise the binary end to end: input modes, output
//! layout, merge behavior, the table of contents, and exit codes.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;

/// Document used by most tests; three chapters at level 1, four at level 2.
const GUIDE: &str = "Intro\n\n# One\nA\n\n## 1.1\nA1\n\n# Two\nB\n";

/// Helper to create a temp directory for tests.
fn temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().unwrap()
}

/// Helper to get an mdsplit command.
fn mdsplit() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("mdsplit").unwrap()
}

/// Reads an output file to a string.
fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

mod file_input {
    use super::*;

    #[test]
    fn splits_into_chapter_files() {
        let dir = temp_dir();
        fs::write(dir.path().join("guide.md"), GUIDE).unwrap();

        mdsplit()
            .current_dir(dir.path())
            .arg("guide.md")
            .assert()
            .success();

        let out = dir.path().join("guide");
        assert_eq!(read(&out.join("guide.md")), "Intro\n\n");
        assert_eq!(read(&out.join("One.md")), "# One\nA\n\n## 1.1\nA1\n\n");
        assert_eq!(read(&out.join("Two.md")), "# Two\nB\n");
    }

    #[test]
    fn concatenated_output_reproduces_input() {
        let dir = temp_dir();
        fs::write(dir.path().join("guide.md"), GUIDE).unwrap();

        mdsplit()
            .current_dir(dir.path())
            .args(["guide.md", "--max-level", "2"])
            .assert()
            .success();

        let out = dir.path().join("guide");
        let rebuilt = read(&out.join("guide.md"))
            + &read(&out.join("One.md"))
            + &read(&out.join("One/1.1.md"))
            + &read(&out.join("Two.md"));
        assert_eq!(rebuilt, GUIDE);
    }

    #[test]
    fn split_level_controls_boundaries() {
        let dir = temp_dir();
        fs::write(dir.path().join("guide.md"), GUIDE).unwrap();

        mdsplit()
            .current_dir(dir.path())
            .args(["guide.md", "-l", "2"])
            .assert()
            .success();

        let out = dir.path().join("guide");
        // The sub-heading now gets its own file under its parent.
        assert_eq!(read(&out.join("One.md")), "# One\nA\n\n");
        assert_eq!(read(&out.join("One/1.1.md")), "## 1.1\nA1\n\n");
    }

    #[test]
    fn headings_inside_fences_stay_embedded() {
        let dir = temp_dir();
        let content = "# Real\n```\n# not a heading\n```\n";
        fs::write(dir.path().join("doc.md"), content).unwrap();

        mdsplit()
            .current_dir(dir.path())
            .args(["doc.md", "-l", "6"])
            .assert()
            .success();

        assert_eq!(read(&dir.path().join("doc/Real.md")), content);
    }

    #[test]
    fn same_heading_chapters_merge() {
        let dir = temp_dir();
        fs::write(
            dir.path().join("doc.md"),
            "# A\n## Notes\nfirst\n## Notes\nsecond\n",
        )
        .unwrap();

        mdsplit()
            .current_dir(dir.path())
            .args(["doc.md", "-l", "2"])
            .assert()
            .success();

        assert_eq!(
            read(&dir.path().join("doc/A/Notes.md")),
            "## Notes\nfirst\n## Notes\nsecond\n"
        );
    }

    #[test]
    fn output_option_overrides_folder() {
        let dir = temp_dir();
        fs::write(dir.path().join("guide.md"), GUIDE).unwrap();

        mdsplit()
            .current_dir(dir.path())
            .args(["guide.md", "-o", "elsewhere"])
            .assert()
            .success();

        assert!(dir.path().join("elsewhere/One.md").exists());
    }

    #[test]
    fn fails_if_output_directory_exists() {
        let dir = temp_dir();
        fs::write(dir.path().join("guide.md"), GUIDE).unwrap();
        fs::create_dir(dir.path().join("guide")).unwrap();

        mdsplit()
            .current_dir(dir.path())
            .arg("guide.md")
            .assert()
            .failure()
            .stderr(predicate::str::contains("already exists"));
    }

    #[test]
    fn force_writes_into_existing_directory() {
        let dir = temp_dir();
        fs::write(dir.path().join("guide.md"), GUIDE).unwrap();
        fs::create_dir(dir.path().join("guide")).unwrap();

        mdsplit()
            .current_dir(dir.path())
            .args(["guide.md", "--force"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Warning"));

        assert!(dir.path().join("guide/One.md").exists());
    }

    #[test]
    fn missing_input_fails() {
        let dir = temp_dir();

        mdsplit()
            .current_dir(dir.path())
            .arg("no-such-file.md")
            .assert()
            .failure()
            .stderr(predicate::str::contains("does not exist"));
    }

    #[test]
    fn unknown_encoding_fails() {
        let dir = temp_dir();
        fs::write(dir.path().join("guide.md"), GUIDE).unwrap();

        mdsplit()
            .current_dir(dir.path())
            .args(["guide.md", "-e", "klingon-8"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown encoding"));
    }

    #[test]
    fn out_of_range_level_is_rejected() {
        mdsplit().args(["guide.md", "-l", "7"]).assert().failure();
        mdsplit().args(["guide.md", "-l", "0"]).assert().failure();
    }

    #[test]
    fn unusable_heading_title_fails_the_run() {
        let dir = temp_dir();
        fs::write(dir.path().join("doc.md"), "# Good\nbody\n# ???\nbad\n").unwrap();

        mdsplit()
            .current_dir(dir.path())
            .arg("doc.md")
            .assert()
            .failure()
            .stderr(predicate::str::contains("could not derive file name"));

        // Chapters written before the failure remain on disk.
        assert!(dir.path().join("doc/Good.md").exists());
    }

    #[test]
    fn windows_1252_round_trips_through_encoding() {
        let dir = temp_dir();
        fs::write(dir.path().join("latin.md"), b"# Caf\xe9\nbody\n").unwrap();

        mdsplit()
            .current_dir(dir.path())
            .args(["latin.md", "-e", "windows-1252"])
            .assert()
            .success();

        let bytes = fs::read(dir.path().join("latin/Café.md")).unwrap();
        assert_eq!(bytes, b"# Caf\xe9\nbody\n");
    }
}

mod stdin_input {
    use super::*;

    #[test]
    fn splits_stdin_into_default_folder() {
        let dir = temp_dir();

        mdsplit()
            .current_dir(dir.path())
            .write_stdin(GUIDE)
            .assert()
            .success();

        let out = dir.path().join("_split");
        assert_eq!(read(&out.join("stdin.md")), "Intro\n\n");
        assert!(out.join("One.md").exists());
        assert!(out.join("Two.md").exists());
    }

    #[test]
    fn dash_input_reads_stdin() {
        let dir = temp_dir();

        mdsplit()
            .current_dir(dir.path())
            .args(["-", "-o", "out"])
            .write_stdin("# Only\nbody\n")
            .assert()
            .success();

        assert_eq!(read(&dir.path().join("out/Only.md")), "# Only\nbody\n");
    }

    #[test]
    fn empty_stdin_still_produces_the_preamble_file() {
        let dir = temp_dir();

        mdsplit()
            .current_dir(dir.path())
            .args(["-o", "out"])
            .write_stdin("")
            .assert()
            .success();

        assert_eq!(read(&dir.path().join("out/stdin.md")), "\n");
    }
}

mod directory_input {
    use super::*;

    #[test]
    fn mirrors_directory_structure() {
        let dir = temp_dir();
        let docs = dir.path().join("docs");
        fs::create_dir_all(docs.join("nested")).unwrap();
        fs::write(docs.join("a.md"), "# A\nbody\n").unwrap();
        fs::write(docs.join("nested/b.md"), "# B\nbody\n").unwrap();
        fs::write(docs.join("skip.txt"), "plain\n").unwrap();

        mdsplit()
            .current_dir(dir.path())
            .arg("docs")
            .assert()
            .success();

        let out = dir.path().join("docs_split");
        assert!(out.join("a/A.md").exists());
        assert!(out.join("nested/b/B.md").exists());
        assert!(!out.join("skip.txt").exists());
    }

    #[test]
    fn reports_all_input_files() {
        let dir = temp_dir();
        let docs = dir.path().join("docs");
        fs::create_dir_all(&docs).unwrap();
        fs::write(docs.join("a.md"), "# A\n").unwrap();
        fs::write(docs.join("b.md"), "# B\n").unwrap();

        mdsplit()
            .current_dir(dir.path())
            .arg("docs")
            .assert()
            .success()
            .stdout(predicate::str::contains("Number of input files: 2"));
    }
}

mod toc {
    use super::*;

    #[test]
    fn writes_nested_table_of_contents() {
        let dir = temp_dir();
        fs::write(dir.path().join("guide.md"), GUIDE).unwrap();

        mdsplit()
            .current_dir(dir.path())
            .args(["guide.md", "-t", "-l", "2"])
            .assert()
            .success();

        let toc = read(&dir.path().join("guide/toc.md"));
        assert_eq!(
            toc,
            "# Table of Contents\n\
             \n- [guide](<./guide.md>)\
             \n- [One](<./One.md>)\
             \n  - [1.1](<./One/1.1.md>)\
             \n- [Two](<./Two.md>)"
        );
    }

    #[test]
    fn merged_chapters_get_one_entry() {
        let dir = temp_dir();
        fs::write(dir.path().join("doc.md"), "# Notes\nfirst\n# Notes\nsecond\n").unwrap();

        mdsplit()
            .current_dir(dir.path())
            .args(["doc.md", "-t"])
            .assert()
            .success();

        let toc = read(&dir.path().join("doc/toc.md"));
        assert_eq!(toc.matches("[Notes]").count(), 1);
    }

    #[test]
    fn no_toc_file_without_the_flag() {
        let dir = temp_dir();
        fs::write(dir.path().join("guide.md"), GUIDE).unwrap();

        mdsplit()
            .current_dir(dir.path())
            .arg("guide.md")
            .assert()
            .success();

        assert!(!dir.path().join("guide/toc.md").exists());
    }
}

mod reporting {
    use super::*;

    #[test]
    fn prints_summary_counters() {
        let dir = temp_dir();
        fs::write(dir.path().join("guide.md"), GUIDE).unwrap();

        mdsplit()
            .current_dir(dir.path())
            .arg("guide.md")
            .assert()
            .success()
            .stdout(predicate::str::contains("Number of input files: 1"))
            .stdout(predicate::str::contains("Number of extracted chapters: 3"))
            .stdout(predicate::str::contains("Number of new output files: 3"));
    }

    #[test]
    fn json_flag_emits_machine_readable_stats() {
        let dir = temp_dir();
        fs::write(dir.path().join("guide.md"), GUIDE).unwrap();

        let output = mdsplit()
            .current_dir(dir.path())
            .args(["guide.md", "--json"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let stats: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(stats["in_files"], 1);
        assert_eq!(stats["chapters"], 3);
        assert_eq!(stats["new_out_files"], 3);
    }

    #[test]
    fn verbose_prints_progress() {
        let dir = temp_dir();
        fs::write(dir.path().join("guide.md"), GUIDE).unwrap();

        mdsplit()
            .current_dir(dir.path())
            .args(["guide.md", "-v"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Processing file: guide.md"))
            .stdout(predicate::str::contains("Write 2 lines to"));
    }
}
