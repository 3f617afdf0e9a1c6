//! Command-line interface for the `mdsplit` chapter splitter.

use std::process::ExitCode;

use clap::Parser;

mod cli;
mod error;
mod source;

fn main() -> ExitCode {
    let args = cli::Args::parse();

    match cli::run(&args) {
        Ok(stats) => {
            cli::report(&args, &stats);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
