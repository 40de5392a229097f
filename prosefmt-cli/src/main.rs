//! prosefmt command-line entry point

use std::process::ExitCode;

use clap::Parser;
use prosefmt_cli::commands::ProcessArgs;
use prosefmt_cli::RunOutcome;

fn main() -> ExitCode {
    let args = ProcessArgs::parse();

    match args.execute() {
        Ok(RunOutcome::Failed) => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error:#}");
            ExitCode::FAILURE
        }
    }
}
