//! Process command implementation

use anyhow::Result;
use clap::Parser;
use prosefmt_core::wordlists;

use crate::config::SessionConfig;
use crate::console::Console;
use crate::session::{RunOutcome, Session};

/// Interactively reformat a text file into one capitalized sentence per paragraph
#[derive(Debug, Parser)]
#[command(name = "prosefmt", version, about)]
pub struct ProcessArgs {
    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<RunOutcome> {
        // Initialize logging based on verbosity
        self.init_logging()?;

        log::info!("Starting interactive session");
        log::debug!("Arguments: {:?}", self);

        let words = wordlists::builtin()?;
        let mut session = Session::new(Console::stdio(), SessionConfig::default(), words);
        let outcome = session.run()?;

        log::info!("Session ended: {outcome:?}");
        Ok(outcome)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }

        Ok(())
    }
}
