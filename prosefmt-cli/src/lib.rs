//! prosefmt CLI library
//!
//! This library provides the interactive front end of the prosefmt
//! sentence formatter: prompting for files, validating them, writing the
//! formatted result and previewing it.

pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod input;
pub mod output;
pub mod session;

pub use error::{Access, CliResult, GateError};
pub use session::{RunOutcome, Session};
