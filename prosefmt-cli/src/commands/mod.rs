//! CLI command implementations

pub mod process;

pub use process::ProcessArgs;
