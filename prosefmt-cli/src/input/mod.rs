//! Input handling module

pub mod acquire;
pub mod file_reader;

pub use acquire::acquire_input;
pub use file_reader::{FileReader, SourceFile};
