//! Output handling module

pub mod acquire;
pub mod paragraph;
pub mod preview;

pub use acquire::acquire_output;
pub use paragraph::ParagraphWriter;
pub use preview::read_preview;
