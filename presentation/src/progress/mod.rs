//! Stage progress tracking and reporting

pub mod board;
pub mod reporter;
