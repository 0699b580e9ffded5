//! Presentation layer for llm-council
//!
//! This crate contains CLI definitions, output formatters, the stage
//! progress board and reporter, and status badge rendering.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use output::html::HtmlReport;
pub use output::status::StatusFormatter;
pub use progress::board::{SlotState, StageBoard};
pub use progress::reporter::{SimpleProgress, StageReporter};
