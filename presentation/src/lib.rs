//! Presentation layer for polls
//!
//! This crate contains CLI definitions, the index/detail/results views,
//! and the console and JSON page formatters.

pub mod cli;
pub mod output;
pub mod views;

// Re-export commonly used types
pub use cli::commands::{Cli, CliOutputFormat, Command};
pub use output::{ConsoleFormatter, JsonFormatter, NO_POLLS_MESSAGE, PageFormatter, formatter_for};
pub use views::{IndexContext, Page, PollsViews, StatusCode};
