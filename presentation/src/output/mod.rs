//! Page body rendering
//!
//! - [`console::ConsoleFormatter`]: colored terminal text
//! - [`json::JsonFormatter`]: machine-readable JSON

pub mod console;
pub mod formatter;
pub mod json;

pub use console::{ConsoleFormatter, NO_POLLS_MESSAGE};
pub use formatter::{PageFormatter, formatter_for};
pub use json::JsonFormatter;
