//! Application-level configuration.
//!
//! - [`IndexParams`]: latest-questions listing control

pub mod index_params;

pub use index_params::{DEFAULT_LATEST_LIMIT, IndexParams};
