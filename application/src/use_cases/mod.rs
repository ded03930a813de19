//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod create_question;
pub mod list_latest;
pub mod show_question;

#[cfg(test)]
pub(crate) mod testing;
