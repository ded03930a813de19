//! Domain layer for polls
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Question
//!
//! A poll question carries its text and a publication date. The date may be
//! in the future: the question exists but nobody should see it yet.
//!
//! ## Publication rules
//!
//! - **Visible**: published at or before the current instant
//! - **Recently published**: published within the day ending at the current instant
//!
//! Both rules take the current instant as an argument; nothing in this crate
//! reads the system clock.

pub mod config;
pub mod core;
pub mod question;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use question::{
    entities::{MAX_QUESTION_TEXT_LEN, NewQuestion, PUB_DATE_YEARS, Question, QuestionId},
    publication::{
        RECENT_WINDOW_SECS, is_visible, latest_visible, recent_window, was_published_recently,
    },
    repository::{QuestionRepository, RepositoryError},
};
