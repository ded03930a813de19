//! Application layer for polls
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_LATEST_LIMIT, IndexParams};
pub use ports::clock::{Clock, FixedClock};
pub use use_cases::create_question::{
    CreateQuestionError, CreateQuestionInput, CreateQuestionUseCase, PublishAt,
};
pub use use_cases::list_latest::ListLatestQuestionsUseCase;
pub use use_cases::show_question::{ShowQuestionError, ShowQuestionUseCase};
