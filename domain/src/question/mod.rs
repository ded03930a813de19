//! Question domain.
//!
//! - [`entities::Question`]: a stored poll question with its publication date
//! - [`entities::NewQuestion`]: validated input for creating a question
//! - [`publication`]: visibility and recency rules
//! - [`repository::QuestionRepository`]: trait for question persistence

pub mod entities;
pub mod publication;
pub mod repository;
