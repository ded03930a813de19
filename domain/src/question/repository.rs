//! Question repository trait

use crate::question::entities::{NewQuestion, Question, QuestionId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors raised by question storage
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Corrupt record: {0}")]
    Corrupt(String),
}

/// Repository trait for questions
///
/// This is a domain-level abstraction over question storage.
/// Implementations live in the infrastructure layer.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Store a new question and return it with its assigned id
    async fn create(&self, question: NewQuestion) -> Result<Question, RepositoryError>;

    /// Look up a question by id, regardless of its publication date
    async fn get(&self, id: QuestionId) -> Result<Option<Question>, RepositoryError>;

    /// All stored questions, by id ascending
    async fn list(&self) -> Result<Vec<Question>, RepositoryError>;

    /// Questions visible at `now`, newest `pub_date` first, at most `limit`
    async fn list_visible(
        &self,
        now: DateTime<Utc>,
        limit: usize,
    ) -> Result<Vec<Question>, RepositoryError>;

    /// Look up a question by id, hiding it until it is visible at `now`
    async fn get_visible(
        &self,
        id: QuestionId,
        now: DateTime<Utc>,
    ) -> Result<Option<Question>, RepositoryError> {
        Ok(self.get(id).await?.filter(|q| q.is_visible(now)))
    }
}
