//! Show Question use case
//!
//! Backs both the detail and the results pages. A question that does not
//! exist and a question that is not yet published look the same to callers.

use crate::ports::clock::Clock;
use polls_domain::{Question, QuestionId, QuestionRepository, RepositoryError};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while looking up a question
#[derive(Error, Debug)]
pub enum ShowQuestionError {
    #[error("Question {0} not found")]
    NotFound(QuestionId),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ShowQuestionError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ShowQuestionError::NotFound(_))
    }
}

/// Use case for looking up a single published question
pub struct ShowQuestionUseCase<R: QuestionRepository + 'static, C: Clock + 'static> {
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R: QuestionRepository + 'static, C: Clock + 'static> ShowQuestionUseCase<R, C> {
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    pub async fn execute(&self, id: QuestionId) -> Result<Question, ShowQuestionError> {
        let now = self.clock.now();
        match self.repository.get_visible(id, now).await? {
            Some(question) => Ok(question),
            None => {
                debug!("Question {} is missing or unpublished", id);
                Err(ShowQuestionError::NotFound(id))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::clock::FixedClock;
    use crate::use_cases::testing::{MockRepository, fixed_now};
    use chrono::Duration;
    use polls_domain::NewQuestion;

    async fn seed(repo: &MockRepository, text: &str, days: i64) -> Question {
        repo.create(NewQuestion::try_new(text, fixed_now() + Duration::days(days)).unwrap())
            .await
            .unwrap()
    }

    fn use_case(repo: Arc<MockRepository>) -> ShowQuestionUseCase<MockRepository, FixedClock> {
        ShowQuestionUseCase::new(repo, Arc::new(FixedClock::new(fixed_now())))
    }

    #[tokio::test]
    async fn test_future_question_not_found() {
        let repo = Arc::new(MockRepository::default());
        let future = seed(&repo, "Future question", 30).await;

        let err = use_case(repo).execute(future.id).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_past_question_found() {
        let repo = Arc::new(MockRepository::default());
        let past = seed(&repo, "Past question", -30).await;

        let question = use_case(repo).execute(past.id).await.unwrap();
        assert_eq!(question.question_text, "Past question");
    }

    #[tokio::test]
    async fn test_question_published_this_instant_found() {
        let repo = Arc::new(MockRepository::default());
        let current = seed(&repo, "Current question", 0).await;
        assert!(use_case(repo).execute(current.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_missing_question_not_found() {
        let repo = Arc::new(MockRepository::default());
        let err = use_case(repo)
            .execute(QuestionId::new(404))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Question 404 not found");
    }

    #[tokio::test]
    async fn test_storage_failure_is_not_a_not_found() {
        let repo = Arc::new(MockRepository::failing());
        let err = use_case(repo).execute(QuestionId::new(1)).await.unwrap_err();
        assert!(!err.is_not_found());
    }
}
