//! List Latest Questions use case
//!
//! Produces the index listing: visible questions, newest first.

use crate::config::IndexParams;
use crate::ports::clock::Clock;
use polls_domain::{Question, QuestionRepository, RepositoryError};
use std::sync::Arc;
use tracing::debug;

/// Use case for listing the latest published questions
pub struct ListLatestQuestionsUseCase<R: QuestionRepository + 'static, C: Clock + 'static> {
    repository: Arc<R>,
    clock: Arc<C>,
    params: IndexParams,
}

impl<R: QuestionRepository + 'static, C: Clock + 'static> ListLatestQuestionsUseCase<R, C> {
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            params: IndexParams::default(),
        }
    }

    pub fn with_params(mut self, params: IndexParams) -> Self {
        self.params = params;
        self
    }

    pub fn params(&self) -> &IndexParams {
        &self.params
    }

    pub async fn execute(&self) -> Result<Vec<Question>, RepositoryError> {
        let now = self.clock.now();
        let questions = self
            .repository
            .list_visible(now, self.params.latest_limit)
            .await?;

        debug!(
            "Listed {} visible questions (limit {})",
            questions.len(),
            self.params.latest_limit
        );
        Ok(questions)
    }
}
