//! In-memory question store

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use polls_domain::{
    NewQuestion, Question, QuestionId, QuestionRepository, RepositoryError, latest_visible,
};
use tokio::sync::RwLock;

#[derive(Default)]
struct Inner {
    questions: Vec<Question>,
    last_id: i64,
}

/// Question store held entirely in process memory
///
/// Ids start at 1 and are never reused. Contents are lost on drop.
#[derive(Default)]
pub struct InMemoryQuestionRepository {
    inner: RwLock<Inner>,
}

impl InMemoryQuestionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn create(&self, question: NewQuestion) -> Result<Question, RepositoryError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let question = question.into_question(QuestionId::new(inner.last_id));
        inner.questions.push(question.clone());
        Ok(question)
    }

    async fn get(&self, id: QuestionId) -> Result<Option<Question>, RepositoryError> {
        let inner = self.inner.read().await;
        Ok(inner.questions.iter().find(|q| q.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Question>, RepositoryError> {
        Ok(self.inner.read().await.questions.clone())
    }

    async fn list_visible(
        &self,
        now: DateTime<Utc>,
        limit: usize,
    ) -> Result<Vec<Question>, RepositoryError> {
        let inner = self.inner.read().await;
        Ok(latest_visible(&inner.questions, now, limit))
    }
}
