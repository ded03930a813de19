//! Test doubles shared by use case tests

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use polls_domain::{
    NewQuestion, Question, QuestionId, QuestionRepository, RepositoryError, latest_visible,
};
use std::sync::Mutex;

pub(crate) fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
}

/// Vec-backed repository that records `list_visible` arguments
#[derive(Default)]
pub(crate) struct MockRepository {
    questions: Mutex<Vec<Question>>,
    list_visible_calls: Mutex<Vec<(DateTime<Utc>, usize)>>,
    fail: bool,
}

impl MockRepository {
    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub(crate) fn stored(&self) -> Vec<Question> {
        self.questions.lock().unwrap().clone()
    }

    pub(crate) fn list_visible_calls(&self) -> Vec<(DateTime<Utc>, usize)> {
        self.list_visible_calls.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), RepositoryError> {
        if self.fail {
            Err(RepositoryError::Storage("mock failure".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl QuestionRepository for MockRepository {
    async fn create(&self, question: NewQuestion) -> Result<Question, RepositoryError> {
        self.check()?;
        let mut questions = self.questions.lock().unwrap();
        let question = question.into_question(QuestionId::new(questions.len() as i64 + 1));
        questions.push(question.clone());
        Ok(question)
    }

    async fn get(&self, id: QuestionId) -> Result<Option<Question>, RepositoryError> {
        self.check()?;
        Ok(self
            .questions
            .lock()
            .unwrap()
            .iter()
            .find(|q| q.id == id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Question>, RepositoryError> {
        self.check()?;
        Ok(self.stored())
    }

    async fn list_visible(
        &self,
        now: DateTime<Utc>,
        limit: usize,
    ) -> Result<Vec<Question>, RepositoryError> {
        self.check()?;
        self.list_visible_calls.lock().unwrap().push((now, limit));
        Ok(latest_visible(self.questions.lock().unwrap().iter(), now, limit))
    }
}
