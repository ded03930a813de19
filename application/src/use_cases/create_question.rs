//! Create Question use case
//!
//! Validates question text and stores it with a publication date that may
//! be absolute or relative to the clock.

use crate::ports::clock::Clock;
use chrono::{DateTime, Duration, Utc};
use polls_domain::{DomainError, NewQuestion, Question, QuestionRepository, RepositoryError};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while creating a question
#[derive(Error, Debug)]
pub enum CreateQuestionError {
    #[error(transparent)]
    Invalid(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// When a new question gets published
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PublishAt {
    /// At the clock's current instant
    #[default]
    Now,
    /// At an absolute instant
    At(DateTime<Utc>),
    /// Offset from the clock's current instant (negative for the past)
    Offset(Duration),
    /// Whole days from the clock's current instant (negative for the past)
    Days(i64),
}

impl PublishAt {
    /// Offset by whole days from now
    pub fn in_days(days: i64) -> Self {
        PublishAt::Days(days)
    }

    /// Resolve to an absolute instant
    ///
    /// Fails when the offset does not fit in a representable date.
    pub fn resolve(&self, now: DateTime<Utc>) -> Result<DateTime<Utc>, DomainError> {
        let offset = match self {
            PublishAt::Now => return Ok(now),
            PublishAt::At(instant) => return Ok(*instant),
            PublishAt::Offset(offset) => Some(*offset),
            PublishAt::Days(days) => Duration::try_days(*days),
        };
        offset
            .and_then(|offset| now.checked_add_signed(offset))
            .ok_or_else(|| {
                DomainError::InvalidQuestion(format!("publication date {:?} is out of range", self))
            })
    }
}

/// Input for the CreateQuestion use case
#[derive(Debug, Clone)]
pub struct CreateQuestionInput {
    pub question_text: String,
    pub publish: PublishAt,
}

impl CreateQuestionInput {
    pub fn new(question_text: impl Into<String>) -> Self {
        Self {
            question_text: question_text.into(),
            publish: PublishAt::Now,
        }
    }

    pub fn published(mut self, publish: PublishAt) -> Self {
        self.publish = publish;
        self
    }
}

/// Use case for creating a question
pub struct CreateQuestionUseCase<R: QuestionRepository + 'static, C: Clock + 'static> {
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R: QuestionRepository + 'static, C: Clock + 'static> CreateQuestionUseCase<R, C> {
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    pub async fn execute(
        &self,
        input: CreateQuestionInput,
    ) -> Result<Question, CreateQuestionError> {
        let pub_date = input.publish.resolve(self.clock.now())?;
        let new_question = NewQuestion::try_new(input.question_text, pub_date)?;
        let question = self.repository.create(new_question).await?;

        info!(
            "Created question {} published at {}",
            question.id,
            question.pub_date.to_rfc3339()
        );
        Ok(question)
    }
}
