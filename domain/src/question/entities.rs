//! Question entity and related value objects

use crate::core::error::DomainError;
use crate::question::publication;
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum length of a question's text, in characters
pub const MAX_QUESTION_TEXT_LEN: usize = 200;

/// Publication dates must fall within these years (four-digit RFC 3339)
pub const PUB_DATE_YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

/// Identifier assigned to a question by the persistence layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(i64);

impl QuestionId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for QuestionId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl FromStr for QuestionId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| DomainError::InvalidQuestionId(s.to_string()))
    }
}

/// A poll question (Entity)
///
/// Identity is the [`QuestionId`]. The publication date may lie in the
/// past or the future; whether the question can be shown is decided
/// against the current instant, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

impl Question {
    /// Rebuild a stored question
    pub fn new(id: QuestionId, question_text: impl Into<String>, pub_date: DateTime<Utc>) -> Self {
        Self {
            id,
            question_text: question_text.into(),
            pub_date,
        }
    }

    /// Whether this question was published within the day ending at `now`
    pub fn was_published_recently(&self, now: DateTime<Utc>) -> bool {
        publication::was_published_recently(self.pub_date, now)
    }

    /// Whether this question has been published as of `now`
    pub fn is_visible(&self, now: DateTime<Utc>) -> bool {
        publication::is_visible(self.pub_date, now)
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.question_text)
    }
}

/// A validated question that has not been stored yet (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    question_text: String,
    pub_date: DateTime<Utc>,
}

impl NewQuestion {
    /// Validate question text and build a new question
    ///
    /// The text must not be blank and must fit in
    /// [`MAX_QUESTION_TEXT_LEN`] characters. The publication year must lie
    /// in [`PUB_DATE_YEARS`].
    pub fn try_new(
        question_text: impl Into<String>,
        pub_date: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let question_text = question_text.into();
        if question_text.trim().is_empty() {
            return Err(DomainError::InvalidQuestion(
                "question text cannot be empty".to_string(),
            ));
        }
        let len = question_text.chars().count();
        if len > MAX_QUESTION_TEXT_LEN {
            return Err(DomainError::InvalidQuestion(format!(
                "question text is {} characters, the limit is {}",
                len, MAX_QUESTION_TEXT_LEN
            )));
        }
        if !PUB_DATE_YEARS.contains(&pub_date.year()) {
            return Err(DomainError::InvalidQuestion(format!(
                "publication year {} is outside {}..={}",
                pub_date.year(),
                PUB_DATE_YEARS.start(),
                PUB_DATE_YEARS.end()
            )));
        }
        Ok(Self {
            question_text,
            pub_date,
        })
    }

    pub fn question_text(&self) -> &str {
        &self.question_text
    }

    pub fn pub_date(&self) -> DateTime<Utc> {
        self.pub_date
    }

    /// Attach the identifier assigned by storage
    pub fn into_question(self, id: QuestionId) -> Question {
        Question {
            id,
            question_text: self.question_text,
            pub_date: self.pub_date,
        }
    }
}
