//! Page value returned by views

use polls_domain::Question;
use serde::Serialize;

/// Outcome of a view, mirroring the HTTP status it stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatusCode {
    Ok,
    NotFound,
}

impl StatusCode {
    /// Numeric HTTP status
    pub fn code(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, StatusCode::Ok)
    }
}

/// A rendered page together with the data it was rendered from
#[derive(Debug, Clone)]
pub struct Page<C> {
    pub status: StatusCode,
    pub body: String,
    pub context: C,
}

impl<C> Page<C> {
    pub fn ok(body: String, context: C) -> Self {
        Self {
            status: StatusCode::Ok,
            body,
            context,
        }
    }

    pub fn not_found(body: String, context: C) -> Self {
        Self {
            status: StatusCode::NotFound,
            body,
            context,
        }
    }

    /// Whether the rendered body contains `text`
    pub fn contains(&self, text: &str) -> bool {
        self.body.contains(text)
    }
}

/// Data behind the index page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IndexContext {
    pub latest_question_list: Vec<Question>,
}
