//! Output formatter trait

use chrono::{DateTime, Utc};
use polls_domain::{OutputFormat, Question, QuestionId};

/// Trait for rendering page bodies
///
/// `now` is the instant the page is rendered for; formatters use it to
/// flag recently published questions.
pub trait PageFormatter: Send + Sync {
    /// Latest questions, or the empty-listing message
    fn format_index(&self, questions: &[Question], now: DateTime<Utc>) -> String;

    /// A single question
    fn format_detail(&self, question: &Question, now: DateTime<Utc>) -> String;

    /// Results page of a single question
    fn format_results(&self, question: &Question, now: DateTime<Utc>) -> String;

    /// Missing or unpublished question
    fn format_not_found(&self, id: QuestionId) -> String;

    /// Confirmation for a newly stored question
    fn format_created(&self, question: &Question, now: DateTime<Utc>) -> String;
}

/// Pick the formatter for an output format
pub fn formatter_for(format: OutputFormat) -> Box<dyn PageFormatter> {
    match format {
        OutputFormat::Text => Box::new(super::console::ConsoleFormatter),
        OutputFormat::Json => Box::new(super::json::JsonFormatter),
    }
}
