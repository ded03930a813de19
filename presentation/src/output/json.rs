//! JSON output formatter for poll pages

use crate::output::console::NO_POLLS_MESSAGE;
use crate::output::formatter::PageFormatter;
use chrono::{DateTime, Utc};
use polls_domain::{Question, QuestionId};
use serde::Serialize;
use serde_json::json;

/// Formats pages as pretty-printed JSON
pub struct JsonFormatter;

#[derive(Serialize)]
struct QuestionView<'a> {
    id: QuestionId,
    question_text: &'a str,
    pub_date: DateTime<Utc>,
    was_published_recently: bool,
}

impl<'a> QuestionView<'a> {
    fn new(question: &'a Question, now: DateTime<Utc>) -> Self {
        Self {
            id: question.id,
            question_text: &question.question_text,
            pub_date: question.pub_date,
            was_published_recently: question.was_published_recently(now),
        }
    }
}

impl JsonFormatter {
    fn render(value: serde_json::Value) -> String {
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl PageFormatter for JsonFormatter {
    fn format_index(&self, questions: &[Question], now: DateTime<Utc>) -> String {
        if questions.is_empty() {
            return Self::render(json!({
                "latest_question_list": [],
                "message": NO_POLLS_MESSAGE,
            }));
        }
        let list: Vec<QuestionView<'_>> =
            questions.iter().map(|q| QuestionView::new(q, now)).collect();
        Self::render(json!({ "latest_question_list": list }))
    }

    fn format_detail(&self, question: &Question, now: DateTime<Utc>) -> String {
        Self::render(json!({ "question": QuestionView::new(question, now) }))
    }

    fn format_results(&self, question: &Question, now: DateTime<Utc>) -> String {
        Self::render(json!({ "results": QuestionView::new(question, now) }))
    }

    fn format_not_found(&self, id: QuestionId) -> String {
        Self::render(json!({ "error": "not_found", "id": id }))
    }

    fn format_created(&self, question: &Question, now: DateTime<Utc>) -> String {
        Self::render(json!({ "created": QuestionView::new(question, now) }))
    }
}
