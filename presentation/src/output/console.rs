//! Console output formatter for poll pages

use crate::output::formatter::PageFormatter;
use chrono::{DateTime, Utc};
use colored::Colorize;
use polls_domain::{Question, QuestionId};

/// Message shown when no question is visible
pub const NO_POLLS_MESSAGE: &str = "No polls are available.";

/// Formats pages for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    fn published_line(question: &Question, now: DateTime<Utc>) -> String {
        let mut line = format!(
            "{} {}",
            "Published:".dimmed(),
            question.pub_date.format("%Y-%m-%d %H:%M UTC")
        );
        if question.was_published_recently(now) {
            line.push_str(&format!(" {}", "(new)".green().bold()));
        }
        line
    }
}

impl PageFormatter for ConsoleFormatter {
    fn format_index(&self, questions: &[Question], now: DateTime<Utc>) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Latest Polls"));
        output.push('\n');

        if questions.is_empty() {
            output.push_str(&format!("\n{}\n", NO_POLLS_MESSAGE.yellow()));
        } else {
            for question in questions {
                let marker = if question.was_published_recently(now) {
                    format!(" {}", "(new)".green().bold())
                } else {
                    String::new()
                };
                output.push_str(&format!(
                    "\n  {} {}{}",
                    format!("[{}]", question.id).cyan(),
                    question.question_text,
                    marker
                ));
            }
            output.push('\n');
        }

        output.push_str(&Self::footer());
        output
    }

    fn format_detail(&self, question: &Question, now: DateTime<Utc>) -> String {
        let mut output = String::new();
        output.push_str(&Self::header(&format!("Question {}", question.id)));
        output.push_str(&format!("\n\n{}\n", question.question_text.bold()));
        output.push_str(&format!("{}\n", Self::published_line(question, now)));
        output.push_str(&Self::footer());
        output
    }

    fn format_results(&self, question: &Question, now: DateTime<Utc>) -> String {
        let mut output = String::new();
        output.push_str(&Self::header(&format!("Results: Question {}", question.id)));
        output.push_str(&format!("\n\n{}\n", question.question_text.bold()));
        output.push_str(&format!("{}\n", Self::published_line(question, now)));
        output.push_str(&Self::footer());
        output
    }

    fn format_not_found(&self, id: QuestionId) -> String {
        format!("{} {}\n", "404".red().bold(), format!("Question {} not found", id).red())
    }

    fn format_created(&self, question: &Question, now: DateTime<Utc>) -> String {
        let visibility = if question.is_visible(now) {
            "visible now".green()
        } else {
            "scheduled".yellow()
        };
        format!(
            "{} {} {}: {} ({})\n",
            "Created".green().bold(),
            "question".dimmed(),
            question.id,
            question.question_text,
            visibility
        )
    }
}
