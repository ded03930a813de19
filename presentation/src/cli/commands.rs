//! CLI command definitions

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use polls_domain::{OutputFormat, QuestionId};
use std::path::PathBuf;

/// Output format for rendered pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CliOutputFormat {
    /// Colored console text
    Text,
    /// JSON output
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(format: CliOutputFormat) -> Self {
        match format {
            CliOutputFormat::Text => OutputFormat::Text,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for polls
#[derive(Parser, Debug)]
#[command(name = "polls")]
#[command(author, version, about = "Publish poll questions and browse the ones that are live")]
#[command(long_about = r#"
polls keeps a list of poll questions, each with a publication date.

A question only shows up on the index, detail and results pages once its
publication date has passed. Questions can be scheduled in the future.

Configuration files are loaded from (in priority order):
1. POLLS_* environment variables
2. --config <path>     Explicit config file
3. ./polls.toml        Project-level config
4. ~/.config/polls/config.toml   Global config

Example:
  polls create "What's new?"
  polls create "Coming soon" --days 30
  polls index
  polls detail 1
  polls --now 2030-01-01T00:00:00Z index
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format (overrides config)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<CliOutputFormat>,

    /// SQLite database path (overrides config)
    #[arg(long, value_name = "PATH", global = true)]
    pub db: Option<PathBuf>,

    /// Keep questions in memory only (nothing is saved)
    #[arg(long, global = true, conflicts_with = "db")]
    pub memory: bool,

    /// Evaluate publication dates at this instant instead of the system clock
    #[arg(long, value_name = "RFC3339", global = true)]
    pub now: Option<DateTime<Utc>>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress informational output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the latest published questions
    Index,

    /// Show a published question
    Detail {
        /// Question id
        id: QuestionId,
    },

    /// Show the results page of a published question
    Results {
        /// Question id
        id: QuestionId,
    },

    /// Create a question
    Create {
        /// Question text
        question_text: String,

        /// Publish this many days from now (negative for the past)
        #[arg(long, allow_hyphen_values = true, conflicts_with = "at")]
        days: Option<i64>,

        /// Publish at this instant
        #[arg(long, value_name = "RFC3339")]
        at: Option<DateTime<Utc>>,
    },

    /// Show configuration sources and the effective configuration
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_index() {
        let cli = Cli::try_parse_from(["polls", "index"]).unwrap();
        assert_eq!(cli.command, Command::Index);
        assert!(cli.output.is_none());
        assert!(!cli.memory);
    }

    #[test]
    fn test_parse_detail_id() {
        let cli = Cli::try_parse_from(["polls", "detail", "42"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Detail {
                id: QuestionId::new(42)
            }
        );
    }

    #[test]
    fn test_parse_results_rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["polls", "results", "abc"]).is_err());
    }

    #[test]
    fn test_parse_create_with_negative_days() {
        let cli =
            Cli::try_parse_from(["polls", "create", "Past question", "--days", "-30"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Create {
                question_text: "Past question".to_string(),
                days: Some(-30),
                at: None,
            }
        );
    }

    #[test]
    fn test_parse_create_days_conflicts_with_at() {
        let result = Cli::try_parse_from([
            "polls",
            "create",
            "Q",
            "--days",
            "1",
            "--at",
            "2024-03-15T12:00:00Z",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "polls",
            "index",
            "--now",
            "2024-03-15T12:00:00Z",
            "-o",
            "json",
            "--memory",
            "-vv",
        ])
        .unwrap();
        assert_eq!(
            cli.now,
            Some(Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap())
        );
        assert_eq!(cli.output, Some(CliOutputFormat::Json));
        assert!(cli.memory);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_memory_conflicts_with_db() {
        let result = Cli::try_parse_from(["polls", "--memory", "--db", "x.sqlite3", "index"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_output_format_conversion() {
        assert_eq!(OutputFormat::from(CliOutputFormat::Json), OutputFormat::Json);
        assert_eq!(OutputFormat::from(CliOutputFormat::Text), OutputFormat::Text);
    }
}
