//! CLI entrypoint for polls
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use polls_application::{
    Clock, CreateQuestionInput, CreateQuestionUseCase, FixedClock, PublishAt,
};
use polls_domain::OutputFormat;
use polls_infrastructure::{
    ConfigLoader, FileConfig, FileStorageBackend, QuestionStore, SystemClock,
};
use polls_presentation::{Cli, Command, Page, PollsViews, formatter_for};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Clock selected at startup: the system clock, or a pinned `--now`
enum AppClock {
    System(SystemClock),
    Fixed(FixedClock),
}

impl Clock for AppClock {
    fn now(&self) -> DateTime<Utc> {
        match self {
            AppClock::System(clock) => clock.now(),
            AppClock::Fixed(clock) => clock.now(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Load configuration before logging so `[logging] file` can be honored
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    // CLI flags override config file values
    if let Some(db) = &cli.db {
        config.storage.backend = FileStorageBackend::Sqlite;
        config.storage.path = Some(db.display().to_string());
    }
    if cli.memory {
        config.storage.backend = FileStorageBackend::Memory;
    }
    config.validate()?;

    let _log_guard = init_logging(&cli, &config)?;
    info!("Starting polls");

    colored::control::set_override(config.output.color);

    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    if cli.command == Command::Config {
        print_config(cli.config.as_deref(), &config)?;
        return Ok(ExitCode::SUCCESS);
    }

    // === Dependency Injection ===
    let store = Arc::new(QuestionStore::open(&config.storage)?);
    info!("Using {} storage", store.describe());

    let clock = Arc::new(match cli.now {
        Some(instant) => {
            debug!("Pinning clock to {}", instant.to_rfc3339());
            AppClock::Fixed(FixedClock::new(instant))
        }
        None => AppClock::System(SystemClock),
    });

    let views = PollsViews::new(Arc::clone(&store), Arc::clone(&clock))
        .with_index_params(config.index_params())
        .with_format(format);

    match cli.command {
        Command::Index => Ok(emit(&views.index().await?)),
        Command::Detail { id } => Ok(emit(&views.detail(id).await?)),
        Command::Results { id } => Ok(emit(&views.results(id).await?)),
        Command::Create {
            question_text,
            days,
            at,
        } => {
            let publish = match (days, at) {
                (Some(days), _) => PublishAt::in_days(days),
                (None, Some(instant)) => PublishAt::At(instant),
                (None, None) => PublishAt::Now,
            };
            let use_case = CreateQuestionUseCase::new(store, Arc::clone(&clock));
            let question = use_case
                .execute(CreateQuestionInput::new(question_text).published(publish))
                .await?;
            println!(
                "{}",
                formatter_for(format).format_created(&question, clock.now())
            );
            Ok(ExitCode::SUCCESS)
        }
        Command::Config => Ok(ExitCode::SUCCESS),
    }
}

/// Print a rendered page; not-found pages go to stderr with a failing status
fn emit<C>(page: &Page<C>) -> ExitCode {
    if page.status.is_success() {
        println!("{}", page.body);
        ExitCode::SUCCESS
    } else {
        eprintln!("{}", page.body);
        ExitCode::FAILURE
    }
}

fn print_config(explicit: Option<&Path>, config: &FileConfig) -> Result<()> {
    for line in ConfigLoader::describe_sources(explicit) {
        println!("{}", line);
    }
    println!();
    println!("Effective configuration:");
    println!();
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Initialize logging based on verbosity level
///
/// `RUST_LOG` wins over `-v`/`-q` when set. Log lines go to stderr, and
/// additionally to `[logging] file` when configured; the returned guard
/// flushes that file on drop.
fn init_logging(cli: &Cli, config: &FileConfig) -> Result<Option<WorkerGuard>> {
    let level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace", // -vvv or more
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (file_layer, guard) = match &config.logging.file {
        Some(file) => {
            let path = Path::new(file);
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Could not create log directory {}", dir.display()))?;
            let name = path
                .file_name()
                .with_context(|| format!("Log file path has no file name: {}", file))?;
            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(file_layer)
        .init();

    Ok(guard)
}
