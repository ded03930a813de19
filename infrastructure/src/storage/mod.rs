//! Question storage adapters
//!
//! Both adapters implement the
//! [`QuestionRepository`](polls_domain::QuestionRepository) port:
//!
//! - [`InMemoryQuestionRepository`]: process-local, for tests and throwaway runs
//! - [`SqliteQuestionRepository`]: a SQLite file, the default
//!
//! [`QuestionStore`] picks one of them from configuration.

mod memory;
mod sqlite;

pub use memory::InMemoryQuestionRepository;
pub use sqlite::{DEFAULT_BUSY_TIMEOUT, SCHEMA_VERSION, SqliteQuestionRepository};

use crate::config::{FileStorageBackend, FileStorageConfig};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use polls_domain::{NewQuestion, Question, QuestionId, QuestionRepository, RepositoryError};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while opening a store
#[derive(Error, Debug)]
pub enum StorageInitError {
    #[error("Could not create {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("No database path configured and no data directory available")]
    NoDatabasePath,
}

/// Store selected at startup
pub enum QuestionStore {
    Memory(InMemoryQuestionRepository),
    Sqlite(SqliteQuestionRepository),
}

impl QuestionStore {
    /// Open the store described by `[storage]`
    pub fn open(config: &FileStorageConfig) -> Result<Self, StorageInitError> {
        match config.backend {
            FileStorageBackend::Memory => Ok(QuestionStore::Memory(
                InMemoryQuestionRepository::new(),
            )),
            FileStorageBackend::Sqlite => {
                let path = config
                    .database_path()
                    .ok_or(StorageInitError::NoDatabasePath)?;
                Ok(QuestionStore::Sqlite(SqliteQuestionRepository::open(path)?))
            }
        }
    }

    /// Short description for logs and `polls config`
    pub fn describe(&self) -> String {
        match self {
            QuestionStore::Memory(_) => "memory".to_string(),
            QuestionStore::Sqlite(repo) => match repo.path() {
                Some(path) => format!("sqlite ({})", path.display()),
                None => "sqlite (in-memory)".to_string(),
            },
        }
    }
}

#[async_trait]
impl QuestionRepository for QuestionStore {
    async fn create(&self, question: NewQuestion) -> Result<Question, RepositoryError> {
        match self {
            QuestionStore::Memory(repo) => repo.create(question).await,
            QuestionStore::Sqlite(repo) => repo.create(question).await,
        }
    }

    async fn get(&self, id: QuestionId) -> Result<Option<Question>, RepositoryError> {
        match self {
            QuestionStore::Memory(repo) => repo.get(id).await,
            QuestionStore::Sqlite(repo) => repo.get(id).await,
        }
    }

    async fn list(&self) -> Result<Vec<Question>, RepositoryError> {
        match self {
            QuestionStore::Memory(repo) => repo.list().await,
            QuestionStore::Sqlite(repo) => repo.list().await,
        }
    }

    async fn list_visible(
        &self,
        now: DateTime<Utc>,
        limit: usize,
    ) -> Result<Vec<Question>, RepositoryError> {
        match self {
            QuestionStore::Memory(repo) => repo.list_visible(now, limit).await,
            QuestionStore::Sqlite(repo) => repo.list_visible(now, limit).await,
        }
    }

    async fn get_visible(
        &self,
        id: QuestionId,
        now: DateTime<Utc>,
    ) -> Result<Option<Question>, RepositoryError> {
        match self {
            QuestionStore::Memory(repo) => repo.get_visible(id, now).await,
            QuestionStore::Sqlite(repo) => repo.get_visible(id, now).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[tokio::test]
    async fn test_open_memory_store() {
        let config = FileStorageConfig {
            backend: FileStorageBackend::Memory,
            path: None,
        };
        let store = QuestionStore::open(&config).unwrap();
        assert_eq!(store.describe(), "memory");

        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        let created = store
            .create(NewQuestion::try_new("Past question", now - Duration::days(30)).unwrap())
            .await
            .unwrap();
        assert_eq!(store.list_visible(now, 5).await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_open_sqlite_store_at_configured_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.sqlite3");
        let config = FileStorageConfig {
            backend: FileStorageBackend::Sqlite,
            path: Some(path.to_string_lossy().into_owned()),
        };

        let store = QuestionStore::open(&config).unwrap();
        assert!(store.describe().starts_with("sqlite ("));
        assert!(path.exists());
        assert!(store.list().await.unwrap().is_empty());
    }
}
