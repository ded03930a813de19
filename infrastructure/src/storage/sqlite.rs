//! SQLite question store
//!
//! `pub_date` is stored as RFC 3339 UTC text with a fixed microsecond
//! fraction (`2024-03-15T12:00:00.000000Z`), so comparing and ordering the
//! column as text matches comparing and ordering the instants. Only years
//! 0000 to 9999 encode to that width; `NewQuestion` rejects anything else,
//! and query cutoffs outside the range are clamped.

use super::StorageInitError;
use async_trait::async_trait;
use chrono::{DateTime, Datelike, SecondsFormat, SubsecRound, Utc};
use polls_domain::{
    NewQuestion, PUB_DATE_YEARS, Question, QuestionId, QuestionRepository, RepositoryError,
};
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use tracing::{debug, info};

/// Busy timeout applied to every connection.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Latest schema version, tracked in `PRAGMA user_version`.
pub const SCHEMA_VERSION: i64 = 1;

const MIGRATION_V1_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS questions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    question_text TEXT NOT NULL CHECK (length(trim(question_text)) > 0),
    pub_date TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_questions_pub_date ON questions (pub_date);
"#;

const SELECT_COLUMNS: &str = "SELECT id, question_text, pub_date FROM questions";

/// Question store backed by a single SQLite connection
pub struct SqliteQuestionRepository {
    conn: Mutex<Connection>,
    path: Option<PathBuf>,
}

impl SqliteQuestionRepository {
    /// Open (or create) the database file and migrate it to the latest schema.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageInitError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|source| StorageInitError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let mut conn = Connection::open(path)?;
        configure_connection(&conn)?;
        migrate(&mut conn)?;

        info!("Opened question database {}", path.display());
        Ok(Self {
            conn: Mutex::new(conn),
            path: Some(path.to_path_buf()),
        })
    }

    /// Open a private in-memory database with the latest schema.
    pub fn open_in_memory() -> Result<Self, StorageInitError> {
        let mut conn = Connection::open_in_memory()?;
        migrate(&mut conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
            path: None,
        })
    }

    /// Path of the database file, `None` for in-memory databases.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, RepositoryError> {
        self.conn
            .lock()
            .map_err(|_| RepositoryError::Storage("connection lock poisoned".to_string()))
    }
}

fn configure_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.pragma_update(None, "synchronous", "NORMAL")?;
    let _journal_mode: String =
        conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
    conn.busy_timeout(DEFAULT_BUSY_TIMEOUT)?;
    Ok(())
}

fn migrate(conn: &mut Connection) -> rusqlite::Result<()> {
    let version: i64 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;
    if version >= SCHEMA_VERSION {
        return Ok(());
    }

    let tx = conn.transaction()?;
    tx.execute_batch(MIGRATION_V1_SQL)?;
    tx.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    tx.commit()?;

    debug!("Migrated question schema from v{} to v{}", version, SCHEMA_VERSION);
    Ok(())
}

fn encode_pub_date(pub_date: DateTime<Utc>) -> String {
    pub_date.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Latest instant that fits the fixed-width encoding
const MAX_ENCODED_PUB_DATE: &str = "9999-12-31T23:59:59.999999Z";

/// Encode a visibility cutoff, clamped to the storable years
///
/// Before year 0 the empty string is returned, which no stored date
/// compares below.
fn encode_cutoff(now: DateTime<Utc>) -> String {
    let year = now.year();
    if year > *PUB_DATE_YEARS.end() {
        MAX_ENCODED_PUB_DATE.to_string()
    } else if year < *PUB_DATE_YEARS.start() {
        String::new()
    } else {
        encode_pub_date(now)
    }
}

fn decode_pub_date(raw: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Corrupt(format!("pub_date {:?}: {}", raw, e)))
}

fn storage_err(e: rusqlite::Error) -> RepositoryError {
    RepositoryError::Storage(e.to_string())
}

type RawQuestion = (i64, String, String);

fn read_row(row: &Row<'_>) -> rusqlite::Result<RawQuestion> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?))
}

fn into_question((id, question_text, pub_date): RawQuestion) -> Result<Question, RepositoryError> {
    Ok(Question::new(
        QuestionId::new(id),
        question_text,
        decode_pub_date(&pub_date)?,
    ))
}

fn query_questions(
    conn: &Connection,
    sql: &str,
    params: impl rusqlite::Params,
) -> Result<Vec<Question>, RepositoryError> {
    let mut stmt = conn.prepare(sql).map_err(storage_err)?;
    let rows = stmt
        .query_map(params, read_row)
        .map_err(storage_err)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .map_err(storage_err)?;
    rows.into_iter().map(into_question).collect()
}

#[async_trait]
impl QuestionRepository for SqliteQuestionRepository {
    async fn create(&self, question: NewQuestion) -> Result<Question, RepositoryError> {
        let pub_date = question.pub_date().trunc_subsecs(6);
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO questions (question_text, pub_date) VALUES (?1, ?2)",
            params![question.question_text(), encode_pub_date(pub_date)],
        )
        .map_err(storage_err)?;
        let id = QuestionId::new(conn.last_insert_rowid());

        Ok(Question::new(id, question.question_text(), pub_date))
    }

    async fn get(&self, id: QuestionId) -> Result<Option<Question>, RepositoryError> {
        let conn = self.lock()?;
        let raw = conn
            .query_row(
                &format!("{SELECT_COLUMNS} WHERE id = ?1"),
                params![id.value()],
                read_row,
            )
            .optional()
            .map_err(storage_err)?;
        raw.map(into_question).transpose()
    }

    async fn list(&self) -> Result<Vec<Question>, RepositoryError> {
        let conn = self.lock()?;
        query_questions(&conn, &format!("{SELECT_COLUMNS} ORDER BY id ASC"), params![])
    }

    async fn list_visible(
        &self,
        now: DateTime<Utc>,
        limit: usize,
    ) -> Result<Vec<Question>, RepositoryError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let conn = self.lock()?;
        query_questions(
            &conn,
            &format!(
                "{SELECT_COLUMNS} WHERE pub_date <= ?1 ORDER BY pub_date DESC, id DESC LIMIT ?2"
            ),
            params![encode_cutoff(now), limit],
        )
    }

    async fn get_visible(
        &self,
        id: QuestionId,
        now: DateTime<Utc>,
    ) -> Result<Option<Question>, RepositoryError> {
        let conn = self.lock()?;
        let raw = conn
            .query_row(
                &format!("{SELECT_COLUMNS} WHERE id = ?1 AND pub_date <= ?2"),
                params![id.value(), encode_cutoff(now)],
                read_row,
            )
            .optional()
            .map_err(storage_err)?;
        raw.map(into_question).transpose()
    }
}
