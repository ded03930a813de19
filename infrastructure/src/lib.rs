//! Infrastructure layer for polls
//!
//! This crate contains adapters that implement the ports defined in the
//! domain and application layers: question storage, the system clock, and
//! configuration file loading.

pub mod clock;
pub mod config;
pub mod storage;

// Re-export commonly used types
pub use clock::SystemClock;
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileIndexConfig, FileLoggingConfig,
    FileOutputConfig, FileOutputFormat, FileStorageBackend, FileStorageConfig,
};
pub use storage::{
    InMemoryQuestionRepository, QuestionStore, SqliteQuestionRepository, StorageInitError,
};
