//! Word store trait - raw access to the word collection
//!
//! Implementations:
//! - `PgWordStore` backed by Postgres
//! - `MemoryWordStore` for tests and `serve --in-memory`
//!
//! Stores do no validation. They must reject a second entry with the same
//! `word` with `StoreError::DuplicateWord`.

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{NewWord, WordEntry, WordUpdate};

/// Store-level error
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("word '{0}' already exists")]
    DuplicateWord(String),

    #[error("database error: {0}")]
    Backend(#[from] sqlx::Error),
}

/// Collection operations on word entries
#[async_trait]
pub trait WordStore: Send + Sync {
    /// Find the entry whose `word` matches exactly.
    async fn find_by_word(&self, word: &str) -> Result<Option<WordEntry>, StoreError>;

    /// Insert a new entry; the store assigns `id` and `created_at`.
    async fn insert(&self, new: &NewWord) -> Result<WordEntry, StoreError>;

    /// All entries in store-native order.
    async fn list(&self) -> Result<Vec<WordEntry>, StoreError>;

    /// Replace `word` and `definition` on the entry with `id`.
    ///
    /// Returns the number of matched entries (0 or 1), whether or not
    /// any value changed.
    async fn update_fields(&self, id: Uuid, update: &WordUpdate) -> Result<u64, StoreError>;

    /// Delete the entry with `id`, returning the number removed (0 or 1).
    async fn delete(&self, id: Uuid) -> Result<u64, StoreError>;

    /// Check that the store answers.
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
