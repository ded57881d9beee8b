//! Word repository
//!
//! Handles word CRUD:
//! - create: validate, pre-check for an existing `word`, insert
//! - list: every entry, store-native order
//! - update: replace `word` + `definition` only, matched-count semantics
//! - delete: by id

use uuid::Uuid;

use crate::db::store::{StoreError, WordStore};
use crate::models::{CreateWord, NewWord, UpdateWord, ValidationError, WordEntry, WordUpdate};

/// Repository error
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("word '{word}' already exists")]
    Conflict { word: String },

    #[error("word '{id}' not found")]
    NotFound { id: Uuid },

    #[error("store unavailable during {operation}: {source}")]
    StoreUnavailable {
        operation: &'static str,
        #[source]
        source: StoreError,
    },
}

/// Word repository
pub struct WordRepo<'a> {
    store: &'a dyn WordStore,
}

impl<'a> WordRepo<'a> {
    pub fn new(store: &'a dyn WordStore) -> Self {
        Self { store }
    }

    /// Create a word entry.
    ///
    /// The existence check is a fast path only. Two concurrent creates can
    /// both pass it, in which case the store's unique constraint rejects
    /// the loser and that is reported as `Conflict` too.
    pub async fn create(&self, req: CreateWord) -> Result<WordEntry, RepoError> {
        let new = NewWord::try_from(req)?;

        let existing = self
            .store
            .find_by_word(new.word.as_str())
            .await
            .map_err(|e| unavailable("create", e))?;
        if existing.is_some() {
            tracing::debug!(word = new.word.as_str(), "Rejecting duplicate word");
            return Err(RepoError::Conflict {
                word: new.word.into_string(),
            });
        }

        match self.store.insert(&new).await {
            Ok(entry) => {
                tracing::info!(id = %entry.id, word = %entry.word, "Word saved");
                Ok(entry)
            }
            Err(StoreError::DuplicateWord(word)) => Err(RepoError::Conflict { word }),
            Err(e) => Err(unavailable("create", e)),
        }
    }

    /// List every entry.
    pub async fn list(&self) -> Result<Vec<WordEntry>, RepoError> {
        let entries = self.store.list().await.map_err(|e| unavailable("list", e))?;
        tracing::debug!(count = entries.len(), "Listed words");
        Ok(entries)
    }

    /// Replace `word` and `definition` on an existing entry.
    ///
    /// `example`, `synonyms`, `antonyms` and `createdAt` are left as they
    /// are. An update that changes nothing still succeeds.
    pub async fn update(&self, id: Uuid, req: UpdateWord) -> Result<(), RepoError> {
        let update = WordUpdate::try_from(req)?;
        self.apply_update(id, update).await
    }

    /// Apply an already validated update.
    pub async fn apply_update(&self, id: Uuid, update: WordUpdate) -> Result<(), RepoError> {
        match self.store.update_fields(id, &update).await {
            Ok(0) => Err(RepoError::NotFound { id }),
            Ok(_) => {
                tracing::info!(%id, word = update.word.as_str(), "Word updated");
                Ok(())
            }
            Err(StoreError::DuplicateWord(word)) => Err(RepoError::Conflict { word }),
            Err(e) => Err(unavailable("update", e)),
        }
    }

    /// Delete an entry by id.
    pub async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        match self.store.delete(id).await {
            Ok(0) => Err(RepoError::NotFound { id }),
            Ok(_) => {
                tracing::info!(%id, "Word deleted");
                Ok(())
            }
            Err(e) => Err(unavailable("delete", e)),
        }
    }
}

fn unavailable(operation: &'static str, source: StoreError) -> RepoError {
    tracing::error!(operation, error = %source, "Word store failure");
    RepoError::StoreUnavailable { operation, source }
}
