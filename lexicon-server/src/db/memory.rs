//! In-memory word store
//!
//! Insertion-ordered, guarded by a tokio `RwLock`. Applies the same
//! unique-word rule as the Postgres index so repository behaviour is
//! identical across backends.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::store::{StoreError, WordStore};
use crate::models::{NewWord, WordEntry, WordUpdate};

/// Word store held in process memory
#[derive(Default)]
pub struct MemoryWordStore {
    entries: RwLock<Vec<WordEntry>>,
}

impl MemoryWordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl WordStore for MemoryWordStore {
    async fn find_by_word(&self, word: &str) -> Result<Option<WordEntry>, StoreError> {
        let entries = self.entries.read().await;
        Ok(entries.iter().find(|e| e.word == word).cloned())
    }

    async fn insert(&self, new: &NewWord) -> Result<WordEntry, StoreError> {
        let mut entries = self.entries.write().await;

        if entries.iter().any(|e| e.word == new.word.as_str()) {
            return Err(StoreError::DuplicateWord(new.word.as_str().to_owned()));
        }

        let entry = WordEntry::from_new(Uuid::new_v4(), Utc::now(), new);
        entries.push(entry.clone());
        Ok(entry)
    }

    async fn list(&self) -> Result<Vec<WordEntry>, StoreError> {
        Ok(self.entries.read().await.clone())
    }

    async fn update_fields(&self, id: Uuid, update: &WordUpdate) -> Result<u64, StoreError> {
        let mut entries = self.entries.write().await;

        let Some(idx) = entries.iter().position(|e| e.id == id) else {
            return Ok(0);
        };

        let word = update.word.as_str();
        if entries.iter().any(|e| e.id != id && e.word == word) {
            return Err(StoreError::DuplicateWord(word.to_owned()));
        }

        let entry = &mut entries[idx];
        entry.word = word.to_owned();
        entry.definition = update.definition.as_str().to_owned();
        Ok(1)
    }

    async fn delete(&self, id: Uuid) -> Result<u64, StoreError> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|e| e.id != id);
        Ok((before - entries.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CreateWord, RequiredText};

    fn new_word(word: &str) -> NewWord {
        NewWord::validate(&CreateWord {
            word: Some(word.to_string()),
            definition: Some(format!("meaning of {word}")),
            ..Default::default()
        })
        .unwrap()
    }

    fn update(word: &str, definition: &str) -> WordUpdate {
        WordUpdate {
            word: RequiredText::new("word", Some(word), 128).unwrap(),
            definition: RequiredText::new("definition", Some(definition), 128).unwrap(),
        }
    }

    #[tokio::test]
    async fn list_keeps_insertion_order() {
        let store = MemoryWordStore::new();
        for w in ["alpha", "beta", "gamma"] {
            store.insert(&new_word(w)).await.unwrap();
        }

        let words: Vec<_> = store.list().await.unwrap().into_iter().map(|e| e.word).collect();
        assert_eq!(words, ["alpha", "beta", "gamma"]);
    }

    #[tokio::test]
    async fn insert_rejects_duplicate_word() {
        let store = MemoryWordStore::new();
        store.insert(&new_word("run")).await.unwrap();

        let err = store.insert(&new_word("run")).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateWord(w) if w == "run"));
        assert_eq!(store.len().await, 1);

        // Exact match only
        store.insert(&new_word("Run")).await.unwrap();
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn update_reports_match_even_without_change() {
        let store = MemoryWordStore::new();
        let entry = store.insert(&new_word("run")).await.unwrap();

        let same = update("run", "meaning of run");
        assert_eq!(store.update_fields(entry.id, &same).await.unwrap(), 1);
        assert_eq!(store.update_fields(Uuid::new_v4(), &same).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn update_rejects_word_owned_by_other_entry() {
        let store = MemoryWordStore::new();
        store.insert(&new_word("run")).await.unwrap();
        let walk = store.insert(&new_word("walk")).await.unwrap();

        let err = store
            .update_fields(walk.id, &update("run", "x"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateWord(_)));

        let found = store.find_by_word("walk").await.unwrap().unwrap();
        assert_eq!(found.definition, "meaning of walk");
    }

    #[tokio::test]
    async fn delete_removes_one() {
        let store = MemoryWordStore::new();
        let entry = store.insert(&new_word("run")).await.unwrap();
        store.insert(&new_word("walk")).await.unwrap();

        assert_eq!(store.delete(entry.id).await.unwrap(), 1);
        assert_eq!(store.delete(entry.id).await.unwrap(), 0);
        assert_eq!(store.len().await, 1);
    }
}
