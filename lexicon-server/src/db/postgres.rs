//! Postgres word store
//!
//! - insert: single INSERT ... RETURNING, unique index violations become
//!   `DuplicateWord`
//! - update/delete: report rows matched, never re-read the document

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::store::{StoreError, WordStore};
use crate::models::{NewWord, WordEntry, WordUpdate};

/// Word record from database
#[derive(Debug, Clone, FromRow)]
struct WordRow {
    id: Uuid,
    word: String,
    definition: String,
    example: Option<String>,
    synonyms: Vec<String>,
    antonyms: Vec<String>,
    created_at: DateTime<Utc>,
}

impl From<WordRow> for WordEntry {
    fn from(r: WordRow) -> Self {
        Self {
            id: r.id,
            word: r.word,
            definition: r.definition,
            example: r.example,
            synonyms: r.synonyms,
            antonyms: r.antonyms,
            created_at: r.created_at,
        }
    }
}

/// Word store over a Postgres pool
#[derive(Clone)]
pub struct PgWordStore {
    pool: PgPool,
}

impl PgWordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Map a unique-index violation on `words.word` to `DuplicateWord`.
fn classify(err: sqlx::Error, word: &str) -> StoreError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_unique_violation() {
            return StoreError::DuplicateWord(word.to_owned());
        }
    }
    StoreError::Backend(err)
}

#[async_trait]
impl WordStore for PgWordStore {
    async fn find_by_word(&self, word: &str) -> Result<Option<WordEntry>, StoreError> {
        let row: Option<WordRow> = sqlx::query_as(
            r#"
            SELECT id, word, definition, example, synonyms, antonyms, created_at
            FROM words
            WHERE word = $1
            "#,
        )
        .bind(word)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(WordEntry::from))
    }

    async fn insert(&self, new: &NewWord) -> Result<WordEntry, StoreError> {
        let row: WordRow = sqlx::query_as(
            r#"
            INSERT INTO words (word, definition, example, synonyms, antonyms)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, word, definition, example, synonyms, antonyms, created_at
            "#,
        )
        .bind(new.word.as_str())
        .bind(new.definition.as_str())
        .bind(new.example.as_ref().map(|e| e.as_str()))
        .bind(new.synonyms.as_slice())
        .bind(new.antonyms.as_slice())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| classify(e, new.word.as_str()))?;

        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<WordEntry>, StoreError> {
        let rows: Vec<WordRow> = sqlx::query_as(
            r#"
            SELECT id, word, definition, example, synonyms, antonyms, created_at
            FROM words
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(WordEntry::from).collect())
    }

    async fn update_fields(&self, id: Uuid, update: &WordUpdate) -> Result<u64, StoreError> {
        let result = sqlx::query("UPDATE words SET word = $2, definition = $3 WHERE id = $1")
            .bind(id)
            .bind(update.word.as_str())
            .bind(update.definition.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| classify(e, update.word.as_str()))?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: Uuid) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM words WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
