//! Database migrations for the words table

use sqlx::PgPool;

/// Run all migrations (idempotent)
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running word store migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS words (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            word TEXT NOT NULL,
            definition TEXT NOT NULL,
            example TEXT,
            synonyms TEXT[] NOT NULL DEFAULT '{}',
            antonyms TEXT[] NOT NULL DEFAULT '{}',
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Authoritative uniqueness for `word`; the repository pre-check is only a fast path
    sqlx::query("CREATE UNIQUE INDEX IF NOT EXISTS idx_words_word ON words(word)")
        .execute(pool)
        .await?;

    tracing::info!("Word store migrations complete");
    Ok(())
}
