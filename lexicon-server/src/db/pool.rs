//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. `shared_pool` hands
//! out a single process-wide pool: the first caller connects and runs
//! migrations, every later caller gets the same pool back.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::sync::OnceCell;

use super::migrations;
use crate::config::{DatabaseConfig, DEFAULT_MAX_CONNECTIONS};

static SHARED_POOL: OnceCell<PgPool> = OnceCell::const_new();

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/lexicon").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a PostgreSQL connection pool with custom options.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Get the process-wide pool, connecting on first use.
///
/// Concurrent first callers wait on the same initialisation. A failed
/// initialisation is not cached, so the next call tries again. The
/// config is only read by the call that actually connects.
pub async fn shared_pool(config: &DatabaseConfig) -> Result<&'static PgPool, sqlx::Error> {
    SHARED_POOL
        .get_or_try_init(|| async {
            tracing::info!(
                max_connections = config.max_connections,
                "Opening shared database pool"
            );
            let pool = create_pool_with_options(&config.url, config.max_connections).await?;
            migrations::run(&pool).await?;
            Ok(pool)
        })
        .await
}
