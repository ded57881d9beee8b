//! HTTP server command for the word store

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use lexicon_server::config::DATABASE_URL_VAR;
use lexicon_server::db::shared_pool;
use lexicon_server::{
    run_server, AppState, DatabaseConfig, MemoryWordStore, PgWordStore, ServerConfig, WordStore,
};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:3030)
    #[arg(long, short = 'b', default_value = "127.0.0.1:3030")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL", conflicts_with = "in_memory")]
    pub database_url: Option<String>,

    /// Keep words in process memory instead of Postgres (lost on exit)
    #[arg(long)]
    pub in_memory: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let store: Arc<dyn WordStore> = if args.in_memory {
        tracing::warn!("Using in-memory store; words are not persisted");
        Arc::new(MemoryWordStore::new())
    } else {
        let config = database_config(args.database_url)?;
        let pool = shared_pool(&config)
            .await
            .context("Failed to connect to database")?;
        Arc::new(PgWordStore::new(pool.clone()))
    };

    tracing::info!("Starting lexicon server on {}", args.bind);

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Blocks until shutdown
    run_server(AppState::new(store), config)
        .await
        .context("Server error")?;

    Ok(())
}

/// Environment config with `--database-url` taking precedence.
fn database_config(url: Option<String>) -> Result<DatabaseConfig> {
    let config = DatabaseConfig::from_vars(|name| {
        if name == DATABASE_URL_VAR {
            url.clone().or_else(|| std::env::var(name).ok())
        } else {
            std::env::var(name).ok()
        }
    })?;
    Ok(config)
}
