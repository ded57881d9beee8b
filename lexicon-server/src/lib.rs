//! lexicon-server: word store HTTP API
//!
//! Persists looked-up word definitions and exposes them over JSON:
//! - `POST /words`, `GET /words`
//! - `PUT /words/{id}`, `DELETE /words/{id}`
//!
//! Layers, leaf to root: `db::pool` (shared connection handle),
//! `db::WordRepo` (validation and uniqueness over a `WordStore`),
//! `http` (axum handlers and error mapping).

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{ConfigError, DatabaseConfig};
pub use db::{MemoryWordStore, PgWordStore, RepoError, StoreError, WordRepo, WordStore};
pub use http::{build_router, run_server, AppState, ServerConfig};
