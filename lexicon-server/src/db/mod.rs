//! Database layer - connection handle, stores and the word repository
//!
//! # Design Principles
//!
//! - One process-wide connection pool, initialised once on first use
//! - Stores are raw collection access; validation lives in the repository
//! - Uniqueness of `word` is enforced by a unique index, with a pre-check
//!   as fast path

pub mod memory;
pub mod migrations;
pub mod pool;
pub mod postgres;
pub mod repos;
pub mod store;

pub use memory::MemoryWordStore;
pub use pool::{create_pool, create_pool_with_options, shared_pool};
pub use postgres::PgWordStore;
pub use repos::{RepoError, WordRepo};
pub use store::{StoreError, WordStore};
