//! Repository implementations for database access
//!
//! Repositories validate input, enforce domain invariants and translate
//! store failures into `RepoError`.

pub mod words;

pub use words::{RepoError, WordRepo};
