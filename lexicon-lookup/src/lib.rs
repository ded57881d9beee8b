//! lexicon-lookup - dictionary lookup client
//!
//! This crate provides:
//! - A client for the external dictionary service (`LookupClient`)
//! - The response model (entries, meanings, senses)
//! - Sense selection that shapes a lookup into a word-store payload
//!
//! ## Flow
//!
//! ```text
//! word → LookupClient::lookup → Vec<LookupEntry> → select_sense → SavePayload
//! ```

pub mod client;
pub mod entry;
pub mod select;

pub use client::{decode_response, LookupClient, LookupError, DEFAULT_LOOKUP_URL, LOOKUP_URL_VAR};
pub use entry::{LookupEntry, Meaning, Sense};
pub use select::{meanings, select_sense, SavePayload, SenseChoice};
