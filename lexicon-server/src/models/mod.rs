//! Domain models with validation at construction
//!
//! Request payloads are validated when converted into these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod text;
pub mod word;

pub use validation::ValidationError;
pub use text::{RequiredText, TermSet};
pub use word::{CreateWord, NewWord, UpdateWord, WordEntry, WordUpdate};
