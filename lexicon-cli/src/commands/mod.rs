//! Command implementations for the lexicon CLI

pub mod lookup;
pub mod save;
pub mod serve;

pub use lookup::run_lookup;
pub use save::run_save;
pub use serve::run_serve;
