//! index module
//!
//! In-memory multi-key index over the entries of one lexicon.

pub mod entry_index;

/// Re-export major types
pub use entry_index::EntryIndex;
