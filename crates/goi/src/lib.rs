//! goi lexicon library
//!
//! An in-memory lexical knowledge base for English natural language
//! generation: word entries with grammatical categories and typed features,
//! multi-key retrieval, and bidirectional inflectional morphology (base
//! form to surface form and back), with irregular form tables overriding
//! the generative suffixation rules.
//!
//! A [`Lexicon`] is built once from raw entry records, fails atomically on
//! malformed input, and is immutable and lock-free afterwards; query misses
//! come back as `None` or empty results, never as errors.

/// Configuration module - defines LexiconConfig and its sections
pub mod config;

/// Error module - defines GoiError, GoiResult and the per-concern errors
pub mod errors;

/// Index module - multi-key retrieval over validated word entries
pub mod index;

/// Lexicon module - the Lexicon facade and MultiLexicon chaining
pub mod lexicon;

/// Data model module - Category, WordEntry, FeatureSet and friends
pub mod models;

/// Morphology module - irregular tables, rules, generation and resolution
pub mod morphology;

/// Re-exports
pub use config::LexiconConfig;
pub use errors::{BuildError, ConfigError, GoiError, GoiResult};
pub use lexicon::{Lexicon, MultiLexicon};
pub use models::{Category, FeatureKey, FeatureValue, Inflection, RawEntry, WordEntry, WordForm};
pub use morphology::{HitSource, VariantHit};
