//! models module
pub mod category;
pub mod entry;
pub mod feature;
pub mod inflection;

/// Re-export major model types
pub use category::Category;
pub use entry::{RawEntry, WordEntry};
pub use feature::{FeatureKey, FeatureSet, FeatureValue};
pub use inflection::{Inflection, WordForm};
