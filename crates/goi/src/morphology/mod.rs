//! morphology module
//!
//! Bidirectional inflectional morphology: irregular form tables, generative
//! suffixation rules, surface generation, and surface-to-base resolution.

pub mod inflector;
pub mod irregular;
pub mod resolver;
pub mod rules;

/// Re-export major types
pub use inflector::Inflector;
pub use irregular::{IrregularForms, IrregularHit};
pub use resolver::{HitSource, Resolver, VariantHit};
