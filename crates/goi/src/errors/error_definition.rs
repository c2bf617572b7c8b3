//! Error definitions

use thiserror::Error;

/// Configuration (LexiconConfig) errors
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// lookup.max_variant_results < 1
  #[error("lookup.max_variant_results must be at least 1: actual={actual}")]
  InvalidMaxVariantResults {
    /// The value that was supplied
    actual: usize,
  },
}

/// Lexicon construction errors.
///
/// Raised while raw entry records are validated and indexed. Any one of
/// these aborts the whole build; no partially populated lexicon is ever
/// returned.
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum BuildError {
  /// A record has a blank identifier
  #[error("entry record at position {position} has no identifier")]
  MissingId {
    /// Zero-based position of the record in the load sequence
    position: usize,
  },

  /// A record has a blank base form
  #[error("entry {id} has no base form")]
  MissingBaseForm {
    /// Identifier of the offending record
    id: String,
  },

  /// A record has no grammatical category
  #[error("entry {id} has no category")]
  MissingCategory {
    /// Identifier of the offending record
    id: String,
  },

  /// Two records share one identifier
  #[error("duplicate entry identifier: {id}")]
  DuplicateId {
    /// The identifier that appeared more than once
    id: String,
  },

  /// A feature value is neither a JSON string nor a boolean
  #[error("entry {id} has a non-scalar value for feature {key}")]
  InvalidFeatureValue {
    /// Identifier of the offending record
    id: String,
    /// Wire name of the offending feature key
    key: String,
  },

  /// A default_infl feature carries an unrecognized pattern code
  #[error("entry {id} declares an unknown inflection code: {code}")]
  UnknownInflectionCode {
    /// Identifier of the offending record
    id: String,
    /// The unrecognized code
    code: String,
  },
}

/// Unified error.
/// Error APIs exposed outside this crate return this type.
/// Used as `GoiResult<T>` = `Result<T, GoiError>`.
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum GoiError {
  /// Configuration error
  #[error(transparent)]
  Config(#[from] ConfigError),

  /// Lexicon construction error
  #[error(transparent)]
  Build(#[from] BuildError),

  /// A multi-lexicon was constructed with no sources
  #[error("a multi-lexicon requires at least one source lexicon")]
  NoSources,
}

/// Standard Result type alias of the goi crate
pub type GoiResult<T> = Result<T, GoiError>;

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn build_errors_name_the_offending_record() {
    let err = BuildError::DuplicateId { id: "E0012345".to_string() };
    assert_eq!(err.to_string(), "duplicate entry identifier: E0012345");

    let err = BuildError::MissingId { position: 3 };
    assert_eq!(err.to_string(), "entry record at position 3 has no identifier");

    let err = BuildError::UnknownInflectionCode {
      id: "E1".to_string(),
      code: "weird".to_string(),
    };
    assert_eq!(err.to_string(), "entry E1 declares an unknown inflection code: weird");
  }

  #[test]
  fn unified_error_is_transparent_over_build_errors() {
    let inner = BuildError::MissingBaseForm { id: "E1".to_string() };
    let outer = GoiError::from(inner.clone());

    // transparent: the message passes through unchanged
    assert_eq!(outer.to_string(), inner.to_string());
    assert!(matches!(outer, GoiError::Build(_)));
  }

  #[test]
  fn unified_error_is_transparent_over_config_errors() {
    let inner = ConfigError::InvalidMaxVariantResults { actual: 0 };
    let outer = GoiError::from(inner.clone());

    assert_eq!(outer.to_string(), inner.to_string());
    assert!(matches!(outer, GoiError::Config(_)));
  }
}
