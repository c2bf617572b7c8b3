// crates/goi/src/config.rs

use serde::Deserialize;

use crate::errors::ConfigError;

/// Top-level configuration for goi.
///
/// Every section has defaults, so `LexiconConfig::default()` is a fully
/// working configuration and any subset can be given in a config file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LexiconConfig {
  /// [lookup] section
  #[serde(default)]
  pub lookup: LookupConfig,
  /// [morphology] section
  #[serde(default)]
  pub morphology: MorphologyConfig,
  /// [logging] section
  #[serde(default)]
  pub logging: LoggingConfig,
}

/// [lookup] section configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LookupConfig {
  /// Whether a multi-lexicon keeps searching lower-priority sources after
  /// the first source produced a match
  #[serde(default)]
  pub search_all_sources: bool,
  /// Maximum number of candidate entries returned by variant resolution
  #[serde(default = "default_max_variant_results")]
  pub max_variant_results: usize,
}

/// Default cap for variant resolution results
fn default_max_variant_results() -> usize {
  8
}

impl Default for LookupConfig {
  fn default() -> Self {
    Self {
      search_all_sources: false,
      max_variant_results: default_max_variant_results(),
    }
  }
}

/// [morphology] section configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MorphologyConfig {
  /// Whether the built-in irregular form table is consulted
  #[serde(default = "default_use_builtin_irregulars")]
  pub use_builtin_irregulars: bool,
  /// Whether stored per-entry form features (plural, past, ...) are folded
  /// into the irregular table at build time
  #[serde(default = "default_fold_stored_forms")]
  pub fold_stored_forms: bool,
}

/// The built-in irregular table is on unless switched off
fn default_use_builtin_irregulars() -> bool {
  true
}

/// Stored form folding is on unless switched off
fn default_fold_stored_forms() -> bool {
  true
}

impl Default for MorphologyConfig {
  fn default() -> Self {
    Self {
      use_builtin_irregulars: default_use_builtin_irregulars(),
      fold_stored_forms: default_fold_stored_forms(),
    }
  }
}

/// [logging] section configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
  /// Log level: "trace" | "debug" | "info" | "warn" | "error"
  #[serde(default = "default_log_level")]
  pub level: LogLevel,
}

/// Default log level (info)
fn default_log_level() -> LogLevel {
  LogLevel::Info
}

impl Default for LoggingConfig {
  fn default() -> Self {
    Self {
      level: default_log_level(),
    }
  }
}

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
  /// trace
  Trace,

  /// debug
  Debug,

  /// info
  Info,

  /// warn
  Warn,

  /// error
  Error,
}

impl LogLevel {
  /// Returns the level name understood by tracing env filters.
  pub fn code(self) -> &'static str {
    match self {
      LogLevel::Trace => "trace",
      LogLevel::Debug => "debug",
      LogLevel::Info => "info",
      LogLevel::Warn => "warn",
      LogLevel::Error => "error",
    }
  }
}

impl std::fmt::Display for LogLevel {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.code())
  }
}

// ===== Accessor Methods =====

impl LexiconConfig {
  /// Returns whether a multi-lexicon searches every source.
  pub fn search_all_sources(&self) -> bool {
    self.lookup.search_all_sources
  }

  /// Returns the cap on variant resolution results.
  pub fn max_variant_results(&self) -> usize {
    self.lookup.max_variant_results
  }

  /// Returns whether the built-in irregular table is consulted.
  pub fn use_builtin_irregulars(&self) -> bool {
    self.morphology.use_builtin_irregulars
  }

  /// Returns whether stored form features are folded at build time.
  pub fn fold_stored_forms(&self) -> bool {
    self.morphology.fold_stored_forms
  }

  /// Returns the log level.
  pub fn log_level(&self) -> LogLevel {
    self.logging.level
  }

  /// Validates the configuration.
  ///
  /// # Validation Items
  /// - `lookup.max_variant_results` >= 1
  ///
  /// # Errors
  /// Returns the corresponding `ConfigError` if validation fails.
  pub fn validate(&self) -> Result<(), ConfigError> {
    // lookup.max_variant_results >= 1
    if self.lookup.max_variant_results < 1 {
      return Err(ConfigError::InvalidMaxVariantResults {
        actual: self.lookup.max_variant_results,
      });
    }

    Ok(())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  // ─── Test Helpers ─────────────────────────────────────────────────────

  /// Creates a base valid configuration
  fn create_valid_config() -> LexiconConfig {
    LexiconConfig {
      lookup: LookupConfig {
        search_all_sources: false,
        max_variant_results: 8,
      },
      morphology: MorphologyConfig {
        use_builtin_irregulars: true,
        fold_stored_forms: true,
      },
      logging: LoggingConfig {
        level: LogLevel::Info,
      },
    }
  }

  // ─── Defaults ─────────────────────────────────────────────────────────

  #[test]
  fn default_config_is_valid() {
    let config = LexiconConfig::default();

    assert!(config.validate().is_ok());
    assert!(!config.search_all_sources());
    assert_eq!(config.max_variant_results(), 8);
    assert!(config.use_builtin_irregulars());
    assert!(config.fold_stored_forms());
    assert_eq!(config.log_level(), LogLevel::Info);
  }

  #[test]
  fn config_deserializes_from_empty_object() {
    let config: LexiconConfig = serde_json::from_str("{}").expect("should deserialize");

    assert_eq!(config.max_variant_results(), 8);
    assert!(config.use_builtin_irregulars());
  }

  #[test]
  fn config_deserializes_partial_sections() {
    let json_str = r#"{
      "lookup": { "search_all_sources": true },
      "morphology": { "use_builtin_irregulars": false }
    }"#;

    let config: LexiconConfig = serde_json::from_str(json_str).expect("should deserialize");

    assert!(config.search_all_sources());
    // Omitted fields keep their defaults
    assert_eq!(config.max_variant_results(), 8);
    assert!(!config.use_builtin_irregulars());
    assert!(config.fold_stored_forms());
    assert_eq!(config.log_level(), LogLevel::Info);
  }

  #[test]
  fn log_level_deserializes_lowercase() {
    let json_str = r#"{ "logging": { "level": "debug" } }"#;
    let config: LexiconConfig = serde_json::from_str(json_str).expect("should deserialize");

    assert_eq!(config.log_level(), LogLevel::Debug);
    assert_eq!(config.log_level().code(), "debug");
  }

  // ─── validate() ───────────────────────────────────────────────────────

  #[test]
  fn validate_accepts_valid_config() {
    let config = create_valid_config();

    let result = config.validate();
    assert!(result.is_ok(), "valid config should pass validation");
  }

  #[test]
  fn validate_accepts_min_variant_results() {
    let mut config = create_valid_config();
    config.lookup.max_variant_results = 1;

    let result = config.validate();
    assert!(result.is_ok());
  }

  #[test]
  fn validate_rejects_zero_variant_results() {
    let mut config = create_valid_config();
    config.lookup.max_variant_results = 0;

    let err = config.validate().unwrap_err();
    match err {
      ConfigError::InvalidMaxVariantResults { actual } => {
        assert_eq!(actual, 0);
      }
      _ => panic!("expected InvalidMaxVariantResults error"),
    }
  }

  // ─── Accessor Method Tests ────────────────────────────────────────────

  #[test]
  fn accessors_return_configured_values() {
    let mut config = create_valid_config();
    config.lookup.search_all_sources = true;
    config.lookup.max_variant_results = 3;
    config.morphology.fold_stored_forms = false;
    config.logging.level = LogLevel::Warn;

    assert!(config.search_all_sources());
    assert_eq!(config.max_variant_results(), 3);
    assert!(!config.fold_stored_forms());
    assert_eq!(config.log_level(), LogLevel::Warn);
  }

  #[test]
  fn log_level_display_matches_code() {
    assert_eq!(LogLevel::Trace.to_string(), "trace");
    assert_eq!(LogLevel::Error.to_string(), "error");
  }
}
