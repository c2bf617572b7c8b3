//! Word entry records: raw inbound form and validated immutable form
use crate::errors::BuildError;
use crate::models::category::Category;
use crate::models::feature::{FeatureKey, FeatureSet, FeatureValue};
use crate::models::inflection::Inflection;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

/// One raw entry record as supplied by a data source.
///
/// This is the wire form: loaders hand a sequence of these to
/// [`Lexicon::from_entries`](crate::Lexicon::from_entries). Validation and
/// typing happen during the build; a `RawEntry` itself accepts anything
/// serde can read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEntry {
  /// Stable identifier, unique across one load
  pub id: String,

  /// Base form (canonical dictionary spelling)
  pub base: String,

  /// Grammatical category; a record without one is rejected at build time
  #[serde(default)]
  pub category: Option<Category>,

  /// Feature map; values must be JSON strings or booleans
  #[serde(default)]
  pub features: HashMap<String, JsonValue>,

  /// Declared inflection patterns
  #[serde(default)]
  pub variants: Vec<Inflection>,

  /// Explicit default pattern, overriding any `default_infl` feature
  #[serde(default)]
  pub default_variant: Option<Inflection>,
}

impl RawEntry {
  /// Constructor with the three mandatory fields.
  pub fn new(id: impl Into<String>, base: impl Into<String>, category: Category) -> Self {
    Self {
      id: id.into(),
      base: base.into(),
      category: Some(category),
      features: HashMap::new(),
      variants: Vec::new(),
      default_variant: None,
    }
  }

  /// Builder that stores one feature value and returns Self
  #[must_use]
  pub fn with_feature(mut self, key: impl Into<String>, value: JsonValue) -> Self {
    self.features.insert(key.into(), value);
    self
  }

  /// Builder that declares one inflection pattern and returns Self
  #[must_use]
  pub fn with_variant(mut self, pattern: Inflection) -> Self {
    self.variants.push(pattern);
    self
  }

  /// Builder that sets the explicit default pattern and returns Self
  #[must_use]
  pub fn with_default_variant(mut self, pattern: Inflection) -> Self {
    self.default_variant = Some(pattern);
    self
  }
}

/// One validated lexical item: a base form under one category, with its
/// typed features and declared inflectional behavior.
///
/// Entries are created while the lexicon is built and never change
/// afterwards; the fields stay private so the only mutation path is
/// [`WordEntry::from_raw`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
  id: String,
  base: String,
  category: Category,
  features: FeatureSet,
  variants: Vec<Inflection>,
  default_variant: Inflection,
  seq: usize,
}

impl WordEntry {
  /// Validates and types a raw record.
  ///
  /// `seq` is the zero-based position of the record in the load sequence;
  /// it is kept for the deterministic homograph tie-break and reported when
  /// a record has no usable identifier.
  ///
  /// # Errors
  ///
  /// [`BuildError::MissingId`] for a blank identifier,
  /// [`BuildError::MissingBaseForm`] for a blank base form,
  /// [`BuildError::MissingCategory`] for a record with no category,
  /// [`BuildError::InvalidFeatureValue`] for a feature that is neither a
  /// JSON string nor a boolean, and [`BuildError::UnknownInflectionCode`]
  /// for an unparseable `default_infl` code.
  pub fn from_raw(raw: RawEntry, seq: usize) -> Result<Self, BuildError> {
    let id = raw.id.trim().to_string();
    if id.is_empty() {
      return Err(BuildError::MissingId { position: seq });
    }

    let base = raw.base.trim().to_string();
    if base.is_empty() {
      return Err(BuildError::MissingBaseForm { id });
    }

    let Some(category) = raw.category else {
      return Err(BuildError::MissingCategory { id });
    };

    let features = convert_features(&id, raw.features)?;

    // Duplicate declarations collapse, first occurrence keeps its position.
    let mut variants: Vec<Inflection> = Vec::with_capacity(raw.variants.len());
    for pattern in raw.variants {
      if !variants.contains(&pattern) {
        variants.push(pattern);
      }
    }

    let default_variant = resolve_default(raw.default_variant, &features, &variants);
    if !variants.contains(&default_variant) {
      variants.push(default_variant);
    }

    Ok(Self {
      id,
      base,
      category,
      features,
      variants,
      default_variant,
      seq,
    })
  }

  // ===== Accessors =====

  /// Stable identifier.
  pub fn id(&self) -> &str {
    &self.id
  }

  /// Base form.
  pub fn base(&self) -> &str {
    &self.base
  }

  /// Grammatical category.
  pub fn category(&self) -> Category {
    self.category
  }

  /// The full feature record.
  pub fn features(&self) -> &FeatureSet {
    &self.features
  }

  /// Raw feature lookup; `None` when the key is unset.
  pub fn feature(&self, key: &FeatureKey) -> Option<&FeatureValue> {
    self.features.get(key)
  }

  /// Text feature lookup; `None` when unset or not text.
  pub fn feature_as_string(&self, key: &FeatureKey) -> Option<&str> {
    self.features.text(key)
  }

  /// Flag feature lookup; `None` when unset, so "unset" and `false` stay
  /// distinct.
  pub fn feature_as_bool(&self, key: &FeatureKey) -> Option<bool> {
    self.features.flag(key)
  }

  /// Whether the entry declared (or defaulted to) the given pattern.
  pub fn has_inflectional_variant(&self, pattern: Inflection) -> bool {
    self.variants.contains(&pattern)
  }

  /// All declared patterns; always contains the default.
  pub fn inflectional_variants(&self) -> &[Inflection] {
    &self.variants
  }

  /// The pattern used when a form must be generated by rule.
  pub fn default_inflectional_variant(&self) -> Inflection {
    self.default_variant
  }

  /// Whether this entry is marked as the primary sense of its base form.
  pub fn is_primary(&self) -> bool {
    self.features.flag(&FeatureKey::Primary) == Some(true)
  }

  /// Load-order position, the last resort of the homograph tie-break.
  pub(crate) fn sequence(&self) -> usize {
    self.seq
  }
}

/// Types the JSON feature map.
fn convert_features(
  id: &str,
  raw: HashMap<String, JsonValue>,
) -> Result<FeatureSet, BuildError> {
  let mut features = FeatureSet::new();

  for (name, value) in raw {
    let key = FeatureKey::parse(&name);

    if key == FeatureKey::DefaultInfl {
      // The pattern code is typed eagerly so queries never re-parse it.
      let code = value.as_str().ok_or_else(|| BuildError::InvalidFeatureValue {
        id: id.to_string(),
        key: name.clone(),
      })?;
      let pattern =
        Inflection::parse_code(code).ok_or_else(|| BuildError::UnknownInflectionCode {
          id: id.to_string(),
          code: code.to_string(),
        })?;
      features.insert(key, FeatureValue::Variant(pattern));
      continue;
    }

    let typed = match value {
      JsonValue::String(text) => FeatureValue::Text(text),
      JsonValue::Bool(flag) => FeatureValue::Flag(flag),
      _ => {
        return Err(BuildError::InvalidFeatureValue {
          id: id.to_string(),
          key: name,
        });
      }
    };
    features.insert(key, typed);
  }

  Ok(features)
}

/// Default pattern policy: explicit declaration, then the `default_infl`
/// feature code, then `Regular` where it is declared (or nothing is), then
/// the first declared pattern.
fn resolve_default(
  explicit: Option<Inflection>,
  features: &FeatureSet,
  variants: &[Inflection],
) -> Inflection {
  if let Some(pattern) = explicit {
    return pattern;
  }
  if let Some(pattern) = features.variant(&FeatureKey::DefaultInfl) {
    return pattern;
  }
  if variants.is_empty() || variants.contains(&Inflection::Regular) {
    return Inflection::Regular;
  }
  variants[0]
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  // ─── RawEntry builders ────────────────────────────────────────────────

  #[test]
  fn raw_entry_new_starts_empty() {
    let raw = RawEntry::new("E1", "dog", Category::Noun);

    assert_eq!(raw.id, "E1");
    assert_eq!(raw.base, "dog");
    assert_eq!(raw.category, Some(Category::Noun));
    assert!(raw.features.is_empty());
    assert!(raw.variants.is_empty());
    assert_eq!(raw.default_variant, None);
  }

  #[test]
  fn raw_entry_builders_chain() {
    let raw = RawEntry::new("E1", "focus", Category::Noun)
      .with_feature("proper", json!(false))
      .with_variant(Inflection::GrecoLatinRegular)
      .with_variant(Inflection::Regular)
      .with_default_variant(Inflection::GrecoLatinRegular);

    assert_eq!(raw.features["proper"], json!(false));
    assert_eq!(raw.variants, vec![Inflection::GrecoLatinRegular, Inflection::Regular]);
    assert_eq!(raw.default_variant, Some(Inflection::GrecoLatinRegular));
  }

  #[test]
  fn raw_entry_deserializes_with_defaults() {
    let json_str = r#"{
      "id": "E0012345",
      "base": "walk"
    }"#;

    let raw: RawEntry = serde_json::from_str(json_str).expect("should deserialize");

    assert_eq!(raw.id, "E0012345");
    assert_eq!(raw.base, "walk");
    assert_eq!(raw.category, None);
    assert!(raw.features.is_empty());
    assert!(raw.variants.is_empty());
  }

  #[test]
  fn raw_entry_deserializes_full_record() {
    let json_str = r#"{
      "id": "E0059002",
      "base": "sand",
      "category": "noun",
      "features": { "default_infl": "uncount", "proper": false },
      "variants": ["uncount"],
      "default_variant": "uncount"
    }"#;

    let raw: RawEntry = serde_json::from_str(json_str).expect("should deserialize");

    assert_eq!(raw.category, Some(Category::Noun));
    assert_eq!(raw.variants, vec![Inflection::Uncount]);
    assert_eq!(raw.default_variant, Some(Inflection::Uncount));
  }

  // ─── Validation ───────────────────────────────────────────────────────

  #[test]
  fn from_raw_rejects_blank_id() {
    let raw = RawEntry::new("   ", "dog", Category::Noun);
    let err = WordEntry::from_raw(raw, 7).expect_err("blank id should fail");

    assert!(matches!(err, BuildError::MissingId { position: 7 }));
  }

  #[test]
  fn from_raw_rejects_blank_base() {
    let raw = RawEntry::new("E1", "", Category::Noun);
    let err = WordEntry::from_raw(raw, 0).expect_err("blank base should fail");

    assert!(matches!(err, BuildError::MissingBaseForm { id } if id == "E1"));
  }

  #[test]
  fn from_raw_rejects_missing_category() {
    let raw: RawEntry =
      serde_json::from_str(r#"{ "id": "E1", "base": "dog" }"#).expect("should deserialize");
    let err = WordEntry::from_raw(raw, 0).expect_err("missing category should fail");

    assert!(matches!(err, BuildError::MissingCategory { ref id } if id == "E1"));
  }

  #[test]
  fn from_raw_rejects_non_scalar_feature() {
    let raw =
      RawEntry::new("E1", "dog", Category::Noun).with_feature("plural", json!(["dogs", "dogz"]));
    let err = WordEntry::from_raw(raw, 0).expect_err("array value should fail");

    assert!(
      matches!(err, BuildError::InvalidFeatureValue { ref id, ref key } if id == "E1" && key == "plural")
    );
  }

  #[test]
  fn from_raw_rejects_unknown_default_infl_code() {
    let raw =
      RawEntry::new("E1", "dog", Category::Noun).with_feature("default_infl", json!("weird"));
    let err = WordEntry::from_raw(raw, 0).expect_err("unknown code should fail");

    assert!(
      matches!(err, BuildError::UnknownInflectionCode { ref code, .. } if code == "weird")
    );
  }

  #[test]
  fn from_raw_trims_id_and_base() {
    let raw = RawEntry::new(" E1 ", " dog ", Category::Noun);
    let entry = WordEntry::from_raw(raw, 0).expect("should validate");

    assert_eq!(entry.id(), "E1");
    assert_eq!(entry.base(), "dog");
  }

  // ─── Feature typing ───────────────────────────────────────────────────

  #[test]
  fn from_raw_types_string_and_bool_features() {
    let raw = RawEntry::new("E1", "man", Category::Noun)
      .with_feature("plural", json!("men"))
      .with_feature("proper", json!(false));
    let entry = WordEntry::from_raw(raw, 0).expect("should validate");

    assert_eq!(entry.feature_as_string(&FeatureKey::Plural), Some("men"));
    assert_eq!(entry.feature_as_bool(&FeatureKey::Proper), Some(false));
    // Unset keys stay unset
    assert_eq!(entry.feature_as_bool(&FeatureKey::Qualitative), None);
  }

  #[test]
  fn from_raw_parses_default_infl_into_a_pattern() {
    let raw =
      RawEntry::new("E1", "sand", Category::Noun).with_feature("default_infl", json!("noncount"));
    let entry = WordEntry::from_raw(raw, 0).expect("should validate");

    assert_eq!(
      entry.feature(&FeatureKey::DefaultInfl),
      Some(&FeatureValue::Variant(Inflection::Uncount))
    );
    assert_eq!(entry.default_inflectional_variant(), Inflection::Uncount);
  }

  #[test]
  fn unknown_feature_names_survive_as_custom_keys() {
    let raw = RawEntry::new("E1", "dog", Category::Noun).with_feature("register", json!("formal"));
    let entry = WordEntry::from_raw(raw, 0).expect("should validate");

    let key = FeatureKey::Custom("register".to_string());
    assert_eq!(entry.feature_as_string(&key), Some("formal"));
  }

  // ─── Default pattern policy ───────────────────────────────────────────

  #[test]
  fn explicit_default_wins_over_feature_code() {
    let raw = RawEntry::new("E1", "focus", Category::Noun)
      .with_feature("default_infl", json!("reg"))
      .with_variant(Inflection::GrecoLatinRegular)
      .with_default_variant(Inflection::GrecoLatinRegular);
    let entry = WordEntry::from_raw(raw, 0).expect("should validate");

    assert_eq!(entry.default_inflectional_variant(), Inflection::GrecoLatinRegular);
  }

  #[test]
  fn feature_code_wins_over_declared_regular() {
    let raw = RawEntry::new("E1", "sand", Category::Noun)
      .with_feature("default_infl", json!("uncount"))
      .with_variant(Inflection::Regular)
      .with_variant(Inflection::Uncount);
    let entry = WordEntry::from_raw(raw, 0).expect("should validate");

    assert_eq!(entry.default_inflectional_variant(), Inflection::Uncount);
  }

  #[test]
  fn undeclared_entries_default_to_regular() {
    let raw = RawEntry::new("E1", "dog", Category::Noun);
    let entry = WordEntry::from_raw(raw, 0).expect("should validate");

    assert_eq!(entry.default_inflectional_variant(), Inflection::Regular);
    assert_eq!(entry.inflectional_variants(), &[Inflection::Regular]);
  }

  #[test]
  fn regular_is_preferred_when_declared() {
    let raw = RawEntry::new("E1", "focus", Category::Noun)
      .with_variant(Inflection::GrecoLatinRegular)
      .with_variant(Inflection::Regular);
    let entry = WordEntry::from_raw(raw, 0).expect("should validate");

    assert_eq!(entry.default_inflectional_variant(), Inflection::Regular);
  }

  #[test]
  fn first_declared_pattern_wins_without_regular() {
    let raw = RawEntry::new("E1", "trauma", Category::Noun)
      .with_variant(Inflection::GrecoLatinRegular)
      .with_variant(Inflection::Uncount);
    let entry = WordEntry::from_raw(raw, 0).expect("should validate");

    assert_eq!(entry.default_inflectional_variant(), Inflection::GrecoLatinRegular);
  }

  #[test]
  fn default_is_always_a_member_of_the_variant_set() {
    let raw = RawEntry::new("E1", "fish", Category::Noun)
      .with_variant(Inflection::Regular)
      .with_default_variant(Inflection::Uncount);
    let entry = WordEntry::from_raw(raw, 0).expect("should validate");

    assert!(entry.has_inflectional_variant(Inflection::Uncount));
    assert!(entry.has_inflectional_variant(Inflection::Regular));
  }

  #[test]
  fn duplicate_variant_declarations_collapse() {
    let raw = RawEntry::new("E1", "dog", Category::Noun)
      .with_variant(Inflection::Regular)
      .with_variant(Inflection::Regular);
    let entry = WordEntry::from_raw(raw, 0).expect("should validate");

    assert_eq!(entry.inflectional_variants(), &[Inflection::Regular]);
  }

  // ─── Primary flag ─────────────────────────────────────────────────────

  #[test]
  fn is_primary_requires_an_explicit_true() {
    let plain = WordEntry::from_raw(RawEntry::new("E1", "can", Category::Verb), 0)
      .expect("should validate");
    assert!(!plain.is_primary());

    let negated = WordEntry::from_raw(
      RawEntry::new("E2", "can", Category::Verb).with_feature("primary", json!(false)),
      1,
    )
    .expect("should validate");
    assert!(!negated.is_primary());

    let marked = WordEntry::from_raw(
      RawEntry::new("E3", "can", Category::Modal).with_feature("primary", json!(true)),
      2,
    )
    .expect("should validate");
    assert!(marked.is_primary());
  }
}
