//! Typed feature records attached to word entries
use crate::models::inflection::Inflection;
use std::collections::HashMap;
use std::fmt;

/// Identifier of a stored feature.
///
/// The known keys form a closed set covering the stored inflected forms and
/// the lexical annotations of the source databases. Unknown names survive
/// loading as [`FeatureKey::Custom`] so that callers can round-trip data the
/// engine does not interpret.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FeatureKey {
  /// Stored plural surface ("men")
  Plural,

  /// Stored comparative surface ("better")
  Comparative,

  /// Stored superlative surface ("best")
  Superlative,

  /// Stored past tense surface ("ate")
  Past,

  /// Stored past participle surface ("eaten")
  PastParticiple,

  /// Stored third person singular present surface ("is")
  Present3s,

  /// Stored present participle surface ("eating")
  PresentParticiple,

  /// Expansion of an acronym entry ("UK" to "United Kingdom")
  AcronymOf,

  /// Proper noun flag
  Proper,

  /// Adjective can be graded ("happier")
  Qualitative,

  /// Adjective can be used predicatively ("the dog is happy")
  Predicative,

  /// Adjective names a colour
  Colour,

  /// Adjective classifies rather than describes ("economic")
  Classifying,

  /// Adverb can modify a verb
  VerbModifier,

  /// Adverb can modify a whole sentence
  SentenceModifier,

  /// Adverb can intensify ("very")
  Intensifier,

  /// Verb admits an intransitive frame
  Intransitive,

  /// Verb admits a transitive frame
  Transitive,

  /// Verb admits a ditransitive frame
  Ditransitive,

  /// Default inflection pattern code ("uncount")
  DefaultInfl,

  /// Primary sense marker, preferred when homographs tie
  Primary,

  /// Any key the engine does not interpret
  Custom(String),
}

impl FeatureKey {
  /// Wire name of the key.
  pub fn name(&self) -> &str {
    match self {
      FeatureKey::Plural => "plural",
      FeatureKey::Comparative => "comparative",
      FeatureKey::Superlative => "superlative",
      FeatureKey::Past => "past",
      FeatureKey::PastParticiple => "past_participle",
      FeatureKey::Present3s => "present3s",
      FeatureKey::PresentParticiple => "present_participle",
      FeatureKey::AcronymOf => "acronym_of",
      FeatureKey::Proper => "proper",
      FeatureKey::Qualitative => "qualitative",
      FeatureKey::Predicative => "predicative",
      FeatureKey::Colour => "colour",
      FeatureKey::Classifying => "classifying",
      FeatureKey::VerbModifier => "verb_modifier",
      FeatureKey::SentenceModifier => "sentence_modifier",
      FeatureKey::Intensifier => "intensifier",
      FeatureKey::Intransitive => "intransitive",
      FeatureKey::Transitive => "transitive",
      FeatureKey::Ditransitive => "ditransitive",
      FeatureKey::DefaultInfl => "default_infl",
      FeatureKey::Primary => "primary",
      FeatureKey::Custom(name) => name,
    }
  }

  /// Parses a wire name. Total: unknown names become [`FeatureKey::Custom`].
  pub fn parse(name: &str) -> Self {
    match name {
      "plural" => FeatureKey::Plural,
      "comparative" => FeatureKey::Comparative,
      "superlative" => FeatureKey::Superlative,
      "past" => FeatureKey::Past,
      "past_participle" => FeatureKey::PastParticiple,
      "present3s" => FeatureKey::Present3s,
      "present_participle" => FeatureKey::PresentParticiple,
      "acronym_of" => FeatureKey::AcronymOf,
      "proper" => FeatureKey::Proper,
      "qualitative" => FeatureKey::Qualitative,
      "predicative" => FeatureKey::Predicative,
      "colour" => FeatureKey::Colour,
      "classifying" => FeatureKey::Classifying,
      "verb_modifier" => FeatureKey::VerbModifier,
      "sentence_modifier" => FeatureKey::SentenceModifier,
      "intensifier" => FeatureKey::Intensifier,
      "intransitive" => FeatureKey::Intransitive,
      "transitive" => FeatureKey::Transitive,
      "ditransitive" => FeatureKey::Ditransitive,
      "default_infl" => FeatureKey::DefaultInfl,
      "primary" => FeatureKey::Primary,
      other => FeatureKey::Custom(other.to_string()),
    }
  }
}

impl fmt::Display for FeatureKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// A stored feature value.
///
/// Values are typed at load time: a JSON string becomes [`Text`], a JSON
/// boolean becomes [`Flag`], and the [`FeatureKey::DefaultInfl`] code is
/// parsed into [`Variant`]. An absent key is expressed by the containing
/// map, never by a sentinel value, so "unset" stays distinguishable from
/// `false` and from the empty string.
///
/// [`Text`]: FeatureValue::Text
/// [`Flag`]: FeatureValue::Flag
/// [`Variant`]: FeatureValue::Variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatureValue {
  /// Free-text value, typically a stored surface form
  Text(String),

  /// Boolean annotation
  Flag(bool),

  /// Inflection pattern code parsed at load time
  Variant(Inflection),
}

impl FeatureValue {
  /// The text payload, if this value is text.
  pub fn as_text(&self) -> Option<&str> {
    match self {
      FeatureValue::Text(text) => Some(text),
      _ => None,
    }
  }

  /// The boolean payload, if this value is a flag.
  pub fn as_flag(&self) -> Option<bool> {
    match self {
      FeatureValue::Flag(flag) => Some(*flag),
      _ => None,
    }
  }

  /// The inflection payload, if this value is a pattern code.
  pub fn as_variant(&self) -> Option<Inflection> {
    match self {
      FeatureValue::Variant(pattern) => Some(*pattern),
      _ => None,
    }
  }
}

/// The feature record of one word entry.
///
/// A thin typed map: lookups on absent keys return `None` and are never an
/// error condition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureSet {
  values: HashMap<FeatureKey, FeatureValue>,
}

impl FeatureSet {
  /// Creates an empty record.
  pub fn new() -> Self {
    Self::default()
  }

  /// Stores a value, replacing any previous value under the key.
  pub fn insert(&mut self, key: FeatureKey, value: FeatureValue) {
    self.values.insert(key, value);
  }

  /// Raw value lookup.
  pub fn get(&self, key: &FeatureKey) -> Option<&FeatureValue> {
    self.values.get(key)
  }

  /// Text lookup; `None` when the key is unset or holds a non-text value.
  pub fn text(&self, key: &FeatureKey) -> Option<&str> {
    self.values.get(key).and_then(FeatureValue::as_text)
  }

  /// Flag lookup; `None` when the key is unset or holds a non-flag value.
  pub fn flag(&self, key: &FeatureKey) -> Option<bool> {
    self.values.get(key).and_then(FeatureValue::as_flag)
  }

  /// Inflection lookup; `None` when the key is unset or not a pattern.
  pub fn variant(&self, key: &FeatureKey) -> Option<Inflection> {
    self.values.get(key).and_then(FeatureValue::as_variant)
  }

  /// Whether the key is set at all, regardless of value type.
  pub fn contains(&self, key: &FeatureKey) -> bool {
    self.values.contains_key(key)
  }

  /// Number of stored features.
  pub fn len(&self) -> usize {
    self.values.len()
  }

  /// Whether no features are stored.
  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }

  /// Iterates over all stored key/value pairs in arbitrary order.
  pub fn iter(&self) -> impl Iterator<Item = (&FeatureKey, &FeatureValue)> {
    self.values.iter()
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  // ─── Key names ────────────────────────────────────────────────────────

  #[test]
  fn known_key_names_round_trip() {
    let keys = [
      FeatureKey::Plural,
      FeatureKey::Comparative,
      FeatureKey::Superlative,
      FeatureKey::Past,
      FeatureKey::PastParticiple,
      FeatureKey::Present3s,
      FeatureKey::PresentParticiple,
      FeatureKey::AcronymOf,
      FeatureKey::Proper,
      FeatureKey::Qualitative,
      FeatureKey::Predicative,
      FeatureKey::Colour,
      FeatureKey::Classifying,
      FeatureKey::VerbModifier,
      FeatureKey::SentenceModifier,
      FeatureKey::Intensifier,
      FeatureKey::Intransitive,
      FeatureKey::Transitive,
      FeatureKey::Ditransitive,
      FeatureKey::DefaultInfl,
      FeatureKey::Primary,
    ];

    for key in keys {
      assert_eq!(FeatureKey::parse(key.name()), key);
    }
  }

  #[test]
  fn unknown_names_become_custom_keys() {
    let key = FeatureKey::parse("etymology");
    assert_eq!(key, FeatureKey::Custom("etymology".to_string()));
    assert_eq!(key.name(), "etymology");
  }

  #[test]
  fn custom_keys_round_trip_through_display() {
    let key = FeatureKey::Custom("register".to_string());
    assert_eq!(key.to_string(), "register");
    assert_eq!(FeatureKey::parse(&key.to_string()), key);
  }

  // ─── Typed values ─────────────────────────────────────────────────────

  #[test]
  fn value_accessors_match_only_their_variant() {
    let text = FeatureValue::Text("men".to_string());
    assert_eq!(text.as_text(), Some("men"));
    assert_eq!(text.as_flag(), None);
    assert_eq!(text.as_variant(), None);

    let flag = FeatureValue::Flag(true);
    assert_eq!(flag.as_flag(), Some(true));
    assert_eq!(flag.as_text(), None);

    let variant = FeatureValue::Variant(Inflection::Uncount);
    assert_eq!(variant.as_variant(), Some(Inflection::Uncount));
    assert_eq!(variant.as_flag(), None);
  }

  // ─── FeatureSet lookups ───────────────────────────────────────────────

  #[test]
  fn unset_key_is_distinguishable_from_false() {
    let mut features = FeatureSet::new();
    features.insert(FeatureKey::Qualitative, FeatureValue::Flag(false));

    // Explicitly false
    assert_eq!(features.flag(&FeatureKey::Qualitative), Some(false));
    assert!(features.contains(&FeatureKey::Qualitative));

    // Never set
    assert_eq!(features.flag(&FeatureKey::Proper), None);
    assert!(!features.contains(&FeatureKey::Proper));
  }

  #[test]
  fn unset_key_is_distinguishable_from_empty_text() {
    let mut features = FeatureSet::new();
    features.insert(FeatureKey::AcronymOf, FeatureValue::Text(String::new()));

    assert_eq!(features.text(&FeatureKey::AcronymOf), Some(""));
    assert_eq!(features.text(&FeatureKey::Plural), None);
  }

  #[test]
  fn typed_getter_rejects_mismatched_value() {
    let mut features = FeatureSet::new();
    features.insert(FeatureKey::Plural, FeatureValue::Text("men".to_string()));

    assert_eq!(features.flag(&FeatureKey::Plural), None);
    assert_eq!(features.text(&FeatureKey::Plural), Some("men"));
  }

  #[test]
  fn insert_replaces_previous_value() {
    let mut features = FeatureSet::new();
    features.insert(FeatureKey::Proper, FeatureValue::Flag(false));
    features.insert(FeatureKey::Proper, FeatureValue::Flag(true));

    assert_eq!(features.flag(&FeatureKey::Proper), Some(true));
    assert_eq!(features.len(), 1);
  }

  #[test]
  fn empty_set_reports_empty() {
    let features = FeatureSet::new();
    assert!(features.is_empty());
    assert_eq!(features.len(), 0);
    assert_eq!(features.get(&FeatureKey::Primary), None);
  }

  #[test]
  fn variant_getter_returns_parsed_pattern() {
    let mut features = FeatureSet::new();
    features.insert(FeatureKey::DefaultInfl, FeatureValue::Variant(Inflection::GrecoLatinRegular));

    assert_eq!(features.variant(&FeatureKey::DefaultInfl), Some(Inflection::GrecoLatinRegular));
    // The typed getters do not cross over
    assert_eq!(features.text(&FeatureKey::DefaultInfl), None);
  }
}
