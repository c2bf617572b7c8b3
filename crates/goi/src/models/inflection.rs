//! Inflection pattern and word form definitions
use crate::models::category::Category;
use crate::models::feature::FeatureKey;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Morphological pattern class declared by a word entry.
///
/// The pattern decides which generative rule produces a requested surface
/// form when no stored or irregular form exists. The set is closed and maps
/// one-to-one onto the wire codes of the upstream lexical databases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Inflection {
  /// Plain suffixation (dog/dogs, walk/walked)
  #[serde(rename = "reg")]
  Regular,

  /// Suppletive forms supplied by the irregular table or stored features
  #[serde(rename = "irreg")]
  Irregular,

  /// Regular with final-consonant doubling (tug/tugged, fat/fatter)
  #[serde(rename = "regd")]
  RegularDouble,

  /// Greco-Latin plural (focus/foci, trauma/traumata)
  #[serde(rename = "glreg")]
  GrecoLatinRegular,

  /// Mass noun: the plural surface is the base form itself
  #[serde(rename = "uncount", alias = "noncount", alias = "groupuncount")]
  Uncount,

  /// No inflected surfaces at all
  #[serde(rename = "inv")]
  Invariant,
}

impl Inflection {
  /// Every pattern, in wire-code order.
  pub const ALL: [Inflection; 6] = [
    Inflection::Regular,
    Inflection::Irregular,
    Inflection::RegularDouble,
    Inflection::GrecoLatinRegular,
    Inflection::Uncount,
    Inflection::Invariant,
  ];

  /// Canonical wire code.
  pub fn code(self) -> &'static str {
    match self {
      Inflection::Regular => "reg",
      Inflection::Irregular => "irreg",
      Inflection::RegularDouble => "regd",
      Inflection::GrecoLatinRegular => "glreg",
      Inflection::Uncount => "uncount",
      Inflection::Invariant => "inv",
    }
  }

  /// Parses a wire code, accepting the uncount aliases used by older
  /// databases (`noncount`, `groupuncount`).
  pub fn parse_code(code: &str) -> Option<Self> {
    match code {
      "reg" => Some(Inflection::Regular),
      "irreg" => Some(Inflection::Irregular),
      "regd" => Some(Inflection::RegularDouble),
      "glreg" => Some(Inflection::GrecoLatinRegular),
      "uncount" | "noncount" | "groupuncount" => Some(Inflection::Uncount),
      "inv" => Some(Inflection::Invariant),
      _ => None,
    }
  }
}

/// Entries that declare nothing inflect regularly.
impl Default for Inflection {
  fn default() -> Self {
    Inflection::Regular
  }
}

impl fmt::Display for Inflection {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.code())
  }
}

/// A requestable inflected form, the axis of generation and resolution.
///
/// Which forms exist depends on the category: nouns and determiners have a
/// plural, verbs have the tense/participle forms, adjectives and adverbs
/// have the comparison forms, modals have only a past ("can" to "could").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordForm {
  /// Plural of a noun or determiner
  Plural,

  /// Comparative of an adjective or adverb
  Comparative,

  /// Superlative of an adjective or adverb
  Superlative,

  /// Present tense other than third person singular ("am", "are", base form)
  Present,

  /// Third person singular present ("is", "eats")
  Present3s,

  /// Past tense ("was", "ate", "could")
  Past,

  /// Past participle ("been", "eaten")
  PastParticiple,

  /// Present participle ("being", "eating")
  PresentParticiple,
}

impl WordForm {
  /// Every form, for table-driven folding and tests.
  pub const ALL: [WordForm; 8] = [
    WordForm::Plural,
    WordForm::Comparative,
    WordForm::Superlative,
    WordForm::Present,
    WordForm::Present3s,
    WordForm::Past,
    WordForm::PastParticiple,
    WordForm::PresentParticiple,
  ];

  /// Whether entries of `category` can carry this form at all.
  ///
  /// `Any` never applies: an uncategorized entry has no inflectional
  /// behavior of its own (it is still reachable through base form lookup).
  pub fn applies_to(self, category: Category) -> bool {
    match category {
      Category::Noun | Category::Determiner => matches!(self, WordForm::Plural),
      Category::Verb => matches!(
        self,
        WordForm::Present
          | WordForm::Present3s
          | WordForm::Past
          | WordForm::PastParticiple
          | WordForm::PresentParticiple
      ),
      Category::Adjective | Category::Adverb => {
        matches!(self, WordForm::Comparative | WordForm::Superlative)
      }
      Category::Modal => matches!(self, WordForm::Past),
      _ => false,
    }
  }

  /// The feature key under which a stored surface for this form lives.
  ///
  /// `Present` has no stored key: for regular verbs the non-third-singular
  /// present **is** the base form, and the irregular table covers "be".
  pub fn feature_key(self) -> Option<FeatureKey> {
    match self {
      WordForm::Plural => Some(FeatureKey::Plural),
      WordForm::Comparative => Some(FeatureKey::Comparative),
      WordForm::Superlative => Some(FeatureKey::Superlative),
      WordForm::Present => None,
      WordForm::Present3s => Some(FeatureKey::Present3s),
      WordForm::Past => Some(FeatureKey::Past),
      WordForm::PastParticiple => Some(FeatureKey::PastParticiple),
      WordForm::PresentParticiple => Some(FeatureKey::PresentParticiple),
    }
  }

  /// Wire name, matching the stored feature key where one exists.
  pub fn code(self) -> &'static str {
    match self {
      WordForm::Plural => "plural",
      WordForm::Comparative => "comparative",
      WordForm::Superlative => "superlative",
      WordForm::Present => "present",
      WordForm::Present3s => "present3s",
      WordForm::Past => "past",
      WordForm::PastParticiple => "past_participle",
      WordForm::PresentParticiple => "present_participle",
    }
  }
}

impl fmt::Display for WordForm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.code())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
