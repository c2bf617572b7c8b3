//! Lexical category definition
use serde::{Deserialize, Serialize};
use std::fmt;

/// Grammatical category of a word entry.
///
/// The declaration order doubles as the ranking order: when a surface form
/// resolves to entries of different categories, candidates are returned in
/// this order (nouns before verbs before adjectives, and so on).
///
/// `Any` is the wildcard used by category-agnostic queries. The set is
/// closed; it is never extended at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
  /// Common or proper noun
  Noun,

  /// Full verb (not a modal auxiliary)
  Verb,

  /// Adjective
  Adjective,

  /// Adverb
  Adverb,

  /// Modal auxiliary (can, will, shall, ...)
  Modal,

  /// Pronoun
  Pronoun,

  /// Determiner (the, this, some, ...)
  Determiner,

  /// Coordinating or subordinating conjunction
  Conjunction,

  /// Complementiser (that, whether, ...)
  Complementiser,

  /// Preposition
  Preposition,

  /// Interjection
  Interjection,

  /// Symbol or non-word token
  Symbol,

  /// Wildcard: matches every category
  Any,
}

impl Category {
  /// Every category in declaration (ranking) order.
  pub const ALL: [Category; 13] = [
    Category::Noun,
    Category::Verb,
    Category::Adjective,
    Category::Adverb,
    Category::Modal,
    Category::Pronoun,
    Category::Determiner,
    Category::Conjunction,
    Category::Complementiser,
    Category::Preposition,
    Category::Interjection,
    Category::Symbol,
    Category::Any,
  ];

  /// Wire code used in entry records and feature values.
  pub fn code(self) -> &'static str {
    match self {
      Category::Noun => "noun",
      Category::Verb => "verb",
      Category::Adjective => "adjective",
      Category::Adverb => "adverb",
      Category::Modal => "modal",
      Category::Pronoun => "pronoun",
      Category::Determiner => "determiner",
      Category::Conjunction => "conjunction",
      Category::Complementiser => "complementiser",
      Category::Preposition => "preposition",
      Category::Interjection => "interjection",
      Category::Symbol => "symbol",
      Category::Any => "any",
    }
  }

  /// Parses a wire code back into a category.
  ///
  /// Returns `None` for unknown codes; callers decide whether that is an
  /// input error or a reason to fall back to [`Category::Any`].
  pub fn parse_code(code: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|c| c.code() == code)
  }

  /// Category filter test. `Any` on either side matches everything.
  pub fn matches(self, other: Category) -> bool {
    self == Category::Any || other == Category::Any || self == other
  }
}

/// Category-agnostic queries default to the wildcard.
impl Default for Category {
  fn default() -> Self {
    Category::Any
  }
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.code())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
