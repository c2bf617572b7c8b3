//! Irregular Form Table
//!
//! Central table of suppletive surface forms, keyed by (category, base,
//! form) for generation and by surface for resolution. Consulted before any
//! generative rule on both paths.
//!
//! One table instance belongs to one lexicon. It starts from the built-in
//! rows (unless configured off) and absorbs the stored form features of the
//! loaded entries, so "men" resolves to "man" whether the form came from
//! the table or from the data source.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::models::{Category, WordEntry, WordForm};

/// One resolution candidate from the reverse table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrregularHit {
  /// Base form the surface belongs to
  pub base: String,

  /// Category of that base
  pub category: Category,

  /// Which form the surface realizes
  pub form: WordForm,
}

/// Bidirectional irregular form table.
#[derive(Debug, Clone, Default)]
pub struct IrregularForms {
  /// (category, base) -> form -> surfaces, first surface wins generation
  forward: HashMap<(Category, String), HashMap<WordForm, Vec<String>>>,

  /// surface -> resolution candidates in insertion order
  reverse: HashMap<String, Vec<IrregularHit>>,
}

impl IrregularForms {
  /// Creates an empty table.
  pub fn new() -> Self {
    Self::default()
  }

  /// The built-in table, initialized once per process.
  pub fn builtin() -> &'static IrregularForms {
    static BUILTIN: OnceLock<IrregularForms> = OnceLock::new();
    BUILTIN.get_or_init(|| {
      let mut forms = IrregularForms::new();
      for &(category, base, form, surface) in BUILTIN_FORMS {
        forms.insert(category, base, form, surface);
      }
      forms
    })
  }

  /// Registers one surface in both directions. Idempotent: repeated
  /// registrations of the same row change nothing.
  pub fn insert(&mut self, category: Category, base: &str, form: WordForm, surface: &str) {
    let surfaces = self
      .forward
      .entry((category, base.to_string()))
      .or_default()
      .entry(form)
      .or_default();
    if !surfaces.iter().any(|s| s == surface) {
      surfaces.push(surface.to_string());
    }

    let hit = IrregularHit {
      base: base.to_string(),
      category,
      form,
    };
    let hits = self.reverse.entry(surface.to_string()).or_default();
    if !hits.contains(&hit) {
      hits.push(hit);
    }
  }

  /// Absorbs the stored form features of an entry ("plural" = "men").
  ///
  /// Only forms applicable to the entry's category are folded; a stray
  /// "past" feature on a noun is left alone.
  pub fn fold_entry(&mut self, entry: &WordEntry) {
    for form in WordForm::ALL {
      if !form.applies_to(entry.category()) {
        continue;
      }
      let Some(key) = form.feature_key() else {
        continue;
      };
      if let Some(surface) = entry.feature_as_string(&key) {
        if !surface.is_empty() {
          self.insert(entry.category(), entry.base(), form, surface);
        }
      }
    }
  }

  /// The generated surface for (category, base, form): the first registered
  /// surface, or `None` when the combination is regular.
  pub fn surface(&self, category: Category, base: &str, form: WordForm) -> Option<&str> {
    self
      .forward
      .get(&(category, base.to_string()))
      .and_then(|forms| forms.get(&form))
      .and_then(|surfaces| surfaces.first())
      .map(String::as_str)
  }

  /// All resolution candidates for a surface, in insertion order.
  pub fn resolve(&self, surface: &str) -> &[IrregularHit] {
    self.reverse.get(surface).map_or(&[], Vec::as_slice)
  }

  // ===== Accessors =====

  /// Number of distinct surfaces in the reverse table.
  pub fn surface_count(&self) -> usize {
    self.reverse.len()
  }

  /// Whether the table holds no rows.
  pub fn is_empty(&self) -> bool {
    self.reverse.is_empty()
  }
}

/// Built-in rows: (category, base, form, surface).
///
/// Multi-surface forms list the generation winner first ("be" in the past
/// generates "was", while "were" still resolves back to "be").
#[rustfmt::skip]
const BUILTIN_FORMS: &[(Category, &str, WordForm, &str)] = &[
  // be, the fully suppletive verb
  (Category::Verb, "be", WordForm::Present, "am"),
  (Category::Verb, "be", WordForm::Present, "are"),
  (Category::Verb, "be", WordForm::Present3s, "is"),
  (Category::Verb, "be", WordForm::Past, "was"),
  (Category::Verb, "be", WordForm::Past, "were"),
  (Category::Verb, "be", WordForm::PastParticiple, "been"),
  (Category::Verb, "be", WordForm::PresentParticiple, "being"),

  // auxiliaries with irregular third singular forms
  (Category::Verb, "do", WordForm::Present3s, "does"),
  (Category::Verb, "do", WordForm::Past, "did"),
  (Category::Verb, "do", WordForm::PastParticiple, "done"),
  (Category::Verb, "go", WordForm::Present3s, "goes"),
  (Category::Verb, "go", WordForm::Past, "went"),
  (Category::Verb, "go", WordForm::PastParticiple, "gone"),
  (Category::Verb, "have", WordForm::Present3s, "has"),
  (Category::Verb, "have", WordForm::Past, "had"),
  (Category::Verb, "have", WordForm::PastParticiple, "had"),

  // strong verbs
  (Category::Verb, "say", WordForm::Past, "said"),
  (Category::Verb, "say", WordForm::PastParticiple, "said"),
  (Category::Verb, "eat", WordForm::Past, "ate"),
  (Category::Verb, "eat", WordForm::PastParticiple, "eaten"),
  (Category::Verb, "see", WordForm::Past, "saw"),
  (Category::Verb, "see", WordForm::PastParticiple, "seen"),
  (Category::Verb, "take", WordForm::Past, "took"),
  (Category::Verb, "take", WordForm::PastParticiple, "taken"),
  (Category::Verb, "make", WordForm::Past, "made"),
  (Category::Verb, "make", WordForm::PastParticiple, "made"),
  (Category::Verb, "come", WordForm::Past, "came"),
  (Category::Verb, "come", WordForm::PastParticiple, "come"),
  (Category::Verb, "get", WordForm::Past, "got"),
  (Category::Verb, "get", WordForm::PastParticiple, "got"),
  (Category::Verb, "give", WordForm::Past, "gave"),
  (Category::Verb, "give", WordForm::PastParticiple, "given"),
  (Category::Verb, "know", WordForm::Past, "knew"),
  (Category::Verb, "know", WordForm::PastParticiple, "known"),
  (Category::Verb, "think", WordForm::Past, "thought"),
  (Category::Verb, "think", WordForm::PastParticiple, "thought"),
  (Category::Verb, "run", WordForm::Past, "ran"),
  (Category::Verb, "run", WordForm::PastParticiple, "run"),
  (Category::Verb, "write", WordForm::Past, "wrote"),
  (Category::Verb, "write", WordForm::PastParticiple, "written"),
  (Category::Verb, "find", WordForm::Past, "found"),
  (Category::Verb, "find", WordForm::PastParticiple, "found"),
  (Category::Verb, "tell", WordForm::Past, "told"),
  (Category::Verb, "tell", WordForm::PastParticiple, "told"),
  (Category::Verb, "leave", WordForm::Past, "left"),
  (Category::Verb, "leave", WordForm::PastParticiple, "left"),
  (Category::Verb, "feel", WordForm::Past, "felt"),
  (Category::Verb, "feel", WordForm::PastParticiple, "felt"),
  (Category::Verb, "bring", WordForm::Past, "brought"),
  (Category::Verb, "bring", WordForm::PastParticiple, "brought"),
  (Category::Verb, "begin", WordForm::Past, "began"),
  (Category::Verb, "begin", WordForm::PastParticiple, "begun"),
  (Category::Verb, "keep", WordForm::Past, "kept"),
  (Category::Verb, "keep", WordForm::PastParticiple, "kept"),
  (Category::Verb, "hold", WordForm::Past, "held"),
  (Category::Verb, "hold", WordForm::PastParticiple, "held"),
  (Category::Verb, "stand", WordForm::Past, "stood"),
  (Category::Verb, "stand", WordForm::PastParticiple, "stood"),
  (Category::Verb, "hear", WordForm::Past, "heard"),
  (Category::Verb, "hear", WordForm::PastParticiple, "heard"),
  (Category::Verb, "mean", WordForm::Past, "meant"),
  (Category::Verb, "mean", WordForm::PastParticiple, "meant"),
  (Category::Verb, "meet", WordForm::Past, "met"),
  (Category::Verb, "meet", WordForm::PastParticiple, "met"),
  (Category::Verb, "pay", WordForm::Past, "paid"),
  (Category::Verb, "pay", WordForm::PastParticiple, "paid"),
  (Category::Verb, "sit", WordForm::Past, "sat"),
  (Category::Verb, "sit", WordForm::PastParticiple, "sat"),
  (Category::Verb, "speak", WordForm::Past, "spoke"),
  (Category::Verb, "speak", WordForm::PastParticiple, "spoken"),
  (Category::Verb, "buy", WordForm::Past, "bought"),
  (Category::Verb, "buy", WordForm::PastParticiple, "bought"),
  (Category::Verb, "break", WordForm::Past, "broke"),
  (Category::Verb, "break", WordForm::PastParticiple, "broken"),
  (Category::Verb, "choose", WordForm::Past, "chose"),
  (Category::Verb, "choose", WordForm::PastParticiple, "chosen"),
  (Category::Verb, "drive", WordForm::Past, "drove"),
  (Category::Verb, "drive", WordForm::PastParticiple, "driven"),
  (Category::Verb, "fall", WordForm::Past, "fell"),
  (Category::Verb, "fall", WordForm::PastParticiple, "fallen"),
  (Category::Verb, "fly", WordForm::Past, "flew"),
  (Category::Verb, "fly", WordForm::PastParticiple, "flown"),
  (Category::Verb, "forget", WordForm::Past, "forgot"),
  (Category::Verb, "forget", WordForm::PastParticiple, "forgotten"),
  (Category::Verb, "grow", WordForm::Past, "grew"),
  (Category::Verb, "grow", WordForm::PastParticiple, "grown"),
  (Category::Verb, "draw", WordForm::Past, "drew"),
  (Category::Verb, "draw", WordForm::PastParticiple, "drawn"),
  (Category::Verb, "sing", WordForm::Past, "sang"),
  (Category::Verb, "sing", WordForm::PastParticiple, "sung"),
  (Category::Verb, "throw", WordForm::Past, "threw"),
  (Category::Verb, "throw", WordForm::PastParticiple, "thrown"),
  (Category::Verb, "wear", WordForm::Past, "wore"),
  (Category::Verb, "wear", WordForm::PastParticiple, "worn"),
  (Category::Verb, "win", WordForm::Past, "won"),
  (Category::Verb, "win", WordForm::PastParticiple, "won"),
  (Category::Verb, "teach", WordForm::Past, "taught"),
  (Category::Verb, "teach", WordForm::PastParticiple, "taught"),
  (Category::Verb, "catch", WordForm::Past, "caught"),
  (Category::Verb, "catch", WordForm::PastParticiple, "caught"),
  (Category::Verb, "sell", WordForm::Past, "sold"),
  (Category::Verb, "sell", WordForm::PastParticiple, "sold"),
  (Category::Verb, "send", WordForm::Past, "sent"),
  (Category::Verb, "send", WordForm::PastParticiple, "sent"),
  (Category::Verb, "build", WordForm::Past, "built"),
  (Category::Verb, "build", WordForm::PastParticiple, "built"),
  (Category::Verb, "fight", WordForm::Past, "fought"),
  (Category::Verb, "fight", WordForm::PastParticiple, "fought"),
  (Category::Verb, "understand", WordForm::Past, "understood"),
  (Category::Verb, "understand", WordForm::PastParticiple, "understood"),
  (Category::Verb, "lose", WordForm::Past, "lost"),
  (Category::Verb, "lose", WordForm::PastParticiple, "lost"),
  (Category::Verb, "become", WordForm::Past, "became"),
  (Category::Verb, "become", WordForm::PastParticiple, "become"),

  // noun plurals
  (Category::Noun, "man", WordForm::Plural, "men"),
  (Category::Noun, "woman", WordForm::Plural, "women"),
  (Category::Noun, "child", WordForm::Plural, "children"),
  (Category::Noun, "foot", WordForm::Plural, "feet"),
  (Category::Noun, "tooth", WordForm::Plural, "teeth"),
  (Category::Noun, "mouse", WordForm::Plural, "mice"),
  (Category::Noun, "person", WordForm::Plural, "people"),
  (Category::Noun, "goose", WordForm::Plural, "geese"),
  (Category::Noun, "life", WordForm::Plural, "lives"),
  (Category::Noun, "knife", WordForm::Plural, "knives"),
  (Category::Noun, "leaf", WordForm::Plural, "leaves"),
  (Category::Noun, "wife", WordForm::Plural, "wives"),
  (Category::Noun, "half", WordForm::Plural, "halves"),
  (Category::Noun, "wolf", WordForm::Plural, "wolves"),

  // graded adjectives
  (Category::Adjective, "good", WordForm::Comparative, "better"),
  (Category::Adjective, "good", WordForm::Superlative, "best"),
  (Category::Adjective, "bad", WordForm::Comparative, "worse"),
  (Category::Adjective, "bad", WordForm::Superlative, "worst"),
  (Category::Adjective, "far", WordForm::Comparative, "farther"),
  (Category::Adjective, "far", WordForm::Superlative, "farthest"),
  (Category::Adjective, "little", WordForm::Comparative, "less"),
  (Category::Adjective, "little", WordForm::Superlative, "least"),
  (Category::Adjective, "many", WordForm::Comparative, "more"),
  (Category::Adjective, "many", WordForm::Superlative, "most"),
  (Category::Adjective, "much", WordForm::Comparative, "more"),
  (Category::Adjective, "much", WordForm::Superlative, "most"),

  // graded adverbs
  (Category::Adverb, "well", WordForm::Comparative, "better"),
  (Category::Adverb, "well", WordForm::Superlative, "best"),
  (Category::Adverb, "badly", WordForm::Comparative, "worse"),
  (Category::Adverb, "badly", WordForm::Superlative, "worst"),

  // modal pasts
  (Category::Modal, "can", WordForm::Past, "could"),
  (Category::Modal, "will", WordForm::Past, "would"),
  (Category::Modal, "shall", WordForm::Past, "should"),
  (Category::Modal, "may", WordForm::Past, "might"),

  // demonstrative determiners
  (Category::Determiner, "this", WordForm::Plural, "these"),
  (Category::Determiner, "that", WordForm::Plural, "those"),
];

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
