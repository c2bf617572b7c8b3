//! Surface Form Generation
//!
//! Produces the surface realization of (entry, form). Precedence:
//!
//! 1. The form must apply to the entry's category at all.
//! 2. A stored per-entry form feature ("plural" = "men") wins outright.
//! 3. The irregular table's forward mapping wins next.
//! 4. Otherwise the regular rule for the form runs, parameterized by the
//!    entry's default inflection pattern.
//!
//! Combinations with no defined surface return `None`, never a malformed
//! string.

use crate::models::{Category, Inflection, WordEntry, WordForm};
use crate::morphology::irregular::IrregularForms;
use crate::morphology::rules;

/// Generation engine borrowing the lexicon's irregular table.
#[derive(Debug, Clone, Copy)]
pub struct Inflector<'a> {
  irregulars: &'a IrregularForms,
}

impl<'a> Inflector<'a> {
  /// Creates an inflector over the given irregular table.
  pub fn new(irregulars: &'a IrregularForms) -> Self {
    Self { irregulars }
  }

  /// The surface form of `entry` under `form`, or `None` when the
  /// combination has no surface.
  pub fn inflect(&self, entry: &WordEntry, form: WordForm) -> Option<String> {
    if !form.applies_to(entry.category()) {
      return None;
    }

    // Stored per-entry surface wins; an empty string counts as unset.
    if let Some(key) = form.feature_key() {
      if let Some(surface) = entry.feature_as_string(&key) {
        if !surface.is_empty() {
          return Some(surface.to_string());
        }
      }
    }

    if let Some(surface) = self.irregulars.surface(entry.category(), entry.base(), form) {
      return Some(surface.to_string());
    }

    generate_by_rule(entry, form)
  }
}

/// The generative fallback, dispatched on form and the entry's default
/// pattern.
fn generate_by_rule(entry: &WordEntry, form: WordForm) -> Option<String> {
  let base = entry.base();
  let pattern = entry.default_inflectional_variant();

  match form {
    WordForm::Plural => {
      // Determiners have no generative plural; unlisted ones are unchanged
      // ("the books").
      if entry.category() == Category::Determiner {
        return Some(base.to_string());
      }
      match pattern {
        // Mass nouns and invariant nouns pluralize to themselves
        Inflection::Uncount | Inflection::Invariant => Some(base.to_string()),
        Inflection::GrecoLatinRegular => Some(rules::greco_latin_plural(base)),
        _ => Some(rules::regular_plural(base)),
      }
    }

    // The non-third-singular present of a regular verb is its base form
    WordForm::Present => Some(base.to_string()),

    WordForm::Present3s => match pattern {
      Inflection::Invariant => None,
      _ => Some(rules::present_third_singular(base)),
    },

    WordForm::Past | WordForm::PastParticiple => {
      // Modal pasts exist only in the irregular table ("can" to "could")
      if entry.category() == Category::Modal {
        return None;
      }
      match pattern {
        Inflection::Invariant => None,
        Inflection::RegularDouble => Some(rules::double_past(base)),
        _ => Some(rules::regular_past(base)),
      }
    }

    WordForm::PresentParticiple => match pattern {
      Inflection::Invariant => None,
      Inflection::RegularDouble => Some(rules::double_present_participle(base)),
      _ => Some(rules::regular_present_participle(base)),
    },

    WordForm::Comparative => match pattern {
      // An invariant adjective has no graded surface at all
      Inflection::Invariant => None,
      Inflection::RegularDouble => Some(rules::double_comparative(base)),
      _ => Some(rules::regular_comparative(base)),
    },

    WordForm::Superlative => match pattern {
      Inflection::Invariant => None,
      Inflection::RegularDouble => Some(rules::double_superlative(base)),
      _ => Some(rules::regular_superlative(base)),
    },
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
