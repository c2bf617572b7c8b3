//! Surface Form Resolution
//!
//! Maps an inflected surface form back to the word entries it could belong
//! to. Three candidate sources run in precedence order:
//!
//! 1. The irregular table's reverse mapping ("is" to "be"). Irregulars
//!    always win.
//! 2. Identity: the surface itself is the base form of an entry, so an
//!    uninflected input handed to the variant path still resolves.
//! 3. Generative analysis: category-specific suffix stripping proposes base
//!    candidates, each verified by regenerating the surface from the entry.
//!    Proposals whose entry cannot produce the surface are discarded, which
//!    covers both non-entries and pattern vetoes (an uncount noun never
//!    resolves a plural, an invariant adjective never resolves a
//!    comparative).
//!
//! Every hit names an entry that really exists in the index.

use std::sync::Arc;

use tracing::debug;

use crate::index::entry_index::entry_order;
use crate::index::EntryIndex;
use crate::models::{Category, WordEntry, WordForm};
use crate::morphology::inflector::Inflector;
use crate::morphology::irregular::IrregularForms;
use crate::morphology::rules;

/// Which candidate source produced a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HitSource {
  /// Reverse irregular table row
  Irregular,

  /// The surface matched a base form directly
  Identity,

  /// Suffix stripping, verified by regeneration
  Generative,
}

/// One resolution candidate: an entry and how the surface reached it.
#[derive(Debug, Clone)]
pub struct VariantHit {
  /// The resolved entry
  pub entry: Arc<WordEntry>,

  /// The form the surface realizes; `None` for an identity hit
  pub form: Option<WordForm>,

  /// Candidate source, the primary ranking key
  pub source: HitSource,
}

/// The generative strip table: implied category, implied form, and the
/// candidate proposer for that pair.
const STRIP_RULES: &[(Category, WordForm, fn(&str) -> Vec<String>)] = &[
  (Category::Noun, WordForm::Plural, rules::plural_base_candidates),
  (Category::Verb, WordForm::Present3s, rules::present3s_base_candidates),
  (Category::Verb, WordForm::Past, rules::past_base_candidates),
  (Category::Verb, WordForm::PastParticiple, rules::past_base_candidates),
  (
    Category::Verb,
    WordForm::PresentParticiple,
    rules::present_participle_base_candidates,
  ),
  (Category::Adjective, WordForm::Comparative, rules::comparative_base_candidates),
  (Category::Adjective, WordForm::Superlative, rules::superlative_base_candidates),
  (Category::Adverb, WordForm::Comparative, rules::comparative_base_candidates),
  (Category::Adverb, WordForm::Superlative, rules::superlative_base_candidates),
];

/// Resolution engine borrowing the lexicon's index and irregular table.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
  index: &'a EntryIndex,
  irregulars: &'a IrregularForms,
}

impl<'a> Resolver<'a> {
  /// Creates a resolver over the given index and irregular table.
  pub fn new(index: &'a EntryIndex, irregulars: &'a IrregularForms) -> Self {
    Self { index, irregulars }
  }

  /// All entries the surface can resolve to under the category filter,
  /// ranked and deduplicated.
  ///
  /// Ranking: irregular hits, then identity hits, then generative hits;
  /// ties within a source by category in declaration order, then by the
  /// homograph tie-break. One entry appears at most once, under its
  /// best-ranked hit; an entry reachable as both a past tense and a past
  /// participle keeps the past tense hit.
  pub fn resolve(&self, surface: &str, category: Category) -> Vec<VariantHit> {
    let mut hits = self.irregular_hits(surface, category);
    hits.extend(self.identity_hits(surface, category));
    hits.extend(self.generative_hits(surface, category));

    dedup_by_id(&mut hits);

    debug!(
      surface,
      category = %category,
      hits = hits.len(),
      "resolved surface form"
    );
    hits
  }

  /// Phase 1: reverse irregular rows, each verified against the index.
  fn irregular_hits(&self, surface: &str, category: Category) -> Vec<VariantHit> {
    let mut hits = Vec::new();
    for row in self.irregulars.resolve(surface) {
      if !row.category.matches(category) {
        continue;
      }
      for entry in self.index.words_with_category(&row.base, row.category) {
        hits.push(VariantHit {
          entry,
          form: Some(row.form),
          source: HitSource::Irregular,
        });
      }
    }
    rank(&mut hits);
    hits
  }

  /// Phase 2: the surface as a base form in its own right.
  fn identity_hits(&self, surface: &str, category: Category) -> Vec<VariantHit> {
    let mut hits: Vec<VariantHit> = self
      .index
      .words_with_category(surface, category)
      .into_iter()
      .map(|entry| VariantHit {
        entry,
        form: None,
        source: HitSource::Identity,
      })
      .collect();
    rank(&mut hits);
    hits
  }

  /// Phase 3: strip-and-verify over the generative rule table.
  fn generative_hits(&self, surface: &str, category: Category) -> Vec<VariantHit> {
    let inflector = Inflector::new(self.irregulars);
    let mut hits = Vec::new();

    for &(implied, form, propose) in STRIP_RULES {
      if !implied.matches(category) {
        continue;
      }
      for candidate in propose(surface) {
        for entry in self.index.words_with_category(&candidate, implied) {
          // A proposal only counts when the entry regenerates the surface;
          // this is where uncount and invariant entries drop out.
          if inflector.inflect(&entry, form).as_deref() == Some(surface) {
            hits.push(VariantHit {
              entry,
              form: Some(form),
              source: HitSource::Generative,
            });
          }
        }
      }
    }

    rank(&mut hits);
    hits
  }
}

/// Orders hits of one source by category rank, then the homograph
/// tie-break.
fn rank(hits: &mut [VariantHit]) {
  hits.sort_by(|a, b| {
    a.entry
      .category()
      .cmp(&b.entry.category())
      .then_with(|| entry_order(&a.entry, &b.entry))
  });
}

/// Keeps the first (best-ranked) hit per entry identifier.
fn dedup_by_id(hits: &mut Vec<VariantHit>) {
  let mut seen: Vec<String> = Vec::with_capacity(hits.len());
  hits.retain(|hit| {
    if seen.iter().any(|id| id == hit.entry.id()) {
      false
    } else {
      seen.push(hit.entry.id().to_string());
      true
    }
  });
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
