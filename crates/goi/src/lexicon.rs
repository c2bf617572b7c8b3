// crates/goi/src/lexicon.rs

//! Lexicon: the integration facade of the goi crate.
//!
//! - Entry storage and retrieval (EntryIndex)
//! - Irregular form table (IrregularForms)
//! - Surface generation (Inflector) and resolution (Resolver)
//!
//! Consumers only need this type: it is built once from raw entry records,
//! is immutable afterwards, and answers every query of the public surface.
//! A build either completes fully or fails with a [`GoiError`]; no
//! partially populated lexicon is ever observable.
//!
//! `MultiLexicon` chains several shared lexicons by priority for pipelines
//! that combine a small custom vocabulary with a large general one.

use std::sync::Arc;

use tracing::debug;

use crate::config::LexiconConfig;
use crate::errors::{GoiError, GoiResult};
use crate::index::EntryIndex;
use crate::models::{Category, RawEntry, WordEntry, WordForm};
use crate::morphology::{Inflector, IrregularForms, Resolver, VariantHit};

/// An immutable lexical knowledge base.
///
/// Built synchronously from raw entry records, then shared read-only: every
/// query method takes `&self`, holds no locks, and completes in bounded
/// time, so one `Arc<Lexicon>` can serve any number of threads.
#[derive(Debug)]
pub struct Lexicon {
  /// Effective configuration
  config: LexiconConfig,

  /// Multi-key index over the validated entries
  index: EntryIndex,

  /// Irregular table: built-in rows plus folded stored forms
  irregulars: IrregularForms,
}

impl Lexicon {
  /// Builds a lexicon with the default configuration.
  ///
  /// # Errors
  /// Any [`BuildError`](crate::errors::BuildError) raised while the records
  /// are validated and indexed; the build is atomic.
  pub fn from_entries(records: Vec<RawEntry>) -> GoiResult<Self> {
    Self::with_config(records, LexiconConfig::default())
  }

  /// Builds a lexicon with an explicit configuration.
  ///
  /// # Processing flow
  /// 1. Validate the configuration
  /// 2. Validate and type every raw record
  /// 3. Index the entries (identifier uniqueness is enforced here)
  /// 4. Assemble the irregular table: built-in rows when
  ///    `morphology.use_builtin_irregulars`, stored per-entry forms when
  ///    `morphology.fold_stored_forms`
  ///
  /// # Errors
  /// - Invalid configuration (`lookup.max_variant_results` of zero)
  /// - A malformed record (blank identifier or base form, non-scalar
  ///   feature value, unknown inflection code)
  /// - A duplicate identifier
  pub fn with_config(records: Vec<RawEntry>, config: LexiconConfig) -> GoiResult<Self> {
    config.validate()?;

    let mut entries = Vec::with_capacity(records.len());
    for (seq, record) in records.into_iter().enumerate() {
      entries.push(WordEntry::from_raw(record, seq).map_err(GoiError::from)?);
    }

    let index = EntryIndex::from_entries(entries).map_err(GoiError::from)?;

    let mut irregulars = if config.use_builtin_irregulars() {
      IrregularForms::builtin().clone()
    } else {
      IrregularForms::new()
    };
    if config.fold_stored_forms() {
      for entry in index.entries() {
        irregulars.fold_entry(entry);
      }
    }

    debug!(
      entries = index.len(),
      base_forms = index.base_count(),
      irregular_surfaces = irregulars.surface_count(),
      "lexicon built"
    );

    Ok(Self {
      config,
      index,
      irregulars,
    })
  }

  // ===== Index queries =====

  /// All entries with the base form, every category, tie-break order.
  pub fn words(&self, base: &str) -> Vec<Arc<WordEntry>> {
    self.index.words(base)
  }

  /// Entries with the base form under the category filter;
  /// [`Category::Any`] leaves the result unfiltered.
  pub fn words_with_category(&self, base: &str, category: Category) -> Vec<Arc<WordEntry>> {
    self.index.words_with_category(base, category)
  }

  /// The single best entry for the base form, or `None`. Homographs are
  /// settled by the documented tie-break: primary sense first, then
  /// identifier, then load order.
  pub fn word(&self, base: &str) -> Option<Arc<WordEntry>> {
    self.index.word(base)
  }

  /// The single best entry for the base form under the category filter.
  pub fn word_with_category(&self, base: &str, category: Category) -> Option<Arc<WordEntry>> {
    self.index.word_with_category(base, category)
  }

  /// The entry with the given identifier, or `None`.
  pub fn word_by_id(&self, id: &str) -> Option<Arc<WordEntry>> {
    self.index.word_by_id(id)
  }

  /// Whether any entry carries the base form.
  pub fn has_word(&self, base: &str) -> bool {
    self.index.has_word(base)
  }

  /// Whether any entry carries the base form under the category filter.
  pub fn has_word_with_category(&self, base: &str, category: Category) -> bool {
    self.index.has_word_with_category(base, category)
  }

  // ===== Facade queries =====

  /// General lookup across every category: base form first, then variant
  /// resolution, then the input as an identifier.
  pub fn lookup_word(&self, form: &str) -> Option<Arc<WordEntry>> {
    self.lookup_word_with_category(form, Category::Any)
  }

  /// General lookup under a category filter.
  ///
  /// The input is tried as a base form, then as an inflected surface form,
  /// and finally as an entry identifier. `None` only when all three fail;
  /// a miss is an ordinary outcome, never an error.
  pub fn lookup_word_with_category(&self, form: &str, category: Category) -> Option<Arc<WordEntry>> {
    if let Some(entry) = self.index.word_with_category(form, category) {
      return Some(entry);
    }
    if let Some(entry) = self.word_from_variant_with_category(form, category) {
      return Some(entry);
    }
    // Identifier as the lookup key of last resort
    self.index.word_by_id(form).filter(|e| e.category().matches(category))
  }

  /// The best entry for an inflected surface form, every category.
  ///
  /// Always routes through variant resolution, so "can" comes back as the
  /// base of "could"-style inputs even when "can" is also a base form.
  pub fn word_from_variant(&self, surface: &str) -> Option<Arc<WordEntry>> {
    self.word_from_variant_with_category(surface, Category::Any)
  }

  /// The best entry for an inflected surface form under a category filter.
  pub fn word_from_variant_with_category(
    &self,
    surface: &str,
    category: Category,
  ) -> Option<Arc<WordEntry>> {
    self.resolver().resolve(surface, category).into_iter().map(|hit| hit.entry).next()
  }

  /// All candidate entries for an inflected surface form, ranked, capped
  /// by `lookup.max_variant_results`.
  pub fn words_from_variant(&self, surface: &str) -> Vec<Arc<WordEntry>> {
    self.words_from_variant_with_category(surface, Category::Any)
  }

  /// Ranked candidate entries for a surface form under a category filter.
  pub fn words_from_variant_with_category(
    &self,
    surface: &str,
    category: Category,
  ) -> Vec<Arc<WordEntry>> {
    self
      .resolver()
      .resolve(surface, category)
      .into_iter()
      .map(|hit| hit.entry)
      .take(self.config.max_variant_results())
      .collect()
  }

  /// The full resolution analysis for a surface form: ranked hits with
  /// their form and candidate source, capped by
  /// `lookup.max_variant_results`.
  pub fn resolve_variants(&self, surface: &str, category: Category) -> Vec<VariantHit> {
    let mut hits = self.resolver().resolve(surface, category);
    hits.truncate(self.config.max_variant_results());
    hits
  }

  /// The surface form of `entry` under `form`, or `None` when the
  /// combination has no surface (form inapplicable to the category, or the
  /// entry's pattern vetoes it).
  pub fn inflect(&self, entry: &WordEntry, form: WordForm) -> Option<String> {
    Inflector::new(&self.irregulars).inflect(entry, form)
  }

  // ===== Accessors =====

  /// The effective configuration.
  pub fn config(&self) -> &LexiconConfig {
    &self.config
  }

  /// Number of entries.
  pub fn len(&self) -> usize {
    self.index.len()
  }

  /// Whether the lexicon holds no entries.
  pub fn is_empty(&self) -> bool {
    self.index.is_empty()
  }

  /// The underlying entry index.
  pub fn index(&self) -> &EntryIndex {
    &self.index
  }

  /// The assembled irregular table.
  pub fn irregular_forms(&self) -> &IrregularForms {
    &self.irregulars
  }

  fn resolver(&self) -> Resolver<'_> {
    Resolver::new(&self.index, &self.irregulars)
  }
}

/// An ordered chain of shared lexicons searched by priority.
///
/// By default a query stops at the first lexicon that produces a match, so
/// a small custom vocabulary listed first shadows a large general one.
/// With `search_all` the multi-result queries merge across every source
/// instead.
#[derive(Debug, Clone)]
pub struct MultiLexicon {
  sources: Vec<Arc<Lexicon>>,
  search_all: bool,
}

impl MultiLexicon {
  /// Chains the given lexicons in priority order.
  ///
  /// The highest-priority source's `lookup.search_all_sources` sets the
  /// initial search mode; [`MultiLexicon::with_search_all`] overrides it.
  ///
  /// # Errors
  /// [`GoiError::NoSources`] when the list is empty.
  pub fn new(sources: Vec<Arc<Lexicon>>) -> GoiResult<Self> {
    let search_all = match sources.first() {
      Some(source) => source.config().search_all_sources(),
      None => return Err(GoiError::NoSources),
    };
    Ok(Self {
      sources,
      search_all,
    })
  }

  /// Switches the multi-result queries to merge across every source
  /// instead of stopping at the first match.
  #[must_use]
  pub fn with_search_all(mut self, search_all: bool) -> Self {
    self.search_all = search_all;
    self
  }

  /// All entries with the base form. First matching source only, unless
  /// `search_all` merges the chain.
  pub fn words(&self, base: &str) -> Vec<Arc<WordEntry>> {
    self.words_with_category(base, Category::Any)
  }

  /// Entries with the base form under the category filter.
  pub fn words_with_category(&self, base: &str, category: Category) -> Vec<Arc<WordEntry>> {
    let mut merged = Vec::new();
    for source in &self.sources {
      let found = source.words_with_category(base, category);
      if !found.is_empty() {
        merged.extend(found);
        if !self.search_all {
          break;
        }
      }
    }
    merged
  }

  /// The best entry for the base form from the highest-priority source
  /// that has one.
  pub fn word(&self, base: &str) -> Option<Arc<WordEntry>> {
    self.sources.iter().find_map(|source| source.word(base))
  }

  /// The best entry for the base form under the category filter.
  pub fn word_with_category(&self, base: &str, category: Category) -> Option<Arc<WordEntry>> {
    self.sources.iter().find_map(|source| source.word_with_category(base, category))
  }

  /// The entry with the given identifier from the highest-priority source
  /// that has it.
  pub fn word_by_id(&self, id: &str) -> Option<Arc<WordEntry>> {
    self.sources.iter().find_map(|source| source.word_by_id(id))
  }

  /// Whether any source carries the base form.
  pub fn has_word(&self, base: &str) -> bool {
    self.sources.iter().any(|source| source.has_word(base))
  }

  /// General lookup (base, then variant, then identifier) through the
  /// chain.
  pub fn lookup_word(&self, form: &str) -> Option<Arc<WordEntry>> {
    self.lookup_word_with_category(form, Category::Any)
  }

  /// General lookup under a category filter through the chain.
  pub fn lookup_word_with_category(&self, form: &str, category: Category) -> Option<Arc<WordEntry>> {
    self.sources.iter().find_map(|source| source.lookup_word_with_category(form, category))
  }

  /// The best entry for an inflected surface form through the chain.
  pub fn word_from_variant(&self, surface: &str) -> Option<Arc<WordEntry>> {
    self.word_from_variant_with_category(surface, Category::Any)
  }

  /// The best entry for a surface form under a category filter.
  pub fn word_from_variant_with_category(
    &self,
    surface: &str,
    category: Category,
  ) -> Option<Arc<WordEntry>> {
    self
      .sources
      .iter()
      .find_map(|source| source.word_from_variant_with_category(surface, category))
  }

  // ===== Accessors =====

  /// The chained sources in priority order.
  pub fn sources(&self) -> &[Arc<Lexicon>] {
    &self.sources
  }

  /// Whether multi-result queries merge across every source.
  pub fn search_all(&self) -> bool {
    self.search_all
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
