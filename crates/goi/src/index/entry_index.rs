//! In-Memory Entry Index
//!
//! Multi-key retrieval over validated word entries: by identifier, by base
//! form, and by base form within a category. Built once from the load
//! sequence, read-only afterwards.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::BuildError;
use crate::models::{Category, WordEntry};

/// Homograph tie-break: the documented total order over entries.
///
/// Primary senses first, then identifier, then load position. Load position
/// can only decide between entries of different sources sharing an
/// identifier; inside one lexicon identifiers are unique.
pub(crate) fn entry_order(a: &WordEntry, b: &WordEntry) -> Ordering {
  b.is_primary()
    .cmp(&a.is_primary())
    .then_with(|| a.id().cmp(b.id()))
    .then_with(|| a.sequence().cmp(&b.sequence()))
}

/// Index over the entries of one lexicon.
///
/// # Responsibilities
///
/// - Identifier uniqueness enforcement during the build
/// - Base form retrieval (all homographs, deterministically ordered)
/// - Category-filtered retrieval with the [`Category::Any`] wildcard
///
/// Lookups are case-sensitive: "Kim" and "kim" are different base forms.
#[derive(Debug)]
pub struct EntryIndex {
  /// identifier -> entry
  by_id: HashMap<String, Arc<WordEntry>>,

  /// base form -> homographs in tie-break order
  by_base: HashMap<String, Vec<Arc<WordEntry>>>,

  /// every entry in load order
  entries: Vec<Arc<WordEntry>>,
}

impl EntryIndex {
  /// Indexes a validated load sequence.
  ///
  /// # Errors
  /// [`BuildError::DuplicateId`] when two entries share an identifier. The
  /// failure is atomic: the caller drops the partially built value.
  pub fn from_entries(entries: Vec<WordEntry>) -> Result<Self, BuildError> {
    let mut index = Self {
      by_id: HashMap::with_capacity(entries.len()),
      by_base: HashMap::new(),
      entries: Vec::with_capacity(entries.len()),
    };

    for entry in entries {
      let entry = Arc::new(entry);

      if index.by_id.contains_key(entry.id()) {
        return Err(BuildError::DuplicateId {
          id: entry.id().to_string(),
        });
      }
      index.by_id.insert(entry.id().to_string(), Arc::clone(&entry));

      index
        .by_base
        .entry(entry.base().to_string())
        .or_default()
        .push(Arc::clone(&entry));

      index.entries.push(entry);
    }

    for bucket in index.by_base.values_mut() {
      bucket.sort_by(|a, b| entry_order(a, b));
    }

    Ok(index)
  }

  /// All entries sharing the base form, every category, tie-break order.
  pub fn words(&self, base: &str) -> Vec<Arc<WordEntry>> {
    self.by_base.get(base).cloned().unwrap_or_default()
  }

  /// Entries sharing the base form under the category filter.
  pub fn words_with_category(&self, base: &str, category: Category) -> Vec<Arc<WordEntry>> {
    match self.by_base.get(base) {
      Some(bucket) => {
        bucket.iter().filter(|e| e.category().matches(category)).cloned().collect()
      }
      None => Vec::new(),
    }
  }

  /// Best entry for the base form, every category.
  pub fn word(&self, base: &str) -> Option<Arc<WordEntry>> {
    self.by_base.get(base).and_then(|bucket| bucket.first()).cloned()
  }

  /// Best entry for the base form under the category filter.
  pub fn word_with_category(&self, base: &str, category: Category) -> Option<Arc<WordEntry>> {
    self
      .by_base
      .get(base)
      .and_then(|bucket| bucket.iter().find(|e| e.category().matches(category)))
      .cloned()
  }

  /// Entry with the given identifier.
  pub fn word_by_id(&self, id: &str) -> Option<Arc<WordEntry>> {
    self.by_id.get(id).cloned()
  }

  /// Whether any entry carries the base form.
  pub fn has_word(&self, base: &str) -> bool {
    self.by_base.contains_key(base)
  }

  /// Whether any entry carries the base form under the category filter.
  pub fn has_word_with_category(&self, base: &str, category: Category) -> bool {
    match self.by_base.get(base) {
      Some(bucket) => bucket.iter().any(|e| e.category().matches(category)),
      None => false,
    }
  }

  // ===== Accessors =====

  /// Number of indexed entries.
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Whether the index holds no entries.
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Number of distinct base forms.
  pub fn base_count(&self) -> usize {
    self.by_base.len()
  }

  /// Every entry in load order.
  pub fn entries(&self) -> &[Arc<WordEntry>] {
    &self.entries
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
