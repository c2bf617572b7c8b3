//! goi crate example
//!
//! Builds a small lexicon from inline records, then walks the whole query
//! surface: base form lookup, homograph disambiguation, inflection
//! generation, and surface form resolution.

use goi::{Category, Lexicon, RawEntry, WordForm};
use serde_json::json;
use tracing_subscriber::EnvFilter;

/// Application common result type
type AppResult<T> = Result<T, Box<dyn std::error::Error>>;

/// The raw records a loading collaborator would normally supply.
fn sample_records() -> Vec<RawEntry> {
  vec![
    // "can" three ways: the homograph fixture
    RawEntry::new("E0012152", "can", Category::Modal),
    RawEntry::new("E0330509", "can", Category::Noun),
    RawEntry::new("E0330512", "can", Category::Verb),
    // verbs
    RawEntry::new("E0057033", "be", Category::Verb),
    RawEntry::new("E0029100", "eat", Category::Verb),
    RawEntry::new("E0063745", "walk", Category::Verb),
    RawEntry::new("E0065167", "tug", Category::Verb).with_feature("default_infl", json!("regd")),
    RawEntry::new("E0035187", "fly", Category::Verb),
    // nouns
    RawEntry::new("E0035181", "fly", Category::Noun),
    RawEntry::new("E0023128", "dog", Category::Noun),
    RawEntry::new("E0038290", "man", Category::Noun).with_feature("plural", json!("men")),
    RawEntry::new("E0041278", "focus", Category::Noun)
      .with_feature("default_infl", json!("glreg")),
    RawEntry::new("E0059002", "sand", Category::Noun)
      .with_feature("default_infl", json!("uncount")),
    // adjectives
    RawEntry::new("E0040353", "good", Category::Adjective),
    RawEntry::new("E0016756", "clear", Category::Adjective),
  ]
}

fn print_lookup(lexicon: &Lexicon, form: &str) {
  match lexicon.lookup_word(form) {
    Some(entry) => println!(
      "  lookup \"{}\" -> {} [{}] (id {})",
      form,
      entry.base(),
      entry.category(),
      entry.id()
    ),
    None => println!("  lookup \"{form}\" -> (not in lexicon)"),
  }
}

fn print_inflection(lexicon: &Lexicon, base: &str, category: Category, form: WordForm) {
  let Some(entry) = lexicon.word_with_category(base, category) else {
    println!("  {base} [{category}] -> (no entry)");
    return;
  };
  match lexicon.inflect(&entry, form) {
    Some(surface) => println!("  {base} + {form} -> {surface}"),
    None => println!("  {base} + {form} -> (no surface)"),
  }
}

fn main() -> AppResult<()> {
  // Initialize tracing_subscriber
  // Use RUST_LOG environment variable if set, default to debug for goi
  let env_filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,goi=debug"));
  tracing_subscriber::fmt().with_env_filter(env_filter).with_target(true).with_level(true).init();

  // 1. Build the lexicon (atomic: a malformed record fails the whole build)
  let lexicon = Lexicon::from_entries(sample_records())?;
  println!(
    "Built lexicon: {} entries, {} base forms",
    lexicon.len(),
    lexicon.index().base_count()
  );

  // 2. Base form retrieval and homograph disambiguation
  println!("\n===== Base form retrieval =====");
  let homographs = lexicon.words("can");
  println!("  \"can\" has {} entries:", homographs.len());
  for entry in &homographs {
    println!("    {} [{}]", entry.id(), entry.category());
  }
  println!(
    "  getWords(\"can\", noun) -> {} entry",
    lexicon.words_with_category("can", Category::Noun).len()
  );

  // 3. General lookup: base form, then variant, then identifier
  println!("\n===== Lookup chain =====");
  print_lookup(&lexicon, "dog");
  print_lookup(&lexicon, "eating");
  print_lookup(&lexicon, "is");
  print_lookup(&lexicon, "E0038290");
  print_lookup(&lexicon, "akjmchsgk");

  // 4. Inflection generation
  println!("\n===== Generation =====");
  print_inflection(&lexicon, "be", Category::Verb, WordForm::PastParticiple);
  print_inflection(&lexicon, "man", Category::Noun, WordForm::Plural);
  print_inflection(&lexicon, "focus", Category::Noun, WordForm::Plural);
  print_inflection(&lexicon, "sand", Category::Noun, WordForm::Plural);
  print_inflection(&lexicon, "tug", Category::Verb, WordForm::PresentParticiple);
  print_inflection(&lexicon, "clear", Category::Adjective, WordForm::Superlative);

  // 5. Surface form resolution with the full analysis
  println!("\n===== Resolution =====");
  for surface in ["was", "men", "flies", "foci", "tugged", "clearest"] {
    let hits = lexicon.resolve_variants(surface, Category::Any);
    if hits.is_empty() {
      println!("  \"{surface}\" -> (no candidates)");
      continue;
    }
    for hit in hits {
      println!(
        "  \"{}\" -> {} [{}] via {:?} ({})",
        surface,
        hit.entry.base(),
        hit.entry.category(),
        hit.source,
        hit.form.map_or("base form".to_string(), |f| f.to_string()),
      );
    }
  }

  Ok(())
}
