//! Generative Suffixation Rules
//!
//! Pure string functions in both directions: building a regular surface form
//! from a base ("fly" to "flies") and proposing base candidates for a
//! surface ("flies" to "fly"). Candidates are unverified; the resolver
//! checks every proposal against the entry index before it counts as a hit.
//!
//! Irregular forms never pass through here. The rules implement the regular
//! patterns only: plain suffixation, final consonant doubling, and the
//! Greco-Latin noun plurals.

// ─────────────────────────────────────────────────────────────────────────────
// Character Helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Vowel test for the doubling and consonant-y rules.
fn is_vowel(c: char) -> bool {
  matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Whether the word ends in a consonant followed by "y" ("dry", "fly").
/// Words ending in vowel + "y" ("play") inflect with plain suffixation.
fn ends_with_consonant_y(word: &str) -> bool {
  let mut chars = word.chars().rev();
  if chars.next() != Some('y') {
    return false;
  }
  match chars.next() {
    Some(c) => c.is_ascii_alphabetic() && !is_vowel(c),
    None => false,
  }
}

/// Whether the word ends in a sibilant that takes "es" ("box", "watch").
fn has_sibilant_ending(word: &str) -> bool {
  word.ends_with(['s', 'z', 'x']) || word.ends_with("ch") || word.ends_with("sh")
}

/// Replaces a final "y" with the given suffix ("dry" + "ied" = "dried").
fn replace_final_y(word: &str, suffix: &str) -> String {
  // ends_with_consonant_y guarantees the final char is the one-byte "y"
  format!("{}{}", &word[..word.len() - 1], suffix)
}

/// Appends the suffix after doubling the final consonant ("tug" + "ed" =
/// "tugged").
fn double_and_append(word: &str, suffix: &str) -> String {
  match word.chars().last() {
    Some(last) => format!("{word}{last}{suffix}"),
    None => String::new(),
  }
}

/// Undoes consonant doubling on a stripped stem ("tugg" to "tug").
/// `None` when the stem does not end in a doubled consonant.
fn undouble(stem: &str) -> Option<String> {
  let mut chars = stem.chars().rev();
  let last = chars.next()?;
  let prev = chars.next()?;
  if last == prev && last.is_ascii_alphabetic() && !is_vowel(last) {
    Some(stem[..stem.len() - last.len_utf8()].to_string())
  } else {
    None
  }
}

/// The shared "-s" rule of noun plurals and third person singular verbs.
fn apply_s_suffix(base: &str) -> String {
  if ends_with_consonant_y(base) {
    replace_final_y(base, "ies")
  } else if has_sibilant_ending(base) {
    format!("{base}es")
  } else {
    format!("{base}s")
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Generation: base form -> surface form
// ─────────────────────────────────────────────────────────────────────────────

/// Regular noun plural: "dog" to "dogs", "box" to "boxes", "fly" to "flies".
pub fn regular_plural(base: &str) -> String {
  apply_s_suffix(base)
}

/// Greco-Latin noun plural: "focus" to "foci", "trauma" to "traumata",
/// "larva" to "larvae", "criterion" to "criteria", "analysis" to "analyses",
/// "foramen" to "foramina", "index" to "indices", "matrix" to "matrices".
/// Bases matching none of the endings come back unchanged.
pub fn greco_latin_plural(base: &str) -> String {
  if let Some(stem) = base.strip_suffix("us") {
    format!("{stem}i")
  } else if base.ends_with("ma") {
    format!("{base}ta")
  } else if base.ends_with('a') {
    format!("{base}e")
  } else if let Some(stem) = base.strip_suffix("um") {
    format!("{stem}a")
  } else if let Some(stem) = base.strip_suffix("on") {
    format!("{stem}a")
  } else if let Some(stem) = base.strip_suffix("sis") {
    format!("{stem}ses")
  } else if let Some(stem) = base.strip_suffix("is") {
    format!("{stem}ides")
  } else if let Some(stem) = base.strip_suffix("men") {
    format!("{stem}mina")
  } else if let Some(stem) = base.strip_suffix("ex") {
    format!("{stem}ices")
  } else if let Some(stem) = base.strip_suffix('x') {
    format!("{stem}ces")
  } else {
    base.to_string()
  }
}

/// Third person singular present: "eat" to "eats", "watch" to "watches",
/// "fly" to "flies".
pub fn present_third_singular(base: &str) -> String {
  apply_s_suffix(base)
}

/// Regular past tense and past participle: "walk" to "walked", "chase" to
/// "chased", "dry" to "dried".
pub fn regular_past(base: &str) -> String {
  if base.ends_with('e') {
    format!("{base}d")
  } else if ends_with_consonant_y(base) {
    replace_final_y(base, "ied")
  } else {
    format!("{base}ed")
  }
}

/// Doubling past tense: "tug" to "tugged".
pub fn double_past(base: &str) -> String {
  double_and_append(base, "ed")
}

/// Regular present participle: "eat" to "eating", "chase" to "chasing",
/// "tie" to "tying", "canoe" to "canoeing".
pub fn regular_present_participle(base: &str) -> String {
  if base.ends_with("ie") {
    format!("{}ying", &base[..base.len() - 2])
  } else if drops_final_e_before_ing(base) {
    format!("{}ing", &base[..base.len() - 1])
  } else {
    format!("{base}ing")
  }
}

/// Whether a final "e" is dropped before "-ing". "ee", "oe" and "ye"
/// endings keep it ("seeing", "canoeing", "dyeing").
fn drops_final_e_before_ing(base: &str) -> bool {
  let mut chars = base.chars().rev();
  if chars.next() != Some('e') {
    return false;
  }
  match chars.next() {
    Some(c) => !matches!(c, 'i' | 'y' | 'e' | 'o'),
    None => false,
  }
}

/// Doubling present participle: "tug" to "tugging".
pub fn double_present_participle(base: &str) -> String {
  double_and_append(base, "ing")
}

/// Regular comparative: "clear" to "clearer", "fine" to "finer", "brainy"
/// to "brainier".
pub fn regular_comparative(base: &str) -> String {
  if ends_with_consonant_y(base) {
    replace_final_y(base, "ier")
  } else if base.ends_with('e') {
    format!("{base}r")
  } else {
    format!("{base}er")
  }
}

/// Doubling comparative: "fat" to "fatter".
pub fn double_comparative(base: &str) -> String {
  double_and_append(base, "er")
}

/// Regular superlative: "clear" to "clearest", "fine" to "finest", "brainy"
/// to "brainiest".
pub fn regular_superlative(base: &str) -> String {
  if ends_with_consonant_y(base) {
    replace_final_y(base, "iest")
  } else if base.ends_with('e') {
    format!("{base}st")
  } else {
    format!("{base}est")
  }
}

/// Doubling superlative: "fat" to "fattest".
pub fn double_superlative(base: &str) -> String {
  double_and_append(base, "est")
}

// ─────────────────────────────────────────────────────────────────────────────
// Analysis: surface form -> base candidates
// ─────────────────────────────────────────────────────────────────────────────

/// Pushes a candidate unless it is empty or already proposed.
fn push_candidate(candidates: &mut Vec<String>, candidate: String) {
  if !candidate.is_empty() && !candidates.contains(&candidate) {
    candidates.push(candidate);
  }
}

/// Base candidates for a plural noun surface, covering the regular strips
/// and the Greco-Latin reversals. Unverified.
pub fn plural_base_candidates(surface: &str) -> Vec<String> {
  let mut candidates = Vec::new();

  if let Some(stem) = surface.strip_suffix("ies") {
    push_candidate(&mut candidates, format!("{stem}y"));
  }
  if let Some(stem) = surface.strip_suffix("es") {
    push_candidate(&mut candidates, stem.to_string());
  }
  if let Some(stem) = surface.strip_suffix('s') {
    push_candidate(&mut candidates, stem.to_string());
  }

  // Greco-Latin reversals
  if let Some(stem) = surface.strip_suffix('i') {
    push_candidate(&mut candidates, format!("{stem}us"));
  }
  if let Some(stem) = surface.strip_suffix("ta") {
    push_candidate(&mut candidates, stem.to_string());
  }
  if let Some(stem) = surface.strip_suffix("ae") {
    push_candidate(&mut candidates, format!("{stem}a"));
  }
  if let Some(stem) = surface.strip_suffix('a') {
    push_candidate(&mut candidates, format!("{stem}um"));
    push_candidate(&mut candidates, format!("{stem}on"));
  }
  if let Some(stem) = surface.strip_suffix("ses") {
    push_candidate(&mut candidates, format!("{stem}sis"));
  }
  if let Some(stem) = surface.strip_suffix("ides") {
    push_candidate(&mut candidates, format!("{stem}is"));
  }
  if let Some(stem) = surface.strip_suffix("mina") {
    push_candidate(&mut candidates, format!("{stem}men"));
  }
  if let Some(stem) = surface.strip_suffix("ices") {
    push_candidate(&mut candidates, format!("{stem}ex"));
  }
  if let Some(stem) = surface.strip_suffix("ces") {
    push_candidate(&mut candidates, format!("{stem}x"));
  }

  candidates
}

/// Base candidates for a third person singular verb surface. Unverified.
pub fn present3s_base_candidates(surface: &str) -> Vec<String> {
  let mut candidates = Vec::new();

  if let Some(stem) = surface.strip_suffix("ies") {
    push_candidate(&mut candidates, format!("{stem}y"));
  }
  if let Some(stem) = surface.strip_suffix("es") {
    push_candidate(&mut candidates, stem.to_string());
  }
  if let Some(stem) = surface.strip_suffix('s') {
    push_candidate(&mut candidates, stem.to_string());
  }

  candidates
}

/// Base candidates for a past tense or past participle surface, including
/// the doubling and final-e reversals. Unverified.
pub fn past_base_candidates(surface: &str) -> Vec<String> {
  let mut candidates = Vec::new();

  if let Some(stem) = surface.strip_suffix("ied") {
    push_candidate(&mut candidates, format!("{stem}y"));
  }
  if let Some(stem) = surface.strip_suffix("ed") {
    push_candidate(&mut candidates, stem.to_string());
    if let Some(undoubled) = undouble(stem) {
      push_candidate(&mut candidates, undoubled);
    }
  }
  if let Some(stem) = surface.strip_suffix('d') {
    // "chased" keeps the final e of "chase"
    push_candidate(&mut candidates, stem.to_string());
  }

  candidates
}

/// Base candidates for a present participle surface, including the doubling
/// and final-e reversals. Unverified.
pub fn present_participle_base_candidates(surface: &str) -> Vec<String> {
  let mut candidates = Vec::new();

  if let Some(stem) = surface.strip_suffix("ying") {
    push_candidate(&mut candidates, format!("{stem}ie"));
  }
  if let Some(stem) = surface.strip_suffix("ing") {
    push_candidate(&mut candidates, stem.to_string());
    push_candidate(&mut candidates, format!("{stem}e"));
    if let Some(undoubled) = undouble(stem) {
      push_candidate(&mut candidates, undoubled);
    }
  }

  candidates
}

/// Base candidates for a comparative surface. Unverified.
pub fn comparative_base_candidates(surface: &str) -> Vec<String> {
  let mut candidates = Vec::new();

  if let Some(stem) = surface.strip_suffix("ier") {
    push_candidate(&mut candidates, format!("{stem}y"));
  }
  if let Some(stem) = surface.strip_suffix("er") {
    push_candidate(&mut candidates, stem.to_string());
    if let Some(undoubled) = undouble(stem) {
      push_candidate(&mut candidates, undoubled);
    }
  }
  if let Some(stem) = surface.strip_suffix('r') {
    // "finer" keeps the final e of "fine"
    push_candidate(&mut candidates, stem.to_string());
  }

  candidates
}

/// Base candidates for a superlative surface. Unverified.
pub fn superlative_base_candidates(surface: &str) -> Vec<String> {
  let mut candidates = Vec::new();

  if let Some(stem) = surface.strip_suffix("iest") {
    push_candidate(&mut candidates, format!("{stem}y"));
  }
  if let Some(stem) = surface.strip_suffix("est") {
    push_candidate(&mut candidates, stem.to_string());
    if let Some(undoubled) = undouble(stem) {
      push_candidate(&mut candidates, undoubled);
    }
  }
  if let Some(stem) = surface.strip_suffix("st") {
    // "finest" keeps the final e of "fine"
    push_candidate(&mut candidates, stem.to_string());
  }

  candidates
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  // ─── Plural generation ────────────────────────────────────────────────

  #[test]
  fn regular_plural_appends_s() {
    assert_eq!(regular_plural("dog"), "dogs");
    assert_eq!(regular_plural("tree"), "trees");
    // Vowel + y takes plain s
    assert_eq!(regular_plural("day"), "days");
  }

  #[test]
  fn regular_plural_uses_es_after_sibilants() {
    assert_eq!(regular_plural("box"), "boxes");
    assert_eq!(regular_plural("watch"), "watches");
    assert_eq!(regular_plural("bush"), "bushes");
    assert_eq!(regular_plural("bus"), "buses");
    assert_eq!(regular_plural("buzz"), "buzzes");
  }

  #[test]
  fn regular_plural_turns_consonant_y_into_ies() {
    assert_eq!(regular_plural("fly"), "flies");
    assert_eq!(regular_plural("city"), "cities");
  }

  #[test]
  fn greco_latin_plural_covers_the_documented_endings() {
    assert_eq!(greco_latin_plural("focus"), "foci");
    assert_eq!(greco_latin_plural("trauma"), "traumata");
    assert_eq!(greco_latin_plural("larva"), "larvae");
    assert_eq!(greco_latin_plural("datum"), "data");
    assert_eq!(greco_latin_plural("criterion"), "criteria");
    assert_eq!(greco_latin_plural("analysis"), "analyses");
    assert_eq!(greco_latin_plural("iris"), "irides");
    assert_eq!(greco_latin_plural("foramen"), "foramina");
    assert_eq!(greco_latin_plural("index"), "indices");
    assert_eq!(greco_latin_plural("matrix"), "matrices");
  }

  #[test]
  fn greco_latin_plural_passes_through_unmatched_bases() {
    assert_eq!(greco_latin_plural("dog"), "dog");
  }

  // ─── Verb generation ──────────────────────────────────────────────────

  #[test]
  fn present_third_singular_follows_the_plural_rule() {
    assert_eq!(present_third_singular("eat"), "eats");
    assert_eq!(present_third_singular("watch"), "watches");
    assert_eq!(present_third_singular("fly"), "flies");
    assert_eq!(present_third_singular("pass"), "passes");
  }

  #[test]
  fn regular_past_handles_the_three_shapes() {
    assert_eq!(regular_past("walk"), "walked");
    assert_eq!(regular_past("chase"), "chased");
    assert_eq!(regular_past("dry"), "dried");
    // Vowel + y stays regular
    assert_eq!(regular_past("play"), "played");
  }

  #[test]
  fn double_past_doubles_the_final_consonant() {
    assert_eq!(double_past("tug"), "tugged");
    assert_eq!(double_past("plan"), "planned");
  }

  #[test]
  fn present_participle_handles_final_e() {
    assert_eq!(regular_present_participle("eat"), "eating");
    assert_eq!(regular_present_participle("chase"), "chasing");
    assert_eq!(regular_present_participle("tie"), "tying");
    // ee / oe / ye keep the e
    assert_eq!(regular_present_participle("see"), "seeing");
    assert_eq!(regular_present_participle("canoe"), "canoeing");
    assert_eq!(regular_present_participle("dye"), "dyeing");
  }

  #[test]
  fn double_present_participle_doubles_the_final_consonant() {
    assert_eq!(double_present_participle("tug"), "tugging");
  }

  // ─── Comparison generation ────────────────────────────────────────────

  #[test]
  fn regular_comparative_handles_the_three_shapes() {
    assert_eq!(regular_comparative("clear"), "clearer");
    assert_eq!(regular_comparative("fine"), "finer");
    assert_eq!(regular_comparative("brainy"), "brainier");
  }

  #[test]
  fn regular_superlative_handles_the_three_shapes() {
    assert_eq!(regular_superlative("clear"), "clearest");
    assert_eq!(regular_superlative("fine"), "finest");
    assert_eq!(regular_superlative("brainy"), "brainiest");
  }

  #[test]
  fn doubling_comparison_doubles_the_final_consonant() {
    assert_eq!(double_comparative("fat"), "fatter");
    assert_eq!(double_superlative("fat"), "fattest");
  }

  // ─── Plural analysis ──────────────────────────────────────────────────

  #[test]
  fn plural_candidates_cover_the_regular_strips() {
    assert!(plural_base_candidates("flies").contains(&"fly".to_string()));
    assert!(plural_base_candidates("boxes").contains(&"box".to_string()));
    assert!(plural_base_candidates("dogs").contains(&"dog".to_string()));
  }

  #[test]
  fn plural_candidates_cover_the_greco_latin_reversals() {
    assert!(plural_base_candidates("foci").contains(&"focus".to_string()));
    assert!(plural_base_candidates("traumata").contains(&"trauma".to_string()));
    assert!(plural_base_candidates("larvae").contains(&"larva".to_string()));
    assert!(plural_base_candidates("data").contains(&"datum".to_string()));
    assert!(plural_base_candidates("criteria").contains(&"criterion".to_string()));
    assert!(plural_base_candidates("analyses").contains(&"analysis".to_string()));
    assert!(plural_base_candidates("foramina").contains(&"foramen".to_string()));
    assert!(plural_base_candidates("indices").contains(&"index".to_string()));
    assert!(plural_base_candidates("matrices").contains(&"matrix".to_string()));
  }

  #[test]
  fn plural_candidates_ignore_unstrippable_surfaces() {
    assert!(plural_base_candidates("dog").is_empty());
  }

  #[test]
  fn candidates_never_include_the_empty_string() {
    assert!(!plural_base_candidates("s").contains(&String::new()));
    assert!(!past_base_candidates("ed").contains(&String::new()));
  }

  // ─── Verb analysis ────────────────────────────────────────────────────

  #[test]
  fn present3s_candidates_mirror_generation() {
    assert!(present3s_base_candidates("eats").contains(&"eat".to_string()));
    assert!(present3s_base_candidates("watches").contains(&"watch".to_string()));
    assert!(present3s_base_candidates("flies").contains(&"fly".to_string()));
  }

  #[test]
  fn past_candidates_mirror_generation() {
    assert!(past_base_candidates("walked").contains(&"walk".to_string()));
    assert!(past_base_candidates("chased").contains(&"chase".to_string()));
    assert!(past_base_candidates("dried").contains(&"dry".to_string()));
    assert!(past_base_candidates("tugged").contains(&"tug".to_string()));
  }

  #[test]
  fn participle_candidates_mirror_generation() {
    assert!(present_participle_base_candidates("eating").contains(&"eat".to_string()));
    assert!(present_participle_base_candidates("chasing").contains(&"chase".to_string()));
    assert!(present_participle_base_candidates("tying").contains(&"tie".to_string()));
    assert!(present_participle_base_candidates("tugging").contains(&"tug".to_string()));
  }

  // ─── Comparison analysis ──────────────────────────────────────────────

  #[test]
  fn comparative_candidates_mirror_generation() {
    assert!(comparative_base_candidates("clearer").contains(&"clear".to_string()));
    assert!(comparative_base_candidates("finer").contains(&"fine".to_string()));
    assert!(comparative_base_candidates("brainier").contains(&"brainy".to_string()));
    assert!(comparative_base_candidates("fatter").contains(&"fat".to_string()));
  }

  #[test]
  fn superlative_candidates_mirror_generation() {
    assert!(superlative_base_candidates("clearest").contains(&"clear".to_string()));
    assert!(superlative_base_candidates("finest").contains(&"fine".to_string()));
    assert!(superlative_base_candidates("brainiest").contains(&"brainy".to_string()));
    assert!(superlative_base_candidates("fattest").contains(&"fat".to_string()));
  }

  // ─── Helper edges ─────────────────────────────────────────────────────

  #[test]
  fn consonant_y_requires_a_preceding_consonant() {
    assert!(ends_with_consonant_y("dry"));
    assert!(!ends_with_consonant_y("play"));
    assert!(!ends_with_consonant_y("y"));
    assert!(!ends_with_consonant_y(""));
  }

  #[test]
  fn undouble_only_strips_doubled_consonants() {
    assert_eq!(undouble("tugg"), Some("tug".to_string()));
    assert_eq!(undouble("tug"), None);
    // Doubled vowels stay ("see" based stems)
    assert_eq!(undouble("see"), None);
    assert_eq!(undouble("t"), None);
  }
}
