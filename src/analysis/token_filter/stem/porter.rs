//! Porter stemming algorithm implementation.
//!
//! The stemmer reduces an English word to its stem by running eight ordered
//! rewrite steps (Porter's 1a, 1b, 1c, 2, 3, 4, 5a and 5b). Each step is a
//! pure function from the current word to the next one, and every phonetic
//! gate (measure, vowel presence, double consonant, CVC) is evaluated on the
//! word as it stands when that step runs.
//!
//! Within a step the longest matching suffix is selected first and its
//! condition is then tested once; a failing condition leaves the word
//! unchanged for that step rather than falling back to a shorter suffix.
//!
//! Input is expected to be lowercase ASCII letters. Any other character is
//! classified as a consonant, which keeps the function total and
//! deterministic but does not give linguistically meaningful stems.
//!
//! # Examples
//!
//! ```
//! use lexica::analysis::token_filter::stem::Stemmer;
//! use lexica::analysis::token_filter::stem::porter::PorterStemmer;
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("caresses"), "caress");
//! assert_eq!(stemmer.stem("ponies"), "poni");
//! assert_eq!(stemmer.stem("motoring"), "motor");
//! ```

use log::trace;

use super::Stemmer;
use super::measure::{contains_vowel, ends_cvc, ends_with_double_consonant, measure};

/// A single rewrite step.
pub type Step = fn(&str) -> String;

/// The rewrite steps in the order they are applied.
pub const STEPS: [(&str, Step); 8] = [
    ("1a", step1a),
    ("1b", step1b),
    ("1c", step1c),
    ("2", step2),
    ("3", step3),
    ("4", step4),
    ("5a", step5a),
    ("5b", step5b),
];

/// Derivational suffixes rewritten when the remaining stem has `m > 0`.
const STEP2_RULES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("abli", "able"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
];

/// Suffixes rewritten when the remaining stem has `m > 0`.
const STEP3_RULES: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

/// Residual suffixes removed when the remaining stem has `m > 1`.
const STEP4_SUFFIXES: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion", "ou",
    "ism", "ate", "iti", "ous", "ive", "ize",
];

/// Porter stemming algorithm implementation.
///
/// Stateless; one value can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }

    /// Stem `word`, recording the word after every step that changed it.
    pub fn trace(&self, word: &str) -> Vec<(&'static str, String)> {
        let mut current = word.to_lowercase();
        let mut changes = Vec::new();
        if current.chars().count() <= 2 {
            return changes;
        }
        for (name, step) in STEPS {
            let next = step(&current);
            if next != current {
                changes.push((name, next.clone()));
                current = next;
            }
        }
        changes
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        let word = word.to_lowercase();
        if word.chars().count() <= 2 {
            return word;
        }

        STEPS.iter().fold(word, |current, (name, step)| {
            let next = step(&current);
            if next != current {
                trace!("porter step {name}: {current} -> {next}");
            }
            next
        })
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}

/// Remove the last character, respecting char boundaries.
fn drop_last(word: &str) -> &str {
    word.char_indices().last().map_or(word, |(i, _)| &word[..i])
}

/// The longest of `suffixes` that `word` ends with.
fn longest_suffix<'a>(word: &str, suffixes: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    suffixes
        .into_iter()
        .filter(|suffix| word.ends_with(*suffix))
        .max_by_key(|suffix| suffix.len())
}

/// Apply the longest matching `(suffix, replacement)` rule if the stem left
/// after removing the suffix has a measure above `min_measure`.
fn replace_longest(word: &str, rules: &[(&str, &str)], min_measure: usize) -> String {
    let Some(suffix) = longest_suffix(word, rules.iter().map(|(suffix, _)| *suffix)) else {
        return word.to_string();
    };
    let replacement = rules
        .iter()
        .find(|(candidate, _)| *candidate == suffix)
        .map_or("", |(_, replacement)| *replacement);

    let stem = &word[..word.len() - suffix.len()];
    if measure(stem) > min_measure {
        format!("{stem}{replacement}")
    } else {
        word.to_string()
    }
}

/// Step 1a: plurals. `sses -> ss`, `ies -> i`, `ss -> ss`, `s -> `.
pub fn step1a(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("sses") {
        format!("{stem}ss")
    } else if let Some(stem) = word.strip_suffix("ies") {
        format!("{stem}i")
    } else if word.ends_with("ss") {
        word.to_string()
    } else if let Some(stem) = word.strip_suffix('s') {
        stem.to_string()
    } else {
        word.to_string()
    }
}

/// Step 1b: past tense and present participle.
///
/// `eed -> ee` when `m > 0`; otherwise `ed` and `ing` are removed when the
/// remainder contains a vowel, followed by the cleanup in [`step1b_cleanup`].
/// A word ending in `eed` never falls through to the `ed` rule.
pub fn step1b(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("eed") {
        return if measure(stem) > 0 {
            format!("{stem}ee")
        } else {
            word.to_string()
        };
    }

    for suffix in ["ed", "ing"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            return if contains_vowel(stem) {
                step1b_cleanup(stem)
            } else {
                word.to_string()
            };
        }
    }

    word.to_string()
}

/// Repair a stem after `ed`/`ing` removal: restore a silent `e`
/// (`at`, `bl`, `iz`, or a short CVC stem) or undouble a final consonant
/// other than `l`, `s`, `z`.
fn step1b_cleanup(stem: &str) -> String {
    if stem.ends_with("at") || stem.ends_with("bl") || stem.ends_with("iz") {
        format!("{stem}e")
    } else if ends_with_double_consonant(stem)
        && !(stem.ends_with('l') || stem.ends_with('s') || stem.ends_with('z'))
    {
        drop_last(stem).to_string()
    } else if measure(stem) == 1 && ends_cvc(stem) {
        format!("{stem}e")
    } else {
        stem.to_string()
    }
}

/// Step 1c: `y -> i` when the stem before the `y` contains a vowel.
pub fn step1c(word: &str) -> String {
    match word.strip_suffix('y') {
        Some(stem) if contains_vowel(stem) => format!("{stem}i"),
        _ => word.to_string(),
    }
}

/// Step 2: map double suffixes to single ones (`ational -> ate`, ...).
pub fn step2(word: &str) -> String {
    replace_longest(word, STEP2_RULES, 0)
}

/// Step 3: `icate -> ic`, `ative -> `, `ness -> `, ...
pub fn step3(word: &str) -> String {
    replace_longest(word, STEP3_RULES, 0)
}

/// Step 4: strip residual suffixes when `m > 1`.
///
/// `ion` is only removed when the stem ends in `s` or `t`.
pub fn step4(word: &str) -> String {
    let Some(suffix) = longest_suffix(word, STEP4_SUFFIXES.iter().copied()) else {
        return word.to_string();
    };

    let stem = &word[..word.len() - suffix.len()];
    let ion_ok = suffix != "ion" || stem.ends_with('s') || stem.ends_with('t');
    if ion_ok && measure(stem) > 1 {
        stem.to_string()
    } else {
        word.to_string()
    }
}

/// Step 5a: drop a final `e` when `m > 1`, or when `m == 1` and the stem
/// does not end CVC.
pub fn step5a(word: &str) -> String {
    match word.strip_suffix('e') {
        Some(stem) => {
            let m = measure(stem);
            if m > 1 || (m == 1 && !ends_cvc(stem)) {
                stem.to_string()
            } else {
                word.to_string()
            }
        }
        None => word.to_string(),
    }
}

/// Step 5b: `ll -> l` when `m > 1`.
pub fn step5b(word: &str) -> String {
    if word.ends_with("ll") && ends_with_double_consonant(word) && measure(word) > 1 {
        drop_last(word).to_string()
    } else {
        word.to_string()
    }
}
