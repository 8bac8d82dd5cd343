//! Simple suffix-stripping stemmer.
//!
//! A cheap alternative to Porter: one plural rule, then at most one common
//! suffix, with no phonetic conditions beyond a minimum remaining length.

use super::Stemmer;

/// Suffixes tried after the plural rule, in priority order.
const DEFAULT_SUFFIXES: &[&str] = &["ing", "ed", "er", "est", "ly", "ion", "tion", "ness"];

/// Simple stemmer that strips plurals and one common suffix.
///
/// Plurals: `ies -> y`, then `es` or `s` for words longer than three chars.
/// Suffixes are tried in list order and the first one whose removal leaves
/// more than two characters is stripped.
#[derive(Debug, Clone)]
pub struct SimpleStemmer {
    suffixes: Vec<String>,
}

impl SimpleStemmer {
    /// Create a new simple stemmer with the default suffix list.
    pub fn new() -> Self {
        Self::with_suffixes(DEFAULT_SUFFIXES.iter().map(|s| s.to_string()).collect())
    }

    /// Create a simple stemmer with custom suffixes, tried in order.
    pub fn with_suffixes(suffixes: Vec<String>) -> Self {
        SimpleStemmer { suffixes }
    }

    fn strip_plural(word: &str) -> String {
        let len = word.chars().count();
        if let Some(stem) = word.strip_suffix("ies") {
            format!("{stem}y")
        } else if let Some(stem) = word.strip_suffix("es").filter(|_| len > 3) {
            stem.to_string()
        } else if let Some(stem) = word.strip_suffix('s').filter(|_| len > 3) {
            stem.to_string()
        } else {
            word.to_string()
        }
    }
}

impl Default for SimpleStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Stemmer for SimpleStemmer {
    fn stem(&self, word: &str) -> String {
        let word = Self::strip_plural(&word.to_lowercase());
        let len = word.chars().count();

        for suffix in &self.suffixes {
            if len > suffix.chars().count() + 2
                && let Some(stem) = word.strip_suffix(suffix.as_str())
            {
                return stem.to_string();
            }
        }

        word
    }

    fn name(&self) -> &'static str {
        "simple"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_stemmer() {
        let stemmer = SimpleStemmer::new();

        assert_eq!(stemmer.stem("running"), "runn");
        assert_eq!(stemmer.stem("flies"), "fly");
        assert_eq!(stemmer.stem("churches"), "church");
        assert_eq!(stemmer.stem("agreed"), "agre");
        assert_eq!(stemmer.stem("stations"), "stat");
        assert_eq!(stemmer.stem("quickly"), "quick");
    }

    #[test]
    fn test_short_words_are_kept() {
        let stemmer = SimpleStemmer::new();

        assert_eq!(stemmer.stem("was"), "was");
        assert_eq!(stemmer.stem("bed"), "bed");
        assert_eq!(stemmer.stem("sing"), "sing");
        assert_eq!(stemmer.stem("Fly"), "fly");
    }

    #[test]
    fn test_only_one_suffix_is_removed() {
        let stemmer = SimpleStemmer::new();

        // Stripping stops after the first suffix, so "sing" keeps its "ing".
        assert_eq!(stemmer.stem("singers"), "sing");
        assert_eq!(stemmer.stem("kindly"), "kind");
    }

    #[test]
    fn test_custom_suffixes() {
        let stemmer = SimpleStemmer::with_suffixes(vec!["ful".to_string()]);
        assert_eq!(stemmer.stem("hopeful"), "hope");
        assert_eq!(stemmer.stem("hoping"), "hoping");
    }
}
