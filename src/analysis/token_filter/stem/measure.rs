//! Phonetic predicates used to gate the Porter rules.
//!
//! A word is viewed as `[C](VC)^m[V]`, where `C` is a run of consonants and
//! `V` a run of vowels. The letters `a e i o u` are vowels; `y` is a vowel
//! only when it follows a consonant; everything else, including digits and
//! non-ASCII characters, is a consonant.
//!
//! The `y` rule is recursive in its textbook form. Here it is resolved by a
//! single left-to-right scan that carries the previous classification, so a
//! word made only of `y`s costs the same as any other word.
//!
//! Every predicate is stateless and recomputed on the word it is given.

/// Classify every character of `word`, `true` meaning consonant.
pub fn consonant_mask(word: &str) -> Vec<bool> {
    let mut mask: Vec<bool> = Vec::with_capacity(word.len());
    for c in word.chars() {
        let consonant = match c {
            'a' | 'e' | 'i' | 'o' | 'u' => false,
            'y' => mask.last().is_none_or(|&previous| !previous),
            _ => true,
        };
        mask.push(consonant);
    }
    mask
}

/// Whether the character at char index `i` is a consonant.
///
/// # Panics
///
/// Panics if `i` is not a valid char index of `word`.
pub fn is_consonant(word: &str, i: usize) -> bool {
    let len = word.chars().count();
    assert!(i < len, "char index {i} out of range for word of length {len}");

    let prefix_end = word.char_indices().nth(i + 1).map_or(word.len(), |(b, _)| b);
    consonant_mask(&word[..prefix_end])[i]
}

/// The Porter measure `m`: the number of vowel-run to consonant-run transitions.
///
/// ```
/// use lexica::analysis::token_filter::stem::measure::measure;
///
/// assert_eq!(measure("tree"), 0);
/// assert_eq!(measure("trouble"), 1);
/// assert_eq!(measure("troubles"), 2);
/// ```
pub fn measure(word: &str) -> usize {
    consonant_mask(word)
        .windows(2)
        .filter(|pair| !pair[0] && pair[1])
        .count()
}

/// Whether `word` contains at least one vowel.
pub fn contains_vowel(word: &str) -> bool {
    consonant_mask(word).iter().any(|&consonant| !consonant)
}

/// Whether `word` ends with two identical consonants.
pub fn ends_with_double_consonant(word: &str) -> bool {
    let mut chars = word.chars().rev();
    match (chars.next(), chars.next()) {
        (Some(last), Some(before)) if last == before => {
            consonant_mask(word).last().copied().unwrap_or(false)
        }
        _ => false,
    }
}

/// Whether `word` ends consonant-vowel-consonant with a final letter other
/// than `w`, `x` or `y`.
pub fn ends_cvc(word: &str) -> bool {
    let mask = consonant_mask(word);
    let n = mask.len();
    if n < 3 {
        return false;
    }

    mask[n - 3]
        && !mask[n - 2]
        && mask[n - 1]
        && !matches!(word.chars().last(), Some('w' | 'x' | 'y'))
}
