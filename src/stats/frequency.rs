//! Term frequency table.
//!
//! Built in one pass over a token stream. Keys are unique and every count is
//! at least 1, so the counts sum to the number of tokens consumed.

use std::collections::BTreeMap;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// A term and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermCount {
    pub term: String,
    pub count: u64,
}

impl TermCount {
    pub fn new<S: Into<String>>(term: S, count: u64) -> Self {
        TermCount {
            term: term.into(),
            count,
        }
    }
}

/// Mapping from term to occurrence count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: AHashMap<String, u64>,
    total: u64,
}

impl FrequencyTable {
    /// Count every token of `tokens`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexica::stats::FrequencyTable;
    ///
    /// let table = FrequencyTable::build(["lord", "god", "lord"]);
    /// assert_eq!(table.get("lord"), 2);
    /// assert_eq!(table.total_tokens(), 3);
    /// assert_eq!(table.unique_terms(), 2);
    /// ```
    pub fn build<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = FrequencyTable::default();
        for token in tokens {
            table.add(token.as_ref());
        }
        table
    }

    fn add(&mut self, term: &str) {
        match self.counts.get_mut(term) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(term.to_string(), 1);
            }
        }
        self.total += 1;
    }

    /// Occurrences of `term`, 0 if it never occurred.
    pub fn get(&self, term: &str) -> u64 {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Number of tokens counted.
    pub fn total_tokens(&self) -> u64 {
        self.total
    }

    /// Number of distinct terms.
    pub fn unique_terms(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Distinct terms per token, 0 for an empty table.
    pub fn vocabulary_ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.counts.len() as f64 / self.total as f64
        }
    }

    /// Iterate over `(term, count)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(term, &count)| (term.as_str(), count))
    }

    /// All counts, highest first.
    pub fn frequencies(&self) -> Vec<u64> {
        let mut frequencies: Vec<u64> = self.counts.values().copied().collect();
        frequencies.sort_unstable_by(|a, b| b.cmp(a));
        frequencies
    }

    /// All terms ordered by count descending, ties broken by term ascending.
    pub fn ranked(&self) -> Vec<TermCount> {
        let mut ranked: Vec<TermCount> = self
            .counts
            .iter()
            .map(|(term, &count)| TermCount::new(term.as_str(), count))
            .collect();
        ranked.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.term.cmp(&b.term)));
        ranked
    }

    /// The `n` most frequent terms in [`ranked`](Self::ranked) order.
    pub fn top(&self, n: usize) -> Vec<TermCount> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }

    /// Frequency spectrum: for each count, how many terms have it.
    pub fn spectrum(&self) -> BTreeMap<u64, usize> {
        let mut spectrum = BTreeMap::new();
        for &count in self.counts.values() {
            *spectrum.entry(count).or_insert(0) += 1;
        }
        spectrum
    }

    /// Counts for the given terms, in the order asked, 0 for absent ones.
    pub fn counts_for<I, S>(&self, terms: I) -> Vec<TermCount>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        terms
            .into_iter()
            .map(|term| {
                let term = term.as_ref();
                TermCount::new(term, self.get(term))
            })
            .collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        FrequencyTable::build(iter)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    #[test]
    fn test_counts_sum_to_token_count() {
        let mut rng = StdRng::seed_from_u64(7);
        let words = ["lord", "god", "israel", "king", "son", "people"];

        for len in [0usize, 1, 10, 1000] {
            let tokens: Vec<&str> = (0..len)
                .map(|_| words[rng.random_range(0..words.len())])
                .collect();
            let table = FrequencyTable::build(&tokens);

            assert_eq!(table.iter().map(|(_, c)| c).sum::<u64>(), len as u64);
            assert_eq!(table.total_tokens(), len as u64);
            assert!(table.iter().all(|(_, c)| c >= 1));
        }
    }

    #[test]
    fn test_ranked_breaks_ties_by_term() {
        let table: FrequencyTable = ["b", "a", "c", "c", "b", "a", "d"].into_iter().collect();

        let ranked = table.ranked();
        let terms: Vec<&str> = ranked.iter().map(|t| t.term.as_str()).collect();
        assert_eq!(terms, vec!["a", "b", "c", "d"]);
        assert_eq!(table.frequencies(), vec![2, 2, 2, 1]);
        assert_eq!(table.top(2), vec![TermCount::new("a", 2), TermCount::new("b", 2)]);
    }

    #[test]
    fn test_spectrum() {
        let table = FrequencyTable::build(["x", "x", "x", "y", "z", "w", "w"]);
        let spectrum = table.spectrum();

        assert_eq!(spectrum.get(&1), Some(&2));
        assert_eq!(spectrum.get(&2), Some(&1));
        assert_eq!(spectrum.get(&3), Some(&1));
        assert_eq!(spectrum.len(), 3);
    }

    #[test]
    fn test_counts_for_and_ratio() {
        let table = FrequencyTable::build(["god", "lord", "god", "moses"]);

        assert_eq!(
            table.counts_for(["god", "jesus"]),
            vec![TermCount::new("god", 2), TermCount::new("jesus", 0)]
        );
        assert!((table.vocabulary_ratio() - 0.75).abs() < 1e-12);
        assert_eq!(FrequencyTable::default().vocabulary_ratio(), 0.0);
        assert!(FrequencyTable::default().is_empty());
    }
}
