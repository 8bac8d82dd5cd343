//! Heap's law: vocabulary growth.
//!
//! A token stream is scanned once while the set of distinct terms grows.
//! Every `interval` tokens the pair `(N, V)` is recorded, plus the final
//! point, and
//!
//! ```text
//! ln(V) = ln(k) + b · ln(N)
//! ```
//!
//! is fitted by least squares.

use ahash::AHashSet;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{LexicaError, Result};
use crate::stats::regression::fit_line;

/// Tokens seen and distinct terms seen at one point of the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthPoint {
    pub tokens: u64,
    pub vocabulary: u64,
}

/// Streaming vocabulary-size sampler.
///
/// # Examples
///
/// ```
/// use lexica::stats::heaps::VocabularyGrowth;
///
/// let mut growth = VocabularyGrowth::new(2).unwrap();
/// for term in ["a", "b", "a", "c", "a"] {
///     growth.observe(term);
/// }
/// let points = growth.finish();
///
/// assert_eq!(points.len(), 3);
/// assert_eq!((points[1].tokens, points[1].vocabulary), (4, 3));
/// assert_eq!((points[2].tokens, points[2].vocabulary), (5, 3));
/// ```
#[derive(Debug, Clone)]
pub struct VocabularyGrowth {
    seen: AHashSet<String>,
    tokens: u64,
    interval: u64,
    samples: Vec<GrowthPoint>,
}

impl VocabularyGrowth {
    /// Create a sampler that records a point every `interval` tokens.
    pub fn new(interval: usize) -> Result<Self> {
        if interval == 0 {
            return Err(LexicaError::stats("sample interval must be greater than 0"));
        }
        Ok(VocabularyGrowth {
            seen: AHashSet::new(),
            tokens: 0,
            interval: interval as u64,
            samples: Vec::new(),
        })
    }

    /// Feed the next token of the stream.
    pub fn observe(&mut self, term: &str) {
        if !self.seen.contains(term) {
            self.seen.insert(term.to_string());
        }
        self.tokens += 1;
        if self.tokens % self.interval == 0 {
            self.samples.push(self.current());
        }
    }

    /// The current `(N, V)` point.
    pub fn current(&self) -> GrowthPoint {
        GrowthPoint {
            tokens: self.tokens,
            vocabulary: self.seen.len() as u64,
        }
    }

    /// Stop scanning and return the samples, including the final point.
    pub fn finish(mut self) -> Vec<GrowthPoint> {
        let last = self.current();
        if last.tokens > 0 && self.samples.last() != Some(&last) {
            self.samples.push(last);
        }
        self.samples
    }
}

/// Fitted Heap parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeapsFit {
    pub k: f64,
    /// Growth exponent, expected between 0 and 1.
    pub b: f64,
    pub r_squared: f64,
    pub samples: Vec<GrowthPoint>,
}

impl HeapsFit {
    /// Vocabulary size the fitted curve predicts after `tokens` tokens.
    pub fn predict(&self, tokens: u64) -> f64 {
        self.k * (tokens as f64).powf(self.b)
    }
}

/// Fit Heap's law to growth samples.
///
/// # Errors
///
/// Returns [`LexicaError::Stats`] for fewer than two samples or a sample
/// with zero tokens or zero vocabulary.
pub fn fit_heaps(samples: Vec<GrowthPoint>) -> Result<HeapsFit> {
    if samples.len() < 2 {
        return Err(LexicaError::stats(format!(
            "Heap's law needs at least 2 growth samples, got {}",
            samples.len()
        )));
    }
    if samples.iter().any(|p| p.tokens == 0 || p.vocabulary == 0) {
        return Err(LexicaError::stats("zero value in growth samples"));
    }

    let (x, y): (Vec<f64>, Vec<f64>) = samples
        .iter()
        .map(|p| ((p.tokens as f64).ln(), (p.vocabulary as f64).ln()))
        .unzip();
    let line = fit_line(&x, &y)?;

    Ok(HeapsFit {
        k: line.intercept.exp(),
        b: line.slope,
        r_squared: line.r_squared,
        samples,
    })
}

/// Sample vocabulary growth over `tokens` and fit Heap's law.
pub fn analyze_heaps<I, S>(tokens: I, interval: usize) -> Result<HeapsFit>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut growth = VocabularyGrowth::new(interval)?;
    for token in tokens {
        growth.observe(token.as_ref());
    }
    let fit = fit_heaps(growth.finish())?;
    debug!(
        "heaps fit over {} samples: k={:.3}, b={:.4}, r2={:.4}",
        fit.samples.len(),
        fit.k,
        fit.b,
        fit.r_squared
    );
    Ok(fit)
}
