//! Zipf's law: rank-frequency fit.
//!
//! Frequencies are sorted in descending order and ranked from 1. The line
//!
//! ```text
//! log10(f) = log10(k) - α · log10(r)
//! ```
//!
//! is fitted by least squares over every rank.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{LexicaError, Result};
use crate::stats::regression::fit_line;

/// Fitted Zipf parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZipfFit {
    /// Exponent α.
    pub alpha: f64,
    /// Constant k, the predicted frequency at rank 1.
    pub k: f64,
    pub r_squared: f64,
    /// `(rank, frequency)` pairs the fit was computed from.
    #[serde(skip)]
    pub samples: Vec<(usize, u64)>,
}

/// Observed and predicted frequency at one rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZipfCheckpoint {
    pub rank: usize,
    pub observed: u64,
    /// Ideal Zipf prediction `f1 / rank`.
    pub predicted: f64,
    /// `observed / predicted`.
    pub ratio: f64,
}

impl ZipfFit {
    /// Frequency the fitted curve predicts at `rank`.
    pub fn predict(&self, rank: usize) -> f64 {
        self.k / (rank as f64).powf(self.alpha)
    }

    /// Compare observed frequencies at `ranks` with the ideal `f1 / r`
    /// curve. Ranks beyond the vocabulary are skipped.
    pub fn checkpoints(&self, ranks: &[usize]) -> Vec<ZipfCheckpoint> {
        let Some(&(_, f1)) = self.samples.first() else {
            return Vec::new();
        };

        ranks
            .iter()
            .filter(|&&rank| rank >= 1 && rank <= self.samples.len())
            .map(|&rank| {
                let observed = self.samples[rank - 1].1;
                let predicted = f1 as f64 / rank as f64;
                ZipfCheckpoint {
                    rank,
                    observed,
                    predicted,
                    ratio: observed as f64 / predicted,
                }
            })
            .collect()
    }
}

/// Fit Zipf's law to a list of term frequencies in any order.
///
/// # Errors
///
/// Returns [`LexicaError::Stats`] for an empty list, a list containing a
/// zero, or fewer than two ranks.
///
/// # Examples
///
/// ```
/// use lexica::stats::zipf::fit_zipf;
///
/// let fit = fit_zipf(&[60, 30, 20, 15, 12, 10]).unwrap();
/// assert!((fit.alpha - 1.0).abs() < 1e-9);
/// assert!((fit.k - 60.0).abs() < 1e-6);
/// ```
pub fn fit_zipf(frequencies: &[u64]) -> Result<ZipfFit> {
    if frequencies.is_empty() {
        return Err(LexicaError::stats("cannot fit Zipf's law to no frequencies"));
    }
    if frequencies.contains(&0) {
        return Err(LexicaError::stats("zero frequency in Zipf input"));
    }

    let mut sorted = frequencies.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    let samples: Vec<(usize, u64)> = sorted
        .into_iter()
        .enumerate()
        .map(|(i, f)| (i + 1, f))
        .collect();

    let (x, y): (Vec<f64>, Vec<f64>) = samples
        .iter()
        .map(|&(rank, f)| ((rank as f64).log10(), (f as f64).log10()))
        .unzip();
    let line = fit_line(&x, &y)?;

    let fit = ZipfFit {
        alpha: -line.slope,
        k: 10f64.powf(line.intercept),
        r_squared: line.r_squared,
        samples,
    };
    debug!(
        "zipf fit over {} ranks: alpha={:.4}, k={:.2}, r2={:.4}",
        fit.samples.len(),
        fit.alpha,
        fit.k,
        fit.r_squared
    );
    Ok(fit)
}
