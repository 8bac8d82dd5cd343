//! Benford's law: leading-digit distribution of term frequencies.
//!
//! The expected share of leading digit `d` is `log10(1 + 1/d)`. Two tables
//! are built from one frequency list: every value, and only the values at
//! or above a threshold (small counts are dominated by 1s and 2s).

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{LexicaError, Result};

/// Leading decimal digit of `value`, `None` for zero.
///
/// # Examples
///
/// ```
/// use lexica::stats::benford::leading_digit;
///
/// assert_eq!(leading_digit(36), Some(3));
/// assert_eq!(leading_digit(7), Some(7));
/// assert_eq!(leading_digit(0), None);
/// ```
pub fn leading_digit(mut value: u64) -> Option<u8> {
    if value == 0 {
        return None;
    }
    while value >= 10 {
        value /= 10;
    }
    Some(value as u8)
}

/// Expected Benford proportion of leading digit `digit` (1 to 9).
pub fn expected_proportion(digit: u8) -> f64 {
    (1.0 + 1.0 / digit as f64).log10()
}

/// Expected proportions of digits 1 to 9.
pub fn expected_distribution() -> [f64; 9] {
    std::array::from_fn(|i| expected_proportion(i as u8 + 1))
}

/// Observed leading-digit counts; index 0 holds digit 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitCounts {
    pub counts: [u64; 9],
    pub total: u64,
}

impl DigitCounts {
    /// Tabulate the leading digits of `values`, skipping zeros.
    pub fn from_values<I: IntoIterator<Item = u64>>(values: I) -> Self {
        let mut table = DigitCounts::default();
        for digit in values.into_iter().filter_map(leading_digit) {
            table.counts[digit as usize - 1] += 1;
            table.total += 1;
        }
        table
    }

    /// Count of leading digit `digit` (1 to 9).
    pub fn count(&self, digit: u8) -> u64 {
        self.counts[digit as usize - 1]
    }

    /// Observed proportions; all zero for an empty table.
    pub fn proportions(&self) -> [f64; 9] {
        if self.total == 0 {
            return [0.0; 9];
        }
        self.counts.map(|c| c as f64 / self.total as f64)
    }

    /// Largest absolute gap between observed and expected proportions.
    pub fn max_deviation(&self) -> f64 {
        self.proportions()
            .iter()
            .zip(expected_distribution())
            .map(|(observed, expected)| (observed - expected).abs())
            .fold(0.0, f64::max)
    }
}

/// Observed distributions for all values and for the filtered subset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenfordAnalysis {
    pub all: DigitCounts,
    /// Values `>= threshold` only.
    pub filtered: DigitCounts,
    pub threshold: u64,
    pub expected: [f64; 9],
}

/// Tabulate leading digits of `frequencies`.
///
/// # Errors
///
/// Returns [`LexicaError::Stats`] if no frequency is positive.
pub fn analyze_benford(frequencies: &[u64], threshold: u64) -> Result<BenfordAnalysis> {
    let all = DigitCounts::from_values(frequencies.iter().copied());
    if all.total == 0 {
        return Err(LexicaError::stats(
            "Benford analysis needs at least one positive frequency",
        ));
    }
    let filtered = DigitCounts::from_values(frequencies.iter().copied().filter(|&f| f >= threshold));

    debug!(
        "benford: {} values, {} at or above {threshold}, max deviation {:.4}",
        all.total,
        filtered.total,
        all.max_deviation()
    );

    Ok(BenfordAnalysis {
        all,
        filtered,
        threshold,
        expected: expected_distribution(),
    })
}
