//! Ordinary least-squares line fitting.
//!
//! The law analyzers transform their samples into log space and fit a
//! straight line through them:
//!
//! ```text
//! slope     = Σ (x_i - x̄)(y_i - ȳ) / Σ (x_i - x̄)²
//! intercept = ȳ - slope · x̄
//! R²        = 1 - SS_res / SS_tot
//! ```
//!
//! # Examples
//!
//! ```
//! use lexica::stats::regression::fit_line;
//!
//! let fit = fit_line(&[1.0, 2.0, 3.0], &[3.0, 5.0, 7.0]).unwrap();
//! assert!((fit.slope - 2.0).abs() < 1e-12);
//! assert!((fit.intercept - 1.0).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{LexicaError, Result};

/// A fitted line `y = slope · x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination of the fit.
    pub r_squared: f64,
}

impl LinearFit {
    /// Evaluate the line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fit `y` against `x` by ordinary least squares.
///
/// # Errors
///
/// Returns [`LexicaError::Stats`] if the slices differ in length, hold fewer
/// than two points, contain a non-finite value, or if every `x` is the same.
pub fn fit_line(x: &[f64], y: &[f64]) -> Result<LinearFit> {
    let n = x.len();
    if n != y.len() {
        return Err(LexicaError::stats(format!(
            "length mismatch: {n} x values, {} y values",
            y.len()
        )));
    }
    if n < 2 {
        return Err(LexicaError::stats(format!(
            "at least 2 points are needed for a fit, got {n}"
        )));
    }
    if x.iter().chain(y).any(|v| !v.is_finite()) {
        return Err(LexicaError::stats("non-finite value in fit input"));
    }

    let n_f = n as f64;
    let mean_x = x.iter().sum::<f64>() / n_f;
    let mean_y = y.iter().sum::<f64>() / n_f;

    let (mut sxx, mut sxy, mut syy) = (0.0, 0.0, 0.0);
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        sxx += dx * dx;
        sxy += dx * dy;
        syy += dy * dy;
    }

    if sxx == 0.0 {
        return Err(LexicaError::stats("x values have zero variance"));
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;

    // A flat y series is fitted exactly by the horizontal line.
    let r_squared = if syy == 0.0 {
        1.0
    } else {
        let ss_res: f64 = x
            .iter()
            .zip(y)
            .map(|(&xi, &yi)| {
                let r = yi - (slope * xi + intercept);
                r * r
            })
            .sum();
        1.0 - ss_res / syy
    };

    Ok(LinearFit {
        slope,
        intercept,
        r_squared,
    })
}
