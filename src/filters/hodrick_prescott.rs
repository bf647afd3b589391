//! Hodrick-Prescott trend/cycle decomposition

use crate::error::Result;
use crate::filters::Decomposition;
use crate::validate::ensure_smoothing;

/// Hodrick-Prescott filter.
///
/// Separates a series into a smooth trend and a residual cycle by solving
/// the two-sided penalized least-squares problem
///
/// ```text
/// min_tau  sum_t (y_t - tau_t)^2
///        + lambda * sum_t ((tau_{t+1} - tau_t) - (tau_t - tau_{t-1}))^2
/// ```
///
/// The first-order conditions give the linear system `(I + lambda * D'D) tau = y`
/// with `D` the second-difference operator. The matrix is symmetric positive
/// definite with bandwidth two, so the exact solution comes from a banded
/// LDL' factorization in O(n).
#[derive(Debug, Clone)]
pub struct HodrickPrescott {
    /// Smoothing parameter; larger values give a smoother trend
    lambda: f64,
}

impl HodrickPrescott {
    /// Create a new Hodrick-Prescott filter.
    ///
    /// `lambda` must be a positive finite real. The conventional value for
    /// quarterly macroeconomic data is 1600.
    pub fn new(lambda: f64) -> Result<Self> {
        ensure_smoothing(lambda)?;
        Ok(Self { lambda })
    }

    /// Get the smoothing parameter
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Decompose a series into trend and cycle components.
    ///
    /// Both outputs have the input length and sum back to the input at
    /// every index. Series shorter than 3 observations carry no curvature
    /// information and degenerate to `trend = y`, `cycle = 0`.
    pub fn decompose(&self, series: &[f64]) -> Decomposition {
        let trend = self.trend(series);
        let cycle = series
            .iter()
            .zip(trend.iter())
            .map(|(y, t)| y - t)
            .collect();

        Decomposition { trend, cycle }
    }

    /// Solve `(I + lambda * D'D) tau = y` for the trend component
    fn trend(&self, series: &[f64]) -> Vec<f64> {
        let n = series.len();
        if n < 3 {
            return series.to_vec();
        }

        // Assemble the three upper bands of I + lambda * D'D, where each row
        // r of D carries the stencil [1, -2, 1] at columns r..r+2.
        let mut diag = vec![0.0; n];
        let mut upper1 = vec![0.0; n - 1];
        let mut upper2 = vec![0.0; n - 2];
        let stencil = [1.0, -2.0, 1.0];
        for r in 0..n - 2 {
            for a in 0..3 {
                for b in a..3 {
                    let weight = self.lambda * stencil[a] * stencil[b];
                    match b - a {
                        0 => diag[r + a] += weight,
                        1 => upper1[r + a] += weight,
                        _ => upper2[r + a] += weight,
                    }
                }
            }
        }
        for value in diag.iter_mut() {
            *value += 1.0;
        }

        // LDL' factorization restricted to the two sub-diagonals.
        // l1[i] = L[i][i-1], l2[i] = L[i][i-2], d[i] = D[i][i].
        let mut d = vec![0.0; n];
        let mut l1 = vec![0.0; n];
        let mut l2 = vec![0.0; n];
        for i in 0..n {
            if i >= 2 {
                l2[i] = upper2[i - 2] / d[i - 2];
            }
            if i >= 1 {
                let mut value = upper1[i - 1];
                if i >= 2 {
                    value -= l2[i] * d[i - 2] * l1[i - 1];
                }
                l1[i] = value / d[i - 1];
            }
            let mut value = diag[i];
            if i >= 1 {
                value -= l1[i] * l1[i] * d[i - 1];
            }
            if i >= 2 {
                value -= l2[i] * l2[i] * d[i - 2];
            }
            d[i] = value;
        }

        // Forward substitution L z = y
        let mut z = vec![0.0; n];
        for i in 0..n {
            let mut value = series[i];
            if i >= 1 {
                value -= l1[i] * z[i - 1];
            }
            if i >= 2 {
                value -= l2[i] * z[i - 2];
            }
            z[i] = value;
        }

        // Diagonal scaling and back substitution L' tau = D^{-1} z
        let mut trend = vec![0.0; n];
        for i in (0..n).rev() {
            let mut value = z[i] / d[i];
            if i + 1 < n {
                value -= l1[i + 1] * trend[i + 1];
            }
            if i + 2 < n {
                value -= l2[i + 2] * trend[i + 2];
            }
            trend[i] = value;
        }

        trend
    }
}
