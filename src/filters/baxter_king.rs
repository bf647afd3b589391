//! Baxter-King symmetric band-pass filter

use crate::error::Result;
use crate::validate::{ensure_band, ensure_positive_lag};
use std::f64::consts::PI;

/// Baxter-King band-pass filter.
///
/// Approximates an ideal band-pass over periodicities `[low, high]` with a
/// finite symmetric moving average of `2k + 1` weights. The weights are the
/// truncated ideal band-pass weights shifted by their mean so they sum to
/// zero, which removes unit roots and deterministic trends.
///
/// The moving average is only defined for interior points: the output is
/// shorter than the input by `k` observations at each end.
#[derive(Debug, Clone)]
pub struct BaxterKing {
    /// Shortest periodicity passed, in periods per cycle
    low: f64,
    /// Longest periodicity passed, in periods per cycle
    high: f64,
    /// Truncation lag; the moving average spans `2k + 1` observations
    k: usize,
}

impl BaxterKing {
    /// Create a new Baxter-King filter.
    ///
    /// Requires `low < high` and a positive truncation lag. The customary
    /// business-cycle band for quarterly data is `low = 6`, `high = 32`,
    /// `k = 12`.
    pub fn new(low: f64, high: f64, k: i64) -> Result<Self> {
        ensure_band(low, high)?;
        ensure_positive_lag(k)?;
        Ok(Self {
            low,
            high,
            k: k as usize,
        })
    }

    /// Get the truncation lag
    pub fn lag(&self) -> usize {
        self.k
    }

    /// The symmetric moving-average weights, centered at lag zero.
    ///
    /// Periodicity bounds translate to angular frequencies
    /// `omega = 2*pi / periodicity`, so the LONG periodicity bound is the
    /// LOW frequency edge of the pass band.
    pub fn weights(&self) -> Vec<f64> {
        let omega1 = 2.0 * PI / self.high;
        let omega2 = 2.0 * PI / self.low;

        let mut weights = vec![0.0; 2 * self.k + 1];
        weights[self.k] = (omega2 - omega1) / PI;
        for j in 1..=self.k {
            let lag = j as f64;
            let weight = ((omega2 * lag).sin() - (omega1 * lag).sin()) / (PI * lag);
            weights[self.k + j] = weight;
            weights[self.k - j] = weight;
        }

        // Shift so the weights sum to zero
        let mean = weights.iter().sum::<f64>() / weights.len() as f64;
        for weight in weights.iter_mut() {
            *weight -= mean;
        }

        weights
    }

    /// Apply the band-pass to a series, returning the cyclical component.
    ///
    /// The result has length `n - 2k`; series shorter than `2k + 1`
    /// observations have no interior point and yield an empty result.
    pub fn cycle(&self, series: &[f64]) -> Vec<f64> {
        let taps = 2 * self.k + 1;
        if series.len() < taps {
            return Vec::new();
        }

        let weights = self.weights();
        (0..=series.len() - taps)
            .map(|start| {
                weights
                    .iter()
                    .zip(series[start..start + taps].iter())
                    .map(|(w, y)| w * y)
                    .sum()
            })
            .collect()
    }
}
