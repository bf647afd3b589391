//! Christiano-Fitzgerald asymmetric band-pass filter

use crate::error::Result;
use crate::filters::Decomposition;
use crate::validate::{ensure_band, ensure_min_periodicity};
use std::f64::consts::PI;

/// Christiano-Fitzgerald band-pass filter.
///
/// A full-sample, asymmetric variant of the band-pass: every output point
/// uses all available observations, with boundary weights on the first and
/// last observation chosen under a random-walk assumption so that the
/// weights at each index sum to zero. Unlike Baxter-King, trend and cycle
/// come out at the full input length.
#[derive(Debug, Clone)]
pub struct ChristianoFitzgerald {
    /// Shortest periodicity passed, in periods per cycle
    low: f64,
    /// Longest periodicity passed, in periods per cycle
    high: f64,
    /// Remove the straight line through the first and last observation
    /// before filtering
    drift: bool,
}

impl ChristianoFitzgerald {
    /// Create a new Christiano-Fitzgerald filter.
    ///
    /// Requires `2 <= low < high`; periodicities below two samples per
    /// cycle are not observable.
    pub fn new(low: f64, high: f64, drift: bool) -> Result<Self> {
        ensure_min_periodicity(low)?;
        ensure_band(low, high)?;
        Ok(Self { low, high, drift })
    }

    /// Whether drift adjustment is enabled
    pub fn drift(&self) -> bool {
        self.drift
    }

    /// Decompose a series into cycle and trend components.
    ///
    /// With drift enabled the components decompose the drift-adjusted
    /// series; `trend + cycle` reproduces the input with the straight line
    /// through its endpoints removed.
    pub fn decompose(&self, series: &[f64]) -> Decomposition {
        let n = series.len();
        if n == 0 {
            return Decomposition {
                trend: Vec::new(),
                cycle: Vec::new(),
            };
        }

        let adjusted: Vec<f64> = if self.drift && n > 1 {
            let slope = (series[n - 1] - series[0]) / (n as f64 - 1.0);
            series
                .iter()
                .enumerate()
                .map(|(t, y)| y - t as f64 * slope)
                .collect()
        } else {
            series.to_vec()
        };

        // Ideal band-pass weights truncated to the sample length
        let omega1 = 2.0 * PI / self.high;
        let omega2 = 2.0 * PI / self.low;
        let mut weights = vec![0.0; n + 1];
        weights[0] = (omega2 - omega1) / PI;
        for j in 1..=n {
            let lag = j as f64;
            weights[j] = ((omega2 * lag).sin() - (omega1 * lag).sin()) / (PI * lag);
        }

        let mut cycle = vec![0.0; n];
        for i in 0..n {
            // Interior weights reach forward to the second-to-last
            // observation and backward to the second; the endpoints carry
            // the remainders so each row of weights sums to zero.
            let forward = n.saturating_sub(i + 2);
            let backward = i.saturating_sub(1);
            let forward_sum: f64 = weights[1..1 + forward].iter().sum();
            let backward_sum: f64 = weights[1..1 + backward].iter().sum();

            let last_weight = -0.5 * weights[0] - forward_sum;
            let first_weight = -weights[0] - forward_sum - backward_sum - last_weight;

            let mut value = weights[0] * adjusted[i];
            for j in 1..=forward {
                value += weights[j] * adjusted[i + j];
            }
            for j in 1..=backward {
                value += weights[j] * adjusted[i - j];
            }
            value += last_weight * adjusted[n - 1] + first_weight * adjusted[0];
            cycle[i] = value;
        }

        let trend = adjusted
            .iter()
            .zip(cycle.iter())
            .map(|(y, c)| y - c)
            .collect();

        Decomposition { trend, cycle }
    }
}
