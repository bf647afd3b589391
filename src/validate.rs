//! Numeric and parameter guards applied before a filter runs

use crate::error::{FilterError, Result};

/// Minimum number of observations any band-pass filter will accept
pub const MIN_SAMPLES: usize = 3;

/// Reject series containing NaN or infinite values
pub fn ensure_finite(variable: &str, series: &[f64]) -> Result<()> {
    if series.iter().any(|v| !v.is_finite()) {
        return Err(FilterError::InvalidData(format!(
            "'{}' contains NaN or infinite values",
            variable
        )));
    }
    Ok(())
}

/// Reject series with fewer than [`MIN_SAMPLES`] observations
pub fn ensure_min_samples(variable: &str, series: &[f64]) -> Result<()> {
    if series.len() < MIN_SAMPLES {
        return Err(FilterError::InvalidData(format!(
            "'{}' needs at least {} data points, got {}",
            variable,
            MIN_SAMPLES,
            series.len()
        )));
    }
    Ok(())
}

/// Reject band periodicities with `low >= high`
pub fn ensure_band(low: f64, high: f64) -> Result<()> {
    if low >= high {
        return Err(FilterError::InvalidParameter(format!(
            "low ({}) must be less than high ({})",
            low, high
        )));
    }
    Ok(())
}

/// Reject band periodicities below the shortest observable cycle.
///
/// A periodicity under 2 samples per cycle sits past the Nyquist limit and
/// has no meaning for the full-sample filter.
pub fn ensure_min_periodicity(low: f64) -> Result<()> {
    if low < 2.0 {
        return Err(FilterError::InvalidParameter(format!(
            "low ({}) must be at least 2 periods per cycle",
            low
        )));
    }
    Ok(())
}

/// Reject non-positive truncation lags
pub fn ensure_positive_lag(k: i64) -> Result<()> {
    if k <= 0 {
        return Err(FilterError::InvalidParameter(format!(
            "K ({}) must be a positive integer",
            k
        )));
    }
    Ok(())
}

/// Reject smoothing parameters that are not positive finite reals
pub fn ensure_smoothing(lambda: f64) -> Result<()> {
    if !lambda.is_finite() || lambda <= 0.0 {
        return Err(FilterError::InvalidParameter(format!(
            "lambda ({}) must be a positive real",
            lambda
        )));
    }
    Ok(())
}
