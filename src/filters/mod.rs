//! Decomposition filters for macroeconomic time series
//!
//! Three classical techniques: the Hodrick-Prescott penalized least-squares
//! filter, the Baxter-King symmetric band-pass filter, and the
//! Christiano-Fitzgerald asymmetric full-sample band-pass filter. All three
//! are pure numeric transforms over `f64` series; validation of inputs and
//! parameters happens before they are invoked.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The decomposition filter families the engine can apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FilterKind {
    /// Hodrick-Prescott trend/cycle decomposition
    HodrickPrescott,
    /// Baxter-King symmetric band-pass
    BaxterKing,
    /// Christiano-Fitzgerald asymmetric band-pass
    ChristianoFitzgerald,
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FilterKind::HodrickPrescott => "Hodrick-Prescott",
            FilterKind::BaxterKing => "Baxter-King",
            FilterKind::ChristianoFitzgerald => "Christiano-Fitzgerald",
        };
        write!(f, "{}", name)
    }
}

/// Trend and cycle components of one decomposed series.
///
/// Both components are index-aligned with the input series and satisfy
/// `trend[i] + cycle[i] == input[i]` up to floating-point tolerance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decomposition {
    /// Smooth trend component
    pub trend: Vec<f64>,
    /// Residual cyclical component
    pub cycle: Vec<f64>,
}

impl Decomposition {
    /// Number of observations in the decomposition
    pub fn len(&self) -> usize {
        self.trend.len()
    }

    /// Whether the decomposition is empty
    pub fn is_empty(&self) -> bool {
        self.trend.is_empty()
    }
}

pub mod baxter_king;
pub mod christiano_fitzgerald;
pub mod hodrick_prescott;

pub use baxter_king::BaxterKing;
pub use christiano_fitzgerald::ChristianoFitzgerald;
pub use hodrick_prescott::HodrickPrescott;
