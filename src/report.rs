//! Aggregated results of one filter run

use crate::filters::{Decomposition, FilterKind};
use serde::Serialize;
use std::collections::BTreeMap;

/// A failure attributed to one (filter, variable) pair.
///
/// Failures are recorded and iteration continues; one variable's failure
/// never discards another variable's result.
#[derive(Debug, Clone, Serialize)]
pub struct VariableFailure {
    /// Filter pass the failure occurred in
    pub filter: FilterKind,
    /// Variable being processed
    pub variable: String,
    /// Rendered error
    pub error: String,
}

/// A pair of series truncated to a shared axis for side-by-side display
#[derive(Debug, Clone, Serialize)]
pub struct AlignedPair {
    /// Time axis truncated to the shortest participating series
    pub time_axis: Vec<String>,
    /// First variable's series
    pub first: Vec<f64>,
    /// Second variable's series
    pub second: Vec<f64>,
}

/// Aggregated result set of one orchestration run.
///
/// Created fresh per invocation. Maps are keyed by variable name; the time
/// axis indexes every full-length series (Baxter-King output is shorter by
/// its truncation lag at each end).
#[derive(Debug, Clone, Default, Serialize)]
pub struct FilterReport {
    /// Resolved time axis, in presentation order
    pub time_axis: Vec<String>,
    /// Hodrick-Prescott decompositions (at most one configured variable)
    pub hp: BTreeMap<String, Decomposition>,
    /// Baxter-King band-pass cycles
    pub bk: BTreeMap<String, Vec<f64>>,
    /// Christiano-Fitzgerald decompositions
    pub cf: BTreeMap<String, Decomposition>,
    /// Observed input series for the configured band-pass variables, kept
    /// for presentation alongside the filtered output
    pub observed: BTreeMap<String, Vec<f64>>,
    /// Per-variable failures, in processing order
    pub failures: Vec<VariableFailure>,
    /// User-visible warnings accumulated during the run
    pub warnings: Vec<String>,
    /// Diagnostic notes attached to warnings
    pub notes: Vec<String>,
}

impl FilterReport {
    /// Record a per-variable failure together with its user-visible warning
    pub(crate) fn record_failure(&mut self, filter: FilterKind, variable: &str, error: String) {
        self.warnings
            .push(format!("{} filter: {}", filter, error));
        self.failures.push(VariableFailure {
            filter,
            variable: variable.to_string(),
            error,
        });
    }

    /// Whether any failure was recorded
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// The filtered series for one (filter, variable) pair, if present.
    ///
    /// For the trend/cycle filters this is the cycle component.
    pub fn filtered_series(&self, filter: FilterKind, variable: &str) -> Option<&[f64]> {
        match filter {
            FilterKind::HodrickPrescott => self.hp.get(variable).map(|d| d.cycle.as_slice()),
            FilterKind::BaxterKing => self.bk.get(variable).map(|c| c.as_slice()),
            FilterKind::ChristianoFitzgerald => {
                self.cf.get(variable).map(|d| d.cycle.as_slice())
            }
        }
    }

    /// Two variables' filtered series truncated to a shared axis.
    ///
    /// Truncates axis and both series to the shortest available length,
    /// which matters for Baxter-King output with its trimmed edges.
    pub fn aligned_pair(
        &self,
        filter: FilterKind,
        first: &str,
        second: &str,
    ) -> Option<AlignedPair> {
        let first_series = self.filtered_series(filter, first)?;
        let second_series = self.filtered_series(filter, second)?;
        let len = self
            .time_axis
            .len()
            .min(first_series.len())
            .min(second_series.len());

        Some(AlignedPair {
            time_axis: self.time_axis[..len].to_vec(),
            first: first_series[..len].to_vec(),
            second: second_series[..len].to_vec(),
        })
    }
}
