//! Filter orchestration over a configured variable list
//!
//! The engine resolves a time axis from period factor labels or a raw date
//! column, then runs each enabled filter pass in sequence. Passes are
//! independent: a parameter failure aborts only its own pass, and within
//! the band-pass passes each variable is processed in isolation so one bad
//! series never blocks the rest of the batch. The report is always
//! returned, carrying whatever partial results were assembled.

use crate::data::Dataset;
use crate::error::{FilterError, Result};
use crate::filters::{
    BaxterKing, ChristianoFitzgerald, Decomposition, FilterKind, HodrickPrescott,
};
use crate::period::{clean_factor_labels, sort_period_labels};
use crate::report::FilterReport;
use crate::validate;
use serde::{Deserialize, Serialize};

/// Date variable consulted when no period factors are configured
const DATE_VARIABLE: &str = "DATE_";

fn default_lambda() -> f64 {
    1600.0
}

fn default_low() -> f64 {
    6.0
}

fn default_high() -> f64 {
    32.0
}

fn default_lag() -> i64 {
    12
}

/// Hodrick-Prescott pass settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HpConfig {
    /// Variable to decompose
    pub variable: String,
    /// Smoothing parameter
    #[serde(default = "default_lambda")]
    pub lambda: f64,
}

impl HpConfig {
    /// Settings for one variable with the conventional quarterly lambda
    pub fn new(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            lambda: default_lambda(),
        }
    }
}

/// Baxter-King pass settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BkConfig {
    /// Variables to filter, processed in order
    pub variables: Vec<String>,
    /// Shortest periodicity passed
    #[serde(default = "default_low")]
    pub low: f64,
    /// Longest periodicity passed
    #[serde(default = "default_high")]
    pub high: f64,
    /// Truncation lag
    #[serde(default = "default_lag")]
    pub k: i64,
}

impl BkConfig {
    /// Settings for a variable list with the customary business-cycle band
    pub fn new(variables: Vec<String>) -> Self {
        Self {
            variables,
            low: default_low(),
            high: default_high(),
            k: default_lag(),
        }
    }
}

/// Christiano-Fitzgerald pass settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CfConfig {
    /// Variables to filter, processed in order
    pub variables: Vec<String>,
    /// Shortest periodicity passed
    #[serde(default = "default_low")]
    pub low: f64,
    /// Longest periodicity passed
    #[serde(default = "default_high")]
    pub high: f64,
    /// Drift adjustment; absent means the filter's default (enabled)
    #[serde(default)]
    pub drift: Option<bool>,
}

impl CfConfig {
    /// Settings for a variable list with the customary business-cycle band
    pub fn new(variables: Vec<String>) -> Self {
        Self {
            variables,
            low: default_low(),
            high: default_high(),
            drift: None,
        }
    }
}

/// Declarative settings for one filter run.
///
/// Constructed once per invocation and never mutated; each filter is
/// enabled by supplying its settings block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Hodrick-Prescott pass, if enabled
    pub hp: Option<HpConfig>,
    /// Baxter-King pass, if enabled
    pub bk: Option<BkConfig>,
    /// Christiano-Fitzgerald pass, if enabled
    pub cf: Option<CfConfig>,
    /// Raw factor labels carrying period tokens; when non-empty these are
    /// cleaned, sorted, and used as the time axis
    pub period_factors: Vec<String>,
    /// Date variable used verbatim when no period factors are supplied;
    /// defaults to `DATE_`
    pub time_variable: Option<String>,
}

/// Run every enabled filter pass over the dataset.
///
/// Never panics and never returns an error: every failure is recorded in
/// the report's warnings and failures, and partial results survive. The
/// only fatal precondition is a missing time axis, which stops the run
/// before any filter with a single warning.
pub fn run_filters(dataset: &Dataset, config: &FilterConfig) -> FilterReport {
    let mut report = FilterReport::default();

    match resolve_time_axis(dataset, config) {
        Ok(axis) => report.time_axis = axis,
        Err(err) => {
            log::error!("time axis resolution failed: {}", err);
            report.warnings.push(err.to_string());
            report
                .notes
                .push("No filter was applied: the run had no resolvable time axis.".to_string());
            return report;
        }
    }

    if report.time_axis.len() != dataset.len() {
        log::warn!(
            "time axis length ({}) does not match case count ({})",
            report.time_axis.len(),
            dataset.len()
        );
        report.warnings.push(format!(
            "Time axis length ({}) does not match case count ({}); series and axis are no longer parallel",
            report.time_axis.len(),
            dataset.len()
        ));
    }

    if let Some(hp) = &config.hp {
        apply_hp(dataset, hp, &mut report);
    }
    capture_observed(dataset, config, &mut report);
    if let Some(bk) = &config.bk {
        apply_bk(dataset, bk, &mut report);
    }
    if let Some(cf) = &config.cf {
        apply_cf(dataset, cf, &mut report);
    }

    report
}

/// Resolve the time axis: period factors when configured, otherwise the
/// raw date column in row order
fn resolve_time_axis(dataset: &Dataset, config: &FilterConfig) -> Result<Vec<String>> {
    if !config.period_factors.is_empty() {
        let cleaned = clean_factor_labels(&config.period_factors);
        return Ok(sort_period_labels(&cleaned));
    }

    let date_variable = config.time_variable.as_deref().unwrap_or(DATE_VARIABLE);
    if dataset.has_column(date_variable) {
        return dataset.column_as_strings(date_variable);
    }

    Err(FilterError::MissingTimeAxis)
}

/// Keep the observed input series of every configured band-pass variable
/// for presentation alongside the filtered output
fn capture_observed(dataset: &Dataset, config: &FilterConfig, report: &mut FilterReport) {
    let bk_variables = config.bk.iter().flat_map(|c| c.variables.iter());
    let cf_variables = config.cf.iter().flat_map(|c| c.variables.iter());

    for variable in bk_variables.chain(cf_variables) {
        if report.observed.contains_key(variable) {
            continue;
        }
        if let Ok(series) = dataset.column_as_f64(variable) {
            report.observed.insert(variable.clone(), series);
        }
    }
}

fn apply_hp(dataset: &Dataset, config: &HpConfig, report: &mut FilterReport) {
    // An unresolvable variable name is a deliberate no-op for this pass
    if !dataset.has_column(&config.variable) {
        log::debug!(
            "HP variable '{}' not present in dataset, skipping pass",
            config.variable
        );
        return;
    }

    let outcome = (|| -> Result<Decomposition> {
        let series = dataset.column_as_f64(&config.variable)?;
        validate::ensure_finite(&config.variable, &series)?;
        let filter = HodrickPrescott::new(config.lambda)?;
        Ok(filter.decompose(&series))
    })();

    match outcome {
        Ok(result) => {
            report.hp.insert(config.variable.clone(), result);
        }
        Err(err) => {
            log::warn!("HP filter failed for '{}': {}", config.variable, err);
            report.record_failure(FilterKind::HodrickPrescott, &config.variable, err.to_string());
        }
    }
}

fn apply_bk(dataset: &Dataset, config: &BkConfig, report: &mut FilterReport) {
    // Parameters are shared across the variable list: checked once, and a
    // violation aborts this pass only
    let filter = match BaxterKing::new(config.low, config.high, config.k) {
        Ok(filter) => filter,
        Err(err) => {
            log::error!("BK pass aborted: {}", err);
            report
                .warnings
                .push(format!("Baxter-King pass skipped: {}", err));
            report
                .notes
                .push("Other filter passes are unaffected.".to_string());
            return;
        }
    };

    for variable in &config.variables {
        if !dataset.has_column(variable) {
            continue;
        }
        let series = match dataset.column_as_f64(variable) {
            Ok(series) => series,
            Err(err) => {
                log::warn!("BK filter failed for '{}': {}", variable, err);
                report.record_failure(FilterKind::BaxterKing, variable, err.to_string());
                continue;
            }
        };

        // Degenerate series are skipped with a warning rather than recorded
        // as failures
        if let Err(err) = validate::ensure_min_samples(variable, &series)
            .and_then(|_| validate::ensure_finite(variable, &series))
        {
            log::warn!("BK filter skipping '{}': {}", variable, err);
            report
                .warnings
                .push(format!("Baxter-King skipped variable '{}': {}", variable, err));
            continue;
        }

        report.bk.insert(variable.clone(), filter.cycle(&series));
    }
}

fn apply_cf(dataset: &Dataset, config: &CfConfig, report: &mut FilterReport) {
    let drift = config.drift.unwrap_or(true);
    let filter = match ChristianoFitzgerald::new(config.low, config.high, drift) {
        Ok(filter) => filter,
        Err(err) => {
            log::error!("CF pass aborted: {}", err);
            report
                .warnings
                .push(format!("Christiano-Fitzgerald pass skipped: {}", err));
            report
                .notes
                .push("Other filter passes are unaffected.".to_string());
            return;
        }
    };

    for variable in &config.variables {
        if !dataset.has_column(variable) {
            continue;
        }
        let outcome = (|| -> Result<Decomposition> {
            let series = dataset.column_as_f64(variable)?;
            validate::ensure_min_samples(variable, &series)?;
            validate::ensure_finite(variable, &series)?;
            Ok(filter.decompose(&series))
        })();

        match outcome {
            Ok(result) => {
                report.cf.insert(variable.clone(), result);
            }
            Err(err) => {
                log::warn!("CF filter failed for '{}': {}", variable, err);
                report.record_failure(
                    FilterKind::ChristianoFitzgerald,
                    variable,
                    err.to_string(),
                );
            }
        }
    }
}
