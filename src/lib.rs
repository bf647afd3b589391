//! # Trend Cycle
//!
//! A Rust library for trend-cycle decomposition of macroeconomic time series.
//!
//! ## Features
//!
//! - Classical decomposition filters (Hodrick-Prescott, Baxter-King,
//!   Christiano-Fitzgerald)
//! - Normalization of free-text period labels (quarterly, monthly,
//!   weekday-indexed) into a sortable time axis
//! - Column-oriented dataset access backed by polars (CSV or in-memory)
//! - Batch orchestration over multiple variables with per-variable failure
//!   isolation and an aggregated report
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use trend_cycle::data::Dataset;
//! use trend_cycle::engine::{run_filters, FilterConfig, HpConfig};
//!
//! # fn main() -> trend_cycle::error::Result<()> {
//! // Load data
//! let dataset = Dataset::from_csv("gdp.csv")?;
//!
//! // Configure the Hodrick-Prescott pass
//! let config = FilterConfig {
//!     hp: Some(HpConfig {
//!         variable: "gdp".to_string(),
//!         lambda: 1600.0,
//!     }),
//!     time_variable: Some("DATE_".to_string()),
//!     ..FilterConfig::default()
//! };
//!
//! // Run the decomposition and inspect the report
//! let report = run_filters(&dataset, &config);
//! if let Some(result) = report.hp.get("gdp") {
//!     println!("trend head: {:?}", &result.trend[..4]);
//! }
//! # Ok(())
//! # }
//! ```

pub mod data;
pub mod engine;
pub mod error;
pub mod filters;
pub mod period;
pub mod report;
pub mod validate;

// Re-export commonly used types
pub use crate::data::Dataset;
pub use crate::engine::{run_filters, FilterConfig};
pub use crate::error::FilterError;
pub use crate::filters::{Decomposition, FilterKind};
pub use crate::report::FilterReport;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
