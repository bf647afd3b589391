//! Column-oriented dataset access for filter runs

use crate::error::{FilterError, Result};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Column-oriented view over one tabular dataset.
///
/// Wraps a polars `DataFrame` and exposes the access the filter engine
/// needs: numeric columns widened to `f64`, string rendering for a raw
/// date column, and name-to-index resolution. Row order is temporal order
/// and is preserved by every accessor.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Data frame containing the observation columns
    df: DataFrame,
}

impl Dataset {
    /// Load a dataset from a CSV file
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        // Use polars DataFrame reader directly
        let df = CsvReader::new(file)
            .infer_schema(None)
            .has_header(true)
            .finish()?;

        Ok(Self { df })
    }

    /// Create a dataset from an existing DataFrame
    pub fn from_dataframe(df: DataFrame) -> Self {
        Self { df }
    }

    /// Create a dataset from named numeric columns (mainly for testing)
    pub fn from_columns(columns: &[(&str, Vec<f64>)]) -> Result<Self> {
        let series: Vec<Series> = columns
            .iter()
            .map(|(name, values)| Series::new(*name, values.clone()))
            .collect();
        let df = DataFrame::new(series)?;

        Ok(Self { df })
    }

    /// Attach a string column, e.g. a raw date variable
    pub fn add_label_column(&mut self, name: &str, labels: Vec<String>) -> Result<()> {
        self.df.with_column(Series::new(name, labels))?;
        Ok(())
    }

    /// Get the underlying DataFrame
    pub fn dataframe(&self) -> &DataFrame {
        &self.df
    }

    /// Get the column names in dataset order
    pub fn column_names(&self) -> Vec<String> {
        self.df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Resolve a variable name to its column index, if present
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.df.get_column_names().iter().position(|c| *c == name)
    }

    /// Check whether a column exists
    pub fn has_column(&self, name: &str) -> bool {
        self.field_index(name).is_some()
    }

    /// Get a column as f64 values, missing entries mapped to NaN.
    ///
    /// Nulls become NaN rather than being dropped so every column stays
    /// parallel to the time axis; the validator decides what to do with
    /// them.
    pub fn column_as_f64(&self, column_name: &str) -> Result<Vec<f64>> {
        let col = self.df.column(column_name).map_err(|e| {
            FilterError::DataError(format!("Column '{}' not found: {}", column_name, e))
        })?;

        match col.dtype() {
            DataType::Float64 => Ok(col
                .f64()
                .unwrap()
                .into_iter()
                .map(|v| v.unwrap_or(f64::NAN))
                .collect()),
            DataType::Float32 => Ok(col
                .f32()
                .unwrap()
                .into_iter()
                .map(|v| v.map(|v| v as f64).unwrap_or(f64::NAN))
                .collect()),
            DataType::Int64 => Ok(col
                .i64()
                .unwrap()
                .into_iter()
                .map(|v| v.map(|v| v as f64).unwrap_or(f64::NAN))
                .collect()),
            DataType::Int32 => Ok(col
                .i32()
                .unwrap()
                .into_iter()
                .map(|v| v.map(|v| v as f64).unwrap_or(f64::NAN))
                .collect()),
            DataType::UInt64 => Ok(col
                .u64()
                .unwrap()
                .into_iter()
                .map(|v| v.map(|v| v as f64).unwrap_or(f64::NAN))
                .collect()),
            DataType::UInt32 => Ok(col
                .u32()
                .unwrap()
                .into_iter()
                .map(|v| v.map(|v| v as f64).unwrap_or(f64::NAN))
                .collect()),
            _ => Err(FilterError::DataError(format!(
                "Column '{}' cannot be converted to f64",
                column_name
            ))),
        }
    }

    /// Get a column rendered as strings, in row order.
    ///
    /// Used for the raw date-column fallback of the time axis; values are
    /// taken verbatim, nulls become empty strings.
    pub fn column_as_strings(&self, column_name: &str) -> Result<Vec<String>> {
        let col = self.df.column(column_name).map_err(|e| {
            FilterError::DataError(format!("Column '{}' not found: {}", column_name, e))
        })?;

        let rendered = col.cast(&DataType::Utf8)?;
        Ok(rendered
            .utf8()
            .unwrap()
            .into_iter()
            .map(|v| v.map(|s| s.to_string()).unwrap_or_default())
            .collect())
    }

    /// Check if the dataset is empty
    pub fn is_empty(&self) -> bool {
        self.df.height() == 0
    }

    /// Get the case count of the dataset
    pub fn len(&self) -> usize {
        self.df.height()
    }
}
