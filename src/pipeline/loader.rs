//! Raw-record loader
//!
//! The raw table is a delimited text file with one header row; nothing
//! else is supported. Loaded once per run and fully materialized.

use anyhow::{Context, Result};
use polars::prelude::*;
use std::path::Path;

use crate::utils::{create_spinner, finish_with_success};

/// Load the raw-record CSV into a fully-materialized DataFrame.
pub fn load_dataset(path: &Path, infer_schema_length: usize) -> Result<DataFrame> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    if extension != "csv" {
        anyhow::bail!(
            "Unsupported file format: {}. The raw-record table must be a CSV file",
            extension
        );
    }

    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(infer_schema_length))
        .finish()
        .with_context(|| format!("Failed to load CSV file: {}", path.display()))?
        .collect()
        .with_context(|| format!("Failed to read CSV file: {}", path.display()))?;

    Ok(df)
}

/// Load the raw table with a spinner, returning the frame plus its shape
/// and estimated memory in MB.
pub fn load_dataset_with_progress(
    path: &Path,
    infer_schema_length: usize,
) -> Result<(DataFrame, usize, usize, f64)> {
    let spinner = create_spinner(&format!("Loading {}", path.display()));

    let df = load_dataset(path, infer_schema_length)?;
    let (rows, cols) = df.shape();
    let memory_mb = df.estimated_size() as f64 / (1024.0 * 1024.0);

    finish_with_success(&spinner, "Dataset loaded");

    Ok((df, rows, cols, memory_mb))
}
