//! Pipeline module - orchestrates the preprocessing stages
//!
//! Stage order matters: schema validation, ingestion filter (year range,
//! then date coercion of the surviving rows, then date alignment),
//! feature derivation, feature selection. Each run takes one
//! fully-materialized table and returns a new one; nothing is mutated
//! in place across invocations.

pub mod correlation;
pub mod derive;
pub mod filter;
pub mod loader;
pub mod schema;
pub mod select;

pub use correlation::*;
pub use derive::*;
pub use filter::*;
pub use loader::*;
pub use schema::{coerce_date_columns, validate_schema, SchemaError};
pub use select::*;

use anyhow::Result;
use polars::prelude::DataFrame;

use crate::report::PipelineSummary;

/// Validate, filter (with date coercion), and derive: everything up to
/// (but not including) feature selection. The correlation audit runs on
/// this table, since the frozen drop list was decided against it.
pub fn prepare_derived(df: DataFrame) -> Result<DataFrame> {
    validate_schema(&df)?;
    let df = filter_records(df)?;
    derive_features(df)
}

/// Run the full pipeline on a raw table, producing the clean feature
/// table and the per-stage row/column counts.
pub fn run_pipeline(df: DataFrame) -> Result<(DataFrame, PipelineSummary)> {
    let (rows_loaded, columns_loaded) = df.shape();

    validate_schema(&df)?;
    let df = filter_records(df)?;
    let rows_after_filter = df.height();

    let df = derive_features(df)?;
    let df = select_features(df)?;
    let (rows_final, columns_final) = df.shape();

    let summary = PipelineSummary {
        rows_loaded,
        columns_loaded,
        rows_after_filter,
        rows_final,
        columns_final,
        load_time: None,
    };

    Ok((df, summary))
}
