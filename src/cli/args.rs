//! Command-line argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Smescore - preprocess SME financial statements and score loan default risk
#[derive(Parser, Debug)]
#[command(name = "smescore")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the preprocessing pipeline on a raw-record CSV
    Preprocess {
        /// Input CSV file (one header row, raw-record schema)
        #[arg(short, long)]
        input: PathBuf,

        /// Output CSV path.
        /// Defaults to the input path with a '_clean' suffix (e.g. data.csv -> data_clean.csv).
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of rows used for CSV schema inference
        #[arg(long, default_value = "1000")]
        infer_schema_length: usize,
    },

    /// Recompute pairwise Pearson correlations on the derived table and
    /// cross-check them against the frozen correlated-column drop list
    Audit {
        /// Input CSV file (one header row, raw-record schema)
        #[arg(short, long)]
        input: PathBuf,

        /// Absolute correlation above which a pair is flagged
        #[arg(long, default_value = "0.90")]
        threshold: f64,

        /// Number of rows used for CSV schema inference
        #[arg(long, default_value = "1000")]
        infer_schema_length: usize,
    },

    /// Score one company's default probability from its eight financial figures
    Predict {
        /// Path to the model artifact (JSON: weights, bias, classes)
        #[arg(short, long)]
        model: PathBuf,

        #[arg(long, allow_negative_numbers = true)]
        capital_expenditure: f64,

        #[arg(long, allow_negative_numbers = true)]
        cash_at_bank: f64,

        #[arg(long, allow_negative_numbers = true)]
        ebitda: f64,

        #[arg(long, allow_negative_numbers = true)]
        employees_remuneration: f64,

        #[arg(long, allow_negative_numbers = true)]
        profit_for_year: f64,

        #[arg(long, allow_negative_numbers = true)]
        retained_earnings: f64,

        #[arg(long, allow_negative_numbers = true)]
        total_assets: f64,

        #[arg(long, allow_negative_numbers = true)]
        total_equity: f64,
    },
}

/// Derive the default output path: same directory, '_clean' suffix.
pub fn default_output_path(input: &PathBuf) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    input.with_file_name(format!("{}_clean.csv", stem))
}
