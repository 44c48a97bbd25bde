//! Smescore CLI entry point
//!
//! Subcommands: `preprocess` (raw CSV to clean feature table), `audit`
//! (cross-check the frozen correlation drop list against live data),
//! and `predict` (score one company with a pre-trained model artifact).

mod cli;
mod model;
mod pipeline;
mod report;
mod utils;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use polars::prelude::*;

use cli::{args::default_output_path, Cli, Commands};
use model::{predict_default, FeatureVector, LogisticModel};
use pipeline::{
    audit_drop_list, find_correlated_pairs, load_dataset_with_progress, prepare_derived,
    run_pipeline,
};
use utils::{print_banner, print_completion, print_config, print_info, print_step_header,
    print_success};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Preprocess {
            input,
            output,
            infer_schema_length,
        } => {
            let output = output.unwrap_or_else(|| default_output_path(&input));
            run_preprocess(&input, &output, infer_schema_length)
        }
        Commands::Audit {
            input,
            threshold,
            infer_schema_length,
        } => run_audit(&input, threshold, infer_schema_length),
        Commands::Predict {
            model,
            capital_expenditure,
            cash_at_bank,
            ebitda,
            employees_remuneration,
            profit_for_year,
            retained_earnings,
            total_assets,
            total_equity,
        } => {
            let features = FeatureVector {
                capital_expenditure,
                cash_at_bank,
                ebitda,
                employees_remuneration,
                profit_for_year,
                retained_earnings,
                total_assets,
                total_equity,
            };
            run_predict(&model, &features)
        }
    }
}

fn run_preprocess(input: &Path, output: &PathBuf, infer_schema_length: usize) -> Result<()> {
    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(input, output);

    print_step_header(1, "Load raw records");
    let load_start = Instant::now();
    let (df, rows, cols, memory_mb) = load_dataset_with_progress(input, infer_schema_length)?;
    println!("\n    {} Dataset Statistics:", style("✧").cyan());
    println!("      Rows: {}", rows);
    println!("      Columns: {}", cols);
    println!("      Estimated memory: {:.2} MB", memory_mb);

    print_step_header(2, "Filter, derive, select");
    let (mut clean, mut summary) = run_pipeline(df)?;
    summary.load_time = Some(load_start.elapsed());
    print_success("Pipeline complete");

    print_step_header(3, "Write feature table");
    let mut file = std::fs::File::create(output)
        .with_context(|| format!("Failed to create output file: {}", output.display()))?;
    CsvWriter::new(&mut file)
        .finish(&mut clean)
        .with_context(|| format!("Failed to write output file: {}", output.display()))?;
    print_success(&format!("Feature table written to {}", output.display()));

    summary.display();
    print_completion("Preprocessing complete!");
    Ok(())
}

fn run_audit(input: &Path, threshold: f64, infer_schema_length: usize) -> Result<()> {
    print_banner(env!("CARGO_PKG_VERSION"));

    let (df, _, _, _) = load_dataset_with_progress(input, infer_schema_length)?;
    // The frozen list was decided against the derived table, before
    // column selection, so that is what we recompute on.
    let derived = prepare_derived(df)?;

    let pairs = find_correlated_pairs(&derived, threshold)?;
    println!();
    for pair in &pairs {
        println!(
            "    {} {} <-> {} ({:.3})",
            style("•").cyan(),
            pair.feature1,
            pair.feature2,
            pair.correlation
        );
    }

    let audit = audit_drop_list(&pairs);
    println!();
    for name in &audit.confirmed {
        print_success(&format!("'{}' still implicated by a live pair", name));
    }
    for name in &audit.unconfirmed {
        print_info(&format!(
            "'{}' is on the drop list but no live pair touches it",
            name
        ));
    }
    for pair in &audit.uncovered {
        print_info(&format!(
            "uncovered pair: {} <-> {} ({:.3})",
            pair.feature1, pair.feature2, pair.correlation
        ));
    }

    print_completion("Audit complete!");
    Ok(())
}

fn run_predict(model_path: &Path, features: &FeatureVector) -> Result<()> {
    let model = LogisticModel::from_file(model_path)?;
    let prediction = predict_default(&model, features)?;

    println!(
        "This loan will {} with a probability of {:.1}%",
        style(&prediction.label).bold(),
        prediction.probability_percent
    );
    Ok(())
}
