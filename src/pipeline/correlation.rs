//! Correlation audit for the static drop table
//!
//! The pipeline never recomputes correlations; the `Correlated` entries
//! of the drop table are frozen configuration. This module recomputes
//! pairwise Pearson correlations on demand so the frozen table can be
//! cross-checked against whatever data is currently flowing through.

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use polars::prelude::*;
use rayon::prelude::*;

use super::select::{dropped_columns_for, DropReason};

/// A pair of numeric columns correlated above the audit threshold.
#[derive(Debug, Clone)]
pub struct CorrelatedPair {
    pub feature1: String,
    pub feature2: String,
    pub correlation: f64,
}

/// Outcome of checking live correlations against the frozen drop table.
#[derive(Debug, Clone)]
pub struct DropListAudit {
    /// Frozen entries implicated by at least one live pair.
    pub confirmed: Vec<String>,
    /// Frozen entries no live pair touches anymore.
    pub unconfirmed: Vec<String>,
    /// Live pairs where neither side is on the frozen table.
    pub uncovered: Vec<CorrelatedPair>,
}

/// Calculate Pearson correlation between every pair of numeric columns
/// and return the pairs above `threshold`, strongest first.
pub fn find_correlated_pairs(df: &DataFrame, threshold: f64) -> Result<Vec<CorrelatedPair>> {
    // Cast all numeric columns to Float64 up front
    let float_columns: Vec<(String, Column)> = df
        .get_columns()
        .iter()
        .filter(|col| col.dtype().is_primitive_numeric())
        .filter_map(|col| {
            col.cast(&DataType::Float64)
                .ok()
                .map(|cast| (col.name().to_string(), cast))
        })
        .collect();

    let num_cols = float_columns.len();
    if num_cols < 2 {
        return Ok(Vec::new());
    }

    let total_pairs = (num_cols * (num_cols - 1)) / 2;

    let pb = ProgressBar::new(total_pairs as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "   Calculating correlations [{bar:40.cyan/blue}] {pos}/{len} pairs ({percent}%)",
            )
            .unwrap()
            .progress_chars("=>-"),
    );
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    // Upper-triangle index pairs
    let pairs: Vec<(usize, usize)> = (0..num_cols)
        .flat_map(|i| ((i + 1)..num_cols).map(move |j| (i, j)))
        .collect();

    let mut correlated_pairs: Vec<CorrelatedPair> = pairs
        .par_iter()
        .filter_map(|(i, j)| {
            let (col1_name, col1) = &float_columns[*i];
            let (col2_name, col2) = &float_columns[*j];

            let corr = pearson_correlation(col1, col2);
            pb.inc(1);

            corr.and_then(|c| {
                if c.abs() > threshold && !c.is_nan() {
                    Some(CorrelatedPair {
                        feature1: col1_name.clone(),
                        feature2: col2_name.clone(),
                        correlation: c,
                    })
                } else {
                    None
                }
            })
        })
        .collect();

    pb.finish_with_message(format!(
        "   [OK] Analyzed {} column pairs, found {} correlated",
        total_pairs,
        correlated_pairs.len()
    ));

    correlated_pairs.sort_by(|a, b| {
        b.correlation
            .abs()
            .partial_cmp(&a.correlation.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Ok(correlated_pairs)
}

/// Single-pass Welford Pearson correlation. Rows where either side is
/// null are skipped pairwise.
fn pearson_correlation(s1: &Column, s2: &Column) -> Option<f64> {
    let ca1 = s1.f64().ok()?;
    let ca2 = s2.f64().ok()?;

    if ca1.is_empty() || ca1.len() != ca2.len() {
        return None;
    }

    let mut count = 0.0;
    let mut mean_x = 0.0;
    let mut mean_y = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    let mut cov_xy = 0.0;

    for (x, y) in ca1.iter().zip(ca2.iter()) {
        if let (Some(x), Some(y)) = (x, y) {
            count += 1.0;
            let dx = x - mean_x;
            let dy = y - mean_y;
            mean_x += dx / count;
            mean_y += dy / count;
            var_x += dx * (x - mean_x);
            var_y += dy * (y - mean_y);
            cov_xy += dx * (y - mean_y);
        }
    }

    if count < 2.0 {
        return None;
    }

    let std_x = (var_x / count).sqrt();
    let std_y = (var_y / count).sqrt();

    if std_x == 0.0 || std_y == 0.0 {
        return None;
    }

    Some(cov_xy / (count * std_x * std_y))
}

/// Compare live pairs against the frozen `Correlated` drop entries.
pub fn audit_drop_list(pairs: &[CorrelatedPair]) -> DropListAudit {
    let frozen = dropped_columns_for(DropReason::Correlated);

    let implicated = |name: &str| {
        pairs
            .iter()
            .any(|p| p.feature1 == name || p.feature2 == name)
    };

    let (confirmed, unconfirmed): (Vec<String>, Vec<String>) =
        frozen.clone().into_iter().partition(|name| implicated(name));

    let listed = |name: &str| frozen.iter().any(|f| f == name);
    let uncovered: Vec<CorrelatedPair> = pairs
        .iter()
        .filter(|p| !listed(&p.feature1) && !listed(&p.feature2))
        .cloned()
        .collect();

    DropListAudit {
        confirmed,
        unconfirmed,
        uncovered,
    }
}
