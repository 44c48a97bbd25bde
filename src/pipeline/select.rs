//! Feature selection stage
//!
//! Drops a fixed, versioned list of columns and then every row still
//! carrying a null in a surviving column. The correlation-driven entries
//! were decided against the historical dataset at |Pearson| > 0.90 and
//! are deliberately encoded as a static table rather than recomputed at
//! runtime; `pipeline::correlation` can audit the table against live data.

use anyhow::Result;
use polars::prelude::*;

use super::schema::{
    ACCOUNT_YEAR, BANK_OVERDRAFT, BANK_POSTCODE, CAPITAL_EXPENDITURE, DATE_OF_INCORPORATION,
    DIRECTOR_LOANS_CURRENT, DIRECTOR_LOANS_NON_CURRENT, EBIT,
    EBITDA_PLUS_DIRECTORS_REMUNERATION, HIGHEST_PAID_DIRECTOR, LATEST_ACCOUNTS_DATE, LEASEHOLD,
    PBT_PLUS_DIRECTORS_REMUNERATION, REGISTERED_NUMBER, TOTAL_NON_CURRENT_LIABILITIES,
    TRADING_POSTCODE, UK_SIC_CODE, WAGES, WORKING_CAPITAL,
};

/// Threshold behind the `Correlated` entries of the drop table.
pub const CORRELATION_THRESHOLD: f64 = 0.90;

/// Why a column is on the drop table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// Unique per company, carries no signal.
    Identifier,
    /// Replaced by a derived column.
    SupersededByDerivation,
    /// Administrative or free-text field.
    Administrative,
    /// |Pearson| > 0.90 with a retained column on the historical dataset.
    Correlated,
    /// Mostly missing or judged to add no value.
    LowValue,
}

impl DropReason {
    pub fn label(&self) -> &'static str {
        match self {
            DropReason::Identifier => "identifier",
            DropReason::SupersededByDerivation => "superseded by derivation",
            DropReason::Administrative => "administrative",
            DropReason::Correlated => "correlated > 0.90",
            DropReason::LowValue => "low value / sparse",
        }
    }
}

/// The versioned drop table. Membership is fixed; changing it is a model
/// retraining event, not a runtime decision.
pub const COLUMN_DROPS: &[(&str, DropReason)] = &[
    (REGISTERED_NUMBER, DropReason::Identifier),
    (ACCOUNT_YEAR, DropReason::SupersededByDerivation),
    (DATE_OF_INCORPORATION, DropReason::SupersededByDerivation),
    (UK_SIC_CODE, DropReason::Administrative),
    (BANK_POSTCODE, DropReason::Administrative),
    (TRADING_POSTCODE, DropReason::Administrative),
    (EBIT, DropReason::Correlated),
    (HIGHEST_PAID_DIRECTOR, DropReason::Correlated),
    (TOTAL_NON_CURRENT_LIABILITIES, DropReason::Correlated),
    (WAGES, DropReason::Correlated),
    (WORKING_CAPITAL, DropReason::Correlated),
    (BANK_OVERDRAFT, DropReason::LowValue),
    (CAPITAL_EXPENDITURE, DropReason::LowValue),
    (DIRECTOR_LOANS_CURRENT, DropReason::LowValue),
    (DIRECTOR_LOANS_NON_CURRENT, DropReason::LowValue),
    (LEASEHOLD, DropReason::LowValue),
    (EBITDA_PLUS_DIRECTORS_REMUNERATION, DropReason::LowValue),
    (PBT_PLUS_DIRECTORS_REMUNERATION, DropReason::LowValue),
    (LATEST_ACCOUNTS_DATE, DropReason::LowValue),
];

/// All column names on the drop table.
pub fn dropped_columns() -> Vec<String> {
    COLUMN_DROPS
        .iter()
        .map(|(name, _)| name.to_string())
        .collect()
}

/// Drop-table columns carrying a given reason.
pub fn dropped_columns_for(reason: DropReason) -> Vec<String> {
    COLUMN_DROPS
        .iter()
        .filter(|(_, r)| *r == reason)
        .map(|(name, _)| name.to_string())
        .collect()
}

/// Apply the selection stage: drop the table's columns unconditionally,
/// then drop every row with a null in any surviving column. The result
/// is a dense, fully-materialized feature table.
pub fn select_features(df: DataFrame) -> Result<DataFrame> {
    let drops = dropped_columns();
    let df = df.drop_many(&drops);
    let df = df.lazy().drop_nulls(None).collect()?;
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_table_has_no_duplicates() {
        let names = dropped_columns();
        let mut deduped = names.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(names.len(), deduped.len());
    }

    #[test]
    fn test_correlated_entries() {
        let correlated = dropped_columns_for(DropReason::Correlated);
        assert_eq!(correlated.len(), 5);
        assert!(correlated.contains(&EBIT.to_string()));
        assert!(correlated.contains(&WORKING_CAPITAL.to_string()));
    }

    #[test]
    fn test_null_rows_dropped() {
        let df = df! {
            "a" => [Some(1.0f64), None, Some(3.0)],
            "b" => [Some(1.0f64), Some(2.0), Some(3.0)],
        }
        .unwrap();

        let out = select_features(df).unwrap();
        assert_eq!(out.height(), 2);
        for col in out.get_columns() {
            assert_eq!(col.null_count(), 0);
        }
    }
}
