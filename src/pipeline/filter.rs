//! Record ingestion filter
//!
//! Keeps raw rows whose accounting year is plausible and structurally
//! consistent with the latest-accounts date. The year-range predicate
//! runs first so that misentered rows are gone before the date columns
//! are coerced; garbage dates in discarded rows must never poison the
//! coercion of the rows that survive. The column set is unchanged at
//! this stage.

use anyhow::Result;
use polars::prelude::*;

use super::schema::{coerce_date_columns, SchemaError, ACCOUNT_YEAR, LATEST_ACCOUNTS_DATE};

/// Exclusive bounds on a plausible accounting year. Years at or outside
/// these are treated as misentered data.
pub const MIN_ACCOUNT_YEAR: i32 = 1900;
pub const MAX_ACCOUNT_YEAR: i32 = 2023;

/// Filter the raw table down to rows satisfying both predicates, in
/// order: `1900 < Account Year < 2023`, then (after date coercion of the
/// surviving rows) `year(Latest Accounts Date) == Account Year`.
///
/// Rows with a null in either column fail the predicates and are dropped.
pub fn filter_records(df: DataFrame) -> Result<DataFrame> {
    let df = filter_year_range(df)?;
    let df = coerce_date_columns(df)?;
    filter_aligned_accounts(df)
}

/// Keep rows whose accounting year falls strictly inside the plausible
/// range. Runs on the raw, uncoerced table.
pub fn filter_year_range(df: DataFrame) -> Result<DataFrame> {
    let filtered = df
        .lazy()
        .filter(
            col(ACCOUNT_YEAR)
                .gt(lit(MIN_ACCOUNT_YEAR))
                .and(col(ACCOUNT_YEAR).lt(lit(MAX_ACCOUNT_YEAR))),
        )
        .collect()?;

    Ok(filtered)
}

/// Keep rows whose latest-accounts date falls in the accounting year.
/// Requires the latest-accounts column to have coerced to a Date;
/// errors otherwise since the predicate cannot be evaluated.
pub fn filter_aligned_accounts(df: DataFrame) -> Result<DataFrame> {
    if df.column(LATEST_ACCOUNTS_DATE)?.dtype() != &DataType::Date {
        return Err(SchemaError::NotADateColumn {
            column: LATEST_ACCOUNTS_DATE.to_string(),
        }
        .into());
    }

    let filtered = df
        .lazy()
        .filter(
            col(LATEST_ACCOUNTS_DATE)
                .dt()
                .year()
                .eq(col(ACCOUNT_YEAR)),
        )
        .collect()?;

    Ok(filtered)
}
