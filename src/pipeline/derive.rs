//! Feature derivation stage
//!
//! Computes tenure, recodes the trading status into the binary default
//! label, and fills three known-gappy fields from accounting identities.
//! No rows or columns are dropped here; unresolved nulls are left for the
//! selection stage.

use anyhow::Result;
use polars::prelude::*;

use super::schema::{
    SchemaError, ACCOUNT_YEAR, DATE_OF_INCORPORATION, DIRECTORS_REMUNERATION, EBITDA,
    EBITDA_PLUS_DIRECTORS_REMUNERATION, TOTAL_ASSETS, TOTAL_CURRENT_ASSETS,
    TOTAL_CURRENT_LIABILITIES, TOTAL_NON_CURRENT_ASSETS, TRADING_STATUS, WORKING_CAPITAL,
    YEARS_SINCE_INCORPORATION,
};

/// The one trading status that signals a live, non-defaulted company.
pub const STATUS_ACTIVE: &str = "Active";
pub const LABEL_DEFAULT: &str = "Default";
pub const LABEL_NON_DEFAULT: &str = "Non-default";

/// Apply the derivation steps in order:
///
/// 1. `Years Since Incorporation = Account Year - year(incorporation)`,
///    as an integer.
/// 2. Recode `Trading Status` in place: `Active` becomes `Non-default`,
///    every other value, including categories never seen in training,
///    becomes `Default`.
/// 3. Fill nulls (and only nulls) in three fields from accounting
///    identities; a null input to an identity propagates as a null fill.
pub fn derive_features(df: DataFrame) -> Result<DataFrame> {
    if df.column(DATE_OF_INCORPORATION)?.dtype() != &DataType::Date {
        return Err(SchemaError::NotADateColumn {
            column: DATE_OF_INCORPORATION.to_string(),
        }
        .into());
    }

    let derived = df
        .lazy()
        .with_column(
            (col(ACCOUNT_YEAR).cast(DataType::Int32)
                - col(DATE_OF_INCORPORATION).dt().year())
            .cast(DataType::Int32)
            .alias(YEARS_SINCE_INCORPORATION),
        )
        .with_column(
            // fill_null(false) sends a null status down the Default arm
            when(
                col(TRADING_STATUS)
                    .eq(lit(STATUS_ACTIVE))
                    .fill_null(lit(false)),
            )
            .then(lit(LABEL_NON_DEFAULT))
            .otherwise(lit(LABEL_DEFAULT))
            .alias(TRADING_STATUS),
        )
        .with_columns([
            col(DIRECTORS_REMUNERATION)
                .fill_null(col(EBITDA_PLUS_DIRECTORS_REMUNERATION) - col(EBITDA)),
            col(TOTAL_ASSETS)
                .fill_null(col(TOTAL_CURRENT_ASSETS) + col(TOTAL_NON_CURRENT_ASSETS)),
            col(WORKING_CAPITAL)
                .fill_null(col(TOTAL_CURRENT_ASSETS) + col(TOTAL_CURRENT_LIABILITIES)),
        ])
        .collect()?;

    Ok(derived)
}
