//! Raw-record schema: canonical column names, presence validation, and
//! best-effort date coercion.
//!
//! Column names are the literal headers of the raw dataset. A string
//! column is promoted to a Date column only when every one of its
//! non-null values parses under a single format from a fixed grammar;
//! anything else is left untouched, silently.

use chrono::{Datelike, NaiveDate};
use polars::prelude::*;
use thiserror::Error;

pub const REGISTERED_NUMBER: &str = "Registered Number";
pub const ACCOUNT_YEAR: &str = "Account Year";
pub const DATE_OF_INCORPORATION: &str = "Date of Incorporation";
pub const LATEST_ACCOUNTS_DATE: &str = "Latest Accounts Date";
pub const TRADING_STATUS: &str = "Trading Status";
pub const UK_SIC_CODE: &str = "UK SIC Code";
pub const BANK_POSTCODE: &str = "Bank Postcode";
pub const TRADING_POSTCODE: &str = "Registered or Trading Postcode";

pub const EBITDA: &str = "EBITDA";
pub const EBIT: &str = "EBIT";
pub const DIRECTORS_REMUNERATION: &str = "Directors Remuneration";
pub const EBITDA_PLUS_DIRECTORS_REMUNERATION: &str = "EBITDA + Directors Remuneration";
pub const PBT_PLUS_DIRECTORS_REMUNERATION: &str = "Profit Before Tax + Directors Remuneration";
// Trailing space is the literal header in the source dataset.
pub const HIGHEST_PAID_DIRECTOR: &str = "Highest Paid Director ";
pub const TOTAL_ASSETS: &str = "Total Assets";
pub const TOTAL_CURRENT_ASSETS: &str = "Total Current Assets";
pub const TOTAL_NON_CURRENT_ASSETS: &str = "Total Non Current Assets";
pub const TOTAL_CURRENT_LIABILITIES: &str = "Total Current Liabilities";
pub const TOTAL_NON_CURRENT_LIABILITIES: &str = "Total Non Current Liabilities (Incl Provisions)";
pub const WORKING_CAPITAL: &str = "Working Capital";
pub const WAGES: &str = "Wages";
pub const LEASEHOLD: &str = "Leasehold";
pub const BANK_OVERDRAFT: &str = "Bank Overdraft";
pub const CAPITAL_EXPENDITURE: &str = "Capital Expenditure";
pub const DIRECTOR_LOANS_CURRENT: &str = "Director Loans (current)";
pub const DIRECTOR_LOANS_NON_CURRENT: &str = "Director Loans (non-current)";

/// Column added by the derivation stage.
pub const YEARS_SINCE_INCORPORATION: &str = "Years Since Incorporation";

/// Every column the pipeline reads or drops. A raw table missing any of
/// these cannot be processed at all.
pub const REQUIRED_COLUMNS: &[&str] = &[
    REGISTERED_NUMBER,
    ACCOUNT_YEAR,
    DATE_OF_INCORPORATION,
    LATEST_ACCOUNTS_DATE,
    TRADING_STATUS,
    UK_SIC_CODE,
    BANK_POSTCODE,
    TRADING_POSTCODE,
    EBITDA,
    EBIT,
    DIRECTORS_REMUNERATION,
    EBITDA_PLUS_DIRECTORS_REMUNERATION,
    PBT_PLUS_DIRECTORS_REMUNERATION,
    HIGHEST_PAID_DIRECTOR,
    TOTAL_ASSETS,
    TOTAL_CURRENT_ASSETS,
    TOTAL_NON_CURRENT_ASSETS,
    TOTAL_CURRENT_LIABILITIES,
    TOTAL_NON_CURRENT_LIABILITIES,
    WORKING_CAPITAL,
    WAGES,
    LEASEHOLD,
    BANK_OVERDRAFT,
    CAPITAL_EXPENDITURE,
    DIRECTOR_LOANS_CURRENT,
    DIRECTOR_LOANS_NON_CURRENT,
];

/// The fixed date grammar. A column is date-coerced only if one of these
/// formats parses 100% of its non-null values.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y"];

/// Structural problems with the raw table. These are fatal: no partial
/// pipeline execution is attempted.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Required column '{column}' not found in the raw table")]
    MissingColumn { column: String },

    #[error("Column '{column}' did not coerce to a date and cannot be used as one")]
    NotADateColumn { column: String },
}

/// Verify every required column is present before any stage runs.
pub fn validate_schema(df: &DataFrame) -> Result<(), SchemaError> {
    for &required in REQUIRED_COLUMNS {
        if df.column(required).is_err() {
            return Err(SchemaError::MissingColumn {
                column: required.to_string(),
            });
        }
    }
    Ok(())
}

/// Best-effort date coercion over every string column.
///
/// Each string column is tried against the fixed date grammar; on success
/// it is replaced by a Date column (nulls preserved), on failure it is
/// left exactly as it was. No error is ever raised here.
pub fn coerce_date_columns(mut df: DataFrame) -> PolarsResult<DataFrame> {
    let string_cols: Vec<String> = df
        .get_columns()
        .iter()
        .filter(|col| col.dtype() == &DataType::String)
        .map(|col| col.name().to_string())
        .collect();

    for name in string_cols {
        let ca = df.column(&name)?.str()?.clone();
        if let Some(days) = parse_column_as_dates(&ca) {
            let coerced = Column::new(name.as_str().into(), days).cast(&DataType::Date)?;
            df.with_column(coerced)?;
        }
    }

    Ok(df)
}

/// Try each format of the grammar against the whole column. Returns the
/// values as days-since-epoch under the first format that parses every
/// non-null value, or None if no single format covers the column.
fn parse_column_as_dates(ca: &StringChunked) -> Option<Vec<Option<i32>>> {
    // An all-null column carries no evidence of being date-like.
    if ca.len() == ca.null_count() {
        return None;
    }

    // 1970-01-01 in days from the common era
    const UNIX_EPOCH_CE_DAYS: i32 = 719_163;

    for format in DATE_FORMATS {
        let mut days = Vec::with_capacity(ca.len());
        let mut all_parsed = true;

        for value in ca.iter() {
            match value {
                None => days.push(None),
                Some(raw) => match NaiveDate::parse_from_str(raw.trim(), format) {
                    Ok(date) => days.push(Some(date.num_days_from_ce() - UNIX_EPOCH_CE_DAYS)),
                    Err(_) => {
                        all_parsed = false;
                        break;
                    }
                },
            }
        }

        if all_parsed {
            return Some(days);
        }
    }

    None
}
