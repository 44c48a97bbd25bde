//! Shared test fixtures and helpers

use polars::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// A seven-row raw-record table exercising every pipeline stage:
///
/// - row 0: valid, Active, with fillable gaps in Directors Remuneration,
///   Total Assets and Working Capital (incorporated 2010, year 2022)
/// - row 1: Account Year 1899, outside the plausible range
/// - row 2: Account Year 2030, outside the plausible range
/// - row 3: Account Year 2021 but accounts dated 2022, misaligned
/// - row 4: valid, Dissolved, fully populated
/// - row 5: valid year/date but Directors Remuneration unfillable
///   (the composite field is missing too), so selection drops the row
/// - row 6: misentered: Account Year 1800 with garbage in both date
///   fields; the year filter removes it before date coercion runs
#[allow(dead_code)]
pub fn create_raw_dataframe() -> DataFrame {
    df! {
        "Registered Number" => ["00000001", "00000002", "00000003", "00000004", "00000005", "00000006", "00000007"],
        "Account Year" => [2022i64, 1899, 2030, 2021, 2020, 2019, 1800],
        "Date of Incorporation" => ["2010-01-01", "1890-05-10", "2001-02-03", "2015-07-20", "2000-09-09", "2012-03-15", "n/a"],
        "Latest Accounts Date" => ["2022-06-30", "1899-06-30", "2030-12-31", "2022-03-31", "2020-11-30", "2019-08-31", "not a date"],
        "Trading Status" => ["Active", "Active", "Active", "Active", "Dissolved", "Active", "Active"],
        "UK SIC Code" => ["62020", "62020", "47110", "47110", "62020", "47110", "62020"],
        "Bank Postcode" => ["EC1A 1BB", "M1 1AE", "B33 8TH", "CR2 6XH", "DN55 1PT", "W1A 0AX", "L1 8JQ"],
        "Registered or Trading Postcode" => ["EC1A 1BB", "M1 1AE", "B33 8TH", "CR2 6XH", "DN55 1PT", "W1A 0AX", "L1 8JQ"],
        "EBITDA" => [100.0f64, 50.0, 60.0, 70.0, 80.0, 90.0, 10.0],
        "EBIT" => [95.0f64, 45.0, 55.0, 65.0, 75.0, 85.0, 9.0],
        "Directors Remuneration" => [None::<f64>, Some(10.0), Some(11.0), Some(12.0), Some(25.0), None, Some(1.0)],
        "EBITDA + Directors Remuneration" => [Some(150.0f64), Some(60.0), Some(71.0), Some(82.0), Some(105.0), None, Some(11.0)],
        "Profit Before Tax + Directors Remuneration" => [120.0f64, 40.0, 50.0, 60.0, 70.0, 80.0, 8.0],
        "Highest Paid Director " => [60.0f64, 10.0, 11.0, 12.0, 20.0, 30.0, 1.0],
        "Total Assets" => [None::<f64>, Some(400.0), Some(500.0), Some(600.0), Some(900.0), Some(450.0), Some(40.0)],
        "Total Current Assets" => [500.0f64, 250.0, 300.0, 350.0, 550.0, 280.0, 25.0],
        "Total Non Current Assets" => [300.0f64, 150.0, 200.0, 250.0, 350.0, 170.0, 15.0],
        "Total Current Liabilities" => [200.0f64, 100.0, 120.0, 140.0, 260.0, 110.0, 10.0],
        "Total Non Current Liabilities (Incl Provisions)" => [80.0f64, 40.0, 50.0, 60.0, 120.0, 45.0, 4.0],
        "Working Capital" => [None::<f64>, Some(150.0), Some(180.0), Some(210.0), Some(290.0), Some(170.0), Some(15.0)],
        "Wages" => [70.0f64, 30.0, 35.0, 40.0, 60.0, 45.0, 3.0],
        "Leasehold" => [10.0f64, 5.0, 6.0, 7.0, 12.0, 8.0, 0.5],
        "Bank Overdraft" => [5.0f64, 2.0, 3.0, 4.0, 6.0, 2.5, 0.2],
        "Capital Expenditure" => [20.0f64, 8.0, 9.0, 10.0, 25.0, 12.0, 1.0],
        "Director Loans (current)" => [0.0f64, 1.0, 0.0, 2.0, 0.0, 1.5, 0.0],
        "Director Loans (non-current)" => [0.0f64, 0.0, 1.0, 0.0, 3.0, 0.5, 0.0],
        "Cash at Bank" => [120.0f64, 60.0, 70.0, 80.0, 150.0, 65.0, 6.0],
        "Employees Remuneration" => [200.0f64, 90.0, 100.0, 110.0, 220.0, 95.0, 9.0],
        "Profit for the Year" => [55.0f64, 20.0, 25.0, 30.0, 45.0, 28.0, 2.0],
        "Retained Earnings" => [300.0f64, 120.0, 140.0, 160.0, 380.0, 130.0, 12.0],
        "Total Equity" => [350.0f64, 140.0, 160.0, 180.0, 420.0, 150.0, 14.0],
    }
    .unwrap()
}

/// Write a DataFrame to a temp CSV; the TempDir must be kept alive by
/// the caller for the file to survive.
#[allow(dead_code)]
pub fn create_temp_csv(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("raw_records.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();

    (temp_dir, csv_path)
}

/// Assert the DataFrame has no nulls anywhere.
#[allow(dead_code)]
pub fn assert_no_nulls(df: &DataFrame) {
    for col in df.get_columns() {
        assert_eq!(
            col.null_count(),
            0,
            "Column '{}' still contains nulls",
            col.name()
        );
    }
}

/// Assert none of the given columns survived.
#[allow(dead_code)]
pub fn assert_lacks_columns(df: &DataFrame, names: &[&str]) {
    for name in names {
        assert!(
            df.column(name).is_err(),
            "Column '{}' should have been dropped",
            name
        );
    }
}
