//! Pipeline summary report generation

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;
use std::time::Duration;

use crate::pipeline::select::{COLUMN_DROPS, CORRELATION_THRESHOLD};

/// Per-stage counts for one pipeline run. Row losses are only observable
/// in aggregate; individual exclusions are silent by design.
#[derive(Debug, Default)]
pub struct PipelineSummary {
    pub rows_loaded: usize,
    pub columns_loaded: usize,
    pub rows_after_filter: usize,
    pub rows_final: usize,
    pub columns_final: usize,
    pub load_time: Option<Duration>,
}

impl PipelineSummary {
    pub fn rows_dropped_by_filter(&self) -> usize {
        self.rows_loaded.saturating_sub(self.rows_after_filter)
    }

    pub fn rows_dropped_as_incomplete(&self) -> usize {
        self.rows_after_filter.saturating_sub(self.rows_final)
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("PIPELINE SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("Rows loaded"),
            Cell::new(self.rows_loaded),
        ]);
        table.add_row(vec![
            Cell::new("Rows dropped (year / date filter)"),
            Cell::new(self.rows_dropped_by_filter()).fg(loss_color(self.rows_dropped_by_filter())),
        ]);
        table.add_row(vec![
            Cell::new("Rows dropped (incomplete)"),
            Cell::new(self.rows_dropped_as_incomplete())
                .fg(loss_color(self.rows_dropped_as_incomplete())),
        ]);
        table.add_row(vec![
            Cell::new("Rows in feature table"),
            Cell::new(self.rows_final).fg(Color::Green),
        ]);
        table.add_row(vec![
            Cell::new("Columns loaded"),
            Cell::new(self.columns_loaded),
        ]);
        table.add_row(vec![
            Cell::new("Columns in feature table"),
            Cell::new(self.columns_final).fg(Color::Green),
        ]);

        if let Some(elapsed) = self.load_time {
            table.add_row(vec![
                Cell::new("Load time"),
                Cell::new(format!("{:.2}s", elapsed.as_secs_f64())),
            ]);
        }

        println!("{table}");
        self.display_drop_table();
    }

    /// List the frozen drop table grouped by reason.
    fn display_drop_table(&self) {
        println!();
        println!(
            "    {} Dropped columns (fixed list, correlation threshold {:.2}):",
            style("✧").cyan(),
            CORRELATION_THRESHOLD
        );
        for (name, reason) in COLUMN_DROPS {
            println!(
                "      {} {} {}",
                style("-").dim(),
                name,
                style(format!("[{}]", reason.label())).dim()
            );
        }
    }
}

fn loss_color(count: usize) -> Color {
    if count == 0 {
        Color::White
    } else {
        Color::Yellow
    }
}
