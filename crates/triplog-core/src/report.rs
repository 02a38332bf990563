//! Report rows and text rendering.

use crate::aggregate::{Travel, TripLog};

/// One line of the final report, before formatting.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub driver: String,
    pub miles: f64,
    pub mph: f64,
}

/// Builds report rows in render order.
///
/// Only registered drivers appear, sorted by total miles descending;
/// ties keep registration order (the sort is stable). A driver with no
/// accepted trips gets a synthetic one-hour duration so the speed
/// division stays defined — the zero-miles branch of the formatter
/// renders before the speed is ever shown.
#[must_use]
pub fn report_rows(log: &TripLog) -> Vec<ReportRow> {
    let mut rows: Vec<ReportRow> = log
        .drivers()
        .iter()
        .map(|driver| {
            let travel = log.travel(driver).copied().unwrap_or(Travel {
                miles: 0.0,
                duration_hours: 1.0,
            });
            ReportRow {
                driver: driver.clone(),
                miles: travel.miles,
                mph: travel.miles / travel.duration_hours,
            }
        })
        .collect();
    rows.sort_by(|a, b| b.miles.total_cmp(&a.miles));
    rows
}

/// Formats one row, rounding half away from zero for display.
fn format_row(row: &ReportRow) -> String {
    // The zero check is on the exact accumulated value; rounding only
    // affects how a non-zero total is displayed.
    if row.miles == 0.0 {
        format!("{}: 0 miles", row.driver)
    } else {
        format!(
            "{}: {} miles @ {} mph",
            row.driver,
            row.miles.round(),
            row.mph.round()
        )
    }
}

/// Renders the full report: one line per registered driver, joined with
/// `\n`, no trailing newline.
#[must_use]
pub fn render(log: &TripLog) -> String {
    report_rows(log)
        .iter()
        .map(format_row)
        .collect::<Vec<_>>()
        .join("\n")
}
