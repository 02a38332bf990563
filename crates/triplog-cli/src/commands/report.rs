//! The report pipeline: read the log, fold it, write the summary.

use std::fs;
use std::io::Write;
use std::path::Path;

use chrono::Utc;
use serde::Serialize;
use triplog_core::{Parsed, TripLog, parse_line, render, report_rows};

use crate::Config;
use crate::error::AppError;

/// Runs the pipeline against `input` and writes the report to `writer`.
///
/// The whole file is read up front; parsing stops at the first fatal
/// error, and nothing is written in that case.
pub fn run<W: Write>(
    writer: &mut W,
    config: &Config,
    input: &Path,
    json: bool,
) -> Result<(), AppError> {
    let path = config.resolve_input(input);
    let contents = fs::read_to_string(&path).map_err(|source| AppError::FileUnreadable {
        path: path.clone(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "read input");

    let log = fold_lines(&contents)?;
    tracing::debug!(drivers = log.drivers().len(), "folded records");

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&JsonReport::new(&log))?)?;
    } else {
        writeln!(writer, "{}", render(&log))?;
    }
    Ok(())
}

/// Folds every non-blank line of the input into a [`TripLog`].
fn fold_lines(contents: &str) -> Result<TripLog, AppError> {
    let mut log = TripLog::default();
    for line in contents.lines() {
        match parse_line(line)? {
            Parsed::Record(record) => log.apply(record)?,
            Parsed::Filtered => {}
        }
    }
    Ok(log)
}

// ========== JSON Output ==========

/// JSON report structure.
#[derive(Debug, Serialize)]
struct JsonReport {
    generated_at: String,
    drivers: Vec<JsonDriver>,
}

/// One driver's row, carrying the raw (unrounded) totals in report
/// order.
#[derive(Debug, Serialize)]
struct JsonDriver {
    name: String,
    miles: f64,
    mph: f64,
}

impl JsonReport {
    fn new(log: &TripLog) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            drivers: report_rows(log)
                .into_iter()
                .map(|row| JsonDriver {
                    name: row.driver,
                    miles: row.miles,
                    mph: row.mph,
                })
                .collect(),
        }
    }
}
