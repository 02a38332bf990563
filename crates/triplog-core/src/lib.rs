//! Core domain logic for the trip log reporter.
//!
//! This crate contains the pure pipeline:
//! - Clock & speed utilities: HH:MM validation, durations, plausibility bounds
//! - Record parsing: one text line to a typed record, a filter, or an error
//! - Aggregation: folding records into per-driver totals
//! - Reporting: ordered, formatted summary lines
//!
//! Nothing here performs I/O or terminates the process; every fallible
//! operation returns a `Result` for the caller to act on.

pub mod aggregate;
pub mod clock;
pub mod record;
pub mod report;

pub use aggregate::{FoldError, Travel, TripLog};
pub use clock::{ClockTime, ClockTimeError, duration_hours, is_valid_speed};
pub use record::{ParseError, Parsed, Record, Trip, parse_line};
pub use report::{ReportRow, render, report_rows};
