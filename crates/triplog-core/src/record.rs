//! Line-level record parsing and the trip plausibility filter.

use thiserror::Error;

use crate::clock::{self, ClockTime};

/// Parse errors for a single input line.
///
/// Each of these is fatal to the whole run: a structural problem in the
/// input invalidates the report, so callers stop at the first error
/// rather than skipping the line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line's first token was neither `Driver` nor `Trip`.
    #[error("every line must start with \"Driver\" or \"Trip\", got {kind:?}")]
    UnknownRecordKind { kind: String },

    /// A `Driver` line with the wrong number of tokens.
    #[error("invalid driver entry: {line}")]
    MalformedDriverRecord { line: String },

    /// A `Trip` line with the wrong token count, a bad time, or
    /// non-numeric mileage.
    #[error("invalid trip entry: {line}")]
    MalformedTripRecord { line: String },
}

/// A parsed input record, ready for aggregation.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    /// Registers a driver by name.
    Driver(String),
    /// An accepted trip.
    Trip(Trip),
}

/// One accepted journey, reduced to what aggregation needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub driver: String,
    pub duration_hours: f64,
    pub miles: f64,
}

/// Outcome of parsing one line.
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed {
    /// The line produced a record to fold.
    Record(Record),
    /// Nothing to fold: a blank line, or a well-formed trip dropped for
    /// implausible average speed or non-positive duration.
    Filtered,
}

/// Parses one raw line into a [`Parsed`] outcome.
///
/// The line is tokenized on whitespace. Blank lines are ignored. A trip
/// whose average speed falls outside the plausible range is not an
/// error; it is reported as [`Parsed::Filtered`] so the caller can keep
/// going.
pub fn parse_line(line: &str) -> Result<Parsed, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.first().copied() {
        None => Ok(Parsed::Filtered),
        Some("Driver") => parse_driver(&tokens).map(Parsed::Record),
        Some("Trip") => parse_trip(&tokens),
        Some(kind) => Err(ParseError::UnknownRecordKind {
            kind: kind.to_string(),
        }),
    }
}

fn parse_driver(tokens: &[&str]) -> Result<Record, ParseError> {
    let &[_, name] = tokens else {
        return Err(ParseError::MalformedDriverRecord {
            line: tokens.join(" "),
        });
    };
    Ok(Record::Driver(name.to_string()))
}

fn parse_trip(tokens: &[&str]) -> Result<Parsed, ParseError> {
    let malformed = || ParseError::MalformedTripRecord {
        line: tokens.join(" "),
    };

    let &[_, driver, start, end, miles] = tokens else {
        return Err(malformed());
    };
    let start: ClockTime = start.parse().map_err(|_| malformed())?;
    let end: ClockTime = end.parse().map_err(|_| malformed())?;
    let miles: f64 = miles.parse().map_err(|_| malformed())?;
    if miles.is_nan() {
        return Err(malformed());
    }

    // The positivity check must come before the division so a same-time
    // trip cannot fault.
    let duration_hours = clock::duration_hours(start, end);
    if duration_hours > 0.0 && clock::is_valid_speed(miles / duration_hours) {
        Ok(Parsed::Record(Record::Trip(Trip {
            driver: driver.to_string(),
            duration_hours,
            miles,
        })))
    } else {
        tracing::debug!(driver, duration_hours, miles, "dropping implausible trip");
        Ok(Parsed::Filtered)
    }
}
