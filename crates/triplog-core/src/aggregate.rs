//! Folding parsed records into per-driver totals.

use std::collections::HashMap;

use thiserror::Error;

use crate::record::{Record, Trip};

/// Aggregation errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FoldError {
    /// A `Driver` record re-registered an existing name.
    #[error("duplicate driver: {name}")]
    DuplicateDriver { name: String },
}

/// Accumulated miles and time for one driver.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Travel {
    pub miles: f64,
    pub duration_hours: f64,
}

/// Fold state: the registered drivers plus per-driver travel totals.
///
/// Registration order is preserved because it is observable — it is the
/// tie-break when the report sorts drivers with equal mileage. Trips
/// accumulate for any driver name, registered or not; unregistered
/// accumulations simply never reach the report.
#[derive(Debug, Clone, Default)]
pub struct TripLog {
    drivers: Vec<String>,
    travel: HashMap<String, Travel>,
}

impl TripLog {
    /// Applies one record to the state.
    pub fn apply(&mut self, record: Record) -> Result<(), FoldError> {
        match record {
            Record::Driver(name) => {
                if self.drivers.contains(&name) {
                    return Err(FoldError::DuplicateDriver { name });
                }
                self.drivers.push(name);
            }
            Record::Trip(Trip {
                driver,
                duration_hours,
                miles,
            }) => {
                let entry = self.travel.entry(driver).or_default();
                entry.miles += miles;
                entry.duration_hours += duration_hours;
            }
        }
        Ok(())
    }

    /// Folds a whole sequence of records, stopping at the first error.
    pub fn fold<I>(records: I) -> Result<Self, FoldError>
    where
        I: IntoIterator<Item = Record>,
    {
        let mut log = Self::default();
        for record in records {
            log.apply(record)?;
        }
        Ok(log)
    }

    /// Registered driver names in registration order.
    #[must_use]
    pub fn drivers(&self) -> &[String] {
        &self.drivers
    }

    /// Travel totals for a driver, if any trip has been accepted for it.
    #[must_use]
    pub fn travel(&self, driver: &str) -> Option<&Travel> {
        self.travel.get(driver)
    }
}
