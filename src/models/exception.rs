//! Per-date availability overrides.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A vendor override for one calendar date.
///
/// Only `is_available = false` changes classification: exceptions veto an
/// open weekday but never reopen a closed one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityException {
    /// The overridden date.
    pub date: NaiveDate,
    /// Whether the vendor is available on that date.
    pub is_available: bool,
}

impl AvailabilityException {
    /// Blocks out a date.
    pub fn blocked(date: NaiveDate) -> Self {
        Self {
            date,
            is_available: false,
        }
    }

    /// Marks a date as open.
    pub fn open(date: NaiveDate) -> Self {
        Self {
            date,
            is_available: true,
        }
    }
}

/// Finds the exception for `date`.
///
/// If several rows share the date, the last one wins.
pub fn exception_for(
    date: NaiveDate,
    exceptions: &[AvailabilityException],
) -> Option<&AvailabilityException> {
    exceptions.iter().rev().find(|e| e.date == date)
}
