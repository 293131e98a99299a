//! Input validation for vendor schedules.
//!
//! Checks the integrity of fetched vendor data. The engine itself is
//! total over malformed input (it degrades to the most restrictive
//! reading), so these checks are advisory: they tell an admin panel or a
//! data pipeline what the engine will end up ignoring. Detects:
//! - Weekday indices outside 0..6
//! - Duplicate weekday rows
//! - Open weekdays with missing or inverted hours
//! - Duplicate exception dates
//! - Bookings with a partial or inverted time interval
//! - Active bookings whose intervals overlap

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use tracing::warn;

use crate::models::{Booking, TimeWindow, VendorSchedule};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Weekday index is not in 0..6.
    DayOutOfRange,
    /// Two business-hours rows share a weekday.
    DuplicateWeekday,
    /// An open weekday lacks times or closes before it opens.
    InvalidHours,
    /// Two exceptions share a date (the last one wins).
    DuplicateException,
    /// A booking has only one time, or ends before it starts.
    InvalidBookingInterval,
    /// Two active bookings on the same date overlap.
    OverlappingBookings,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a vendor schedule.
///
/// Checks:
/// 1. Every weekday index is in 0..6
/// 2. No duplicate weekday rows
/// 3. Open weekdays have `open < close`
/// 4. No duplicate exception dates
/// 5. Booking intervals are complete and increasing (or absent entirely)
/// 6. Active bookings do not overlap
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(schedule: &VendorSchedule) -> ValidationResult {
    let mut errors = Vec::new();

    let mut weekdays = HashSet::new();
    for h in &schedule.business_hours {
        if h.day_of_week > 6 {
            errors.push(ValidationError::new(
                ValidationErrorKind::DayOutOfRange,
                format!("Weekday index {} is out of range", h.day_of_week),
            ));
        }
        if !weekdays.insert(h.day_of_week) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateWeekday,
                format!("Duplicate business hours for weekday {}", h.day_of_week),
            ));
        }
        if h.is_available && h.open_window().is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidHours,
                format!(
                    "Weekday {} is open but has no valid open/close window",
                    h.day_of_week
                ),
            ));
        }
    }

    let mut exception_dates = HashSet::new();
    for e in &schedule.exceptions {
        if !exception_dates.insert(e.date) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateException,
                format!("Duplicate exception for {}", e.date),
            ));
        }
    }

    for b in &schedule.bookings {
        if !b.is_full_day() && b.interval().is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBookingInterval,
                format!("Booking on {} has an incomplete or inverted interval", b.event_date),
            ));
        }
    }

    errors.extend(detect_overlaps(&schedule.bookings));

    if errors.is_empty() {
        Ok(())
    } else {
        warn!(count = errors.len(), "vendor schedule failed validation");
        Err(errors)
    }
}

/// Finds pairs of active bookings on the same date whose intervals overlap.
fn detect_overlaps(bookings: &[Booking]) -> Vec<ValidationError> {
    let mut by_date: HashMap<NaiveDate, Vec<TimeWindow>> = HashMap::new();
    for b in bookings.iter().filter(|b| b.is_active()) {
        if let Some(w) = b.interval() {
            by_date.entry(b.event_date).or_default().push(w);
        }
    }

    let mut errors = Vec::new();
    for (date, mut windows) in by_date {
        windows.sort_by_key(|w| w.start_min);
        for pair in windows.windows(2) {
            if pair[0].overlaps(&pair[1]) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::OverlappingBookings,
                    format!(
                        "Active bookings on {} overlap ({}..{} and {}..{} minutes)",
                        date, pair[0].start_min, pair[0].end_min, pair[1].start_min, pair[1].end_min
                    ),
                ));
            }
        }
    }
    errors
}
