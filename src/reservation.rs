//! Reservation validity and quoting.
//!
//! Gates the final "reserve" action. A request is valid iff:
//! 1. its date is neither past nor unavailable,
//! 2. the end is after the start,
//! 3. the start is a legal start ([`start_options`]),
//! 4. the end is a legal end for that start ([`end_options`]).
//!
//! Validation only computes legality. Bookings may change between this
//! check and submission; the booking service must re-run the same check
//! when it commits.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::availability::{classify, DayStatus};
use crate::config::EngineConfig;
use crate::models::{TimeOfDay, VendorSchedule};
use crate::slots::{end_options, start_options};

/// A proposed reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationRequest {
    /// Event date.
    pub date: NaiveDate,
    /// Requested start.
    pub start_time: TimeOfDay,
    /// Requested end.
    pub end_time: TimeOfDay,
}

impl ReservationRequest {
    /// Creates a new request.
    pub fn new(date: NaiveDate, start_time: TimeOfDay, end_time: TimeOfDay) -> Self {
        Self {
            date,
            start_time,
            end_time,
        }
    }
}

/// Why a reservation request was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReservationError {
    /// The date is before today.
    #[error("{date} is in the past")]
    PastDate { date: NaiveDate },
    /// The vendor does not work on the date.
    #[error("vendor is not available on {date}")]
    DateUnavailable { date: NaiveDate },
    /// The end does not come after the start.
    #[error("end time {end} must be after start time {start}")]
    EndNotAfterStart { start: TimeOfDay, end: TimeOfDay },
    /// The start is outside open hours or inside an existing booking.
    #[error("start time {start} is not available on {date}")]
    StartUnavailable { date: NaiveDate, start: TimeOfDay },
    /// The end runs past closing time or into the next booking.
    #[error("end time {end} is not available for a {start} start on {date}")]
    EndUnavailable {
        date: NaiveDate,
        start: TimeOfDay,
        end: TimeOfDay,
    },
}

/// A validated reservation with its derived duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationQuote {
    /// Event date.
    pub date: NaiveDate,
    /// Start time.
    pub start_time: TimeOfDay,
    /// End time.
    pub end_time: TimeOfDay,
    /// Length of the reservation in minutes.
    pub duration_minutes: u16,
}

impl ReservationQuote {
    /// Duration in hours.
    #[inline]
    pub fn hours(&self) -> f64 {
        self.duration_minutes as f64 / 60.0
    }

    /// Price for an hourly rate: `rate × hours`.
    pub fn price(&self, rate_per_hour: f64) -> f64 {
        rate_per_hour * self.hours()
    }
}

/// Validates a request against a vendor snapshot.
///
/// Returns the quote for a legal request, or the first reason it fails.
pub fn validate_reservation(
    request: &ReservationRequest,
    schedule: &VendorSchedule,
    today: NaiveDate,
    config: &EngineConfig,
) -> Result<ReservationQuote, ReservationError> {
    let ReservationRequest {
        date,
        start_time: start,
        end_time: end,
    } = *request;

    match classify(
        date,
        &schedule.business_hours,
        &schedule.exceptions,
        &schedule.bookings,
        today,
    ) {
        DayStatus::Past => return Err(ReservationError::PastDate { date }),
        DayStatus::Unavailable => return Err(ReservationError::DateUnavailable { date }),
        DayStatus::Available | DayStatus::PartiallyBooked => {}
    }

    if end <= start {
        return Err(ReservationError::EndNotAfterStart { start, end });
    }

    let starts = start_options(date, &schedule.business_hours, &schedule.bookings, config);
    if !starts.contains(&start) {
        return Err(ReservationError::StartUnavailable { date, start });
    }

    let ends = end_options(
        date,
        start,
        &schedule.business_hours,
        &schedule.bookings,
        config,
    );
    if !ends.contains(&end) {
        return Err(ReservationError::EndUnavailable { date, start, end });
    }

    let quote = ReservationQuote {
        date,
        start_time: start,
        end_time: end,
        duration_minutes: end.to_minutes() - start.to_minutes(),
    };
    debug!(%date, %start, %end, minutes = quote.duration_minutes, "reservation is valid");
    Ok(quote)
}

/// Boolean form of [`validate_reservation`].
pub fn is_valid_reservation(
    request: &ReservationRequest,
    schedule: &VendorSchedule,
    today: NaiveDate,
    config: &EngineConfig,
) -> bool {
    validate_reservation(request, schedule, today, config).is_ok()
}
