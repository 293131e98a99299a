//! Wire records from the data-fetch layer.
//!
//! Rows arrive as camelCase JSON with loosely typed fields: times may be
//! clock strings or ISO timestamps, dates may carry a time suffix, and
//! statuses are free-form labels. Each record normalizes to its model type
//! immediately so the rest of the engine sees one canonical shape.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{
    parse_time, AvailabilityException, Booking, BookingStatus, BusinessHours, RawTime,
    VendorSchedule,
};

/// Parses the `YYYY-MM-DD` prefix of a wire date.
///
/// `"2024-06-01"` and `"2024-06-01T00:00:00.000Z"` both denote 2024-06-01;
/// the time suffix is ignored rather than shifted through a timezone.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let prefix = value.trim().get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

/// A business-hours row as fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessHoursRecord {
    pub day_of_week: u8,
    #[serde(default)]
    pub is_available: bool,
    #[serde(default)]
    pub open_time: Option<RawTime>,
    #[serde(default)]
    pub close_time: Option<RawTime>,
}

impl BusinessHoursRecord {
    /// Normalizes time fields. Unparseable times become `None`.
    pub fn normalize(&self) -> BusinessHours {
        BusinessHours {
            day_of_week: self.day_of_week,
            is_available: self.is_available,
            open_time: self.open_time.as_ref().and_then(parse_time),
            close_time: self.close_time.as_ref().and_then(parse_time),
        }
    }
}

/// An exception row as fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExceptionRecord {
    pub date: String,
    #[serde(default)]
    pub is_available: bool,
}

impl ExceptionRecord {
    /// Normalizes the date. `None` if the date is unreadable.
    pub fn normalize(&self) -> Option<AvailabilityException> {
        Some(AvailabilityException {
            date: parse_calendar_date(&self.date)?,
            is_available: self.is_available,
        })
    }
}

/// A booking row as fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub event_date: String,
    #[serde(default)]
    pub start_time: Option<RawTime>,
    #[serde(default)]
    pub end_time: Option<RawTime>,
    #[serde(default)]
    pub status: String,
}

impl BookingRecord {
    /// Normalizes date, times, and status. `None` if the date is unreadable.
    pub fn normalize(&self) -> Option<Booking> {
        Some(Booking {
            event_date: parse_calendar_date(&self.event_date)?,
            start_time: self.start_time.as_ref().and_then(parse_time),
            end_time: self.end_time.as_ref().and_then(parse_time),
            status: BookingStatus::from_label(&self.status),
        })
    }
}

/// Top-level document holding all three collections for one vendor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDocument {
    #[serde(default)]
    pub business_hours: Vec<BusinessHoursRecord>,
    #[serde(default)]
    pub exceptions: Vec<ExceptionRecord>,
    #[serde(default)]
    pub bookings: Vec<BookingRecord>,
}

impl VendorSchedule {
    /// Builds a snapshot from fetched rows.
    ///
    /// Exceptions and bookings whose date cannot be read are dropped: they
    /// cannot be attributed to any calendar cell.
    pub fn from_records(
        business_hours: &[BusinessHoursRecord],
        exceptions: &[ExceptionRecord],
        bookings: &[BookingRecord],
    ) -> Self {
        let business_hours = business_hours.iter().map(|r| r.normalize()).collect();

        let exceptions = exceptions
            .iter()
            .filter_map(|r| {
                let normalized = r.normalize();
                if normalized.is_none() {
                    warn!(date = %r.date, "dropping exception with unreadable date");
                }
                normalized
            })
            .collect();

        let bookings = bookings
            .iter()
            .filter_map(|r| {
                let normalized = r.normalize();
                if normalized.is_none() {
                    warn!(event_date = %r.event_date, "dropping booking with unreadable date");
                }
                normalized
            })
            .collect();

        Self {
            business_hours,
            exceptions,
            bookings,
        }
    }

    /// Parses a `{ businessHours, exceptions, bookings }` JSON document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let doc: ScheduleDocument = serde_json::from_str(json)?;
        Ok(Self::from_records(
            &doc.business_hours,
            &doc.exceptions,
            &doc.bookings,
        ))
    }
}
