//! Existing reservations.
//!
//! Bookings are created by the external booking/payment flow and are
//! read-only here. Only bookings in an active status hold time.
//!
//! # Granularity
//! A booking without start and end times is a full-day block. It makes
//! its date partially booked but does not mark individual slots; only a
//! booking with a usable `[start, end)` interval blocks slots.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{TimeOfDay, TimeWindow};

/// Lifecycle status of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Awaiting vendor response.
    Pending,
    /// Accepted by the vendor.
    Confirmed,
    /// Payment captured.
    Paid,
    /// Approved by an administrator.
    Approved,
    /// Cancelled by either party.
    Cancelled,
    /// Declined by the vendor.
    Declined,
    /// Event has taken place.
    Completed,
    /// Any status this engine does not know.
    #[serde(other)]
    Other,
}

impl BookingStatus {
    /// Whether a booking in this status occupies time.
    #[inline]
    pub fn is_active(self) -> bool {
        matches!(
            self,
            Self::Pending | Self::Confirmed | Self::Paid | Self::Approved
        )
    }

    /// Parses a wire status label, case-insensitively.
    ///
    /// Unknown labels map to [`BookingStatus::Other`].
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "pending" => Self::Pending,
            "confirmed" => Self::Confirmed,
            "paid" => Self::Paid,
            "approved" => Self::Approved,
            "cancelled" | "canceled" => Self::Cancelled,
            "declined" | "rejected" => Self::Declined,
            "completed" => Self::Completed,
            _ => Self::Other,
        }
    }
}

/// An existing reservation on a vendor's calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Calendar date of the event.
    pub event_date: NaiveDate,
    /// Start time, if known.
    pub start_time: Option<TimeOfDay>,
    /// End time, if known.
    pub end_time: Option<TimeOfDay>,
    /// Lifecycle status.
    pub status: BookingStatus,
}

impl Booking {
    /// A confirmed booking over `[start, end)`.
    pub fn timed(event_date: NaiveDate, start_time: TimeOfDay, end_time: TimeOfDay) -> Self {
        Self {
            event_date,
            start_time: Some(start_time),
            end_time: Some(end_time),
            status: BookingStatus::Confirmed,
        }
    }

    /// A confirmed booking that occupies the whole day.
    pub fn full_day(event_date: NaiveDate) -> Self {
        Self {
            event_date,
            start_time: None,
            end_time: None,
            status: BookingStatus::Confirmed,
        }
    }

    /// Sets the status.
    pub fn with_status(mut self, status: BookingStatus) -> Self {
        self.status = status;
        self
    }

    /// Whether this booking occupies time.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Whether this booking carries no time information at all.
    #[inline]
    pub fn is_full_day(&self) -> bool {
        self.start_time.is_none() && self.end_time.is_none()
    }

    /// The booked `[start, end)` interval in minutes.
    ///
    /// `None` when either bound is missing or the interval is empty.
    pub fn interval(&self) -> Option<TimeWindow> {
        let start = self.start_time?.to_minutes();
        let end = self.end_time?.to_minutes();
        (start < end).then(|| TimeWindow::new(start, end))
    }

    /// Whether the booking's interval contains the given minute.
    pub fn blocks_minute(&self, minute: u16) -> bool {
        self.interval().is_some_and(|w| w.contains(minute))
    }
}

/// Active bookings on `date`, in input order.
pub fn active_on(date: NaiveDate, bookings: &[Booking]) -> impl Iterator<Item = &Booking> {
    bookings
        .iter()
        .filter(move |b| b.event_date == date && b.is_active())
}
