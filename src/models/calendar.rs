//! Minute windows and the vendor schedule snapshot.
//!
//! # Time Model
//! Windows are measured in minutes since midnight of a single calendar
//! date. No window crosses midnight.
//!
//! # Precedence
//! A date is open iff its weekday row is available AND no exception for
//! that date marks it unavailable. Bookings never close a date; they only
//! occupy parts of it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::booking::active_on;
use super::business_hours::hours_for;
use super::exception::exception_for;
use super::{AvailabilityException, Booking, BusinessHours};

/// A minute interval [start, end).
///
/// Half-open interval: includes start, excludes end.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeWindow {
    /// Interval start (minutes since midnight, inclusive).
    pub start_min: u16,
    /// Interval end (minutes since midnight, exclusive).
    pub end_min: u16,
}

impl TimeWindow {
    /// Creates a new time window.
    pub fn new(start_min: u16, end_min: u16) -> Self {
        Self { start_min, end_min }
    }

    /// Length of this window in minutes.
    #[inline]
    pub fn duration_min(&self) -> u16 {
        self.end_min.saturating_sub(self.start_min)
    }

    /// Whether a minute falls within this window.
    #[inline]
    pub fn contains(&self, minute: u16) -> bool {
        minute >= self.start_min && minute < self.end_min
    }

    /// Whether two windows overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_min < other.end_min && other.start_min < self.end_min
    }
}

/// Snapshot of everything the engine knows about one vendor.
///
/// Combines the recurring weekly hours with per-date exceptions and the
/// current booking list. Snapshots are immutable inputs; callers rebuild
/// them after each data refetch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VendorSchedule {
    /// One row per weekday.
    pub business_hours: Vec<BusinessHours>,
    /// Per-date overrides (last row for a date wins).
    pub exceptions: Vec<AvailabilityException>,
    /// Existing bookings, any status.
    pub bookings: Vec<Booking>,
}

impl VendorSchedule {
    /// Creates an empty schedule (every weekday closed).
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a weekday row.
    pub fn with_hours(mut self, hours: BusinessHours) -> Self {
        self.business_hours.push(hours);
        self
    }

    /// Adds a date exception.
    pub fn with_exception(mut self, exception: AvailabilityException) -> Self {
        self.exceptions.push(exception);
        self
    }

    /// Adds a booking.
    pub fn with_booking(mut self, booking: Booking) -> Self {
        self.bookings.push(booking);
        self
    }

    /// Weekday row governing `date`.
    pub fn hours_for(&self, date: NaiveDate) -> Option<&BusinessHours> {
        hours_for(date, &self.business_hours)
    }

    /// Exception for `date` (last row wins).
    pub fn exception_for(&self, date: NaiveDate) -> Option<&AvailabilityException> {
        exception_for(date, &self.exceptions)
    }

    /// Active bookings on `date`.
    pub fn active_bookings_on(&self, date: NaiveDate) -> impl Iterator<Item = &Booking> {
        active_on(date, &self.bookings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BookingStatus, TimeOfDay};

    fn t(h: u8, m: u8) -> TimeOfDay {
        TimeOfDay::new(h, m).unwrap()
    }

    #[test]
    fn test_time_window() {
        let w = TimeWindow::new(600, 720);
        assert_eq!(w.duration_min(), 120);
        assert!(w.contains(600));
        assert!(w.contains(719));
        assert!(!w.contains(720)); // exclusive end
        assert!(!w.contains(540));
    }

    #[test]
    fn test_time_window_overlap() {
        let a = TimeWindow::new(600, 720);
        let b = TimeWindow::new(690, 780);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        let c = TimeWindow::new(720, 780); // touching but not overlapping
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_schedule_lookups() {
        let sat = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let schedule = VendorSchedule::new()
            .with_hours(BusinessHours::open(6, t(9, 0), t(22, 0)))
            .with_exception(AvailabilityException::blocked(sat))
            .with_booking(Booking::timed(sat, t(10, 0), t(12, 0)))
            .with_booking(
                Booking::timed(sat, t(14, 0), t(15, 0)).with_status(BookingStatus::Declined),
            );

        assert_eq!(schedule.hours_for(sat).unwrap().day_of_week, 6);
        assert!(!schedule.exception_for(sat).unwrap().is_available);
        assert_eq!(schedule.active_bookings_on(sat).count(), 1);
    }
}
