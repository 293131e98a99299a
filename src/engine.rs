//! Configured entry point over a vendor snapshot.
//!
//! [`AvailabilityEngine`] binds an [`EngineConfig`] once and exposes every
//! availability operation against a [`VendorSchedule`]. It holds no state
//! besides the configuration, so one engine can serve any number of
//! vendors and threads.

use chrono::NaiveDate;

use crate::availability::{self, DayStatus};
use crate::config::EngineConfig;
use crate::models::{TimeOfDay, VendorSchedule};
use crate::reservation::{self, ReservationError, ReservationQuote, ReservationRequest};
use crate::slots::{self, DerivedSlot};

/// Availability engine.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use u_booking::availability::DayStatus;
/// use u_booking::engine::AvailabilityEngine;
/// use u_booking::models::{Booking, BusinessHours, TimeOfDay, VendorSchedule};
/// use u_booking::reservation::ReservationRequest;
///
/// let t = |h, m| TimeOfDay::new(h, m).unwrap();
/// let saturday = NaiveDate::from_ymd_opt(2024, 6, 8).unwrap();
/// let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
///
/// let schedule = VendorSchedule::new()
///     .with_hours(BusinessHours::open(6, t(9, 0), t(22, 0)))
///     .with_booking(Booking::timed(saturday, t(16, 0), t(17, 0)));
///
/// let engine = AvailabilityEngine::new();
/// assert_eq!(engine.classify(&schedule, saturday, today), DayStatus::PartiallyBooked);
///
/// let ends = engine.end_options(&schedule, saturday, t(14, 0));
/// assert_eq!(ends.last(), Some(&t(16, 0)));
///
/// let request = ReservationRequest::new(saturday, t(14, 0), t(16, 0));
/// let quote = engine.validate(&schedule, &request, today).unwrap();
/// assert_eq!(quote.price(100.0), 200.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AvailabilityEngine {
    config: EngineConfig,
}

impl AvailabilityEngine {
    /// Creates an engine with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Classifies one date.
    pub fn classify(&self, schedule: &VendorSchedule, date: NaiveDate, today: NaiveDate) -> DayStatus {
        availability::classify(
            date,
            &schedule.business_hours,
            &schedule.exceptions,
            &schedule.bookings,
            today,
        )
    }

    /// Classifies every date of a month.
    pub fn classify_month(
        &self,
        schedule: &VendorSchedule,
        year: i32,
        month: u32,
        today: NaiveDate,
    ) -> Vec<(NaiveDate, DayStatus)> {
        availability::classify_month(year, month, schedule, today)
    }

    /// First selectable date within `horizon_days` of `from`.
    pub fn next_open_date(
        &self,
        schedule: &VendorSchedule,
        from: NaiveDate,
        horizon_days: u32,
        today: NaiveDate,
    ) -> Option<NaiveDate> {
        availability::next_open_date(from, horizon_days, schedule, today)
    }

    /// Slot grid for a date.
    pub fn generate_slots(&self, schedule: &VendorSchedule, date: NaiveDate) -> Vec<DerivedSlot> {
        slots::generate_slots(date, &schedule.business_hours, &schedule.bookings, &self.config)
    }

    /// Legal start times for a date.
    pub fn start_options(&self, schedule: &VendorSchedule, date: NaiveDate) -> Vec<TimeOfDay> {
        slots::start_options(date, &schedule.business_hours, &schedule.bookings, &self.config)
    }

    /// Legal end times for a chosen start.
    pub fn end_options(
        &self,
        schedule: &VendorSchedule,
        date: NaiveDate,
        start: TimeOfDay,
    ) -> Vec<TimeOfDay> {
        slots::end_options(
            date,
            start,
            &schedule.business_hours,
            &schedule.bookings,
            &self.config,
        )
    }

    /// Validates a reservation request.
    pub fn validate(
        &self,
        schedule: &VendorSchedule,
        request: &ReservationRequest,
        today: NaiveDate,
    ) -> Result<ReservationQuote, ReservationError> {
        reservation::validate_reservation(request, schedule, today, &self.config)
    }

    /// Whether a reservation request is valid.
    pub fn is_valid(
        &self,
        schedule: &VendorSchedule,
        request: &ReservationRequest,
        today: NaiveDate,
    ) -> bool {
        reservation::is_valid_reservation(request, schedule, today, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AvailabilityException, Booking, BusinessHours};

    fn t(h: u8, m: u8) -> TimeOfDay {
        TimeOfDay::new(h, m).unwrap()
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn sample_schedule() -> VendorSchedule {
        let json = r#"{
            "businessHours": [
                {"dayOfWeek": 0, "isAvailable": false},
                {"dayOfWeek": 5, "isAvailable": true, "openTime": "10:00:00", "closeTime": "20:00:00"},
                {"dayOfWeek": 6, "isAvailable": true, "openTime": "09:00", "closeTime": "22:00"}
            ],
            "exceptions": [{"date": "2024-06-15", "isAvailable": false}],
            "bookings": [
                {"eventDate": "2024-06-08", "startTime": "10:00", "endTime": "12:00", "status": "confirmed"},
                {"eventDate": "2024-06-08", "startTime": "18:00", "endTime": "20:00", "status": "cancelled"},
                {"eventDate": "2024-06-07", "status": "paid"}
            ]
        }"#;
        VendorSchedule::from_json(json).unwrap()
    }

    #[test]
    fn test_engine_end_to_end() {
        let engine = AvailabilityEngine::new();
        let schedule = sample_schedule();
        let today = d(2024, 6, 1);

        assert_eq!(engine.classify(&schedule, d(2024, 6, 8), today), DayStatus::PartiallyBooked);
        assert_eq!(engine.classify(&schedule, d(2024, 6, 7), today), DayStatus::PartiallyBooked);
        assert_eq!(engine.classify(&schedule, d(2024, 6, 15), today), DayStatus::Unavailable);
        assert_eq!(engine.classify(&schedule, d(2024, 6, 22), today), DayStatus::Available);
        assert_eq!(engine.classify(&schedule, d(2024, 6, 9), today), DayStatus::Unavailable);

        let slots = engine.generate_slots(&schedule, d(2024, 6, 8));
        let booked: Vec<TimeOfDay> = slots.iter().filter(|s| s.is_booked).map(|s| s.time).collect();
        assert_eq!(booked, vec![t(10, 0), t(10, 30), t(11, 0), t(11, 30)]);

        // Full-day block on Friday the 7th leaves every slot free
        let friday = engine.generate_slots(&schedule, d(2024, 6, 7));
        assert_eq!(friday.len(), 21);
        assert!(friday.iter().all(|s| !s.is_booked));

        let starts = engine.start_options(&schedule, d(2024, 6, 8));
        assert_eq!(&starts[..3], &[t(9, 0), t(9, 30), t(12, 0)]);

        let ends = engine.end_options(&schedule, d(2024, 6, 8), t(9, 0));
        assert_eq!(ends, vec![t(9, 30), t(10, 0)]);

        let request = ReservationRequest::new(d(2024, 6, 8), t(18, 0), t(20, 0));
        assert!(engine.is_valid(&schedule, &request, today));
    }

    #[test]
    fn test_engine_month_and_next_open() {
        let engine = AvailabilityEngine::new();
        let schedule = sample_schedule().with_exception(AvailabilityException::blocked(d(2024, 6, 21)));
        let today = d(2024, 6, 1);

        let june = engine.classify_month(&schedule, 2024, 6, today);
        let open: Vec<NaiveDate> = june
            .iter()
            .filter(|(_, s)| s.is_selectable())
            .map(|(date, _)| *date)
            .collect();
        // Fridays and Saturdays, minus the blocked 15th and 21st
        assert_eq!(
            open,
            vec![
                d(2024, 6, 1),
                d(2024, 6, 7),
                d(2024, 6, 8),
                d(2024, 6, 14),
                d(2024, 6, 22),
                d(2024, 6, 28),
                d(2024, 6, 29),
            ]
        );

        assert_eq!(
            engine.next_open_date(&schedule, d(2024, 6, 15), 30, today),
            Some(d(2024, 6, 22))
        );
    }

    #[test]
    fn test_engine_with_config() {
        let config = EngineConfig::new().with_slot_minutes(60);
        let engine = AvailabilityEngine::new().with_config(config.clone());
        assert_eq!(engine.config(), &config);

        let schedule = VendorSchedule::new()
            .with_hours(BusinessHours::open(6, t(9, 0), t(12, 0)))
            .with_booking(Booking::timed(d(2024, 6, 8), t(10, 0), t(11, 0)));
        let starts = engine.start_options(&schedule, d(2024, 6, 8));
        assert_eq!(starts, vec![t(9, 0), t(11, 0)]);

        let request = ReservationRequest::new(d(2024, 6, 8), t(9, 0), t(9, 30));
        assert!(matches!(
            engine.validate(&schedule, &request, d(2024, 6, 1)),
            Err(ReservationError::EndUnavailable { .. })
        ));
    }
}
