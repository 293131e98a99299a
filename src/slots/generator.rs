//! Slot grid for a selected date.

use chrono::NaiveDate;
use tracing::debug;

use super::DerivedSlot;
use crate::config::EngineConfig;
use crate::models::{active_on, hours_for, Booking, BusinessHours, TimeOfDay, TimeWindow};

/// Enumerates the slots of `date`'s open window.
///
/// Steps from the opening time by `config.slot_minutes` while the slot is
/// at or before closing time (the close boundary itself is emitted). A
/// slot is booked when an active booking's `[start, end)` contains it.
///
/// Returns an empty list when the weekday is closed, missing, or malformed.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use u_booking::config::EngineConfig;
/// use u_booking::models::{Booking, BusinessHours, TimeOfDay};
/// use u_booking::slots::generate_slots;
///
/// let t = |h, m| TimeOfDay::new(h, m).unwrap();
/// let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(); // Saturday
/// let hours = vec![BusinessHours::open(6, t(9, 0), t(11, 0))];
/// let bookings = vec![Booking::timed(date, t(9, 30), t(10, 0))];
///
/// let slots = generate_slots(date, &hours, &bookings, &EngineConfig::default());
/// let booked: Vec<bool> = slots.iter().map(|s| s.is_booked).collect();
/// assert_eq!(booked, vec![false, true, false, false, false]);
/// ```
pub fn generate_slots(
    date: NaiveDate,
    business_hours: &[BusinessHours],
    bookings: &[Booking],
    config: &EngineConfig,
) -> Vec<DerivedSlot> {
    let Some(window) = hours_for(date, business_hours).and_then(BusinessHours::open_window) else {
        debug!(%date, "no open window; no slots");
        return Vec::new();
    };

    let booked: Vec<TimeWindow> = active_on(date, bookings)
        .filter_map(Booking::interval)
        .collect();

    let slots: Vec<DerivedSlot> = (window.start_min..=window.end_min)
        .step_by(config.step())
        .filter_map(|minute| {
            Some(DerivedSlot {
                time: TimeOfDay::from_minutes(minute)?,
                is_booked: booked.iter().any(|w| w.contains(minute)),
            })
        })
        .collect();

    debug!(
        %date,
        slots = slots.len(),
        booked = slots.iter().filter(|s| s.is_booked).count(),
        "generated slots"
    );
    slots
}
