//! Legal start and end times for a reservation.

use chrono::NaiveDate;
use tracing::debug;

use crate::config::EngineConfig;
use crate::models::{active_on, hours_for, Booking, BusinessHours, TimeOfDay, TimeWindow};

/// Start times a customer may choose on `date`.
///
/// Grid points in `[open, close)` that fall outside every active booking's
/// `[start, end)`. Closing time itself is never a start.
pub fn start_options(
    date: NaiveDate,
    business_hours: &[BusinessHours],
    bookings: &[Booking],
    config: &EngineConfig,
) -> Vec<TimeOfDay> {
    let Some(window) = hours_for(date, business_hours).and_then(BusinessHours::open_window) else {
        return Vec::new();
    };

    let booked: Vec<TimeWindow> = active_on(date, bookings)
        .filter_map(Booking::interval)
        .collect();

    (window.start_min..window.end_min)
        .step_by(config.step())
        .filter(|&minute| !booked.iter().any(|w| w.contains(minute)))
        .filter_map(TimeOfDay::from_minutes)
        .collect()
}

/// End times a customer may choose after picking `start`.
///
/// # Algorithm
/// 1. Bound = the weekday's close, or `config.fallback_close` when the
///    weekday row is missing or has no usable window.
/// 2. Every active booking on the date starting strictly after `start`
///    lowers the bound to its start time: the reservation may run up to,
///    but not past, the next booking.
/// 3. Emit `start + k * slot` for `k >= 1` while at or before the bound.
///
/// Bookings that start at or before `start` are not considered here; they
/// already removed `start` from [`start_options`].
pub fn end_options(
    date: NaiveDate,
    start: TimeOfDay,
    business_hours: &[BusinessHours],
    bookings: &[Booking],
    config: &EngineConfig,
) -> Vec<TimeOfDay> {
    let start_min = start.to_minutes();

    let close_min = hours_for(date, business_hours)
        .and_then(BusinessHours::open_window)
        .map(|w| w.end_min)
        .unwrap_or_else(|| config.fallback_close.to_minutes());

    let bound = active_on(date, bookings)
        .filter_map(|b| b.start_time)
        .map(TimeOfDay::to_minutes)
        .filter(|&booking_start| booking_start > start_min)
        .fold(close_min, u16::min);

    debug!(%date, %start, close_min, bound, "resolved end-time bound");

    let step = config.step();
    let first = start_min.saturating_add(step as u16);
    (first..=bound)
        .step_by(step)
        .filter_map(TimeOfDay::from_minutes)
        .collect()
}
