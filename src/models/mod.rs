//! Availability domain models.
//!
//! Provides the data types the engine reasons over: time of day, weekly
//! business hours, per-date exceptions, and bookings, plus the raw wire
//! records they are normalized from.
//!
//! # Sources of Truth
//!
//! | Type | Scope | Role |
//! |------|-------|------|
//! | BusinessHours | weekday | Baseline recurring schedule |
//! | AvailabilityException | date | Vetoes an otherwise open date |
//! | Booking | date × interval | Occupies time (when active) |
//! | VendorSchedule | vendor | Snapshot of all three |

mod booking;
mod business_hours;
mod calendar;
mod exception;
pub mod record;
mod time;

pub use booking::{active_on, Booking, BookingStatus};
pub use business_hours::{day_index, hours_for, BusinessHours};
pub use calendar::{TimeWindow, VendorSchedule};
pub use exception::{exception_for, AvailabilityException};
pub use record::{BookingRecord, BusinessHoursRecord, ExceptionRecord, ScheduleDocument};
pub use time::{
    format_time_12h, parse_time, parse_time_str, RawTime, TimeOfDay, TimeParseError,
    MINUTES_PER_DAY,
};
