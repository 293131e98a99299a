//! Date-level availability classification.
//!
//! Merges business hours, exceptions, and bookings into a single
//! [`DayStatus`] per calendar date, used to paint a calendar grid.
//!
//! # Precedence
//!
//! | Step | Condition | Result |
//! |------|-----------|--------|
//! | 1 | date before today | `Past` |
//! | 2 | weekday row missing or unavailable | `Unavailable` |
//! | 3 | exception marks date unavailable | `Unavailable` |
//! | 4 | any active booking on date | `PartiallyBooked` |
//! | 5 | otherwise | `Available` |
//!
//! A date with any active booking is `PartiallyBooked` however much of the
//! day remains free; the per-slot view in [`crate::slots`] is where free
//! and booked time are told apart.

mod classifier;

pub use classifier::{classify, classify_month, next_open_date};

use serde::{Deserialize, Serialize};

/// Classification of one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// Before today.
    Past,
    /// Vendor does not work this date.
    Unavailable,
    /// Open with no active bookings.
    Available,
    /// Open with at least one active booking.
    PartiallyBooked,
}

impl DayStatus {
    /// Whether a customer may pick this date.
    #[inline]
    pub fn is_selectable(self) -> bool {
        matches!(self, Self::Available | Self::PartiallyBooked)
    }

    /// Wire label (`"partially_booked"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Past => "past",
            Self::Unavailable => "unavailable",
            Self::Available => "available",
            Self::PartiallyBooked => "partially_booked",
        }
    }
}

impl std::fmt::Display for DayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
