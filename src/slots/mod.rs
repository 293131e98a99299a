//! Time-slot generation and start/end option filters.
//!
//! Given a selected date, produces the discrete grid the booking widget
//! offers: every slot in the open window with its booked flag, the legal
//! start times, and the legal end times for a chosen start.
//!
//! # Algorithm
//!
//! All functions walk a fixed grid anchored at the opening time (or at the
//! chosen start, for end options) and test each grid point against the
//! half-open `[start, end)` intervals of active bookings on the date.
//! Every call recomputes from its inputs; nothing is cached.
//!
//! # Granularity
//! Full-day bookings (no start/end) do not mark slots here; they are
//! reported at date level by [`crate::availability::classify`].

mod generator;
mod options;

pub use generator::generate_slots;
pub use options::{end_options, start_options};

use serde::{Deserialize, Serialize};

use crate::models::TimeOfDay;

/// A candidate start time on the selected date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedSlot {
    /// Slot start.
    pub time: TimeOfDay,
    /// Whether an active booking covers this start.
    pub is_booked: bool,
}

impl DerivedSlot {
    /// 12-hour display label.
    pub fn label(&self) -> String {
        self.time.format_12h()
    }
}
