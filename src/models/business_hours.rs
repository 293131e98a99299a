//! Recurring weekly business hours.
//!
//! One row per weekday, indexed 0 = Sunday through 6 = Saturday. Rows are
//! vendor-configured and read-only to the engine.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{TimeOfDay, TimeWindow};

/// Opening hours for one weekday.
///
/// When `is_available` is false the times are ignored. When true,
/// `open_time < close_time` is expected; a row that breaks this (or lacks
/// a time) is malformed and yields no open window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessHours {
    /// Weekday index (0 = Sunday .. 6 = Saturday).
    pub day_of_week: u8,
    /// Whether the vendor works on this weekday.
    pub is_available: bool,
    /// Opening time.
    pub open_time: Option<TimeOfDay>,
    /// Closing time (last bookable boundary).
    pub close_time: Option<TimeOfDay>,
}

impl BusinessHours {
    /// An open weekday.
    pub fn open(day_of_week: u8, open_time: TimeOfDay, close_time: TimeOfDay) -> Self {
        Self {
            day_of_week,
            is_available: true,
            open_time: Some(open_time),
            close_time: Some(close_time),
        }
    }

    /// A closed weekday.
    pub fn closed(day_of_week: u8) -> Self {
        Self {
            day_of_week,
            is_available: false,
            open_time: None,
            close_time: None,
        }
    }

    /// The `[open, close]` window in minutes, if the day is open and well formed.
    ///
    /// The window's `end_min` is the close time itself; slot generation
    /// treats it as an inclusive boundary.
    pub fn open_window(&self) -> Option<TimeWindow> {
        if !self.is_available {
            return None;
        }
        let open = self.open_time?.to_minutes();
        let close = self.close_time?.to_minutes();
        (open < close).then(|| TimeWindow::new(open, close))
    }
}

/// Weekday index of a date (0 = Sunday).
#[inline]
pub fn day_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Finds the business-hours row that governs `date`.
pub fn hours_for(date: NaiveDate, business_hours: &[BusinessHours]) -> Option<&BusinessHours> {
    let day = day_index(date);
    business_hours.iter().find(|h| h.day_of_week == day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u8, m: u8) -> TimeOfDay {
        TimeOfDay::new(h, m).unwrap()
    }

    #[test]
    fn test_day_index_sunday_first() {
        // 2024-06-02 is a Sunday
        assert_eq!(day_index(NaiveDate::from_ymd_opt(2024, 6, 2).unwrap()), 0);
        assert_eq!(day_index(NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()), 1);
        assert_eq!(day_index(NaiveDate::from_ymd_opt(2024, 6, 8).unwrap()), 6);
    }

    #[test]
    fn test_open_window() {
        let h = BusinessHours::open(1, t(9, 0), t(17, 0));
        let w = h.open_window().unwrap();
        assert_eq!(w.start_min, 540);
        assert_eq!(w.end_min, 1020);
    }

    #[test]
    fn test_closed_day_has_no_window() {
        assert!(BusinessHours::closed(0).open_window().is_none());

        // Times on a closed row are ignored
        let mut h = BusinessHours::open(2, t(9, 0), t(17, 0));
        h.is_available = false;
        assert!(h.open_window().is_none());
    }

    #[test]
    fn test_malformed_rows_have_no_window() {
        let inverted = BusinessHours::open(3, t(18, 0), t(9, 0));
        assert!(inverted.open_window().is_none());

        let empty = BusinessHours::open(3, t(9, 0), t(9, 0));
        assert!(empty.open_window().is_none());

        let missing = BusinessHours {
            day_of_week: 3,
            is_available: true,
            open_time: Some(t(9, 0)),
            close_time: None,
        };
        assert!(missing.open_window().is_none());
    }

    #[test]
    fn test_hours_for() {
        let hours = vec![
            BusinessHours::closed(0),
            BusinessHours::open(1, t(9, 0), t(17, 0)),
        ];
        let monday = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        let tuesday = NaiveDate::from_ymd_opt(2024, 6, 4).unwrap();
        assert_eq!(hours_for(monday, &hours).unwrap().day_of_week, 1);
        assert!(hours_for(tuesday, &hours).is_none());
    }
}
