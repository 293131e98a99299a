//! Per-date classifier and calendar helpers.

use chrono::{Datelike, NaiveDate};
use tracing::trace;

use super::DayStatus;
use crate::models::{
    active_on, exception_for, hours_for, AvailabilityException, Booking, BusinessHours,
    VendorSchedule,
};

/// Classifies a single date.
///
/// Comparison with `today` is by calendar date only. See the module docs
/// for the precedence order.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use u_booking::availability::{classify, DayStatus};
/// use u_booking::models::{BusinessHours, TimeOfDay};
///
/// let open = TimeOfDay::new(9, 0).unwrap();
/// let close = TimeOfDay::new(17, 0).unwrap();
/// let hours = vec![BusinessHours::open(6, open, close)]; // Saturdays
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let saturday = NaiveDate::from_ymd_opt(2024, 6, 8).unwrap();
/// assert_eq!(classify(saturday, &hours, &[], &[], today), DayStatus::Available);
/// ```
pub fn classify(
    date: NaiveDate,
    business_hours: &[BusinessHours],
    exceptions: &[AvailabilityException],
    bookings: &[Booking],
    today: NaiveDate,
) -> DayStatus {
    let status = if date < today {
        DayStatus::Past
    } else if !hours_for(date, business_hours).is_some_and(|h| h.is_available) {
        DayStatus::Unavailable
    } else if exception_for(date, exceptions).is_some_and(|e| !e.is_available) {
        // Veto only: an available exception never reopens a closed weekday
        DayStatus::Unavailable
    } else if active_on(date, bookings).next().is_some() {
        DayStatus::PartiallyBooked
    } else {
        DayStatus::Available
    };

    trace!(%date, %status, "classified date");
    status
}

/// Classifies every date of a month, in calendar order.
///
/// Returns an empty list for an invalid `year`/`month`.
pub fn classify_month(
    year: i32,
    month: u32,
    schedule: &VendorSchedule,
    today: NaiveDate,
) -> Vec<(NaiveDate, DayStatus)> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };

    first
        .iter_days()
        .take_while(|d| d.month() == month)
        .map(|d| {
            let status = classify(
                d,
                &schedule.business_hours,
                &schedule.exceptions,
                &schedule.bookings,
                today,
            );
            (d, status)
        })
        .collect()
}

/// Finds the first selectable date in `[from, from + horizon_days)`.
///
/// Returns `None` if no date in the horizon is available or partially booked.
pub fn next_open_date(
    from: NaiveDate,
    horizon_days: u32,
    schedule: &VendorSchedule,
    today: NaiveDate,
) -> Option<NaiveDate> {
    from.iter_days().take(horizon_days as usize).find(|&d| {
        classify(
            d,
            &schedule.business_hours,
            &schedule.exceptions,
            &schedule.bookings,
            today,
        )
        .is_selectable()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BookingStatus, TimeOfDay};

    fn t(h: u8, m: u8) -> TimeOfDay {
        TimeOfDay::new(h, m).unwrap()
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    /// Open Tuesday–Saturday 09:00–22:00, closed Sunday/Monday.
    fn weekly_hours() -> Vec<BusinessHours> {
        (0..7)
            .map(|day| {
                if day <= 1 {
                    BusinessHours::closed(day)
                } else {
                    BusinessHours::open(day, t(9, 0), t(22, 0))
                }
            })
            .collect()
    }

    // Saturday; the 3rd is a Monday, the 4th a Tuesday
    fn today() -> NaiveDate {
        d(2024, 6, 1)
    }

    #[test]
    fn test_past_wins_over_everything() {
        let yesterday = d(2024, 5, 31); // Friday, open
        let bookings = vec![Booking::timed(yesterday, t(10, 0), t(11, 0))];
        assert_eq!(
            classify(yesterday, &weekly_hours(), &[], &bookings, today()),
            DayStatus::Past
        );
    }

    #[test]
    fn test_today_is_not_past() {
        // 2024-06-01 is a Saturday, open
        assert_eq!(
            classify(today(), &weekly_hours(), &[], &[], today()),
            DayStatus::Available
        );
    }

    #[test]
    fn test_closed_weekday() {
        let monday = d(2024, 6, 3);
        assert_eq!(
            classify(monday, &weekly_hours(), &[], &[], today()),
            DayStatus::Unavailable
        );
    }

    #[test]
    fn test_missing_weekday_row_is_unavailable() {
        let tuesday = d(2024, 6, 4);
        let hours = vec![BusinessHours::open(6, t(9, 0), t(17, 0))];
        assert_eq!(
            classify(tuesday, &hours, &[], &[], today()),
            DayStatus::Unavailable
        );
    }

    #[test]
    fn test_exception_vetoes_open_day() {
        let tuesday = d(2024, 6, 4);
        let exceptions = vec![AvailabilityException::blocked(tuesday)];
        assert_eq!(
            classify(tuesday, &weekly_hours(), &exceptions, &[], today()),
            DayStatus::Unavailable
        );
    }

    #[test]
    fn test_exception_cannot_reopen_closed_day() {
        let monday = d(2024, 6, 3);
        let exceptions = vec![AvailabilityException::open(monday)];
        assert_eq!(
            classify(monday, &weekly_hours(), &exceptions, &[], today()),
            DayStatus::Unavailable
        );
    }

    #[test]
    fn test_exception_duplicate_last_wins() {
        let tuesday = d(2024, 6, 4);
        let exceptions = vec![
            AvailabilityException::blocked(tuesday),
            AvailabilityException::open(tuesday),
        ];
        assert_eq!(
            classify(tuesday, &weekly_hours(), &exceptions, &[], today()),
            DayStatus::Available
        );
    }

    #[test]
    fn test_any_active_booking_is_partial() {
        let tuesday = d(2024, 6, 4);
        let timed = vec![Booking::timed(tuesday, t(10, 0), t(10, 30))];
        assert_eq!(
            classify(tuesday, &weekly_hours(), &[], &timed, today()),
            DayStatus::PartiallyBooked
        );

        let full_day = vec![Booking::full_day(tuesday).with_status(BookingStatus::Pending)];
        assert_eq!(
            classify(tuesday, &weekly_hours(), &[], &full_day, today()),
            DayStatus::PartiallyBooked
        );
    }

    #[test]
    fn test_inactive_booking_is_inert() {
        let tuesday = d(2024, 6, 4);
        let bookings = vec![
            Booking::timed(tuesday, t(10, 0), t(12, 0)).with_status(BookingStatus::Cancelled),
            Booking::full_day(tuesday).with_status(BookingStatus::Declined),
        ];
        assert_eq!(
            classify(tuesday, &weekly_hours(), &[], &bookings, today()),
            DayStatus::Available
        );
    }

    #[test]
    fn test_classify_month() {
        let schedule = VendorSchedule {
            business_hours: weekly_hours(),
            ..Default::default()
        };
        let june = classify_month(2024, 6, &schedule, d(2024, 6, 10));
        assert_eq!(june.len(), 30);
        assert_eq!(june[0].0, d(2024, 6, 1));
        assert_eq!(june[29].0, d(2024, 6, 30));
        assert_eq!(june[0].1, DayStatus::Past);
        assert_eq!(june[9].1, DayStatus::Unavailable); // Monday the 10th
        assert_eq!(june[10].1, DayStatus::Available); // Tuesday the 11th

        assert!(classify_month(2024, 13, &schedule, today()).is_empty());
        assert_eq!(classify_month(2024, 2, &schedule, today()).len(), 29);
    }

    #[test]
    fn test_next_open_date() {
        let schedule = VendorSchedule {
            business_hours: weekly_hours(),
            ..Default::default()
        }
        .with_exception(AvailabilityException::blocked(d(2024, 6, 4)));

        // Sunday 2nd: skip Sun, Mon, blocked Tue → Wednesday 5th
        assert_eq!(
            next_open_date(d(2024, 6, 2), 14, &schedule, today()),
            Some(d(2024, 6, 5))
        );
        assert_eq!(next_open_date(d(2024, 6, 2), 2, &schedule, today()), None);
        assert_eq!(
            next_open_date(d(2024, 6, 2), 30, &VendorSchedule::new(), today()),
            None
        );
    }
}
