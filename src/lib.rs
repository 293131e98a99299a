//! Vendor availability and booking-slot engine.
//!
//! Reconciles a vendor's recurring weekly business hours, one-off date
//! exceptions, and existing bookings to answer, for any calendar date:
//! is the date offered, which time slots can be selected, and does a
//! proposed reservation conflict with anything already booked.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `TimeOfDay`, `BusinessHours`,
//!   `AvailabilityException`, `Booking`, `VendorSchedule`, wire records
//! - **`availability`**: Date classification (`Past`, `Unavailable`,
//!   `Available`, `PartiallyBooked`), month overview, next open date
//! - **`slots`**: Slot grid, legal start times, legal end times
//! - **`reservation`**: Reservation validity, rejection reasons, quotes
//! - **`engine`**: `AvailabilityEngine`, a configured façade over the above
//! - **`config`**: Slot size and fallback close bound
//! - **`validation`**: Integrity checks over vendor input data
//!
//! # Architecture
//!
//! Every operation is a pure function over an immutable snapshot: no I/O,
//! no caching, no shared mutable state. Results are consistent within one
//! call; bookings may change between a client's check and its submission,
//! so the booking service must re-run [`reservation::validate_reservation`]
//! when it commits.
//!
//! Missing or malformed data always degrades to the more restrictive
//! reading: an unknown weekday is closed, an unparseable time offers no
//! boundary. Turning a customer away is preferred over double-booking a
//! vendor.

pub mod availability;
pub mod config;
pub mod engine;
pub mod models;
pub mod reservation;
pub mod slots;
pub mod validation;
