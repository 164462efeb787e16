// ABOUTME: Calendar-day classification and date/time formatting for dashboard labels
// ABOUTME: Injectable clock and explicit display offset keep every function deterministic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

//! Calendar utilities
//!
//! "Today" and "tomorrow" are calendar-day comparisons, not elapsed-time
//! windows: both the reference instant (from a [`Clock`]) and the date being
//! classified are projected into the calendar's UTC offset before their
//! year, month, and day are compared.
//!
//! ```rust
//! use chrono::{FixedOffset, TimeZone, Utc};
//! use fittrack::calendar::{Calendar, FixedClock};
//! use fittrack::Locale;
//!
//! let now = Utc.with_ymd_and_hms(2025, 3, 24, 9, 0, 0).unwrap();
//! let calendar = Calendar::new(FixedClock::new(now), FixedOffset::east_opt(0).unwrap(), Locale::EnUs);
//!
//! assert_eq!(calendar.format_date(&now), "Today");
//! assert_eq!(calendar.format_time(&now), "9:00 AM");
//! ```

/// Clock capability
pub mod clock;

/// Day-of-week, today/tomorrow checks, and formatting
pub mod dates;

pub use clock::{Clock, FixedClock, SystemClock};
pub use dates::{timestamp_from_millis, Calendar};
