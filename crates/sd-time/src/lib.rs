//! # sd-time
//!
//! Serial-number calendar dates, weekday arithmetic, day-count conventions,
//! and annual recurring-date rules.
//!
//! The central type is [`Date`], which keeps a day-precision calendar date
//! as a serial number (1900-01-01 = 2) alongside its (year, month, day)
//! decomposition.  Everything else — comparisons, range tests, month and
//! year arithmetic, weekday searches, and the financial day-count
//! conventions — is built on that serial number.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type and serial-number conversion.
pub mod date;

/// `DayCounter` trait and built-in day-count conventions.
pub mod day_count;

/// `Month` — month of the year.
pub mod month;

/// Annual recurring-date rules.
pub mod rules;

/// Static calendar tables and leap-year rules.
pub mod tables;

/// Range checks shared by every other module.
pub mod validate;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::{Date, RangeInclusion, WeekInMonth, SERIAL_LOWER_BOUND, SERIAL_UPPER_BOUND};
pub use day_count::{
    count_feb29s, is_last_day_of_february, Actual365Fixed, DayCounter, Thirty360,
    Thirty360European, Thirty360Isda, Thirty360Psa,
};
pub use month::Month;
pub use rules::{
    AnnualDateRule, DayAndMonthRule, EasterSundayRule, Relative, RelativeDayOfWeekRule,
};
pub use tables::{
    is_leap_year, last_day_of_month, leap_year_count, MAXIMUM_YEAR_SUPPORTED,
    MINIMUM_YEAR_SUPPORTED,
};
pub use weekday::Weekday;
