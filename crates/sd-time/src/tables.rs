//! Static calendar lookup data and the leap-year rules.
//!
//! All three tables are 1-indexed by month code (entry 0 is unused) so that
//! the serial-conversion arithmetic can index them with the month code
//! directly.  The cumulative tables carry a 13th entry holding the full year
//! length, which the month-resolution scan relies on.

use crate::validate::{check_valid_month, check_valid_year};
use sd_core::Result;

/// The lowest year value supported by the library.
pub const MINIMUM_YEAR_SUPPORTED: i32 = 1900;

/// The highest year value supported by the library.
pub const MAXIMUM_YEAR_SUPPORTED: i32 = 9999;

/// The number of days in each month in non-leap years (1-indexed).
pub const LAST_DAY_OF_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// The number of days in a non-leap year up to the end of the preceding
/// month (1-indexed; entry 13 is the full year).
pub(crate) const AGGREGATE_DAYS_TO_END_OF_PRECEDING_MONTH: [i32; 14] =
    [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334, 365];

/// The number of days in a leap year up to the end of the preceding month
/// (1-indexed; entry 13 is the full year).
pub(crate) const LEAP_YEAR_AGGREGATE_DAYS_TO_END_OF_PRECEDING_MONTH: [i32; 14] =
    [0, 0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335, 366];

/// Whether the given year is a leap year.
///
/// # Errors
/// Returns an error if `year` is outside the supported range
/// [`MINIMUM_YEAR_SUPPORTED`]..=[`MAXIMUM_YEAR_SUPPORTED`].
pub fn is_leap_year(year: i32) -> Result<bool> {
    check_valid_year(i64::from(year))?;
    Ok(is_leap(year))
}

/// The number of leap years from 1900 to `year` INCLUSIVE.
///
/// Computed in closed form; equals the count obtained by testing each year
/// in `[1900, year]` one by one.  Note that 1900 is not a leap year.
///
/// # Errors
/// Returns an error if `year` is outside the supported range.
pub fn leap_year_count(year: i32) -> Result<i32> {
    check_valid_year(i64::from(year))?;
    Ok(leap_count(year))
}

/// The number of the last day of the given month, taking leap years into
/// account.
///
/// # Errors
/// Returns an error if `month` is not 1–12 or `year` is outside the
/// supported range.
pub fn last_day_of_month(month: u8, year: i32) -> Result<u8> {
    check_valid_month(month)?;
    check_valid_year(i64::from(year))?;
    Ok(month_len(month, year))
}

// ── Unchecked twins, for use on already-validated values ──────────────────────

pub(crate) fn is_leap(year: i32) -> bool {
    year % 4 == 0 && (year % 400 == 0 || year % 100 != 0)
}

pub(crate) fn leap_count(year: i32) -> i32 {
    let leap4 = (year - 1896) / 4;
    let leap100 = (year - 1800) / 100;
    let leap400 = (year - 1600) / 400;
    leap4 - leap100 + leap400
}

pub(crate) fn month_len(month: u8, year: i32) -> u8 {
    let days = LAST_DAY_OF_MONTH[month as usize];
    if month == 2 && is_leap(year) {
        days + 1
    } else {
        days
    }
}
