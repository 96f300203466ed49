//! Fail-fast range checks used by every other module.
//!
//! Each check reports the offending field by name together with the accepted
//! bounds, and the constructors and arithmetic entry points call the
//! relevant checks before doing any calculation — invalid input never
//! silently produces a malformed date.

use crate::date::{WeekInMonth, SERIAL_LOWER_BOUND, SERIAL_UPPER_BOUND};
use crate::tables::{self, MAXIMUM_YEAR_SUPPORTED, MINIMUM_YEAR_SUPPORTED};
use crate::weekday::Weekday;
use sd_core::{Error, Result};

/// Check that `year` is within the supported range.
///
/// # Errors
/// Returns [`Error::OutOfRange`] for years outside
/// [`MINIMUM_YEAR_SUPPORTED`]..=[`MAXIMUM_YEAR_SUPPORTED`].
pub fn check_valid_year(year: i64) -> Result<()> {
    if year < i64::from(MINIMUM_YEAR_SUPPORTED) || year > i64::from(MAXIMUM_YEAR_SUPPORTED) {
        return Err(Error::out_of_range(
            "year",
            year,
            MINIMUM_YEAR_SUPPORTED,
            MAXIMUM_YEAR_SUPPORTED,
        ));
    }
    Ok(())
}

/// Check that `month` is a valid month code (1–12).
///
/// # Errors
/// Returns [`Error::OutOfRange`] otherwise.
pub fn check_valid_month(month: u8) -> Result<()> {
    if !(1..=12).contains(&month) {
        return Err(Error::out_of_range("month", month, 1, 12));
    }
    Ok(())
}

/// Check that `day` is a valid day of the given month and year.
///
/// `month` and `year` must already have been validated.
///
/// # Errors
/// Returns [`Error::OutOfRange`] if `day` is 0 or past the end of the month.
pub fn check_valid_day_of_month(day: u8, month: u8, year: i32) -> Result<()> {
    let last = tables::month_len(month, year);
    if day == 0 || day > last {
        return Err(Error::out_of_range("day", day, 1, last));
    }
    Ok(())
}

/// Check that `code` is a valid weekday code, returning the [`Weekday`].
///
/// # Errors
/// Returns [`Error::OutOfRange`] for codes outside 1–7.
pub fn check_valid_weekday(code: u8) -> Result<Weekday> {
    Weekday::from_code(code).ok_or(Error::out_of_range("weekday", code, 1, 7))
}

/// Check that `code` is a valid week-in-month code, returning the
/// [`WeekInMonth`].
///
/// # Errors
/// Returns [`Error::OutOfRange`] for codes outside 0–4.
pub fn check_valid_week_in_month(code: u8) -> Result<WeekInMonth> {
    WeekInMonth::from_code(code).ok_or(Error::out_of_range("week-in-month", code, 0, 4))
}

/// Check that `serial` is within the supported serial-number range.
///
/// # Errors
/// Returns [`Error::OutOfRange`] for serials outside
/// [`SERIAL_LOWER_BOUND`]..=[`SERIAL_UPPER_BOUND`].
pub fn check_valid_serial(serial: i64) -> Result<()> {
    if serial < i64::from(SERIAL_LOWER_BOUND) || serial > i64::from(SERIAL_UPPER_BOUND) {
        return Err(Error::out_of_range(
            "serial",
            serial,
            SERIAL_LOWER_BOUND,
            SERIAL_UPPER_BOUND,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_bounds() {
        assert!(check_valid_year(1900).is_ok());
        assert!(check_valid_year(9999).is_ok());
        assert_eq!(
            check_valid_year(1899),
            Err(Error::out_of_range("year", 1899, 1900, 9999))
        );
        assert!(check_valid_year(10_000).is_err());
    }

    #[test]
    fn month_bounds() {
        assert!(check_valid_month(1).is_ok());
        assert!(check_valid_month(12).is_ok());
        assert!(check_valid_month(0).is_err());
        assert!(check_valid_month(13).is_err());
    }

    #[test]
    fn day_bounds_follow_the_month() {
        assert!(check_valid_day_of_month(31, 1, 2001).is_ok());
        assert!(check_valid_day_of_month(0, 1, 2001).is_err());
        // February has at most 29 days
        assert_eq!(
            check_valid_day_of_month(30, 2, 2001),
            Err(Error::out_of_range("day", 30, 1, 28))
        );
        assert!(check_valid_day_of_month(29, 2, 2000).is_ok());
        assert!(check_valid_day_of_month(29, 2, 2001).is_err());
        assert!(check_valid_day_of_month(31, 4, 2001).is_err());
    }

    #[test]
    fn weekday_bounds() {
        assert_eq!(check_valid_weekday(1), Ok(Weekday::Sunday));
        assert_eq!(check_valid_weekday(7), Ok(Weekday::Saturday));
        assert!(check_valid_weekday(0).is_err());
        assert!(check_valid_weekday(8).is_err());
    }

    #[test]
    fn week_in_month_bounds() {
        assert_eq!(check_valid_week_in_month(0), Ok(WeekInMonth::Last));
        assert_eq!(check_valid_week_in_month(4), Ok(WeekInMonth::Fourth));
        assert!(check_valid_week_in_month(5).is_err());
    }

    #[test]
    fn serial_bounds() {
        assert!(check_valid_serial(2).is_ok());
        assert!(check_valid_serial(2_958_465).is_ok());
        assert_eq!(
            check_valid_serial(1),
            Err(Error::out_of_range("serial", 1, 2, 2_958_465))
        );
        assert!(check_valid_serial(2_958_466).is_err());
    }
}
