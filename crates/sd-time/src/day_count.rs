//! `DayCounter` trait and the built-in day-count conventions.
//!
//! A day counter computes the number of days between two dates under a
//! financial-markets convention, used when accruing interest.  Every
//! convention is antisymmetric under argument swap and returns 0 for equal
//! dates.

use crate::date::{Date, RangeInclusion};
use crate::tables;
use sd_core::Time;

/// A convention for counting the days between two dates.
pub trait DayCounter: std::fmt::Debug + Send + Sync {
    /// Human-readable name of this convention (e.g. `"30/360 (ISDA)"`).
    fn name(&self) -> &str;

    /// Number of days between `d1` and `d2` according to this convention.
    ///
    /// Negative when `d1` is after `d2`: swapping the arguments negates the
    /// result.
    fn day_count(&self, d1: Date, d2: Date) -> i64;

    /// Fraction of a year between `d1` and `d2`: the day count over the
    /// denominator implied by the convention (360 for the 30/360 family).
    fn year_fraction(&self, d1: Date, d2: Date) -> Time;
}

/// The 30/360 core formula, with the (possibly clamped) day numbers
/// supplied by each convention.
fn thirty_360(start: Date, end: Date, d1: i64, d2: i64) -> i64 {
    let y1 = i64::from(start.year());
    let y2 = i64::from(end.year());
    let m1 = i64::from(start.month());
    let m2 = i64::from(end.month());
    360 * (y2 - y1) + 30 * (m2 - m1) + (d2 - d1)
}

/// Actual day-count convention.
///
/// The day count is the exact number of calendar days between the two
/// dates; the year fraction divides by 365.
#[derive(Debug, Clone, Copy, Default)]
pub struct Actual365Fixed;

impl DayCounter for Actual365Fixed {
    fn name(&self) -> &str {
        "Actual/365 (Fixed)"
    }

    fn day_count(&self, d1: Date, d2: Date) -> i64 {
        i64::from(d2.serial() - d1.serial())
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        self.day_count(d1, d2) as Time / 365.0
    }
}

/// 30/360 day-count convention, with no day-of-month adjustment.
///
/// `day_count = 360·(y2−y1) + 30·(m2−m1) + (d2−d1)`
#[derive(Debug, Clone, Copy, Default)]
pub struct Thirty360;

impl DayCounter for Thirty360 {
    fn name(&self) -> &str {
        "30/360"
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        if start.is_after(end) {
            return -self.day_count(end, start);
        }
        thirty_360(
            start,
            end,
            i64::from(start.day_of_month()),
            i64::from(end.day_of_month()),
        )
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        self.day_count(d1, d2) as Time / 360.0
    }
}

/// 30/360 (ISDA) day-count convention.
///
/// A start day of 31 is treated as 30; an end day of 31 is treated as 30
/// only when the (adjusted) start day is 30.
#[derive(Debug, Clone, Copy, Default)]
pub struct Thirty360Isda;

impl DayCounter for Thirty360Isda {
    fn name(&self) -> &str {
        "30/360 (ISDA)"
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        if start.is_after(end) {
            return -self.day_count(end, start);
        }
        let mut d1 = i64::from(start.day_of_month());
        let mut d2 = i64::from(end.day_of_month());
        if d1 == 31 {
            d1 = 30;
        }
        if d2 == 31 && d1 == 30 {
            d2 = 30;
        }
        thirty_360(start, end, d1, d2)
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        self.day_count(d1, d2) as Time / 360.0
    }
}

/// 30/360 (PSA) day-count convention.
///
/// As ISDA, except the start day is also treated as 30 when it is the last
/// day of February.
#[derive(Debug, Clone, Copy, Default)]
pub struct Thirty360Psa;

impl DayCounter for Thirty360Psa {
    fn name(&self) -> &str {
        "30/360 (PSA)"
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        // equal dates fall through to the formula, which yields 0
        if start.is_after(end) {
            return -self.day_count(end, start);
        }
        let mut d1 = i64::from(start.day_of_month());
        let mut d2 = i64::from(end.day_of_month());
        if d1 == 31 || is_last_day_of_february(start) {
            d1 = 30;
        }
        if d2 == 31 && d1 == 30 {
            d2 = 30;
        }
        thirty_360(start, end, d1, d2)
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        self.day_count(d1, d2) as Time / 360.0
    }
}

/// 30E/360 (European) day-count convention.
///
/// Both day numbers are treated as 30 when they are 31, independently of
/// each other.
#[derive(Debug, Clone, Copy, Default)]
pub struct Thirty360European;

impl DayCounter for Thirty360European {
    fn name(&self) -> &str {
        "30E/360"
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        if start.is_after(end) {
            return -self.day_count(end, start);
        }
        let mut d1 = i64::from(start.day_of_month());
        let mut d2 = i64::from(end.day_of_month());
        if d1 == 31 {
            d1 = 30;
        }
        if d2 == 31 {
            d2 = 30;
        }
        thirty_360(start, end, d1, d2)
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        self.day_count(d1, d2) as Time / 360.0
    }
}

/// Return `true` if `date` is the last day of February: the 29th in a leap
/// year, the 28th otherwise.  In a leap year the 28th does NOT qualify.
pub fn is_last_day_of_february(date: Date) -> bool {
    date.month() == 2 && date.day_of_month() == tables::month_len(2, i32::from(date.year()))
}

/// Return the number of times February 29 falls inside `(start, end]`.
pub fn count_feb29s(start: Date, end: Date) -> i32 {
    let mut count = 0;
    for year in start.year()..=end.year() {
        if tables::is_leap(i32::from(year)) {
            let feb29 = Date::from_ymd(year, 2, 29).expect("Feb 29 exists in a leap year");
            if feb29.is_in_range(start, end, RangeInclusion::Second) {
                count += 1;
            }
        }
    }
    count
}
