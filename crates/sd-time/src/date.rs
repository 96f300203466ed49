//! `Date` type.
//!
//! A calendar date is held as a serial number of days since a fixed epoch
//! together with the (year, month, day) triple it decomposes to.  The two
//! representations are synchronised at construction and never diverge.
//!
//! # Serial number convention
//! * Serial 2 = January 1, 1900.
//! * The valid date range is 1900-01-01 to 9999-12-31
//!   (serial [`SERIAL_LOWER_BOUND`]..=[`SERIAL_UPPER_BOUND`]).
//! * The weekday code is `(serial + 6) % 7 + 1`, with 1 = Sunday.

use crate::month::Month;
use crate::tables::{
    self, AGGREGATE_DAYS_TO_END_OF_PRECEDING_MONTH,
    LEAP_YEAR_AGGREGATE_DAYS_TO_END_OF_PRECEDING_MONTH, MINIMUM_YEAR_SUPPORTED,
};
use crate::validate;
use crate::weekday::Weekday;
use sd_core::Result;

/// The serial number for 1 January 1900.
pub const SERIAL_LOWER_BOUND: i32 = 2;

/// The serial number for 31 December 9999.
pub const SERIAL_UPPER_BOUND: i32 = 2_958_465;

/// Controls whether the boundary dates of a range count as "in range".
///
/// The boundaries are normalised into ascending order before the policy is
/// applied, so `First` always refers to the lower bound and `Second` to the
/// upper bound, regardless of argument order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeInclusion {
    /// Neither boundary counts.
    None,
    /// Only the lower boundary counts.
    First,
    /// Only the upper boundary counts.
    Second,
    /// Both boundaries count.
    Both,
}

/// Identifies an occurrence of a weekday within a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WeekInMonth {
    /// The last occurrence in the month (0).
    Last = 0,
    /// The first occurrence (1).
    First = 1,
    /// The second occurrence (2).
    Second = 2,
    /// The third occurrence (3).
    Third = 3,
    /// The fourth occurrence (4).
    Fourth = 4,
}

impl WeekInMonth {
    /// Construct from a week-in-month code (0 = last, 1–4 = first–fourth).
    ///
    /// Returns `None` if the code is out of range.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(WeekInMonth::Last),
            1 => Some(WeekInMonth::First),
            2 => Some(WeekInMonth::Second),
            3 => Some(WeekInMonth::Third),
            4 => Some(WeekInMonth::Fourth),
            _ => None,
        }
    }

    /// Return the week-in-month code (0 = last, 1–4 = first–fourth).
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

/// A calendar date.
///
/// Immutable value type: every arithmetic operation returns a new `Date`.
/// Equality, ordering, and hashing are defined by the serial number alone.
#[derive(Clone, Copy)]
pub struct Date {
    serial: i32,
    year: u16,
    month: u8,
    day: u8,
}

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, 1900.
    pub const MIN: Date = Date {
        serial: SERIAL_LOWER_BOUND,
        year: 1900,
        month: 1,
        day: 1,
    };

    /// Maximum valid date: December 31, 9999.
    pub const MAX: Date = Date {
        serial: SERIAL_UPPER_BOUND,
        year: 9999,
        month: 12,
        day: 31,
    };

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month.
    ///
    /// # Errors
    /// Returns an error if any field is out of range, including days past
    /// the end of the given month.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        validate::check_valid_year(i64::from(year))?;
        validate::check_valid_month(month)?;
        validate::check_valid_day_of_month(day, month, i32::from(year))?;
        let serial = serial_from_ymd(i32::from(year), i32::from(month), i32::from(day));
        Ok(Date {
            serial,
            year,
            month,
            day,
        })
    }

    /// Create a date from a serial number.
    ///
    /// # Errors
    /// Returns an error if `serial` is outside
    /// [`SERIAL_LOWER_BOUND`]..=[`SERIAL_UPPER_BOUND`].
    pub fn from_serial(serial: i32) -> Result<Self> {
        validate::check_valid_serial(i64::from(serial))?;
        let (year, month, day) = ymd_from_serial(serial);
        Ok(Date {
            serial,
            year,
            month,
            day,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.serial
    }

    /// Return the year (1900–9999).
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Return the month code (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        self.day
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        let code = ((self.serial + 6) % 7 + 1) as u8;
        Weekday::from_code(code).expect("weekday code is always in 1..=7")
    }

    // ── Comparisons ──────────────────────────────────────────────────────────

    /// Return `true` if this date is the same day as `other`.
    pub fn is_on(&self, other: Date) -> bool {
        self.serial == other.serial
    }

    /// Return `true` if this date is strictly before `other`.
    pub fn is_before(&self, other: Date) -> bool {
        self.serial < other.serial
    }

    /// Return `true` if this date is on or before `other`.
    pub fn is_on_or_before(&self, other: Date) -> bool {
        self.serial <= other.serial
    }

    /// Return `true` if this date is strictly after `other`.
    pub fn is_after(&self, other: Date) -> bool {
        self.serial > other.serial
    }

    /// Return `true` if this date is on or after `other`.
    pub fn is_on_or_after(&self, other: Date) -> bool {
        self.serial >= other.serial
    }

    /// Return `true` if this date falls between `d1` and `d2`, with the
    /// boundaries counted according to `rule`.
    ///
    /// The boundary dates may be supplied in either order.
    pub fn is_in_range(&self, d1: Date, d2: Date, rule: RangeInclusion) -> bool {
        let start = d1.serial.min(d2.serial);
        let end = d1.serial.max(d2.serial);
        match rule {
            RangeInclusion::Both => self.serial >= start && self.serial <= end,
            RangeInclusion::First => self.serial >= start && self.serial < end,
            RangeInclusion::Second => self.serial > start && self.serial <= end,
            RangeInclusion::None => self.serial > start && self.serial < end,
        }
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `days` (may be negative).
    ///
    /// # Errors
    /// Returns an error if the result falls outside the supported range.
    pub fn add_days(self, days: i32) -> Result<Self> {
        let serial = i64::from(self.serial) + i64::from(days);
        validate::check_valid_serial(serial)?;
        Date::from_serial(serial as i32)
    }

    /// Advance by `months` (may be negative), clamping to the end of the
    /// month: 31 May + 1 month = 30 June, never an invalid date.
    ///
    /// # Errors
    /// Returns an error if the resulting year falls outside the supported
    /// range.
    pub fn add_months(self, months: i32) -> Result<Self> {
        let total = 12 * i64::from(self.year) + i64::from(self.month) + i64::from(months) - 1;
        let new_year = total.div_euclid(12);
        let new_month = (total.rem_euclid(12) + 1) as u8;
        validate::check_valid_year(new_year)?;
        let new_day = self.day.min(tables::month_len(new_month, new_year as i32));
        Date::from_ymd(new_year as u16, new_month, new_day)
    }

    /// Advance by `years` (may be negative), clamping 29 February down to
    /// 28 February when the target year is not a leap year.
    ///
    /// # Errors
    /// Returns an error if the resulting year falls outside the supported
    /// range.
    pub fn add_years(self, years: i32) -> Result<Self> {
        let new_year = i64::from(self.year) + i64::from(years);
        validate::check_valid_year(new_year)?;
        let new_day = self.day.min(tables::month_len(self.month, new_year as i32));
        Date::from_ymd(new_year as u16, self.month, new_day)
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let last = tables::month_len(self.month, i32::from(self.year));
        let serial = serial_from_ymd(i32::from(self.year), i32::from(self.month), i32::from(last));
        Date {
            serial,
            year: self.year,
            month: self.month,
            day: last,
        }
    }

    // ── Weekday-relative dates ───────────────────────────────────────────────

    /// Return the latest date strictly before this one that falls on
    /// `target` — always 1 to 7 days back.
    ///
    /// # Errors
    /// Returns an error if the result falls outside the supported range.
    pub fn previous_day_of_week(self, target: Weekday) -> Result<Self> {
        let diff = i32::from(target.code()) - i32::from(self.weekday().code());
        let adjust = if diff < 0 { diff } else { diff - 7 };
        self.add_days(adjust)
    }

    /// Return the earliest date strictly after this one that falls on
    /// `target` — always 1 to 7 days forward.  When this date is already on
    /// `target`, the result is the same weekday next week, never this date.
    ///
    /// # Errors
    /// Returns an error if the result falls outside the supported range.
    pub fn following_day_of_week(self, target: Weekday) -> Result<Self> {
        let diff = i32::from(target.code()) - i32::from(self.weekday().code());
        let adjust = if diff <= 0 { diff + 7 } else { diff };
        self.add_days(adjust)
    }

    /// Return the date falling on `target` that is closest to this one, at
    /// most 3 days away in either direction; ties resolve to the later
    /// date.
    ///
    /// # Errors
    /// Returns an error if the result falls outside the supported range.
    pub fn nearest_day_of_week(self, target: Weekday) -> Result<Self> {
        let mut adjust = -(i32::from(target.code()) - i32::from(self.weekday().code())).abs();
        if adjust <= -4 {
            adjust += 7;
        }
        self.add_days(adjust)
    }

    /// Return the date of the given occurrence of `weekday` in the month of
    /// `year`/`month` — e.g. the third Wednesday of March 2004, or the last
    /// Friday of a month.  Every month contains at least four of each
    /// weekday, so every occurrence selectable here exists.
    ///
    /// # Errors
    /// Returns an error if `year` or `month` is out of range.
    pub fn nth_weekday_of_month(
        week: WeekInMonth,
        weekday: Weekday,
        year: u16,
        month: u8,
    ) -> Result<Self> {
        let first = Date::from_ymd(year, month, 1)?;
        match week {
            WeekInMonth::Last => {
                let end = first.end_of_month();
                let back =
                    (i32::from(end.weekday().code()) - i32::from(weekday.code())).rem_euclid(7);
                Date::from_ymd(year, month, end.day_of_month() - back as u8)
            }
            nth => {
                let skip = (i32::from(weekday.code()) - i32::from(first.weekday().code()))
                    .rem_euclid(7) as u8;
                Date::from_ymd(year, month, 1 + skip + 7 * (nth.code() - 1))
            }
        }
    }
}

// ── Comparison and hashing by serial number ───────────────────────────────────

impl PartialEq for Date {
    fn eq(&self, other: &Self) -> bool {
        self.serial == other.serial
    }
}

impl Eq for Date {}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.serial.cmp(&other.serial)
    }
}

impl std::hash::Hash for Date {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.serial.hash(state);
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition out of range")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction out of range")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.serial - rhs.serial
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = self.add_days(rhs).expect("date addition out of range");
    }
}

impl std::ops::SubAssign<i32> for Date {
    fn sub_assign(&mut self, rhs: i32) {
        *self = self.add_days(-rhs).expect("date subtraction out of range");
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let month = Month::from_number(self.month).expect("stored month is always valid");
        write!(f, "{} {} {}", self.day, month.long_name(), self.year)
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Date({:04}-{:02}-{:02})",
            self.year, self.month, self.day
        )
    }
}

// ── chrono interop ────────────────────────────────────────────────────────────

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for Date {
    type Error = sd_core::Error;

    fn try_from(date: chrono::NaiveDate) -> Result<Self> {
        use chrono::Datelike;
        validate::check_valid_year(i64::from(date.year()))?;
        Date::from_ymd(date.year() as u16, date.month() as u8, date.day() as u8)
    }
}

#[cfg(feature = "chrono")]
impl From<Date> for chrono::NaiveDate {
    fn from(date: Date) -> Self {
        chrono::NaiveDate::from_ymd_opt(
            i32::from(date.year),
            u32::from(date.month),
            u32::from(date.day),
        )
        .expect("a valid Date is always a valid chrono date")
    }
}

// ── Serial conversion engine ──────────────────────────────────────────────────

/// Convert (year, month, day) to a serial number.
///
/// `(year - 1900) * 365` plus the leap days up to the preceding year, plus
/// the cumulative days to the end of the preceding month (one more after
/// February in a leap year), plus the day; the final +1 pins the epoch at
/// 1900-01-01 = 2.
fn serial_from_ymd(year: i32, month: i32, day: i32) -> i32 {
    let year_days = (year - MINIMUM_YEAR_SUPPORTED) * 365 + tables::leap_count(year - 1);
    let mut month_days = AGGREGATE_DAYS_TO_END_OF_PRECEDING_MONTH[month as usize];
    if month > 2 && tables::is_leap(year) {
        month_days += 1;
    }
    year_days + month_days + day + 1
}

/// Decompose a serial number into (year, month, day) — the exact inverse of
/// [`serial_from_ymd`] over the supported range.
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    // Estimate the year assuming no leap years, then correct for the leap
    // days the estimate over-counts.  The correction can itself cross a
    // leap-year boundary, so walk forward until January 1 of the candidate
    // year overshoots the serial; the loop runs a small constant number of
    // iterations.
    let days = serial - SERIAL_LOWER_BOUND;
    let overestimate = MINIMUM_YEAR_SUPPORTED + days / 365;
    let underestimate = MINIMUM_YEAR_SUPPORTED + (days - tables::leap_count(overestimate)) / 365;
    let year = if underestimate == overestimate {
        underestimate
    } else {
        let mut candidate = underestimate;
        while serial_from_ymd(candidate, 1, 1) <= serial {
            candidate += 1;
        }
        candidate - 1
    };

    let jan1 = serial_from_ymd(year, 1, 1);
    let aggregate_days = if tables::is_leap(year) {
        &LEAP_YEAR_AGGREGATE_DAYS_TO_END_OF_PRECEDING_MONTH
    } else {
        &AGGREGATE_DAYS_TO_END_OF_PRECEDING_MONTH
    };

    // Scan forward by month until the cumulative boundary for the next
    // month would pass the serial.
    let mut next = 1usize;
    while jan1 + aggregate_days[next] - 1 < serial {
        next += 1;
    }
    let month = next - 1;
    let day = serial - jan1 - aggregate_days[month] + 1;

    (year as u16, month as u8, day as u8)
}
