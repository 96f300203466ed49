//! Annual recurring-date rules.
//!
//! A rule produces one date per calendar year: a fixed day and month, the
//! date of Easter Sunday, or a weekday relative to the date produced by
//! another rule (e.g. "the Friday preceding Easter Sunday").  Rules are thin
//! consumers of [`Date`]'s constructors and weekday arithmetic.

use crate::date::Date;
use crate::month::Month;
use crate::tables::LAST_DAY_OF_MONTH;
use crate::validate;
use crate::weekday::Weekday;
use sd_core::{Error, Result};

/// A rule that generates one date per year.
pub trait AnnualDateRule: std::fmt::Debug + Send + Sync {
    /// Return the date this rule generates for the given year.
    ///
    /// # Errors
    /// Returns an error if `year` is outside the supported range.
    fn date_for_year(&self, year: i32) -> Result<Date>;
}

/// A rule for a fixed day-of-the-month and month, every year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayAndMonthRule {
    day: u8,
    month: Month,
}

impl DayAndMonthRule {
    /// Create a rule for the given day and month.
    ///
    /// The day is validated against the non-leap month length, since the
    /// rule must produce a valid date in every year — February 29 is
    /// rejected.
    ///
    /// # Errors
    /// Returns an error if `day` is 0 or past the end of the month.
    pub fn new(day: u8, month: Month) -> Result<Self> {
        let last = LAST_DAY_OF_MONTH[month.number() as usize];
        if day == 0 || day > last {
            return Err(Error::out_of_range("day", day, 1, last));
        }
        Ok(DayAndMonthRule { day, month })
    }

    /// Return the day of the month.
    pub fn day_of_month(&self) -> u8 {
        self.day
    }

    /// Return the month.
    pub fn month(&self) -> Month {
        self.month
    }
}

impl AnnualDateRule for DayAndMonthRule {
    fn date_for_year(&self, year: i32) -> Result<Date> {
        validate::check_valid_year(i64::from(year))?;
        Date::from_ymd(year as u16, self.month.number(), self.day)
    }
}

/// A rule that computes the date of Easter Sunday (Butcher's Gregorian
/// algorithm).
#[derive(Debug, Clone, Copy, Default)]
pub struct EasterSundayRule;

impl AnnualDateRule for EasterSundayRule {
    fn date_for_year(&self, year: i32) -> Result<Date> {
        validate::check_valid_year(i64::from(year))?;
        let g = year % 19;
        let c = year / 100;
        let h = (c - c / 4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
        let i = h - h / 28 * (1 - h / 28 * 29 / (h + 1) * (21 - g) / 11);
        let j = (year + year / 4 + i + 2 - c + c / 4) % 7;
        let l = i - j;
        let month = 3 + (l + 40) / 44;
        let day = l + 28 - 31 * (month / 4);
        Date::from_ymd(year as u16, month as u8, day as u8)
    }
}

/// Which occurrence of a weekday to select, relative to a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relative {
    /// The latest occurrence strictly before the reference date.
    Preceding,
    /// The occurrence closest to the reference date.
    Nearest,
    /// The earliest occurrence strictly after the reference date.
    Following,
}

/// A rule for a weekday relative to the date produced by another rule.
#[derive(Debug)]
pub struct RelativeDayOfWeekRule {
    sub_rule: Box<dyn AnnualDateRule>,
    weekday: Weekday,
    relative: Relative,
}

impl RelativeDayOfWeekRule {
    /// Create a rule selecting the `relative` occurrence of `weekday`
    /// around the date produced by `sub_rule`.
    pub fn new(sub_rule: Box<dyn AnnualDateRule>, weekday: Weekday, relative: Relative) -> Self {
        RelativeDayOfWeekRule {
            sub_rule,
            weekday,
            relative,
        }
    }

    /// Return the reference rule.
    pub fn sub_rule(&self) -> &dyn AnnualDateRule {
        self.sub_rule.as_ref()
    }

    /// Return the weekday this rule selects.
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Return which occurrence of the weekday is selected.
    pub fn relative(&self) -> Relative {
        self.relative
    }
}

impl AnnualDateRule for RelativeDayOfWeekRule {
    fn date_for_year(&self, year: i32) -> Result<Date> {
        validate::check_valid_year(i64::from(year))?;
        let base = self.sub_rule.date_for_year(year)?;
        match self.relative {
            Relative::Preceding => base.previous_day_of_week(self.weekday),
            Relative::Nearest => base.nearest_day_of_week(self.weekday),
            Relative::Following => base.following_day_of_week(self.weekday),
        }
    }
}
