//! Integration tests for the serial-number conversion engine.
//!
//! The conversion between serial numbers and (year, month, day) triples
//! must be an exact bijection over the whole supported range, so these
//! tests sweep the full range once and back it up with property tests.

use proptest::prelude::*;
use sd_time::tables;
use sd_time::{Date, Weekday, SERIAL_LOWER_BOUND, SERIAL_UPPER_BOUND};

/// Walk every serial number from 1900-01-01 to 9999-12-31, tracking the
/// expected triple by hand, and check both conversion directions.
#[test]
fn full_range_bijection() {
    let mut year: u16 = 1900;
    let mut month: u8 = 1;
    let mut day: u8 = 1;

    for serial in SERIAL_LOWER_BOUND..=SERIAL_UPPER_BOUND {
        let from_serial = Date::from_serial(serial).unwrap();
        assert_eq!(
            (from_serial.year(), from_serial.month(), from_serial.day_of_month()),
            (year, month, day),
            "serial {serial} decomposed incorrectly"
        );

        let from_ymd = Date::from_ymd(year, month, day).unwrap();
        assert_eq!(
            from_ymd.serial(),
            serial,
            "{year:04}-{month:02}-{day:02} converted incorrectly"
        );

        // advance the reference triple one day
        if day < last_day(month, year) {
            day += 1;
        } else {
            day = 1;
            if month < 12 {
                month += 1;
            } else {
                month = 1;
                year += 1;
            }
        }
    }
}

fn last_day(month: u8, year: u16) -> u8 {
    tables::last_day_of_month(month, i32::from(year)).unwrap()
}

#[test]
fn weekday_advances_cyclically() {
    // serial 2 is a Monday (code 2); each next serial moves one weekday on
    let mut expected = 2u8;
    for serial in SERIAL_LOWER_BOUND..SERIAL_LOWER_BOUND + 1_000 {
        let date = Date::from_serial(serial).unwrap();
        assert_eq!(date.weekday().code(), expected);
        expected = expected % 7 + 1;
    }
}

#[test]
fn leap_year_count_matches_iteration() {
    let mut count = 0;
    for year in 1900..=9999 {
        if tables::is_leap_year(year).unwrap() {
            count += 1;
        }
        assert_eq!(tables::leap_year_count(year).unwrap(), count);
    }
    assert_eq!(tables::leap_year_count(9999).unwrap(), 1964);
}

proptest! {
    #[test]
    fn serial_roundtrip(serial in SERIAL_LOWER_BOUND..=SERIAL_UPPER_BOUND) {
        let date = Date::from_serial(serial).unwrap();
        let rebuilt = Date::from_ymd(date.year(), date.month(), date.day_of_month()).unwrap();
        prop_assert_eq!(rebuilt.serial(), serial);
    }

    #[test]
    fn serial_order_is_date_order(
        a in SERIAL_LOWER_BOUND..=SERIAL_UPPER_BOUND,
        b in SERIAL_LOWER_BOUND..=SERIAL_UPPER_BOUND,
    ) {
        let da = Date::from_serial(a).unwrap();
        let db = Date::from_serial(b).unwrap();
        prop_assert_eq!(da.cmp(&db), a.cmp(&b));
        prop_assert_eq!(da.is_before(db), a < b);
        prop_assert_eq!(da.is_on_or_after(db), a >= b);
    }

    #[test]
    fn add_days_shifts_the_serial(
        serial in SERIAL_LOWER_BOUND..=SERIAL_UPPER_BOUND,
        days in -400i32..=400,
    ) {
        let date = Date::from_serial(serial).unwrap();
        match date.add_days(days) {
            Ok(shifted) => prop_assert_eq!(shifted.serial(), serial + days),
            Err(_) => {
                let target = i64::from(serial) + i64::from(days);
                prop_assert!(
                    target < i64::from(SERIAL_LOWER_BOUND)
                        || target > i64::from(SERIAL_UPPER_BOUND)
                );
            }
        }
    }

    #[test]
    fn weekday_searches_stay_within_a_week(
        serial in SERIAL_LOWER_BOUND + 7..=SERIAL_UPPER_BOUND - 7,
        code in 1u8..=7,
    ) {
        let date = Date::from_serial(serial).unwrap();
        let target = Weekday::from_code(code).unwrap();

        let prev = date.previous_day_of_week(target).unwrap();
        prop_assert_eq!(prev.weekday(), target);
        prop_assert!((1..=7).contains(&(date - prev)));

        let next = date.following_day_of_week(target).unwrap();
        prop_assert_eq!(next.weekday(), target);
        prop_assert!((1..=7).contains(&(next - date)));

        let near = date.nearest_day_of_week(target).unwrap();
        prop_assert_eq!(near.weekday(), target);
        prop_assert!((-3..=3).contains(&(near - date)));
        // nearest is one of the other two results, or the date itself
        prop_assert!(near == prev || near == next || near == date);
    }
}
