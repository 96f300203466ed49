//! Integration tests for the `DayCounter` trait and built-in conventions.

use approx::assert_relative_eq;
use proptest::prelude::*;
use sd_time::{
    count_feb29s, Actual365Fixed, Date, DayCounter, Thirty360, Thirty360European, Thirty360Isda,
    Thirty360Psa, SERIAL_LOWER_BOUND, SERIAL_UPPER_BOUND,
};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn all_counters() -> [&'static dyn DayCounter; 5] {
    [
        &Actual365Fixed,
        &Thirty360,
        &Thirty360Isda,
        &Thirty360Psa,
        &Thirty360European,
    ]
}

/// Each case: start, end, expected counts for
/// (actual, 30/360, 30/360 ISDA, 30/360 PSA, 30E/360).
#[test]
fn convention_table() {
    let cases: Vec<(Date, Date, [i64; 5])> = vec![
        // a single ordinary day
        (date(2002, 4, 1), date(2002, 4, 2), [1, 1, 1, 1, 1]),
        // month-end 31sts: the conventions diverge
        (date(2002, 1, 31), date(2002, 3, 31), [59, 60, 60, 60, 60]),
        (date(2002, 1, 29), date(2002, 3, 31), [61, 62, 62, 62, 61]),
        (date(2002, 1, 30), date(2002, 3, 31), [60, 61, 60, 60, 60]),
        // end of February: only PSA clamps the start
        (date(2002, 2, 28), date(2002, 4, 2), [33, 34, 34, 32, 34]),
        (date(2000, 2, 29), date(2000, 4, 2), [33, 33, 33, 32, 33]),
        // a whole ordinary year
        (date(2003, 1, 1), date(2004, 1, 1), [365, 360, 360, 360, 360]),
        // a whole leap year
        (date(2004, 1, 1), date(2005, 1, 1), [366, 360, 360, 360, 360]),
    ];

    for (start, end, expected) in cases {
        for (dc, want) in all_counters().iter().zip(expected) {
            assert_eq!(
                dc.day_count(start, end),
                want,
                "{} from {start} to {end}",
                dc.name()
            );
        }
    }
}

#[test]
fn thirty_family_year_fractions() {
    let start = date(2003, 1, 1);
    let end = date(2003, 7, 1);
    for dc in &all_counters()[1..] {
        assert_relative_eq!(dc.year_fraction(start, end), 0.5);
    }
    assert_relative_eq!(Actual365Fixed.year_fraction(start, end), 181.0 / 365.0);
}

#[test]
fn count_feb29s_spans_the_century_rule() {
    assert_eq!(count_feb29s(date(2000, 2, 1), date(2000, 4, 29)), 1);
    assert_eq!(count_feb29s(date(2000, 2, 1), date(2010, 4, 29)), 3);
    // 2100 is not a leap year
    assert_eq!(count_feb29s(date(2099, 1, 1), date(2101, 12, 31)), 0);
    assert_eq!(count_feb29s(date(1999, 1, 1), date(2001, 1, 1)), 1);
}

proptest! {
    #[test]
    fn antisymmetry(
        a in SERIAL_LOWER_BOUND..=SERIAL_UPPER_BOUND,
        b in SERIAL_LOWER_BOUND..=SERIAL_UPPER_BOUND,
    ) {
        let da = Date::from_serial(a).unwrap();
        let db = Date::from_serial(b).unwrap();
        for dc in all_counters() {
            prop_assert_eq!(
                dc.day_count(da, db),
                -dc.day_count(db, da),
                "{} is not antisymmetric",
                dc.name()
            );
        }
    }

    #[test]
    fn equal_dates_always_count_zero(serial in SERIAL_LOWER_BOUND..=SERIAL_UPPER_BOUND) {
        let d = Date::from_serial(serial).unwrap();
        for dc in all_counters() {
            prop_assert_eq!(dc.day_count(d, d), 0, "{}", dc.name());
        }
    }

    #[test]
    fn actual_matches_the_serial_difference(
        a in SERIAL_LOWER_BOUND..=SERIAL_UPPER_BOUND,
        b in SERIAL_LOWER_BOUND..=SERIAL_UPPER_BOUND,
    ) {
        let da = Date::from_serial(a).unwrap();
        let db = Date::from_serial(b).unwrap();
        prop_assert_eq!(Actual365Fixed.day_count(da, db), i64::from(b - a));
    }
}
