#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::missing_panics_doc
)]

use std::ops::Range;

use calendrical_calculations::{
    gregorian::{fixed_from_gregorian, gregorian_from_fixed},
    rata_die::RataDie,
};

use crate::{
    date::{CalendarKind, Date},
    prelude::*,
    range::Calendar,
};

/// Unix days covering 400 years on each side of 1970.
pub const UNIX_WINDOW: Range<i32> = -146_097..146_097;

// Unix day 0 is fixed day 719163 in the 1 January 0001 count.
const UNIX_FIXED: i64 = 719_163;

/// The day after `date`.
pub fn advance<T: Int>(kind: CalendarKind, date: Date<T>) -> Date<T> {
    if date.day < kind.days_in_month(date.year, date.month) {
        Date::new(date.year, date.month, date.day + 1)
    } else if date.month < 12 {
        Date::new(date.year, date.month + 1, 1)
    } else {
        Date::new(date.year + T::one(), 1, 1)
    }
}

/// The day before `date`.
pub fn regress<T: Int>(kind: CalendarKind, date: Date<T>) -> Date<T> {
    if date.day > 1 {
        Date::new(date.year, date.month, date.day - 1)
    } else if date.month > 1 {
        Date::new(date.year, date.month - 1, kind.days_in_month(date.year, date.month - 1))
    } else {
        Date::new(date.year - T::one(), 12, 31)
    }
}

/// Checks `count` consecutive rata dies from `start`: each date is the day
/// after the previous one, and dates inside the limits map back.
pub fn assert_steps<T: Int, C: Calendar<T>>(calendar: &C, start: T, count: u32) {
    let limits = calendar.limits();
    let mut n = start;
    let mut date = calendar.to_date(n);
    for _ in 0..count {
        if limits.contains_date(&date) {
            assert_eq!(calendar.to_rata_die(date), n, "to_rata_die({date})");
        }
        let next = calendar.to_date(n + T::one());
        assert_eq!(next, advance(C::KIND, date), "to_date({}) after {date}", n + T::one());
        n = n + T::one();
        date = next;
    }
}

fn narrow<T: Int>(value: i128) -> T {
    num_traits::cast(value).expect("value should fit the narrow type")
}

// (5 * n + 461) / 153 with the January and February roll-over.
fn wide_month_and_day(year: i128, day_of_year: i128) -> (i128, u8, u8) {
    let n = 5 * day_of_year + 461;
    let month = n / 153;
    let day = n % 153 / 5 + 1;
    if month >= 13 { (year + 1, (month - 12) as u8, day as u8) } else { (year, month as u8, day as u8) }
}

fn wide_days_since_march(date: Date<i128>) -> (i128, i128) {
    let january = date.month <= 2;
    let year = if january { date.year - 1 } else { date.year };
    let month = i128::from(date.month) + if january { 12 } else { 0 };
    (year, (153 * month - 457) / 5 + i128::from(date.day) - 1)
}

fn widen_date<T: Int>(date: Date<T>) -> Date<i128> {
    Date::new(date.year.widen(), date.month, date.day)
}

/// Julian `to_date` evaluated in `i128`, where nothing overflows.
pub fn wide_julian_to_date<T: Int>(rata_die: T) -> Date<T> {
    let n = 4 * rata_die.widen() + 3;
    let (year, month, day) = wide_month_and_day(n.div_euclid(1461), n.rem_euclid(1461) / 4);
    Date::new(narrow(year), month, day)
}

/// Gregorian `to_date` evaluated in `i128`.
pub fn wide_gregorian_to_date<T: Int>(rata_die: T) -> Date<T> {
    let n_1 = 4 * rata_die.widen() + 3;
    let century = n_1.div_euclid(146_097);
    let n_2 = n_1.rem_euclid(146_097) / 4 * 4 + 3;
    let year = 100 * century + n_2 / 1461;
    let (year, month, day) = wide_month_and_day(year, n_2 % 1461 / 4);
    Date::new(narrow(year), month, day)
}

/// Julian `to_rata_die` evaluated in `i128`. `None` if the exact rata die
/// does not fit `T`.
pub fn wide_julian_to_rata_die<T: Int>(date: Date<T>) -> Option<T> {
    let (year, days) = wide_days_since_march(widen_date(date));
    num_traits::cast((1461 * year).div_euclid(4) + days)
}

/// Gregorian `to_rata_die` evaluated in `i128`.
pub fn wide_gregorian_to_rata_die<T: Int>(date: Date<T>) -> Option<T> {
    let (year, days) = wide_days_since_march(widen_date(date));
    let century = year.div_euclid(100);
    num_traits::cast((1461 * year).div_euclid(4) - century + century.div_euclid(4) + days)
}

/// Gregorian date of a Unix day from `calendrical_calculations`.
pub fn iso_from_unix(unix_day: i32) -> Date<i32> {
    let (year, month, day) = gregorian_from_fixed(RataDie::new(i64::from(unix_day) + UNIX_FIXED))
        .expect("year should fit i32");
    Date::new(year, month, day)
}

/// Unix day of a Gregorian date from `calendrical_calculations`.
pub fn unix_from_iso(date: Date<i32>) -> i32 {
    let fixed = fixed_from_gregorian(date.year, date.month, date.day).to_i64_date();
    i32::try_from(fixed - UNIX_FIXED).expect("unix day should fit i32")
}

#[path = "../benches/reference/mod.rs"]
mod reference;

pub use reference::{boost, fliegel_van_flandern, hatcher};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_and_regress() {
        struct TestCase {
            kind:  CalendarKind,
            date:  (i32, u8, u8),
            after: (i32, u8, u8),
        }

        let cases = [
            TestCase { kind: CalendarKind::Gregorian, date: (2024, 2, 28), after: (2024, 2, 29) },
            TestCase { kind: CalendarKind::Gregorian, date: (1900, 2, 28), after: (1900, 3, 1) },
            TestCase { kind: CalendarKind::Julian, date: (1900, 2, 28), after: (1900, 2, 29) },
            TestCase { kind: CalendarKind::Julian, date: (-1, 12, 31), after: (0, 1, 1) },
            TestCase { kind: CalendarKind::Gregorian, date: (2024, 4, 30), after: (2024, 5, 1) },
        ];

        for case in &cases {
            let date = Date::from(case.date);
            let after = Date::from(case.after);
            assert_eq!(advance(case.kind, date), after, "advance {date}");
            assert_eq!(regress(case.kind, after), date, "regress {after}");
        }
    }

    #[test]
    fn test_reference_epochs() {
        let epoch = Date::new(1970, 1, 1);
        assert_eq!(fliegel_van_flandern::to_date(0), epoch);
        assert_eq!(hatcher::to_date(0), epoch);
        assert_eq!(boost::to_date(0), epoch);
        assert_eq!(iso_from_unix(0), epoch);
        assert_eq!(unix_from_iso(Date::new(2000, 3, 1)), 11_017);
    }

    #[test]
    fn test_wide_references() {
        assert_eq!(wide_gregorian_to_date(719_468_i64), Date::new(1970, 1, 1));
        assert_eq!(wide_julian_to_date(719_483_i32), Date::new(1970, 1, 1));
        assert_eq!(wide_gregorian_to_rata_die(Date::new(-400_i32, 3, 1)), Some(-146_097));
        assert_eq!(wide_julian_to_rata_die(Date::new(i32::MAX, 1, 1)), None);
    }
}
