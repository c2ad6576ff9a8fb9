//! Proleptic Julian calendar.
//!
//! Rata dies count days from 1 March 0000. Every leap year is a multiple
//! of 4 and no branch ever tests it: the year and day-of-year come out of a
//! single Euclidean division of `4 * N + 3` by 1461.

use crate::{
    consts::{DAYS_IN_4_YEARS, FEBRUARY},
    date::{CalendarKind, Date},
    euclid::{quotient, remainder},
    limits::Limits,
    prelude::*,
    range::Calendar,
};

/// Finds the Julian date of a rata die.
///
/// Exact for `Limits::PLAIN.rata_die_min <= rata_die <= Limits::PLAIN.rata_die_max`.
/// Outside that range the result wraps and is meaningless, but never panics.
pub fn to_date<T: Int>(rata_die: T) -> Date<T> {
    // Year.
    let n_1 = rata_die.wrapping_mul(&T::lift(4)).wrapping_add(&T::lift(3));
    let year = quotient(n_1, DAYS_IN_4_YEARS);
    let day_of_year = remainder(n_1, DAYS_IN_4_YEARS) / 4;

    // Month and day.
    let (month, day, january) = month_and_day(day_of_year);

    Date::new(year + T::lift(u32::from(january)), month, day)
}

/// Calculates the rata die of a Julian date.
///
/// Exact for valid dates in `[Limits::PLAIN.date_min, Limits::PLAIN.date_max]`.
/// An invalid day of month gives an unspecified value.
pub fn to_rata_die<T: Int>(year: T, month: u8, day: u8) -> T {
    let (january, days) = days_since_march(month, day);
    let year = year.wrapping_sub(&T::lift(u32::from(january)));

    let y_star = quotient(year.wrapping_mul(&T::lift(DAYS_IN_4_YEARS)), 4);
    y_star.wrapping_add(&T::lift(days)).wrapping_sub(&T::one())
}

/// Month and day from the day of the March-based year.
///
/// Evaluates `(5 * n + 461) / 153` for the month, counting January and
/// February as months 13 and 14. The flag is set for those two, whose
/// calendar year is one more than the March-based year.
#[allow(clippy::cast_possible_truncation)]
#[inline]
pub(crate) const fn month_and_day(day_of_year: u32) -> (u8, u8, bool) {
    let n_2 = 5 * day_of_year + 461;
    let m = n_2 / 153;
    let d = n_2 % 153 / 5;
    let january = m >= 13;
    let month = if january { m - 12 } else { m };
    (month as u8, (d + 1) as u8, january)
}

/// Splits a date into the March-based year offset and the days from
/// 1 March plus one.
///
/// `(153 * M - 457) / 5` is the number of days from 1 March to the first
/// of month `M`, with January and February as 13 and 14.
#[allow(clippy::cast_lossless)]
#[inline]
pub(crate) const fn days_since_march(month: u8, day: u8) -> (bool, u32) {
    let january = month <= FEBRUARY;
    let m = if january { month as u32 + 12 } else { month as u32 };
    let m_star = (153 * m - 457) / 5;
    (january, m_star + day as u32)
}

/// The proleptic Julian calendar on `i32` or `i64`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Julian;

impl<T: Int> Calendar<T> for Julian {
    const KIND: CalendarKind = CalendarKind::Julian;

    fn to_date(&self, rata_die: T) -> Date<T> {
        to_date(rata_die)
    }

    fn to_rata_die(&self, date: Date<T>) -> T {
        to_rata_die(date.year, date.month, date.day)
    }

    fn limits(&self) -> Limits<T> {
        T::plain_limits()
    }
}
