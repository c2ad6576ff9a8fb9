use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    consts::{
        CENTURY_CYCLE, DAYS_IN_MONTH, DECEMBER, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
        JANUARY, LEAP_YEAR_CYCLE,
    },
    euclid::remainder,
    prelude::*,
};

/// A proleptic calendar date.
///
/// The type does not enforce validity: converters produce valid dates and
/// assume valid input. Ordering is lexicographic on (year, month, day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Date<T> {
    pub year:  T,
    pub month: u8,
    pub day:   u8,
}

impl<T> Date<T> {
    /// Builds a date without checking month or day.
    pub const fn new(year: T, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }
}

impl<T: Int> Date<T> {
    /// Whether month and day form a legal date under `kind`'s leap rule.
    pub fn is_valid_in(&self, kind: CalendarKind) -> bool {
        (JANUARY..=DECEMBER).contains(&self.month)
            && self.day >= 1
            && self.day <= kind.days_in_month(self.year, self.month)
    }
}

impl<T> From<(T, u8, u8)> for Date<T> {
    fn from((year, month, day): (T, u8, u8)) -> Self {
        Self { year, month, day }
    }
}

impl<T: fmt::Display> fmt::Display for Date<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.year, self.month, self.day)
    }
}

/// Leap rule selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarKind {
    #[display(fmt = "Julian")]
    Julian,
    #[display(fmt = "Gregorian")]
    Gregorian,
}

impl CalendarKind {
    /// Works for negative years: year 0 is leap in both calendars.
    pub fn is_leap_year<T: Int>(self, year: T) -> bool {
        let quadrennial = remainder(year, LEAP_YEAR_CYCLE) == 0;
        match self {
            Self::Julian => quadrennial,
            Self::Gregorian => {
                (quadrennial && remainder(year, CENTURY_CYCLE) != 0)
                    || remainder(year, GREGORIAN_CYCLE) == 0
            },
        }
    }

    /// Returns 0 for a month outside `1..=12`.
    pub fn days_in_month<T: Int>(self, year: T, month: u8) -> u8 {
        if month == FEBRUARY && self.is_leap_year(year) {
            FEBRUARY_DAYS_LEAP
        } else {
            DAYS_IN_MONTH.get(usize::from(month)).copied().unwrap_or(0)
        }
    }
}
