use crate::{
    date::{CalendarKind, Date},
    limits::Limits,
    prelude::*,
};

/// Error type for the checked conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RangeError<T: Int> {
    /// Rata die outside the converter's exact domain.
    #[error("Rata die {rata_die} is out of range [{min}, {max}]")]
    RataDieOutOfRange { rata_die: T, min: T, max: T },

    /// Date outside the converter's exact domain.
    #[error("Date {date} is out of range [{min}, {max}]")]
    DateOutOfRange { date: Date<T>, min: Date<T>, max: Date<T> },

    /// Month not in 1-12, or day not in that month.
    #[error("Invalid {kind} date: {date}")]
    InvalidDate { date: Date<T>, kind: CalendarKind },
}

/// A rata die ⇄ date converter over `T`.
///
/// `to_date` and `to_rata_die` never check their input: outside `limits()`
/// the result wraps around and is wrong, but never panics. The `checked_`
/// variants validate first.
pub trait Calendar<T: Int> {
    /// Leap rule the converter follows.
    const KIND: CalendarKind;

    fn to_date(&self, rata_die: T) -> Date<T>;

    fn to_rata_die(&self, date: Date<T>) -> T;

    fn limits(&self) -> Limits<T>;

    /// Like `to_date` but rejects a rata die outside `limits()`.
    ///
    /// # Errors
    /// Returns `RangeError::RataDieOutOfRange` if the result would be wrong.
    fn checked_to_date(&self, rata_die: T) -> Result<Date<T>, RangeError<T>> {
        let limits = self.limits();
        if !limits.contains_rata_die(rata_die) {
            #[cfg(feature = "log")]
            log::warn!(
                "{} rata die {rata_die} is out of range [{}, {}]",
                Self::KIND,
                limits.rata_die_min,
                limits.rata_die_max
            );
            return Err(RangeError::RataDieOutOfRange {
                rata_die,
                min: limits.rata_die_min,
                max: limits.rata_die_max,
            });
        }
        Ok(self.to_date(rata_die))
    }

    /// Like `to_rata_die` but rejects invalid dates and dates outside
    /// `limits()`.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidDate` if the month or day is not legal in
    /// this calendar, or `RangeError::DateOutOfRange` if the result would be
    /// wrong.
    fn checked_to_rata_die(&self, date: Date<T>) -> Result<T, RangeError<T>> {
        if !date.is_valid_in(Self::KIND) {
            #[cfg(feature = "log")]
            log::warn!("invalid {} date {date}", Self::KIND);
            return Err(RangeError::InvalidDate { date, kind: Self::KIND });
        }

        let limits = self.limits();
        if !limits.contains_date(&date) {
            #[cfg(feature = "log")]
            log::warn!(
                "{} date {date} is out of range [{}, {}]",
                Self::KIND,
                limits.date_min,
                limits.date_max
            );
            return Err(RangeError::DateOutOfRange { date, min: limits.date_min, max: limits.date_max });
        }
        Ok(self.to_rata_die(date))
    }
}
