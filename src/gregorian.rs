//! Proleptic Gregorian calendar.
//!
//! Two families of formulas are provided:
//!
//! - The canonical ones (`to_date`, `to_rata_die`) count days from 1 March
//!   0000 and follow the Julian algorithm with an extra century step.
//! - The optimized ones (`to_date_opt`, `to_rata_die_opt`) replace the
//!   divisions by 1461 and 153 with multiply-and-shift and work on the
//!   unsigned counterpart of the year type. They accept an epoch shift:
//!   `epoch` moves day 0 (719468 puts it on 1 January 1970) and `cycles`
//!   moves the smallest supported year `400 * cycles` years into the past.

use crate::{
    consts::{
        CENTURY_CYCLE, DAYS_BEFORE_MONTH_MULTIPLIER, DAYS_BEFORE_MONTH_OFFSET,
        DAYS_BEFORE_MONTH_SHIFT, DAYS_IN_400_YEARS, DAYS_IN_4_YEARS, FEBRUARY,
        JANUARY_DAY_OF_YEAR, MONTH_MULTIPLIER, MONTH_OFFSET, MONTH_SHIFT, UNIX_CYCLES, UNIX_EPOCH,
        YEARS_IN_400_YEARS, YEAR_MULTIPLIER, YEAR_SHIFT,
    },
    date::{CalendarKind, Date},
    euclid::{quotient, remainder},
    julian::{days_since_march, month_and_day},
    limits::{Limits, ShiftError},
    prelude::*,
    range::Calendar,
};

/// Finds the Gregorian date of a rata die counted from 1 March 0000.
///
/// Exact for `Limits::PLAIN.rata_die_min <= rata_die <= Limits::PLAIN.rata_die_max`.
pub fn to_date<T: Int>(rata_die: T) -> Date<T> {
    // Century.
    let n_1 = rata_die.wrapping_mul(&T::lift(4)).wrapping_add(&T::lift(3));
    let century = quotient(n_1, DAYS_IN_400_YEARS);
    let day_of_century = remainder(n_1, DAYS_IN_400_YEARS) / 4;

    // Year.
    let n_2 = 4 * day_of_century + 3;
    let year_of_century = n_2 / DAYS_IN_4_YEARS;
    let day_of_year = n_2 % DAYS_IN_4_YEARS / 4;
    let year = century * T::lift(CENTURY_CYCLE) + T::lift(year_of_century);

    // Month and day.
    let (month, day, january) = month_and_day(day_of_year);

    Date::new(year + T::lift(u32::from(january)), month, day)
}

/// Calculates the rata die, counted from 1 March 0000, of a Gregorian date.
///
/// Exact for valid dates in `[Limits::PLAIN.date_min, Limits::PLAIN.date_max]`.
pub fn to_rata_die<T: Int>(year: T, month: u8, day: u8) -> T {
    let (january, days) = days_since_march(month, day);
    let year = year.wrapping_sub(&T::lift(u32::from(january)));
    let century = quotient(year, CENTURY_CYCLE);

    let y_star = quotient(year.wrapping_mul(&T::lift(DAYS_IN_4_YEARS)), 4)
        .wrapping_sub(&century)
        .wrapping_add(&quotient(century, 4));
    y_star.wrapping_add(&T::lift(days)).wrapping_sub(&T::one())
}

/// Optimized `to_date` relative to a shifted epoch.
///
/// `epoch` and `cycles` are not validated. Use `GregorianOpt::new` to check
/// them once and get the matching limits.
pub fn to_date_opt<T: Int>(rata_die: T, epoch: T, cycles: T) -> Date<T> {
    let (day_shift, year_shift) = shift_constants(epoch, cycles);
    shifted_to_date(rata_die, day_shift, year_shift)
}

/// Optimized `to_rata_die` relative to a shifted epoch.
///
/// `epoch` and `cycles` are not validated, see `to_date_opt`.
pub fn to_rata_die_opt<T: Int>(year: T, month: u8, day: u8, epoch: T, cycles: T) -> T {
    let (day_shift, year_shift) = shift_constants(epoch, cycles);
    shifted_to_rata_die(year, month, day, day_shift, year_shift)
}

// K = epoch + 146097 * cycles, L = 400 * cycles
#[inline]
fn shift_constants<T: Int>(epoch: T, cycles: T) -> (T, T) {
    let day_shift = epoch.wrapping_add(&cycles.wrapping_mul(&T::lift(DAYS_IN_400_YEARS)));
    let year_shift = cycles.wrapping_mul(&T::lift(YEARS_IN_400_YEARS));
    (day_shift, year_shift)
}

#[allow(clippy::cast_possible_truncation)]
#[inline]
fn shifted_to_date<T: Int>(rata_die: T, day_shift: T, year_shift: T) -> Date<T> {
    // Rata die shift.
    let n = rata_die.to_unsigned().wrapping_add(&day_shift.to_unsigned());

    // Century.
    let n_1 = n.wrapping_mul(&T::lift_unsigned(4)).wrapping_add(&T::lift_unsigned(3));
    let century = n_1 / T::lift_unsigned(DAYS_IN_400_YEARS);
    let day_of_century = T::low_u32_unsigned(n_1 % T::lift_unsigned(DAYS_IN_400_YEARS)) / 4;

    // Year.
    let n_2 = 4 * day_of_century + 3;
    let p_2 = u64::from(YEAR_MULTIPLIER) * u64::from(n_2);
    let year_of_century = (p_2 >> YEAR_SHIFT) as u32;
    let day_of_year = (p_2 as u32) / YEAR_MULTIPLIER / 4;
    let year = century
        .wrapping_mul(&T::lift_unsigned(CENTURY_CYCLE))
        .wrapping_add(&T::lift_unsigned(year_of_century));

    // Month and day.
    let n_3 = MONTH_MULTIPLIER * day_of_year + MONTH_OFFSET;
    let month = n_3 >> MONTH_SHIFT;
    let day = (n_3 & ((1 << MONTH_SHIFT) - 1)) / MONTH_MULTIPLIER;

    // Map.
    let january = day_of_year >= JANUARY_DAY_OF_YEAR;
    let year = T::from_unsigned(year.wrapping_sub(&year_shift.to_unsigned()))
        .wrapping_add(&T::lift(u32::from(january)));
    let month = if january { month - 12 } else { month };

    Date::new(year, month as u8, (day + 1) as u8)
}

#[inline]
fn shifted_to_rata_die<T: Int>(year: T, month: u8, day: u8, day_shift: T, year_shift: T) -> T {
    // Map.
    let january = month <= FEBRUARY;
    let year = year
        .to_unsigned()
        .wrapping_add(&year_shift.to_unsigned())
        .wrapping_sub(&T::lift_unsigned(u32::from(january)));
    let month = u32::from(month) + if january { 12 } else { 0 };
    let century = year / T::lift_unsigned(CENTURY_CYCLE);

    // Rata die.
    let y_star = (year.wrapping_mul(&T::lift_unsigned(DAYS_IN_4_YEARS)) / T::lift_unsigned(4))
        .wrapping_sub(&century)
        .wrapping_add(&(century / T::lift_unsigned(4)));
    let m_star = (DAYS_BEFORE_MONTH_MULTIPLIER * month - DAYS_BEFORE_MONTH_OFFSET) >> DAYS_BEFORE_MONTH_SHIFT;
    let n = y_star
        .wrapping_add(&T::lift_unsigned(m_star + u32::from(day)))
        .wrapping_sub(&T::lift_unsigned(1));

    // Rata die shift.
    T::from_unsigned(n.wrapping_sub(&day_shift.to_unsigned()))
}

/// The proleptic Gregorian calendar with the canonical formulas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Gregorian;

impl<T: Int> Calendar<T> for Gregorian {
    const KIND: CalendarKind = CalendarKind::Gregorian;

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

/// The proleptic Gregorian calendar with the optimized formulas and a
/// validated epoch shift.
///
/// `Default` is the unshifted variant, whose day 0 is 1 March 0000 and
/// which supports no negative years. `unix()` counts from 1 January 1970
/// and supports years from -32800.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GregorianOpt<T> {
    epoch:      T,
    cycles:     T,
    day_shift:  T,
    year_shift: T,
    limits:     Limits<T>,
}

impl<T: Int> GregorianOpt<T> {
    /// Validates the shift and derives its limits.
    ///
    /// # Errors
    /// Returns `ShiftError` if `epoch + 146097 * cycles` or `400 * cycles`
    /// does not fit the unsigned domain of `T`.
    pub fn new(epoch: T, cycles: T) -> Result<Self, ShiftError> {
        let limits = T::shifted_limits(epoch, cycles)?;
        Ok(Self::from_limits(epoch, cycles, limits))
    }

    /// Day 0 is 1 January 1970.
    pub fn unix() -> Self {
        Self::from_limits(T::lift(UNIX_EPOCH), T::lift(UNIX_CYCLES), T::unix_limits())
    }

    // K and L are recovered from the lower limits, which are -K and -L.
    fn from_limits(epoch: T, cycles: T, limits: Limits<T>) -> Self {
        Self {
            epoch,
            cycles,
            day_shift: -limits.rata_die_min,
            year_shift: -limits.date_min.year,
            limits,
        }
    }

    /// Rata die of this converter's day 0, in the canonical count.
    pub fn epoch(&self) -> T {
        self.epoch
    }

    /// Number of 400-year cycles moved into the unsigned domain.
    pub fn cycles(&self) -> T {
        self.cycles
    }

    /// `K = epoch + 146097 * cycles`
    pub fn day_shift(&self) -> T {
        self.day_shift
    }

    /// `L = 400 * cycles`
    pub fn year_shift(&self) -> T {
        self.year_shift
    }
}

impl<T: Int> Default for GregorianOpt<T> {
    fn default() -> Self {
        Self::from_limits(T::zero(), T::zero(), T::optimized_limits())
    }
}

impl<T: Int> Calendar<T> for GregorianOpt<T> {
    const KIND: CalendarKind = CalendarKind::Gregorian;

    fn to_date(&self, rata_die: T) -> Date<T> {
        shifted_to_date(rata_die, self.day_shift, self.year_shift)
    }

    fn to_rata_die(&self, date: Date<T>) -> T {
        shifted_to_rata_die(date.year, date.month, date.day, self.day_shift, self.year_shift)
    }

    fn limits(&self) -> Limits<T> {
        self.limits
    }
}
