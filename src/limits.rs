//! Overflow-free domains of the conversion formulas.
//!
//! Each bound comes from the first product in a formula that could leave
//! the integer type. For `to_date` that is `4 * N + 3`, for `to_rata_die`
//! it is `1461 * Y`, where `Y` is the March-based year (one less than the
//! calendar year in January and February).

use serde::{Deserialize, Serialize};

use crate::{
    consts::{
        DAYS_IN_400_YEARS, DAYS_IN_4_YEARS, FEBRUARY, MARCH, UNIX_CYCLES, UNIX_EPOCH,
        YEARS_IN_400_YEARS,
    },
    date::Date,
    prelude::*,
};

/// Domain on which a converter is exact.
///
/// `to_date(n)` is correct for `rata_die_min <= n <= rata_die_max` and
/// `to_rata_die(date)` is correct for `date_min <= date <= date_max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Limits<T> {
    pub rata_die_min: T,
    pub rata_die_max: T,
    pub date_min:     Date<T>,
    pub date_max:     Date<T>,
}

/// Error for an epoch shift the optimized formulas cannot support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ShiftError {
    /// `epoch + 146097 * cycles` or `400 * cycles` overflows.
    #[error("Shift of {cycles} cycles from epoch {epoch} is not representable")]
    Overflow { epoch: i64, cycles: i64 },

    /// The shifted epoch leaves no room in the unsigned domain.
    #[error("Shifted epoch {shift} is outside [0, {max}]")]
    EpochOutOfRange { shift: i64, max: i64 },

    /// The year shift leaves no room in the unsigned domain.
    #[error("Year shift {shift} is outside [0, {max}]")]
    YearShiftOutOfRange { shift: i64, max: i64 },
}

impl<T: Int> Limits<T> {
    /// Whether `rata_die` lies in `[rata_die_min, rata_die_max]`.
    pub fn contains_rata_die(&self, rata_die: T) -> bool {
        self.rata_die_min <= rata_die && rata_die <= self.rata_die_max
    }

    /// Whether `date` lies in `[date_min, date_max]`, compared
    /// lexicographically. Does not check that the date is valid.
    pub fn contains_date(&self, date: &Date<T>) -> bool {
        self.date_min <= *date && *date <= self.date_max
    }
}

macro_rules! impl_limits {
    ($t:ty, $u:ty) => {
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_possible_wrap,
            clippy::cast_lossless
        )]
        impl Limits<$t> {
            /// Limits of the Julian and canonical Gregorian formulas.
            ///
            /// For `N >= 0`, `4 * N + 3 <= MAX` iff `N <= (MAX - 3) / 4`. For
            /// `N < 0`, `4 * N >= MIN` iff `N >= MIN / 4`. Likewise
            /// `1461 * Y` stays in range for `MIN / 1461 <= Y <= MAX / 1461`,
            /// and January and February belong to the previous March-based
            /// year, which moves the upper date bound to 28 February of the
            /// following year. The leap day after it may also be safe, so the
            /// upper date bound is not always sharp.
            pub const PLAIN: Self = Self {
                rata_die_min: <$t>::MIN / 4,
                rata_die_max: (<$t>::MAX - 3) / 4,
                date_min:     Date::new(<$t>::MIN / DAYS_IN_4_YEARS as $t, MARCH, 1),
                date_max:     Date::new(<$t>::MAX / DAYS_IN_4_YEARS as $t + 1, FEBRUARY, 28),
            };

            /// Limits of the optimized Gregorian formulas without shift.
            pub const OPTIMIZED: Self = match Self::shifted(0, 0) {
                Ok(limits) => limits,
                Err(_) => panic!("the unshifted optimized limits are always representable"),
            };

            /// Limits of the optimized Gregorian formulas with the Unix epoch.
            pub const UNIX: Self = match Self::shifted(UNIX_EPOCH as $t, UNIX_CYCLES as $t) {
                Ok(limits) => limits,
                Err(_) => panic!("the Unix shift is always representable"),
            };

            /// Limits of the optimized Gregorian formulas shifted by
            /// `K = epoch + 146097 * cycles` days and `L = 400 * cycles` years.
            ///
            /// `to_date` works on `N = N_U + K` in the unsigned domain, so it
            /// needs `0 <= N_U + K <= (UMAX - 3) / 4`. `to_rata_die` works on
            /// `Y = Y_G + L - J` and needs `0 <= Y <= UMAX / 1461`.
            ///
            /// # Errors
            /// Returns `ShiftError` if `K` or `L` overflows or falls outside
            /// the unsigned domain.
            pub const fn shifted(epoch: $t, cycles: $t) -> Result<Self, ShiftError> {
                let n_max = ((<$u>::MAX - 3) / 4) as $t;
                let y_max = (<$u>::MAX / DAYS_IN_4_YEARS as $u) as $t;

                let k = match cycles.checked_mul(DAYS_IN_400_YEARS as $t) {
                    Some(days) => epoch.checked_add(days),
                    None => None,
                };
                let (Some(k), Some(l)) = (k, cycles.checked_mul(YEARS_IN_400_YEARS as $t)) else {
                    return Err(ShiftError::Overflow { epoch: epoch as i64, cycles: cycles as i64 });
                };

                if k < 0 || k > n_max {
                    return Err(ShiftError::EpochOutOfRange { shift: k as i64, max: n_max as i64 });
                }
                if l < 0 || l > y_max {
                    return Err(ShiftError::YearShiftOutOfRange { shift: l as i64, max: y_max as i64 });
                }

                Ok(Self {
                    rata_die_min: -k,
                    rata_die_max: n_max - k,
                    date_min:     Date::new(-l, MARCH, 1),
                    date_max:     Date::new(y_max - l + 1, FEBRUARY, 28),
                })
            }
        }
    };
}

impl_limits!(i32, u32);
impl_limits!(i64, u64);
