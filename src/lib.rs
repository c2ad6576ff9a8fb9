//! Branch-free conversions between rata dies and proleptic Julian and
//! Gregorian dates, built from Euclidean affine functions (EAFs): maps of
//! the form `n -> (a * n + b) / d`.
//!
//! Every converter is a pure function over `i32` or `i64` and is exact on
//! a documented domain given by its [`Limits`]. Outside that domain the
//! arithmetic wraps and the result is wrong, but nothing panics. The
//! [`Calendar`] trait adds checked variants on top.
//!
//! ```
//! use eaf_calendar::{gregorian, Calendar, Date, GregorianOpt};
//!
//! // Canonical formulas count days from 1 March 0000.
//! assert_eq!(gregorian::to_date(719_468_i32), Date::new(1970, 1, 1));
//!
//! // The optimized formulas can count from 1970.
//! let unix = GregorianOpt::<i64>::unix();
//! assert_eq!(unix.to_rata_die(Date::new(2000, 3, 1)), 11_017);
//! assert!(unix.checked_to_date(i64::MAX).is_err());
//! ```
//!
//! The [`fast_eaf`] module derives the multiply-and-shift constants that
//! the optimized formulas use in place of division.

mod consts;
mod date;
pub mod euclid;
pub mod fast_eaf;
pub mod gregorian;
mod int;
pub mod julian;
mod limits;
mod prelude;
mod range;

#[cfg(test)]
mod test_utils;

pub use consts::*;
pub use date::{CalendarKind, Date};
pub use fast_eaf::{Eaf, FastEaf, Rounding, SynthesisError, synthesize};
pub use gregorian::{Gregorian, GregorianOpt};
pub use int::{Int, Width};
pub use julian::Julian;
pub use limits::{Limits, ShiftError};
pub use range::{Calendar, RangeError};
