//! Euclidean division by a positive divisor.
//!
//! Native `/` and `%` truncate towards zero. The converters need floor
//! division so that sub-results stay in a bounded, non-negative range for
//! negative rata dies and years.

use crate::prelude::*;

/// Returns `floor(n / d)`.
///
/// Defined for every `n`, including `T::MIN`. `d` must be positive and fit
/// in `T`.
#[inline]
pub fn quotient<T: Int>(n: T, d: u32) -> T {
    debug_assert!(d > 0);
    let d = T::lift(d);
    if n >= T::zero() {
        n / d
    } else {
        // (n + 1) / d rounds towards zero from above, one less is the floor.
        (n + T::one()) / d - T::one()
    }
}

/// Returns `n - d * quotient(n, d)`, which lies in `[0, d)`.
#[inline]
pub fn remainder<T: Int>(n: T, d: u32) -> u32 {
    debug_assert!(d > 0);
    let r = n % T::lift(d);
    if r < T::zero() {
        (r + T::lift(d)).low_u32()
    } else {
        r.low_u32()
    }
}
