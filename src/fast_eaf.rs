//! Synthesis of fast EAFs.
//!
//! An EAF `f(n) = (a * n + b) / d` with an arbitrary divisor can be
//! replaced on a bounded domain by `(a' * n + b') >> k`, whose divisor is a
//! power of two. [`synthesize`] computes `a'`, `b'` and the largest `U` such
//! that both agree for every `0 <= n < U`.
//!
//! `a'` approximates `2^k * a / d`, rounded up or down. The constants of the
//! optimized Gregorian formulas come from here:
//!
//! ```
//! use eaf_calendar::{Rounding, synthesize};
//!
//! // 2939745 * n >> 32 == n / 1461 for n < 28825529
//! let year = synthesize(Rounding::Up, 1, 0, 1461, 32).unwrap();
//! assert_eq!((year.a, year.b, year.upper_bound), (2_939_745, 0, 28_825_529));
//! ```
//!
//! The search scans all `d` residues and uses arbitrary precision integers.
//! It is meant for design time, not hot paths.

use std::fmt;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};

use crate::prelude::Display;

/// How `2^k * a / d` is rounded to get `a'`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rounding {
    /// `a' = floor(2^k * a / d) + 1`
    #[display(fmt = "up")]
    Up,
    /// `a' = floor(2^k * a / d)`
    #[display(fmt = "down")]
    Down,
}

/// Coefficients of `f(n) = floor((a * n + b) / d)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Eaf {
    pub a: u64,
    pub b: i64,
    pub d: u64,
}

impl Eaf {
    pub const fn new(a: u64, b: i64, d: u64) -> Self {
        Self { a, b, d }
    }

    /// Evaluates `f(n)`. `None` if `d` is 0 or the numerator overflows `i128`.
    pub fn apply(&self, n: u64) -> Option<i128> {
        let numerator = i128::from(self.a).checked_mul(i128::from(n))?.checked_add(i128::from(self.b))?;
        (self.d != 0).then(|| numerator.div_euclid(i128::from(self.d)))
    }
}

/// Coefficients and upper bound of a fast EAF `(a * n + b) >> k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FastEaf {
    pub a:           u64,
    pub b:           i64,
    pub k:           u32,
    /// Exclusive bound of the domain `[0, upper_bound)` on which the fast
    /// EAF agrees with the one it replaces. `u64::MAX` when it agrees everywhere.
    pub upper_bound: u64,
}

impl FastEaf {
    /// `d' = 2^k`, which needs 65 bits for `k == 64`.
    pub const fn divisor(&self) -> u128 {
        1 << self.k
    }

    /// Evaluates `(a * n + b) >> k`. `None` if the numerator overflows `i128`.
    pub fn apply(&self, n: u64) -> Option<i128> {
        let numerator = i128::from(self.a).checked_mul(i128::from(n))?.checked_add(i128::from(self.b))?;
        Some(numerator >> self.k)
    }
}

impl fmt::Display for FastEaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "a'          = {}", self.a)?;
        writeln!(f, "b'          = {}", self.b)?;
        writeln!(f, "d'          = {}", self.divisor())?;
        writeln!(f, "k           = {}", self.k)?;
        write!(f, "upper bound = {}", self.upper_bound)
    }
}

/// Error type for [`synthesize`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SynthesisError {
    #[error("k must be in [1, 64], got {0}")]
    ExponentOutOfRange(u32),

    #[error("d must be positive")]
    ZeroDivisor,

    /// `k` is too large for this EAF: a result needs more than 64 bits.
    #[error("{coefficient} = {value} does not fit in 64 bits")]
    Overflow { coefficient: &'static str, value: BigInt },
}

/// Finds the fast EAF `(a' * n + b') >> k` equal to `(a * n + b) / d` on
/// the largest possible `[0, U)`.
///
/// # Errors
/// Returns `SynthesisError` if `k` is not in `[1, 64]`, if `d` is 0, or if
/// `a'`, `b'` or `U` does not fit its 64-bit output.
pub fn synthesize(rounding: Rounding, a: u64, b: i64, d: u64, k: u32) -> Result<FastEaf, SynthesisError> {
    if !(1..=64).contains(&k) {
        return Err(SynthesisError::ExponentOutOfRange(k));
    }
    if d == 0 {
        return Err(SynthesisError::ZeroDivisor);
    }

    #[cfg(feature = "log")]
    log::debug!("synthesizing fast EAF for ({a} * n + {b}) / {d}, k = {k}, rounding {rounding}");

    let a_big = BigInt::from(a);
    let b_big = BigInt::from(b);
    let d_big = BigInt::from(d);
    let p2_k = BigInt::one() << k;

    let (q, r) = (&p2_k * &a_big).div_mod_floor(&d_big);
    let (a_prime, epsilon) = match rounding {
        Rounding::Up => (q + 1, &d_big - r),
        Rounding::Down => (q, r),
    };

    // g(n) = a' * n - 2^k * f(n)
    let g = |n: u64| {
        let n = BigInt::from(n);
        let f_n = (&a_big * &n + &b_big).div_floor(&d_big);
        &a_prime * n - &p2_k * f_n
    };

    // Rounding up, b' lifts min g to 0. Rounding down, b' puts max g at 2^k - 1.
    let b_prime = match rounding {
        Rounding::Up => -(1..d).map(&g).fold(g(0), std::cmp::min),
        Rounding::Down => &p2_k - 1 - (1..d).map(&g).fold(g(0), std::cmp::max),
    };

    // For each residue n, the first failure is at P(n) = Q(n) * d + n, where
    // Q(n) is the least q >= 0 with
    //   up:   epsilon * q >= 2^k - (g(n) + b')
    //   down: epsilon * q >  g(n) + b'
    // Rounding down with epsilon == 0 never fails.
    let mut upper_bound: Option<BigInt> = None;
    for n in 0..d {
        let q_n = match rounding {
            Rounding::Up => {
                let h = &p2_k - (g(n) + &b_prime);
                if h.is_positive() { h.div_ceil(&epsilon) } else { BigInt::zero() }
            },
            Rounding::Down => {
                let h = g(n) + &b_prime;
                if h.is_negative() {
                    BigInt::zero()
                } else if epsilon.is_zero() {
                    continue;
                } else {
                    h / &epsilon + 1
                }
            },
        };
        let p_n = q_n * &d_big + n;
        upper_bound = match upper_bound {
            Some(bound) if bound <= p_n => Some(bound),
            _ => Some(p_n),
        };
    }

    let overflow = |coefficient: &'static str, value: &BigInt| SynthesisError::Overflow {
        coefficient,
        value: value.clone(),
    };

    let a_out = a_prime.to_u64().ok_or_else(|| overflow("a'", &a_prime))?;
    let b_out = b_prime.to_i64().ok_or_else(|| overflow("b'", &b_prime))?;
    let upper_bound = match upper_bound {
        Some(bound) => bound.to_u64().ok_or_else(|| overflow("upper bound", &bound))?,
        None => u64::MAX,
    };

    Ok(FastEaf { a: a_out, b: b_out, k, upper_bound })
}
