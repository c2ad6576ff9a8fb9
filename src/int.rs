use std::fmt;

use num_traits::{PrimInt, Signed, WrappingAdd, WrappingMul, WrappingSub};
use serde::{Deserialize, Serialize};

use crate::{
    limits::{Limits, ShiftError},
    prelude::Display,
};

mod sealed {
    pub trait Sealed {}
}

/// Bit width of a rata die / year type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Width {
    #[display(fmt = "32")]
    W32,
    #[display(fmt = "64")]
    W64,
}

/// Signed integer type usable as a year and rata die.
///
/// Implemented for `i32` and `i64` only. The converters are generic over
/// this trait and every overflow-prone step goes through the wrapping
/// operations, so results wrap at exactly the width of the implementor.
pub trait Int:
    sealed::Sealed
    + PrimInt
    + Signed
    + WrappingAdd
    + WrappingSub
    + WrappingMul
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
{
    /// Unsigned counterpart of the same width.
    type Unsigned: PrimInt
        + num_traits::Unsigned
        + WrappingAdd
        + WrappingSub
        + WrappingMul
        + fmt::Debug;

    const WIDTH: Width;

    /// Converts a small constant. Values above `Self::MAX` wrap.
    fn lift(value: u32) -> Self;

    /// Low 32 bits, reinterpreted as unsigned.
    fn low_u32(self) -> u32;

    /// Two's complement reinterpretation.
    fn to_unsigned(self) -> Self::Unsigned;

    /// Two's complement reinterpretation.
    fn from_unsigned(value: Self::Unsigned) -> Self;

    fn lift_unsigned(value: u32) -> Self::Unsigned;

    fn low_u32_unsigned(value: Self::Unsigned) -> u32;

    fn widen(self) -> i128;

    /// Limits of the canonical (unshifted) Julian and Gregorian formulas.
    fn plain_limits() -> Limits<Self>;

    /// Limits of the unshifted optimized Gregorian formulas.
    fn optimized_limits() -> Limits<Self>;

    /// Limits of the optimized Gregorian formulas counting from 1970.
    fn unix_limits() -> Limits<Self>;

    /// Limits of the optimized Gregorian formulas for the given shift.
    ///
    /// # Errors
    /// Returns `ShiftError` if the shift constants are not representable.
    fn shifted_limits(epoch: Self, cycles: Self) -> Result<Limits<Self>, ShiftError>;
}

macro_rules! impl_int {
    ($t:ty, $u:ty, $width:expr) => {
        impl sealed::Sealed for $t {}

        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_possible_wrap,
            clippy::cast_sign_loss,
            clippy::cast_lossless
        )]
        impl Int for $t {
            type Unsigned = $u;

            const WIDTH: Width = $width;

            #[inline]
            fn lift(value: u32) -> Self {
                value as Self
            }

            #[inline]
            fn low_u32(self) -> u32 {
                self as u32
            }

            #[inline]
            fn to_unsigned(self) -> $u {
                self as $u
            }

            #[inline]
            fn from_unsigned(value: $u) -> Self {
                value as Self
            }

            #[inline]
            fn lift_unsigned(value: u32) -> $u {
                <$u>::from(value)
            }

            #[inline]
            fn low_u32_unsigned(value: $u) -> u32 {
                value as u32
            }

            #[inline]
            fn widen(self) -> i128 {
                i128::from(self)
            }

            fn plain_limits() -> Limits<Self> {
                Limits::<$t>::PLAIN
            }

            fn optimized_limits() -> Limits<Self> {
                Limits::<$t>::OPTIMIZED
            }

            fn unix_limits() -> Limits<Self> {
                Limits::<$t>::UNIX
            }

            fn shifted_limits(epoch: Self, cycles: Self) -> Result<Limits<Self>, ShiftError> {
                Limits::<$t>::shifted(epoch, cycles)
            }
        }
    };
}

impl_int!(i32, u32, Width::W32);
impl_int!(i64, u64, Width::W64);
