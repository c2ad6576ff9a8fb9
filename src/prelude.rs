//! Prelude module for eaf_calendar crate.
//!
//! Re-exports the derive macros and numeric traits shared by the converters.

#[allow(unused_imports)]
pub use derive_more::Display;
#[allow(unused_imports)]
pub use num_traits::{One, WrappingAdd, WrappingMul, WrappingSub, Zero};

pub use crate::int::Int;
