//! # Traits
//!
//! The matrices are defined over any type that behaves like a field. The contract is not kept
//! precisely by all implementors: floats have a finite representation and accumulate rounding
//! errors, which is why an element knows how to round itself.
use std::fmt::{Debug, Display};
use std::ops::{Div, Mul, Neg, Sub};

use num_traits::{One, Zero};
use relp_num::{Rational64, RationalBig};

/// Element of a matrix.
///
/// Basic field operations on owned values, a zero that is never stored and a one that is needed
/// for identities and signs.
pub trait Element:
    PartialEq +
    PartialOrd + // For magnitudes when comparing up to a tolerance
    Zero + // Additive identity, also brings `Add`
    Neg<Output=Self> + // Additive inverse
    One + // Multiplicative identity, also brings `Mul`
    Sub<Self, Output=Self> +
    Mul<Self, Output=Self> +
    Div<Self, Output=Self> +
    // Practicalities
    Clone +
    Display +
    Debug +
{
    /// Round to a number of decimal places.
    ///
    /// Exact types return themselves unchanged.
    #[must_use]
    fn round_to_decimal_places(self, decimal_places: u32) -> Self;

    /// Relative difference below which two computed values are considered equal.
    ///
    /// Zero for exact types.
    fn tolerance() -> Self;
}

macro_rules! impl_exact {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                fn round_to_decimal_places(self, _decimal_places: u32) -> Self {
                    self
                }

                fn tolerance() -> Self {
                    Self::zero()
                }
            }
        )*
    }
}
impl_exact!(Rational64, RationalBig);

macro_rules! impl_float {
    ($($t:ident => $tolerance:expr),*) => {
        $(
            impl Element for $t {
                fn round_to_decimal_places(self, decimal_places: u32) -> Self {
                    let factor = (10 as $t).powi(decimal_places as i32);
                    // Values this large have no digits at this many decimal places, and scaling
                    // them up might overflow
                    let integral_above = (2 as $t).powi(<$t>::MANTISSA_DIGITS as i32) / factor;
                    if !self.is_finite() || self.abs() >= integral_above {
                        return self;
                    }

                    let rounded = (self * factor).round() / factor;
                    // Avoid a negative zero, it compares equal but prints differently
                    if rounded == 0 as $t { 0 as $t } else { rounded }
                }

                fn tolerance() -> Self {
                    $tolerance
                }
            }
        )*
    }
}
impl_float!(f32 => 1e-5, f64 => 1e-10);

/// Build a small non-negative integer out of ones.
///
/// Only meant for small values, the cost is linear in `value`.
pub fn from_count<F: Element>(value: u32) -> F {
    (0..value).fold(F::zero(), |total, _| total + F::one())
}

/// Magnitude of a value.
pub fn absolute<F: Element>(value: F) -> F {
    if value < F::zero() {
        -value
    } else {
        value
    }
}

/// Whether two computed values agree up to the tolerance of their type.
///
/// The difference is taken relative to the largest of the two magnitudes and `scale`. The latter
/// is the size of the values that the computation passed through, such that a result close to zero
/// isn't held to a precision that its inputs never had.
pub fn approx_eq<F: Element>(left: &F, right: &F, scale: &F) -> bool {
    let difference = absolute(left.clone() - right.clone());
    let magnitude = [left, right, scale].into_iter()
        .map(|value| absolute(value.clone()))
        .fold(F::zero(), |largest, value| if value > largest { value } else { largest });

    difference <= F::tolerance() * magnitude
}

/// `(-1)^exponent`.
pub fn alternating_sign<F: Element>(exponent: usize) -> F {
    if exponent % 2 == 0 {
        F::one()
    } else {
        -F::one()
    }
}
