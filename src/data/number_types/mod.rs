//! # Number types
//!
//! The matrices and algorithms in this crate are generic over their element type. This module
//! defines what is required of such a type and implements it for the exact rationals of
//! `relp-num` and for the primitive floats.
//!
//! A benefit of this approach is that the algorithms can be tested well for correctness using
//! fractional numbers, while the same code is used without adaptation with floating point numbers.
pub mod traits;
