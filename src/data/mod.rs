//! # Storing of matrices in memory
//!
//! This module provides the data structures used to represent matrices in memory, and the traits
//! their elements satisfy. Algorithms operate on these in `algorithm`.

pub mod linear_algebra;
pub mod number_types;
