//! # Algorithms
//!
//! Linear algebra on sparse matrices. The algorithms only use the public operations of
//! `data::linear_algebra::matrix::Sparse` and never change their input: each works on its own
//! clones.
pub use cofactor::{determinant, inverse};
pub use elimination::rank;

pub mod cofactor;
pub mod elimination;
