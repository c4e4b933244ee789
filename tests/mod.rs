//! # Integration tests
//!
//! Integration tests completely external from the crate. All code written in this module could be
//! written by an external user of the crate.
//!
//! Matrices are created with contract checking enabled, so that every operation in these tests is
//! also verified against its pre- and postconditions and the structural invariants.

mod properties;
mod scenarios;
