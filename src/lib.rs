//! # Sparse matrices
//!
//! Matrices that store only their non-zero values, generic over exact rational and floating point
//! element types. Besides structural operations such as transposition, mirroring, rotation and the
//! removal of rows and columns, there is elementwise and matrix arithmetic, and the determinant,
//! inverse and rank of a matrix can be computed.
//!
//! The `Matrix` type in the `matrix` module is the entry point. It can verify contracts around each
//! of its operations, which makes it suitable for testing the sparse storage in `data` and the
//! algorithms in `algorithm`.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod error;
pub mod matrix;

pub use error::Error;
pub use data::linear_algebra::{Axis, Rotation, RowOperation};
pub use data::linear_algebra::dense::Dense;
pub use data::linear_algebra::traits::DenseMatrix;
pub use data::number_types::traits::Element;
pub use matrix::{Arguments, Config, ContractChecking, Factory, Matrix, Operand};
