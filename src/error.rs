//! # Errors
//!
//! All operations report their failures through a single `Error` enum. Nothing is retried: the
//! computations are pure, so an error either describes bad input or a broken contract.
use std::fmt;

use thiserror::Error;

use crate::data::linear_algebra::Axis;

/// Anything that can go wrong while constructing, querying or transforming a matrix.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// A shape that can't be represented: a negative size or more than two dimensions.
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),
    /// A write, or a row or column selection, outside of the matrix.
    #[error("{axis} index {index} is out of bounds for length {len}")]
    IndexOutOfBounds {
        /// Axis along which the index was out of range.
        axis: Axis,
        /// The offending index.
        index: usize,
        /// Length of the matrix along `axis`.
        len: usize,
    },
    /// Operand shapes are incompatible for the requested operation.
    #[error("dimension mismatch: {left_rows}x{left_columns} and {right_rows}x{right_columns}")]
    #[allow(missing_docs)]
    DimensionMismatch {
        left_rows: usize,
        left_columns: usize,
        right_rows: usize,
        right_columns: usize,
    },
    /// The operation is only defined for square matrices.
    #[error("matrix of size {nr_rows}x{nr_columns} is not square")]
    #[allow(missing_docs)]
    NotSquare {
        nr_rows: usize,
        nr_columns: usize,
    },
    /// The matrix is not square or its determinant is zero.
    #[error("matrix is not invertible")]
    NotInvertible,
    /// An enum code outside of its range, such as a rotation amount or an axis selector.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A factory call with a shape of arguments it doesn't understand.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
    /// A pre- or postcondition or a structural invariant did not hold.
    ///
    /// This always indicates a bug in this crate, never a recoverable runtime condition.
    #[error(transparent)]
    ContractViolation(#[from] Violation),
}

/// Moment at which a contract was evaluated.
#[allow(missing_docs)]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Condition {
    Precondition,
    Postcondition,
    Invariant,
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Condition::Precondition => "pre-condition",
            Condition::Postcondition => "post-condition",
            Condition::Invariant => "invariant",
        })
    }
}

/// Description of a failed contract check.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
#[error("{condition} `{name}` not met: expected {expected}, got {actual}")]
pub struct Violation {
    /// When the check was done.
    pub condition: Condition,
    /// Short name of the check.
    pub name: &'static str,
    /// Rendering of the expected value.
    pub expected: String,
    /// Rendering of the value that was found.
    pub actual: String,
}

impl Error {
    pub(crate) fn dimension_mismatch(left: (usize, usize), right: (usize, usize)) -> Self {
        Error::DimensionMismatch {
            left_rows: left.0,
            left_columns: left.1,
            right_rows: right.0,
            right_columns: right.1,
        }
    }
}
