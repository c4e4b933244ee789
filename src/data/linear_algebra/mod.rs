//! # Linear algebra primitives
//!
//! Matrices in a sparse and a dense format, and the small vocabulary types used to describe
//! operations on them.
use std::fmt;

use enum_map::Enum;

use crate::error::Error;

pub mod dense;
pub mod matrix;
pub mod permutation;
pub mod traits;

/// Number of decimal places that computed inverses are rounded to.
///
/// Suppresses accumulated floating point noise. Values that round to zero are not stored.
pub const DECIMAL_PLACES: u32 = 10;

/// A column or row index with the value stored at that index.
pub type SparseTuple<F> = (usize, F);

/// Direction in a matrix.
#[derive(Enum, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Axis {
    /// Horizontal lines, indexed by the first coordinate.
    Row,
    /// Vertical lines, indexed by the second coordinate.
    Column,
}

impl Axis {
    /// The other axis.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Axis::Row => Axis::Column,
            Axis::Column => Axis::Row,
        }
    }
}

impl TryFrom<u8> for Axis {
    type Error = Error;

    /// Decode the axis selector `0` for rows and `1` for columns.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Axis::Row),
            1 => Ok(Axis::Column),
            other => Err(Error::InvalidArgument(format!("axis selector {} is not 0 or 1", other))),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::Row => "row",
            Axis::Column => "column",
        })
    }
}

/// Amount of quarter turns to rotate a square matrix by.
///
/// A single quarter turn moves the entry at `(r, c)` to `(n - 1 - c, r)`, so that the last column
/// becomes the first row.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Rotation {
    /// One quarter turn.
    Quarter,
    /// Two quarter turns.
    Half,
    /// Three quarter turns.
    ThreeQuarters,
}

impl Rotation {
    /// How often a single quarter turn is applied.
    #[must_use]
    pub fn quarter_turns(self) -> usize {
        match self {
            Rotation::Quarter => 1,
            Rotation::Half => 2,
            Rotation::ThreeQuarters => 3,
        }
    }
}

impl TryFrom<u8> for Rotation {
    type Error = Error;

    /// Decode `0`, `1` and `2` as one, two and three quarter turns.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Rotation::Quarter),
            1 => Ok(Rotation::Half),
            2 => Ok(Rotation::ThreeQuarters),
            other => Err(Error::InvalidArgument(format!("rotation code {} is not 0, 1 or 2", other))),
        }
    }
}

/// Binary operation used to combine two rows element by element.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RowOperation {
    /// `a + b`
    Add,
    /// `a * b`
    Multiply,
}
