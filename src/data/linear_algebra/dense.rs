//! # Dense matrix
//!
//! Wrapping a `Vec<Vec<_>>` such that it has a fixed, rectangular shape. Used to construct sparse
//! matrices and to validate them, not to compute with.
use std::fmt;
use std::fmt::Display;
use std::ops::Index;

use crate::data::linear_algebra::traits::DenseMatrix;
use crate::error::Error;

/// Row-major grid of values. Dimensions are fixed at creation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Dense<F> {
    data: Vec<Vec<F>>,
    nr_columns: usize,
}

impl<F> Dense<F> {
    /// Create a `Dense` matrix from rows of values.
    ///
    /// # Arguments
    ///
    /// * `rows`: All rows, each of the same length.
    ///
    /// # Errors
    ///
    /// `InvalidDimension` if the rows have differing lengths.
    pub fn from_rows(rows: Vec<Vec<F>>) -> Result<Self, Error> {
        let nr_columns = rows.first().map_or(0, Vec::len);
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != nr_columns) {
            return Err(Error::InvalidDimension(format!(
                "row {} has length {}, but the first row has length {}", i, row.len(), nr_columns,
            )));
        }

        Ok(Self { data: rows, nr_columns })
    }

    /// Build a matrix by evaluating a function at each coordinate.
    pub fn build(nr_rows: usize, nr_columns: usize, mut value: impl FnMut(usize, usize) -> F) -> Self {
        let data = (0..nr_rows)
            .map(|i| (0..nr_columns).map(|j| value(i, j)).collect())
            .collect();

        Self { data, nr_columns }
    }

    /// Get the rows of this matrix.
    pub fn into_rows(self) -> Vec<Vec<F>> {
        self.data
    }
}

impl<F> DenseMatrix<F> for Dense<F> {
    fn nr_rows(&self) -> usize {
        self.data.len()
    }

    fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    fn value(&self, row: usize, column: usize) -> &F {
        debug_assert!(row < self.data.len());
        debug_assert!(column < self.nr_columns);

        &self.data[row][column]
    }
}

impl<F> Index<(usize, usize)> for Dense<F> {
    type Output = F;

    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        self.value(row, column)
    }
}

impl<F: Display> Display for Dense<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.data {
            write!(f, "[")?;
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", value)?;
            }
            writeln!(f, "]")?;
        }

        Ok(())
    }
}
