//! # Matrix
//!
//! The public face of the crate. A `Matrix` owns a sparse store that it never shares: every
//! transforming operation works on a copy and returns a new `Matrix`, leaving the receiver as it
//! was. Only `put` changes a matrix in place.
//!
//! When contract checking is enabled in the `Config`, each operation checks its preconditions on
//! the operands, then its postconditions on the result, followed by a battery of structural
//! invariants. A failing check is reported as `Error::ContractViolation`. The checks are expensive
//! and meant for testing, they are disabled by default.
use std::fmt;
use std::fmt::Display;

use log::trace;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::algorithm;
use crate::data::linear_algebra::{Axis, Rotation, RowOperation};
use crate::data::linear_algebra::dense::Dense;
use crate::data::linear_algebra::matrix::Sparse;
use crate::data::linear_algebra::traits::DenseMatrix;
use crate::data::number_types::traits::Element;
use crate::error::{Error, Violation};

pub use factory::{Arguments, Factory};

mod contract;
pub mod factory;

/// Seed used when no other seed is configured.
pub const DEFAULT_SEED: u64 = 0x5EED;

/// Whether operations verify their contracts.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum ContractChecking {
    /// Check pre- and postconditions and invariants around every operation.
    Enabled,
    /// Only perform the operations.
    #[default]
    Disabled,
}

/// Settings of a `Matrix`, inherited by every matrix derived from it.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Config {
    /// Whether contracts are checked.
    pub contract_checking: ContractChecking,
    /// Seed for the random values used while checking invariants.
    pub seed: u64,
}

impl Config {
    /// Default settings with contract checking enabled.
    #[must_use]
    pub fn checked() -> Self {
        Self {
            contract_checking: ContractChecking::Enabled,
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            contract_checking: ContractChecking::Disabled,
            seed: DEFAULT_SEED,
        }
    }
}

/// Right hand side of an arithmetic operation.
#[derive(Debug, Clone)]
pub enum Operand<'a, F> {
    /// The same value for every cell.
    Scalar(F),
    /// Another matrix.
    Matrix(&'a Matrix<F>),
}

impl<'a, F> From<&'a Matrix<F>> for Operand<'a, F> {
    fn from(matrix: &'a Matrix<F>) -> Self {
        Operand::Matrix(matrix)
    }
}

/// A sparse matrix with value semantics.
///
/// Two matrices are equal when they have the same shape and the same values, regardless of their
/// configuration.
#[derive(Debug, Clone)]
pub struct Matrix<F> {
    store: Sparse<F>,
    config: Config,
}

impl<F> Matrix<F> {
    /// Wrap a store with the default configuration.
    #[must_use]
    pub fn new(store: Sparse<F>) -> Self {
        Self::with_config(store, Config::default())
    }

    /// Wrap a store.
    #[must_use]
    pub fn with_config(store: Sparse<F>, config: Config) -> Self {
        Self { store, config }
    }

    /// Settings of this matrix.
    pub fn config(&self) -> Config {
        self.config
    }

    /// The underlying store.
    pub fn store(&self) -> &Sparse<F> {
        &self.store
    }

    /// Take the underlying store.
    pub fn into_store(self) -> Sparse<F> {
        self.store
    }

    /// Number of rows.
    pub fn nr_rows(&self) -> usize {
        self.store.nr_rows()
    }

    /// Number of columns.
    pub fn nr_columns(&self) -> usize {
        self.store.nr_columns()
    }

    /// Number of rows and number of columns.
    pub fn shape(&self) -> (usize, usize) {
        self.store.shape()
    }

    /// Number of non-zero values.
    pub fn nr_non_zeros(&self) -> usize {
        self.store.nr_non_zeros()
    }

    /// Whether a coordinate lies inside of the matrix.
    pub fn within_bounds(&self, row: usize, column: usize) -> bool {
        self.store.within_bounds(row, column)
    }

    /// Iterate over all non-zero values as `(row, column, value)`, ordered by row and column.
    pub fn iter_non_zero(&self) -> impl Iterator<Item=(usize, usize, &F)> + '_ {
        self.store.iter_non_zero()
    }

    fn derive(&self, store: Sparse<F>) -> Self {
        Self { store, config: self.config }
    }

    fn checking(&self) -> bool {
        self.config.contract_checking == ContractChecking::Enabled
    }

    fn require(
        &self,
        operation: &str,
        preconditions: impl FnOnce() -> Result<(), Violation>,
    ) -> Result<(), Error> {
        if self.checking() {
            trace!("Checking pre-conditions of `{}`", operation);
            preconditions()?;
        }

        Ok(())
    }
}

impl<F: Element> Matrix<F> {
    /// A matrix of zeros with the default configuration.
    #[must_use]
    pub fn zeros(nr_rows: usize, nr_columns: usize) -> Self {
        Self::new(Sparse::new(nr_rows, nr_columns))
    }

    /// A square identity matrix with the default configuration.
    #[must_use]
    pub fn identity(len: usize) -> Self {
        Self::new(Sparse::identity(len))
    }

    /// Copy the non-zero values of a dense matrix, with the default configuration.
    pub fn from_dense<D: DenseMatrix<F> + ?Sized>(dense: &D) -> Self {
        Self::new(Sparse::from_dense(dense))
    }

    fn ensure(
        &self,
        operation: &str,
        result: &Sparse<F>,
        postconditions: impl FnOnce() -> Result<(), Violation>,
    ) -> Result<(), Error> {
        if self.checking() {
            trace!("Checking post-conditions and invariants of `{}`", operation);
            postconditions()?;
            let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
            contract::invariants(result, &mut rng)?;
        }

        Ok(())
    }

    /// Check the invariants of this matrix.
    ///
    /// Does nothing if contract checking is disabled.
    ///
    /// # Errors
    ///
    /// `ContractViolation` if an invariant doesn't hold.
    pub fn check_invariants(&self) -> Result<(), Error> {
        self.ensure("check_invariants", &self.store, || Ok(()))
    }

    /// Value at a coordinate, zero when outside of the matrix.
    pub fn get(&self, row: usize, column: usize) -> F {
        self.store.get(row, column)
    }

    /// Set the value at a coordinate.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` if the coordinate is not inside of the matrix, or a `ContractViolation`
    /// for the same reason if contracts are checked.
    pub fn put(&mut self, row: usize, column: usize, value: F) -> Result<(), Error> {
        if !self.checking() {
            return self.store.put(row, column, value);
        }

        self.require("put", || {
            contract::index_in_bounds(&self.store, Axis::Row, row)?;
            contract::index_in_bounds(&self.store, Axis::Column, column)
        })?;
        let before = self.store.clone();
        self.store.put(row, column, value.clone())?;
        self.ensure("put", &self.store, || {
            contract::put_applied(&before, &self.store, row, column, &value)
        })
    }

    /// Swap rows and columns.
    ///
    /// # Errors
    ///
    /// Only a `ContractViolation`.
    pub fn transpose(&self) -> Result<Self, Error> {
        let mut store = self.store.clone();
        store.transpose();
        self.ensure("transpose", &store, || {
            contract::moved("transposed", &self.store, &store, (self.nr_columns(), self.nr_rows()), |i, j| (j, i))
        })?;

        Ok(self.derive(store))
    }

    /// Mirror along the vertical axis, reversing the order of the columns.
    ///
    /// # Errors
    ///
    /// Only a `ContractViolation`.
    pub fn flip_horizontal(&self) -> Result<Self, Error> {
        let mut store = self.store.clone();
        store.flip_horizontal();
        let last_column = self.nr_columns().saturating_sub(1);
        self.ensure("flip_horizontal", &store, || {
            contract::moved("mirrored", &self.store, &store, self.shape(), |i, j| (i, last_column - j))
        })?;

        Ok(self.derive(store))
    }

    /// Mirror along the horizontal axis, reversing the order of the rows.
    ///
    /// # Errors
    ///
    /// Only a `ContractViolation`.
    pub fn flip_vertical(&self) -> Result<Self, Error> {
        let mut store = self.store.clone();
        store.flip_vertical();
        let last_row = self.nr_rows().saturating_sub(1);
        self.ensure("flip_vertical", &store, || {
            contract::moved("mirrored", &self.store, &store, self.shape(), |i, j| (last_row - i, j))
        })?;

        Ok(self.derive(store))
    }

    /// Rotate a square matrix by a number of quarter turns.
    ///
    /// # Errors
    ///
    /// `NotSquare` if the number of rows and columns differ.
    pub fn rotate(&self, rotation: Rotation) -> Result<Self, Error> {
        let mut store = self.store.clone();
        store.rotate(rotation)?;
        let len = self.nr_rows();
        self.ensure("rotate", &store, || {
            contract::moved("rotated", &self.store, &store, self.shape(), |i, j| {
                contract::rotated_coordinate(len, rotation, i, j)
            })
        })?;

        Ok(self.derive(store))
    }

    /// Exchange two rows or two columns.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` if either index is not in range along `axis`.
    pub fn switch(&self, i: usize, j: usize, axis: Axis) -> Result<Self, Error> {
        self.require("switch", || {
            contract::index_in_bounds(&self.store, axis, i)?;
            contract::index_in_bounds(&self.store, axis, j)
        })?;

        let mut store = self.store.clone();
        store.switch(i, j, axis)?;
        let exchange = |k| if k == i { j } else if k == j { i } else { k };
        self.ensure("switch", &store, || {
            contract::moved("switched", &self.store, &store, self.shape(), |row, column| match axis {
                Axis::Row => (exchange(row), column),
                Axis::Column => (row, exchange(column)),
            })
        })?;

        Ok(self.derive(store))
    }

    /// The matrix without some of its rows and columns.
    ///
    /// # Arguments
    ///
    /// * `rows`: Indices of rows to remove, in any order and possibly repeated.
    /// * `columns`: Indices of columns to remove, in any order and possibly repeated.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` if any index is not in range.
    pub fn sub_matrix(&self, rows: &[usize], columns: &[usize]) -> Result<Self, Error> {
        self.require("sub_matrix", || {
            contract::indices_in_bounds(&self.store, Axis::Row, rows)?;
            contract::indices_in_bounds(&self.store, Axis::Column, columns)
        })?;

        let mut store = self.store.clone();
        store.remove(rows, columns)?;
        self.ensure("sub_matrix", &store, || contract::reduced(&self.store, &store, rows, columns))?;

        Ok(self.derive(store))
    }

    /// Replace each value of row `i` by its combination with the value of row `j` in that column.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` if either row doesn't exist.
    pub fn row_operation(&self, i: usize, j: usize, operation: RowOperation) -> Result<Self, Error> {
        self.require("row_operation", || {
            contract::index_in_bounds(&self.store, Axis::Row, i)?;
            contract::index_in_bounds(&self.store, Axis::Row, j)
        })?;

        let mut store = self.store.clone();
        store.row_operation(i, j, operation)?;
        self.ensure("row_operation", &store, || contract::combined(&self.store, &store, i, j, operation))?;

        Ok(self.derive(store))
    }

    /// All values of a row.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` if there is no such row.
    pub fn row(&self, index: usize) -> Result<Vec<F>, Error> {
        self.require("row", || contract::index_in_bounds(&self.store, Axis::Row, index))?;

        self.store.row(index)
    }

    /// All values of a column.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` if there is no such column.
    pub fn column(&self, index: usize) -> Result<Vec<F>, Error> {
        self.require("column", || contract::index_in_bounds(&self.store, Axis::Column, index))?;

        self.store.column(index)
    }

    /// Add a scalar to every cell, or add a matrix of the same shape.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if a matrix operand has a different shape.
    pub fn add<'a>(&self, operand: impl Into<Operand<'a, F>>) -> Result<Self, Error>
    where
        F: 'a,
    {
        let store = match operand.into() {
            Operand::Scalar(value) => {
                let store = self.store.add_scalar(&value);
                self.ensure("add", &store, || {
                    contract::cells_equal(&store, &self.expected_cells(None, |a, _| a + value.clone()))
                })?;
                store
            },
            Operand::Matrix(other) => {
                self.require("add", || contract::same_shape(&self.store, &other.store))?;
                let store = self.store.add(&other.store)?;
                self.ensure("add", &store, || {
                    contract::cells_equal(&store, &self.expected_cells(Some(other), |a, b| a + b))
                })?;
                store
            },
        };

        Ok(self.derive(store))
    }

    /// Subtract a scalar from every cell, or subtract a matrix of the same shape.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if a matrix operand has a different shape.
    pub fn subtract<'a>(&self, operand: impl Into<Operand<'a, F>>) -> Result<Self, Error>
    where
        F: 'a,
    {
        let store = match operand.into() {
            Operand::Scalar(value) => {
                let store = self.store.subtract_scalar(&value);
                self.ensure("subtract", &store, || {
                    contract::cells_equal(&store, &self.expected_cells(None, |a, _| a - value.clone()))
                })?;
                store
            },
            Operand::Matrix(other) => {
                self.require("subtract", || contract::same_shape(&self.store, &other.store))?;
                let store = self.store.subtract(&other.store)?;
                self.ensure("subtract", &store, || {
                    contract::cells_equal(&store, &self.expected_cells(Some(other), |a, b| a - b))
                })?;
                store
            },
        };

        Ok(self.derive(store))
    }

    /// Scale by a scalar, or take the matrix product `self * other`.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the number of columns of `self` differs from the number of rows of a
    /// matrix operand.
    pub fn multiply<'a>(&self, operand: impl Into<Operand<'a, F>>) -> Result<Self, Error>
    where
        F: 'a,
    {
        let store = match operand.into() {
            Operand::Scalar(value) => {
                let store = self.store.scale(&value);
                self.ensure("multiply", &store, || {
                    contract::cells_equal(&store, &self.expected_cells(None, |a, _| a * value.clone()))
                })?;
                store
            },
            Operand::Matrix(other) => {
                self.require("multiply", || contract::inner_dimensions_agree(&self.store, &other.store))?;
                let store = self.store.multiply(&other.store)?;
                self.ensure("multiply", &store, || {
                    contract::cells_equal(&store, &contract::dense_product(&self.store, &other.store))
                })?;
                store
            },
        };

        Ok(self.derive(store))
    }

    /// Elementwise product with a matrix of the same shape.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the shapes differ.
    pub fn element_multiply(&self, other: &Self) -> Result<Self, Error> {
        self.require("element_multiply", || contract::same_shape(&self.store, &other.store))?;

        let store = self.store.element_multiply(&other.store)?;
        self.ensure("element_multiply", &store, || {
            contract::cells_equal(&store, &self.expected_cells(Some(other), |a, b| a * b))
        })?;

        Ok(self.derive(store))
    }

    /// Dense result of a cellwise operation, used to verify the sparse one.
    ///
    /// Without a second operand, the function receives zero as its second argument.
    fn expected_cells(&self, other: Option<&Self>, f: impl Fn(F, F) -> F) -> Dense<F> {
        Dense::build(self.nr_rows(), self.nr_columns(), |i, j| {
            let right = other.map_or_else(F::zero, |other| other.get(i, j));
            f(self.get(i, j), right)
        })
    }

    /// Determinant by cofactor expansion.
    ///
    /// # Errors
    ///
    /// `NotSquare` if the matrix isn't square.
    pub fn determinant(&self) -> Result<F, Error> {
        let determinant = algorithm::determinant(&self.store)?;
        self.ensure("determinant", &self.store, || contract::determinant_consistent(&self.store, &determinant))?;

        Ok(determinant)
    }

    /// Inverse through the adjugate, rounded.
    ///
    /// # Errors
    ///
    /// `NotInvertible` if the matrix isn't square or its determinant is zero.
    pub fn inverse(&self) -> Result<Self, Error> {
        let store = algorithm::inverse(&self.store)?;
        self.ensure("inverse", &store, || contract::inverted(&self.store, &store))?;

        Ok(self.derive(store))
    }

    /// Number of linearly independent rows.
    ///
    /// # Errors
    ///
    /// Only a `ContractViolation`.
    pub fn rank(&self) -> Result<usize, Error> {
        let rank = algorithm::rank(&self.store)?;
        self.ensure("rank", &self.store, || contract::rank_bounded(&self.store, rank))?;

        Ok(rank)
    }

    /// Whether any cell, implicit zeros included, equals a value.
    pub fn contains(&self, value: &F) -> bool {
        self.store.contains(value)
    }

    /// Materialize all cells.
    pub fn to_dense(&self) -> Dense<F> {
        self.store.to_dense()
    }
}

impl<F: PartialEq> PartialEq for Matrix<F> {
    fn eq(&self, other: &Self) -> bool {
        self.store == other.store
    }
}

impl<F: Eq> Eq for Matrix<F> {}

impl<F> From<Sparse<F>> for Matrix<F> {
    fn from(store: Sparse<F>) -> Self {
        Self::new(store)
    }
}

impl<F: Element> Display for Matrix<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.store, f)
    }
}
