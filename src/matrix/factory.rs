//! # Factory
//!
//! Creates matrices that share one configuration, either from dense data or from a shape.
use crate::data::linear_algebra::matrix::Sparse;
use crate::data::linear_algebra::traits::DenseMatrix;
use crate::data::number_types::traits::Element;
use crate::error::Error;
use crate::matrix::{Config, Matrix};

/// What a matrix is created from.
pub enum Arguments<'a, F> {
    /// Copy the non-zero values of a dense matrix.
    Dense(&'a dyn DenseMatrix<F>),
    /// A matrix of zeros with the given number of rows and columns.
    Shape(&'a [isize]),
}

/// Creates matrices with a fixed configuration.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct Factory {
    config: Config,
}

impl Factory {
    /// A factory for matrices with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A factory for matrices with a specific configuration.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Create a matrix.
    ///
    /// If contracts are checked, the invariants of the new matrix are checked as well.
    ///
    /// # Errors
    ///
    /// `InvalidArguments` for a shape with fewer than two sizes, `InvalidDimension` for a shape
    /// with more than two sizes or with a negative size.
    pub fn create<F: Element>(&self, arguments: Arguments<'_, F>) -> Result<Matrix<F>, Error> {
        let store = match arguments {
            Arguments::Dense(dense) => Sparse::from_dense(dense),
            Arguments::Shape(shape) if shape.len() < 2 => return Err(Error::InvalidArguments(format!(
                "expected a dense matrix or a number of rows and columns, got a shape of length {}",
                shape.len(),
            ))),
            Arguments::Shape(shape) => Sparse::with_shape(shape)?,
        };

        let matrix = Matrix::with_config(store, self.config);
        matrix.check_invariants()?;

        Ok(matrix)
    }
}
