//! # Cofactor expansion
//!
//! Determinants through Laplace expansion and inverses through the adjugate.
//!
//! Both are only suited for small matrices. The expansion of an `n x n` matrix recurses into `n`
//! minors of size `n - 1`, so the cost grows factorially in `n`; rows of zeros are skipped, which
//! helps for matrices that are truly sparse. The inverse computes `n^2` such determinants.
use log::debug;
use num_traits::Zero;

use crate::data::linear_algebra::DECIMAL_PLACES;
use crate::data::linear_algebra::matrix::Sparse;
use crate::data::number_types::traits::{alternating_sign, Element};
use crate::error::Error;

/// Compute the determinant of a square matrix.
///
/// # Errors
///
/// `NotSquare` if the number of rows and columns differ.
pub fn determinant<F: Element>(matrix: &Sparse<F>) -> Result<F, Error> {
    if !matrix.is_square() {
        return Err(Error::NotSquare { nr_rows: matrix.nr_rows(), nr_columns: matrix.nr_columns() });
    }
    debug!("Expanding the determinant of a {0}x{0} matrix", matrix.nr_rows());

    expand(matrix)
}

/// Laplace expansion along the first row.
///
/// The empty matrix has determinant one, which makes the `1 x 1` case of `inverse` uniform.
fn expand<F: Element>(matrix: &Sparse<F>) -> Result<F, Error> {
    debug_assert!(matrix.is_square());

    match matrix.nr_rows() {
        0 => Ok(F::one()),
        1 => Ok(matrix.get(0, 0)),
        2 => Ok(
            matrix.get(0, 0) * matrix.get(1, 1) - matrix.get(0, 1) * matrix.get(1, 0)
        ),
        _ => {
            let mut total = F::zero();
            for (j, value) in matrix.sparse_row(0) {
                let term = alternating_sign::<F>(*j) * value.clone() * expand(&minor(matrix, 0, *j)?)?;
                total = total + term;
            }

            Ok(total)
        },
    }
}

/// Copy of the matrix without one row and one column.
fn minor<F: Element>(matrix: &Sparse<F>, row: usize, column: usize) -> Result<Sparse<F>, Error> {
    let mut minor = matrix.clone();
    minor.remove(&[row], &[column])?;

    Ok(minor)
}

/// Compute the inverse of a square matrix with the adjugate method.
///
/// Every value is rounded to `DECIMAL_PLACES` decimal places before it is stored, values that round
/// to zero are dropped. Exact element types are not affected by the rounding.
///
/// # Errors
///
/// `NotInvertible` if the matrix is not square or if its determinant is zero.
pub fn inverse<F: Element>(matrix: &Sparse<F>) -> Result<Sparse<F>, Error> {
    if !matrix.is_square() {
        return Err(Error::NotInvertible);
    }
    let determinant = determinant(matrix)?;
    if determinant.is_zero() {
        return Err(Error::NotInvertible);
    }

    let n = matrix.nr_rows();
    debug!("Computing {} cofactors to invert a {1}x{1} matrix", n * n, n);
    let mut adjugate = Sparse::new(n, n);
    for i in 0..n {
        for j in 0..n {
            let cofactor = alternating_sign::<F>(i + j) * expand(&minor(matrix, i, j)?)?;
            adjugate.put(i, j, cofactor)?;
        }
    }
    adjugate.transpose();

    Ok(adjugate.scale(&(F::one() / determinant)).rounded(DECIMAL_PLACES))
}
