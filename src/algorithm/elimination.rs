//! # Gaussian elimination
//!
//! Fraction-free (Bareiss) elimination with partial pivoting. Dividing by the previous pivot keeps
//! intermediate values exact for integral data, and small for rational data.
use log::debug;

use crate::data::linear_algebra::Axis;
use crate::data::linear_algebra::matrix::Sparse;
use crate::data::number_types::traits::Element;
use crate::error::Error;

/// Compute the rank of a matrix.
///
/// Columns are scanned from left to right. The first row at or below the current pivot row with a
/// non-zero value in the column is switched into the pivot position and eliminated below. A column
/// without such a row is skipped.
///
/// # Errors
///
/// Only when the row operations on the working copy fail, which doesn't happen for a matrix
/// created through the public constructors.
pub fn rank<F: Element>(matrix: &Sparse<F>) -> Result<usize, Error> {
    let (nr_rows, nr_columns) = matrix.shape();
    debug!("Eliminating a {}x{} matrix to find its rank", nr_rows, nr_columns);

    let mut work = matrix.clone();
    let mut rank = 0;
    let mut previous_pivot = F::one();
    for k in 0..nr_columns {
        if rank == nr_rows {
            break;
        }

        let Some(pivot_row) = (rank..nr_rows).find(|&i| work.get_ref(i, k).is_some()) else {
            continue;
        };
        if pivot_row != rank {
            work.switch(pivot_row, rank, Axis::Row)?;
        }

        let pivot = work.get(rank, k);
        for i in (rank + 1)..nr_rows {
            let factor = work.get(i, k);
            for j in (k + 1)..nr_columns {
                let value = (
                    pivot.clone() * work.get(i, j) - factor.clone() * work.get(rank, j)
                ) / previous_pivot.clone();
                work.put(i, j, value)?;
            }
            work.put(i, k, F::zero())?;
        }

        previous_pivot = pivot;
        rank += 1;
    }

    Ok(rank)
}
