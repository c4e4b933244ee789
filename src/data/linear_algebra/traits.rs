//! # Traits for dense data sources
//!
//! A sparse matrix is usually created from, and validated against, a conventional dense matrix.
//! The sparse code never needs more from such a matrix than its shape and its values, so that is
//! all this trait asks for. Any dense representation can be plugged in by implementing it, also as
//! a trait object.

/// A read-only dense matrix.
pub trait DenseMatrix<F> {
    /// Number of rows.
    fn nr_rows(&self) -> usize;
    /// Number of columns.
    fn nr_columns(&self) -> usize;
    /// Value at a coordinate.
    ///
    /// # Arguments
    ///
    /// * `row`: Value in range `0..self.nr_rows()`.
    /// * `column`: Value in range `0..self.nr_columns()`.
    fn value(&self, row: usize, column: usize) -> &F;

    /// All cells, each exactly once and in any order.
    ///
    /// The default goes row by row, and column by column within a row.
    fn cells(&self) -> Box<dyn Iterator<Item=(usize, usize, &F)> + '_> {
        Box::new((0..self.nr_rows()).flat_map(move |row| {
            (0..self.nr_columns()).map(move |column| (row, column, self.value(row, column)))
        }))
    }
}

impl<F, const M: usize, const N: usize> DenseMatrix<F> for [[F; N]; M] {
    fn nr_rows(&self) -> usize {
        M
    }

    fn nr_columns(&self) -> usize {
        N
    }

    fn value(&self, row: usize, column: usize) -> &F {
        &self[row][column]
    }
}
