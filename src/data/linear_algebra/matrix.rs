//! # Sparse matrix
//!
//! Row-major storage of only the non-zero values of a matrix. Each row is a `Vec` of
//! `(column, value)` tuples, sorted by column, that never contains a zero value. A row without
//! non-zero values is an empty `Vec`, so two matrices representing the same values always have the
//! same internal representation and can be compared directly.
//!
//! Structural operations (`put`, `transpose`, the mirrors and rotations, switching and removal of
//! rows or columns) happen in place. Arithmetic creates a new matrix; see the `arithmetic` module.
use std::fmt;
use std::fmt::Display;
use std::mem;

use enum_map::{enum_map, EnumMap};
use index_utils::{remove_indices, remove_sparse_indices};
use itertools::{EitherOrBoth, Itertools};
use num_traits::Zero;

use crate::data::linear_algebra::{Axis, Rotation, RowOperation, SparseTuple};
use crate::data::linear_algebra::dense::Dense;
use crate::data::linear_algebra::permutation::{Permutation, ReversePermutation, SwapPermutation};
use crate::data::linear_algebra::traits::DenseMatrix;
use crate::data::number_types::traits::{approx_eq, Element};
use crate::error::Error;

mod arithmetic;

/// A sparse matrix using a `Vec` of sorted sparse rows as back-end. Indices start at `0`.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Sparse<F> {
    data: Vec<Vec<SparseTuple<F>>>,
    nr_columns: usize,
}

impl<F> Sparse<F> {
    /// Create a matrix of zeros.
    #[must_use]
    pub fn new(nr_rows: usize, nr_columns: usize) -> Self {
        Self {
            data: (0..nr_rows).map(|_| Vec::new()).collect(),
            nr_columns,
        }
    }

    /// Create a matrix of zeros from a shape that has not been validated.
    ///
    /// # Arguments
    ///
    /// * `shape`: Size of each dimension. Only two dimensions are supported.
    ///
    /// # Errors
    ///
    /// `InvalidDimension` if the shape does not have exactly two elements, or if any of them is
    /// negative.
    pub fn with_shape(shape: &[isize]) -> Result<Self, Error> {
        match *shape {
            [nr_rows, nr_columns] => {
                let nr_rows = usize::try_from(nr_rows).map_err(|_| Error::InvalidDimension(format!(
                    "number of rows {} is negative", nr_rows,
                )))?;
                let nr_columns = usize::try_from(nr_columns).map_err(|_| Error::InvalidDimension(format!(
                    "number of columns {} is negative", nr_columns,
                )))?;

                Ok(Self::new(nr_rows, nr_columns))
            },
            _ => Err(Error::InvalidDimension(format!(
                "matrices with {} dimensions are not supported, only 2", shape.len(),
            ))),
        }
    }

    /// Number of rows.
    pub fn nr_rows(&self) -> usize {
        self.data.len()
    }

    /// Number of columns.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Number of rows and number of columns.
    pub fn shape(&self) -> (usize, usize) {
        (self.nr_rows(), self.nr_columns())
    }

    /// Length of the matrix along an axis.
    pub fn len(&self, axis: Axis) -> usize {
        self.dimensions()[axis]
    }

    /// Length of the matrix along each axis.
    pub fn dimensions(&self) -> EnumMap<Axis, usize> {
        enum_map! {
            Axis::Row => self.nr_rows(),
            Axis::Column => self.nr_columns(),
        }
    }

    /// Whether the matrix has as many rows as columns.
    pub fn is_square(&self) -> bool {
        self.nr_rows() == self.nr_columns()
    }

    /// Whether the matrix has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.nr_rows() == 0 || self.nr_columns() == 0
    }

    /// Number of values stored, that is, the number of non-zero values in the matrix.
    pub fn nr_non_zeros(&self) -> usize {
        self.data.iter().map(Vec::len).sum()
    }

    /// Reference to the value at a coordinate.
    ///
    /// # Return value
    ///
    /// `None` if the value is zero, or if the coordinate is outside of the matrix.
    pub fn get_ref(&self, row: usize, column: usize) -> Option<&F> {
        let sparse_row = self.data.get(row)?;
        sparse_row.binary_search_by_key(&column, |&(j, _)| j)
            .ok()
            .map(|index| &sparse_row[index].1)
    }

    /// The non-zero values of a row as `(column, value)` tuples sorted by column.
    ///
    /// Rows outside of the matrix are empty.
    pub fn sparse_row(&self, row: usize) -> &[SparseTuple<F>] {
        self.data.get(row).map_or(&[], Vec::as_slice)
    }

    /// Iterate over all non-zero values.
    ///
    /// # Return value
    ///
    /// `(row, column, value)` triples, ordered by row and then by column.
    pub fn iter_non_zero(&self) -> impl Iterator<Item=(usize, usize, &F)> + '_ {
        self.data.iter()
            .enumerate()
            .flat_map(|(i, sparse_row)| sparse_row.iter().map(move |(j, value)| (i, *j, value)))
    }

    /// Whether a coordinate lies inside of the matrix.
    pub fn within_bounds(&self, row: usize, column: usize) -> bool {
        row < self.nr_rows() && column < self.nr_columns()
    }

    pub(crate) fn check_index(&self, axis: Axis, index: usize) -> Result<(), Error> {
        let len = self.len(axis);
        if index < len {
            Ok(())
        } else {
            Err(Error::IndexOutOfBounds { axis, index, len })
        }
    }

    /// Swap rows and columns in place.
    ///
    /// The value at `(r, c)` moves to `(c, r)`.
    pub fn transpose(&mut self) {
        let mut transposed = (0..self.nr_columns).map(|_| Vec::new()).collect::<Vec<_>>();
        let nr_rows = self.nr_rows();

        // Rows are visited in increasing order, so each new row is filled sorted
        for (i, sparse_row) in mem::take(&mut self.data).into_iter().enumerate() {
            for (j, value) in sparse_row {
                transposed[j].push((i, value));
            }
        }

        self.data = transposed;
        self.nr_columns = nr_rows;
    }

    /// Mirror in place along the vertical axis: `(r, c)` moves to `(r, columns - 1 - c)`.
    pub fn flip_horizontal(&mut self) {
        if self.nr_columns == 0 {
            return;
        }

        let permutation = ReversePermutation::new(self.nr_columns);
        for sparse_row in &mut self.data {
            permutation.forward_sorted(sparse_row);
        }
    }

    /// Mirror in place along the horizontal axis: `(r, c)` moves to `(rows - 1 - r, c)`.
    pub fn flip_vertical(&mut self) {
        self.data.reverse();
    }

    /// Exchange two rows or two columns in place.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` if either index is not in range along `axis`.
    pub fn switch(&mut self, i: usize, j: usize, axis: Axis) -> Result<(), Error> {
        self.check_index(axis, i)?;
        self.check_index(axis, j)?;

        match axis {
            Axis::Row => self.data.swap(i, j),
            Axis::Column => {
                let permutation = SwapPermutation::new((i, j), self.nr_columns);
                for sparse_row in &mut self.data {
                    permutation.forward_sorted(sparse_row);
                }
            },
        }

        Ok(())
    }

    /// Delete rows and columns in place.
    ///
    /// The remaining rows and columns are renumbered contiguously starting at `0`, keeping their
    /// relative order.
    ///
    /// # Arguments
    ///
    /// * `rows`: Indices of rows to remove, in any order and possibly repeated.
    /// * `columns`: Indices of columns to remove, in any order and possibly repeated.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` if any index is not in range. The matrix is not changed in that case.
    pub fn remove(&mut self, rows: &[usize], columns: &[usize]) -> Result<(), Error> {
        let mut removals = enum_map! {
            Axis::Row => rows.to_vec(),
            Axis::Column => columns.to_vec(),
        };
        for (axis, indices) in &mut removals {
            indices.sort_unstable();
            indices.dedup();
            if let Some(&last) = indices.last() {
                self.check_index(axis, last)?;
            }
        }

        let rows = &removals[Axis::Row];
        if rows.len() == self.nr_rows() {
            self.data.clear();
        } else if !rows.is_empty() {
            remove_indices(&mut self.data, rows);
        }

        let columns = &removals[Axis::Column];
        if !columns.is_empty() {
            for sparse_row in &mut self.data {
                if columns.len() == self.nr_columns {
                    sparse_row.clear();
                } else {
                    remove_sparse_indices(sparse_row, columns);
                }
            }
            self.nr_columns -= columns.len();
        }

        Ok(())
    }

    fn take(&mut self, row: usize, column: usize) -> Option<F> {
        let sparse_row = &mut self.data[row];
        sparse_row.binary_search_by_key(&column, |&(j, _)| j)
            .ok()
            .map(|index| sparse_row.remove(index).1)
    }

    /// Put a value that is known not to be zero, or nothing.
    fn place(&mut self, row: usize, column: usize, value: Option<F>) {
        if let Some(value) = value {
            let sparse_row = &mut self.data[row];
            match sparse_row.binary_search_by_key(&column, |&(j, _)| j) {
                Ok(index) => sparse_row[index].1 = value,
                Err(index) => sparse_row.insert(index, (column, value)),
            }
        }
    }

    /// A single quarter turn through four-way exchanges on the concentric rings of the matrix.
    fn rotate_quarter(&mut self) {
        debug_assert!(self.is_square());

        let n = self.nr_rows();
        for layer in 0..n / 2 {
            let last = n - 1 - layer;
            for i in layer..last {
                let corners = [(layer, i), (n - 1 - i, layer), (last, n - 1 - i), (i, last)];
                let values = corners.map(|(row, column)| self.take(row, column));
                // Each value moves one corner further
                for (k, value) in values.into_iter().enumerate() {
                    let (row, column) = corners[(k + 1) % 4];
                    self.place(row, column, value);
                }
            }
        }
    }

    /// Rotate a square matrix in place.
    ///
    /// # Errors
    ///
    /// `NotSquare` if the number of rows and columns differ.
    pub fn rotate(&mut self, rotation: Rotation) -> Result<(), Error> {
        if !self.is_square() {
            return Err(Error::NotSquare { nr_rows: self.nr_rows(), nr_columns: self.nr_columns() });
        }

        for _ in 0..rotation.quarter_turns() {
            self.rotate_quarter();
        }

        Ok(())
    }
}

impl<F: Element> Sparse<F> {
    /// Copy the non-zero values of a dense matrix.
    pub fn from_dense<D: DenseMatrix<F> + ?Sized>(dense: &D) -> Self {
        let mut data = (0..dense.nr_rows()).map(|_| Vec::new()).collect::<Vec<_>>();
        for (i, j, value) in dense.cells() {
            if !value.is_zero() {
                data[i].push((j, value.clone()));
            }
        }
        // Cells may come in any order
        for sparse_row in &mut data {
            sparse_row.sort_unstable_by_key(|&(j, _)| j);
        }

        Self { data, nr_columns: dense.nr_columns() }
    }

    /// Create a square identity matrix.
    #[must_use]
    pub fn identity(len: usize) -> Self {
        Self {
            data: (0..len).map(|i| vec![(i, F::one())]).collect(),
            nr_columns: len,
        }
    }

    /// Value at a coordinate.
    ///
    /// Never fails: coordinates outside of the matrix read as zero. Use `within_bounds` to
    /// enforce the bounds.
    pub fn get(&self, row: usize, column: usize) -> F {
        self.get_ref(row, column).cloned().unwrap_or_else(F::zero)
    }

    /// Set the value at a coordinate.
    ///
    /// Writing a zero removes the value from storage.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` if the coordinate is not inside of the matrix.
    pub fn put(&mut self, row: usize, column: usize, value: F) -> Result<(), Error> {
        self.check_index(Axis::Row, row)?;
        self.check_index(Axis::Column, column)?;

        if value.is_zero() {
            self.take(row, column);
        } else {
            self.place(row, column, Some(value));
        }

        Ok(())
    }

    /// All values of a row, including the zeros.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` if there is no such row.
    pub fn row(&self, index: usize) -> Result<Vec<F>, Error> {
        self.check_index(Axis::Row, index)?;

        Ok((0..self.nr_columns).map(|j| self.get(index, j)).collect())
    }

    /// All values of a column, including the zeros.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` if there is no such column.
    pub fn column(&self, index: usize) -> Result<Vec<F>, Error> {
        self.check_index(Axis::Column, index)?;

        Ok((0..self.nr_rows()).map(|i| self.get(i, index)).collect())
    }

    /// Replace each value of row `i` by the combination with the value of row `j` in the same
    /// column.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` if either row doesn't exist.
    pub fn row_operation(&mut self, i: usize, j: usize, operation: RowOperation) -> Result<(), Error> {
        self.check_index(Axis::Row, i)?;
        self.check_index(Axis::Row, j)?;

        let other = self.data[j].clone();
        let current = mem::take(&mut self.data[i]);
        self.data[i] = current.into_iter()
            .merge_join_by(other, |(left, _), (right, _)| left.cmp(right))
            .filter_map(|pair| match (operation, pair) {
                (RowOperation::Add, EitherOrBoth::Both((k, a), (_, b))) => Some((k, a + b)),
                (RowOperation::Add, EitherOrBoth::Left(tuple) | EitherOrBoth::Right(tuple)) => Some(tuple),
                (RowOperation::Multiply, EitherOrBoth::Both((k, a), (_, b))) => Some((k, a * b)),
                (RowOperation::Multiply, _) => None,
            })
            .filter(|(_, value)| !value.is_zero())
            .collect();

        Ok(())
    }

    /// Whether any cell, implicit zeros included, equals a value.
    pub fn contains(&self, value: &F) -> bool {
        if value.is_zero() {
            self.nr_non_zeros() < self.nr_rows() * self.nr_columns()
        } else {
            self.iter_non_zero().any(|(_, _, stored)| stored == value)
        }
    }

    /// Materialize all cells.
    pub fn to_dense(&self) -> Dense<F> {
        Dense::build(self.nr_rows(), self.nr_columns(), |i, j| self.get(i, j))
    }

    /// Round all values, dropping those that become zero.
    #[must_use]
    pub fn rounded(&self, decimal_places: u32) -> Self {
        let data = self.data.iter()
            .map(|sparse_row| sparse_row.iter()
                .map(|(j, value)| (*j, value.clone().round_to_decimal_places(decimal_places)))
                .filter(|(_, value)| !value.is_zero())
                .collect())
            .collect();

        Self { data, nr_columns: self.nr_columns }
    }

    /// Whether two matrices have the same shape and values that agree up to the tolerance of `F`.
    ///
    /// See `approx_eq` for the meaning of `scale`. For exact types, this is equality.
    pub fn approx_eq(&self, other: &Self, scale: &F) -> bool {
        self.shape() == other.shape() && self.data.iter().zip(&other.data).all(|(left, right)| {
            left.iter()
                .merge_join_by(right, |(i, _), (j, _)| i.cmp(j))
                .all(|pair| match pair {
                    EitherOrBoth::Both((_, a), (_, b)) => approx_eq(a, b, scale),
                    EitherOrBoth::Left((_, value)) | EitherOrBoth::Right((_, value)) => {
                        approx_eq(value, &F::zero(), scale)
                    },
                })
        })
    }
}

impl<F: Element> Display for Sparse<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.to_dense(), f)
    }
}

#[cfg(test)]
mod test {
    use relp_num::{R64, Rational64};

    use crate::data::linear_algebra::{Axis, Rotation, RowOperation};
    use crate::data::linear_algebra::dense::Dense;
    use crate::data::linear_algebra::matrix::Sparse;
    use crate::data::linear_algebra::traits::DenseMatrix;
    use crate::error::Error;

    type T = Rational64;

    /// Yields the cells of each row from the last column to the first.
    struct RightToLeft<const M: usize, const N: usize>([[T; N]; M]);

    impl<const M: usize, const N: usize> DenseMatrix<T> for RightToLeft<M, N> {
        fn nr_rows(&self) -> usize {
            M
        }

        fn nr_columns(&self) -> usize {
            N
        }

        fn value(&self, row: usize, column: usize) -> &T {
            &self.0[row][column]
        }

        fn cells(&self) -> Box<dyn Iterator<Item=(usize, usize, &T)> + '_> {
            Box::new((0..M).flat_map(move |row| {
                (0..N).rev().map(move |column| (row, column, &self.0[row][column]))
            }))
        }
    }

    fn from_rows(rows: Vec<Vec<i32>>) -> Sparse<T> {
        let rows = rows.into_iter()
            .map(|row| row.into_iter().map(|v| R64!(v)).collect())
            .collect();
        Sparse::from_dense(&Dense::from_rows(rows).unwrap())
    }

    fn test_matrix() -> Sparse<T> {
        from_rows(vec![
            vec![1, 2, 0],
            vec![0, 5, 6],
        ])
    }

    fn five_by_five() -> Sparse<T> {
        from_rows((0..5).map(|i| (0..5).map(|j| 10 * i + j + 1).collect()).collect())
    }

    #[test]
    fn create() {
        let m = Sparse::<T>::new(299, 482);
        assert_eq!(m.shape(), (299, 482));
        assert_eq!(m.get(0, 0), R64!(0));
        assert_eq!(m.get(298, 481), R64!(0));
        assert_eq!(m.nr_non_zeros(), 0);

        let m = Sparse::<T>::identity(133);
        assert_eq!(m.get(0, 0), R64!(1));
        assert_eq!(m.get(132, 132), R64!(1));
        assert_eq!(m.get(0, 1), R64!(0));
        assert_eq!(m.nr_non_zeros(), 133);
    }

    #[test]
    fn with_shape() {
        assert_eq!(Sparse::<T>::with_shape(&[2, 3]).map(|m| m.shape()), Ok((2, 3)));
        assert!(matches!(Sparse::<T>::with_shape(&[-1, 3]), Err(Error::InvalidDimension(_))));
        assert!(matches!(Sparse::<T>::with_shape(&[2, 3, 4]), Err(Error::InvalidDimension(_))));
        assert!(matches!(Sparse::<T>::with_shape(&[2]), Err(Error::InvalidDimension(_))));
    }

    #[test]
    fn from_dense_skips_zeros() {
        let m = test_matrix();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.nr_non_zeros(), 4);
        assert_eq!(m.get(1, 2), R64!(6));
        assert_eq!(m.get_ref(0, 2), None);

        let m = Sparse::<f64>::from_dense(&[[0_f64, 1.5], [0_f64, 0_f64]]);
        assert_eq!(m.nr_non_zeros(), 1);
        assert_eq!(m.get(0, 1), 1.5);
    }

    #[test]
    fn from_dense_in_any_order() {
        let values = [[R64!(1), R64!(2), R64!(3)], [R64!(4), R64!(5), R64!(6)]];
        let m = Sparse::from_dense(&RightToLeft(values.clone()));

        assert_eq!(m.get(0, 2), R64!(3));
        assert_eq!(m.get(1, 1), R64!(5));
        assert_eq!(m, Sparse::from_dense(&values));
        assert_eq!(m.iter_non_zero().map(|(i, j, _)| (i, j)).collect::<Vec<_>>(), vec![
            (0, 0), (0, 1), (0, 2),
            (1, 0), (1, 1), (1, 2),
        ]);
    }

    #[test]
    fn get_out_of_range_is_zero() {
        let m = test_matrix();
        assert_eq!(m.get(2, 0), R64!(0));
        assert_eq!(m.get(0, 3), R64!(0));
        assert_eq!(m.get(usize::MAX, usize::MAX), R64!(0));
        assert!(!m.within_bounds(2, 0));
        assert!(m.within_bounds(1, 2));
    }

    #[test]
    fn put() {
        let mut m = test_matrix();

        // Same value, same count
        m.put(0, 1, R64!(2)).unwrap();
        assert_eq!(m.nr_non_zeros(), 4);
        assert_eq!(m.get(0, 1), R64!(2));

        // Zero into non-zero removes
        m.put(0, 1, R64!(0)).unwrap();
        assert_eq!(m.nr_non_zeros(), 3);
        assert_eq!(m.get_ref(0, 1), None);

        // Zero into zero is a no-op
        m.put(0, 1, R64!(0)).unwrap();
        assert_eq!(m.nr_non_zeros(), 3);

        // Non-zero into zero inserts, in order
        m.put(1, 0, R64!(3)).unwrap();
        assert_eq!(m.nr_non_zeros(), 4);
        assert_eq!(m.sparse_row(1), &[(0, R64!(3)), (1, R64!(5)), (2, R64!(6))]);
    }

    #[test]
    fn put_out_of_bounds() {
        let mut m = test_matrix();
        assert_eq!(
            m.put(2, 0, R64!(4)),
            Err(Error::IndexOutOfBounds { axis: Axis::Row, index: 2, len: 2 }),
        );
        assert_eq!(
            m.put(0, 3, R64!(4)),
            Err(Error::IndexOutOfBounds { axis: Axis::Column, index: 3, len: 3 }),
        );
        assert_eq!(m, test_matrix());
    }

    #[test]
    fn iter_non_zero() {
        let m = test_matrix();
        let triples = m.iter_non_zero().map(|(i, j, &v)| (i, j, v)).collect::<Vec<_>>();
        assert_eq!(triples, vec![(0, 0, R64!(1)), (0, 1, R64!(2)), (1, 1, R64!(5)), (1, 2, R64!(6))]);
    }

    #[test]
    fn clone_does_not_alias() {
        let m = test_matrix();
        let mut copy = m.clone();
        copy.put(0, 0, R64!(9)).unwrap();
        assert_eq!(m.get(0, 0), R64!(1));
        assert_ne!(m, copy);
    }

    #[test]
    fn transpose() {
        let mut m = test_matrix();
        m.transpose();
        assert_eq!(m, from_rows(vec![vec![1, 0], vec![2, 5], vec![0, 6]]));
        m.transpose();
        assert_eq!(m, test_matrix());
    }

    #[test]
    fn flip() {
        let mut m = test_matrix();
        m.flip_horizontal();
        assert_eq!(m, from_rows(vec![vec![0, 2, 1], vec![6, 5, 0]]));
        m.flip_horizontal();
        assert_eq!(m, test_matrix());

        m.flip_vertical();
        assert_eq!(m, from_rows(vec![vec![0, 5, 6], vec![1, 2, 0]]));
        m.flip_vertical();
        assert_eq!(m, test_matrix());

        let mut empty = Sparse::<T>::new(3, 0);
        empty.flip_horizontal();
        assert_eq!(empty, Sparse::new(3, 0));
    }

    #[test]
    fn rotate() {
        let m = from_rows(vec![vec![1, 2], vec![3, 4]]);

        let mut quarter = m.clone();
        quarter.rotate(Rotation::Quarter).unwrap();
        assert_eq!(quarter, from_rows(vec![vec![2, 4], vec![1, 3]]));

        let mut half = m.clone();
        half.rotate(Rotation::Half).unwrap();
        assert_eq!(half, from_rows(vec![vec![4, 3], vec![2, 1]]));

        let mut three_quarters = m.clone();
        three_quarters.rotate(Rotation::ThreeQuarters).unwrap();
        assert_eq!(three_quarters, from_rows(vec![vec![3, 1], vec![4, 2]]));
    }

    #[test]
    fn rotate_odd_size() {
        let m = from_rows(vec![vec![1, 2, 0], vec![0, 5, 6], vec![7, 0, 9]]);
        let mut rotated = m.clone();
        rotated.rotate(Rotation::Quarter).unwrap();
        assert_eq!(rotated, from_rows(vec![vec![0, 6, 9], vec![2, 5, 0], vec![1, 0, 7]]));
        assert_eq!(rotated.nr_non_zeros(), m.nr_non_zeros());

        rotated.rotate(Rotation::ThreeQuarters).unwrap();
        assert_eq!(rotated, m);
    }

    #[test]
    fn rotate_not_square() {
        let mut m = test_matrix();
        assert_eq!(m.rotate(Rotation::Half), Err(Error::NotSquare { nr_rows: 2, nr_columns: 3 }));
    }

    #[test]
    fn switch() {
        let mut m = from_rows(vec![vec![1, 2], vec![3, 4]]);
        m.switch(0, 1, Axis::Row).unwrap();
        assert_eq!(m, from_rows(vec![vec![3, 4], vec![1, 2]]));

        let mut m = test_matrix();
        m.switch(0, 2, Axis::Column).unwrap();
        assert_eq!(m, from_rows(vec![vec![0, 2, 1], vec![6, 5, 0]]));
        m.switch(0, 2, Axis::Column).unwrap();
        assert_eq!(m, test_matrix());

        assert_eq!(
            m.switch(0, 2, Axis::Row),
            Err(Error::IndexOutOfBounds { axis: Axis::Row, index: 2, len: 2 }),
        );
    }

    #[test]
    fn remove() {
        let original = five_by_five();
        let mut m = original.clone();
        m.remove(&[1], &[1, 3]).unwrap();
        assert_eq!(m.shape(), (4, 3));

        let kept_rows = [0, 2, 3, 4];
        let kept_columns = [0, 2, 4];
        for (i, &old_i) in kept_rows.iter().enumerate() {
            for (j, &old_j) in kept_columns.iter().enumerate() {
                assert_eq!(m.get(i, j), original.get(old_i, old_j));
            }
        }
    }

    #[test]
    fn remove_duplicates_and_unsorted() {
        let mut m = five_by_five();
        m.remove(&[4, 0, 4], &[3, 3, 0]).unwrap();
        assert_eq!(m.shape(), (3, 3));
        assert_eq!(m.get(0, 0), R64!(12));
        assert_eq!(m.get(2, 2), R64!(35));
    }

    #[test]
    fn remove_everything() {
        let mut m = test_matrix();
        m.remove(&[0, 1], &[0, 1, 2]).unwrap();
        assert_eq!(m.shape(), (0, 0));
        assert_eq!(m.nr_non_zeros(), 0);
    }

    #[test]
    fn remove_out_of_bounds() {
        let mut m = test_matrix();
        assert_eq!(
            m.remove(&[0], &[3]),
            Err(Error::IndexOutOfBounds { axis: Axis::Column, index: 3, len: 3 }),
        );
        assert_eq!(m, test_matrix());
    }

    #[test]
    fn row_operation() {
        let mut m = test_matrix();
        m.row_operation(1, 0, RowOperation::Add).unwrap();
        assert_eq!(m, from_rows(vec![vec![1, 2, 0], vec![1, 7, 6]]));

        let mut m = test_matrix();
        m.row_operation(0, 1, RowOperation::Multiply).unwrap();
        assert_eq!(m, from_rows(vec![vec![0, 10, 0], vec![0, 5, 6]]));

        // Cancellation removes the value
        let mut m = from_rows(vec![vec![1, -2], vec![3, 2]]);
        m.row_operation(0, 1, RowOperation::Add).unwrap();
        assert_eq!(m.sparse_row(0), &[(0, R64!(4))]);

        // With itself
        let mut m = test_matrix();
        m.row_operation(0, 0, RowOperation::Multiply).unwrap();
        assert_eq!(m, from_rows(vec![vec![1, 4, 0], vec![0, 5, 6]]));
    }

    #[test]
    fn row_column() {
        let m = test_matrix();
        assert_eq!(m.row(1), Ok(vec![R64!(0), R64!(5), R64!(6)]));
        assert_eq!(m.column(1), Ok(vec![R64!(2), R64!(5)]));
        assert!(m.row(2).is_err());
        assert!(m.column(3).is_err());
    }

    #[test]
    fn contains() {
        let m = test_matrix();
        assert!(m.contains(&R64!(5)));
        assert!(m.contains(&R64!(0)));
        assert!(!m.contains(&R64!(7)));
        assert!(!Sparse::<T>::identity(1).contains(&R64!(0)));
    }

    #[test]
    fn dense_round_trip() {
        let dense = test_matrix().to_dense();
        assert_eq!(Sparse::from_dense(&dense), test_matrix());
        assert_eq!(test_matrix().to_string(), "[1 2 0]\n[0 5 6]\n");
    }

    #[test]
    fn rounded() {
        let m = Sparse::from_dense(&[[1e-12_f64, 0.333_333_333_333_3]]);
        let rounded = m.rounded(10);
        assert_eq!(rounded.nr_non_zeros(), 1);
        assert_eq!(rounded.get(0, 1), 0.333_333_333_3);
    }

    #[test]
    fn approximately_equal() {
        let m = Sparse::from_dense(&[[0.1_f32, 0_f32], [0_f32, 0.7]]);
        let shifted = m.add_scalar(&9_f32).subtract_scalar(&9_f32);
        assert_ne!(shifted, m);
        assert!(shifted.approx_eq(&m, &9_f32));
        assert!(!Sparse::from_dense(&[[0.2_f32, 0_f32], [0_f32, 0.7]]).approx_eq(&m, &9_f32));
        assert!(!Sparse::from_dense(&[[0.1_f32, 0_f32]]).approx_eq(&m, &9_f32));

        // A value on one side only is compared with zero
        let noise = Sparse::from_dense(&[[0.1_f64, 1e-14]]);
        assert!(noise.approx_eq(&Sparse::from_dense(&[[0.1_f64, 0_f64]]), &1_f64));
        assert!(!noise.approx_eq(&Sparse::from_dense(&[[0.1_f64, 1e-3]]), &1_f64));

        assert!(test_matrix().approx_eq(&test_matrix(), &R64!(1)));
        assert!(!test_matrix().approx_eq(&from_rows(vec![vec![1, 2, 1], vec![0, 5, 6]]), &R64!(1)));
    }
}
