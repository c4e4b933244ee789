//! # Arithmetic
//!
//! Elementwise operations with scalars and matrices, and the matrix product. Each operation leaves
//! its operands untouched and creates a new matrix, from which zero results are pruned.
use itertools::{EitherOrBoth, Itertools};
use num_traits::Zero;

use crate::data::linear_algebra::matrix::Sparse;
use crate::data::linear_algebra::SparseTuple;
use crate::data::number_types::traits::Element;
use crate::error::Error;

impl<F: Element> Sparse<F> {
    fn check_same_shape(&self, other: &Self) -> Result<(), Error> {
        if self.shape() == other.shape() {
            Ok(())
        } else {
            Err(Error::dimension_mismatch(self.shape(), other.shape()))
        }
    }

    /// Evaluate a function at every cell, stored or not.
    fn map_all_cells(&self, f: impl Fn(Option<&F>) -> F) -> Self {
        let data = self.data.iter()
            .map(|sparse_row| {
                let mut stored = sparse_row.iter().peekable();
                (0..self.nr_columns)
                    .filter_map(|j| {
                        let current = stored.next_if(|(k, _)| *k == j).map(|(_, value)| value);
                        let value = f(current);
                        (!value.is_zero()).then_some((j, value))
                    })
                    .collect()
            })
            .collect();

        Self { data, nr_columns: self.nr_columns }
    }

    /// Combine two matrices of equal shape over the union of their non-zero positions.
    fn zip_rows(
        &self,
        other: &Self,
        f: impl Fn(EitherOrBoth<&F, &F>) -> Option<F>,
    ) -> Result<Self, Error> {
        self.check_same_shape(other)?;

        let data = self.data.iter()
            .zip(&other.data)
            .map(|(left, right)| left.iter()
                .merge_join_by(right, |(i, _), (j, _)| i.cmp(j))
                .filter_map(|pair| {
                    let (index, values) = match pair {
                        EitherOrBoth::Both((i, a), (_, b)) => (*i, EitherOrBoth::Both(a, b)),
                        EitherOrBoth::Left((i, a)) => (*i, EitherOrBoth::Left(a)),
                        EitherOrBoth::Right((j, b)) => (*j, EitherOrBoth::Right(b)),
                    };
                    f(values)
                        .filter(|value| !value.is_zero())
                        .map(|value| (index, value))
                })
                .collect())
            .collect();

        Ok(Self { data, nr_columns: self.nr_columns })
    }

    /// Add a value to every cell.
    #[must_use]
    pub fn add_scalar(&self, value: &F) -> Self {
        if value.is_zero() {
            return self.clone();
        }

        self.map_all_cells(|current| match current {
            Some(current) => current.clone() + value.clone(),
            None => value.clone(),
        })
    }

    /// Subtract a value from every cell.
    #[must_use]
    pub fn subtract_scalar(&self, value: &F) -> Self {
        self.add_scalar(&-value.clone())
    }

    /// Multiply every value by a factor.
    #[must_use]
    pub fn scale(&self, factor: &F) -> Self {
        if factor.is_zero() {
            return Self::new(self.nr_rows(), self.nr_columns);
        }

        let data = self.data.iter()
            .map(|sparse_row| sparse_row.iter()
                .map(|(j, value)| (*j, value.clone() * factor.clone()))
                .filter(|(_, value)| !value.is_zero())
                .collect())
            .collect();

        Self { data, nr_columns: self.nr_columns }
    }

    /// Elementwise sum.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the shapes differ.
    pub fn add(&self, other: &Self) -> Result<Self, Error> {
        self.zip_rows(other, |pair| Some(match pair {
            EitherOrBoth::Both(a, b) => a.clone() + b.clone(),
            EitherOrBoth::Left(a) => a.clone(),
            EitherOrBoth::Right(b) => b.clone(),
        }))
    }

    /// Elementwise difference.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the shapes differ.
    pub fn subtract(&self, other: &Self) -> Result<Self, Error> {
        self.zip_rows(other, |pair| Some(match pair {
            EitherOrBoth::Both(a, b) => a.clone() - b.clone(),
            EitherOrBoth::Left(a) => a.clone(),
            EitherOrBoth::Right(b) => -b.clone(),
        }))
    }

    /// Elementwise (Hadamard) product.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the shapes differ.
    pub fn element_multiply(&self, other: &Self) -> Result<Self, Error> {
        self.zip_rows(other, |pair| match pair {
            EitherOrBoth::Both(a, b) => Some(a.clone() * b.clone()),
            EitherOrBoth::Left(_) | EitherOrBoth::Right(_) => None,
        })
    }

    /// Matrix product `self * other`.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the number of columns of `self` is not the number of rows of
    /// `other`.
    pub fn multiply(&self, other: &Self) -> Result<Self, Error> {
        if self.nr_columns != other.nr_rows() {
            return Err(Error::dimension_mismatch(self.shape(), other.shape()));
        }

        let data = self.data.iter()
            .map(|sparse_row| {
                let mut accumulator = vec![F::zero(); other.nr_columns];
                for (k, a) in sparse_row {
                    for (j, b) in &other.data[*k] {
                        let product = a.clone() * b.clone();
                        accumulator[*j] = accumulator[*j].clone() + product;
                    }
                }

                accumulator.into_iter()
                    .enumerate()
                    .filter(|(_, value)| !value.is_zero())
                    .collect::<Vec<SparseTuple<F>>>()
            })
            .collect();

        Ok(Self { data, nr_columns: other.nr_columns })
    }
}
