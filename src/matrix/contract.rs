//! # Contracts
//!
//! Checks that are evaluated around the operations of a `Matrix` when contract checking is enabled.
//!
//! Preconditions are checked on the operands, postconditions compare the result of an operation to
//! an independent, dense or coordinate-wise, computation of what it should be. The invariants
//! exercise a store as a whole: they apply pairs of operations that should cancel and compare the
//! outcome to the original.
//!
//! Each check is at least quadratic in the size of the matrix. Violations are logged before they
//! are returned.
use std::fmt::Debug;

use log::error;
use num_traits::Zero;
use rand::Rng;

use crate::algorithm;
use crate::data::linear_algebra::{Axis, DECIMAL_PLACES, Rotation, RowOperation};
use crate::data::linear_algebra::dense::Dense;
use crate::data::linear_algebra::matrix::Sparse;
use crate::data::linear_algebra::traits::DenseMatrix;
use crate::data::number_types::traits::{absolute, approx_eq, Element, from_count};
use crate::error::{Condition, Error, Violation};

/// Largest scalar, and largest value of a perturbation, that the invariants add and take away.
const LARGEST_SHIFT: u32 = 9;

fn check(
    condition: Condition,
    name: &'static str,
    holds: bool,
    expected: impl FnOnce() -> String,
    actual: impl FnOnce() -> String,
) -> Result<(), Violation> {
    if holds {
        Ok(())
    } else {
        let violation = Violation { condition, name, expected: expected(), actual: actual() };
        error!("{}", violation);
        Err(violation)
    }
}

fn ensure_equal<T: PartialEq + Debug>(
    condition: Condition,
    name: &'static str,
    expected: T,
    actual: T,
) -> Result<(), Violation> {
    check(
        condition,
        name,
        expected == actual,
        || format!("{:?}", expected),
        || format!("{:?}", actual),
    )
}

/// An index can be used along an axis.
pub(crate) fn index_in_bounds<F>(store: &Sparse<F>, axis: Axis, index: usize) -> Result<(), Violation> {
    let len = store.len(axis);
    check(
        Condition::Precondition,
        "index in bounds",
        index < len,
        || format!("{} index below {}", axis, len),
        || index.to_string(),
    )
}

pub(crate) fn indices_in_bounds<F>(store: &Sparse<F>, axis: Axis, indices: &[usize]) -> Result<(), Violation> {
    indices.iter().try_for_each(|&index| index_in_bounds(store, axis, index))
}

/// Both operands of an elementwise operation have the same shape.
pub(crate) fn same_shape<F>(left: &Sparse<F>, right: &Sparse<F>) -> Result<(), Violation> {
    ensure_equal(Condition::Precondition, "equal shapes", left.shape(), right.shape())
}

/// The operands of a product can be chained.
pub(crate) fn inner_dimensions_agree<F>(left: &Sparse<F>, right: &Sparse<F>) -> Result<(), Violation> {
    ensure_equal(
        Condition::Precondition,
        "columns of the left equal rows of the right",
        left.nr_columns(),
        right.nr_rows(),
    )
}

/// A single value was written and all other values are untouched.
///
/// The number of stored values changes only when a zero is replaced by a non-zero or the other way
/// around.
pub(crate) fn put_applied<F: Element>(
    before: &Sparse<F>,
    after: &Sparse<F>,
    row: usize,
    column: usize,
    value: &F,
) -> Result<(), Violation> {
    ensure_equal(Condition::Postcondition, "shape", before.shape(), after.shape())?;
    ensure_equal(Condition::Postcondition, "value placed", value.clone(), after.get(row, column))?;
    check(
        Condition::Postcondition,
        "value contained",
        after.contains(value),
        || format!("matrix containing {}", value),
        || after.to_string(),
    )?;

    let count = before.nr_non_zeros();
    let expected_count = match (before.get_ref(row, column).is_some(), value.is_zero()) {
        (false, false) => count + 1,
        (true, true) => count - 1,
        _ => count,
    };
    ensure_equal(Condition::Postcondition, "entry count", expected_count, after.nr_non_zeros())?;

    let other_values = |matrix: &Sparse<F>| matrix.iter_non_zero()
        .filter(|&(i, j, _)| (i, j) != (row, column))
        .map(|(i, j, value)| (i, j, value.clone()))
        .collect::<Vec<_>>();
    ensure_equal(Condition::Postcondition, "other values untouched", other_values(before), other_values(after))
}

/// Every value of `original` moved to a new coordinate and nothing else was stored.
pub(crate) fn moved<F: Element>(
    name: &'static str,
    original: &Sparse<F>,
    result: &Sparse<F>,
    expected_shape: (usize, usize),
    destination: impl Fn(usize, usize) -> (usize, usize),
) -> Result<(), Violation> {
    ensure_equal(Condition::Postcondition, "shape", expected_shape, result.shape())?;
    ensure_equal(Condition::Postcondition, "entry count", original.nr_non_zeros(), result.nr_non_zeros())?;

    for (i, j, value) in original.iter_non_zero() {
        let (row, column) = destination(i, j);
        ensure_equal(Condition::Postcondition, name, Some(value), result.get_ref(row, column))?;
    }

    Ok(())
}

/// The coordinate a value ends up at after a number of quarter turns of a square matrix.
pub(crate) fn rotated_coordinate(len: usize, rotation: Rotation, row: usize, column: usize) -> (usize, usize) {
    (0..rotation.quarter_turns()).fold((row, column), |(row, column), _| (len - 1 - column, row))
}

/// Removal kept exactly the rows and columns not listed, in their original order.
pub(crate) fn reduced<F: Element>(
    original: &Sparse<F>,
    result: &Sparse<F>,
    rows: &[usize],
    columns: &[usize],
) -> Result<(), Violation> {
    let kept_rows = (0..original.nr_rows()).filter(|i| !rows.contains(i)).collect::<Vec<_>>();
    let kept_columns = (0..original.nr_columns()).filter(|j| !columns.contains(j)).collect::<Vec<_>>();
    ensure_equal(Condition::Postcondition, "shape", (kept_rows.len(), kept_columns.len()), result.shape())?;

    let expected = Dense::build(kept_rows.len(), kept_columns.len(), |i, j| {
        original.get(kept_rows[i], kept_columns[j])
    });
    ensure_equal(Condition::Postcondition, "remaining values", expected, result.to_dense())
}

/// Row `i` was combined with row `j` and the other rows are untouched.
pub(crate) fn combined<F: Element>(
    original: &Sparse<F>,
    result: &Sparse<F>,
    i: usize,
    j: usize,
    operation: RowOperation,
) -> Result<(), Violation> {
    let expected = Dense::build(original.nr_rows(), original.nr_columns(), |row, column| {
        if row == i {
            let (a, b) = (original.get(i, column), original.get(j, column));
            match operation {
                RowOperation::Add => a + b,
                RowOperation::Multiply => a * b,
            }
        } else {
            original.get(row, column)
        }
    });
    cells_equal(result, &expected)
}

/// A store holds exactly the values of a dense matrix.
pub(crate) fn cells_equal<F: Element>(result: &Sparse<F>, expected: &Dense<F>) -> Result<(), Violation> {
    ensure_equal(
        Condition::Postcondition,
        "shape",
        (expected.nr_rows(), expected.nr_columns()),
        result.shape(),
    )?;
    ensure_equal(Condition::Postcondition, "values", expected, &result.to_dense())
}

/// The dense matrix product, computed cell by cell.
pub(crate) fn dense_product<F: Element>(left: &Sparse<F>, right: &Sparse<F>) -> Dense<F> {
    Dense::build(left.nr_rows(), right.nr_columns(), |i, j| {
        (0..left.nr_columns()).fold(F::zero(), |total, k| total + left.get(i, k) * right.get(k, j))
    })
}

/// The most that rounding to `DECIMAL_PLACES` changes a value.
fn rounding_resolution<F: Element>() -> F {
    if F::tolerance().is_zero() {
        // Exact types don't round
        F::zero()
    } else {
        let unit = num_traits::pow(from_count::<F>(10), DECIMAL_PLACES as usize);
        F::one() / (from_count::<F>(2) * unit)
    }
}

/// The product of a matrix with its inverse is the identity.
///
/// A cell of the product may be off by what rounding the inverse to `DECIMAL_PLACES` explains,
/// plus the tolerance of `F` relative to the terms that were summed. For exact types, the product
/// is the identity.
pub(crate) fn inverted<F: Element>(original: &Sparse<F>, inverse: &Sparse<F>) -> Result<(), Violation> {
    ensure_equal(Condition::Postcondition, "shape", original.shape(), inverse.shape())?;

    let len = original.nr_rows();
    let resolution = rounding_resolution::<F>();
    for i in 0..len {
        let row_magnitude = (0..len).fold(F::zero(), |total, k| total + absolute(original.get(i, k)));
        for j in 0..len {
            let (value, terms) = (0..len).fold((F::zero(), F::zero()), |(value, terms), k| {
                let term = original.get(i, k) * inverse.get(k, j);
                (value + term.clone(), terms + absolute(term))
            });
            let expected = if i == j { F::one() } else { F::zero() };
            let bound = F::tolerance() * (terms + F::one()) + resolution.clone() * row_magnitude.clone();

            check(
                Condition::Postcondition,
                "product with inverse is identity",
                absolute(value.clone() - expected.clone()) <= bound,
                || format!("{} at ({}, {}) to {} decimal places", expected, i, j, DECIMAL_PLACES),
                || value.to_string(),
            )?;
        }
    }

    Ok(())
}

/// The determinant equals that of the transpose. For exact types, it is zero exactly when the
/// matrix is rank deficient.
pub(crate) fn determinant_consistent<F: Element>(original: &Sparse<F>, determinant: &F) -> Result<(), Violation> {
    let mut transposed = original.clone();
    transposed.transpose();
    let of_transpose = algorithm::determinant(&transposed);

    // Bounds each term of the expansion
    let len = original.nr_rows();
    let scale = (0..len)
        .map(|i| (0..len).fold(F::zero(), |total, j| total + absolute(original.get(i, j))))
        .fold(F::one(), |product, row_magnitude| product * row_magnitude);
    check(
        Condition::Postcondition,
        "determinant of the transpose",
        of_transpose.as_ref().is_ok_and(|other| approx_eq(determinant, other, &scale)),
        || determinant.to_string(),
        || format!("{:?}", of_transpose),
    )?;

    if F::tolerance().is_zero() {
        ensure_equal(
            Condition::Postcondition,
            "zero determinant exactly when rank deficient",
            Ok(determinant.is_zero()),
            algorithm::rank(original).map(|rank| rank < len),
        )?;
    }

    Ok(())
}

/// The rank can't exceed the number of rows or columns.
pub(crate) fn rank_bounded<F>(original: &Sparse<F>, rank: usize) -> Result<(), Violation> {
    let bound = original.nr_rows().min(original.nr_columns());
    check(
        Condition::Postcondition,
        "rank at most the smallest dimension",
        rank <= bound,
        || format!("at most {}", bound),
        || rank.to_string(),
    )
}

/// Apply operations to a copy and require that the copy still equals the store afterwards.
///
/// Values are compared up to the tolerance of `F`. The `scale` is the size of the values that the
/// operations add, see `approx_eq`.
fn restores<F: Element>(
    store: &Sparse<F>,
    name: &'static str,
    scale: &F,
    operations: impl FnOnce(&mut Sparse<F>) -> Result<(), Error>,
) -> Result<(), Violation> {
    let mut copy = store.clone();
    let result = operations(&mut copy).map(|()| copy);
    check(
        Condition::Invariant,
        name,
        result.as_ref().is_ok_and(|copy| copy.approx_eq(store, scale)),
        || format!("{:?}", store),
        || format!("{:?}", result),
    )
}

/// Structural invariants of a store.
///
/// # Arguments
///
/// * `store`: Matrix to check, it is not modified.
/// * `rng`: Source for the scalars, perturbations and indices used in the checks.
pub(crate) fn invariants<F: Element, R: Rng + ?Sized>(store: &Sparse<F>, rng: &mut R) -> Result<(), Violation> {
    let dense = store.to_dense();
    let dense_non_zeros = dense.cells().filter(|(_, _, value)| !value.is_zero()).count();
    ensure_equal(Condition::Invariant, "entry count matches dense form", dense_non_zeros, store.nr_non_zeros())?;
    check(
        Condition::Invariant,
        "no stored zeros",
        store.iter_non_zero().all(|(_, _, value)| !value.is_zero()),
        || "only non-zero values".to_string(),
        || format!("{:?}", store),
    )?;
    check(
        Condition::Invariant,
        "stored indices in bounds",
        store.iter_non_zero().all(|(i, j, _)| store.within_bounds(i, j)),
        || format!("indices within {:?}", store.shape()),
        || format!("{:?}", store),
    )?;
    if !store.is_empty() {
        ensure_equal(Condition::Invariant, "first value matches dense form", dense[(0, 0)].clone(), store.get(0, 0))?;
    }

    restores(store, "transpose twice", &F::one(), |copy| {
        copy.transpose();
        copy.transpose();
        Ok(())
    })?;
    restores(store, "horizontal flip twice", &F::one(), |copy| {
        copy.flip_horizontal();
        copy.flip_horizontal();
        Ok(())
    })?;
    restores(store, "vertical flip twice", &F::one(), |copy| {
        copy.flip_vertical();
        copy.flip_vertical();
        Ok(())
    })?;

    let scalar = from_count::<F>(rng.gen_range(1..=LARGEST_SHIFT));
    restores(store, "scalar addition and subtraction", &scalar, |copy| {
        *copy = copy.add_scalar(&scalar).subtract_scalar(&scalar);
        Ok(())
    })?;

    let (nr_rows, nr_columns) = store.shape();
    let perturbation = Sparse::from_dense(&Dense::build(nr_rows, nr_columns, |_, _| {
        from_count::<F>(rng.gen_range(0..=LARGEST_SHIFT))
    }));
    let largest_shift = from_count::<F>(LARGEST_SHIFT);
    restores(store, "matrix addition and subtraction", &largest_shift, |copy| {
        *copy = copy.add(&perturbation)?.subtract(&perturbation)?;
        Ok(())
    })?;
    restores(store, "matrix subtraction and addition", &largest_shift, |copy| {
        *copy = copy.subtract(&perturbation)?.add(&perturbation)?;
        Ok(())
    })?;

    for axis in [Axis::Row, Axis::Column] {
        let len = store.len(axis);
        if len >= 2 {
            let (i, j) = (rng.gen_range(0..len), rng.gen_range(0..len));
            restores(store, "switch twice", &F::one(), |copy| {
                copy.switch(i, j, axis)?;
                copy.switch(i, j, axis)
            })?;
        }
    }

    if store.is_square() {
        restores(store, "four quarter turns", &F::one(), |copy| {
            (0..4).try_for_each(|_| copy.rotate(Rotation::Quarter))
        })?;
        restores(store, "two half turns", &F::one(), |copy| {
            copy.rotate(Rotation::Half)?;
            copy.rotate(Rotation::Half)
        })?;
        restores(store, "three quarter turns and a quarter turn", &F::one(), |copy| {
            copy.rotate(Rotation::ThreeQuarters)?;
            copy.rotate(Rotation::Quarter)
        })?;
    }

    Ok(())
}
