//! # Algebraic properties
//!
//! Identities that hold for every matrix, checked on seeded random matrices of varying shape and
//! density.
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use relp_num::{R64, Rational64};

use relp_sparse::{Axis, Config, Matrix, Operand, Rotation};
use relp_sparse::data::linear_algebra::dense::Dense;

type T = Rational64;

const NR_SAMPLES: usize = 20;

fn random_matrix(rng: &mut impl Rng, nr_rows: usize, nr_columns: usize) -> Matrix<T> {
    let dense = Dense::build(nr_rows, nr_columns, |_, _| {
        if rng.gen_bool(0.4) {
            R64!(rng.gen_range(-9..10))
        } else {
            R64!(0)
        }
    });
    Matrix::with_config(Matrix::from_dense(&dense).into_store(), Config::checked())
}

fn samples(seed: u64, square: bool) -> Vec<Matrix<T>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..NR_SAMPLES)
        .map(|_| {
            let nr_rows = rng.gen_range(1..6);
            let nr_columns = if square { nr_rows } else { rng.gen_range(1..6) };
            random_matrix(&mut rng, nr_rows, nr_columns)
        })
        .collect()
}

#[test]
fn transpose_twice() {
    for matrix in samples(1, false) {
        assert_eq!(matrix.transpose().unwrap().transpose().unwrap(), matrix);
    }
}

#[test]
fn scalar_round_trip() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    for matrix in samples(3, false) {
        let value = R64!(rng.gen_range(-9..10), rng.gen_range(1..5));
        let result = matrix.add(Operand::Scalar(value.clone())).unwrap().subtract(Operand::Scalar(value)).unwrap();
        assert_eq!(result, matrix);
    }
}

#[test]
fn matrix_round_trip() {
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    for matrix in samples(5, false) {
        let (nr_rows, nr_columns) = matrix.shape();
        let other = random_matrix(&mut rng, nr_rows, nr_columns);

        assert_eq!(matrix.add(&other).unwrap().subtract(&other).unwrap(), matrix);
        assert_eq!(matrix.subtract(&other).unwrap().add(&other).unwrap(), matrix);
    }
}

#[test]
fn inverse_is_identity() {
    for matrix in samples(6, true) {
        if matrix.determinant().unwrap() == R64!(0) {
            continue;
        }

        let inverse = matrix.inverse().unwrap();
        assert_eq!(matrix.multiply(&inverse).unwrap(), Matrix::identity(matrix.nr_rows()));
    }
}

#[test]
fn flip_twice() {
    for matrix in samples(7, false) {
        assert_eq!(matrix.flip_horizontal().unwrap().flip_horizontal().unwrap(), matrix);
        assert_eq!(matrix.flip_vertical().unwrap().flip_vertical().unwrap(), matrix);
    }
}

#[test]
fn rotations() {
    for matrix in samples(8, true) {
        let quarter = matrix.rotate(Rotation::Quarter).unwrap();
        let half = quarter.rotate(Rotation::Quarter).unwrap();
        assert_eq!(half, matrix.rotate(Rotation::Half).unwrap());

        let full = half.rotate(Rotation::Quarter).unwrap().rotate(Rotation::Quarter).unwrap();
        assert_eq!(full, matrix);
    }
}

#[test]
fn switch_twice() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    for matrix in samples(10, false) {
        for axis in [Axis::Row, Axis::Column] {
            let len = match axis {
                Axis::Row => matrix.nr_rows(),
                Axis::Column => matrix.nr_columns(),
            };
            let (i, j) = (rng.gen_range(0..len), rng.gen_range(0..len));
            assert_eq!(matrix.switch(i, j, axis).unwrap().switch(i, j, axis).unwrap(), matrix);
        }
    }
}

#[test]
fn put_changes_entry_count_by_at_most_one() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    for mut matrix in samples(12, false) {
        let (nr_rows, nr_columns) = matrix.shape();
        let (row, column) = (rng.gen_range(0..nr_rows), rng.gen_range(0..nr_columns));
        let was_zero = matrix.get(row, column) == R64!(0);
        let count = matrix.nr_non_zeros();

        matrix.put(row, column, R64!(0)).unwrap();
        assert_eq!(matrix.nr_non_zeros(), if was_zero { count } else { count - 1 });

        matrix.put(row, column, R64!(7)).unwrap();
        let count = matrix.nr_non_zeros();
        matrix.put(row, column, R64!(7)).unwrap();
        assert_eq!(matrix.nr_non_zeros(), count);

        matrix.put(row, column, R64!(0)).unwrap();
        assert_eq!(matrix.nr_non_zeros(), count - 1);
        matrix.put(row, column, R64!(-3)).unwrap();
        assert_eq!(matrix.nr_non_zeros(), count);
    }
}

#[test]
fn product_is_associative() {
    let mut rng = ChaCha8Rng::seed_from_u64(13);
    for _ in 0..NR_SAMPLES {
        let (m, k, l, n) = (rng.gen_range(1..5), rng.gen_range(1..5), rng.gen_range(1..5), rng.gen_range(1..5));
        let a = random_matrix(&mut rng, m, k);
        let b = random_matrix(&mut rng, k, l);
        let c = random_matrix(&mut rng, l, n);

        let left = a.multiply(&b).unwrap().multiply(&c).unwrap();
        let right = a.multiply(&b.multiply(&c).unwrap()).unwrap();
        assert_eq!(left, right);
    }
}

#[test]
fn rank_of_product() {
    for matrix in samples(14, true) {
        let rank = matrix.rank().unwrap();
        let squared = matrix.multiply(&matrix).unwrap();
        assert!(squared.rank().unwrap() <= rank);
        assert_eq!(rank == matrix.nr_rows(), matrix.determinant().unwrap() != R64!(0));
    }
}
