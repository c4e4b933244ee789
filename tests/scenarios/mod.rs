//! # Worked examples
//!
//! Small matrices with known results, checked through the public interface only.
use relp_num::{R64, Rational64, RationalBig, RB};

use relp_sparse::{Arguments, Axis, Config, Dense, Error, Factory, Matrix, Operand, Rotation, RowOperation};

type T = Rational64;

fn create<const M: usize, const N: usize>(rows: [[i32; N]; M]) -> Matrix<T> {
    let dense = rows.map(|row| row.map(|v| R64!(v)));
    Factory::with_config(Config::checked()).create::<T>(Arguments::Dense(&dense)).unwrap()
}

fn dense<const M: usize, const N: usize>(rows: [[i32; N]; M]) -> Dense<T> {
    Dense::from_rows(rows.iter().map(|row| row.iter().map(|&v| R64!(v)).collect()).collect()).unwrap()
}

#[test]
fn determinant() {
    assert_eq!(create([[6, 1, 1], [4, -2, 5], [2, 8, 7]]).determinant(), Ok(R64!(-306)));
    assert_eq!(create([[1, 0, 2, -1], [3, 0, 0, 5], [2, 1, 4, -3], [1, 0, 5, 0]]).determinant(), Ok(R64!(30)));
    assert_eq!(create([[1, 2], [2, 4]]).determinant(), Ok(R64!(0)));
    assert!(matches!(create([[1, 2, 3]]).determinant(), Err(Error::NotSquare { .. })));
}

#[test]
fn determinant_big_rationals() {
    let dense = [[RB!(1, 2), RB!(1, 3)], [RB!(1, 4), RB!(1, 5)]];
    let matrix = Factory::with_config(Config::checked())
        .create::<RationalBig>(Arguments::Dense(&dense))
        .unwrap();
    assert_eq!(matrix.determinant(), Ok(RB!(1, 60)));
}

#[test]
fn rank() {
    assert_eq!(create([[2, 2, -1], [4, 0, 2], [0, 6, -1]]).rank(), Ok(3));
    assert_eq!(create([[1, 2, 3], [4, 5, 6], [7, 8, 9]]).rank(), Ok(2));
    assert_eq!(create([[0, 0], [0, 0]]).rank(), Ok(0));
}

#[test]
fn inverse() {
    let matrix = create([[2, 0, 1], [1, 1, 0], [0, 3, 1]]);
    let inverse = matrix.inverse().unwrap();
    assert_eq!(matrix.multiply(&inverse), Ok(Matrix::identity(3)));
    assert_eq!(inverse.multiply(&matrix), Ok(Matrix::identity(3)));

    assert_eq!(create([[1, 1], [1, 1]]).inverse(), Err(Error::NotInvertible));
    assert_eq!(create([[1, 1, 1]]).inverse(), Err(Error::NotInvertible));
}

#[test]
fn inverse_float() {
    let dense = [[2_f64, 1_f64], [1_f64, 3_f64]];
    let matrix = Factory::with_config(Config::checked()).create::<f64>(Arguments::Dense(&dense)).unwrap();
    let inverse = matrix.inverse().unwrap();

    assert_eq!(inverse.get(0, 0), 0.6);
    assert_eq!(inverse.get(0, 1), -0.2);
    assert_eq!(inverse.get(1, 1), 0.4);
}

#[test]
fn single_precision() {
    let dense = [[0.1_f32, 0_f32, 2.5], [0_f32, 0.7, 0_f32], [1e-29_f32, 0_f32, 1_f32]];
    let matrix = Factory::with_config(Config::checked()).create::<f32>(Arguments::Dense(&dense)).unwrap();

    assert_eq!(matrix.transpose().map(|transposed| transposed.get(2, 0)), Ok(2.5));
    assert_eq!(matrix.subtract(Operand::Scalar(0.1)).map(|difference| difference.get(0, 0)), Ok(0_f32));
    assert!(matrix.inverse().is_ok_and(|inverse| inverse.get(1, 1).is_finite()));
    assert!(matrix.determinant().is_ok_and(|determinant| (determinant - 0.07).abs() < 1e-6));
}

#[test]
fn switch_rows() {
    let switched = create([[1, 2], [3, 4]]).switch(0, 1, Axis::Row).unwrap();
    assert_eq!(switched.to_dense(), dense([[3, 4], [1, 2]]));
}

#[test]
fn rotate() {
    let matrix = create([[1, 2], [3, 4]]);
    assert_eq!(matrix.rotate(Rotation::Quarter).unwrap().to_dense(), dense([[2, 4], [1, 3]]));
    assert_eq!(matrix.rotate(Rotation::Half).unwrap().to_dense(), dense([[4, 3], [2, 1]]));
    assert_eq!(matrix.rotate(Rotation::ThreeQuarters).unwrap().to_dense(), dense([[3, 1], [4, 2]]));

    assert_eq!(Rotation::try_from(1), Ok(Rotation::Half));
    assert!(matches!(Rotation::try_from(3), Err(Error::InvalidArgument(_))));
    assert!(matches!(create([[1, 2]]).rotate(Rotation::Quarter), Err(Error::NotSquare { .. })));
}

#[test]
fn sub_matrix() {
    let original = create([
        [11, 12, 13, 14, 15],
        [21, 22, 23, 24, 25],
        [31, 32, 33, 34, 35],
        [41, 42, 43, 44, 45],
        [51, 52, 53, 54, 55],
    ]);
    let reduced = original.sub_matrix(&[1], &[1, 3]).unwrap();

    assert_eq!(reduced.shape(), (4, 3));
    assert_eq!(reduced.to_dense(), dense([[11, 13, 15], [31, 33, 35], [41, 43, 45], [51, 53, 55]]));
    for (i, old_i) in [0, 2, 3, 4].into_iter().enumerate() {
        for (j, old_j) in [0, 2, 4].into_iter().enumerate() {
            assert_eq!(reduced.get(i, j), original.get(old_i, old_j));
        }
    }
}

#[test]
fn row_operations() {
    let matrix = create([[1, 0, 2], [3, 4, 0]]);
    assert_eq!(matrix.row_operation(0, 1, RowOperation::Add).unwrap().row(0), Ok(vec![R64!(4), R64!(4), R64!(2)]));
    assert_eq!(matrix.row_operation(0, 1, RowOperation::Multiply).unwrap().row(0), Ok(vec![R64!(3), R64!(0), R64!(0)]));
    assert_eq!(matrix.column(2), Ok(vec![R64!(2), R64!(0)]));
}

#[test]
fn arithmetic() {
    let left = create([[1, 2], [3, 4], [5, 6]]);
    let right = create([[1, 0, -1], [0, 1, 1]]);

    assert_eq!(left.multiply(&right).unwrap().to_dense(), dense([[1, 2, 1], [3, 4, 1], [5, 6, 1]]));
    assert_eq!(left.multiply(Operand::Scalar(R64!(0))).unwrap().nr_non_zeros(), 0);
    assert_eq!(left.add(Operand::Scalar(R64!(-1))).unwrap().nr_non_zeros(), 5);
    assert!(matches!(left.add(&right), Err(Error::ContractViolation(_))));
    assert!(matches!(right.element_multiply(&left), Err(Error::ContractViolation(_))));
}

#[test]
fn unchecked_errors() {
    let matrix = Matrix::<T>::from_dense(&[[R64!(1), R64!(2)], [R64!(3), R64!(4)]]);

    assert_eq!(matrix.switch(0, 2, Axis::Column), Err(Error::IndexOutOfBounds { axis: Axis::Column, index: 2, len: 2 }));
    assert_eq!(matrix.row(3), Err(Error::IndexOutOfBounds { axis: Axis::Row, index: 3, len: 2 }));
    assert!(matches!(matrix.add(&Matrix::<T>::zeros(1, 2)), Err(Error::DimensionMismatch { .. })));
    assert!(matches!(Axis::try_from(2), Err(Error::InvalidArgument(_))));
}

#[test]
fn display() {
    assert_eq!(create([[1, 0], [0, 2]]).to_string(), "[1 0]\n[0 2]\n");
}
