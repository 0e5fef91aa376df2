use std::ops;

use super::{point::Point, tuple::Tuple, vector::Vector};
use crate::{
    approx_eq::ApproxEq,
    error::{RaytracerError, Result},
};

/// Determinants smaller than this are treated as zero when inverting.
pub const SINGULAR_DETERMINANT: f64 = 1.0e-12;

#[derive(Debug, Clone, Copy)]
/// Row-major matrix with `R` rows and `C` columns
pub struct Matrix<const R: usize, const C: usize> {
    data: [[f64; C]; R],
}

pub type Matrix2 = Matrix<2, 2>;
pub type Matrix3 = Matrix<3, 3>;
pub type Matrix4 = Matrix<4, 4>;

impl<const R: usize, const C: usize> Matrix<R, C> {
    pub fn new(data: [[f64; C]; R]) -> Self {
        Self { data }
    }
    pub fn filled(value: f64) -> Self {
        Self::new([[value; C]; R])
    }
    pub fn empty() -> Self {
        Self::filled(0.)
    }
    pub fn ones() -> Self {
        Self::filled(1.)
    }

    pub fn row_count(&self) -> usize {
        R
    }
    pub fn column_count(&self) -> usize {
        C
    }

    pub fn transpose(&self) -> Matrix<C, R> {
        let mut res = Matrix::<C, R>::empty();
        for row in 0..R {
            for col in 0..C {
                res.data[col][row] = self.data[row][col];
            }
        }
        res
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        let mut res = *self;
        res.data.iter_mut().flatten().for_each(|x| *x = f(*x));
        res
    }

    fn zip_map(&self, rhs: &Self, f: impl Fn(f64, f64) -> f64) -> Self {
        let mut res = *self;
        for row in 0..R {
            for col in 0..C {
                res.data[row][col] = f(self.data[row][col], rhs.data[row][col]);
            }
        }
        res
    }
}

impl<const N: usize> Matrix<N, N> {
    /// Square matrix with `diag` on the main diagonal and `nondiag` everywhere else.
    pub fn diagonal(nondiag: f64, diag: f64) -> Self {
        let mut res = Self::filled(nondiag);
        for i in 0..N {
            res.data[i][i] = diag;
        }
        res
    }

    pub fn identity() -> Self {
        Self::diagonal(0., 1.)
    }
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Matrix<1, 1> {
    pub fn determinant(&self) -> f64 {
        self.data[0][0]
    }
}

macro_rules! impl_cofactor_expansion {
    ($n:literal => $sub:literal) => {
        impl Matrix<$n, $n> {
            pub fn submatrix(&self, row_to_del: usize, col_to_del: usize) -> Matrix<$sub, $sub> {
                let mut res = Matrix::<$sub, $sub>::empty();
                for (res_row, row) in (0..$n).filter(|&row| row != row_to_del).enumerate() {
                    for (res_col, col) in (0..$n).filter(|&col| col != col_to_del).enumerate() {
                        res.data[res_row][res_col] = self.data[row][col];
                    }
                }
                res
            }

            // subject to optimisation
            pub fn minor(&self, row: usize, col: usize) -> f64 {
                self.submatrix(row, col).determinant()
            }

            pub fn cofactor(&self, row: usize, col: usize) -> f64 {
                let minor = self.minor(row, col);
                if (row + col) % 2 == 1 { -minor } else { minor }
            }

            pub fn determinant(&self) -> f64 {
                (0..$n)
                    .map(|col| self.data[0][col] * self.cofactor(0, col))
                    .sum()
            }

            pub fn inverse(&self) -> Result<Self> {
                let determinant = self.determinant();
                if determinant.abs() < SINGULAR_DETERMINANT {
                    return Err(RaytracerError::SingularMatrix { determinant });
                }
                let mut res = Self::empty();

                for row in 0..$n {
                    for col in 0..$n {
                        // transpose the matrix here
                        res.data[col][row] = self.cofactor(row, col) / determinant;
                    }
                }
                Ok(res)
            }
        }
    };
}

impl_cofactor_expansion!(2 => 1);
impl_cofactor_expansion!(3 => 2);
impl_cofactor_expansion!(4 => 3);

impl Matrix4 {
    fn mul_tuple<T: Tuple>(&self, rhs: &T) -> T {
        // the bottom row only produces w, which the tuple type already fixes
        let [x, y, z, w] = rhs.as_array();
        let row = |r: usize| {
            self.data[r][0] * x + self.data[r][1] * y + self.data[r][2] * z + self.data[r][3] * w
        };
        T::new(row(0), row(1), row(2))
    }
}

impl<const R: usize, const C: usize> ApproxEq for Matrix<R, C> {
    fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        self.data
            .iter()
            .flatten()
            .zip(other.data.iter().flatten())
            .all(|(x, y)| x.approx_eq_epsilon(y, epsilon))
    }
}

impl<const R: usize, const C: usize> PartialEq for Matrix<R, C> {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl<const R: usize, const C: usize> ops::Index<(usize, usize)> for Matrix<R, C> {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row][col]
    }
}

impl<const R: usize, const C: usize> ops::IndexMut<(usize, usize)> for Matrix<R, C> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row][col]
    }
}

impl<const R: usize, const C: usize> ops::Add for Matrix<R, C> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        self.zip_map(&rhs, |a, b| a + b)
    }
}

impl<const R: usize, const C: usize> ops::Sub for Matrix<R, C> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        self.zip_map(&rhs, |a, b| a - b)
    }
}

impl<const R: usize, const C: usize> ops::Neg for Matrix<R, C> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self.map(|x| -x)
    }
}

impl<const R: usize, const C: usize> ops::Mul<f64> for Matrix<R, C> {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        self.map(|x| x * rhs)
    }
}

impl<const R: usize, const C: usize> ops::Div<f64> for Matrix<R, C> {
    type Output = Self;
    fn div(self, rhs: f64) -> Self::Output {
        self.map(|x| x / rhs)
    }
}

impl<const R: usize, const K: usize, const C: usize> ops::Mul<&Matrix<K, C>> for &Matrix<R, K> {
    type Output = Matrix<R, C>;
    fn mul(self, rhs: &Matrix<K, C>) -> Self::Output {
        let mut output = Matrix::<R, C>::empty();
        for row in 0..R {
            for col in 0..C {
                output.data[row][col] = (0..K)
                    .map(|k| self.data[row][k] * rhs.data[k][col])
                    .sum();
            }
        }
        output
    }
}

impl<const R: usize, const K: usize, const C: usize> ops::Mul<Matrix<K, C>> for Matrix<R, K> {
    type Output = Matrix<R, C>;
    fn mul(self, rhs: Matrix<K, C>) -> Self::Output {
        &self * &rhs
    }
}

impl<const N: usize> ops::MulAssign<&Matrix<N, N>> for Matrix<N, N> {
    fn mul_assign(&mut self, rhs: &Matrix<N, N>) {
        *self = &*self * rhs;
    }
}

impl<const N: usize> ops::MulAssign<Matrix<N, N>> for Matrix<N, N> {
    fn mul_assign(&mut self, rhs: Matrix<N, N>) {
        *self *= &rhs;
    }
}

impl ops::Mul<Point> for &Matrix4 {
    type Output = Point;
    fn mul(self, rhs: Point) -> Self::Output {
        self.mul_tuple(&rhs)
    }
}

impl ops::Mul<Point> for Matrix4 {
    type Output = Point;
    fn mul(self, rhs: Point) -> Self::Output {
        self.mul_tuple(&rhs)
    }
}

impl ops::Mul<Vector> for &Matrix4 {
    type Output = Vector;
    fn mul(self, rhs: Vector) -> Self::Output {
        self.mul_tuple(&rhs)
    }
}

impl ops::Mul<Vector> for Matrix4 {
    type Output = Vector;
    fn mul(self, rhs: Vector) -> Self::Output {
        self.mul_tuple(&rhs)
    }
}
