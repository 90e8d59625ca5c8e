use std::fmt;
use std::ops::Mul;

use rand::prelude::*;

use crate::error::{MlpError, Result};
use crate::math::scalar::Scalar;

/// Dense row-major matrix with a fixed shape.
///
/// Arithmetic returns new matrices; the only in-place mutations are `set`
/// and the randomizers.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T: Scalar> {
    rows: usize,
    cols: usize,
    data: Vec<Vec<T>>,
}

impl<T: Scalar> Matrix<T> {
    /// 0x0 matrix.
    pub fn empty() -> Matrix<T> {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }

    pub fn zeros(rows: usize, cols: usize) -> Matrix<T> {
        Matrix {
            rows,
            cols,
            data: vec![vec![T::zero(); cols]; rows],
        }
    }

    /// Builds a matrix from nested rows. The column count is taken from the
    /// first row and every other row must match it.
    pub fn from_data(data: Vec<Vec<T>>) -> Result<Matrix<T>> {
        let rows = data.len();
        let cols = data.first().map_or(0, Vec::len);
        if let Some((row, bad)) = data.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(MlpError::RaggedRows {
                row,
                expected: cols,
                actual: bad.len(),
            });
        }
        Ok(Matrix { rows, cols, data })
    }

    /// Interprets a flat sequence as an Nx1 column (`column == true`) or a
    /// 1xN row.
    pub fn from_vec(values: Vec<T>, column: bool) -> Matrix<T> {
        if column {
            Matrix {
                rows: values.len(),
                cols: 1,
                data: values.into_iter().map(|v| vec![v]).collect(),
            }
        } else {
            Matrix {
                rows: 1,
                cols: values.len(),
                data: vec![values],
            }
        }
    }

    pub fn column(values: Vec<T>) -> Matrix<T> {
        Matrix::from_vec(values, true)
    }

    pub fn row(values: Vec<T>) -> Matrix<T> {
        Matrix::from_vec(values, false)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn check_index(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(MlpError::Index {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    fn check_same_shape(&self, other: &Matrix<T>, op: &'static str) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(MlpError::dimension(op, self.shape(), other.shape()));
        }
        Ok(())
    }

    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.check_index(row, col)?;
        Ok(self.data[row][col])
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.check_index(row, col)?;
        self.data[row][col] = value;
        Ok(())
    }

    /// Elementwise sum.
    pub fn try_add(&self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        self.check_same_shape(rhs, "add")?;
        Ok(self.zip_with(rhs, |a, b| a + b))
    }

    /// Elementwise difference.
    pub fn try_sub(&self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        self.check_same_shape(rhs, "subtract")?;
        Ok(self.zip_with(rhs, |a, b| a - b))
    }

    /// Elementwise (Hadamard) product.
    pub fn hadamard(&self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        self.check_same_shape(rhs, "hadamard")?;
        Ok(self.zip_with(rhs, |a, b| a * b))
    }

    /// Standard matrix product; requires `self.cols == rhs.rows`.
    pub fn matmul(&self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        if self.cols != rhs.rows {
            return Err(MlpError::Dimension {
                op: "multiply",
                expected: format!("{} rows", self.cols),
                actual: format!("{} rows", rhs.rows),
            });
        }

        let mut res = Matrix::zeros(self.rows, rhs.cols);

        for i in 0..res.rows {
            for j in 0..res.cols {
                let mut sum = T::zero();

                for k in 0..self.cols {
                    sum += self.data[i][k] * rhs.data[k][j];
                }

                res.data[i][j] = sum;
            }
        }

        Ok(res)
    }

    pub fn scale(&self, scalar: T) -> Matrix<T> {
        self.map(|x| x * scalar)
    }

    pub fn map<F>(&self, functor: F) -> Matrix<T>
    where
        F: Fn(T) -> T,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect(),
        }
    }

    fn zip_with<F>(&self, rhs: &Matrix<T>, functor: F) -> Matrix<T>
    where
        F: Fn(T, T) -> T,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(rhs.data.iter())
                .map(|(a, b)| a.iter().zip(b.iter()).map(|(&x, &y)| functor(x, y)).collect())
                .collect(),
        }
    }

    /// Fills every entry with an independent uniform draw in `[min, max]`
    /// from a fresh thread-local generator.
    pub fn randomize_in_place(&mut self, min: f64, max: f64) {
        self.randomize_with(min, max, &mut rand::thread_rng());
    }

    /// Like `randomize_in_place`, drawing from the caller's generator.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, min: f64, max: f64, rng: &mut R) {
        for row in self.data.iter_mut() {
            for x in row.iter_mut() {
                *x = T::from_f64(rng.gen_range(min..=max));
            }
        }
    }

    /// Row-major flattened copy.
    pub fn to_vec(&self) -> Vec<T> {
        self.data.iter().flat_map(|row| row.iter().copied()).collect()
    }

    /// Sum of every entry multiplied by itself.
    pub fn sum_of_squares(&self) -> T {
        let mut total = T::zero();
        for x in self.data.iter().flatten() {
            total += *x * *x;
        }
        total
    }
}

impl<T: Scalar> Default for Matrix<T> {
    fn default() -> Self {
        Matrix::empty()
    }
}

impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

impl<T: Scalar> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

impl<T: Scalar + fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.data {
            for x in row {
                write!(f, "{} ", x)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
