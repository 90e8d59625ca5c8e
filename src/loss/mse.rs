use crate::error::Result;
use crate::math::{matrix::Matrix, scalar::Scalar};

pub struct MseLoss;

impl MseLoss {
    /// Squared error of one sample, summed over its output units.
    pub fn sum_squared<T: Scalar>(predicted: &Matrix<T>, expected: &Matrix<T>) -> Result<T> {
        Ok(predicted.try_sub(expected)?.sum_of_squares())
    }

    /// Summed squared error divided by the sample count.
    pub fn mean<T: Scalar>(total: T, samples: usize) -> T {
        total * T::from_f64(1.0 / samples as f64)
    }

    /// ∂L/∂a for the output layer: `2·(predicted - expected)`.
    pub fn derivative<T: Scalar>(error: &Matrix<T>) -> Matrix<T> {
        error.scale(T::from_f64(2.0))
    }
}
