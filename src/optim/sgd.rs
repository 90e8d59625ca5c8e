use crate::error::Result;
use crate::math::{matrix::Matrix, scalar::Scalar};

/// Plain gradient descent: no momentum, fixed learning rate.
pub struct Sgd<T: Scalar> {
    pub learning_rate: T,
}

impl<T: Scalar> Sgd<T> {
    pub fn new(learning_rate: T) -> Sgd<T> {
        Sgd { learning_rate }
    }

    /// Applies `param -= lr * grad / samples` to one parameter matrix.
    pub fn step(&self, param: &mut Matrix<T>, grad: &Matrix<T>, samples: usize) -> Result<()> {
        let inv = T::from_f64(1.0 / samples as f64);
        *param = param.try_sub(&grad.scale(inv).scale(self.learning_rate))?;
        Ok(())
    }
}
