use crate::math::{matrix::Matrix, scalar::Scalar};

/// Inputs to `exp` are clamped to this range so very negative
/// pre-activations saturate to 0 instead of overflowing.
const EXP_CLAMP: f64 = 500.0;

/// Logistic activation `1 / (1 + e^-x)`, the only activation the network uses.
pub struct Sigmoid;

impl Sigmoid {
    /// Element-wise logistic function on the real projection of `x`.
    pub fn function<T: Scalar>(x: T) -> T {
        let z = x.real().clamp(-EXP_CLAMP, EXP_CLAMP);
        T::from_f64(1.0 / (1.0 + (-z).exp()))
    }

    /// Derivative expressed through the already-computed output `s = σ(x)`:
    /// `σ'(x) = s·(1 - s)`.
    pub fn derivative<T: Scalar>(s: T) -> T {
        s * (T::one() - s)
    }

    pub fn apply<T: Scalar>(m: &Matrix<T>) -> Matrix<T> {
        m.map(Sigmoid::function)
    }

    /// Derivative matrix from a matrix of sigmoid outputs.
    pub fn derivative_of_output<T: Scalar>(s: &Matrix<T>) -> Matrix<T> {
        s.map(Sigmoid::derivative)
    }
}
