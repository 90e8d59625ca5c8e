pub mod complex;
pub mod matrix;
pub mod scalar;

pub use complex::Complex;
pub use matrix::Matrix;
pub use scalar::Scalar;
