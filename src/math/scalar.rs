use std::fmt::Debug;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use num_traits::{One, Zero};

/// Element type a `Matrix` (and therefore a `Network`) can be built over.
///
/// The sigmoid and the classification threshold work on a real projection
/// of the value (`real()`); error tolerances compare `magnitude()`.
pub trait Scalar:
    Copy
    + Debug
    + PartialEq
    + Default
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + AddAssign
    + SubAssign
    + 'static
{
    /// Lifts a real number into the scalar type.
    fn from_f64(value: f64) -> Self;

    /// Real projection of the value.
    fn real(self) -> f64;

    /// Absolute value for reals, modulus for complex numbers.
    fn magnitude(self) -> f64;
}

impl Scalar for f64 {
    fn from_f64(value: f64) -> Self {
        value
    }

    fn real(self) -> f64 {
        self
    }

    fn magnitude(self) -> f64 {
        self.abs()
    }
}

impl Scalar for f32 {
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    fn real(self) -> f64 {
        self as f64
    }

    fn magnitude(self) -> f64 {
        self.abs() as f64
    }
}
