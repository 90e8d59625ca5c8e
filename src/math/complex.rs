use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use num_traits::{Float, One, Zero};
use serde::{Deserialize, Serialize};

use crate::math::scalar::Scalar;

/// A complex number `re + im·i`.
///
/// Supports the ring operations the training loop needs plus scaling by a
/// bare real. There is no division.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Complex<T> {
    pub re: T,
    pub im: T,
}

impl<T: Float> Complex<T> {
    pub fn new(re: T, im: T) -> Complex<T> {
        Complex { re, im }
    }

    pub fn re(&self) -> T {
        self.re
    }

    pub fn im(&self) -> T {
        self.im
    }

    /// `sqrt(re² + im²)`
    pub fn magnitude(&self) -> T {
        (self.re * self.re + self.im * self.im).sqrt()
    }
}

impl<T: Float> Add for Complex<T> {
    type Output = Complex<T>;

    fn add(self, rhs: Self) -> Self::Output {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl<T: Float> Sub for Complex<T> {
    type Output = Complex<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        Complex::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl<T: Float> Mul for Complex<T> {
    type Output = Complex<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        Complex::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl<T: Float> Mul<T> for Complex<T> {
    type Output = Complex<T>;

    fn mul(self, rhs: T) -> Self::Output {
        Complex::new(self.re * rhs, self.im * rhs)
    }
}

impl<T: Float> AddAssign for Complex<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Float> SubAssign for Complex<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Float> Zero for Complex<T> {
    fn zero() -> Self {
        Complex::new(T::zero(), T::zero())
    }

    fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }
}

impl<T: Float> One for Complex<T> {
    fn one() -> Self {
        Complex::new(T::one(), T::zero())
    }
}

impl<T: Float + fmt::Display> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.re)?;
        if self.im >= T::zero() {
            write!(f, "+")?;
        }
        write!(f, "{}i", self.im)
    }
}

impl<T: Float + Default + fmt::Debug + 'static> Scalar for Complex<T> {
    fn from_f64(value: f64) -> Self {
        Complex::new(T::from(value).unwrap_or_else(T::nan), T::zero())
    }

    fn real(self) -> f64 {
        self.re.to_f64().unwrap_or(f64::NAN)
    }

    fn magnitude(self) -> f64 {
        Complex::magnitude(&self).to_f64().unwrap_or(f64::NAN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_shows_sign_of_imaginary_part() {
        assert_eq!(Complex::new(1.5, 2.0).to_string(), "1.5+2i");
        assert_eq!(Complex::new(1.0, -3.0).to_string(), "1-3i");
        assert_eq!(Complex::new(0.0, 0.0).to_string(), "0+0i");
    }

    #[test]
    fn scalar_lift_has_zero_imaginary_part() {
        let c = <Complex<f64> as Scalar>::from_f64(0.25);
        assert_eq!(c, Complex::new(0.25, 0.0));
        assert_eq!(c.real(), 0.25);
    }
}
