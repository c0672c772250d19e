//! Complex numbers with f64 components.
//!
//! Only the arithmetic the transforms and the point evaluator need is
//! provided: ring operations, conjugation, scaling by a real and raising to
//! a non-negative integer power.

use std::fmt;
use std::ops::{Add, Mul, MulAssign, Neg, Sub};

use num_traits::{One, Zero};

/// A complex number with f64 components.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Complex {
    /// Real part.
    pub re: f64,
    /// Imaginary part.
    pub im: f64,
}

impl Complex {
    /// Zero complex number.
    pub const ZERO: Complex = Complex { re: 0.0, im: 0.0 };

    /// One (real unit).
    pub const ONE: Complex = Complex { re: 1.0, im: 0.0 };

    /// Imaginary unit i.
    pub const I: Complex = Complex { re: 0.0, im: 1.0 };

    /// Creates a new complex number.
    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Complex { re, im }
    }

    /// Creates a complex number from a real value.
    #[inline]
    pub const fn from_real(re: f64) -> Self {
        Complex { re, im: 0.0 }
    }

    /// Computes e^(i * theta) = cos(theta) + i*sin(theta).
    #[inline]
    pub fn exp_i(theta: f64) -> Self {
        Complex {
            re: theta.cos(),
            im: theta.sin(),
        }
    }

    /// Returns the complex conjugate.
    #[inline]
    pub fn conj(self) -> Self {
        Complex {
            re: self.re,
            im: -self.im,
        }
    }

    /// Returns the squared magnitude |z|^2 = re^2 + im^2.
    #[inline]
    pub fn norm_sq(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Returns the magnitude |z|.
    #[inline]
    pub fn norm(self) -> f64 {
        self.norm_sq().sqrt()
    }

    /// Scales by a real number.
    #[inline]
    pub fn scale(self, s: f64) -> Self {
        Complex {
            re: self.re * s,
            im: self.im * s,
        }
    }

    /// Raises to a non-negative integer power by square-and-multiply.
    ///
    /// `z.pow(0)` is one for every `z`, including zero.
    pub fn pow(self, mut exp: u32) -> Self {
        let mut base = self;
        let mut acc = Complex::ONE;
        while exp > 0 {
            if exp & 1 == 1 {
                acc *= base;
            }
            base *= base;
            exp >>= 1;
        }
        acc
    }

    /// Returns true if both components differ from `other` by at most `tol`.
    #[inline]
    pub fn approx_eq(self, other: Complex, tol: f64) -> bool {
        (self.re - other.re).abs() <= tol && (self.im - other.im).abs() <= tol
    }
}

impl Add for Complex {
    type Output = Complex;

    #[inline]
    fn add(self, rhs: Complex) -> Complex {
        Complex {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl Sub for Complex {
    type Output = Complex;

    #[inline]
    fn sub(self, rhs: Complex) -> Complex {
        Complex {
            re: self.re - rhs.re,
            im: self.im - rhs.im,
        }
    }
}

impl Mul for Complex {
    type Output = Complex;

    #[inline]
    fn mul(self, rhs: Complex) -> Complex {
        Complex {
            re: self.re * rhs.re - self.im * rhs.im,
            im: self.re * rhs.im + self.im * rhs.re,
        }
    }
}

impl MulAssign for Complex {
    #[inline]
    fn mul_assign(&mut self, rhs: Complex) {
        *self = *self * rhs;
    }
}

impl Neg for Complex {
    type Output = Complex;

    #[inline]
    fn neg(self) -> Complex {
        Complex {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl From<f64> for Complex {
    #[inline]
    fn from(re: f64) -> Self {
        Complex::from_real(re)
    }
}

impl Zero for Complex {
    #[inline]
    fn zero() -> Self {
        Complex::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
}

impl One for Complex {
    #[inline]
    fn one() -> Self {
        Complex::ONE
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im.is_sign_negative() {
            write!(f, "{}-{}i", self.re, -self.im)
        } else {
            write!(f, "{}+{}i", self.re, self.im)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_complex_add_sub() {
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(3.0, 4.0);
        assert_eq!(a + b, Complex::new(4.0, 6.0));
        assert_eq!(b - a, Complex::new(2.0, 2.0));
    }

    #[test]
    fn test_complex_mul() {
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(3.0, 4.0);
        // (1+2i)(3+4i) = 3 + 4i + 6i + 8i^2 = -5 + 10i
        assert_eq!(a * b, Complex::new(-5.0, 10.0));

        let mut c = a;
        c *= b;
        assert_eq!(c, a * b);
    }

    #[test]
    fn test_complex_conj_and_norm() {
        let a = Complex::new(3.0, 4.0);
        assert_eq!(a.conj(), Complex::new(3.0, -4.0));
        assert_eq!(a.norm_sq(), 25.0);
        assert_eq!(a.norm(), 5.0);
    }

    #[test]
    fn test_complex_exp_i() {
        assert!(Complex::exp_i(0.0).approx_eq(Complex::ONE, EPSILON));
        assert!(Complex::exp_i(PI / 2.0).approx_eq(Complex::I, EPSILON));
        assert!(Complex::exp_i(PI).approx_eq(-Complex::ONE, EPSILON));
    }

    #[test]
    fn test_complex_pow() {
        let z = Complex::new(1.0, 1.0);
        assert_eq!(z.pow(0), Complex::ONE);
        assert_eq!(Complex::ZERO.pow(0), Complex::ONE);
        assert_eq!(z.pow(1), z);
        // (1+i)^2 = 2i, (1+i)^4 = -4
        assert_eq!(z.pow(2), Complex::new(0.0, 2.0));
        assert_eq!(z.pow(4), Complex::new(-4.0, 0.0));
        assert!(Complex::I.pow(7).approx_eq(-Complex::I, EPSILON));
    }

    #[test]
    fn test_complex_zero_one() {
        assert!(Complex::zero().is_zero());
        assert!(!Complex::I.is_zero());
        assert_eq!(Complex::one(), Complex::ONE);
    }

    #[test]
    fn test_complex_display() {
        assert_eq!(Complex::new(3.0, 4.0).to_string(), "3+4i");
        assert_eq!(Complex::new(3.0, -4.5).to_string(), "3-4.5i");
    }
}
