//! Polynomials with real coefficients.
//!
//! A [`Polynomial`] is immutable once built. Coefficients are stored lowest
//! degree first and trailing zeros are stripped at construction, so the last
//! stored coefficient is non-zero unless the polynomial is the zero
//! polynomial, which is stored as `[0]`.

use std::fmt;
use std::ops::Mul;

use crate::complex::Complex;
use crate::error::{PolyError, Result};
use crate::fft;

/// A univariate polynomial over f64.
///
/// Coefficients are stored in standard order: `coefficients()[i]` is the
/// coefficient of x^i.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    /// Creates a polynomial from its coefficients, lowest degree first.
    ///
    /// Trailing zero coefficients are dropped. Fails with
    /// [`PolyError::InvalidInput`] if `coeffs` is empty.
    pub fn new(coeffs: impl Into<Vec<f64>>) -> Result<Self> {
        let coeffs = coeffs.into();
        if coeffs.is_empty() {
            return Err(PolyError::EMPTY_COEFFICIENTS);
        }
        Ok(Self::from_normalized(coeffs))
    }

    /// The zero polynomial.
    pub fn zero() -> Self {
        Polynomial { coeffs: vec![0.0] }
    }

    /// A constant polynomial.
    pub fn constant(c: f64) -> Self {
        Polynomial { coeffs: vec![c] }
    }

    /// Strips trailing zeros, keeping at least one coefficient.
    fn from_normalized(mut coeffs: Vec<f64>) -> Self {
        debug_assert!(!coeffs.is_empty());
        while coeffs.len() > 1 && coeffs[coeffs.len() - 1] == 0.0 {
            coeffs.pop();
        }
        Polynomial { coeffs }
    }

    /// Returns the coefficients, lowest degree first.
    #[inline]
    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }

    /// Returns the degree. The zero polynomial has degree 0.
    #[inline]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns true if all coefficients are zero.
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|&c| c == 0.0)
    }

    /// Returns the coefficient of the highest-degree term.
    pub fn leading_coefficient(&self) -> f64 {
        self.coeffs[self.coeffs.len() - 1]
    }

    /// Multiplies by direct convolution in O(n*m).
    pub fn multiply(&self, other: &Polynomial) -> Polynomial {
        let mut out = vec![0.0; self.coeffs.len() + other.coeffs.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            for (j, &b) in other.coeffs.iter().enumerate() {
                out[i + j] += a * b;
            }
        }
        Self::from_normalized(out)
    }

    /// Multiplies through the FFT in O(n log n).
    ///
    /// On integral operands this agrees exactly with
    /// [`multiply`](Self::multiply) only while the transform's rounding error
    /// stays below [`fft::snap_tolerance`] and that window stays below 0.5,
    /// roughly while `(sum |a_i|) * (sum |b_j|) * log2(n)` is under 1e13.
    /// Larger operands, and fractional ones, agree to within rounding error.
    pub fn multiply_fft(&self, other: &Polynomial) -> Polynomial {
        Self::from_normalized(fft::convolve(&self.coeffs, &other.coeffs))
    }

    /// Evaluates at `x` by Horner's rule.
    pub fn evaluate_at(&self, x: impl Into<Complex>) -> Complex {
        let x = x.into();
        self.coeffs
            .iter()
            .rev()
            .fold(Complex::ZERO, |acc, &c| acc * x + Complex::from_real(c))
    }

    /// Evaluates at every n-th root of unity, n being the coefficient count
    /// rounded up to a power of two.
    pub fn to_points(&self) -> Vec<Complex> {
        fft::fft_padded(&self.coeffs, self.coeffs.len().next_power_of_two())
    }

    /// Interpolates the polynomial whose values at the n-th roots of unity
    /// are `points`.
    pub fn from_points(points: &[Complex]) -> Result<Self> {
        Ok(Self::from_normalized(fft::ifft(points)?))
    }

    /// Returns the primitive n-th root of unity exp(2*pi*i / n).
    pub fn calculate_root_of_unity(n: usize) -> Complex {
        fft::root_of_unity(n)
    }

    /// Forward transform of an arbitrary coefficient sequence.
    ///
    /// See [`fft::fft`].
    pub fn fast_fourier_transform(coeffs: &[f64]) -> Result<Vec<Complex>> {
        fft::fft(coeffs)
    }

    /// Inverse transform of a power-of-two length point sequence.
    ///
    /// See [`fft::ifft`].
    pub fn inverse_fast_fourier_transform(points: &[Complex]) -> Result<Vec<f64>> {
        fft::ifft(points)
    }
}

impl Default for Polynomial {
    fn default() -> Self {
        Polynomial::zero()
    }
}

impl TryFrom<Vec<f64>> for Polynomial {
    type Error = PolyError;

    fn try_from(coeffs: Vec<f64>) -> Result<Self> {
        Polynomial::new(coeffs)
    }
}

impl<'a> TryFrom<&'a [f64]> for Polynomial {
    type Error = PolyError;

    fn try_from(coeffs: &'a [f64]) -> Result<Self> {
        Polynomial::new(coeffs)
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Self) -> Polynomial {
        self.multiply(rhs)
    }
}

// ============================================================================
// Formatting
// ============================================================================

/// Writes a coefficient, dropping the fractional part when it is zero.
fn write_coefficient(f: &mut fmt::Formatter<'_>, c: f64) -> fmt::Result {
    if c.fract() == 0.0 {
        write!(f, "{:.0}", c)
    } else {
        write!(f, "{}", c)
    }
}

/// Writes `c * x^degree` with unit coefficients elided on non-constant terms.
fn write_term(f: &mut fmt::Formatter<'_>, c: f64, degree: usize) -> fmt::Result {
    if degree == 0 {
        return write_coefficient(f, c);
    }
    if c == -1.0 {
        f.write_str("-")?;
    } else if c != 1.0 {
        write_coefficient(f, c)?;
    }
    match degree {
        1 => f.write_str("x"),
        _ => write!(f, "x^{}", degree),
    }
}

impl fmt::Display for Polynomial {
    /// Highest degree first, zero terms omitted, e.g. `2x^2 + x - 3`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (degree, &c) in self.coeffs.iter().enumerate().rev() {
            if c == 0.0 {
                continue;
            }
            if first {
                write_term(f, c, degree)?;
                first = false;
            } else if c < 0.0 {
                f.write_str(" - ")?;
                write_term(f, -c, degree)?;
            } else {
                f.write_str(" + ")?;
                write_term(f, c, degree)?;
            }
        }
        if first {
            f.write_str("0")?;
        }
        Ok(())
    }
}
