//! # polymul
//!
//! Polynomials over f64 with two multiplication algorithms: direct
//! convolution and multiplication through the complex Fast Fourier
//! Transform.
//!
//! ## Overview
//!
//! A [`Polynomial`] stores its coefficients lowest degree first and is
//! immutable once built. Besides multiplication it can be evaluated at any
//! complex point, which serves as the reference the transforms are checked
//! against.
//!
//! The [`fft`] module evaluates a coefficient sequence at the n-th roots of
//! unity (n a power of two, shorter inputs are zero-padded) and interpolates
//! back. Outputs are in natural order: entry k is the value at omega^k with
//! omega = exp(2*pi*i / n).
//!
//! ```
//! use polymul::Polynomial;
//!
//! let p = Polynomial::new(vec![3.0, 1.0, 2.0])?;
//! let q = Polynomial::new(vec![2.0, 1.0, 4.0])?;
//! assert_eq!(p.to_string(), "2x^2 + x + 3");
//! assert_eq!(p.multiply(&q).coefficients(), &[6.0, 5.0, 17.0, 6.0, 8.0]);
//! assert_eq!(p.multiply_fft(&q), p.multiply(&q));
//! # Ok::<(), polymul::PolyError>(())
//! ```
//!
//! ## Numerics
//!
//! Everything is plain IEEE 754 double precision. The inverse transform drops
//! imaginary parts and snaps a value to the nearest integer only when it is
//! within [`fft::snap_tolerance`] of it, a window proportional to
//! `log2(n) * f64::EPSILON * max|point|`. Integral inputs therefore
//! round-trip exactly while non-integral values are returned as computed.
//!
//! [`Polynomial::multiply_fft`] equals [`Polynomial::multiply`] exactly on
//! integral operands only while that window stays below 0.5, roughly while
//! `(sum |a_i|) * (sum |b_j|) * log2(n)` is under 1e13. Beyond that, and for
//! fractional operands, the two agree to within rounding error.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod complex;
pub mod error;
pub mod fft;
pub mod poly;

// Re-export main types for convenience
pub use complex::Complex;
pub use error::{PolyError, Result};
pub use fft::{fft, ifft, multiply_fft, root_of_unity};
pub use poly::Polynomial;
