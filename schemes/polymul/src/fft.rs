//! Complex floating-point FFT over the n-th roots of unity.
//!
//! The forward transform evaluates a polynomial, given by its coefficients,
//! at omega^0, omega^1, ..., omega^(n-1) where omega = exp(2*pi*i / n) and n is
//! a power of two. The inverse transform recovers the coefficients from
//! those n values.
//!
//! Both directions use the recursive radix-2 Cooley-Tukey decimation in time,
//! so outputs come back in natural order: `fft(c)[k]` is the value at omega^k.

use std::f64::consts::PI;

use num_traits::Zero;
use tracing::{instrument, trace};

use crate::complex::Complex;
use crate::error::{PolyError, Result};

/// Rounding-error allowance of the inverse transform, in units of
/// `log2(n) * f64::EPSILON * max|point|`.
///
/// A recovered real closer than [`snap_tolerance`] to an integer is snapped to
/// it; anything further away is returned as computed.
pub const SNAP_ULPS: f64 = 64.0;

/// Returns the primitive n-th root of unity exp(2*pi*i / n).
///
/// This is the root with the smallest positive argument. `n` must be
/// non-zero; callers only ever pass powers of two.
pub fn root_of_unity(n: usize) -> Complex {
    debug_assert!(n > 0, "root of unity order must be positive");
    Complex::exp_i(2.0 * PI / (n as f64))
}

// ============================================================================
// Complex transforms
// ============================================================================

/// Forward transform of a power-of-two length sequence of complex values.
///
/// Returns [`PolyError::InvalidLength`] if `values.len()` is not a non-zero
/// power of two.
pub fn fft_complex(values: &[Complex]) -> Result<Vec<Complex>> {
    check_length(values.len())?;
    Ok(transform(values, false))
}

/// Inverse transform of a power-of-two length sequence of point values.
///
/// Transforms with omega^(-1) and divides every output by n.
pub fn ifft_complex(points: &[Complex]) -> Result<Vec<Complex>> {
    check_length(points.len())?;
    let scale = 1.0 / (points.len() as f64);
    Ok(transform(points, true)
        .into_iter()
        .map(|c| c.scale(scale))
        .collect())
}

fn check_length(len: usize) -> Result<()> {
    if len.is_power_of_two() {
        Ok(())
    } else {
        Err(PolyError::InvalidLength { len })
    }
}

/// Recursive radix-2 butterfly.
///
/// Twiddles are powers of the root for the current level's size; the inverse
/// direction uses their conjugates, i.e. powers of omega^(-1).
fn transform(a: &[Complex], inverse: bool) -> Vec<Complex> {
    let n = a.len();
    if n == 1 {
        return vec![a[0]];
    }

    let even: Vec<Complex> = a.iter().step_by(2).copied().collect();
    let odd: Vec<Complex> = a.iter().skip(1).step_by(2).copied().collect();
    let even = transform(&even, inverse);
    let odd = transform(&odd, inverse);

    let half = n / 2;
    let step = 2.0 * PI / (n as f64);
    let mut out = vec![Complex::zero(); n];
    for k in 0..half {
        let w = Complex::exp_i(step * (k as f64));
        let w = if inverse { w.conj() } else { w };
        let t = w * odd[k];
        out[k] = even[k] + t;
        out[k + half] = even[k] - t;
    }
    out
}

// ============================================================================
// Real coefficient transforms
// ============================================================================

/// Evaluates the polynomial with coefficients `coeffs` at every n-th root of
/// unity, n being `coeffs.len()` rounded up to a power of two.
///
/// Shorter inputs are zero-padded, so three coefficients give four points and
/// ten coefficients give sixteen. An empty slice is rejected.
#[instrument(skip_all, fields(n = coeffs.len()), level = "debug")]
pub fn fft(coeffs: &[f64]) -> Result<Vec<Complex>> {
    if coeffs.is_empty() {
        return Err(PolyError::EMPTY_COEFFICIENTS);
    }

    let n = coeffs.len().next_power_of_two();
    if n != coeffs.len() {
        trace!(from = coeffs.len(), to = n, "zero-padding coefficients");
    }
    Ok(fft_padded(coeffs, n))
}

/// Forward transform of `coeffs` zero-padded to `n`.
///
/// `n` must be a power of two no smaller than `coeffs.len()`.
pub(crate) fn fft_padded(coeffs: &[f64], n: usize) -> Vec<Complex> {
    debug_assert!(n.is_power_of_two() && n >= coeffs.len());
    transform(&lift(coeffs, n), false)
}

fn lift(coeffs: &[f64], n: usize) -> Vec<Complex> {
    let mut values: Vec<Complex> = coeffs.iter().map(|&c| Complex::from_real(c)).collect();
    values.resize(n, Complex::zero());
    values
}

/// Recovers n real coefficients from n point values at the n-th roots of
/// unity.
///
/// Imaginary parts are dropped without being checked, and reals within
/// [`snap_tolerance`] of an integer are snapped to it. The result keeps any
/// padding zeros: it always has exactly `points.len()` entries.
#[instrument(skip_all, fields(n = points.len()), level = "debug")]
pub fn ifft(points: &[Complex]) -> Result<Vec<f64>> {
    let coeffs = ifft_complex(points)?;
    let tol = snap_tolerance(points);
    Ok(coeffs.into_iter().map(|c| snap_integral(c.re, tol)).collect())
}

/// Bound on the rounding error of inverting `points`.
///
/// Grows with the transform depth and the largest point magnitude, so it
/// stays far below the spacing of any value the coefficients can actually
/// resolve.
pub fn snap_tolerance(points: &[Complex]) -> f64 {
    let log_n = points.len().max(2).trailing_zeros() as f64;
    let magnitude = points.iter().map(|p| p.norm()).fold(0.0, f64::max);
    SNAP_ULPS * log_n * f64::EPSILON * magnitude
}

/// Snaps `x` to the nearest integer if it lies within `tol` of it.
///
/// Negative zero becomes positive zero.
pub fn snap_integral(x: f64, tol: f64) -> f64 {
    let nearest = x.round();
    if (x - nearest).abs() <= tol {
        nearest + 0.0
    } else {
        x
    }
}

/// Multiplies two real coefficient sequences through the transform.
///
/// Both operands are padded to the smallest power of two that holds the full
/// product, so the cyclic convolution computed pointwise equals the ordinary
/// one. The result has `a.len() + b.len() - 1` entries.
#[instrument(skip_all, fields(lhs = a.len(), rhs = b.len()), level = "debug")]
pub fn multiply_fft(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    if a.is_empty() || b.is_empty() {
        return Err(PolyError::EMPTY_COEFFICIENTS);
    }
    Ok(convolve(a, b))
}

/// Full product of two non-empty coefficient sequences.
pub(crate) fn convolve(a: &[f64], b: &[f64]) -> Vec<f64> {
    let result_len = a.len() + b.len() - 1;
    let n = result_len.next_power_of_two();

    let a_fft = fft_padded(a, n);
    let b_fft = fft_padded(b, n);
    let c_fft: Vec<Complex> = a_fft
        .iter()
        .zip(b_fft.iter())
        .map(|(&x, &y)| x * y)
        .collect();

    let scale = 1.0 / (n as f64);
    let tol = snap_tolerance(&c_fft);
    transform(&c_fft, true)
        .into_iter()
        .take(result_len)
        .map(|c| snap_integral(c.re * scale, tol))
        .collect()
}
