//! Gamma-family special functions upper interface.
//!
//! Validates arguments, applies reflection for the left half-plane and
//! selects between the Lanczos approximation and Stirling's series.

use num_complex::Complex;

use crate::algo::constants::{LN_PI, PI};
use crate::algo::{lanczos, stirling};
use crate::machine::CoulombFloat;
use crate::types::Error;
use crate::utils::{cospi, ln_sin_pi_upper, pi_cot_pi, sinpi};

/// |z| beyond which Stirling's series replaces the Lanczos sum.
const STIRLING_MIN: f64 = 15.0;

/// Largest x for which Γ(x) is finite in f64.
const GAMMA_MAX: f64 = 171.624;

/// Largest integer n for which (n−1)! is computed by direct product.
const FACTORIAL_MAX: i32 = 171;

/// Re z below which ln Γ(z) reflects instead of shifting right.
const SHIFT_MAX: f64 = 16.0;

#[inline]
fn is_pole<T: CoulombFloat>(x: T) -> bool {
    x <= T::zero() && x == x.floor()
}

/// Γ(x) for real x.
///
/// Positive integers are computed as an exact factorial product, so
/// Γ(n) is exact whenever (n−1)! is representable (n ≤ 23).
///
/// # Errors
/// - [`Error::InvalidInput`] at the poles x = 0, −1, −2, … and for NaN.
/// - [`Error::Overflow`] when Γ(x) exceeds the floating-point range.
///   Large negative x, where Γ(x) underflows, returns zero instead.
pub fn gamma<T: CoulombFloat>(x: T) -> Result<T, Error> {
    if x.is_nan() || is_pole(x) {
        return Err(Error::InvalidInput);
    }
    let half = T::from_f64(0.5);
    if x < half {
        // Γ(x) Γ(1−x) = π / sin(πx)
        return match gamma(T::one() - x) {
            Ok(g) => Ok(T::from_f64(PI) / (sinpi(x) * g)),
            Err(Error::Overflow) => Ok(T::zero()),
            Err(e) => Err(e),
        };
    }
    if x > T::from_f64(GAMMA_MAX) {
        return Err(Error::Overflow);
    }
    if x == x.floor() {
        // 1 <= x <= GAMMA_MAX here
        let n = x.to_i32().unwrap_or(FACTORIAL_MAX);
        if n <= FACTORIAL_MAX {
            let mut product = T::one();
            for k in 2..n {
                product = product * T::from_f64(k as f64);
            }
            if product.is_infinite() {
                return Err(Error::Overflow);
            }
            return Ok(product);
        }
    }
    let val = lanczos::gamma(x);
    if val.is_infinite() {
        return Err(Error::Overflow);
    }
    Ok(val)
}

/// ln |Γ(x)| for real x.
pub fn ln_gamma<T: CoulombFloat>(x: T) -> Result<T, Error> {
    if x.is_nan() || is_pole(x) {
        return Err(Error::InvalidInput);
    }
    if x > T::zero() {
        return Ok(lanczos::ln_gamma(x));
    }
    // ln|Γ(x)| = ln π − ln|sin(πx)| − ln Γ(1−x)
    Ok(T::from_f64(PI).ln() - sinpi(x).abs().ln() - lanczos::ln_gamma(T::one() - x))
}

/// ln Γ(z) for complex z, continuous along paths avoiding the poles.
///
/// For moderate Re z < 0 the argument is shifted right with
/// ln Γ(z) = ln Γ(z+n) − Σₖ ln(z+k); summing principal logarithms keeps
/// the imaginary part on the branch continuous from the positive real axis.
/// Further left the reflection ln Γ(z) = ln π − ln sin(πz) − ln Γ(1−z) is
/// used with ln sin(πz) taken on the same branch, so the cost does not
/// grow with |Re z|.
pub fn ln_gamma_complex<T: CoulombFloat>(z: Complex<T>) -> Result<Complex<T>, Error> {
    if z.re.is_nan() || z.im.is_nan() || (z.im == T::zero() && is_pole(z.re)) {
        return Err(Error::InvalidInput);
    }
    if z.re < -T::from_f64(SHIFT_MAX) {
        if z.im < T::zero() {
            return Ok(ln_gamma_complex(z.conj())?.conj());
        }
        let reflected = ln_gamma_complex(Complex::from(T::one()) - z)?;
        return Ok(Complex::from(T::from_f64(LN_PI)) - ln_sin_pi_upper(z) - reflected);
    }
    if z.re < T::zero() {
        let shift = (-z.re).floor() + T::one();
        let n = shift.to_i32().unwrap_or(0);
        let mut correction = Complex::from(T::zero());
        for k in 0..n {
            correction = correction + (z + T::from_f64(k as f64)).ln();
        }
        return Ok(ln_gamma_complex(z + shift)? - correction);
    }
    if z.norm() > T::from_f64(STIRLING_MIN) {
        Ok(stirling::ln_gamma(z))
    } else {
        Ok(lanczos::ln_gamma_complex(z))
    }
}

/// ψ(x) = d/dx ln Γ(x) for real x.
pub fn digamma<T: CoulombFloat>(x: T) -> Result<T, Error> {
    if x.is_nan() || is_pole(x) {
        return Err(Error::InvalidInput);
    }
    let half = T::from_f64(0.5);
    if x < half {
        // ψ(1−x) − ψ(x) = π cot(πx)
        let psi = digamma(T::one() - x)?;
        return Ok(psi - T::from_f64(PI) * cospi(x) / sinpi(x));
    }
    if x > T::from_f64(STIRLING_MIN) {
        Ok(stirling::psi(Complex::from(x)).re)
    } else {
        Ok(lanczos::psi(x))
    }
}

/// ψ(z) for complex z.
///
/// Left of Re z = ½ the reflection ψ(z) = ψ(1−z) − π cot(πz) is used, with
/// the cotangent evaluated in a form that stays finite for large |Im z|.
pub fn digamma_complex<T: CoulombFloat>(z: Complex<T>) -> Result<Complex<T>, Error> {
    if z.re.is_nan() || z.im.is_nan() || (z.im == T::zero() && is_pole(z.re)) {
        return Err(Error::InvalidInput);
    }
    if z.re >= T::zero() && z.norm() > T::from_f64(STIRLING_MIN) {
        return Ok(stirling::psi(z));
    }
    if z.re < T::from_f64(0.5) {
        let psi = digamma_complex(Complex::from(T::one()) - z)?;
        return Ok(psi - pi_cot_pi(z));
    }
    Ok(lanczos::psi_complex(z))
}

/// B(x, y) = Γ(x)Γ(y)/Γ(x+y) for x, y > 0.
pub fn beta<T: CoulombFloat>(x: T, y: T) -> Result<T, Error> {
    if !(x > T::zero() && y > T::zero()) {
        return Err(Error::InvalidInput);
    }
    Ok(lanczos::beta(x, y))
}

/// ln B(x, y) for x, y > 0.
pub fn ln_beta<T: CoulombFloat>(x: T, y: T) -> Result<T, Error> {
    if !(x > T::zero() && y > T::zero()) {
        return Err(Error::InvalidInput);
    }
    Ok(lanczos::ln_beta(x, y))
}
