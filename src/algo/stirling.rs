//! Stirling asymptotic series for ln Γ(z) and ψ(z) at large |z|.
//!
//! Used for |z| beyond the Lanczos region, where the correction terms
//! B₂ₖ / (2k(2k−1) z^(2k−1)) fall below machine precision well before
//! the Bernoulli table runs out.

use num_complex::Complex;

use crate::algo::constants::{BERNOULLI, LN_SQRT_2PI};
use crate::machine::CoulombFloat;

/// Compute ln Γ(z) by Stirling's series.
///
/// ln Γ(z) = (z − ½) ln z − z + ln √(2π) + Σₖ B₂ₖ / (2k(2k−1) z^(2k−1))
///
/// Accurate to full precision for |z| ≳ 10 away from the negative real
/// axis. The principal logarithm keeps Im ln Γ continuous in Re z > 0.
pub(crate) fn ln_gamma<T: CoulombFloat>(z: Complex<T>) -> Complex<T> {
    let half = T::from_f64(0.5);
    let mut f = (z - half) * z.ln() - z + T::from_f64(LN_SQRT_2PI);

    let zsq = z * z;
    let mut zp = z;
    for (k, b) in BERNOULLI.iter().enumerate().skip(1) {
        let k2 = T::from_f64((2 * k) as f64);
        let df = zp.inv() * (T::from_f64(*b) / (k2 * (k2 - T::one())));
        if df.norm() <= T::MACH_EPSILON * f.norm() {
            break;
        }
        f = f + df;
        zp = zp * zsq;
    }
    f
}

/// Compute ψ(z) = d/dz ln Γ(z) by Stirling's series.
///
/// ψ(z) = ln z − 1/(2z) − Σₖ B₂ₖ / (2k z^(2k))
pub(crate) fn psi<T: CoulombFloat>(z: Complex<T>) -> Complex<T> {
    let half = T::from_f64(0.5);
    let mut f = z.ln() - (z * T::from_f64(2.0)).inv();

    let zsq = z * z;
    let mut zp = zsq;
    for (k, b) in BERNOULLI.iter().enumerate().skip(1) {
        let df = zp.inv() * (T::from_f64(*b) * half / T::from_f64(k as f64));
        if df.norm() <= T::MACH_EPSILON * f.norm() {
            break;
        }
        f = f - df;
        zp = zp * zsq;
    }
    f
}
