//! Continued fractions for the logarithmic derivatives (Barnett's CF1, CF2).
//!
//! Both fractions are evaluated forward with the modified Lentz
//! algorithm. Zero denominators are replaced by a tiny number so the
//! recurrence never divides by zero.

use num_complex::Complex;

use crate::algo::constants::SERIES_MAX;
use crate::machine::CoulombFloat;
use crate::types::Error;

/// Upper bound on the ρ-dependent part of the CF1 term budget.
const CF1_RHO_TERMS_MAX: f64 = 1_048_576.0;

#[inline]
fn tiny<T: CoulombFloat>() -> T {
    T::MACH_TINY.sqrt()
}

/// CF1: f = F′_L/F_L and the sign of F_L.
///
/// ```text
/// f = S_{L+1} − R²_{L+1} / (T_{L+1} − R²_{L+2} / (T_{L+2} − …))
/// S_k = k/ρ + η/k,  R²_k = 1 + η²/k²,  T_k = (2k+1)(1/ρ + η/(k(k+1)))
/// ```
///
/// The fraction converges once k exceeds roughly ρ, so the term budget is
/// `SERIES_MAX + 2ρ`. The sign of F_L is the product of the signs of the
/// Lentz denominators.
pub(crate) fn cf1<T: CoulombFloat>(l: u32, eta: T, rho: T, tol: T) -> Result<(T, T), Error> {
    let one = T::one();
    let tiny = tiny::<T>();

    let mut k = T::from_f64(l as f64 + 1.0);
    let mut f = k / rho + eta / k;
    if f == T::zero() {
        f = tiny;
    }
    let mut c = f;
    let mut d = T::zero();
    let mut sign = one;

    let rho_terms = (T::from_f64(2.0) * rho)
        .min(T::from_f64(CF1_RHO_TERMS_MAX))
        .to_usize()
        .unwrap_or(0);
    for _ in 0..SERIES_MAX + rho_terms {
        let ek = eta / k;
        let a = -(one + ek * ek);
        let b = (k + k + one) * (one / rho + ek / (k + one));
        d = b + a * d;
        if d == T::zero() {
            d = tiny;
        }
        c = b + a / c;
        if c == T::zero() {
            c = tiny;
        }
        d = d.recip();
        if d < T::zero() {
            sign = -sign;
        }
        let delta = c * d;
        f = f * delta;
        k = k + one;
        if (delta - one).abs() < tol {
            return Ok((f, sign));
        }
    }
    Err(Error::ConvergenceFailure)
}

/// CF2: p + iq = (G′_L + iF′_L)/(G_L + iF_L).
///
/// ```text
/// p + iq = i(1 − η/ρ) + (i/ρ) · a₁/(b₁ + a₂/(b₂ + …))
/// a₁ = (iη − L)(iη + L + 1),  a_{k+1} = a_k + 2k + 2iη,  b_k = 2(ρ − η + ik)
/// ```
///
/// Converges rapidly above the turning point and slowly or not at all
/// deep inside the barrier.
pub(crate) fn cf2<T: CoulombFloat>(l: u32, eta: T, rho: T, tol: T) -> Result<Complex<T>, Error> {
    let zero = T::zero();
    let one = T::one();
    let two = T::from_f64(2.0);
    let tiny = Complex::from(tiny::<T>());
    let czero = Complex::new(zero, zero);

    let ll = T::from_f64(l as f64 * (l as f64 + 1.0));
    let mut a = Complex::new(-(eta * eta + ll), eta);
    let mut b = Complex::new(two * (rho - eta), two);
    let a_step_im = two * eta;
    let b_step = Complex::new(zero, two);

    let mut f = tiny;
    let mut c = f;
    let mut d = czero;
    for it in 1..=SERIES_MAX {
        d = b + a * d;
        if d == czero {
            d = tiny;
        }
        c = b + a / c;
        if c == czero {
            c = tiny;
        }
        d = d.inv();
        let delta = c * d;
        f = f * delta;
        if (delta - one).norm() < tol {
            let pq0 = Complex::new(zero, one - eta / rho);
            return Ok(pq0 + Complex::new(zero, rho.recip()) * f);
        }
        a = a + Complex::new(T::from_f64((2 * it) as f64), a_step_im);
        b = b + b_step;
    }
    Err(Error::ConvergenceFailure)
}
