//! Power series about ρ = 0.
//!
//! The regular function is a pure power series for every L. At L = 0 the
//! irregular function additionally carries a logarithmic term, so F and G
//! are summed together from two coupled recurrences (A&S 14.1.14–14.1.18).

use num_complex::Complex;

use crate::algo::constants::{EULER_GAMMA, SERIES_MAX};
use crate::algo::regime::{factor_zero, series_prefactor};
use crate::gamma::digamma_complex;
use crate::machine::CoulombFloat;
use crate::types::{Error, SolutionPair};

/// Power series for F_L(η,ρ) and F′_L(η,ρ).
///
/// F = Σ u_k with u_{L+1} = C_L(η) ρ^{L+1}, u_L = 0 and
///
/// ```text
/// u_k = (2ηρ u_{k−1} − ρ² u_{k−2}) / ((k+L)(k−L−1)),   k ≥ L+2,
/// ```
///
/// and ρF′ = Σ k u_k. At η = 0 every other term vanishes, so the sum is
/// only stopped once two consecutive terms are negligible.
pub(crate) fn regular<T: CoulombFloat>(l: u32, eta: T, rho: T, tol: T) -> Result<(T, T), Error> {
    let lf = T::from_f64(l as f64);
    let two = T::from_f64(2.0);
    let c = series_prefactor(l, eta, rho);
    if c == T::zero() {
        return Ok((T::zero(), T::zero()));
    }

    let two_eta_rho = two * eta * rho;
    let rho2 = rho * rho;
    let mut u_prev = T::zero();
    let mut u_curr = c;
    let mut f = c;
    let mut fp = (lf + T::one()) * c;

    for i in 2..SERIES_MAX + 2 {
        let k = lf + T::from_f64(i as f64);
        let u_next = (two_eta_rho * u_curr - rho2 * u_prev) / ((k + lf) * (k - lf - T::one()));
        f = f + u_next;
        fp = fp + k * u_next;
        if u_next.abs() <= tol * f.abs()
            && u_curr.abs() <= tol * f.abs()
            && (k * u_next).abs() <= tol * fp.abs()
        {
            return Ok((f, fp / rho));
        }
        u_prev = u_curr;
        u_curr = u_next;
    }
    Err(Error::ConvergenceFailure)
}

/// Joint power series for F₀, F′₀, G₀ and G′₀.
///
/// With u the F₀ series normalised to u₁ = ρ, the companion series
///
/// ```text
/// v_n = (2ηρ v_{n−1} − ρ² v_{n−2} − 2η(2n−1) u_n) / (n(n−1)),  v₀ = 1, v₁ = 0
/// ```
///
/// gives C₀(η)·G₀ = v + 2η u (ln 2ρ + Re ψ(1+iη) + 2γ − 1).
///
/// # Errors
/// - [`Error::ConvergenceFailure`] if the sums have not settled after
///   `SERIES_MAX` terms.
/// - [`Error::Overflow`] when C₀(η) underflows, leaving G₀ unrepresentable.
pub(crate) fn zero<T: CoulombFloat>(eta: T, rho: T, tol: T) -> Result<SolutionPair<T>, Error> {
    let one = T::one();
    let two = T::from_f64(2.0);
    let two_eta_rho = two * eta * rho;
    let rho2 = rho * rho;

    let (mut u0, mut u1) = (T::zero(), rho);
    let (mut u, mut up) = (rho, rho);
    let (mut v0, mut v1) = (one, T::zero());
    let (mut v, mut vp) = (one, T::zero());

    let mut converged = false;
    for i in 2..SERIES_MAX {
        let n = T::from_f64(i as f64);
        let denom = n * (n - one);
        let u2 = (two_eta_rho * u1 - rho2 * u0) / denom;
        let v2 = (two_eta_rho * v1 - rho2 * v0 - two * eta * (two * n - one) * u2) / denom;
        u = u + u2;
        up = up + n * u2;
        v = v + v2;
        vp = vp + n * v2;
        if u1.abs().max(u2.abs()) <= tol * u.abs() && v1.abs().max(v2.abs()) <= tol * v.abs() {
            converged = true;
            break;
        }
        u0 = u1;
        u1 = u2;
        v0 = v1;
        v1 = v2;
    }
    if !converged {
        return Err(Error::ConvergenceFailure);
    }

    let c0 = factor_zero(eta);
    if c0 == T::zero() {
        return Err(Error::Overflow);
    }
    let psi = digamma_complex(Complex::new(one, eta))?;
    let log_term = (two * rho).ln() + psi.re + two * T::from_f64(EULER_GAMMA) - one;
    let g = (v + two * eta * u * log_term) / c0;
    let gp = (vp + two * eta * (up * log_term + u)) / (c0 * rho);
    Ok(SolutionPair::new(c0 * u, c0 * up / rho, g, gp))
}
