//! Steed's method: CF1 and CF2 closed by the Wronskian.
//!
//! Given f = F′/F from CF1 and p + iq = (G′ + iF′)/(G + iF) from CF2,
//! the Wronskian G F′ − F G′ = 1 fixes all four functions:
//!
//! ```text
//! γ = (f − p)/q,  F = ±1/√(q(1 + γ²)),  F′ = fF,  G = γF,  G′ = (pγ − q)F
//! ```

use crate::algo::cf::{cf1, cf2};
use crate::machine::CoulombFloat;
use crate::types::{Error, SolutionPair};

/// F, F′, G and G′ at (L, η, ρ) by Steed's method.
///
/// Accurate wherever both fractions converge, which in practice means
/// ρ at or above the turning point.
pub(crate) fn steed<T: CoulombFloat>(
    l: u32,
    eta: T,
    rho: T,
    tol: T,
) -> Result<SolutionPair<T>, Error> {
    let (f, sign) = cf1(l, eta, rho, tol)?;
    let pq = cf2(l, eta, rho, tol)?;
    let (p, q) = (pq.re, pq.im);
    if !(q > T::zero()) {
        return Err(Error::ConvergenceFailure);
    }

    let gamma = (f - p) / q;
    let big_f = sign / (q * (T::one() + gamma * gamma)).sqrt();
    Ok(SolutionPair::new(
        big_f,
        f * big_f,
        gamma * big_f,
        (p * gamma - q) * big_f,
    ))
}
