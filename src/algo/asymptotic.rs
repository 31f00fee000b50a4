//! Asymptotic phase-amplitude expansion for large ρ (A&S 14.5).

use num_complex::Complex;

use crate::algo::constants::{HPI, SERIES_MAX};
use crate::gamma::ln_gamma_complex;
use crate::machine::CoulombFloat;
use crate::types::{Error, SolutionPair};
use crate::utils::reduce_angle;

/// Coulomb phase shift σ_L(η) = arg Γ(L + 1 + iη).
///
/// Taken from the continuous branch of ln Γ, so σ_L is a smooth function
/// of η rather than being folded into (−π, π].
pub(crate) fn sigma<T: CoulombFloat>(l: u32, eta: T) -> Result<T, Error> {
    let z = Complex::new(T::from_f64(l as f64 + 1.0), eta);
    Ok(ln_gamma_complex(z)?.im)
}

/// Asymptotic expansion of F, F′, G and G′.
///
/// With θ = ρ − η ln 2ρ − Lπ/2 + σ_L and
///
/// ```text
/// a_k = (2k+1)η / ((2k+2)ρ),   b_k = (L(L+1) − k(k+1) + η²) / ((2k+2)ρ)
/// f_{k+1}  = a_k f_k − b_k g_k,          g_{k+1}  = a_k g_k + b_k f_k
/// f*_{k+1} = a_k f*_k − b_k g*_k − f_{k+1}/ρ
/// g*_{k+1} = a_k g*_k + b_k f*_k − g_{k+1}/ρ
/// ```
///
/// starting from f₀ = 1, g₀ = 0, f*₀ = 0, g*₀ = 1 − η/ρ, the sums give
/// F = g cos θ + f sin θ and G = f cos θ − g sin θ, with the starred sums
/// in the same roles for the derivatives.
///
/// The expansion is asymptotic: once k(k+1) passes L(L+1) + η² the term
/// ratio grows with k, and a growing term there is reported as
/// [`Error::ConvergenceFailure`].
pub(crate) fn asymptotic<T: CoulombFloat>(
    l: u32,
    eta: T,
    rho: T,
    tol: T,
) -> Result<SolutionPair<T>, Error> {
    let one = T::one();
    let two = T::from_f64(2.0);
    let ll = T::from_f64(l as f64 * (l as f64 + 1.0));
    let barrier = ll + eta * eta;

    let (mut f, mut g) = (one, T::zero());
    let (mut fs, mut gs) = (T::zero(), one - eta / rho);
    let (mut f_sum, mut g_sum) = (f, g);
    let (mut fs_sum, mut gs_sum) = (fs, gs);
    let mut prev_term = one;

    let mut converged = false;
    for i in 0..SERIES_MAX {
        let k = T::from_f64(i as f64);
        let denom = (two * k + two) * rho;
        let a = (two * k + one) * eta / denom;
        let b = (barrier - k * (k + one)) / denom;

        let f_next = a * f - b * g;
        let g_next = a * g + b * f;
        let fs_next = a * fs - b * gs - f_next / rho;
        let gs_next = a * gs + b * fs - g_next / rho;

        f_sum = f_sum + f_next;
        g_sum = g_sum + g_next;
        fs_sum = fs_sum + fs_next;
        gs_sum = gs_sum + gs_next;

        let term = f_next.abs() + g_next.abs();
        let term_prime = fs_next.abs() + gs_next.abs();
        if term <= tol * (f_sum.abs() + g_sum.abs())
            && term_prime <= tol * (fs_sum.abs() + gs_sum.abs())
        {
            converged = true;
            break;
        }
        if term > prev_term && k * (k + one) > barrier {
            return Err(Error::ConvergenceFailure);
        }
        prev_term = term;
        f = f_next;
        g = g_next;
        fs = fs_next;
        gs = gs_next;
    }
    if !converged {
        return Err(Error::ConvergenceFailure);
    }

    let l_phase = T::from_f64((l % 4) as f64 * HPI);
    let theta = reduce_angle(rho, sigma(l, eta)? - eta * (two * rho).ln() - l_phase);
    let (sin, cos) = theta.sin_cos();
    Ok(SolutionPair::new(
        g_sum * cos + f_sum * sin,
        gs_sum * cos + fs_sum * sin,
        f_sum * cos - g_sum * sin,
        fs_sum * cos - gs_sum * sin,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = f64::MAX_ACCURACY;

    #[test]
    fn sigma_reference_values() {
        // σ_0(1) = arg Γ(1 + i)
        assert!((sigma(0, 1.0_f64).unwrap() - (-0.30164032046753320)).abs() < 1e-14);
        assert!((sigma(3, -2.0_f64).unwrap() - (-2.6101958010488947)).abs() < 1e-14);
        // continuous branch, not reduced to (−π, π]
        assert!((sigma(10, 30.0_f64).unwrap() - 86.728809744914692).abs() < 1e-12);
        assert_eq!(sigma(4, 0.0_f64).unwrap(), 0.0);
    }

    #[test]
    fn free_particle_terminates() {
        // L = η = 0: every correction vanishes
        let rho = 40.0_f64;
        let pair = asymptotic(0, 0.0, rho, TOL).unwrap();
        assert!((pair.f - rho.sin()).abs() < 1e-14);
        assert!((pair.g - rho.cos()).abs() < 1e-14);
        assert!((pair.f_prime - rho.cos()).abs() < 1e-14);
        assert!((pair.g_prime + rho.sin()).abs() < 1e-14);
    }

    #[test]
    fn reference_values() {
        let cases: [(u32, f64, f64, [f64; 4]); 3] = [
            (0, 1.0, 100.0, [0.15740774617502803, 0.98267622029612798, 0.99266047244565205, -0.15587643871385597]),
            (2, 3.0, 100.0, [0.48544417085443122, -0.8648635131145229, -0.89224024758503257, -0.47036091612665979]),
            (0, -5.0, 1000.0, [-0.57723542123074864, -0.81759229375781806, -0.81353331899193264, 0.58011240364113927]),
        ];
        for (l, eta, rho, expected) in cases {
            let pair = asymptotic(l, eta, rho, TOL).unwrap();
            let got = [pair.f, pair.f_prime, pair.g, pair.g_prime];
            for (name, (a, b)) in ["F", "F'", "G", "G'"].iter().zip(got.iter().zip(expected)) {
                assert!((a - b).abs() < 1e-12, "{name}_{l}({eta},{rho}) = {a}, expected {b}");
            }
        }
    }

    #[test]
    fn divergence_is_reported() {
        // ρ far too small for the expansion
        assert_eq!(asymptotic(0, 5.0_f64, 3.0, TOL), Err(Error::ConvergenceFailure));
    }
}
