//! Turning point, Gamow factors and method selection.
//!
//! The (L, η, ρ) plane is split into four regions: a series region near
//! the origin, an asymptotic region at large ρ, the classically allowed
//! region ρ ≥ ρ_t where Steed's method converges quickly, and the
//! tunneling region 0 < ρ < ρ_t. Each region maps to an ordered chain of
//! methods; the dispatcher tries them in turn.

use crate::algo::constants::TWO_PI;
use crate::machine::CoulombFloat;
use crate::types::Method;

/// F series: ρ < SERIES_RHO + SERIES_RHO_SLOPE·√L.
pub(crate) const SERIES_RHO: f64 = 4.0;
pub(crate) const SERIES_RHO_SLOPE: f64 = 2.0;

/// F series: |ρη| < SERIES_ETA_RHO + SERIES_ETA_RHO_SLOPE·L.
pub(crate) const SERIES_ETA_RHO: f64 = 8.0;
pub(crate) const SERIES_ETA_RHO_SLOPE: f64 = 4.0;

/// G series (L = 0) for η > 0: ηρ < IRREGULAR_SERIES_ETA_RHO. The
/// logarithmic term cancels against the power series beyond this, and
/// inward integration is accurate there instead.
pub(crate) const IRREGULAR_SERIES_ETA_RHO: f64 = 2.0;

/// Asymptotic expansion: ρ > ASYMPTOTIC_RHO + (L² + η²)/2.
pub(crate) const ASYMPTOTIC_RHO: f64 = 32.0;

/// G₀ integration starts at max(2η, IRREGULAR_START_RHO +
/// IRREGULAR_START_SLOPE·√|η|), where the continued fraction of Steed's
/// method still converges within its term limit.
pub(crate) const IRREGULAR_START_RHO: f64 = 1.0;
pub(crate) const IRREGULAR_START_SLOPE: f64 = 0.25;

const REGULAR_SERIES: &[Method] = &[Method::Series, Method::Steed];
const REGULAR_ASYMPTOTIC: &[Method] = &[Method::Asymptotic, Method::Steed, Method::Integrate];
const REGULAR_ALLOWED: &[Method] = &[Method::Steed, Method::Integrate];
const REGULAR_TUNNELING: &[Method] = &[Method::Integrate, Method::Steed];

const IRREGULAR_SERIES: &[Method] = &[Method::Series, Method::SteedRecursed];
const IRREGULAR_ASYMPTOTIC: &[Method] = &[Method::Asymptotic, Method::Steed];
const IRREGULAR_ALLOWED: &[Method] = &[Method::Steed, Method::SteedRecursed, Method::Integrate];
const IRREGULAR_OUTSIDE_BARRIER: &[Method] = &[Method::SteedRecursed, Method::Integrate];
const IRREGULAR_TUNNELING: &[Method] = &[Method::Integrate, Method::SteedRecursed];

/// Classical turning point ρ_t = η + √(η² + L(L+1)).
///
/// For η < 0 the algebraically equal L(L+1)/(√(η² + L(L+1)) − η) avoids
/// the cancellation between η and the root.
pub(crate) fn turning_point<T: CoulombFloat>(l: u32, eta: T) -> T {
    let ll = T::from_f64(l as f64 * (l as f64 + 1.0));
    let q = (eta * eta + ll).sqrt();
    if eta >= T::zero() {
        eta + q
    } else {
        ll / (q - eta)
    }
}

/// Gamow factor C₀(η) = √(2πη / (e^{2πη} − 1)).
///
/// Underflows to zero for 2πη beyond the exponent range.
pub(crate) fn factor_zero<T: CoulombFloat>(eta: T) -> T {
    let x = T::from_f64(TWO_PI) * eta;
    if x == T::zero() {
        return T::one();
    }
    (x / x.exp_m1()).sqrt()
}

/// C_L(η) = C₀(η) · Π_{i=1..L} √(i² + η²) / (i(2i+1)).
pub(crate) fn factor<T: CoulombFloat>(l: u32, eta: T) -> T {
    let mut c = factor_zero(eta);
    for i in 1..=l {
        let fi = T::from_f64(i as f64);
        c = c * fi.hypot(eta) / (fi * T::from_f64((2 * i + 1) as f64));
    }
    c
}

/// Seed point of the G₀ integration for the given η.
pub(crate) fn irregular_start<T: CoulombFloat>(eta: T) -> T {
    let floor =
        T::from_f64(IRREGULAR_START_RHO) + T::from_f64(IRREGULAR_START_SLOPE) * eta.abs().sqrt();
    (T::from_f64(2.0) * eta).max(floor)
}

/// C_L(η)·ρ^{L+1}, the leading term of the F series.
///
/// The powers of ρ are folded into the Gamow product one at a time, so
/// C_L(η) may underflow on its own at large L while the product does not.
pub(crate) fn series_prefactor<T: CoulombFloat>(l: u32, eta: T, rho: T) -> T {
    let mut c = factor_zero(eta) * rho;
    for i in 1..=l {
        let fi = T::from_f64(i as f64);
        c = c * (rho * fi.hypot(eta) / (fi * T::from_f64((2 * i + 1) as f64)));
    }
    c
}

/// Upper end of the F series region for the given L and η.
///
/// Also the starting point of the outward ODE integration.
pub(crate) fn series_limit<T: CoulombFloat>(l: u32, eta: T) -> T {
    let lf = T::from_f64(l as f64);
    let rho = T::from_f64(SERIES_RHO) + T::from_f64(SERIES_RHO_SLOPE) * lf.sqrt();
    let eta_rho = T::from_f64(SERIES_ETA_RHO) + T::from_f64(SERIES_ETA_RHO_SLOPE) * lf;
    if rho * eta.abs() > eta_rho {
        eta_rho / eta.abs()
    } else {
        rho
    }
}

#[inline]
fn in_series_region<T: CoulombFloat>(l: u32, eta: T, rho: T) -> bool {
    let lf = T::from_f64(l as f64);
    rho < T::from_f64(SERIES_RHO) + T::from_f64(SERIES_RHO_SLOPE) * lf.sqrt()
        && (rho * eta).abs() < T::from_f64(SERIES_ETA_RHO) + T::from_f64(SERIES_ETA_RHO_SLOPE) * lf
}

#[inline]
fn in_irregular_series_region<T: CoulombFloat>(eta: T, rho: T) -> bool {
    let eta_rho = eta * rho;
    rho < T::from_f64(SERIES_RHO)
        && eta_rho > -T::from_f64(SERIES_ETA_RHO)
        && eta_rho < T::from_f64(IRREGULAR_SERIES_ETA_RHO)
}

#[inline]
fn in_asymptotic_region<T: CoulombFloat>(l: u32, eta: T, rho: T) -> bool {
    let lf = T::from_f64(l as f64);
    rho > T::from_f64(ASYMPTOTIC_RHO) + (lf * lf + eta * eta) * T::from_f64(0.5)
}

/// Ordered methods for F and F′ at ρ > 0.
pub(crate) fn regular_chain<T: CoulombFloat>(l: u32, eta: T, rho: T) -> &'static [Method] {
    if in_series_region(l, eta, rho) {
        REGULAR_SERIES
    } else if in_asymptotic_region(l, eta, rho) {
        REGULAR_ASYMPTOTIC
    } else if rho >= turning_point(l, eta) {
        REGULAR_ALLOWED
    } else {
        REGULAR_TUNNELING
    }
}

/// Ordered methods for G and G′ at ρ > 0.
///
/// The series and integration paths work at L = 0 and recurse upward.
pub(crate) fn irregular_chain<T: CoulombFloat>(l: u32, eta: T, rho: T) -> &'static [Method] {
    if in_irregular_series_region(eta, rho) {
        IRREGULAR_SERIES
    } else if in_asymptotic_region(l, eta, rho) {
        IRREGULAR_ASYMPTOTIC
    } else if rho >= turning_point(l, eta) {
        IRREGULAR_ALLOWED
    } else if rho >= T::from_f64(2.0) * eta {
        IRREGULAR_OUTSIDE_BARRIER
    } else {
        IRREGULAR_TUNNELING
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turning_point_values() {
        assert_eq!(turning_point(0, 3.0_f64), 6.0);
        assert_eq!(turning_point(0, -3.0_f64), 0.0);
        // L = 3, η = 0: √12
        assert!((turning_point(3, 0.0_f64) - 12.0_f64.sqrt()).abs() < 1e-15);
        // η < 0 branch agrees with the direct form
        let eta = -2.5_f64;
        let direct = eta + (eta * eta + 20.0).sqrt();
        assert!((turning_point(4, eta) - direct).abs() < 1e-14);
    }

    #[test]
    fn turning_point_large_negative_eta() {
        // direct form cancels to zero here
        let tp = turning_point(2, -1.0e9_f64);
        assert!((tp - 3.0e-9).abs() < 1e-22, "tp = {tp:e}");
    }

    #[test]
    fn gamow_factor_zero() {
        assert_eq!(factor_zero(0.0_f64), 1.0);
        // C₀(1) = √(2π/(e^{2π} − 1))
        let expected = (TWO_PI / (TWO_PI.exp() - 1.0)).sqrt();
        assert!((factor_zero(1.0_f64) - expected).abs() < 1e-16);
        // continuous through η = 0
        assert!((factor_zero(1.0e-12_f64) - 1.0).abs() < 1e-11);
        assert_eq!(factor_zero(1.0e3_f64), 0.0);
        // C₀(−η) = √(2πη/(1 − e^{−2πη}))
        let val = factor_zero(-2.0_f64);
        let expected = (2.0 * TWO_PI / (1.0 - (-2.0 * TWO_PI).exp())).sqrt();
        assert!((val - expected).abs() < 1e-14);
    }

    #[test]
    fn gamow_factor_free_particle() {
        // C_L(0) = 2^L L! / (2L+1)!
        assert!((factor(1, 0.0_f64) - 1.0 / 3.0).abs() < 1e-16);
        assert!((factor(2, 0.0_f64) - 1.0 / 15.0).abs() < 1e-16);
        assert!((factor(3, 0.0_f64) - 1.0 / 105.0).abs() < 1e-17);
    }

    #[test]
    fn series_prefactor_matches_product() {
        let cases: [(u32, f64, f64); 3] = [(0, 1.0, 0.5), (4, -2.0, 1.5), (10, 3.0, 2.0)];
        for (l, eta, rho) in cases {
            let direct = factor(l, eta) * rho.powi(l as i32 + 1);
            let val = series_prefactor(l, eta, rho);
            assert!((val - direct).abs() <= 1e-14 * direct.abs(), "L={l}: {val} vs {direct}");
        }
    }

    #[test]
    fn series_prefactor_no_premature_underflow() {
        // C_200(0) ≈ 4.9e-437 underflows alone; C_200(0)·25^201 ≈ 4.78e-156
        assert_eq!(factor(200, 0.0_f64), 0.0);
        let val = series_prefactor(200, 0.0_f64, 25.0);
        assert!((val - 4.77827307299926e-156).abs() < 1e-12 * 4.77827307299926e-156, "{val:e}");
    }

    #[test]
    fn series_limit_switches_on_eta() {
        assert_eq!(series_limit(0, 1.0_f64), 4.0);
        assert_eq!(series_limit(0, 4.0_f64), 2.0);
        assert_eq!(series_limit(4, 0.0_f64), 8.0);
    }

    #[test]
    fn irregular_start_values() {
        assert_eq!(irregular_start(10.0_f64), 20.0);
        assert_eq!(irregular_start(0.0_f64), 1.0);
        assert_eq!(irregular_start(-16.0_f64), 2.0);
        assert_eq!(irregular_start(-100.0_f64), 3.5);
    }

    #[test]
    fn regular_chain_regions() {
        assert_eq!(regular_chain(0, 1.0_f64, 1.0), REGULAR_SERIES);
        assert_eq!(regular_chain(0, 1.0_f64, 100.0), REGULAR_ASYMPTOTIC);
        assert_eq!(regular_chain(5, 1.0_f64, 10.0), REGULAR_ALLOWED);
        assert_eq!(regular_chain(5, 10.0_f64, 5.0), REGULAR_TUNNELING);
    }

    #[test]
    fn irregular_chain_regions() {
        assert_eq!(irregular_chain(3, 1.0_f64, 1.0), IRREGULAR_SERIES);
        assert_eq!(irregular_chain(0, 1.0_f64, 100.0), IRREGULAR_ASYMPTOTIC);
        assert_eq!(irregular_chain(5, 1.0_f64, 10.0), IRREGULAR_ALLOWED);
        // ρ_t(10, 1) ≈ 11.5, above 2η
        assert_eq!(irregular_chain(10, 1.0_f64, 6.0), IRREGULAR_OUTSIDE_BARRIER);
        assert_eq!(irregular_chain(0, 10.0_f64, 5.0), IRREGULAR_TUNNELING);
        // ηρ = 4: inside the F series region, outside the G one
        assert_eq!(irregular_chain(0, 4.0_f64, 1.0), IRREGULAR_TUNNELING);
        assert_eq!(irregular_chain(0, -4.0_f64, 1.0), IRREGULAR_SERIES);
    }

    #[test]
    fn every_chain_ends_with_a_fallback() {
        for chain in [
            REGULAR_SERIES,
            REGULAR_ASYMPTOTIC,
            REGULAR_ALLOWED,
            REGULAR_TUNNELING,
            IRREGULAR_SERIES,
            IRREGULAR_ASYMPTOTIC,
            IRREGULAR_ALLOWED,
            IRREGULAR_OUTSIDE_BARRIER,
            IRREGULAR_TUNNELING,
        ] {
            assert!(chain.len() >= 2);
        }
    }
}
