//! Shared constants and tables used by multiple algorithm modules.
//!
//! Module-specific constants remain in their respective files.

#![allow(clippy::excessive_precision)]
#![allow(clippy::approx_constant)]

/// π
pub(crate) const PI: f64 = 3.14159265358979324e+00;

/// π/2
pub(crate) const HPI: f64 = 1.57079632679489662e+00;

/// 2π
pub(crate) const TWO_PI: f64 = 6.28318530717958648e+00;

/// ln 2
pub(crate) const LN_2: f64 = 6.93147180559945309e-01;

/// ln π
pub(crate) const LN_PI: f64 = 1.14472988584940017e+00;

/// ln(√(2π))
pub(crate) const LN_SQRT_2PI: f64 = 9.18938533204672742e-01;

/// √(2π)
pub(crate) const SQRT_2PI: f64 = 2.50662827463100050e+00;

/// Euler–Mascheroni constant γ
pub(crate) const EULER_GAMMA: f64 = 5.77215664901532861e-01;

/// Maximum number of terms of a series or continued fraction.
pub(crate) const SERIES_MAX: usize = 250;

/// Even Bernoulli numbers B₀, B₂, B₄, …, B₃₀.
///
/// B₁ = −1/2 is the only non-vanishing odd Bernoulli number and must be
/// handled separately by any expansion that uses this table.
#[rustfmt::skip]
pub(crate) const BERNOULLI: [f64; 16] = [
    1.0,
    1.0 / 6.0,
    -1.0 / 30.0,
    1.0 / 42.0,
    -1.0 / 30.0,
    5.0 / 66.0,
    -691.0 / 2730.0,
    7.0 / 6.0,
    -3617.0 / 510.0,
    43867.0 / 798.0,
    -174611.0 / 330.0,
    854513.0 / 138.0,
    -236364091.0 / 2730.0,
    8553103.0 / 6.0,
    -23749461029.0 / 870.0,
    8615841276005.0 / 14322.0,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_constants_agree() {
        assert_eq!(TWO_PI, 2.0 * PI);
        assert_eq!(HPI, PI / 2.0);
        assert!((SQRT_2PI.ln() - LN_SQRT_2PI).abs() < 1e-15);
        assert!((SQRT_2PI * SQRT_2PI - TWO_PI).abs() < 4e-15);
    }

    #[test]
    fn bernoulli_known_values() {
        assert_eq!(BERNOULLI[1], 1.0 / 6.0);
        assert_eq!(BERNOULLI[6], -691.0 / 2730.0);
        // signs alternate after B₀
        for k in 1..BERNOULLI.len() - 1 {
            assert!(BERNOULLI[k] * BERNOULLI[k + 1] < 0.0);
        }
    }
}
