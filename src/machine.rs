//! Machine constants and the `CoulombFloat` trait.

use num_traits::Float;

/// Floating-point trait for Coulomb wave function computation.
///
/// Implemented for `f64` and `f32`. Provides machine constants and the
/// accuracy limits used by every iterative method in the crate.
pub trait CoulombFloat: Float + core::fmt::Debug + 'static {
    /// Machine epsilon.
    const MACH_EPSILON: Self;
    /// Smallest positive normal number.
    const MACH_TINY: Self;
    /// Tightest accuracy target that may be requested.
    ///
    /// Three bits above machine epsilon, so that termination tests never
    /// hinge on the last bits of the mantissa.
    const MAX_ACCURACY: Self;
    /// Accuracy handed to the ODE fallback integrator.
    ///
    /// Extrapolation cannot resolve differences much below this level
    /// before round-off in the mini-steps dominates.
    const ODE_ACCURACY: Self;

    /// Infallible conversion from f64.
    ///
    /// For f64 this is the identity; for f32 it truncates via `as f32`.
    /// All algorithm constants originate as f64 literals, so this
    /// conversion always succeeds for the supported types.
    fn from_f64(x: f64) -> Self;
}

impl CoulombFloat for f64 {
    const MACH_EPSILON: f64 = 2.220446049250313e-16;
    const MACH_TINY: f64 = 2.2250738585072014e-308;
    const MAX_ACCURACY: f64 = 1.7763568394002505e-15; // 2^-49
    const ODE_ACCURACY: f64 = 2.5e-13;

    #[inline]
    fn from_f64(x: f64) -> f64 {
        x
    }
}

impl CoulombFloat for f32 {
    const MACH_EPSILON: f32 = 1.1920929e-7;
    const MACH_TINY: f32 = 1.1754944e-38;
    const MAX_ACCURACY: f32 = 9.536743e-7; // 2^-20
    const ODE_ACCURACY: f32 = 1.5258789e-5; // 2^-16

    #[inline]
    fn from_f64(x: f64) -> f32 {
        x as f32
    }
}
