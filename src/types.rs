//! Core types for Coulomb wave function computation.

use core::fmt;

use crate::machine::CoulombFloat;

/// Values and derivatives of a pair of independent solutions.
///
/// For the Coulomb equation the first solution is the regular function
/// F_L(η,ρ) and the second the irregular function G_L(η,ρ). Routines that
/// only produce the regular solution leave `g` and `g_prime` as NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolutionPair<T: CoulombFloat> {
    /// Regular solution F.
    pub f: T,
    /// Derivative F′ with respect to ρ.
    pub f_prime: T,
    /// Irregular solution G.
    pub g: T,
    /// Derivative G′ with respect to ρ.
    pub g_prime: T,
}

impl<T: CoulombFloat> SolutionPair<T> {
    /// Create a solution pair from all four quantities.
    #[inline]
    pub fn new(f: T, f_prime: T, g: T, g_prime: T) -> Self {
        Self {
            f,
            f_prime,
            g,
            g_prime,
        }
    }

    /// Pair carrying only the regular solution; `g` and `g_prime` are NaN.
    #[inline]
    pub(crate) fn regular(f: T, f_prime: T) -> Self {
        Self::new(f, f_prime, T::nan(), T::nan())
    }

    /// Wronskian G·F′ − F·G′, identically 1 for Coulomb wave functions.
    ///
    /// Subject to cancellation when F and G differ by many orders of
    /// magnitude; compare against 1 with a relative tolerance scaled by
    /// |G·F′| + |F·G′|.
    #[inline]
    pub fn wronskian(&self) -> T {
        self.g * self.f_prime - self.f * self.g_prime
    }
}

/// Numerical method that produced a value.
///
/// For the irregular function the series and integration variants run at
/// L = 0 and reach the requested L by upward recursion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Power series about the origin.
    Series,
    /// Steed's method (CF1, CF2 and the Wronskian) at the requested L.
    Steed,
    /// Steed's method at L = 0, transported upward in L by recursion.
    SteedRecursed,
    /// Asymptotic phase-amplitude expansion for large ρ.
    Asymptotic,
    /// Bulirsch–Stoer–Stoermer integration of the radial equation.
    Integrate,
}

/// Result of a full Coulomb evaluation, returned by
/// [`coulomb_raw`](crate::coulomb_raw).
///
/// The convenience functions (`coulomb_f`, `coulomb_g`, `coulomb`) do not
/// expose this type; they return only the computed values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoulombResult<T: CoulombFloat> {
    /// F, F′, G, G′ at the requested (L, η, ρ).
    pub pair: SolutionPair<T>,
    /// Method that produced F and F′.
    pub regular: Method,
    /// Method that produced G and G′.
    pub irregular: Method,
}

/// Accuracy target for the iterative methods.
///
/// Series and continued fractions terminate once the next correction is
/// below this fraction of the running result. The ODE fallback uses the
/// larger of this value and [`CoulombFloat::ODE_ACCURACY`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Tolerance<T: CoulombFloat>(T);

impl<T: CoulombFloat> Tolerance<T> {
    /// Validate an accuracy target.
    ///
    /// Accepts `MAX_ACCURACY <= value < 1` (2⁻⁴⁹ ≤ value < 1 for f64).
    pub fn new(value: T) -> Result<Self, Error> {
        if value >= T::MAX_ACCURACY && value < T::one() {
            Ok(Self(value))
        } else {
            Err(Error::InvalidAccuracy)
        }
    }

    /// The accuracy target as a float.
    #[inline]
    pub fn value(self) -> T {
        self.0
    }

    /// Accuracy for the ODE fallback integrator.
    #[inline]
    pub(crate) fn ode(self) -> T {
        self.0.max(T::ODE_ACCURACY)
    }
}

impl<T: CoulombFloat> Default for Tolerance<T> {
    fn default() -> Self {
        Self(T::MAX_ACCURACY)
    }
}

/// Error type for Coulomb and special function computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// Invalid input (e.g., L < 0, ρ < 0, non-finite argument, a pole of Γ).
    InvalidInput,
    /// Accuracy target outside [MAX_ACCURACY, 1).
    InvalidAccuracy,
    /// Result magnitude exceeds the representable range.
    Overflow,
    /// A single method exhausted its iteration budget without converging.
    ConvergenceFailure,
    /// Every applicable method failed; no trustworthy digits remain.
    TotalPrecisionLoss,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInput => {
                write!(f, "invalid input: check L, eta and rho constraints")
            }
            Error::InvalidAccuracy => {
                write!(f, "invalid accuracy: target must lie in [2^-49, 1)")
            }
            Error::Overflow => {
                write!(f, "overflow: result magnitude exceeds representable range")
            }
            Error::ConvergenceFailure => {
                write!(
                    f,
                    "convergence failure: algorithm did not meet termination criteria"
                )
            }
            Error::TotalPrecisionLoss => {
                write!(f, "total precision loss: every applicable method failed")
            }
        }
    }
}

impl core::error::Error for Error {}
