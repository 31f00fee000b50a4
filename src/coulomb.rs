//! Coulomb wave function upper interface.
//!
//! Validates (L, η, ρ), asks [`regime`](crate::algo::regime) for the
//! ordered method chains of the regular and irregular functions, and runs
//! each chain until a method converges. The two halves are computed
//! independently, except that a method which yields all four functions at
//! the requested L (Steed, asymptotic) is not run twice.

use crate::algo::asymptotic::{asymptotic, sigma};
use crate::algo::recurse::upward;
use crate::algo::regime::{
    factor, factor_zero, irregular_chain, irregular_start, regular_chain, series_limit,
    turning_point,
};
use crate::algo::series;
use crate::algo::steed::steed;
use crate::machine::CoulombFloat;
use crate::ode::StoermerStepper;
use crate::types::{CoulombResult, Error, Method, SolutionPair, Tolerance};

/// Initial step of the ODE fallback.
const ODE_STEP: f64 = 0.25;

fn validate<T: CoulombFloat>(l: i32, eta: T, rho: T) -> Result<u32, Error> {
    if !eta.is_finite() || !rho.is_finite() || rho < T::zero() {
        return Err(Error::InvalidInput);
    }
    u32::try_from(l).map_err(|_| Error::InvalidInput)
}

/// Outcome of one method: NaN means the method broke down, infinity that
/// the value itself is out of range.
fn check_finite<T: CoulombFloat>(values: &[T]) -> Result<bool, Error> {
    if values.iter().any(|v| v.is_nan()) {
        return Ok(false);
    }
    if values.iter().any(|v| v.is_infinite()) {
        return Err(Error::Overflow);
    }
    Ok(true)
}

/// Absorb a convergence failure so the chain can move on.
fn recoverable<V>(result: Result<V, Error>) -> Result<Option<V>, Error> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(Error::ConvergenceFailure) => Ok(None),
        Err(e) => Err(e),
    }
}

/// F at (L, η, ρ) from the series value at the edge of the series region,
/// integrated outward.
fn integrate_regular<T: CoulombFloat>(
    l: u32,
    eta: T,
    rho: T,
    tol: Tolerance<T>,
) -> Result<(T, T), Error> {
    let rho0 = series_limit(l, eta).min(rho);
    let (f0, fp0) = series::regular(l, eta, rho0, tol.value())?;
    let ll = T::from_f64(l as f64 * (l as f64 + 1.0));
    let two_eta = T::from_f64(2.0) * eta;
    let rhs = |x: T, u: T| (ll / (x * x) + two_eta / x - T::one()) * u;
    let mut stepper = StoermerStepper::new(rhs, rho0, f0, fp0, T::from_f64(ODE_STEP), tol.ode())?;
    stepper.integrate(rho)?;
    Ok((stepper.y(), stepper.y_prime()))
}

/// G₀ from Steed's method at the seed point of
/// [`irregular_start`](crate::algo::regime::irregular_start), integrated
/// to ρ in whichever direction it lies.
fn integrate_irregular<T: CoulombFloat>(
    eta: T,
    rho: T,
    tol: Tolerance<T>,
) -> Result<(T, T), Error> {
    let start = irregular_start(eta);
    let seed = steed(0, eta, start, tol.value())?;
    let two_eta = T::from_f64(2.0) * eta;
    let rhs = |x: T, u: T| (two_eta / x - T::one()) * u;
    let mut stepper =
        StoermerStepper::new(rhs, start, seed.g, seed.g_prime, T::from_f64(ODE_STEP), tol.ode())?;
    stepper.integrate(rho)?;
    Ok((stepper.y(), stepper.y_prime()))
}

/// Run one method of the regular chain.
///
/// Steed and the asymptotic expansion return the full pair, which the
/// irregular chain may reuse.
fn regular_by<T: CoulombFloat>(
    method: Method,
    l: u32,
    eta: T,
    rho: T,
    tol: Tolerance<T>,
) -> Result<SolutionPair<T>, Error> {
    match method {
        Method::Series => {
            let (f, fp) = series::regular(l, eta, rho, tol.value())?;
            Ok(SolutionPair::regular(f, fp))
        }
        Method::Steed => steed(l, eta, rho, tol.value()),
        Method::Asymptotic => asymptotic(l, eta, rho, tol.value()),
        Method::Integrate => {
            let (f, fp) = integrate_regular(l, eta, rho, tol)?;
            Ok(SolutionPair::regular(f, fp))
        }
        Method::SteedRecursed => {
            // upward recursion is unstable for F below the turning point
            Err(Error::ConvergenceFailure)
        }
    }
}

/// Run one method of the irregular chain.
fn irregular_by<T: CoulombFloat>(
    method: Method,
    l: u32,
    eta: T,
    rho: T,
    tol: Tolerance<T>,
) -> Result<(T, T), Error> {
    let (g0, gp0) = match method {
        Method::Series => {
            let pair = series::zero(eta, rho, tol.value())?;
            (pair.g, pair.g_prime)
        }
        Method::SteedRecursed => {
            let pair = steed(0, eta, rho, tol.value())?;
            (pair.g, pair.g_prime)
        }
        Method::Integrate => integrate_irregular(eta, rho, tol)?,
        Method::Steed => {
            let pair = steed(l, eta, rho, tol.value())?;
            return Ok((pair.g, pair.g_prime));
        }
        Method::Asymptotic => {
            let pair = asymptotic(l, eta, rho, tol.value())?;
            return Ok((pair.g, pair.g_prime));
        }
    };
    upward(0, l, eta, rho, g0, gp0)
}

fn run_regular<T: CoulombFloat>(
    l: u32,
    eta: T,
    rho: T,
    tol: Tolerance<T>,
) -> Result<(SolutionPair<T>, Method), Error> {
    for &method in regular_chain(l, eta, rho) {
        if let Some(pair) = recoverable(regular_by(method, l, eta, rho, tol))? {
            if check_finite(&[pair.f, pair.f_prime])? {
                return Ok((pair, method));
            }
        }
    }
    Err(Error::TotalPrecisionLoss)
}

fn run_irregular<T: CoulombFloat>(
    l: u32,
    eta: T,
    rho: T,
    tol: Tolerance<T>,
    known: Option<(SolutionPair<T>, Method)>,
) -> Result<((T, T), Method), Error> {
    for &method in irregular_chain(l, eta, rho) {
        let reused = match known {
            Some((pair, m)) if m == method && !pair.g.is_nan() => Some((pair.g, pair.g_prime)),
            _ => None,
        };
        let result = match reused {
            Some(values) => Some(values),
            None => recoverable(irregular_by(method, l, eta, rho, tol))?,
        };
        if let Some((g, gp)) = result {
            if check_finite(&[g, gp])? {
                return Ok(((g, gp), method));
            }
        }
    }
    Err(Error::TotalPrecisionLoss)
}

/// Closed forms at ρ = 0.
///
/// G′₀ ~ 2η ln ρ / C₀(η) near the origin, so its sign follows −η and it
/// vanishes in the free case.
fn at_origin<T: CoulombFloat>(l: u32, eta: T) -> SolutionPair<T> {
    let zero = T::zero();
    if l == 0 {
        let c0 = factor_zero(eta);
        let gp = if eta == zero {
            zero
        } else {
            -eta.signum() * T::infinity()
        };
        SolutionPair::new(zero, c0, c0.recip(), gp)
    } else {
        SolutionPair::new(zero, zero, T::infinity(), T::neg_infinity())
    }
}

/// Regular Coulomb wave function F_L(η, ρ).
///
/// # Errors
/// - [`Error::InvalidInput`] for L < 0, ρ < 0 or non-finite η, ρ.
/// - [`Error::TotalPrecisionLoss`] if no method converges.
///
/// # Example
///
/// ```
/// use coulomb_wave::coulomb_f;
///
/// // F_0(0, ρ) = sin ρ
/// let f = coulomb_f(0, 0.0, 1.0_f64)?;
/// assert!((f - 1.0_f64.sin()).abs() < 1e-14);
/// # Ok::<(), coulomb_wave::Error>(())
/// ```
pub fn coulomb_f<T: CoulombFloat>(l: i32, eta: T, rho: T) -> Result<T, Error> {
    let l = validate(l, eta, rho)?;
    if rho == T::zero() {
        return Ok(T::zero());
    }
    let (pair, _) = run_regular(l, eta, rho, Tolerance::default())?;
    Ok(pair.f)
}

/// Irregular Coulomb wave function G_L(η, ρ).
///
/// G diverges at ρ = 0 for L > 0 and is returned as +∞ there.
///
/// # Errors
/// - [`Error::InvalidInput`] for L < 0, ρ < 0 or non-finite η, ρ.
/// - [`Error::Overflow`] if G exceeds the floating-point range at ρ > 0.
/// - [`Error::TotalPrecisionLoss`] if no method converges.
pub fn coulomb_g<T: CoulombFloat>(l: i32, eta: T, rho: T) -> Result<T, Error> {
    let l = validate(l, eta, rho)?;
    if rho == T::zero() {
        return Ok(at_origin(l, eta).g);
    }
    let ((g, _), _) = run_irregular(l, eta, rho, Tolerance::default(), None)?;
    Ok(g)
}

/// F, F′, G and G′ at (L, η, ρ).
///
/// The four values satisfy G·F′ − F·G′ = 1 to within the accuracy of
/// the methods that produced them.
pub fn coulomb<T: CoulombFloat>(l: i32, eta: T, rho: T) -> Result<SolutionPair<T>, Error> {
    coulomb_raw(l, eta, rho, Tolerance::default()).map(|r| r.pair)
}

/// F, F′, G and G′ with an explicit accuracy target, together with the
/// method that produced each half.
///
/// At ρ = 0 both halves are reported as [`Method::Series`].
pub fn coulomb_raw<T: CoulombFloat>(
    l: i32,
    eta: T,
    rho: T,
    tol: Tolerance<T>,
) -> Result<CoulombResult<T>, Error> {
    let l = validate(l, eta, rho)?;
    if rho == T::zero() {
        return Ok(CoulombResult {
            pair: at_origin(l, eta),
            regular: Method::Series,
            irregular: Method::Series,
        });
    }

    let (regular, regular_method) = run_regular(l, eta, rho, tol)?;
    let ((g, gp), irregular_method) =
        run_irregular(l, eta, rho, tol, Some((regular, regular_method)))?;
    Ok(CoulombResult {
        pair: SolutionPair::new(regular.f, regular.f_prime, g, gp),
        regular: regular_method,
        irregular: irregular_method,
    })
}

/// Classical turning point ρ_t = η + √(η² + L(L+1)).
///
/// Zero for L = 0 with η ≤ 0, where there is no barrier.
pub fn coulomb_turning_point<T: CoulombFloat>(l: i32, eta: T) -> Result<T, Error> {
    let l = validate(l, eta, T::zero())?;
    Ok(turning_point(l, eta))
}

/// Gamow factor C_L(η) = 2^L e^{−πη/2} |Γ(L + 1 + iη)| / (2L + 1)!.
///
/// F_L(η, ρ) ~ C_L(η) ρ^{L+1} as ρ → 0. Underflows to zero for large L
/// or large positive η.
pub fn coulomb_factor<T: CoulombFloat>(l: i32, eta: T) -> Result<T, Error> {
    let l = validate(l, eta, T::zero())?;
    Ok(factor(l, eta))
}

/// Coulomb phase shift σ_L(η) = arg Γ(L + 1 + iη), on the branch that is
/// continuous in η and zero at η = 0.
pub fn coulomb_phase_shift<T: CoulombFloat>(l: i32, eta: T) -> Result<T, Error> {
    let l = validate(l, eta, T::zero())?;
    sigma(l, eta)
}
