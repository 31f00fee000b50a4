//! Bulirsch–Stoer integration of second-order equations without a
//! first-derivative term, y″ = f(x, y).
//!
//! Each step runs Stoermer's two-step rule with an increasing number of
//! mini-steps and extrapolates the results to zero mini-step size. The
//! Stoermer rule has an error expansion in even powers of h, so the
//! Neville tableau is built in h².

use crate::machine::CoulombFloat;
use crate::types::Error;

/// Mini-step counts of the successive trial steps.
const STEP_COUNTS: [usize; 10] = [1, 2, 3, 4, 6, 8, 12, 16, 24, 32];

/// Step budget for a single [`StoermerStepper::integrate`] call.
const MAX_STEPS: usize = 10_000;

/// Adaptive Bulirsch–Stoer–Stoermer integrator for y″ = f(x, y).
///
/// The step size ΔX adapts between steps: it doubles when the
/// extrapolation converged before the target column and halves when it
/// converged late. A step in which no column converged is retried at half
/// the step size.
///
/// # Example
///
/// ```
/// use coulomb_wave::StoermerStepper;
///
/// // y'' = -y with y(0) = 0, y'(0) = 1 gives y = sin x
/// let mut stepper = StoermerStepper::new(|_x: f64, y: f64| -y, 0.0, 0.0, 1.0, 0.25, 1e-13)?;
/// stepper.integrate(1.0)?;
/// assert!((stepper.y() - 1.0_f64.sin()).abs() < 1e-12);
/// # Ok::<(), coulomb_wave::Error>(())
/// ```
pub struct StoermerStepper<T: CoulombFloat, F: Fn(T, T) -> T> {
    rhs: F,
    x: T,
    y: T,
    y_prime: T,
    delta_x: T,
    accuracy: T,
    count: usize,
    target_k: usize,
}

#[inline]
fn check_accuracy<T: CoulombFloat>(value: T) -> Result<T, Error> {
    if value >= T::MAX_ACCURACY && value < T::one() {
        Ok(value)
    } else {
        Err(Error::InvalidAccuracy)
    }
}

impl<T: CoulombFloat, F: Fn(T, T) -> T> StoermerStepper<T, F> {
    /// Create a stepper at (x, y, y′) with initial step `delta_x`.
    ///
    /// # Errors
    /// - [`Error::InvalidAccuracy`] if `accuracy` lies outside
    ///   [`MAX_ACCURACY`](CoulombFloat::MAX_ACCURACY), 1).
    /// - [`Error::InvalidInput`] if `delta_x` is zero or any argument is
    ///   not finite.
    pub fn new(rhs: F, x: T, y: T, y_prime: T, delta_x: T, accuracy: T) -> Result<Self, Error> {
        let accuracy = check_accuracy(accuracy)?;
        if !(x.is_finite() && y.is_finite() && y_prime.is_finite() && delta_x.is_finite())
            || delta_x == T::zero()
        {
            return Err(Error::InvalidInput);
        }
        Ok(Self {
            rhs,
            x,
            y,
            y_prime,
            delta_x,
            accuracy,
            count: 0,
            target_k: STEP_COUNTS.len() / 2,
        })
    }

    /// Current abscissa.
    #[inline]
    pub fn x(&self) -> T {
        self.x
    }

    /// Current solution value.
    #[inline]
    pub fn y(&self) -> T {
        self.y
    }

    /// Current solution derivative.
    #[inline]
    pub fn y_prime(&self) -> T {
        self.y_prime
    }

    /// Step size that the next call to [`step`](Self::step) will attempt.
    #[inline]
    pub fn delta_x(&self) -> T {
        self.delta_x
    }

    /// Relative accuracy demanded of each step.
    #[inline]
    pub fn accuracy(&self) -> T {
        self.accuracy
    }

    /// Change the per-step accuracy.
    pub fn set_accuracy(&mut self, value: T) -> Result<(), Error> {
        self.accuracy = check_accuracy(value)?;
        Ok(())
    }

    /// Number of right-hand-side evaluations so far.
    #[inline]
    pub fn evaluation_count(&self) -> usize {
        self.count
    }

    #[inline]
    fn evaluate(&mut self, x: T, y: T) -> T {
        self.count += 1;
        (self.rhs)(x, y)
    }

    /// Stoermer's rule over ΔX with `n` mini-steps.
    fn trial(&mut self, n: usize) -> (T, T) {
        let half = T::from_f64(0.5);
        let h = self.delta_x / T::from_f64(n as f64);
        let mut x = self.x;
        let mut y = self.y;

        let mut d = h * (self.y_prime + half * h * self.evaluate(x, y));
        y = y + d;
        for _ in 1..n {
            x = x + h;
            d = d + h * h * self.evaluate(x, y);
            y = y + d;
        }
        let end = self.evaluate(self.x + self.delta_x, y);
        (y, d / h + half * h * end)
    }

    /// Take one step and return its length.
    fn advance(&mut self) -> Result<T, Error> {
        const K: usize = STEP_COUNTS.len();
        let zero = T::zero();
        let two = T::from_f64(2.0);

        loop {
            let mut prev_y = [zero; K];
            let mut prev_p = [zero; K];
            for k in 0..K {
                let (y1, p1) = self.trial(STEP_COUNTS[k]);
                let mut cur_y = [zero; K];
                let mut cur_p = [zero; K];
                cur_y[0] = y1;
                cur_p[0] = p1;
                for j in 1..=k {
                    let ratio = T::from_f64(STEP_COUNTS[k] as f64 / STEP_COUNTS[k - j] as f64);
                    let r = ratio * ratio - T::one();
                    cur_y[j] = cur_y[j - 1] + (cur_y[j - 1] - prev_y[j - 1]) / r;
                    cur_p[j] = cur_p[j - 1] + (cur_p[j - 1] - prev_p[j - 1]) / r;
                }

                if k > 0 {
                    let (y_new, p_new) = (cur_y[k], cur_p[k]);
                    let dx = self.delta_x.abs();
                    let scale = y_new.abs() + (dx * p_new).abs() + T::MACH_TINY;
                    let err = (y_new - prev_y[k - 1])
                        .abs()
                        .max((p_new - prev_p[k - 1]).abs() * dx)
                        / scale;
                    if err <= self.accuracy {
                        let taken = self.delta_x;
                        self.x = self.x + taken;
                        self.y = y_new;
                        self.y_prime = p_new;
                        if k + 1 < self.target_k {
                            self.delta_x = self.delta_x * two;
                        } else if k > self.target_k {
                            self.delta_x = self.delta_x / two;
                        }
                        return Ok(taken);
                    }
                }
                prev_y = cur_y;
                prev_p = cur_p;
            }

            self.delta_x = self.delta_x / two;
            if self.delta_x.abs() <= T::MACH_EPSILON * self.x.abs() || self.delta_x == zero {
                return Err(Error::ConvergenceFailure);
            }
        }
    }

    /// Advance by one adaptive step.
    ///
    /// # Errors
    /// [`Error::ConvergenceFailure`] if the step size shrinks below the
    /// resolution of x without any extrapolation converging.
    pub fn step(&mut self) -> Result<(), Error> {
        self.advance().map(|_| ())
    }

    /// Integrate to `x1`, landing on it exactly.
    ///
    /// The step direction follows the sign of `x1 − x`, and the final step
    /// is clipped to the remaining distance.
    pub fn integrate(&mut self, x1: T) -> Result<(), Error> {
        if !x1.is_finite() {
            return Err(Error::InvalidInput);
        }
        if (x1 > self.x) != (self.delta_x > T::zero()) {
            self.delta_x = -self.delta_x;
        }

        let mut steps = 0;
        while self.x != x1 {
            if steps == MAX_STEPS {
                return Err(Error::ConvergenceFailure);
            }
            let remaining = x1 - self.x;
            let last = self.delta_x.abs() >= remaining.abs();
            if last {
                self.delta_x = remaining;
            }
            let taken = self.advance()?;
            if last && taken == remaining {
                self.x = x1;
            }
            steps += 1;
        }
        Ok(())
    }
}
