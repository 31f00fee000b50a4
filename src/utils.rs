//! Argument reduction and exact trigonometry at multiples of π.

// Exact split constants.
#![allow(clippy::excessive_precision)]

use num_complex::Complex;

use crate::algo::constants::{HPI, LN_2, PI, TWO_PI};
use crate::machine::CoulombFloat;

/// Im z above which cot(πz) is formed from e^{2πiz} instead of sinh/cosh.
const COT_SPLIT: f64 = 20.0;

/// 2π split into three parts for Cody–Waite reduction.
///
/// The first two parts carry 26 significant bits each, so `n * part` is
/// exact in f64 for |n| < 2²⁷.
const TWO_PI_A: f64 = 6.283185243606567;
const TWO_PI_B: f64 = 6.357301884918343e-08;
const TWO_PI_C: f64 = 2.4492935982947064e-16;

/// Reduce the angle `x + y` to approximately (−π, π].
///
/// `x` is the large part (typically ρ) and is reduced with a three-part
/// 2π so that no digits are lost for |x| up to ~10⁸; `y` is a moderate
/// correction added after reduction.
#[inline]
pub(crate) fn reduce_angle<T: CoulombFloat>(x: T, y: T) -> T {
    let two_pi = T::from_f64(TWO_PI_A + TWO_PI_B);
    let n = ((x + y) / two_pi).round();
    ((x - n * T::from_f64(TWO_PI_A)) - n * T::from_f64(TWO_PI_B)) - n * T::from_f64(TWO_PI_C) + y
}

/// sin(πx) and cos(πx) together.
///
/// x is split into the nearest multiple q/2 of ½ and a remainder d in
/// [−¼, ¼]; q mod 4 selects the quadrant. Integers and half-integers give
/// d = 0 exactly, so the zeros and unit values there carry no rounding.
/// This keeps the Gamma reflection formula exact at its poles.
pub(crate) fn sincospi<T: CoulombFloat>(x: T) -> (T, T) {
    let two = T::from_f64(2.0);
    // |r| < 2 with the sign of x; exact
    let r = x % two;
    let q = (r * two).round();
    let d = (r - q / two) * T::from_f64(PI);
    let (s, c) = (d.sin(), d.cos());
    match q.to_i64().unwrap_or(0).rem_euclid(4) {
        0 => (s, c),
        1 => (c, -s),
        2 => (-s, -c),
        _ => (-c, s),
    }
}

/// sin(πx), exactly zero at integers.
#[inline]
pub(crate) fn sinpi<T: CoulombFloat>(x: T) -> T {
    sincospi(x).0
}

/// cos(πx), exactly zero at half-integers.
#[inline]
pub(crate) fn cospi<T: CoulombFloat>(x: T) -> T {
    sincospi(x).1
}

/// e^{2πiz}, with the phase reduced exactly through [`sincospi`].
fn exp_two_pi_i<T: CoulombFloat>(z: Complex<T>) -> Complex<T> {
    let (s, c) = sincospi(z.re * T::from_f64(2.0));
    Complex::new(c, s) * (-T::from_f64(TWO_PI) * z.im).exp()
}

/// π·cot(πz) for complex z, free of intermediate overflow.
///
/// ```text
/// cot(πz) = (sin πx cos πx − i sinh πy cosh πy) / (sin²πx + sinh²πy)
/// cot(πz) = i (q + 1)/(q − 1),  q = e^{2πiz},  y > 0
/// ```
///
/// The first form has no cancellation near the poles; the second is used
/// once sinh²πy would overflow, where |q| is tiny.
pub(crate) fn pi_cot_pi<T: CoulombFloat>(z: Complex<T>) -> Complex<T> {
    if z.im < T::zero() {
        return pi_cot_pi(z.conj()).conj();
    }
    let pi = T::from_f64(PI);
    if z.im <= T::from_f64(COT_SPLIT) {
        let (s, c) = sincospi(z.re);
        let py = pi * z.im;
        let (sh, ch) = (py.sinh(), py.cosh());
        return Complex::new(s * c, -sh * ch) * (pi / (s * s + sh * sh));
    }
    let one = Complex::from(T::one());
    let q = exp_two_pi_i(z);
    Complex::<T>::i() * (q + one) / (q - one) * pi
}

/// ln sin(πz) for Im z ≥ 0.
///
/// The branch is the one continuous in the closed upper half-plane:
/// ln sin(πz) = −iπz + iπ/2 − ln 2 + ln(1 − e^{2πiz}), where |e^{2πiz}| ≤ 1
/// keeps the last logarithm principal.
pub(crate) fn ln_sin_pi_upper<T: CoulombFloat>(z: Complex<T>) -> Complex<T> {
    let pi = T::from_f64(PI);
    let q = exp_two_pi_i(z);
    Complex::new(pi * z.im - T::from_f64(LN_2), T::from_f64(HPI) - pi * z.re)
        + (Complex::from(T::one()) - q).ln()
}
