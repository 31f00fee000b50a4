//! Pure Rust Coulomb wave functions F_L(η, ρ) and G_L(η, ρ), with the
//! Gamma-family special functions they are built on.
//!
//! The regular and irregular Coulomb wave functions solve
//!
//! ```text
//! u″ + (1 − 2η/ρ − L(L+1)/ρ²) u = 0
//! ```
//!
//! for integer L ≥ 0, real η and ρ ≥ 0. Each evaluation picks, from the
//! position of (L, η, ρ) relative to the turning point, among a power
//! series, Steed's continued-fraction method, an asymptotic expansion,
//! recursion in L and a Bulirsch–Stoer ODE integrator, falling back along
//! a fixed chain when a method fails to converge.
//!
//! # Quick start
//!
//! ```
//! use coulomb_wave::{coulomb, coulomb_f, coulomb_g};
//!
//! let f = coulomb_f(2, 1.0, 10.0_f64)?;
//! let g = coulomb_g(2, 1.0, 10.0_f64)?;
//!
//! // All four functions at once; they satisfy G F′ − F G′ = 1
//! let pair = coulomb(2, 1.0, 10.0_f64)?;
//! assert_eq!((pair.f, pair.g), (f, g));
//! assert!((pair.wronskian() - 1.0).abs() < 1e-12);
//! # Ok::<(), coulomb_wave::Error>(())
//! ```
//!
//! # Special functions
//!
//! [`gamma`], [`ln_gamma`], [`digamma`], [`beta`] and [`ln_beta`] take real
//! arguments; [`ln_gamma_complex`] and [`digamma_complex`] take
//! [`Complex`](num_complex::Complex) arguments. All are generic over
//! [`CoulombFloat`] (`f64` and `f32`).
//!
//! # `no_std`
//!
//! Disable the default `std` feature and enable `libm`:
//!
//! ```toml
//! coulomb-wave = { version = "0.1", default-features = false, features = ["libm"] }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub(crate) mod algo;
mod coulomb;
mod gamma;
pub mod machine;
mod ode;
pub mod types;
pub(crate) mod utils;


pub use coulomb::{
    coulomb, coulomb_f, coulomb_factor, coulomb_g, coulomb_phase_shift, coulomb_raw,
    coulomb_turning_point,
};
pub use gamma::{beta, digamma, digamma_complex, gamma, ln_beta, ln_gamma, ln_gamma_complex};
pub use machine::CoulombFloat;
pub use ode::StoermerStepper;
pub use types::{CoulombResult, Error, Method, SolutionPair, Tolerance};
