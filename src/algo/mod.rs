//! Internal algorithm modules for Coulomb wave function computation.
//!
//! All functions are `pub(crate)`; the public surface lives in
//! [`crate::coulomb`], [`crate::gamma`] and [`crate::ode`].
//!
//! # Return value convention
//!
//! Every iterative routine returns `Result<_, Error>`. Running out of
//! terms is reported as [`Error::ConvergenceFailure`](crate::Error), which
//! the dispatcher absorbs by moving on to the next method of its chain.
//! Closed-form helpers (Gamow factors, recursion, Lanczos sums) are
//! infallible.
//!
//! # Clippy suppressions
//!
//! Modules holding coefficient tables carry
//! `#![allow(clippy::excessive_precision)]` so that the literals stay
//! exactly as published.

pub(crate) mod constants;

// Gamma family
pub(crate) mod lanczos;
pub(crate) mod stirling;

// Method selection
pub(crate) mod regime;

// Coulomb evaluators
pub(crate) mod asymptotic;
pub(crate) mod cf;
pub(crate) mod recurse;
pub(crate) mod series;
pub(crate) mod steed;
