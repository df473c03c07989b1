//! Domain-agnostic simulated annealing over permutations.
//!
//! Callers supply the cost function, the neighbourhood generator and the
//! cooling schedule; this crate provides the annealing control loop with
//! a non-improvement stopping criterion.
//!
//! - [`sa::Annealer`]: the annealing engine.
//! - [`sa::AdjacentSwap`], [`sa::BiasedRelocation`]: ranking neighbourhoods.
//! - [`sa::multiplicative`], [`sa::lundy_mees`]: cooling schedule factories.
//! - [`random::create_rng`]: reproducible random source.
//!
//! # Architecture
//!
//! Everything is single-threaded and synchronous. Run state lives on the
//! stack of [`sa::Annealer::run`]; concurrent optimizations each need
//! their own annealer and random source.

pub mod error;
pub mod random;
pub mod sa;

pub use error::{AnnealError, Result};
