//! Simulated Annealing (SA) over rankings.
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Worsening moves are accepted with a probability
//! that shrinks as the temperature cools, letting the search escape
//! local optima. The run stops once a fixed number of consecutive
//! evaluations fail to produce a new best ranking.
//!
//! The cost function is **maximized**.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"
//! - Lundy & Mees (1986), "Convergence of an Annealing Algorithm"

mod config;
mod cooling;
mod neighborhood;
mod runner;
mod types;

pub use config::AnnealConfig;
pub use cooling::{cool_n, lundy_mees, multiplicative};
pub use neighborhood::{AdjacentSwap, BiasedRelocation};
pub use runner::{metropolis_accepts, AnnealResult, Annealer};
pub use types::{Neighbor, Neighborhood};
