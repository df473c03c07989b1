//! Annealing execution loop.
//!
//! # Algorithm
//!
//! Maximizes the cost function. Starting from the initial ranking:
//!
//! 1. Draw a neighbour of the current ranking and score it
//! 2. If `delta >= 0`, move to it; a strictly better-than-best cost is
//!    reported to the callback, stored as best, and resets the
//!    non-improvement counter. Otherwise the counter is incremented
//! 3. If `delta < 0`, move to it with probability `exp(delta / T)` and
//!    count the move as uphill; the counter is incremented either way
//! 4. After `L` evaluations (or once the counter reaches `K`), cool `T`
//! 5. Stop once the counter reaches `K`

use rand::Rng;
use tracing::{debug, trace};

use super::config::AnnealConfig;
use super::types::{Neighbor, Neighborhood};
use crate::error::Result;

/// Result of an annealing run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealResult<T> {
    /// The best ranking found.
    pub best: Vec<T>,

    /// Cost of the best ranking.
    pub best_cost: f64,

    /// Number of accepted worsening moves.
    pub uphill_moves: usize,
}

impl<T> AnnealResult<T> {
    /// Splits the result into `(best, best_cost, uphill_moves)`.
    pub fn into_parts(self) -> (Vec<T>, f64, usize) {
        (self.best, self.best_cost, self.uphill_moves)
    }
}

/// Metropolis acceptance test for a cost change under maximization.
///
/// Non-negative deltas are accepted without touching `rng`. Negative
/// deltas are accepted when a uniform draw falls below `exp(delta / T)`,
/// which underflows to zero (always reject) as `T` approaches zero.
pub fn metropolis_accepts<R: Rng + ?Sized>(delta: f64, temperature: f64, rng: &mut R) -> bool {
    if delta >= 0.0 {
        return true;
    }
    let probability = (delta / temperature).exp();
    rng.random::<f64>() < probability
}

/// Simulated annealing engine with a non-improvement stopping criterion.
///
/// Owns the random source, neighbourhood generator, cost function,
/// cooling schedule and better-solution callback. Each call to
/// [`run`](Self::run) starts from fresh run state; only the random
/// source carries over between calls.
///
/// # Examples
///
/// ```
/// use u_anneal::random::create_rng;
/// use u_anneal::sa::{multiplicative, AnnealConfig, Annealer, BiasedRelocation};
///
/// // Count elements sitting at their own index.
/// let fixed_points = |r: &[usize]| r.iter().enumerate().filter(|&(i, &v)| i == v).count() as f64;
///
/// let config = AnnealConfig::default()
///     .with_initial_temperature(2.0)
///     .with_temperature_length(20)
///     .with_num_non_improve(400);
/// let mut annealer = Annealer::new(
///     create_rng(42),
///     BiasedRelocation,
///     fixed_points,
///     multiplicative(0.95).unwrap(),
///     config,
///     |_cost: f64, _ranking: &[usize]| {},
/// )
/// .unwrap();
///
/// let result = annealer.run(&[4, 3, 2, 1, 0]).unwrap();
/// assert_eq!(result.best_cost, fixed_points(&result.best));
/// ```
pub struct Annealer<R, N, C, S, B> {
    rng: R,
    neighborhood: N,
    cost: C,
    cooling: S,
    config: AnnealConfig,
    on_better: B,
}

impl<R, N, C, S, B> Annealer<R, N, C, S, B>
where
    R: Rng,
    N: Neighborhood,
    S: Fn(f64) -> f64,
{
    /// Creates an annealer after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns [`AnnealError::InvalidParameter`](crate::AnnealError::InvalidParameter)
    /// for a non-positive initial temperature or a zero temperature
    /// length or non-improvement limit.
    pub fn new(
        rng: R,
        neighborhood: N,
        cost: C,
        cooling: S,
        config: AnnealConfig,
        on_better: B,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            rng,
            neighborhood,
            cost,
            cooling,
            config,
            on_better,
        })
    }

    /// The validated configuration.
    pub fn config(&self) -> &AnnealConfig {
        &self.config
    }

    /// Runs annealing from `initial` until the non-improvement limit is hit.
    ///
    /// `initial` is copied; the caller's ranking is never modified.
    ///
    /// # Errors
    ///
    /// Propagates the neighbourhood generator's error on the first move,
    /// e.g. [`AnnealError::PreconditionViolation`](crate::AnnealError::PreconditionViolation)
    /// for rankings shorter than two elements. Panics raised by the cost
    /// function, cooling schedule or callback unwind through unchanged.
    pub fn run<T>(&mut self, initial: &[T]) -> Result<AnnealResult<T>>
    where
        T: Clone,
        C: Fn(&[T]) -> f64,
        B: FnMut(f64, &[T]),
    {
        let limit = self.config.num_non_improve;
        let length = self.config.temperature_length;

        let mut current = initial.to_vec();
        let mut current_cost = (self.cost)(&current);
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = self.config.initial_temperature;
        let mut non_improve = 0usize;
        let mut uphill_moves = 0usize;
        let mut iterations = 0usize;
        let mut levels = 0usize;

        debug!(
            event = "anneal_start",
            size = current.len(),
            initial_cost = current_cost,
            temperature = temperature,
            temperature_length = length,
            num_non_improve = limit,
        );

        while non_improve < limit {
            for _ in 0..length {
                let Neighbor {
                    ranking: neighbor, ..
                } = self.neighborhood.generate(&current, &mut self.rng)?;
                let neighbor_cost = (self.cost)(&neighbor);
                let delta = neighbor_cost - current_cost;
                iterations += 1;

                if delta >= 0.0 {
                    current = neighbor;
                    current_cost = neighbor_cost;

                    if current_cost > best_cost {
                        // The callback sees the new current and the old best.
                        (self.on_better)(current_cost, &current);
                        best = current.clone();
                        best_cost = current_cost;
                        non_improve = 0;
                        trace!(event = "new_best", iteration = iterations, cost = best_cost);
                    } else {
                        non_improve += 1;
                    }
                } else {
                    if metropolis_accepts(delta, temperature, &mut self.rng) {
                        current = neighbor;
                        current_cost = neighbor_cost;
                        uphill_moves += 1;
                    }
                    non_improve += 1;
                }

                if non_improve >= limit {
                    break;
                }
            }

            temperature = (self.cooling)(temperature);
            levels += 1;
            trace!(event = "cool", level = levels, temperature = temperature);
        }

        debug!(
            event = "anneal_end",
            best_cost = best_cost,
            uphill_moves = uphill_moves,
            iterations = iterations,
            levels = levels,
            final_temperature = temperature,
        );

        Ok(AnnealResult {
            best,
            best_cost,
            uphill_moves,
        })
    }
}
