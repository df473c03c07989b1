//! Core move types for annealing over rankings.

use rand::Rng;

use crate::error::Result;

/// A candidate ranking produced from the current one.
///
/// `from` and `to` are the two positions touched by the move. The engine
/// ignores them; they exist so cost functions built around incremental
/// updates can see what changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighbor<T> {
    /// The neighbouring ranking, a fresh copy independent of the input.
    pub ranking: Vec<T>,
    /// Position the move started from.
    pub from: usize,
    /// Position the move ended at.
    pub to: usize,
}

/// Produces neighbouring rankings.
///
/// The input ranking is never mutated; every call returns an owned copy.
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use u_anneal::sa::{Neighbor, Neighborhood};
/// use u_anneal::{AnnealError, Result};
///
/// /// Swaps two uniformly chosen distinct positions.
/// struct RandomSwap;
///
/// impl Neighborhood for RandomSwap {
///     fn generate<T: Clone, R: Rng + ?Sized>(&self, ranking: &[T], rng: &mut R) -> Result<Neighbor<T>> {
///         let n = ranking.len();
///         if n < 2 {
///             return Err(AnnealError::PreconditionViolation("need two elements".into()));
///         }
///         let from = rng.random_range(0..n);
///         let to = (from + rng.random_range(1..n)) % n;
///         let mut out = ranking.to_vec();
///         out.swap(from, to);
///         Ok(Neighbor { ranking: out, from, to })
///     }
/// }
/// ```
pub trait Neighborhood {
    /// Generates a neighbour of `ranking` using `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`AnnealError::PreconditionViolation`](crate::AnnealError::PreconditionViolation)
    /// when `ranking` admits no move.
    fn generate<T: Clone, R: Rng + ?Sized>(&self, ranking: &[T], rng: &mut R)
        -> Result<Neighbor<T>>;
}
