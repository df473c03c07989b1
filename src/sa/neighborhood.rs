//! Neighbourhood generators for permutation rankings.
//!
//! - [`AdjacentSwap`]: exchange two neighbouring positions, O(n) copy
//! - [`BiasedRelocation`]: remove an element and reinsert it elsewhere,
//!   preferring non-adjacent targets, O(n)
//!
//! Both copy the input before mutating, and both require at least two
//! elements.

use rand::seq::index;
use rand::Rng;

use super::types::{Neighbor, Neighborhood};
use crate::error::{AnnealError, Result};

/// Swaps the element at a random position with its right-hand neighbour.
///
/// The position is drawn from `0..n`; a draw of the last index is moved
/// down by one so that a right-hand neighbour always exists. Position
/// `n - 2` is therefore twice as likely as the others.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdjacentSwap;

impl Neighborhood for AdjacentSwap {
    fn generate<T: Clone, R: Rng + ?Sized>(
        &self,
        ranking: &[T],
        rng: &mut R,
    ) -> Result<Neighbor<T>> {
        let n = require_movable(ranking)?;
        let mut from = rng.random_range(0..n);
        if from == n - 1 {
            from -= 1;
        }
        let to = from + 1;

        let mut out = ranking.to_vec();
        out.swap(from, to);
        Ok(Neighbor {
            ranking: out,
            from,
            to,
        })
    }
}

/// Relocates one element to another position (list insertion).
///
/// Two distinct positions `from`, `to` are sampled without replacement.
/// While they are adjacent, a fair coin decides whether to redraw `to`
/// uniformly among all positions other than `from`; redrawing stops on
/// tails or once the target is no longer adjacent. Adjacent moves stay
/// possible but become much rarer than under plain uniform sampling.
///
/// The element at `from` is removed and reinserted at `to`, shifting
/// everything in between by one.
#[derive(Debug, Clone, Copy, Default)]
pub struct BiasedRelocation;

impl Neighborhood for BiasedRelocation {
    fn generate<T: Clone, R: Rng + ?Sized>(
        &self,
        ranking: &[T],
        rng: &mut R,
    ) -> Result<Neighbor<T>> {
        let n = require_movable(ranking)?;
        let picked = index::sample(rng, n, 2);
        let from = picked.index(0);
        let mut to = picked.index(1);

        let mut adjacent = from.abs_diff(to) == 1;
        while adjacent && rng.random::<f64>() < 0.5 {
            to = pick_other(n, from, rng);
            adjacent = from.abs_diff(to) == 1;
        }

        let mut out = ranking.to_vec();
        let item = out.remove(from);
        out.insert(to, item);
        Ok(Neighbor {
            ranking: out,
            from,
            to,
        })
    }
}

/// Uniform choice among `0..n` excluding `skip`.
fn pick_other<R: Rng + ?Sized>(n: usize, skip: usize, rng: &mut R) -> usize {
    let k = rng.random_range(0..n - 1);
    if k >= skip {
        k + 1
    } else {
        k
    }
}

fn require_movable<T>(ranking: &[T]) -> Result<usize> {
    let n = ranking.len();
    if n < 2 {
        return Err(AnnealError::PreconditionViolation(format!(
            "ranking must have at least 2 elements to generate a neighbour, got {n}"
        )));
    }
    Ok(n)
}
