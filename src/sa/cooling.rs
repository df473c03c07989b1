//! Cooling schedule factories.
//!
//! A cooling schedule is any `Fn(f64) -> f64` mapping the current
//! temperature to the next one. The annealer applies it once per
//! temperature level. The factories here validate their parameter once
//! and hand back a stateless closure that can be shared across runs.
//!
//! # References
//!
//! - Multiplicative: standard textbook approach, `T_{k+1} = alpha * T_k`
//! - Lundy-Mees: Lundy & Mees (1986), with convergence proof

use crate::error::{AnnealError, Result};

/// Multiplicative cooling: `T_{k+1} = alpha * T_k`.
///
/// `alpha` must lie in `[0, 1]`. Values in `(0, 1)` give a strictly
/// decreasing temperature; `1` holds it constant and `0` quenches it
/// after the first level.
///
/// # Errors
///
/// Returns [`AnnealError::InvalidParameter`] when `alpha` is outside
/// `[0, 1]` or NaN.
///
/// # Examples
///
/// ```
/// use u_anneal::sa::multiplicative;
///
/// let cool = multiplicative(0.5).unwrap();
/// assert_eq!(cool(8.0), 4.0);
/// assert!(multiplicative(1.5).is_err());
/// ```
pub fn multiplicative(alpha: f64) -> Result<impl Fn(f64) -> f64 + Copy + Send + Sync> {
    if !(0.0..=1.0).contains(&alpha) {
        return Err(AnnealError::InvalidParameter(format!(
            "cooling ratio multiplier must satisfy 0 <= a <= 1, got {alpha}"
        )));
    }
    Ok(move |temperature: f64| alpha * temperature)
}

/// Lundy-Mees cooling: `T_{k+1} = T_k / (1 + beta * T_k)`.
///
/// Cools fast at high temperature and slowly near zero. A common choice
/// is `beta = (T_0 - T_end) / (levels * T_0 * T_end)` to reach `T_end`
/// after `levels` temperature levels.
///
/// # Errors
///
/// Returns [`AnnealError::InvalidParameter`] unless `beta` is positive
/// and finite.
pub fn lundy_mees(beta: f64) -> Result<impl Fn(f64) -> f64 + Copy + Send + Sync> {
    if !(beta > 0.0 && beta.is_finite()) {
        return Err(AnnealError::InvalidParameter(format!(
            "lundy-mees beta must be positive and finite, got {beta}"
        )));
    }
    Ok(move |temperature: f64| temperature / (1.0 + beta * temperature))
}

/// Applies `schedule` to `initial` `steps` times.
///
/// # Examples
///
/// ```
/// use u_anneal::sa::{cool_n, multiplicative};
///
/// let cool = multiplicative(0.5).unwrap();
/// assert_eq!(cool_n(&cool, 16.0, 3), 2.0);
/// ```
pub fn cool_n<S: Fn(f64) -> f64>(schedule: &S, initial: f64, steps: usize) -> f64 {
    (0..steps).fold(initial, |t, _| schedule(t))
}
