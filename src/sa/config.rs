//! Annealing configuration.

use crate::error::{AnnealError, Result};

/// Configuration for the annealing loop.
///
/// # Examples
///
/// ```
/// use u_anneal::sa::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_initial_temperature(5.0)
///     .with_temperature_length(50)
///     .with_num_non_improve(500);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Initial temperature `T0`. Must be positive.
    pub initial_temperature: f64,

    /// Candidate evaluations per temperature level (`L`).
    pub temperature_length: usize,

    /// Stop after this many consecutive evaluations without a new best (`K`).
    pub num_non_improve: usize,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1.0,
            temperature_length: 100,
            num_non_improve: 1000,
        }
    }
}

impl AnnealConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_temperature_length(mut self, n: usize) -> Self {
        self.temperature_length = n;
        self
    }

    pub fn with_num_non_improve(mut self, n: usize) -> Self {
        self.num_non_improve = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(self.initial_temperature > 0.0 && self.initial_temperature.is_finite()) {
            return Err(AnnealError::InvalidParameter(format!(
                "initial_temperature must be positive and finite, got {}",
                self.initial_temperature
            )));
        }
        if self.temperature_length == 0 {
            return Err(AnnealError::InvalidParameter(
                "temperature_length must be at least 1".into(),
            ));
        }
        if self.num_non_improve == 0 {
            return Err(AnnealError::InvalidParameter(
                "num_non_improve must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
