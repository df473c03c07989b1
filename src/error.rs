//! Error types for annealing runs.

use thiserror::Error;

/// Errors raised while configuring or running the annealer.
///
/// Faults inside caller-supplied closures (cost function, callback,
/// cooling schedule) are not represented here: they unwind through
/// [`Annealer::run`](crate::sa::Annealer::run) untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnnealError {
    /// A construction parameter is outside its valid range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The input does not admit the requested operation, e.g. a ranking
    /// too short to produce a neighbour.
    #[error("precondition violated: {0}")]
    PreconditionViolation(String),
}

/// Result type alias for annealing operations.
pub type Result<T> = std::result::Result<T, AnnealError>;
