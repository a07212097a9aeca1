//! Evaluation failure taxonomy.

use thiserror::Error;

pub type EvalResult<T> = Result<T, EvalError>;

/// Why one evaluation exchange did not produce a result.
///
/// `Transport`, `Status` and `Decode` all mean the run was abandoned
/// with no state change; the caller surfaces them as "last run
/// failed". No automatic retry: the human re-triggers.
#[derive(Debug, Error)]
pub enum EvalError {
    /// A run is already in flight; this trigger is refused outright.
    #[error("evaluation already in flight")]
    InFlight,

    /// The request never completed (connect failure, transport-level
    /// timeout, connection reset).
    #[error("evaluation request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("evaluation service returned {status}")]
    Status { status: reqwest::StatusCode },

    /// The response body was not a valid simulation result.
    #[error("evaluation response could not be decoded: {0}")]
    Decode(#[source] reqwest::Error),
}
