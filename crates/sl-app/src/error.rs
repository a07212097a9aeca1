//! Error types for the sl-app service layer.

use sl_client::EvalError;
use sl_topology::TopologyError;

/// Service-layer error wrapping failures from the backend crates and
/// providing a unified interface for the CLI (and any future UI).
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A trigger arrived while a run was in flight; nothing happened.
    #[error("a simulation run is already in flight")]
    RunInFlight,

    /// The run was abandoned with no state change.
    #[error("evaluation failed: {0}")]
    Evaluation(String),

    #[error("topology error: {0}")]
    Topology(String),
}

/// Result type for sl-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<EvalError> for AppError {
    fn from(err: EvalError) -> Self {
        match err {
            EvalError::InFlight => AppError::RunInFlight,
            other => AppError::Evaluation(other.to_string()),
        }
    }
}

impl From<TopologyError> for AppError {
    fn from(err: TopologyError) -> Self {
        AppError::Topology(err.to_string())
    }
}
