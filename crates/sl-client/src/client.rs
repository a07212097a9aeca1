//! Client for the external evaluation service.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use sl_protocol::{SimulationRequest, SimulationResult};

use crate::error::{EvalError, EvalResult};

/// Executes exactly one request/response cycle per triggered run.
///
/// The client owns the in-flight gate: at most one exchange may be
/// suspended at a time, which keeps topology and history updates
/// serializable. Clones share the gate (and the underlying connection
/// pool), so any clone observes a run started through another.
#[derive(Debug, Clone)]
pub struct SimClient {
    http: reqwest::Client,
    base_url: String,
    in_flight: Arc<AtomicBool>,
}

/// Releases the in-flight gate on every exit path.
struct GateGuard(Arc<AtomicBool>);

impl Drop for GateGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl SimClient {
    /// Create a client for the service at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether an exchange is currently suspended.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// POST the request to `/simulate` and await the result.
    ///
    /// Refuses to overlap a run already in flight (`EvalError::InFlight`,
    /// nothing touched). The gate is released once the response or
    /// failure has been fully processed, regardless of outcome, so a
    /// subsequent trigger can always proceed.
    pub async fn evaluate(&self, request: &SimulationRequest) -> EvalResult<SimulationResult> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(EvalError::InFlight);
        }
        let _gate = GateGuard(Arc::clone(&self.in_flight));

        let url = format!("{}/simulate", self.base_url);
        tracing::debug!(%url, traffic_rps = request.traffic_rps, "sending evaluation request");

        let response = self.http.post(&url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "evaluation service rejected the run");
            return Err(EvalError::Status { status });
        }

        response
            .json::<SimulationResult>()
            .await
            .map_err(EvalError::Decode)
    }
}
