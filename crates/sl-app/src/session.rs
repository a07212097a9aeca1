//! Session orchestration: trigger runs, reconcile, record history.

use sl_client::{EvalError, SimClient};
use sl_history::HistoryTracker;
use sl_protocol::{SimulationRequest, SystemStatus, build_blueprint};
use sl_reconcile::reconcile;
use sl_topology::TopologyStore;

use crate::error::{AppError, AppResult};

/// Aggregate stats of one completed run (the renderer's stats strip).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunReport {
    pub total_latency: f64,
    pub db_traffic: f64,
    pub system_status: SystemStatus,
}

/// Outcome of the most recent trigger attempt.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LastRun {
    /// No trigger has completed yet.
    #[default]
    Never,
    Succeeded(RunReport),
    Failed(String),
}

/// The single logical thread of control for the client core.
///
/// Owns the store, the history tracker and the client; everything
/// mutating happens through `trigger`, whose `&mut self` receiver
/// keeps store and history updates serialized. The network exchange
/// inside `trigger` is the only suspension point, and the client's
/// in-flight gate refuses any run started through a shared clone while
/// one is suspended.
pub struct Session {
    store: TopologyStore,
    client: SimClient,
    history: HistoryTracker,
    last_run: LastRun,
}

impl Session {
    pub fn new(store: TopologyStore, client: SimClient) -> Self {
        Self {
            store,
            client,
            history: HistoryTracker::new(),
            last_run: LastRun::Never,
        }
    }

    /// Execute one full run.
    ///
    /// Blueprint is projected from the current store, evaluated by the
    /// service, and the result reconciled into node and edge state
    /// before exactly one history sample is recorded. On failure the
    /// store and history are untouched, the failure is remembered as
    /// the last-run state, and the gate is already clear for a retry.
    pub async fn trigger(&mut self, traffic_rps: f64) -> AppResult<RunReport> {
        let blueprint = build_blueprint(&self.store);
        let request = SimulationRequest::new(traffic_rps, blueprint);

        let result = match self.client.evaluate(&request).await {
            Ok(result) => result,
            // A refused overlap is not a failed run; last-run state keeps
            // describing the run actually in flight.
            Err(EvalError::InFlight) => return Err(AppError::RunInFlight),
            Err(err) => {
                tracing::warn!(error = %err, "evaluation run failed");
                self.last_run = LastRun::Failed(err.to_string());
                return Err(err.into());
            }
        };

        reconcile(&mut self.store, &result);
        self.history.record(result.total_latency);

        let report = RunReport {
            total_latency: result.total_latency,
            db_traffic: result.db_traffic,
            system_status: result.system_status,
        };
        tracing::info!(
            total_latency = report.total_latency,
            db_traffic = report.db_traffic,
            status = ?report.system_status,
            "run completed"
        );
        self.last_run = LastRun::Succeeded(report);
        Ok(report)
    }

    /// Read-only topology snapshot for the renderer.
    pub fn store(&self) -> &TopologyStore {
        &self.store
    }

    /// Read-only latency history for the live chart.
    pub fn history(&self) -> &HistoryTracker {
        &self.history
    }

    /// Outcome of the most recent trigger.
    pub fn last_run(&self) -> &LastRun {
        &self.last_run
    }

    /// Whether an exchange is currently suspended.
    pub fn is_running(&self) -> bool {
        self.client.is_in_flight()
    }
}
