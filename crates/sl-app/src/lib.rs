//! sl-app: session service tying the client core together.
//!
//! One `Session` owns the topology store, the history tracker, the
//! simulation client and the last-run state. `trigger` runs the whole
//! cycle (blueprint, evaluate, reconcile, record); the renderer reads
//! snapshots through the accessors.

pub mod error;
pub mod session;

// Re-exports for ergonomics
pub use error::{AppError, AppResult};
pub use session::{LastRun, RunReport, Session};
