//! sl-client: one-shot exchange with the evaluation service.
//!
//! Provides:
//! - `SimClient` posting a `SimulationRequest` to `{base}/simulate`
//! - The in-flight gate refusing overlapping runs
//! - The `EvalError` failure taxonomy (transport, status, decode)

pub mod client;
pub mod error;

// Re-exports for ergonomics
pub use client::SimClient;
pub use error::{EvalError, EvalResult};
