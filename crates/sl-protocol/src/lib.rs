//! sl-protocol: wire types for the evaluation service exchange.
//!
//! Provides:
//! - Blueprint projection of the topology store
//! - `SimulationRequest` / `SimulationResult` bodies for `/simulate`
//!
//! Field names follow the service contract exactly (`traffic_rps`,
//! `read_ratio`, `cache_hit_ratio`, `blueprint`; blueprint entries
//! `id`, `type`, `capacity`).

pub mod blueprint;
pub mod request;
pub mod result;

// Re-exports for ergonomics
pub use blueprint::{Blueprint, BlueprintNode, build_blueprint};
pub use request::{CACHE_HIT_RATIO, READ_RATIO, SimulationRequest};
pub use result::{NodeReading, SimulationResult, SystemStatus};
