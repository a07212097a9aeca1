//! Request body for the `/simulate` endpoint.

use serde::{Deserialize, Serialize};

use crate::blueprint::Blueprint;

/// Fraction of traffic that is reads.
pub const READ_RATIO: f64 = 0.95;

/// Fraction of reads served from cache.
pub const CACHE_HIT_RATIO: f64 = 0.8;

/// One evaluation request.
///
/// The traffic level is user-controlled (the UI offers 1k..50k RPS);
/// any positive value is sent as-is and the server validates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    pub traffic_rps: f64,
    pub read_ratio: f64,
    pub cache_hit_ratio: f64,
    pub blueprint: Blueprint,
}

impl SimulationRequest {
    /// Build a request with the fixed read and cache-hit ratios.
    pub fn new(traffic_rps: f64, blueprint: Blueprint) -> Self {
        Self {
            traffic_rps,
            read_ratio: READ_RATIO,
            cache_hit_ratio: CACHE_HIT_RATIO,
            blueprint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_wire_shape() {
        let request = SimulationRequest::new(8000.0, Blueprint { nodes: vec![] });
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "traffic_rps": 8000.0,
                "read_ratio": 0.95,
                "cache_hit_ratio": 0.8,
                "blueprint": { "nodes": [] },
            })
        );
    }
}
