//! Response body from the `/simulate` endpoint.

use serde::{Deserialize, Deserializer, Serialize};
use sl_topology::NodeStatus;

/// Aggregate verdict for the whole system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystemStatus {
    Stable,
    Unstable,
}

/// Per-node reading from one evaluation.
///
/// `latency` and `status` are individually optional so that a partial
/// or malformed entry degrades to "leave that field unchanged" instead
/// of sinking the whole run. Extra fields the service may report
/// (load, error rate) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeReading {
    pub id: String,
    #[serde(default)]
    pub latency: Option<f64>,
    #[serde(default, deserialize_with = "lenient_status")]
    pub status: Option<NodeStatus>,
}

/// One completed evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub total_latency: f64,
    pub db_traffic: f64,
    pub system_status: SystemStatus,
    pub nodes: Vec<NodeReading>,
}

/// Decode a node status, mapping unrecognized strings to `None`.
fn lenient_status<'de, D>(deserializer: D) -> Result<Option<NodeStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(|s| match s {
        "Idle" => Some(NodeStatus::Idle),
        "Nominal" => Some(NodeStatus::Nominal),
        "Overloaded" => Some(NodeStatus::Overloaded),
        _ => None,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_wire_shape() {
        let result: SimulationResult = serde_json::from_value(serde_json::json!({
            "total_latency": 42.5,
            "db_traffic": 3500.0,
            "system_status": "Stable",
            "nodes": [
                { "id": "app1", "latency": 42.5, "status": "Nominal" },
                { "id": "db1", "latency": 5.0, "status": "Nominal" },
            ],
        }))
        .unwrap();

        assert_eq!(result.total_latency, 42.5);
        assert_eq!(result.system_status, SystemStatus::Stable);
        assert_eq!(result.nodes.len(), 2);
        assert_eq!(result.nodes[0].status, Some(NodeStatus::Nominal));
    }

    #[test]
    fn missing_fields_degrade_to_none() {
        let reading: NodeReading =
            serde_json::from_value(serde_json::json!({ "id": "app1" })).unwrap();
        assert_eq!(reading.latency, None);
        assert_eq!(reading.status, None);
    }

    #[test]
    fn unknown_status_degrades_to_none() {
        let reading: NodeReading = serde_json::from_value(serde_json::json!({
            "id": "app1",
            "latency": 12.0,
            "status": "Melting",
        }))
        .unwrap();
        assert_eq!(reading.latency, Some(12.0));
        assert_eq!(reading.status, None);
    }

    #[test]
    fn extra_fields_are_ignored() {
        // The backend also reports load and error_rate per node.
        let reading: NodeReading = serde_json::from_value(serde_json::json!({
            "id": "db1",
            "type": "database",
            "load": 3500.0,
            "latency": 20.0,
            "error_rate": 0.0,
            "status": "Overloaded",
        }))
        .unwrap();
        assert_eq!(reading.status, Some(NodeStatus::Overloaded));
    }
}
