//! Blueprint: the minimal topology projection sent with a request.

use serde::{Deserialize, Serialize};
use sl_topology::{NodeKind, TopologyStore};

/// One blueprint entry per topology node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlueprintNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub capacity: u32,
}

/// Request-time projection of the topology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blueprint {
    pub nodes: Vec<BlueprintNode>,
}

/// Project the current topology into a blueprint.
///
/// Pure: reads only `id`, `kind` and `capacity`, one entry per node
/// in store iteration order. Never consults `latency` or `status`, so
/// the same store state always yields the same blueprint.
pub fn build_blueprint(store: &TopologyStore) -> Blueprint {
    let nodes = store
        .nodes()
        .iter()
        .map(|node| BlueprintNode {
            id: node.id.clone(),
            kind: node.kind,
            capacity: node.capacity,
        })
        .collect();
    Blueprint { nodes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sl_topology::{NodeStatus, default_topology};

    #[test]
    fn projection_is_deterministic() {
        let store = default_topology();
        assert_eq!(build_blueprint(&store), build_blueprint(&store));
    }

    #[test]
    fn projection_ignores_live_state() {
        let mut store = default_topology();
        let before = build_blueprint(&store);

        store.apply_node_update("app1", 123.4, NodeStatus::Overloaded);
        let after = build_blueprint(&store);

        assert_eq!(before, after);
    }

    #[test]
    fn one_entry_per_node_in_store_order() {
        let store = default_topology();
        let blueprint = build_blueprint(&store);

        assert_eq!(blueprint.nodes.len(), store.nodes().len());
        for (entry, node) in blueprint.nodes.iter().zip(store.nodes()) {
            assert_eq!(entry.id, node.id);
            assert_eq!(entry.kind, node.kind);
            assert_eq!(entry.capacity, node.capacity);
        }
    }

    #[test]
    fn entry_serializes_kind_as_type() {
        let entry = BlueprintNode {
            id: "lb1".into(),
            kind: NodeKind::LoadBalancer,
            capacity: 10_000,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": "lb1", "type": "load_balancer", "capacity": 10_000 })
        );
    }
}
