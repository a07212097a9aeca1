//! Result reconciliation: node merge, then full edge restyle.

use sl_protocol::SimulationResult;
use sl_topology::{EdgeStyle, NodeStatus, TopologyStore};

/// Style an edge from its target node's status.
///
/// Only the target matters: an edge is hot exactly when what it feeds
/// into is overloaded. `None` (target not in the store) falls back to
/// cool rather than erroring.
pub fn style_for_target(status: Option<NodeStatus>) -> EdgeStyle {
    match status {
        Some(NodeStatus::Overloaded) => EdgeStyle::hot(),
        _ => EdgeStyle::cool(),
    }
}

/// Merge one simulation result into the store.
///
/// Per-node: readings for ids the store does not chart are ignored
/// (servers may report extra nodes), and a reading with a missing
/// latency or status leaves that field at its current value.
///
/// Per-edge: every edge is restyled from its target's status as seen
/// in the store after the node merge, so an edge whose target was not
/// in this result set keeps reflecting the target's prior status.
pub fn reconcile(store: &mut TopologyStore, result: &SimulationResult) {
    for reading in &result.nodes {
        let Some((current_latency, current_status)) = store
            .get_node(&reading.id)
            .map(|node| (node.latency, node.status))
        else {
            continue;
        };
        let latency = reading.latency.unwrap_or(current_latency);
        let status = reading.status.unwrap_or(current_status);
        store.apply_node_update(&reading.id, latency, status);
    }

    let styles: Vec<(String, EdgeStyle)> = store
        .edges()
        .iter()
        .map(|edge| {
            let target_status = store.get_node(&edge.target).map(|node| node.status);
            (edge.id.clone(), style_for_target(target_status))
        })
        .collect();
    for (edge_id, style) in styles {
        store.apply_edge_style(&edge_id, style);
    }
}
