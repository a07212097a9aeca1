//! The topology store: single source of truth for live visual state.

use std::collections::HashMap;

use crate::edge::{Edge, EdgeStyle};
use crate::error::{TopologyError, TopologyResult};
use crate::node::{Node, NodeStatus};

/// Owns the node and edge records and their current visual state.
///
/// Seeded once at startup; the topology shape, node kinds, capacities
/// and ids never change afterwards. Only `latency`/`status` on nodes
/// and the derived style on edges are updated, via the two `apply_*`
/// operations. The renderer reads snapshots through `nodes()` and
/// `edges()`.
///
/// Nodes and edges are kept in insertion order (vectors) with an id
/// index on the side, so blueprint projection is deterministic.
#[derive(Debug, Clone)]
pub struct TopologyStore {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    node_index: HashMap<String, usize>,
    edge_index: HashMap<String, usize>,
}

impl TopologyStore {
    /// Seed the store with a fixed topology.
    ///
    /// Validates that ids are unique and that every edge endpoint
    /// names an existing node.
    pub fn initialize(nodes: Vec<Node>, edges: Vec<Edge>) -> TopologyResult<Self> {
        let mut node_index = HashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            if node_index.insert(node.id.clone(), i).is_some() {
                return Err(TopologyError::DuplicateNode {
                    id: node.id.clone(),
                });
            }
        }

        let mut edge_index = HashMap::with_capacity(edges.len());
        for (i, edge) in edges.iter().enumerate() {
            if edge_index.insert(edge.id.clone(), i).is_some() {
                return Err(TopologyError::DuplicateEdge {
                    id: edge.id.clone(),
                });
            }
            for endpoint in [&edge.source, &edge.target] {
                if !node_index.contains_key(endpoint) {
                    return Err(TopologyError::UnknownEndpoint {
                        edge: edge.id.clone(),
                        node: endpoint.clone(),
                    });
                }
            }
        }

        Ok(Self {
            nodes,
            edges,
            node_index,
            edge_index,
        })
    }

    /// All nodes, in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Look up a node by id.
    pub fn get_node(&self, id: &str) -> Option<&Node> {
        self.node_index.get(id).map(|&i| &self.nodes[i])
    }

    /// Look up an edge by id.
    pub fn get_edge(&self, id: &str) -> Option<&Edge> {
        self.edge_index.get(id).map(|&i| &self.edges[i])
    }

    /// Replace `latency` and `status` on the matching node.
    ///
    /// Silent no-op when `id` is absent: result sets may be partial,
    /// and may mention nodes this store does not chart.
    pub fn apply_node_update(&mut self, id: &str, latency: f64, status: NodeStatus) {
        if let Some(&i) = self.node_index.get(id) {
            let node = &mut self.nodes[i];
            node.latency = latency;
            node.status = status;
        }
    }

    /// Replace the derived visual style on the matching edge.
    ///
    /// Silent no-op when `id` is absent.
    pub fn apply_edge_style(&mut self, id: &str, style: EdgeStyle) {
        if let Some(&i) = self.edge_index.get(id) {
            self.edges[i].style = style;
        }
    }
}
