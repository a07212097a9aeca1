//! The seeded lab topology.

use crate::edge::Edge;
use crate::node::{Node, NodeKind};
use crate::store::TopologyStore;

/// Uniform capacity applied to every seeded node.
pub const DEFAULT_CAPACITY: u32 = 10_000;

/// Build the fixed lab topology: a load balancer fanning out to two
/// app servers, both reading through a cache backed by one database.
pub fn default_topology() -> TopologyStore {
    let nodes = vec![
        Node::new(
            "lb1",
            NodeKind::LoadBalancer,
            DEFAULT_CAPACITY,
            "Load Balancer",
            "Distributes incoming traffic across multiple servers.",
        ),
        Node::new(
            "app1",
            NodeKind::AppServer,
            DEFAULT_CAPACITY,
            "App Server 01",
            "Processes core application logic and HTTP requests.",
        ),
        Node::new(
            "app2",
            NodeKind::AppServer,
            DEFAULT_CAPACITY,
            "App Server 02",
            "Secondary server for high availability.",
        ),
        Node::new(
            "cache1",
            NodeKind::Cache,
            DEFAULT_CAPACITY,
            "Redis Cluster",
            "Stores frequently accessed data in memory.",
        ),
        Node::new(
            "db1",
            NodeKind::Database,
            DEFAULT_CAPACITY,
            "Primary DB",
            "Persistent storage system for critical user data.",
        ),
    ];

    let edges = vec![
        Edge::new("e1", "lb1", "app1"),
        Edge::new("e2", "lb1", "app2"),
        Edge::new("e3", "app1", "cache1"),
        Edge::new("e4", "app2", "cache1"),
        Edge::new("e5", "cache1", "db1"),
    ];

    TopologyStore::initialize(nodes, edges).expect("seed topology is valid")
}
