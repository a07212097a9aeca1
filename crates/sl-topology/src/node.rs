//! Node data for the infrastructure topology.

use core::fmt;
use serde::{Deserialize, Serialize};

/// Kind of infrastructure element a node represents.
///
/// Fixed at creation; the wire names match what the evaluation
/// service expects in a blueprint entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    LoadBalancer,
    AppServer,
    Cache,
    Database,
}

impl NodeKind {
    /// Wire name of this kind (`load_balancer`, `app_server`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::LoadBalancer => "load_balancer",
            NodeKind::AppServer => "app_server",
            NodeKind::Cache => "cache",
            NodeKind::Database => "database",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Live health of a node, as reported by the last evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeStatus {
    /// No evaluation has touched this node yet.
    #[default]
    Idle,
    /// Within capacity.
    Nominal,
    /// Past sustainable load.
    Overloaded,
}

impl fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeStatus::Idle => "Idle",
            NodeStatus::Nominal => "Nominal",
            NodeStatus::Overloaded => "Overloaded",
        };
        f.pad(name)
    }
}

/// One infrastructure element in the topology.
///
/// `latency` (milliseconds) and `status` are the only fields that
/// change after initialization; the store overwrites them during
/// reconciliation and nothing else touches them. `capacity` is read
/// only when building a request blueprint.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: String,
    pub kind: NodeKind,
    pub latency: f64,
    pub status: NodeStatus,
    pub capacity: u32,
    pub label: String,
    pub description: String,
}

impl Node {
    /// Create a node in its initial state (latency 0, status Idle).
    pub fn new(
        id: impl Into<String>,
        kind: NodeKind,
        capacity: u32,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            latency: 0.0,
            status: NodeStatus::Idle,
            capacity,
            label: label.into(),
            description: description.into(),
        }
    }
}
