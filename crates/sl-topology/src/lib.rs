//! sl-topology: topology model layer for scalelab.
//!
//! Provides:
//! - Node and edge data structures with live visual state
//! - The topology store (single source of truth for the renderer)
//! - The seeded lab topology
//!
//! # Example
//!
//! ```
//! use sl_topology::default_topology;
//!
//! let store = default_topology();
//!
//! assert_eq!(store.nodes().len(), 5);
//! assert_eq!(store.edges().len(), 5);
//! assert!(store.get_node("lb1").is_some());
//! ```

pub mod edge;
pub mod error;
pub mod node;
pub mod seed;
pub mod store;

// Re-exports for ergonomics
pub use edge::{ALERT_RED, Edge, EdgeStyle, NEUTRAL_DARK};
pub use error::{TopologyError, TopologyResult};
pub use node::{Node, NodeKind, NodeStatus};
pub use seed::default_topology;
pub use store::TopologyStore;
