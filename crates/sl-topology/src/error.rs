//! Topology validation errors.

use thiserror::Error;

pub type TopologyResult<T> = Result<T, TopologyError>;

/// Errors raised when seeding the topology store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyError {
    #[error("duplicate node id: {id}")]
    DuplicateNode { id: String },

    #[error("duplicate edge id: {id}")]
    DuplicateEdge { id: String },

    #[error("edge {edge} references unknown node: {node}")]
    UnknownEndpoint { edge: String, node: String },
}
