//! sl-reconcile: merge a simulation result into live visual state.
//!
//! Node readings are applied first, then every edge is restyled from
//! its target node's post-merge status. The derivation is a pure
//! function of (edge list, node statuses) and is recomputed in full on
//! every reconciliation: a single status flip can recolor several
//! edges, and the topology is small enough that diffing buys nothing.

pub mod reconcile;

pub use reconcile::{reconcile, style_for_target};
