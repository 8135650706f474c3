//! Core data types for `lattice`.
//!
//! This module defines the fundamental types that represent nodes, edges,
//! and their identifiers in the graph data model.

mod edge;
mod id;
mod node;

pub use edge::Edge;
pub use id::{EdgeId, NodeId};
pub use node::Node;

/// Edge weight type.
///
/// Weights are signed integers: shortest-path and cycle-detection algorithms
/// accept negative values where their contracts allow it.
pub type Weight = i64;
