//! Edge types for the graph.
//!
//! An [`Edge`] is stored as an ordered `(source, target)` pair with an
//! integer weight. Whether it behaves as a directed arc or an undirected
//! connection is decided by the owning graph's directedness option; an
//! undirected connection is never materialized as a second stored edge.
//!
//! # Example
//!
//! ```
//! use lattice_core::{Edge, EdgeId, NodeId};
//!
//! let edge = Edge::new(EdgeId::new(1), NodeId::new(1), NodeId::new(2), 5)
//!     .with_label("river crossing");
//!
//! assert_eq!(edge.weight, 5);
//! ```

use serde::{Deserialize, Serialize};

use super::{EdgeId, NodeId, Weight};

/// An edge between two nodes in the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Unique identifier for this edge.
    pub id: EdgeId,
    /// The source node ID.
    pub source: NodeId,
    /// The target node ID.
    pub target: NodeId,
    /// Integer weight. Algorithms that cannot accept negative weights
    /// validate this up front and fail loudly rather than skipping edges.
    pub weight: Weight,
    /// Optional display label.
    pub label: Option<String>,
}

impl Edge {
    /// Create a new edge between two nodes.
    #[must_use]
    pub const fn new(id: EdgeId, source: NodeId, target: NodeId, weight: Weight) -> Self {
        Self { id, source, target, weight, label: None }
    }

    /// Attach a display label to this edge.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns `true` if this edge starts and ends on the same node.
    #[inline]
    #[must_use]
    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }

    /// Returns `true` if this edge connects `a` and `b` in either direction.
    #[inline]
    #[must_use]
    pub fn connects(&self, a: NodeId, b: NodeId) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_builder() {
        let edge = Edge::new(EdgeId::new(1), NodeId::new(1), NodeId::new(2), -3).with_label("x");
        assert_eq!(edge.id, EdgeId::new(1));
        assert_eq!(edge.weight, -3);
        assert_eq!(edge.label.as_deref(), Some("x"));
        assert!(!edge.is_loop());
    }

    #[test]
    fn loop_detection() {
        let edge = Edge::new(EdgeId::new(1), NodeId::new(5), NodeId::new(5), 0);
        assert!(edge.is_loop());
    }

    #[test]
    fn connects_is_direction_agnostic() {
        let edge = Edge::new(EdgeId::new(1), NodeId::new(1), NodeId::new(2), 1);
        assert!(edge.connects(NodeId::new(1), NodeId::new(2)));
        assert!(edge.connects(NodeId::new(2), NodeId::new(1)));
        assert!(!edge.connects(NodeId::new(1), NodeId::new(3)));
    }
}
