//! Node types for the graph.
//!
//! # Example
//!
//! ```
//! use lattice_core::{Node, NodeId};
//!
//! let node = Node::new(NodeId::new(1)).with_label("Saratov");
//!
//! assert_eq!(node.id.as_u64(), 1);
//! assert_eq!(node.label.as_deref(), Some("Saratov"));
//! ```

use serde::{Deserialize, Serialize};

use super::NodeId;

/// A node (vertex) in the graph.
///
/// Nodes carry a unique key and an optional human-readable label used by
/// presentation layers. All structural information (incident edges,
/// neighbors) lives in the owning graph, not on the node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier for this node.
    pub id: NodeId,
    /// Optional display label.
    pub label: Option<String>,
}

impl Node {
    /// Create a new unlabeled node with the given ID.
    #[must_use]
    pub const fn new(id: NodeId) -> Self {
        Self { id, label: None }
    }

    /// Attach a display label to this node.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}
