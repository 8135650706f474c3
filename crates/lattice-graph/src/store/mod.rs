//! In-memory graph storage.
//!
//! This module provides the [`Graph`] type: keyed node and edge stores, the
//! derived adjacency mapping, and validated mutation operations.
//!
//! # Overview
//!
//! - [`Graph`] - node/edge maps, adjacency, options, mutation and query ops
//! - [`GraphOptions`] - directedness and multi-edge policy
//! - [`GraphError`] / [`GraphResult`] - validation failures
//!
//! # Example
//!
//! ```
//! use lattice_core::{Edge, EdgeId, Node, NodeId};
//! use lattice_graph::store::{Graph, GraphOptions};
//!
//! let mut graph = Graph::new(GraphOptions { directed: true, allow_multi: false });
//!
//! graph.add_node(Node::new(NodeId::new(1)).with_label("a"))?;
//! graph.add_node(Node::new(NodeId::new(2)).with_label("b"))?;
//! graph.add_edge(Edge::new(EdgeId::new(1), NodeId::new(1), NodeId::new(2), 4))?;
//!
//! assert_eq!(graph.neighbors(NodeId::new(1)), &[NodeId::new(2)]);
//! # Ok::<(), lattice_graph::store::GraphError>(())
//! ```

mod error;
mod graph;

#[cfg(test)]
mod proptest_tests;

pub use error::{GraphError, GraphResult};
pub use graph::{Graph, GraphOptions};
