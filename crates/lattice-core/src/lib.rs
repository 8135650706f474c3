//! Lattice Core
//!
//! This crate provides the fundamental types shared by the `lattice`
//! workspace: node and edge identifiers and the node/edge records themselves.
//!
//! # Overview
//!
//! - **Identifiers**: [`NodeId`] and [`EdgeId`] for referencing graph elements
//! - **Graph primitives**: [`Node`] and [`Edge`] (a weighted directed arc)
//!
//! Whether an [`Edge`] is traversed as a directed arc or an undirected
//! connection is decided by the owning graph's options, not by the edge
//! record itself.
//!
//! # Example
//!
//! ```
//! use lattice_core::{Edge, EdgeId, Node, NodeId};
//!
//! let a = Node::new(NodeId::new(1)).with_label("warehouse");
//! let b = Node::new(NodeId::new(2)).with_label("depot");
//!
//! let road = Edge::new(EdgeId::new(1), a.id, b.id, 12).with_label("M4");
//!
//! assert_eq!(road.source, a.id);
//! assert_eq!(road.target, b.id);
//! assert_eq!(road.weight, 12);
//! ```

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod types;

pub use types::{Edge, EdgeId, Node, NodeId, Weight};
