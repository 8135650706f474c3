//! Lattice Graph
//!
//! This crate provides the in-memory graph store and the analysis algorithms
//! built on top of it.
//!
//! # Modules
//!
//! - [`store`] - The [`Graph`](store::Graph) type: node/edge storage, derived
//!   adjacency, and validated mutation operations
//! - [`analytics`] - Analysis algorithms (connectivity, shortest paths,
//!   negative cycles, spanning tree, maximum flow)
//!
//! All algorithms consume a `&Graph` snapshot and return self-contained
//! result records; none of them mutate the caller's graph.

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod analytics;
pub mod store;
