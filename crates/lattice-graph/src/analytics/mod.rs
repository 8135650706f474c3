//! Graph analysis algorithms.
//!
//! Every algorithm here consumes a `&Graph` snapshot and returns a
//! self-contained result record; none of them mutate the caller's graph.
//! Iteration order is deterministic everywhere because the store keeps nodes
//! and edges in key-ordered maps.
//!
//! # Algorithms
//!
//! - [`Connectivity`] - reachability, component analysis, cycle and tree tests
//! - [`Eccentricity`] - per-vertex eccentricity, radius, diameter, center and
//!   periphery via repeated Dijkstra
//! - [`AllPairsShortestPaths`] - Floyd-Warshall distance and next-hop
//!   matrices with path reconstruction
//! - [`NegativeCycles`] - Bellman-Ford negative-cycle enumeration
//! - [`MinimumSpanningTree`] - Prim's algorithm over an undirected copy
//! - [`MaxFlow`] - Edmonds-Karp maximum flow with min-cut extraction
//! - [`degree`] - per-node degree queries
//! - [`reduction`] - pendant-node removal and tree-candidate search
//!
//! # Algorithm comparison
//!
//! | Algorithm | Answers | Time complexity |
//! |-----------|---------|-----------------|
//! | Connectivity | Is it one piece? A tree? | O(V + E) |
//! | Eccentricity | How far is the farthest vertex? | O(V * E log V) |
//! | All-pairs | Distance between every pair | O(V^3) |
//! | Negative cycles | Any cycle with negative total weight? | O(V^2 * E) |
//! | Spanning tree | Cheapest connecting skeleton | O(V^2 * E) |
//! | Max flow | Throughput between two vertices | O(V * E^2) |

mod all_pairs;
mod connectivity;
pub mod degree;
mod eccentricity;
mod max_flow;
mod negative_cycles;
pub mod reduction;
mod spanning_tree;

pub use all_pairs::AllPairsShortestPaths;
pub use connectivity::{ComponentAnalysis, Connectivity};
pub use eccentricity::{Eccentricity, EccentricityResult};
pub use max_flow::{FlowEdge, MaxFlow, MaxFlowResult};
pub use negative_cycles::{NegativeCycle, NegativeCycleReport, NegativeCycles};
pub use spanning_tree::{MinimumSpanningTree, SpanningTree};
