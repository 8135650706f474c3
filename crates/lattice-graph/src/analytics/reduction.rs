//! Structural reductions evaluated on throwaway copies.

use lattice_core::NodeId;
use tracing::debug;

use crate::store::Graph;

use super::{degree, Connectivity};

/// Copy of the graph with every pendant (degree-1) node removed.
///
/// Pendant status is decided against the input graph in a single pass, so a
/// chain loses only its endpoints, not the whole chain. The input is never
/// mutated.
#[must_use]
pub fn remove_pendant_nodes(graph: &Graph) -> Graph {
    let pendants: Vec<NodeId> = graph
        .node_ids()
        .filter(|&id| matches!(degree::degree(graph, id), Ok(1)))
        .collect();
    debug!(count = pendants.len(), "removing pendant nodes");

    let mut reduced = graph.clone();
    for id in pendants {
        // Known to exist; removal cascades to the pendant edge.
        let _ = reduced.remove_node(id);
    }
    reduced
}

/// Keys of nodes whose removal turns the graph into a tree.
///
/// Each candidate is tested on its own copy; the input is never mutated.
#[must_use]
pub fn tree_candidates(graph: &Graph) -> Vec<NodeId> {
    let mut candidates = Vec::new();
    for id in graph.node_ids() {
        let mut trial = graph.clone();
        if trial.remove_node(id).is_ok() && Connectivity::is_tree(&trial) {
            candidates.push(id);
        }
    }
    candidates
}
