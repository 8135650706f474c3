//! Negative-cycle detection via Bellman-Ford predecessor chains.

use std::collections::{BTreeMap, BTreeSet};

use lattice_core::{EdgeId, NodeId, Weight};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::store::Graph;

/// Negative-cycle enumeration.
pub struct NegativeCycles;

/// One cycle with negative total weight.
///
/// `vertices` is the forward traversal order rotated to start at the lowest
/// vertex key; `edges[i]` connects `vertices[i]` to `vertices[(i + 1) % len]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NegativeCycle {
    /// Cycle vertices in forward order, starting at the minimum key.
    pub vertices: Vec<NodeId>,
    /// Cycle edges aligned with `vertices`.
    pub edges: Vec<EdgeId>,
    /// Sum of the cycle's edge weights, always negative.
    pub total_weight: Weight,
}

/// Result of a negative-cycle search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct NegativeCycleReport {
    /// Distinct negative cycles found, in discovery order.
    pub cycles: Vec<NegativeCycle>,
    /// Explanation when the search could not run.
    pub message: Option<String>,
}

impl NegativeCycles {
    /// Search for negative cycles from every start vertex.
    ///
    /// Only directed graphs are searched: in an undirected graph every
    /// negative edge forms a spurious two-vertex "cycle" with itself, so the
    /// question is not well posed and an empty report with a message is
    /// returned instead.
    ///
    /// Cycles found from different start vertices are deduplicated by
    /// rotating each to its minimum vertex key and comparing the rotated
    /// vertex sequences.
    #[must_use]
    pub fn find(graph: &Graph) -> NegativeCycleReport {
        if !graph.options().directed {
            return NegativeCycleReport {
                cycles: Vec::new(),
                message: Some("negative-cycle search requires a directed graph".into()),
            };
        }

        let mut cycles: Vec<NegativeCycle> = Vec::new();
        let mut seen: BTreeSet<Vec<NodeId>> = BTreeSet::new();

        for start in graph.node_ids() {
            for cycle in Self::search_from(graph, start) {
                if seen.insert(cycle.vertices.clone()) {
                    debug!(start = %start, weight = cycle.total_weight, "negative cycle found");
                    cycles.push(cycle);
                }
            }
        }

        NegativeCycleReport { cycles, message: None }
    }

    /// Bellman-Ford from one start vertex; traces every still-relaxable
    /// edge, so coexisting cycles in one reachable component are all found.
    fn search_from(graph: &Graph, start: NodeId) -> Vec<NegativeCycle> {
        let node_count = graph.node_count();
        let mut dist: BTreeMap<NodeId, Weight> = BTreeMap::new();
        let mut prev: BTreeMap<NodeId, (NodeId, EdgeId)> = BTreeMap::new();
        dist.insert(start, 0);

        for _ in 1..node_count {
            let mut changed = false;
            for edge in graph.edges() {
                let Some(&from) = dist.get(&edge.source) else {
                    continue;
                };
                let candidate = from + edge.weight;
                if dist.get(&edge.target).is_none_or(|&d| candidate < d) {
                    dist.insert(edge.target, candidate);
                    prev.insert(edge.target, (edge.source, edge.id));
                    changed = true;
                }
            }
            if !changed {
                return Vec::new();
            }
        }

        // One more pass: any edge still relaxable lies on or downstream of a
        // negative cycle. Trace each one; duplicates fall out of the
        // caller's rotation-based dedup.
        let mut found = Vec::new();
        for edge in graph.edges() {
            let Some(&from) = dist.get(&edge.source) else {
                continue;
            };
            if dist.get(&edge.target).is_none_or(|&d| from + edge.weight < d) {
                prev.insert(edge.target, (edge.source, edge.id));
                if let Some(cycle) = Self::reconstruct(graph, &prev, edge.target, node_count) {
                    found.push(cycle);
                }
            }
        }
        found
    }

    /// Walk predecessor links back into the cycle and collect it in forward
    /// order, rotated to start at the minimum vertex key.
    fn reconstruct(
        graph: &Graph,
        prev: &BTreeMap<NodeId, (NodeId, EdgeId)>,
        from: NodeId,
        node_count: usize,
    ) -> Option<NegativeCycle> {
        // node_count backward steps are guaranteed to land inside the cycle.
        let mut inside = from;
        for _ in 0..node_count {
            inside = prev.get(&inside)?.0;
        }

        let mut backward = vec![inside];
        let mut cursor = prev.get(&inside)?.0;
        while cursor != inside {
            backward.push(cursor);
            cursor = prev.get(&cursor)?.0;
        }
        if backward.len() < 2 {
            return None;
        }
        backward.reverse();
        let mut vertices = backward;

        let len = vertices.len();
        let mut edges = Vec::with_capacity(len);
        for i in 0..len {
            let successor = vertices[(i + 1) % len];
            edges.push(prev.get(&successor)?.1);
        }

        // Rotate vertices and edges in lockstep so edge i still connects
        // vertex i to vertex i + 1 after normalization.
        let pivot = vertices.iter().enumerate().min_by_key(|(_, &id)| id).map(|(i, _)| i)?;
        vertices.rotate_left(pivot);
        edges.rotate_left(pivot);

        let mut total_weight: Weight = 0;
        for &id in &edges {
            total_weight += graph.edge(id).ok()?.weight;
        }
        if total_weight >= 0 {
            return None;
        }

        Some(NegativeCycle { vertices, edges, total_weight })
    }
}
