//! Minimum spanning tree via Prim's algorithm.

use std::collections::BTreeSet;

use lattice_core::{Edge, NodeId, Weight};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::store::{Graph, GraphOptions};

use super::Connectivity;

/// Minimum spanning tree construction.
pub struct MinimumSpanningTree;

/// Result of a spanning-tree computation.
///
/// The record is self-contained: it carries cloned edges, so it stays usable
/// after the source graph is mutated or dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanningTree {
    /// Sum of the tree's edge weights.
    pub total_weight: Weight,
    /// Tree edges in the order Prim's algorithm selected them.
    pub edges: Vec<Edge>,
    /// `false` when the graph is disconnected and no spanning tree exists.
    pub is_possible: bool,
}

impl MinimumSpanningTree {
    /// Build a minimum spanning tree with Prim's algorithm.
    ///
    /// A directed input is first converted to an undirected working copy
    /// (the caller's graph is never touched), then checked for connectivity.
    /// A disconnected graph yields `is_possible = false` and no edges, never
    /// a partial tree. The empty graph trivially has an empty tree.
    ///
    /// Tie-breaking is deterministic: equal weights prefer the lowest edge
    /// key, then the lowest candidate vertex key.
    #[must_use]
    pub fn compute(graph: &Graph) -> SpanningTree {
        if graph.is_empty() {
            return SpanningTree { total_weight: 0, edges: Vec::new(), is_possible: true };
        }

        let mut working = graph.clone();
        working.set_options(GraphOptions {
            directed: false,
            allow_multi: working.options().allow_multi,
        });

        if !Connectivity::is_connected(&working) {
            return SpanningTree { total_weight: 0, edges: Vec::new(), is_possible: false };
        }

        let mut included: BTreeSet<NodeId> = BTreeSet::new();
        let mut edges: Vec<Edge> = Vec::new();
        let mut total_weight: Weight = 0;

        if let Some(root) = working.node_ids().next() {
            included.insert(root);
        }

        while included.len() < working.node_count() {
            let mut best: Option<(Edge, NodeId)> = None;
            for &inside in &included {
                for &outside in working.neighbors(inside) {
                    if included.contains(&outside) {
                        continue;
                    }
                    let Some(edge) = working.edge_between(inside, outside) else {
                        continue;
                    };
                    let better = match &best {
                        Some((b, bv)) => {
                            (edge.weight, edge.id, outside) < (b.weight, b.id, *bv)
                        }
                        None => true,
                    };
                    if better {
                        best = Some((edge.clone(), outside));
                    }
                }
            }
            // Unreachable for a connected graph; bail rather than loop.
            let Some((edge, vertex)) = best else {
                return SpanningTree { total_weight: 0, edges: Vec::new(), is_possible: false };
            };
            debug!(edge = %edge.id, vertex = %vertex, weight = edge.weight, "tree edge selected");
            total_weight += edge.weight;
            edges.push(edge);
            included.insert(vertex);
        }

        SpanningTree { total_weight, edges, is_possible: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lattice_core::{EdgeId, Node};

    fn undirected(edges: &[(u64, u64, u64, i64)], nodes: u64) -> Graph {
        let mut graph = Graph::default();
        for id in 1..=nodes {
            graph.add_node(Node::new(NodeId::new(id))).expect("node");
        }
        for &(id, a, b, w) in edges {
            graph
                .add_edge(Edge::new(EdgeId::new(id), NodeId::new(a), NodeId::new(b), w))
                .expect("edge");
        }
        graph
    }

    #[test]
    fn empty_graph_has_empty_tree() {
        let tree = MinimumSpanningTree::compute(&Graph::default());
        assert!(tree.is_possible);
        assert!(tree.edges.is_empty());
        assert_eq!(tree.total_weight, 0);
    }

    #[test]
    fn disconnected_graph_is_impossible() {
        let graph = undirected(&[(1, 1, 2, 1)], 3);
        let tree = MinimumSpanningTree::compute(&graph);
        assert!(!tree.is_possible);
        assert!(tree.edges.is_empty());
    }

    #[test]
    fn square_with_diagonal_drops_heaviest_edges() {
        // Square 1-2-3-4 with weights 1,2,3,4 and diagonal 1-3 weight 10.
        let graph = undirected(
            &[(1, 1, 2, 1), (2, 2, 3, 2), (3, 3, 4, 3), (4, 4, 1, 4), (5, 1, 3, 10)],
            4,
        );
        let tree = MinimumSpanningTree::compute(&graph);

        assert!(tree.is_possible);
        assert_eq!(tree.edges.len(), 3);
        assert_eq!(tree.total_weight, 6);
        let ids: Vec<EdgeId> = tree.edges.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![EdgeId::new(1), EdgeId::new(2), EdgeId::new(3)]);
    }

    #[test]
    fn equal_weights_break_ties_by_edge_key() {
        let graph = undirected(&[(7, 1, 2, 5), (3, 1, 3, 5), (9, 2, 3, 5)], 3);
        let tree = MinimumSpanningTree::compute(&graph);

        assert!(tree.is_possible);
        assert_eq!(tree.total_weight, 10);
        let ids: Vec<EdgeId> = tree.edges.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![EdgeId::new(3), EdgeId::new(7)]);
    }

    #[test]
    fn directed_input_is_treated_as_undirected_without_mutation() {
        let mut graph = Graph::new(GraphOptions { directed: true, allow_multi: false });
        for id in 1..=3 {
            graph.add_node(Node::new(NodeId::new(id))).expect("node");
        }
        // All arcs point away from 3; an undirected view is still connected.
        graph
            .add_edge(Edge::new(EdgeId::new(1), NodeId::new(3), NodeId::new(1), 2))
            .expect("edge");
        graph
            .add_edge(Edge::new(EdgeId::new(2), NodeId::new(3), NodeId::new(2), 4))
            .expect("edge");

        let before = graph.clone();
        let tree = MinimumSpanningTree::compute(&graph);

        assert!(tree.is_possible);
        assert_eq!(tree.total_weight, 6);
        assert_eq!(graph, before);
        assert!(graph.options().directed);
    }

    #[test]
    fn single_node_graph() {
        let graph = undirected(&[], 1);
        let tree = MinimumSpanningTree::compute(&graph);
        assert!(tree.is_possible);
        assert!(tree.edges.is_empty());
    }
}
