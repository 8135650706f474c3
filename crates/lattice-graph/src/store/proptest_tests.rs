//! Property-based tests for graph store invariants.
//!
//! Applies random mutation sequences and checks that the structural
//! invariants hold afterwards: edges only reference live nodes, the
//! multi-edge policy is enforced, and the adjacency mapping always matches
//! a fresh recomputation from the edge set.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use lattice_core::{Edge, EdgeId, Node, NodeId};

use super::{Graph, GraphOptions};

/// A single randomized mutation.
#[derive(Debug, Clone)]
enum Op {
    AddNode(u8),
    RemoveNode(u8),
    AddEdge { id: u8, source: u8, target: u8, weight: i8 },
    RemoveEdge(u8),
    SetOptions { directed: bool, allow_multi: bool },
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..16u8).prop_map(Op::AddNode),
        (0..16u8).prop_map(Op::RemoveNode),
        (0..32u8, 0..16u8, 0..16u8, any::<i8>()).prop_map(|(id, source, target, weight)| {
            Op::AddEdge { id, source, target, weight }
        }),
        (0..32u8).prop_map(Op::RemoveEdge),
        (any::<bool>(), any::<bool>())
            .prop_map(|(directed, allow_multi)| Op::SetOptions { directed, allow_multi }),
    ]
}

fn apply(graph: &mut Graph, op: Op) {
    match op {
        Op::AddNode(id) => {
            let _ = graph.add_node(Node::new(NodeId::new(u64::from(id))));
        }
        Op::RemoveNode(id) => {
            let _ = graph.remove_node(NodeId::new(u64::from(id)));
        }
        Op::AddEdge { id, source, target, weight } => {
            let _ = graph.add_edge(Edge::new(
                EdgeId::new(u64::from(id)),
                NodeId::new(u64::from(source)),
                NodeId::new(u64::from(target)),
                i64::from(weight),
            ));
        }
        Op::RemoveEdge(id) => {
            let _ = graph.remove_edge(EdgeId::new(u64::from(id)));
        }
        Op::SetOptions { directed, allow_multi } => {
            graph.set_options(GraphOptions { directed, allow_multi });
        }
    }
}

/// Neighbor list recomputed directly from the public edge iterator.
fn expected_neighbors(graph: &Graph, id: NodeId) -> Vec<NodeId> {
    let directed = graph.options().directed;
    let mut neighbors = Vec::new();
    for edge in graph.edges() {
        if edge.source == id {
            neighbors.push(edge.target);
        }
        if !directed && edge.target == id && !edge.is_loop() {
            neighbors.push(edge.source);
        }
    }
    neighbors.sort_unstable();
    neighbors
}

proptest! {
    #[test]
    fn invariants_hold_after_random_mutations(ops in prop::collection::vec(arb_op(), 0..60)) {
        let mut graph = Graph::default();
        for op in ops {
            apply(&mut graph, op);
        }

        // Every edge references live nodes.
        for edge in graph.edges() {
            prop_assert!(graph.contains_node(edge.source));
            prop_assert!(graph.contains_node(edge.target));
        }

        // Multi-edge policy: at most one edge per pair when disabled.
        if !graph.options().allow_multi {
            let directed = graph.options().directed;
            let mut pairs: Vec<(NodeId, NodeId)> = graph
                .edges()
                .map(|e| {
                    if directed || e.source <= e.target {
                        (e.source, e.target)
                    } else {
                        (e.target, e.source)
                    }
                })
                .collect();
            let total = pairs.len();
            pairs.sort_unstable();
            pairs.dedup();
            prop_assert_eq!(pairs.len(), total);
        }

        // Adjacency is exactly what a fresh recomputation yields.
        for id in graph.node_ids().collect::<Vec<_>>() {
            let expected = expected_neighbors(&graph, id);
            prop_assert_eq!(graph.neighbors(id), expected.as_slice());
        }
    }

    #[test]
    fn clone_shares_no_storage(ops in prop::collection::vec(arb_op(), 0..40)) {
        let mut graph = Graph::default();
        for op in ops {
            apply(&mut graph, op);
        }

        let snapshot = graph.clone();
        let mut copy = graph.clone();
        let ids: Vec<NodeId> = copy.node_ids().collect();
        for id in ids {
            let _ = copy.remove_node(id);
        }

        prop_assert_eq!(graph, snapshot);
    }
}
