//! Integration tests for minimum spanning tree construction.

use lattice_core::{Edge, EdgeId, Node, NodeId};
use lattice_graph::analytics::{Connectivity, MinimumSpanningTree};
use lattice_graph::store::{Graph, GraphOptions};

// ============================================================================
// Helper functions to create test graphs
// ============================================================================

fn undirected(edges: &[(u64, u64, u64, i64)], nodes: u64) -> Graph {
    let mut graph = Graph::default();
    for id in 1..=nodes {
        graph.add_node(Node::new(NodeId::new(id))).unwrap();
    }
    for &(id, a, b, w) in edges {
        graph.add_edge(Edge::new(EdgeId::new(id), NodeId::new(a), NodeId::new(b), w)).unwrap();
    }
    graph
}

/// Minimum total weight over every spanning tree, by enumerating all edge
/// subsets of size |V| - 1 and keeping the spanning ones. Only usable for
/// tiny graphs.
fn brute_force_minimum(graph: &Graph) -> Option<i64> {
    let edges: Vec<&Edge> = graph.edges().collect();
    let n = graph.node_count();
    if n == 0 {
        return Some(0);
    }
    let want = n - 1;
    let mut best: Option<i64> = None;

    for mask in 0u32..(1 << edges.len()) {
        if mask.count_ones() as usize != want {
            continue;
        }
        let mut candidate = graph.clone();
        for (i, edge) in edges.iter().enumerate() {
            if mask & (1 << i) == 0 {
                candidate.remove_edge(edge.id).unwrap();
            }
        }
        if !Connectivity::is_tree(&candidate) {
            continue;
        }
        let weight: i64 = candidate.edges().map(|e| e.weight).sum();
        best = Some(best.map_or(weight, |b| b.min(weight)));
    }
    best
}

// ============================================================================
// Optimality against exhaustive enumeration
// ============================================================================

#[test]
fn prim_matches_brute_force_on_small_graphs() {
    let graphs = vec![
        // Triangle with a heavy closing edge.
        undirected(&[(1, 1, 2, 1), (2, 2, 3, 2), (3, 1, 3, 100)], 3),
        // Complete graph on 4 vertices.
        undirected(
            &[
                (1, 1, 2, 7),
                (2, 1, 3, 2),
                (3, 1, 4, 9),
                (4, 2, 3, 3),
                (5, 2, 4, 1),
                (6, 3, 4, 5),
            ],
            4,
        ),
        // Wheel on 6 vertices with mixed weights.
        undirected(
            &[
                (1, 1, 2, 4),
                (2, 2, 3, 6),
                (3, 3, 4, 1),
                (4, 4, 5, 8),
                (5, 5, 1, 2),
                (6, 6, 1, 3),
                (7, 6, 3, 7),
                (8, 6, 5, 5),
            ],
            6,
        ),
    ];

    for graph in graphs {
        let tree = MinimumSpanningTree::compute(&graph);
        assert!(tree.is_possible);
        assert_eq!(Some(tree.total_weight), brute_force_minimum(&graph));
        assert_eq!(tree.edges.len(), graph.node_count() - 1);
    }
}

#[test]
fn tree_edges_actually_span_the_graph() {
    let graph = undirected(
        &[(1, 1, 2, 7), (2, 1, 3, 2), (3, 2, 3, 3), (4, 2, 4, 1), (5, 3, 4, 5)],
        4,
    );
    let tree = MinimumSpanningTree::compute(&graph);
    assert!(tree.is_possible);

    // Rebuild a graph from just the tree edges and check it is a tree.
    let mut skeleton = Graph::default();
    for id in graph.node_ids() {
        skeleton.add_node(Node::new(id)).unwrap();
    }
    for edge in &tree.edges {
        skeleton.add_edge(edge.clone()).unwrap();
    }
    assert!(Connectivity::is_tree(&skeleton));
    assert_eq!(tree.total_weight, 6);
}

// ============================================================================
// Edge cases
// ============================================================================

#[test]
fn disconnected_graph_yields_no_partial_tree() {
    let graph = undirected(&[(1, 1, 2, 1), (2, 3, 4, 1)], 4);
    let tree = MinimumSpanningTree::compute(&graph);

    assert!(!tree.is_possible);
    assert!(tree.edges.is_empty());
    assert_eq!(tree.total_weight, 0);
}

#[test]
fn directed_input_graph_is_left_untouched() {
    let mut graph = Graph::new(GraphOptions { directed: true, allow_multi: false });
    for id in 1..=3 {
        graph.add_node(Node::new(NodeId::new(id))).unwrap();
    }
    graph.add_edge(Edge::new(EdgeId::new(1), NodeId::new(2), NodeId::new(1), 5)).unwrap();
    graph.add_edge(Edge::new(EdgeId::new(2), NodeId::new(3), NodeId::new(2), 1)).unwrap();

    let before = graph.clone();
    let tree = MinimumSpanningTree::compute(&graph);

    assert!(tree.is_possible);
    assert_eq!(tree.total_weight, 6);
    assert_eq!(graph, before);
}

#[test]
fn antiparallel_merge_uses_the_cheaper_arc() {
    // The heavy arc has the lower key; the undirected working copy must
    // still offer the cheap one to Prim.
    let mut graph = Graph::new(GraphOptions { directed: true, allow_multi: false });
    for id in 1..=3 {
        graph.add_node(Node::new(NodeId::new(id))).unwrap();
    }
    graph.add_edge(Edge::new(EdgeId::new(1), NodeId::new(1), NodeId::new(2), 9)).unwrap();
    graph.add_edge(Edge::new(EdgeId::new(2), NodeId::new(2), NodeId::new(1), 4)).unwrap();
    graph.add_edge(Edge::new(EdgeId::new(3), NodeId::new(2), NodeId::new(3), 1)).unwrap();

    let tree = MinimumSpanningTree::compute(&graph);

    assert!(tree.is_possible);
    assert_eq!(tree.total_weight, 5);
    let ids: Vec<EdgeId> = tree.edges.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![EdgeId::new(2), EdgeId::new(3)]);
}

#[test]
fn negative_weights_are_allowed_in_spanning_trees() {
    let graph = undirected(&[(1, 1, 2, -4), (2, 2, 3, 3), (3, 1, 3, -1)], 3);
    let tree = MinimumSpanningTree::compute(&graph);

    assert!(tree.is_possible);
    assert_eq!(tree.total_weight, -5);
    let ids: Vec<EdgeId> = tree.edges.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![EdgeId::new(1), EdgeId::new(3)]);
}
