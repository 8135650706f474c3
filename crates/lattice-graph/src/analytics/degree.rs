//! Per-node degree queries.
//!
//! In a directed graph, in- and out-degree count incoming and outgoing arcs
//! separately and `degree` is their sum. In an undirected graph all three
//! count incident edges, a self-loop counting once.

use std::collections::BTreeSet;

use lattice_core::NodeId;

use crate::store::{Graph, GraphResult};

/// Number of edges arriving at `id`.
///
/// # Errors
///
/// Returns [`GraphError::NodeNotFound`](crate::store::GraphError::NodeNotFound)
/// if the node is absent.
pub fn in_degree(graph: &Graph, id: NodeId) -> GraphResult<usize> {
    graph.node(id)?;
    let count = if graph.options().directed {
        graph.edges().filter(|e| e.target == id).count()
    } else {
        incident(graph, id)
    };
    Ok(count)
}

/// Number of edges leaving `id`.
///
/// # Errors
///
/// Returns [`GraphError::NodeNotFound`](crate::store::GraphError::NodeNotFound)
/// if the node is absent.
pub fn out_degree(graph: &Graph, id: NodeId) -> GraphResult<usize> {
    graph.node(id)?;
    let count = if graph.options().directed {
        graph.edges().filter(|e| e.source == id).count()
    } else {
        incident(graph, id)
    };
    Ok(count)
}

/// Total degree of `id`.
///
/// # Errors
///
/// Returns [`GraphError::NodeNotFound`](crate::store::GraphError::NodeNotFound)
/// if the node is absent.
pub fn degree(graph: &Graph, id: NodeId) -> GraphResult<usize> {
    graph.node(id)?;
    let count = if graph.options().directed {
        graph.edges().filter(|e| e.source == id).count()
            + graph.edges().filter(|e| e.target == id).count()
    } else {
        incident(graph, id)
    };
    Ok(count)
}

/// Sorted keys of nodes with an arc into `id` (any shared edge when the
/// graph is undirected).
///
/// # Errors
///
/// Returns [`GraphError::NodeNotFound`](crate::store::GraphError::NodeNotFound)
/// if the node is absent.
pub fn incoming_neighbors(graph: &Graph, id: NodeId) -> GraphResult<Vec<NodeId>> {
    graph.node(id)?;
    let mut sources: BTreeSet<NodeId> = BTreeSet::new();
    for edge in graph.edges() {
        if edge.target == id {
            sources.insert(edge.source);
        }
        if !graph.options().directed && edge.source == id {
            sources.insert(edge.target);
        }
    }
    Ok(sources.into_iter().collect())
}

/// Keys of nodes whose in-degree is strictly below that of `target`, in
/// ascending order.
///
/// # Errors
///
/// Returns [`GraphError::NodeNotFound`](crate::store::GraphError::NodeNotFound)
/// if `target` is absent.
pub fn nodes_with_in_degree_less_than(graph: &Graph, target: NodeId) -> GraphResult<Vec<NodeId>> {
    let threshold = in_degree(graph, target)?;
    let mut below = Vec::new();
    for id in graph.node_ids() {
        if in_degree(graph, id)? < threshold {
            below.push(id);
        }
    }
    Ok(below)
}

fn incident(graph: &Graph, id: NodeId) -> usize {
    graph.edges().filter(|e| e.source == id || e.target == id).count()
}
