//! Error types for graph storage and algorithm input validation.

use lattice_core::{EdgeId, NodeId, Weight};
use thiserror::Error;

/// Errors that can occur in graph operations.
///
/// These are hard validation failures surfaced immediately to the caller.
/// Algorithmically expected "no answer" outcomes (a disconnected graph for
/// the spanning tree, a negative cycle for all-pairs paths) are not errors;
/// they are reported through flags on the normal result records.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A node was not found.
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),

    /// An edge was not found.
    #[error("edge not found: {0}")]
    EdgeNotFound(EdgeId),

    /// A node with the given key already exists.
    #[error("node already exists: {0}")]
    DuplicateNode(NodeId),

    /// An edge with the given key already exists.
    #[error("edge already exists: {0}")]
    DuplicateEdge(EdgeId),

    /// An edge references a node that does not exist.
    #[error("edge {edge} references missing node {node}")]
    InvalidEndpoint {
        /// The edge being added.
        edge: EdgeId,
        /// The missing endpoint.
        node: NodeId,
    },

    /// A second edge between the same node pair was rejected because the
    /// graph does not allow parallel edges.
    ///
    /// The endpoints are named `from`/`to` rather than `source`/`target`;
    /// `thiserror` would otherwise wire a field called `source` into
    /// `Error::source()`.
    #[error("parallel edge between {from} and {to} rejected: graph does not allow multi-edges")]
    ParallelEdgeRejected {
        /// Source endpoint of the rejected edge.
        from: NodeId,
        /// Target endpoint of the rejected edge.
        to: NodeId,
    },

    /// A negative edge weight was passed to an algorithm that requires
    /// non-negative weights.
    #[error("negative weight {weight} on edge {edge} not supported by this algorithm")]
    NegativeWeight {
        /// The offending edge.
        edge: EdgeId,
        /// Its weight.
        weight: Weight,
    },

    /// Source and sink passed to the max-flow solver are the same node.
    #[error("flow source and sink must be distinct (both are {0})")]
    InvalidFlowEndpoints(NodeId),
}

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
