//! All-pairs shortest paths via Floyd-Warshall.

use std::collections::BTreeMap;

use lattice_core::{NodeId, Weight};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::store::Graph;

/// Distance and next-hop matrices for every vertex pair.
///
/// Negative edge weights are tolerated; a negative cycle invalidates the
/// whole result instead of leaking partially-correct distances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllPairsShortestPaths {
    /// Vertex keys in ascending order; matrix row/column `i` belongs to
    /// `keys[i]`.
    keys: Vec<NodeId>,
    index: BTreeMap<NodeId, usize>,
    /// `dist[i][j]` is the shortest-path weight, `None` when unreachable.
    dist: Vec<Vec<Option<Weight>>>,
    /// `next[i][j]` is the matrix index of the first hop on a shortest path.
    next: Vec<Vec<Option<usize>>>,
    is_valid: bool,
    message: Option<String>,
}

impl AllPairsShortestPaths {
    /// Run Floyd-Warshall over the graph.
    ///
    /// The diagonal is seeded with zero and each pair with the cheapest
    /// direct edge (mirrored when the graph is undirected). A negative
    /// diagonal entry after relaxation means a negative cycle; the matrices
    /// are then cleared and the result marked invalid.
    #[must_use]
    pub fn compute(graph: &Graph) -> Self {
        let keys: Vec<NodeId> = graph.node_ids().collect();
        let index: BTreeMap<NodeId, usize> =
            keys.iter().enumerate().map(|(i, &id)| (id, i)).collect();
        let n = keys.len();

        let mut dist: Vec<Vec<Option<Weight>>> = vec![vec![None; n]; n];
        let mut next: Vec<Vec<Option<usize>>> = vec![vec![None; n]; n];
        for i in 0..n {
            dist[i][i] = Some(0);
            next[i][i] = Some(i);
        }

        let directed = graph.options().directed;
        for edge in graph.edges() {
            let (Some(&i), Some(&j)) = (index.get(&edge.source), index.get(&edge.target)) else {
                continue;
            };
            // A negative self-loop lowers the diagonal below zero here and is
            // caught by the cycle check after relaxation.
            if dist[i][j].is_none_or(|d| edge.weight < d) {
                dist[i][j] = Some(edge.weight);
                next[i][j] = Some(j);
            }
            if !directed && dist[j][i].is_none_or(|d| edge.weight < d) {
                dist[j][i] = Some(edge.weight);
                next[j][i] = Some(i);
            }
        }

        for k in 0..n {
            for i in 0..n {
                let Some(ik) = dist[i][k] else { continue };
                for j in 0..n {
                    let Some(kj) = dist[k][j] else { continue };
                    let through = ik + kj;
                    if dist[i][j].is_none_or(|d| through < d) {
                        dist[i][j] = Some(through);
                        next[i][j] = next[i][k];
                    }
                }
            }
        }

        let negative_cycle = (0..n).any(|i| dist[i][i].is_some_and(|d| d < 0));
        if negative_cycle {
            debug!("negative cycle detected, invalidating all-pairs result");
            return Self {
                keys,
                index,
                dist: Vec::new(),
                next: Vec::new(),
                is_valid: false,
                message: Some("graph contains a negative cycle; distances are undefined".into()),
            };
        }

        Self { keys, index, dist, next, is_valid: true, message: None }
    }

    /// Whether the matrices are usable.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Human-readable reason the result is invalid, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Vertex keys covered by the matrices, in ascending order.
    #[must_use]
    pub fn node_keys(&self) -> &[NodeId] {
        &self.keys
    }

    /// Shortest-path weight between two vertices.
    ///
    /// `None` when either key is unknown, the target is unreachable, or the
    /// result is invalid.
    #[must_use]
    pub fn distance(&self, from: NodeId, to: NodeId) -> Option<Weight> {
        if !self.is_valid {
            return None;
        }
        let i = *self.index.get(&from)?;
        let j = *self.index.get(&to)?;
        self.dist[i][j]
    }

    /// Reconstruct one shortest path as a vertex sequence.
    ///
    /// Returns `Some(vec![from])` for `from == to`; `None` when no path
    /// exists or the result is invalid.
    #[must_use]
    pub fn path(&self, from: NodeId, to: NodeId) -> Option<Vec<NodeId>> {
        if !self.is_valid {
            return None;
        }
        let mut i = *self.index.get(&from)?;
        let j = *self.index.get(&to)?;
        self.dist[i][j]?;

        let mut path = vec![self.keys[i]];
        while i != j {
            i = self.next[i][j]?;
            path.push(self.keys[i]);
        }
        Some(path)
    }
}
