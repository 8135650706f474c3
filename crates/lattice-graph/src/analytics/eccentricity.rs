//! Eccentricity, radius and diameter via repeated Dijkstra.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap};

use lattice_core::{NodeId, Weight};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::store::{Graph, GraphError, GraphResult};

/// Eccentricity analysis over non-negative edge weights.
pub struct Eccentricity;

/// Result of an eccentricity computation.
///
/// `None` eccentricity means some vertex is unreachable from that source.
/// `None` radius and diameter mean no vertex reaches the whole graph, which
/// covers both the empty graph and a disconnected one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EccentricityResult {
    /// Per-vertex eccentricity: the distance to the farthest reachable
    /// vertex, or `None` when some vertex is unreachable.
    pub eccentricities: BTreeMap<NodeId, Option<Weight>>,
    /// Minimum finite eccentricity.
    pub radius: Option<Weight>,
    /// Maximum finite eccentricity.
    pub diameter: Option<Weight>,
    /// Vertices attaining the radius, in ascending key order.
    pub center: Vec<NodeId>,
    /// Vertices attaining the diameter, in ascending key order.
    pub periphery: Vec<NodeId>,
    /// Whether every vertex reaches every other vertex.
    pub is_connected: bool,
}

/// Heap entry ordered so the binary max-heap pops the smallest distance
/// first, ties broken by ascending node key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DijkstraEntry {
    distance: Weight,
    node: NodeId,
}

impl Ord for DijkstraEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for DijkstraEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Eccentricity {
    /// Compute eccentricities, radius, diameter, center and periphery.
    ///
    /// Runs one Dijkstra pass per vertex over the adjacency mapping, using
    /// the cheapest edge between each neighbor pair.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NegativeWeight`] if any edge has a negative
    /// weight; Dijkstra requires non-negative weights.
    pub fn compute(graph: &Graph) -> GraphResult<EccentricityResult> {
        for edge in graph.edges() {
            if edge.weight < 0 {
                return Err(GraphError::NegativeWeight { edge: edge.id, weight: edge.weight });
            }
        }

        let node_count = graph.node_count();
        let mut eccentricities: BTreeMap<NodeId, Option<Weight>> = BTreeMap::new();

        for source in graph.node_ids() {
            let distances = Self::shortest_distances(graph, source);
            let eccentricity = if distances.len() == node_count {
                distances.values().copied().max()
            } else {
                None
            };
            debug!(source = %source, ?eccentricity, "eccentricity computed");
            eccentricities.insert(source, eccentricity);
        }

        let finite: Vec<Weight> = eccentricities.values().filter_map(|e| *e).collect();
        let radius = finite.iter().copied().min();
        let diameter = finite.iter().copied().max();

        let attaining = |target: Option<Weight>| -> Vec<NodeId> {
            match target {
                Some(value) => eccentricities
                    .iter()
                    .filter(|(_, &e)| e == Some(value))
                    .map(|(&id, _)| id)
                    .collect(),
                None => Vec::new(),
            }
        };

        Ok(EccentricityResult {
            center: attaining(radius),
            periphery: attaining(diameter),
            is_connected: eccentricities.values().all(Option::is_some),
            eccentricities,
            radius,
            diameter,
        })
    }

    /// Single-source Dijkstra; returns finite distances only.
    fn shortest_distances(graph: &Graph, source: NodeId) -> BTreeMap<NodeId, Weight> {
        let mut distances: BTreeMap<NodeId, Weight> = BTreeMap::new();
        let mut heap: BinaryHeap<DijkstraEntry> = BinaryHeap::new();
        distances.insert(source, 0);
        heap.push(DijkstraEntry { distance: 0, node: source });

        while let Some(DijkstraEntry { distance, node }) = heap.pop() {
            // Stale entry left over from an earlier relaxation.
            if distances.get(&node).is_some_and(|&d| d < distance) {
                continue;
            }
            for &next in graph.neighbors(node) {
                let Some(edge) = graph.edge_between(node, next) else {
                    continue;
                };
                let candidate = distance + edge.weight;
                if distances.get(&next).is_none_or(|&d| candidate < d) {
                    distances.insert(next, candidate);
                    heap.push(DijkstraEntry { distance: candidate, node: next });
                }
            }
        }
        distances
    }
}
