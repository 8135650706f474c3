//! Maximum flow via Edmonds-Karp (BFS-restricted Ford-Fulkerson).

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use lattice_core::{NodeId, Weight};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::store::{Graph, GraphError, GraphResult};

/// Maximum-flow computation.
pub struct MaxFlow;

/// Flow assigned to one capacity edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowEdge {
    /// Flow direction origin.
    pub source: NodeId,
    /// Flow direction destination.
    pub target: NodeId,
    /// Units of flow pushed along this direction.
    pub flow: Weight,
    /// Capacity of the direction.
    pub capacity: Weight,
}

/// Result of a maximum-flow computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaxFlowResult {
    /// Total flow pushed from source to sink.
    pub max_flow: Weight,
    /// The flow source.
    pub source: NodeId,
    /// The flow sink.
    pub sink: NodeId,
    /// Per-direction flow assignments carrying positive flow, ordered by
    /// (source, target) key.
    pub flow_edges: Vec<FlowEdge>,
    /// Vertices on the source side of a minimum cut, ascending key order.
    pub min_cut: Vec<NodeId>,
    /// Explanation when no flow could be pushed.
    pub message: Option<String>,
}

impl MaxFlow {
    /// Compute the maximum flow from `source` to `sink`.
    ///
    /// Each edge contributes `max(weight, 1)` of forward capacity, so zero
    /// and negative weights still give a usable unit-capacity network. An
    /// undirected edge provides that capacity in both directions.
    ///
    /// Augmenting paths are found by breadth-first search, so each
    /// iteration uses a fewest-edges path. The minimum cut is the set of
    /// vertices still reachable from the source in the final residual
    /// network.
    ///
    /// # Errors
    ///
    /// - [`GraphError::NodeNotFound`] if either endpoint is absent
    /// - [`GraphError::InvalidFlowEndpoints`] if `source == sink`
    pub fn compute(graph: &Graph, source: NodeId, sink: NodeId) -> GraphResult<MaxFlowResult> {
        graph.node(source)?;
        graph.node(sink)?;
        if source == sink {
            return Err(GraphError::InvalidFlowEndpoints(source));
        }

        // Forward capacities per ordered pair; parallel edges accumulate.
        let mut capacity: BTreeMap<(NodeId, NodeId), Weight> = BTreeMap::new();
        let directed = graph.options().directed;
        for edge in graph.edges() {
            if edge.is_loop() {
                continue;
            }
            let cap = edge.weight.max(1);
            *capacity.entry((edge.source, edge.target)).or_insert(0) += cap;
            if !directed {
                *capacity.entry((edge.target, edge.source)).or_insert(0) += cap;
            }
        }

        let mut residual: BTreeMap<NodeId, BTreeMap<NodeId, Weight>> = BTreeMap::new();
        for (&(from, to), &cap) in &capacity {
            *residual.entry(from).or_default().entry(to).or_insert(0) += cap;
            // Reverse direction must exist for flow cancellation.
            residual.entry(to).or_default().entry(from).or_insert(0);
        }

        let mut flow: BTreeMap<(NodeId, NodeId), Weight> = BTreeMap::new();
        let mut max_flow: Weight = 0;

        while let Some(path) = Self::augmenting_path(&residual, source, sink) {
            let mut bottleneck = Weight::MAX;
            for window in path.windows(2) {
                let available = residual
                    .get(&window[0])
                    .and_then(|m| m.get(&window[1]))
                    .copied()
                    .unwrap_or(0);
                bottleneck = bottleneck.min(available);
            }
            if bottleneck <= 0 {
                break;
            }
            debug!(bottleneck, hops = path.len() - 1, "augmenting path found");

            for window in path.windows(2) {
                let (u, v) = (window[0], window[1]);
                if let Some(forward) = residual.get_mut(&u).and_then(|m| m.get_mut(&v)) {
                    *forward -= bottleneck;
                }
                if let Some(backward) = residual.get_mut(&v).and_then(|m| m.get_mut(&u)) {
                    *backward += bottleneck;
                }
                // Pushing against an original direction cancels earlier flow.
                if capacity.contains_key(&(u, v)) {
                    *flow.entry((u, v)).or_insert(0) += bottleneck;
                } else {
                    *flow.entry((v, u)).or_insert(0) -= bottleneck;
                }
            }
            max_flow += bottleneck;
        }

        // With antiparallel real arcs a push can be booked forward on one
        // direction instead of cancelling the other; net each pair so no
        // reported flow exceeds its capacity.
        let pairs: Vec<(NodeId, NodeId)> = flow.keys().copied().collect();
        for (u, v) in pairs {
            if u >= v {
                continue;
            }
            let forward = flow.get(&(u, v)).copied().unwrap_or(0);
            let backward = flow.get(&(v, u)).copied().unwrap_or(0);
            if forward > 0 && backward > 0 {
                let cancelled = forward.min(backward);
                flow.insert((u, v), forward - cancelled);
                flow.insert((v, u), backward - cancelled);
            }
        }

        let flow_edges: Vec<FlowEdge> = flow
            .iter()
            .filter(|(_, &f)| f > 0)
            .map(|(&(from, to), &f)| FlowEdge {
                source: from,
                target: to,
                flow: f,
                capacity: capacity.get(&(from, to)).copied().unwrap_or(0),
            })
            .collect();

        let min_cut: Vec<NodeId> = Self::residual_reachable(&residual, source).into_iter().collect();

        let message = if max_flow == 0 {
            Some("no augmenting path from source to sink".into())
        } else {
            None
        };

        Ok(MaxFlowResult { max_flow, source, sink, flow_edges, min_cut, message })
    }

    /// Fewest-edges path with positive residual capacity, or `None`.
    fn augmenting_path(
        residual: &BTreeMap<NodeId, BTreeMap<NodeId, Weight>>,
        source: NodeId,
        sink: NodeId,
    ) -> Option<Vec<NodeId>> {
        let mut parent: BTreeMap<NodeId, NodeId> = BTreeMap::new();
        let mut visited: BTreeSet<NodeId> = BTreeSet::new();
        let mut queue: VecDeque<NodeId> = VecDeque::new();
        visited.insert(source);
        queue.push_back(source);

        'search: while let Some(node) = queue.pop_front() {
            let Some(neighbors) = residual.get(&node) else {
                continue;
            };
            for (&next, &cap) in neighbors {
                if cap <= 0 || !visited.insert(next) {
                    continue;
                }
                parent.insert(next, node);
                if next == sink {
                    break 'search;
                }
                queue.push_back(next);
            }
        }

        if !parent.contains_key(&sink) {
            return None;
        }
        let mut path = vec![sink];
        let mut cursor = sink;
        while cursor != source {
            cursor = *parent.get(&cursor)?;
            path.push(cursor);
        }
        path.reverse();
        Some(path)
    }

    /// Vertices reachable from `start` over positive residual capacity.
    fn residual_reachable(
        residual: &BTreeMap<NodeId, BTreeMap<NodeId, Weight>>,
        start: NodeId,
    ) -> BTreeSet<NodeId> {
        let mut visited: BTreeSet<NodeId> = BTreeSet::new();
        let mut queue: VecDeque<NodeId> = VecDeque::new();
        visited.insert(start);
        queue.push_back(start);
        while let Some(node) = queue.pop_front() {
            let Some(neighbors) = residual.get(&node) else {
                continue;
            };
            for (&next, &cap) in neighbors {
                if cap > 0 && visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        visited
    }
}
