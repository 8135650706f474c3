//! Connectivity and structural shape analysis.
//!
//! Reachability is evaluated over the graph's adjacency mapping as stored,
//! so a directed graph is connected only when every vertex is reachable
//! following arc directions from the traversal root.

use std::collections::{BTreeSet, VecDeque};

use lattice_core::NodeId;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::store::Graph;

/// Connectivity and component analysis.
pub struct Connectivity;

/// Result of a component decomposition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentAnalysis {
    /// Number of distinct components.
    pub total_components: usize,
    /// Component sizes in discovery order (lowest unvisited key first).
    pub component_sizes: Vec<usize>,
    /// Whether the whole graph is a single component.
    pub is_connected: bool,
}

impl ComponentAnalysis {
    /// Size of the largest component, `None` for an empty graph.
    #[must_use]
    pub fn largest(&self) -> Option<usize> {
        self.component_sizes.iter().copied().max()
    }

    /// Size of the smallest component, `None` for an empty graph.
    #[must_use]
    pub fn smallest(&self) -> Option<usize> {
        self.component_sizes.iter().copied().min()
    }

    /// Number of single-node components.
    #[must_use]
    pub fn isolated_count(&self) -> usize {
        self.component_sizes.iter().filter(|&&size| size == 1).count()
    }
}

impl Connectivity {
    /// Check whether every vertex is reachable from the lowest-keyed vertex.
    ///
    /// The empty graph is connected by convention.
    #[must_use]
    pub fn is_connected(graph: &Graph) -> bool {
        let Some(start) = graph.node_ids().next() else {
            return true;
        };
        Self::reach_from(graph, start).len() == graph.node_count()
    }

    /// Decompose the graph into components by repeated traversal.
    ///
    /// Each component is discovered from its lowest-keyed unvisited vertex,
    /// so the reported sizes are in deterministic discovery order.
    #[must_use]
    pub fn components(graph: &Graph) -> ComponentAnalysis {
        let mut visited: BTreeSet<NodeId> = BTreeSet::new();
        let mut component_sizes = Vec::new();

        for id in graph.node_ids() {
            if visited.contains(&id) {
                continue;
            }
            let reached = Self::reach_from(graph, id);
            component_sizes.push(reached.len());
            visited.extend(reached);
        }

        let total_components = component_sizes.len();
        debug!(total_components, "component decomposition complete");
        ComponentAnalysis {
            total_components,
            component_sizes,
            is_connected: total_components <= 1,
        }
    }

    /// Check whether the graph contains a cycle.
    ///
    /// Undirected graphs use a parent-tracked depth-first search: any edge
    /// back to an already-discovered vertex other than the parent closes a
    /// cycle. Directed graphs need back-edge detection instead, so a pair
    /// of antiparallel arcs counts as a cycle while a diamond of arcs does
    /// not. A self-loop is a cycle either way.
    #[must_use]
    pub fn has_cycle(graph: &Graph) -> bool {
        if graph.options().directed {
            Self::directed_cycle(graph)
        } else {
            Self::undirected_cycle(graph)
        }
    }

    fn undirected_cycle(graph: &Graph) -> bool {
        let mut visited: BTreeSet<NodeId> = BTreeSet::new();

        for root in graph.node_ids() {
            if visited.contains(&root) {
                continue;
            }
            let mut stack: Vec<(NodeId, Option<NodeId>)> = vec![(root, None)];
            visited.insert(root);
            while let Some((node, parent)) = stack.pop() {
                for &next in graph.neighbors(node) {
                    if next == node {
                        return true;
                    }
                    if Some(next) == parent {
                        continue;
                    }
                    if visited.contains(&next) {
                        return true;
                    }
                    visited.insert(next);
                    stack.push((next, Some(node)));
                }
            }
        }
        false
    }

    /// Depth-first search tracking the vertices on the current path; an arc
    /// into that set is a back edge and closes a directed cycle.
    fn directed_cycle(graph: &Graph) -> bool {
        let mut finished: BTreeSet<NodeId> = BTreeSet::new();
        let mut on_path: BTreeSet<NodeId> = BTreeSet::new();

        for root in graph.node_ids() {
            if finished.contains(&root) {
                continue;
            }
            let mut stack: Vec<(NodeId, bool)> = vec![(root, false)];
            while let Some((node, expanded)) = stack.pop() {
                if expanded {
                    on_path.remove(&node);
                    finished.insert(node);
                    continue;
                }
                if finished.contains(&node) || !on_path.insert(node) {
                    continue;
                }
                stack.push((node, true));
                for &next in graph.neighbors(node) {
                    if on_path.contains(&next) {
                        return true;
                    }
                    if !finished.contains(&next) {
                        stack.push((next, false));
                    }
                }
            }
        }
        false
    }

    /// Check whether the graph is a tree.
    ///
    /// A tree has exactly `node_count - 1` edges, is connected, and is
    /// acyclic. The empty graph is trivially a tree.
    #[must_use]
    pub fn is_tree(graph: &Graph) -> bool {
        if graph.is_empty() {
            return true;
        }
        graph.edge_count() == graph.node_count() - 1
            && Self::is_connected(graph)
            && !Self::has_cycle(graph)
    }

    /// Breadth-first reachability set from `start`.
    fn reach_from(graph: &Graph, start: NodeId) -> BTreeSet<NodeId> {
        let mut visited: BTreeSet<NodeId> = BTreeSet::new();
        let mut queue: VecDeque<NodeId> = VecDeque::new();
        visited.insert(start);
        queue.push_back(start);

        while let Some(node) = queue.pop_front() {
            for &next in graph.neighbors(node) {
                if visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        visited
    }
}
