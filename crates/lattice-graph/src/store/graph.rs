//! The graph store: node and edge maps plus the derived adjacency mapping.

use std::collections::BTreeMap;

use lattice_core::{Edge, EdgeId, Node, NodeId, Weight};
use serde::{Deserialize, Serialize};

use super::{GraphError, GraphResult};

/// Graph-wide options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphOptions {
    /// Whether edges are traversed as directed arcs. When `false`, every
    /// stored edge is treated as connecting both endpoints symmetrically.
    pub directed: bool,
    /// Whether parallel edges between the same node pair are allowed.
    pub allow_multi: bool,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self { directed: false, allow_multi: false }
    }
}

/// An in-memory graph.
///
/// Nodes and edges live in key-ordered maps; the adjacency mapping is a
/// derived structure, always recomputed from the current edge set and the
/// directedness flag after a structural mutation. Key-ordered storage makes
/// every iteration (and therefore every algorithm built on top) fully
/// deterministic.
///
/// Cloning a `Graph` produces a deep copy: the clone owns independent node,
/// edge, and adjacency maps, so mutating it never affects the original. The
/// spanning-tree builder relies on this to work against a throwaway
/// undirected copy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    nodes: BTreeMap<NodeId, Node>,
    edges: BTreeMap<EdgeId, Edge>,
    adjacency: BTreeMap<NodeId, Vec<NodeId>>,
    options: GraphOptions,
}

impl Graph {
    /// Create an empty graph with the given options.
    #[must_use]
    pub fn new(options: GraphOptions) -> Self {
        Self { options, ..Self::default() }
    }

    /// Current graph options.
    #[inline]
    #[must_use]
    pub fn options(&self) -> GraphOptions {
        self.options
    }

    /// Update the graph options in place.
    ///
    /// The adjacency mapping (and, when parallel edges become forbidden or
    /// directedness changes, the edge table) is rebuilt only if `directed`
    /// or `allow_multi` actually changes value; otherwise this is a no-op.
    ///
    /// When the update leaves the graph without multi-edge support, edges
    /// that now collide on the same (ordered or unordered) node pair are
    /// dropped, keeping the cheapest edge of each pair (lowest key on equal
    /// weights).
    pub fn set_options(&mut self, options: GraphOptions) {
        if options == self.options {
            return;
        }
        self.options = options;
        if !self.options.allow_multi {
            self.enforce_single_edges();
        }
        self.rebuild_adjacency();
    }

    /// Number of nodes.
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    #[inline]
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has no nodes.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a node.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateNode`] if the key is already assigned.
    pub fn add_node(&mut self, node: Node) -> GraphResult<()> {
        if self.nodes.contains_key(&node.id) {
            return Err(GraphError::DuplicateNode(node.id));
        }
        self.adjacency.insert(node.id, Vec::new());
        self.nodes.insert(node.id, node);
        Ok(())
    }

    /// Remove a node by key, cascading to all incident edges.
    ///
    /// Returns the removed node.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the key is absent.
    pub fn remove_node(&mut self, id: NodeId) -> GraphResult<Node> {
        let node = self.nodes.remove(&id).ok_or(GraphError::NodeNotFound(id))?;
        self.edges.retain(|_, edge| edge.source != id && edge.target != id);
        self.rebuild_adjacency();
        Ok(node)
    }

    /// Add an edge.
    ///
    /// # Errors
    ///
    /// - [`GraphError::DuplicateEdge`] if the edge key is already assigned
    /// - [`GraphError::InvalidEndpoint`] if either endpoint node is absent
    /// - [`GraphError::ParallelEdgeRejected`] if the graph forbids
    ///   multi-edges and an edge between the pair already exists (unordered
    ///   pair when the graph is undirected)
    pub fn add_edge(&mut self, edge: Edge) -> GraphResult<()> {
        if self.edges.contains_key(&edge.id) {
            return Err(GraphError::DuplicateEdge(edge.id));
        }
        for endpoint in [edge.source, edge.target] {
            if !self.nodes.contains_key(&endpoint) {
                return Err(GraphError::InvalidEndpoint { edge: edge.id, node: endpoint });
            }
        }
        if !self.options.allow_multi && self.pair_occupied(edge.source, edge.target) {
            return Err(GraphError::ParallelEdgeRejected { from: edge.source, to: edge.target });
        }
        self.edges.insert(edge.id, edge);
        self.rebuild_adjacency();
        Ok(())
    }

    /// Remove an edge by key.
    ///
    /// Returns the removed edge.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EdgeNotFound`] if the key is absent.
    pub fn remove_edge(&mut self, id: EdgeId) -> GraphResult<Edge> {
        let edge = self.edges.remove(&id).ok_or(GraphError::EdgeNotFound(id))?;
        self.rebuild_adjacency();
        Ok(edge)
    }

    /// Look up a node by key.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the key is absent.
    pub fn node(&self, id: NodeId) -> GraphResult<&Node> {
        self.nodes.get(&id).ok_or(GraphError::NodeNotFound(id))
    }

    /// Look up a node by key, returning `None` if absent.
    #[inline]
    #[must_use]
    pub fn get_node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Check whether a node key is assigned.
    #[inline]
    #[must_use]
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Look up an edge by key.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EdgeNotFound`] if the key is absent.
    pub fn edge(&self, id: EdgeId) -> GraphResult<&Edge> {
        self.edges.get(&id).ok_or(GraphError::EdgeNotFound(id))
    }

    /// Look up an edge by key, returning `None` if absent.
    #[inline]
    #[must_use]
    pub fn get_edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(&id)
    }

    /// Check whether an edge key is assigned.
    #[inline]
    #[must_use]
    pub fn contains_edge(&self, id: EdgeId) -> bool {
        self.edges.contains_key(&id)
    }

    /// Iterate over all nodes in key order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Iterate over all node keys in ascending order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    /// Iterate over all edges in key order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// The neighbors directly reachable from `id`, in ascending key order.
    ///
    /// For a directed graph these are the targets of outgoing edges; for an
    /// undirected graph, every node sharing an edge with `id`. Unknown keys
    /// yield an empty slice.
    #[must_use]
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        self.adjacency.get(&id).map_or(&[], Vec::as_slice)
    }

    /// Find an edge connecting `from` to `to`, honoring directedness.
    ///
    /// When several connect the pair (multi-edge graphs), the one with the
    /// lowest `(weight, key)` wins, so callers relaxing over neighbor pairs
    /// always see the cheapest connection and tie-break deterministically.
    #[must_use]
    pub fn edge_between(&self, from: NodeId, to: NodeId) -> Option<&Edge> {
        let mut best: Option<&Edge> = None;
        for edge in self.edges.values() {
            let connects = if self.options.directed {
                edge.source == from && edge.target == to
            } else {
                edge.connects(from, to)
            };
            if !connects {
                continue;
            }
            let better = match best {
                Some(b) => (edge.weight, edge.id) < (b.weight, b.id),
                None => true,
            };
            if better {
                best = Some(edge);
            }
        }
        best
    }

    /// Whether any edge occupies the (ordered or unordered) pair.
    fn pair_occupied(&self, source: NodeId, target: NodeId) -> bool {
        let pair = self.normalize_pair(source, target);
        self.edges.values().any(|e| self.normalize_pair(e.source, e.target) == pair)
    }

    /// Pair identity under the current directedness: ordered when directed,
    /// sorted when undirected.
    fn normalize_pair(&self, a: NodeId, b: NodeId) -> (NodeId, NodeId) {
        if self.options.directed || a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// Drop edges colliding on the same pair, keeping the cheapest one,
    /// lowest key on equal weights. Weight-first selection keeps spanning
    /// trees and shortest paths over a merged undirected view minimal.
    fn enforce_single_edges(&mut self) {
        let mut keep: BTreeMap<(NodeId, NodeId), (Weight, EdgeId)> = BTreeMap::new();
        for edge in self.edges.values() {
            let pair = self.normalize_pair(edge.source, edge.target);
            let candidate = (edge.weight, edge.id);
            match keep.get(&pair) {
                Some(&best) if best <= candidate => {}
                _ => {
                    keep.insert(pair, candidate);
                }
            }
        }
        let directed = self.options.directed;
        self.edges.retain(|&id, edge| {
            let pair = if directed || edge.source <= edge.target {
                (edge.source, edge.target)
            } else {
                (edge.target, edge.source)
            };
            keep.get(&pair).is_some_and(|&(_, kept)| kept == id)
        });
    }

    /// Recompute the adjacency mapping from the edge set and directedness.
    ///
    /// Adjacency is a derived structure; recomputing it wholesale after
    /// every structural mutation keeps staleness impossible.
    fn rebuild_adjacency(&mut self) {
        let mut adjacency: BTreeMap<NodeId, Vec<NodeId>> =
            self.nodes.keys().map(|&id| (id, Vec::new())).collect();
        for edge in self.edges.values() {
            if let Some(list) = adjacency.get_mut(&edge.source) {
                list.push(edge.target);
            }
            if !self.options.directed && !edge.is_loop() {
                if let Some(list) = adjacency.get_mut(&edge.target) {
                    list.push(edge.source);
                }
            }
        }
        for list in adjacency.values_mut() {
            list.sort_unstable();
        }
        self.adjacency = adjacency;
    }
}
