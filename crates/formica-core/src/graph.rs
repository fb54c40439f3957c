//! Weighted graph store: the terrain the colony forages on.
//!
//! An undirected graph with a strictly positive distance on every edge,
//! backed by petgraph's `Graph` with a `HashMap` index from our
//! `NodeId` to petgraph's internal index. The graph is built once and
//! never shrinks: there is no removal operation.

use crate::error::{FormicaError, Result};
use crate::types::{EdgeSpec, NodeId};
use petgraph::graph::{Graph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Undirected;
use std::collections::HashMap;

/// Petgraph-backed weighted graph.
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    graph: Graph<NodeId, f64, Undirected>,
    /// Map from our NodeId to petgraph's internal index.
    node_index: HashMap<NodeId, NodeIndex>,
}

impl WeightedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from undirected edge triples.
    ///
    /// Fails on the first edge with a non-positive distance.
    pub fn from_edges(edges: &[EdgeSpec]) -> Result<Self> {
        let mut graph = Self::new();
        for edge in edges {
            graph.add_edge(edge.from, edge.to, edge.distance)?;
        }
        Ok(graph)
    }

    /// Add an isolated node. Adding an existing node is a no-op.
    pub fn add_node(&mut self, id: impl Into<NodeId>) -> NodeId {
        let id = id.into();
        self.index_of(id);
        id
    }

    /// Insert the undirected edge `{u, v}`.
    ///
    /// Both directions share the distance. Re-adding a pair replaces
    /// its distance.
    pub fn add_edge(
        &mut self,
        u: impl Into<NodeId>,
        v: impl Into<NodeId>,
        distance: f64,
    ) -> Result<()> {
        let (u, v) = (u.into(), v.into());
        if !(distance.is_finite() && distance > 0.0) {
            return Err(FormicaError::invalid_edge(u, v, distance));
        }

        let u_idx = self.index_of(u);
        let v_idx = self.index_of(v);
        if let Some(edge_idx) = self.graph.find_edge(u_idx, v_idx) {
            self.graph[edge_idx] = distance;
        } else {
            self.graph.add_edge(u_idx, v_idx, distance);
        }
        Ok(())
    }

    /// Reachable nodes and their distances, in ascending node order.
    ///
    /// Unknown or isolated nodes have no neighbors; that is not an error.
    pub fn neighbors(&self, node: NodeId) -> Vec<(NodeId, f64)> {
        let Some(&node_idx) = self.node_index.get(&node) else {
            return Vec::new();
        };

        let mut out: Vec<(NodeId, f64)> = self
            .graph
            .edges(node_idx)
            .map(|edge| {
                let other_idx = if edge.source() == node_idx {
                    edge.target()
                } else {
                    edge.source()
                };
                (self.graph[other_idx], *edge.weight())
            })
            .collect();
        out.sort_by_key(|(id, _)| *id);
        out
    }

    /// Distance of the edge `{u, v}`, if present.
    pub fn distance(&self, u: NodeId, v: NodeId) -> Option<f64> {
        let u_idx = self.node_index.get(&u)?;
        let v_idx = self.node_index.get(&v)?;
        let edge_idx = self.graph.find_edge(*u_idx, *v_idx)?;
        Some(self.graph[edge_idx])
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.node_index.contains_key(&node)
    }

    /// All node ids, ascending.
    pub fn nodes(&self) -> Vec<NodeId> {
        let mut nodes: Vec<NodeId> = self.node_index.keys().copied().collect();
        nodes.sort();
        nodes
    }

    /// Every undirected edge exactly once, in insertion order.
    pub fn edges(&self) -> Vec<EdgeSpec> {
        self.graph
            .edge_references()
            .map(|edge| EdgeSpec {
                from: self.graph[edge.source()],
                to: self.graph[edge.target()],
                distance: *edge.weight(),
            })
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn index_of(&mut self, id: NodeId) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(&id) {
            return idx;
        }
        let idx = self.graph.add_node(id);
        self.node_index.insert(id, idx);
        idx
    }
}
