//! Concrete implementation of the Substrate trait.
//!
//! The terrain an ant colony forages on:
//! - Weighted graph backed by petgraph (`WeightedGraph`)
//! - Pheromone field keyed by directed edge
//! - The nest (start node) and the set of food (goal) nodes

use formica_core::error::{FormicaError, Result};
use formica_core::graph::WeightedGraph;
use formica_core::pheromone::PheromoneField;
use formica_core::substrate::Substrate;
use formica_core::types::*;
use std::collections::BTreeSet;

/// In-memory substrate implementation.
///
/// Ants only ever see it through `&dyn Substrate` while a round is under
/// way. The colony mutates the field between rounds.
#[derive(Debug, Clone)]
pub struct TrailSubstrate {
    graph: WeightedGraph,
    field: PheromoneField,
    start: NodeId,
    goals: BTreeSet<NodeId>,
}

impl TrailSubstrate {
    /// Build a substrate over `graph` with every edge at `initial` intensity.
    ///
    /// Fails with `UnknownNode` when the start node is not in the graph.
    pub fn new(
        graph: WeightedGraph,
        start: NodeId,
        goals: impl IntoIterator<Item = NodeId>,
        initial: f64,
        floor: f64,
    ) -> Result<Self> {
        if !graph.contains(start) {
            return Err(FormicaError::unknown_node(start));
        }
        let field = PheromoneField::for_edges(&graph.edges(), initial, floor);
        Ok(Self {
            graph,
            field,
            start,
            goals: goals.into_iter().collect(),
        })
    }

    pub fn graph(&self) -> &WeightedGraph {
        &self.graph
    }

    pub fn field(&self) -> &PheromoneField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut PheromoneField {
        &mut self.field
    }

    pub fn start(&self) -> NodeId {
        self.start
    }

    /// Goal nodes, ascending.
    pub fn goals(&self) -> Vec<NodeId> {
        self.goals.iter().copied().collect()
    }

    /// Goal nodes that are not part of the graph.
    pub fn unreachable_goals(&self) -> Vec<NodeId> {
        self.goals
            .iter()
            .copied()
            .filter(|g| !self.graph.contains(*g))
            .collect()
    }
}

impl Substrate for TrailSubstrate {
    fn neighbors(&self, node: NodeId) -> Vec<(NodeId, f64)> {
        self.graph.neighbors(node)
    }

    fn intensity(&self, edge: &EdgeKey) -> f64 {
        self.field.get(edge)
    }

    fn is_goal(&self, node: NodeId) -> bool {
        self.goals.contains(&node)
    }

    fn node_count(&self) -> usize {
        self.graph.node_count()
    }
}
