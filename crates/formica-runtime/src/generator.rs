//! Random connected graph generation.
//!
//! A spanning tree guarantees every node is reachable from the nest:
//! node `i` attaches to a random earlier node. Extra edges are then
//! added between each remaining pair with probability `connectivity`.
//! The nest is node 0 and the food is the last node.

use formica_core::error::{FormicaError, Result};
use formica_core::types::{EdgeSpec, NodeId};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Shape of a random graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSpec {
    /// Number of nodes (default: 15).
    #[serde(default = "default_nodes")]
    pub nodes: usize,
    /// Probability of an extra edge between two nodes (default: 0.35).
    #[serde(default = "default_connectivity")]
    pub connectivity: f64,
    /// Smallest edge distance (default: 1.0).
    #[serde(default = "default_min_distance")]
    pub min_distance: f64,
    /// Upper bound on edge distances, exclusive (default: 10.0).
    #[serde(default = "default_max_distance")]
    pub max_distance: f64,
}

fn default_nodes() -> usize { 15 }
fn default_connectivity() -> f64 { 0.35 }
fn default_min_distance() -> f64 { 1.0 }
fn default_max_distance() -> f64 { 10.0 }

impl Default for GraphSpec {
    fn default() -> Self {
        Self {
            nodes: default_nodes(),
            connectivity: default_connectivity(),
            min_distance: default_min_distance(),
            max_distance: default_max_distance(),
        }
    }
}

/// A generated terrain: edges plus where the nest and food are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedGraph {
    pub edges: Vec<EdgeSpec>,
    pub start: NodeId,
    pub goals: Vec<NodeId>,
}

impl GraphSpec {
    pub fn with_nodes(mut self, nodes: usize) -> Self {
        self.nodes = nodes;
        self
    }

    pub fn with_connectivity(mut self, connectivity: f64) -> Self {
        self.connectivity = connectivity;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.nodes < 2 {
            return Err(FormicaError::invalid_config(
                "nodes",
                self.nodes.to_string(),
                "need at least a nest and a food node",
            ));
        }
        if !(0.0..=1.0).contains(&self.connectivity) {
            return Err(FormicaError::out_of_range(
                "connectivity",
                0.0,
                1.0,
                self.connectivity,
            ));
        }
        if !(self.min_distance.is_finite() && self.min_distance > 0.0) {
            return Err(FormicaError::invalid_config(
                "min_distance",
                self.min_distance.to_string(),
                "must be positive",
            ));
        }
        if !(self.max_distance.is_finite() && self.max_distance > self.min_distance) {
            return Err(FormicaError::invalid_config(
                "max_distance",
                self.max_distance.to_string(),
                "must exceed min_distance",
            ));
        }
        Ok(())
    }

    /// Generate a graph. The same seed always gives the same graph.
    pub fn generate(&self, seed: u64) -> Result<GeneratedGraph> {
        self.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut edges = Vec::new();
        let mut linked: HashSet<(usize, usize)> = HashSet::new();

        for i in 1..self.nodes {
            let target = rng.random_range(0..i);
            edges.push(EdgeSpec::new(target, i, self.distance(&mut rng)));
            linked.insert((target, i));
        }

        for i in 0..self.nodes {
            for j in (i + 1)..self.nodes {
                if !linked.contains(&(i, j)) && rng.random::<f64>() < self.connectivity {
                    edges.push(EdgeSpec::new(i, j, self.distance(&mut rng)));
                    linked.insert((i, j));
                }
            }
        }

        Ok(GeneratedGraph {
            edges,
            start: NodeId(0),
            goals: vec![NodeId(self.nodes - 1)],
        })
    }

    fn distance(&self, rng: &mut ChaCha8Rng) -> f64 {
        rng.random_range(self.min_distance..self.max_distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formica_core::graph::WeightedGraph;

    #[test]
    fn generated_graph_is_connected() {
        let spec = GraphSpec::default().with_nodes(30).with_connectivity(0.0);
        let generated = spec.generate(5).unwrap();
        assert_eq!(generated.edges.len(), 29);

        let graph = WeightedGraph::from_edges(&generated.edges).unwrap();
        let mut seen = HashSet::from([NodeId(0)]);
        let mut frontier = vec![NodeId(0)];
        while let Some(node) = frontier.pop() {
            for (next, _) in graph.neighbors(node) {
                if seen.insert(next) {
                    frontier.push(next);
                }
            }
        }
        assert_eq!(seen.len(), 30);
    }

    #[test]
    fn distances_within_bounds() {
        let spec = GraphSpec::default();
        for edge in spec.generate(1).unwrap().edges {
            assert!(edge.distance >= 1.0 && edge.distance < 10.0);
        }
    }

    #[test]
    fn same_seed_same_graph() {
        let spec = GraphSpec::default();
        assert_eq!(spec.generate(77).unwrap(), spec.generate(77).unwrap());
        assert_ne!(spec.generate(77).unwrap(), spec.generate(78).unwrap());
    }

    #[test]
    fn full_connectivity_is_complete() {
        let spec = GraphSpec::default().with_nodes(6).with_connectivity(1.0);
        let generated = spec.generate(3).unwrap();
        assert_eq!(generated.edges.len(), 15);
        assert_eq!(generated.start, NodeId(0));
        assert_eq!(generated.goals, vec![NodeId(5)]);
    }

    #[test]
    fn rejects_bad_specs() {
        assert!(GraphSpec::default().with_nodes(1).validate().is_err());
        assert!(GraphSpec::default().with_connectivity(1.5).validate().is_err());
        let mut spec = GraphSpec::default();
        spec.max_distance = 0.5;
        assert!(spec.validate().is_err());
    }
}
