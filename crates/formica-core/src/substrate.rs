//! Substrate: the shared environment ants read while foraging.
//!
//! During a round the substrate is read-only: ants see the graph, the
//! pheromone field, and the goal set, but never change them. All writes
//! happen between rounds, so one round's outcome cannot depend on the
//! order in which ants were stepped.

use crate::types::{EdgeKey, NodeId};

/// Read-only view of the terrain an ant walks on.
///
/// `Sync` so a round's ants can be stepped on worker threads.
pub trait Substrate: Sync {
    /// Reachable nodes and distances, ascending by node id.
    fn neighbors(&self, node: NodeId) -> Vec<(NodeId, f64)>;

    /// Pheromone intensity of a directed edge.
    fn intensity(&self, edge: &EdgeKey) -> f64;

    /// Whether `node` holds food.
    fn is_goal(&self, node: NodeId) -> bool;

    /// Number of nodes in the graph.
    fn node_count(&self) -> usize;
}
