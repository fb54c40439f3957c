//! Shared types used across all Formica crates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a node in the weighted graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub usize);

impl From<usize> for NodeId {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for a traversal agent.
///
/// Ant ids are derived from the round and the ant's index in the batch,
/// so the same seed always produces the same ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AntId(pub u64);

impl AntId {
    /// Deterministic id for the `index`-th ant of a round.
    pub fn for_round(round: Round, index: usize, batch_size: usize) -> Self {
        Self(round * batch_size as u64 + index as u64)
    }
}

impl fmt::Display for AntId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ant-{}", self.0)
    }
}

/// A directed edge key into the pheromone field.
///
/// Pheromone is tracked per direction: `(a, b)` and `(b, a)` are
/// distinct entries that start equal and are reinforced together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeKey {
    pub from: NodeId,
    pub to: NodeId,
}

impl EdgeKey {
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// The same edge walked the other way.
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }

    /// Both directions of the undirected edge `{a, b}`.
    pub fn both(a: NodeId, b: NodeId) -> [EdgeKey; 2] {
        [EdgeKey { from: a, to: b }, EdgeKey { from: b, to: a }]
    }

    /// Consecutive edges of a node sequence.
    pub fn along(path: &[NodeId]) -> Vec<EdgeKey> {
        path.windows(2)
            .map(|pair| EdgeKey {
                from: pair[0],
                to: pair[1],
            })
            .collect()
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// An undirected edge as supplied by a graph builder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: NodeId,
    pub to: NodeId,
    pub distance: f64,
}

impl EdgeSpec {
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>, distance: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            distance,
        }
    }
}

/// State of a traversal agent's lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AntState {
    /// Building the forward path.
    Exploring,
    /// Reached a goal this step. Only ever reported by `step`; the agent
    /// is stored as `Returning` afterwards.
    FoundGoal,
    /// Walking the forward path back to the start node.
    Returning,
    /// Back at the start after reaching a goal.
    Completed,
    /// Ran out of unvisited neighbors before reaching a goal.
    Stuck,
}

impl AntState {
    /// Whether further steps are no-ops.
    pub fn is_terminal(&self) -> bool {
        matches!(self, AntState::Completed | AntState::Stuck)
    }
}

/// Outcome of an ant's trip as seen by the colony.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Still under way (or abandoned while returning).
    Pending,
    /// Reached a goal and returned.
    Success,
    /// Got stuck.
    Failure,
}

/// A path through the graph with its total distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrailPath {
    pub nodes: Vec<NodeId>,
    pub length: f64,
}

impl TrailPath {
    pub fn new(nodes: Vec<NodeId>, length: f64) -> Self {
        Self { nodes, length }
    }

    /// Directed edges walked along this path.
    pub fn edges(&self) -> Vec<EdgeKey> {
        EdgeKey::along(&self.nodes)
    }
}

/// Result of the deterministic greedy best-path extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Extraction {
    /// The colony's consensus path.
    Found(TrailPath),
    /// The greedy walk hit a dead end before a goal.
    NoPathFound,
}

impl Extraction {
    /// Path length, or infinity when no path was found.
    pub fn length(&self) -> f64 {
        match self {
            Extraction::Found(path) => path.length,
            Extraction::NoPathFound => f64::INFINITY,
        }
    }

    pub fn path(&self) -> Option<&TrailPath> {
        match self {
            Extraction::Found(path) => Some(path),
            Extraction::NoPathFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Extraction::Found(_))
    }
}

/// Index of a colony round.
pub type Round = u64;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_key_reverses() {
        let e = EdgeKey::new(1, 2);
        assert_eq!(e.reversed(), EdgeKey::new(2, 1));
        assert_eq!(e.reversed().reversed(), e);
    }

    #[test]
    fn edges_along_path() {
        let path = [NodeId(0), NodeId(3), NodeId(5)];
        assert_eq!(
            EdgeKey::along(&path),
            vec![EdgeKey::new(0, 3), EdgeKey::new(3, 5)]
        );
        assert!(EdgeKey::along(&[NodeId(7)]).is_empty());
    }

    #[test]
    fn ant_ids_are_unique_per_round() {
        let a = AntId::for_round(0, 19, 20);
        let b = AntId::for_round(1, 0, 20);
        assert_ne!(a, b);
        assert_eq!(b, AntId(20));
    }

    #[test]
    fn no_path_has_infinite_length() {
        assert!(Extraction::NoPathFound.length().is_infinite());
        assert!(Extraction::NoPathFound.path().is_none());
    }

    #[test]
    fn terminal_states() {
        assert!(AntState::Completed.is_terminal());
        assert!(AntState::Stuck.is_terminal());
        assert!(!AntState::Returning.is_terminal());
        assert!(!AntState::FoundGoal.is_terminal());
    }
}
