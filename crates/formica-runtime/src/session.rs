//! Session persistence: save/load a colony's terrain and trails.
//!
//! Serializes the graph (edge triples), nest and food nodes, the
//! configuration, every directed pheromone intensity and the best path
//! to JSON. A restored colony continues the run from the saved round.

use crate::colony::{Colony, RunTallies};
use formica_core::config::ColonyConfig;
use formica_core::error::Result;
use formica_core::pheromone::PheromoneEntry;
use formica_core::types::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serializable snapshot of a colony.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    pub metadata: SessionMetadata,
    pub config: ColonyConfig,
    pub edges: Vec<EdgeSpec>,
    pub start: NodeId,
    pub goals: Vec<NodeId>,
    pub pheromones: Vec<PheromoneEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best: Option<TrailPath>,
    #[serde(default)]
    pub tallies: RunTallies,
}

/// Session metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionMetadata {
    pub session_id: String,
    pub run_id: String,
    /// Next round to run.
    pub round: Round,
    /// Seed in use, so a restored run draws the same streams.
    pub seed: u64,
    pub node_count: usize,
    pub edge_count: usize,
}

impl SessionState {
    /// Capture the colony's current state.
    pub fn capture(colony: &Colony) -> Self {
        let graph = colony.substrate().graph();
        Self {
            metadata: SessionMetadata {
                session_id: uuid::Uuid::new_v4().to_string(),
                run_id: colony.run_id().to_string(),
                round: colony.current_round(),
                seed: colony.seed(),
                node_count: graph.node_count(),
                edge_count: graph.edge_count(),
            },
            config: colony.config().clone(),
            edges: graph.edges(),
            start: colony.substrate().start(),
            goals: colony.substrate().goals(),
            pheromones: colony.field().snapshot(),
            best: colony.best().cloned(),
            tallies: colony.tallies(),
        }
    }
}

/// Save the colony to a JSON file, creating parent directories.
pub fn save_session(colony: &Colony, path: &Path) -> Result<()> {
    let state = SessionState::capture(colony);
    let json = serde_json::to_string_pretty(&state)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(path, json)?;
    Ok(())
}

/// Load a saved session from JSON.
pub fn load_session(path: &Path) -> Result<SessionState> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Rebuild a colony from a saved session.
///
/// The graph and configuration are rebuilt and validated, then the
/// trails, round counter, seed and best path are restored.
pub fn restore_colony(state: &SessionState) -> Result<Colony> {
    let mut config = state.config.clone();
    config.seed = Some(state.metadata.seed);
    let goals = state.goals.iter().copied();
    let mut colony = Colony::from_edges(config, &state.edges, state.start, goals)?;
    restore_into_colony(&mut colony, state);
    Ok(colony)
}

/// Restore trails, tallies and progress into an existing colony on the same graph.
///
/// Returns the number of pheromone entries restored. Entries for edges
/// the colony's graph does not have are skipped.
pub fn restore_into_colony(colony: &mut Colony, state: &SessionState) -> usize {
    colony.resume(
        state.metadata.round,
        state.metadata.seed,
        &state.pheromones,
        state.best.clone(),
        state.tallies,
    )
}
