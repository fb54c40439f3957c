//! # Formica
//!
//! Ant colony optimization over weighted graphs through stigmergic
//! pheromone trails.
//!
//! A colony of simple agents searches a weighted, undirected graph for
//! short paths from a nest to one or more food nodes. No agent knows the
//! graph: each one picks its next edge by mixing the trail left by
//! earlier ants with the edge's raw cost. Ants that make it back to the
//! nest reinforce the trail they walked, in proportion to how short it
//! was, and the whole trail evaporates between rounds. Short paths win
//! because they are reinforced more often and more strongly.
//!
//! ## Quick Start
//!
//! ```rust
//! use formica::prelude::*;
//!
//! let edges = [
//!     EdgeSpec::new(0, 1, 2.0),
//!     EdgeSpec::new(1, 2, 2.0),
//!     EdgeSpec::new(0, 2, 1.0),
//! ];
//! let config = ColonyConfig::default().with_seed(7).with_rounds(10);
//! let mut colony = Colony::from_edges(config, &edges, NodeId(0), [NodeId(2)]).unwrap();
//!
//! // Run every configured round
//! let reports = colony.run();
//! let summary = RunSummary::from_reports(&reports);
//! assert_eq!(summary.rounds, 10);
//!
//! // Follow the strongest trail home
//! let extraction = colony.extract_best_path();
//! assert_eq!(extraction.length(), 1.0);
//! ```
//!
//! ## Architecture
//!
//! - [`formica_core`] - Shared types, graph store, pheromone field, selection, traits
//! - [`formica_agents`] - The `Ant` traversal state machine
//! - [`formica_runtime`] - Colony round controller, metrics, graph generator, sessions
//!
//! ## Key Concepts
//!
//! | Concept | Biological Analog | What It Does |
//! |---------|-------------------|--------------|
//! | Pheromone field | Trail chemicals | Per-direction edge intensities, the colony's memory |
//! | Transition rule | Trail following | `tau^alpha * (1/d)^beta`, sampled by roulette |
//! | Deposit | Trail laying | `q / path_length` on both directions of a walked edge |
//! | Evaporation | Chemical decay | `max(floor, tau * (1 - rate))` once per round |
//! | Extraction | The established trail | Greedy walk along the strongest forward trail |
//!
//! ## Session Persistence
//!
//! ```rust,ignore
//! use formica::prelude::*;
//! use std::path::Path;
//!
//! save_session(&colony, Path::new("session.json"))?;
//!
//! let state = load_session(Path::new("session.json"))?;
//! let restored = restore_colony(&state)?;
//! ```

// Re-export all subcrates
pub use formica_core as core;
pub use formica_runtime as runtime;
pub use formica_agents as agents;

/// Prelude module for convenient imports.
///
/// ```rust
/// use formica::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use formica_core::types::{
        NodeId, AntId, EdgeKey, EdgeSpec,
        AntState, Outcome,
        TrailPath, Extraction,
        Round,
    };
    pub use formica_core::config::ColonyConfig;
    pub use formica_core::graph::WeightedGraph;
    pub use formica_core::pheromone::{PheromoneField, PheromoneEntry};

    // Core traits
    pub use formica_core::agent::Agent;
    pub use formica_core::substrate::Substrate;

    // Error types
    pub use formica_core::error::{FormicaError, GraphError, ConfigError, Result};

    // Agents
    pub use formica_agents::ant::Ant;

    // Runtime
    pub use formica_runtime::colony::{Colony, ColonyEvent, ColonyStats, RoundReport};
    pub use formica_runtime::substrate_impl::TrailSubstrate;
    pub use formica_runtime::metrics::{RunSummary, print_summary};
    pub use formica_runtime::generator::{GraphSpec, GeneratedGraph};
    pub use formica_runtime::session::{
        save_session, load_session, restore_colony, restore_into_colony,
        SessionState, SessionMetadata,
    };
}
