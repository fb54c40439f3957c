//! Formica Core Prelude: convenient imports for common usage.
//!
//! ```rust
//! use formica_core::prelude::*;
//! ```

// Re-export commonly used types
pub use crate::types::{
    NodeId, AntId, EdgeKey, EdgeSpec,
    AntState, Outcome,
    TrailPath, Extraction,
    Round,
};

pub use crate::config::ColonyConfig;
pub use crate::graph::WeightedGraph;
pub use crate::pheromone::{PheromoneField, PheromoneEntry};
pub use crate::selection::{Candidate, transition_weight};

// Re-export the Agent and Substrate traits
pub use crate::agent::Agent;
pub use crate::substrate::Substrate;

// Re-export error types
pub use crate::error::{FormicaError, GraphError, ConfigError, Result};
