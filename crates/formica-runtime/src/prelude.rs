//! Formica Runtime Prelude: convenient imports for common usage.
//!
//! ```rust
//! use formica_runtime::prelude::*;
//! ```

// Re-export colony
pub use crate::colony::{Colony, ColonyEvent, ColonyStats, RoundReport, RunTallies};
pub use crate::substrate_impl::TrailSubstrate;

// Re-export metrics
pub use crate::metrics::{RunSummary, print_summary};

// Re-export graph generation
pub use crate::generator::{GraphSpec, GeneratedGraph};

// Re-export session
pub use crate::session::{
    SessionState, SessionMetadata,
    save_session, load_session, restore_colony, restore_into_colony,
};

// Re-export from agents
pub use formica_agents::prelude::*;
