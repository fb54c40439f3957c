//! Agent: a single forager.
//!
//! Every agent is a small state machine stepped once per iteration by
//! the colony. It reads the substrate, updates only its own state, and
//! reports where it is in its lifecycle.

use crate::substrate::Substrate;
use crate::types::*;
use rand::RngCore;

/// A traversal agent stepped by the colony.
pub trait Agent: Send {
    /// The agent's identity.
    fn id(&self) -> AntId;

    /// Current lifecycle state.
    fn state(&self) -> AntState;

    /// Success, failure, or still pending.
    fn outcome(&self) -> Outcome;

    /// Advance one step.
    ///
    /// `rng` supplies the uniform draws for edge selection. Terminal
    /// agents return their state without drawing.
    fn step(&mut self, substrate: &dyn Substrate, rng: &mut dyn RngCore) -> AntState;

    /// Called when the colony's step budget runs out.
    fn abandon(&mut self);

    /// Whether further steps are no-ops.
    fn is_terminal(&self) -> bool {
        self.state().is_terminal()
    }
}
