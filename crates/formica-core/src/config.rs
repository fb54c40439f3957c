//! Colony configuration.
//!
//! All tunable parameters of a run. Defaults reproduce the classic
//! foraging setup: trail influence 1, distance influence 2, one fifth
//! of the pheromone evaporating per round.

use crate::error::{FormicaError, Result};
use serde::{Deserialize, Serialize};

/// Configuration for an ant colony optimization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColonyConfig {
    /// Pheromone influence exponent (default: 1.0).
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    /// Inverse-distance influence exponent (default: 2.0).
    #[serde(default = "default_beta")]
    pub beta: f64,
    /// Fraction of pheromone that evaporates each round, in [0, 1) (default: 0.2).
    #[serde(default = "default_evaporation_rate")]
    pub evaporation_rate: f64,
    /// Starting intensity of every directed edge (default: 0.1).
    #[serde(default = "default_initial_pheromone")]
    pub initial_pheromone: f64,
    /// Minimum intensity any edge can decay to (default: 0.01).
    #[serde(default = "default_pheromone_floor")]
    pub pheromone_floor: f64,
    /// Deposit constant: a successful ant deposits `q / path_length` (default: 100.0).
    #[serde(default = "default_q")]
    pub q: f64,
    /// Ants spawned per round (default: 20).
    #[serde(default = "default_agents_per_round")]
    pub agents_per_round: usize,
    /// Step budget per round (default: 45).
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,
    /// Number of rounds in a full run (default: 50).
    #[serde(default = "default_rounds")]
    pub rounds: u64,
    /// Seed for reproducible runs. `None` draws a fresh seed.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Step ants of a round on the rayon thread pool (default: true).
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

fn default_alpha() -> f64 { 1.0 }
fn default_beta() -> f64 { 2.0 }
fn default_evaporation_rate() -> f64 { 0.2 }
fn default_initial_pheromone() -> f64 { 0.1 }
fn default_pheromone_floor() -> f64 { 0.01 }
fn default_q() -> f64 { 100.0 }
fn default_agents_per_round() -> usize { 20 }
fn default_max_steps() -> usize { 45 }
fn default_rounds() -> u64 { 50 }
fn default_parallel() -> bool { true }

impl Default for ColonyConfig {
    fn default() -> Self {
        Self {
            alpha: default_alpha(),
            beta: default_beta(),
            evaporation_rate: default_evaporation_rate(),
            initial_pheromone: default_initial_pheromone(),
            pheromone_floor: default_pheromone_floor(),
            q: default_q(),
            agents_per_round: default_agents_per_round(),
            max_steps: default_max_steps(),
            rounds: default_rounds(),
            seed: None,
            parallel: default_parallel(),
        }
    }
}

impl ColonyConfig {
    /// Check every parameter before a run starts.
    pub fn validate(&self) -> Result<()> {
        non_negative("alpha", self.alpha)?;
        non_negative("beta", self.beta)?;
        if !(0.0..1.0).contains(&self.evaporation_rate) {
            return Err(FormicaError::out_of_range(
                "evaporation_rate",
                0.0,
                1.0,
                self.evaporation_rate,
            ));
        }
        positive("initial_pheromone", self.initial_pheromone)?;
        positive("pheromone_floor", self.pheromone_floor)?;
        if self.initial_pheromone < self.pheromone_floor {
            return Err(FormicaError::invalid_config(
                "initial_pheromone",
                self.initial_pheromone.to_string(),
                format!("must be at least pheromone_floor ({})", self.pheromone_floor),
            ));
        }
        positive("q", self.q)?;
        if self.agents_per_round == 0 {
            return Err(FormicaError::invalid_config("agents_per_round", "0", "must be positive"));
        }
        if self.max_steps == 0 {
            return Err(FormicaError::invalid_config("max_steps", "0", "must be positive"));
        }
        if self.rounds == 0 {
            return Err(FormicaError::invalid_config("rounds", "0", "must be positive"));
        }
        Ok(())
    }

    /// Step budget scaled to the graph: three steps per node.
    pub fn with_steps_for_nodes(mut self, node_count: usize) -> Self {
        self.max_steps = (node_count * 3).max(1);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_agents(mut self, agents_per_round: usize) -> Self {
        self.agents_per_round = agents_per_round;
        self
    }

    pub fn with_rounds(mut self, rounds: u64) -> Self {
        self.rounds = rounds;
        self
    }
}

fn positive(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FormicaError::invalid_config(field, value.to_string(), "must be positive"))
    }
}

fn non_negative(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(FormicaError::invalid_config(field, value.to_string(), "must be non-negative"))
    }
}
