//! Colony: the round controller.
//!
//! The colony owns the terrain and drives foraging in rounds. Each round:
//! 1. A fresh batch of ants leaves the nest
//! 2. Every non-terminal ant steps once per iteration, until all are
//!    terminal or the step budget runs out
//! 3. Ants still exploring are abandoned (stuck)
//! 4. Every ant that completed a round trip deposits `q / path_length`
//!    along its path, and the best path is updated if strictly shorter
//! 5. The whole field evaporates once
//!
//! Step 2 only reads the substrate, so it runs on the rayon pool when
//! `parallel` is set. Steps 4 and 5 run alone, after every ant is done.
//! Each ant draws from its own ChaCha stream keyed by its id, so serial
//! and parallel rounds with the same seed are bit-identical.

use crate::substrate_impl::TrailSubstrate;
use formica_agents::ant::Ant;
use formica_core::agent::Agent;
use formica_core::config::ColonyConfig;
use formica_core::error::Result;
use formica_core::graph::WeightedGraph;
use formica_core::pheromone::{PheromoneEntry, PheromoneField};
use formica_core::substrate::Substrate;
use formica_core::types::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info, trace, warn};
use uuid::Uuid;

/// Event emitted by the colony during a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColonyEvent {
    /// A batch of ants left the nest.
    RoundStarted { round: Round, agents: usize },
    /// A round finished with at least one successful ant.
    RoundCompleted {
        round: Round,
        successes: usize,
        stuck: usize,
        unfinished: usize,
        steps: usize,
    },
    /// No ant completed a round trip. Decay still applied.
    RoundExhausted {
        round: Round,
        stuck: usize,
        unfinished: usize,
    },
    /// The overall best path got strictly shorter.
    BestImproved {
        round: Round,
        length: f64,
        previous: Option<f64>,
    },
}

/// What happened in one round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundReport {
    pub round: Round,
    /// Ants that reached a goal and returned to the nest.
    pub successes: usize,
    /// Ants that hit a dead end or ran out of steps while exploring.
    pub stuck: usize,
    /// Ants still on the way back when the budget ran out.
    pub unfinished: usize,
    /// Iterations actually stepped.
    pub steps: usize,
    /// Shortest successful path this round.
    pub round_best: Option<f64>,
    /// Mean successful path length this round.
    pub round_mean: Option<f64>,
    /// Best path over the whole run so far.
    pub overall_best: Option<TrailPath>,
}

impl RoundReport {
    /// No ant completed a round trip.
    pub fn is_exhausted(&self) -> bool {
        self.successes == 0
    }

    pub fn agents(&self) -> usize {
        self.successes + self.stuck + self.unfinished
    }

    pub fn overall_best_length(&self) -> Option<f64> {
        self.overall_best.as_ref().map(|p| p.length)
    }
}

/// Statistics about the colony.
#[derive(Debug, Clone, Serialize)]
pub struct ColonyStats {
    pub round: Round,
    pub graph_nodes: usize,
    pub graph_edges: usize,
    pub total_agents: usize,
    pub total_successes: usize,
    pub total_stuck: usize,
    pub total_unfinished: usize,
    pub exhausted_rounds: usize,
    pub best_length: Option<f64>,
    pub total_pheromone: f64,
}

/// Outcome counters accumulated over every round run so far.
///
/// Saved with a session so a resumed colony keeps counting from where
/// the previous process stopped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RunTallies {
    pub successes: usize,
    pub stuck: usize,
    pub unfinished: usize,
    pub exhausted_rounds: usize,
}

/// An ant together with its private random stream.
struct Forager {
    ant: Ant,
    rng: ChaCha8Rng,
}

/// The colony: owns the terrain and runs foraging rounds.
pub struct Colony {
    config: ColonyConfig,
    substrate: TrailSubstrate,
    run_id: Uuid,
    seed: u64,
    round: Round,
    best: Option<TrailPath>,
    event_history: Vec<(Round, ColonyEvent)>,
    reports: Vec<RoundReport>,
    tallies: RunTallies,
}

impl Colony {
    /// Create a colony on `graph`.
    ///
    /// Validates the configuration and requires the start node to be in
    /// the graph. Goals outside the graph are allowed but never reached.
    pub fn new(
        config: ColonyConfig,
        graph: WeightedGraph,
        start: NodeId,
        goals: impl IntoIterator<Item = NodeId>,
    ) -> Result<Self> {
        config.validate()?;
        let substrate = TrailSubstrate::new(
            graph,
            start,
            goals,
            config.initial_pheromone,
            config.pheromone_floor,
        )?;
        for goal in substrate.unreachable_goals() {
            warn!(%goal, "goal node is not part of the graph");
        }

        let seed = config.seed.unwrap_or_else(rand::random);
        let run_id = Uuid::new_v4();
        debug!(%run_id, seed, nodes = substrate.graph().node_count(), "colony created");

        Ok(Self {
            config,
            substrate,
            run_id,
            seed,
            round: 0,
            best: None,
            event_history: Vec::new(),
            reports: Vec::new(),
            tallies: RunTallies::default(),
        })
    }

    /// Create a colony from undirected edge triples.
    pub fn from_edges(
        config: ColonyConfig,
        edges: &[EdgeSpec],
        start: NodeId,
        goals: impl IntoIterator<Item = NodeId>,
    ) -> Result<Self> {
        let graph = WeightedGraph::from_edges(edges)?;
        Self::new(config, graph, start, goals)
    }

    /// Run one round with the configured step budget.
    pub fn round(&mut self) -> RoundReport {
        self.round_with_budget(self.config.max_steps)
    }

    /// Run one round with an explicit step budget.
    ///
    /// With a budget of zero no ant moves: every ant is abandoned at the
    /// nest and the field only evaporates.
    pub fn round_with_budget(&mut self, max_steps: usize) -> RoundReport {
        let round = self.round;
        let batch = self.config.agents_per_round;
        self.record(round, ColonyEvent::RoundStarted { round, agents: batch });

        let mut foragers = self.spawn_batch(round);
        let steps = self.forage(&mut foragers, max_steps);

        let mut stuck = 0;
        let mut unfinished = 0;
        let mut completed: Vec<TrailPath> = Vec::new();
        for forager in &mut foragers {
            forager.ant.abandon();
            match forager.ant.outcome() {
                Outcome::Success => completed.push(forager.ant.trail()),
                Outcome::Failure => stuck += 1,
                Outcome::Pending => unfinished += 1,
            }
        }
        if unfinished > 0 {
            trace!(round, unfinished, "step budget ran out during return trips");
        }

        let successes = completed.len();
        let (round_best, round_mean) = if completed.is_empty() {
            self.tallies.exhausted_rounds += 1;
            warn!(round, stuck, unfinished, "no ant completed a round trip");
            self.record(round, ColonyEvent::RoundExhausted { round, stuck, unfinished });
            (None, None)
        } else {
            self.reinforce(&completed);
            let best_idx = shortest(&completed);
            let round_best = completed[best_idx].length;
            let mean = completed.iter().map(|p| p.length).sum::<f64>() / successes as f64;

            let previous = self.best.as_ref().map(|p| p.length);
            if previous.map_or(true, |best| round_best < best) {
                info!(round, length = round_best, ?previous, "best path improved");
                self.best = Some(completed.swap_remove(best_idx));
                self.record(
                    round,
                    ColonyEvent::BestImproved { round, length: round_best, previous },
                );
            }
            self.record(
                round,
                ColonyEvent::RoundCompleted { round, successes, stuck, unfinished, steps },
            );
            (Some(round_best), Some(mean))
        };

        self.substrate.field_mut().decay(self.config.evaporation_rate);

        self.tallies.successes += successes;
        self.tallies.stuck += stuck;
        self.tallies.unfinished += unfinished;
        self.round += 1;

        let report = RoundReport {
            round,
            successes,
            stuck,
            unfinished,
            steps,
            round_best,
            round_mean,
            overall_best: self.best.clone(),
        };
        debug!(round, successes, stuck, unfinished, steps, ?round_best, "round finished");
        self.reports.push(report.clone());
        report
    }

    /// Run the configured number of rounds.
    pub fn run(&mut self) -> Vec<RoundReport> {
        (0..self.config.rounds).map(|_| self.round()).collect()
    }

    /// Run `rounds` rounds.
    pub fn run_rounds(&mut self, rounds: u64) -> Vec<RoundReport> {
        (0..rounds).map(|_| self.round()).collect()
    }

    /// Deterministic greedy walk to any goal along the strongest trails.
    pub fn extract_best_path(&self) -> Extraction {
        self.greedy_walk(|node| self.substrate.is_goal(node))
    }

    /// Deterministic greedy walk to one specific goal.
    pub fn extract_best_path_to(&self, goal: NodeId) -> Extraction {
        self.greedy_walk(|node| node == goal)
    }

    /// Follow the highest forward pheromone among unvisited neighbors.
    ///
    /// Ties go to the lowest node id; edges the field does not track
    /// count as zero. A dead end yields `NoPathFound`.
    fn greedy_walk(&self, is_target: impl Fn(NodeId) -> bool) -> Extraction {
        let graph = self.substrate.graph();
        let field = self.substrate.field();

        let mut current = self.substrate.start();
        let mut nodes = vec![current];
        let mut visited: HashSet<NodeId> = HashSet::from([current]);
        let mut length = 0.0;

        loop {
            if is_target(current) {
                return Extraction::Found(TrailPath::new(nodes, length));
            }

            let mut strongest: Option<(NodeId, f64, f64)> = None;
            for (node, distance) in graph.neighbors(current) {
                if visited.contains(&node) {
                    continue;
                }
                let intensity = field.tracked(&EdgeKey::new(current, node)).unwrap_or(0.0);
                // Neighbors come in ascending order: strict `>` keeps the lowest id
                if strongest.map_or(true, |(_, _, best)| intensity > best) {
                    strongest = Some((node, distance, intensity));
                }
            }

            let Some((next, distance, _)) = strongest else {
                return Extraction::NoPathFound;
            };
            nodes.push(next);
            visited.insert(next);
            length += distance;
            current = next;
        }
    }

    /// Best path found so far.
    pub fn best(&self) -> Option<&TrailPath> {
        self.best.as_ref()
    }

    pub fn config(&self) -> &ColonyConfig {
        &self.config
    }

    pub fn substrate(&self) -> &TrailSubstrate {
        &self.substrate
    }

    pub fn field(&self) -> &PheromoneField {
        self.substrate.field()
    }

    /// Index of the next round to run.
    pub fn current_round(&self) -> Round {
        self.round
    }

    /// Seed actually in use, drawn at creation if the config had none.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn reports(&self) -> &[RoundReport] {
        &self.reports
    }

    pub fn event_history(&self) -> &[(Round, ColonyEvent)] {
        &self.event_history
    }

    pub fn stats(&self) -> ColonyStats {
        ColonyStats {
            round: self.round,
            graph_nodes: self.substrate.graph().node_count(),
            graph_edges: self.substrate.graph().edge_count(),
            total_agents: self.round as usize * self.config.agents_per_round,
            total_successes: self.tallies.successes,
            total_stuck: self.tallies.stuck,
            total_unfinished: self.tallies.unfinished,
            exhausted_rounds: self.tallies.exhausted_rounds,
            best_length: self.best.as_ref().map(|p| p.length),
            total_pheromone: self.substrate.field().total_intensity(),
        }
    }

    pub fn tallies(&self) -> RunTallies {
        self.tallies
    }

    /// Continue a previous run: pheromones, round counter, seed, best path
    /// and outcome tallies.
    ///
    /// `reports()` and `event_history()` only cover rounds run by this
    /// process. Returns the number of pheromone entries restored.
    pub fn resume(
        &mut self,
        round: Round,
        seed: u64,
        pheromones: &[PheromoneEntry],
        best: Option<TrailPath>,
        tallies: RunTallies,
    ) -> usize {
        self.round = round;
        self.seed = seed;
        self.best = best;
        self.tallies = tallies;
        self.substrate.field_mut().restore(pheromones)
    }

    fn record(&mut self, round: Round, event: ColonyEvent) {
        self.event_history.push((round, event));
    }

    fn spawn_batch(&self, round: Round) -> Vec<Forager> {
        let batch = self.config.agents_per_round;
        (0..batch)
            .map(|index| {
                let id = AntId::for_round(round, index, batch);
                let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
                rng.set_stream(id.0);
                Forager {
                    ant: Ant::from_config(id, self.substrate.start(), &self.config),
                    rng,
                }
            })
            .collect()
    }

    /// Step every forager until all are terminal or `max_steps` iterations pass.
    fn forage(&self, foragers: &mut [Forager], max_steps: usize) -> usize {
        let substrate = &self.substrate;
        let mut steps = 0;
        while steps < max_steps && foragers.iter().any(|f| !f.ant.is_terminal()) {
            if self.config.parallel {
                foragers.par_iter_mut().for_each(|f| {
                    f.ant.step(substrate, &mut f.rng);
                });
            } else {
                for f in foragers.iter_mut() {
                    f.ant.step(substrate, &mut f.rng);
                }
            }
            steps += 1;
        }
        steps
    }

    fn reinforce(&mut self, completed: &[TrailPath]) {
        let q = self.config.q;
        let field = self.substrate.field_mut();
        for path in completed {
            // Start on a goal: nothing walked, nothing laid
            if path.length > 0.0 {
                field.deposit(&path.edges(), q / path.length);
            }
        }
    }
}

/// Index of the shortest path; the first one wins ties.
fn shortest(paths: &[TrailPath]) -> usize {
    let mut best = 0;
    for (idx, path) in paths.iter().enumerate() {
        if path.length < paths[best].length {
            best = idx;
        }
    }
    best
}
