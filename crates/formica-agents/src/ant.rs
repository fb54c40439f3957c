//! Ant: the traversal agent.
//!
//! An ant leaves the nest, picks edges one step at a time using the
//! colony's pheromone trails and the raw edge distances, and never
//! revisits a node on its way out. On reaching food it walks its own
//! trail back to the nest, one node per step.
//!
//! Biological analog: a forager laying down a trail on the return trip
//! that later foragers will follow.

use formica_core::agent::Agent;
use formica_core::config::ColonyConfig;
use formica_core::selection::{self, Candidate};
use formica_core::substrate::Substrate;
use formica_core::types::*;
use rand::{Rng, RngCore};
use std::collections::HashSet;

/// A single forager for one round.
#[derive(Debug, Clone)]
pub struct Ant {
    id: AntId,
    start: NodeId,
    alpha: f64,
    beta: f64,
    state: AntState,
    current: NodeId,

    /// Forward path from the start node. Append-only; the return trip
    /// moves `cursor` instead of popping.
    path: Vec<NodeId>,
    /// Index into `path` of the node the ant stands on while returning.
    cursor: usize,
    /// Distance accumulated along the forward path.
    length: f64,
    /// Nodes on the forward path (no-revisit set).
    visited: HashSet<NodeId>,
    /// Steps taken, including no-op steps on the return trip.
    steps: u64,
}

impl Ant {
    pub fn new(id: AntId, start: NodeId, alpha: f64, beta: f64) -> Self {
        let mut visited = HashSet::new();
        visited.insert(start);
        Self {
            id,
            start,
            alpha,
            beta,
            state: AntState::Exploring,
            current: start,
            path: vec![start],
            cursor: 0,
            length: 0.0,
            visited,
            steps: 0,
        }
    }

    /// An ant using the colony's exponents.
    pub fn from_config(id: AntId, start: NodeId, config: &ColonyConfig) -> Self {
        Self::new(id, start, config.alpha, config.beta)
    }

    pub fn start(&self) -> NodeId {
        self.start
    }

    pub fn current(&self) -> NodeId {
        self.current
    }

    /// The forward path, start node first.
    pub fn path(&self) -> &[NodeId] {
        &self.path
    }

    /// Position of the return cursor in the forward path.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn path_length(&self) -> f64 {
        self.length
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn has_visited(&self, node: NodeId) -> bool {
        self.visited.contains(&node)
    }

    /// Whether the ant reached a goal, regardless of the return trip.
    pub fn reached_goal(&self) -> bool {
        matches!(self.state, AntState::Returning | AntState::Completed)
    }

    /// Directed edges of the forward path.
    pub fn path_edges(&self) -> Vec<EdgeKey> {
        EdgeKey::along(&self.path)
    }

    /// The forward path with its length.
    pub fn trail(&self) -> TrailPath {
        TrailPath::new(self.path.clone(), self.length)
    }

    /// Candidate moves from the current node, excluding visited nodes.
    fn candidates(&self, substrate: &dyn Substrate) -> Vec<Candidate> {
        substrate
            .neighbors(self.current)
            .into_iter()
            .filter(|(node, _)| !self.visited.contains(node))
            .map(|(node, distance)| {
                let pheromone = substrate.intensity(&EdgeKey::new(self.current, node));
                let weight =
                    selection::transition_weight(pheromone, distance, self.alpha, self.beta);
                Candidate { node, distance, weight }
            })
            .collect()
    }

    fn explore(&mut self, substrate: &dyn Substrate, rng: &mut dyn RngCore) -> AntState {
        if substrate.is_goal(self.current) {
            self.state = AntState::Returning;
            self.cursor = self.path.len() - 1;
            return AntState::FoundGoal;
        }

        let candidates = self.candidates(substrate);
        if candidates.is_empty() {
            self.state = AntState::Stuck;
            return self.state;
        }

        let r = rng.random::<f64>();
        let Some(next) = selection::select(&candidates, r).copied() else {
            // All weights zero or undefined: nothing is worth moving to
            self.state = AntState::Stuck;
            return self.state;
        };

        self.path.push(next.node);
        self.length += next.distance;
        self.visited.insert(next.node);
        self.current = next.node;
        self.state
    }

    fn walk_back(&mut self) -> AntState {
        if self.current == self.start {
            self.state = AntState::Completed;
            return self.state;
        }
        if self.cursor > 0 {
            self.cursor -= 1;
            self.current = self.path[self.cursor];
        }
        self.state
    }
}

impl Agent for Ant {
    fn id(&self) -> AntId {
        self.id
    }

    fn state(&self) -> AntState {
        self.state
    }

    fn outcome(&self) -> Outcome {
        match self.state {
            AntState::Completed => Outcome::Success,
            AntState::Stuck => Outcome::Failure,
            _ => Outcome::Pending,
        }
    }

    fn step(&mut self, substrate: &dyn Substrate, rng: &mut dyn RngCore) -> AntState {
        if self.state.is_terminal() {
            return self.state;
        }
        self.steps += 1;
        match self.state {
            AntState::Exploring => self.explore(substrate, rng),
            AntState::Returning | AntState::FoundGoal => self.walk_back(),
            AntState::Completed | AntState::Stuck => self.state,
        }
    }

    fn abandon(&mut self) {
        if self.state == AntState::Exploring {
            self.state = AntState::Stuck;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formica_core::graph::WeightedGraph;
    use formica_core::pheromone::PheromoneField;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    struct Terrain {
        graph: WeightedGraph,
        field: PheromoneField,
        goals: HashSet<NodeId>,
    }

    impl Substrate for Terrain {
        fn neighbors(&self, node: NodeId) -> Vec<(NodeId, f64)> {
            self.graph.neighbors(node)
        }

        fn intensity(&self, edge: &EdgeKey) -> f64 {
            self.field.get(edge)
        }

        fn is_goal(&self, node: NodeId) -> bool {
            self.goals.contains(&node)
        }

        fn node_count(&self) -> usize {
            self.graph.node_count()
        }
    }

    fn terrain(edges: &[EdgeSpec], goal: usize) -> Terrain {
        let graph = WeightedGraph::from_edges(edges).unwrap();
        let field = PheromoneField::for_edges(&graph.edges(), 0.1, 0.01);
        Terrain {
            graph,
            field,
            goals: [NodeId(goal)].into_iter().collect(),
        }
    }

    #[test]
    fn overflowing_weight_is_still_a_move() {
        // 1 / 1e-160 squared overflows to infinity
        let edges = [
            EdgeSpec::new(0, 1, 1e-160),
            EdgeSpec::new(0, 2, 1.0),
            EdgeSpec::new(1, 2, 1.0),
        ];
        let t = terrain(&edges, 2);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut ant = Ant::new(AntId(0), NodeId(0), 1.0, 2.0);

        assert_eq!(ant.step(&t, &mut rng), AntState::Exploring);
        assert_eq!(ant.current(), NodeId(1));
    }

    #[test]
    fn walks_a_line_and_returns() {
        let t = terrain(&[EdgeSpec::new(0, 1, 1.0), EdgeSpec::new(1, 2, 3.0)], 2);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut ant = Ant::new(AntId(0), NodeId(0), 1.0, 2.0);

        assert_eq!(ant.step(&t, &mut rng), AntState::Exploring);
        assert_eq!(ant.step(&t, &mut rng), AntState::Exploring);
        assert_eq!(ant.current(), NodeId(2));
        assert_eq!(ant.step(&t, &mut rng), AntState::FoundGoal);
        assert_eq!(ant.state(), AntState::Returning);
        assert_eq!(ant.outcome(), Outcome::Pending);

        // Two steps back to the nest, one to register arrival
        assert_eq!(ant.step(&t, &mut rng), AntState::Returning);
        assert_eq!(ant.current(), NodeId(1));
        assert_eq!(ant.step(&t, &mut rng), AntState::Returning);
        assert_eq!(ant.current(), NodeId(0));
        assert_eq!(ant.step(&t, &mut rng), AntState::Completed);

        assert_eq!(ant.outcome(), Outcome::Success);
        assert_eq!(ant.path(), &[NodeId(0), NodeId(1), NodeId(2)]);
        assert!((ant.path_length() - 4.0).abs() < 1e-12);
        assert_eq!(ant.cursor(), 0);
    }

    #[test]
    fn isolated_start_is_stuck_immediately() {
        let mut t = terrain(&[EdgeSpec::new(1, 2, 1.0)], 2);
        t.graph.add_node(0);
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut ant = Ant::new(AntId(0), NodeId(0), 1.0, 2.0);

        assert_eq!(ant.step(&t, &mut rng), AntState::Stuck);
        assert_eq!(ant.outcome(), Outcome::Failure);
        assert_eq!(ant.path(), &[NodeId(0)]);
    }

    #[test]
    fn dead_end_branch_gets_stuck_without_revisiting() {
        // 0 - 1 - 3 (dead end), goal 2 hangs off 0
        let t = terrain(
            &[
                EdgeSpec::new(0, 1, 1.0),
                EdgeSpec::new(1, 3, 1.0),
                EdgeSpec::new(0, 2, 1.0),
            ],
            2,
        );
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut ant = Ant::new(AntId(seed), NodeId(0), 1.0, 2.0);
            for _ in 0..10 {
                ant.step(&t, &mut rng);
            }
            let unique: HashSet<_> = ant.path().iter().collect();
            assert_eq!(unique.len(), ant.path().len());
            assert!(ant.is_terminal());
            if ant.outcome() == Outcome::Failure {
                assert_eq!(ant.path(), &[NodeId(0), NodeId(1), NodeId(3)]);
            }
        }
    }

    #[test]
    fn start_on_goal_completes_with_zero_length() {
        let t = terrain(&[EdgeSpec::new(0, 1, 1.0)], 0);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut ant = Ant::new(AntId(0), NodeId(0), 1.0, 2.0);

        assert_eq!(ant.step(&t, &mut rng), AntState::FoundGoal);
        assert_eq!(ant.step(&t, &mut rng), AntState::Completed);
        assert_eq!(ant.path_length(), 0.0);
        assert!(ant.path_edges().is_empty());
    }

    #[test]
    fn zero_weights_count_as_stuck() {
        let mut t = terrain(&[EdgeSpec::new(0, 1, 1.0)], 1);
        t.field = PheromoneField::new(0.0, 0.0);
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        // Untracked edges default to initial / 10 = 0
        let mut ant = Ant::new(AntId(0), NodeId(0), 1.0, 2.0);
        assert_eq!(ant.step(&t, &mut rng), AntState::Stuck);
    }

    #[test]
    fn terminal_steps_are_no_ops() {
        let t = terrain(&[EdgeSpec::new(1, 2, 1.0)], 2);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut ant = Ant::new(AntId(0), NodeId(0), 1.0, 2.0);
        ant.step(&t, &mut rng);
        let steps = ant.steps();
        assert_eq!(ant.step(&t, &mut rng), AntState::Stuck);
        assert_eq!(ant.steps(), steps);
    }

    #[test]
    fn abandon_only_strands_explorers() {
        let t = terrain(&[EdgeSpec::new(0, 1, 1.0)], 1);
        let mut rng = ChaCha8Rng::seed_from_u64(6);

        let mut explorer = Ant::new(AntId(0), NodeId(0), 1.0, 2.0);
        explorer.abandon();
        assert_eq!(explorer.state(), AntState::Stuck);

        let mut returner = Ant::new(AntId(1), NodeId(0), 1.0, 2.0);
        returner.step(&t, &mut rng);
        returner.step(&t, &mut rng);
        assert_eq!(returner.state(), AntState::Returning);
        returner.abandon();
        assert_eq!(returner.state(), AntState::Returning);
        assert_eq!(returner.outcome(), Outcome::Pending);
        assert!(returner.reached_goal());
    }
}
