//! Ant traversal tests against a hand-built terrain.

use formica_agents::ant::Ant;
use formica_core::agent::Agent;
use formica_core::graph::WeightedGraph;
use formica_core::pheromone::PheromoneField;
use formica_core::substrate::Substrate;
use formica_core::types::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

struct Terrain {
    graph: WeightedGraph,
    field: PheromoneField,
    goals: HashSet<NodeId>,
}

impl Terrain {
    fn new(edges: &[EdgeSpec], goals: &[usize]) -> Self {
        let graph = WeightedGraph::from_edges(edges).expect("valid edges");
        let field = PheromoneField::for_edges(&graph.edges(), 0.1, 0.01);
        Self {
            graph,
            field,
            goals: goals.iter().map(|g| NodeId(*g)).collect(),
        }
    }
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

fn run_to_end(ant: &mut Ant, terrain: &Terrain, rng: &mut ChaCha8Rng, budget: usize) -> usize {
    let mut taken = 0;
    while !ant.is_terminal() && taken < budget {
        ant.step(terrain, rng);
        taken += 1;
    }
    taken
}

/// Two routes from 0 to 3: 0-1-3 and 0-2-3, all edges equal.
fn diamond() -> Terrain {
    Terrain::new(
        &[
            EdgeSpec::new(0, 1, 1.0),
            EdgeSpec::new(1, 3, 1.0),
            EdgeSpec::new(0, 2, 1.0),
            EdgeSpec::new(2, 3, 1.0),
        ],
        &[3],
    )
}

#[test]
fn return_trip_keeps_forward_path() {
    let terrain = diamond();
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut ant = Ant::new(AntId(0), NodeId(0), 1.0, 2.0);

    run_to_end(&mut ant, &terrain, &mut rng, 20);

    assert_eq!(ant.outcome(), Outcome::Success);
    assert_eq!(ant.path().len(), 3);
    assert_eq!(ant.path().first(), Some(&NodeId(0)));
    assert_eq!(ant.path().last(), Some(&NodeId(3)));
    assert_eq!(ant.current(), NodeId(0));
    assert!((ant.trail().length - 2.0).abs() < 1e-12);
    assert_eq!(ant.path_edges().len(), 2);
}

#[test]
fn never_revisits_a_node() {
    // Dense graph with a far-away goal
    let mut edges = Vec::new();
    for a in 0..6usize {
        for b in (a + 1)..6 {
            edges.push(EdgeSpec::new(a, b, 1.0 + (a + b) as f64 * 0.1));
        }
    }
    let terrain = Terrain::new(&edges, &[5]);

    for seed in 0..100 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut ant = Ant::new(AntId(seed), NodeId(0), 1.0, 2.0);
        run_to_end(&mut ant, &terrain, &mut rng, 50);

        let unique: HashSet<_> = ant.path().iter().copied().collect();
        assert_eq!(unique.len(), ant.path().len(), "seed {} revisited a node", seed);
        assert_eq!(ant.outcome(), Outcome::Success);
    }
}

#[test]
fn reinforced_branch_attracts_more_ants() {
    let mut terrain = diamond();
    terrain
        .field
        .deposit(&EdgeKey::along(&[NodeId(0), NodeId(2), NodeId(3)]), 1.0);

    let mut through_two = 0;
    let trials = 500;
    for seed in 0..trials {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut ant = Ant::new(AntId(seed), NodeId(0), 1.0, 2.0);
        run_to_end(&mut ant, &terrain, &mut rng, 10);
        if ant.path().contains(&NodeId(2)) {
            through_two += 1;
        }
    }

    // 1.1 vs 0.1 on the first edge: about 92% of ants go through node 2
    let share = through_two as f64 / trials as f64;
    assert!(share > 0.85, "share through reinforced branch: {:.3}", share);
}

#[test]
fn stuck_ant_keeps_partial_path() {
    // 0 - 1 - 2, goal 4 unreachable
    let terrain = Terrain::new(
        &[
            EdgeSpec::new(0, 1, 1.0),
            EdgeSpec::new(1, 2, 1.0),
            EdgeSpec::new(3, 4, 1.0),
        ],
        &[4],
    );
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut ant = Ant::new(AntId(0), NodeId(0), 1.0, 2.0);
    run_to_end(&mut ant, &terrain, &mut rng, 10);

    assert_eq!(ant.state(), AntState::Stuck);
    assert_eq!(ant.outcome(), Outcome::Failure);
    assert_eq!(ant.path(), &[NodeId(0), NodeId(1), NodeId(2)]);
    assert!(!ant.reached_goal());
}

#[test]
fn identical_seeds_walk_identically() {
    let mut edges = Vec::new();
    for a in 0..8usize {
        edges.push(EdgeSpec::new(a, (a + 1) % 8, 1.0 + a as f64));
        edges.push(EdgeSpec::new(a, (a + 3) % 8, 2.0));
    }
    let terrain = Terrain::new(&edges, &[7]);

    let walk = |seed| {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut ant = Ant::new(AntId(0), NodeId(0), 1.0, 2.0);
        run_to_end(&mut ant, &terrain, &mut rng, 40);
        ant.path().to_vec()
    };

    assert_eq!(walk(99), walk(99));
}
