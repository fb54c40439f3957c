//! Session save/load tests.

use formica_core::config::ColonyConfig;
use formica_core::types::*;
use formica_runtime::colony::Colony;
use formica_runtime::generator::GraphSpec;
use formica_runtime::session::{load_session, restore_colony, save_session};

fn seeded_colony() -> Colony {
    let generated = GraphSpec::default().with_nodes(12).generate(31).unwrap();
    let config = ColonyConfig::default().with_seed(31).with_rounds(10);
    Colony::from_edges(config, &generated.edges, generated.start, generated.goals).unwrap()
}

#[test]
fn saved_session_restores_trails_and_progress() {
    let mut colony = seeded_colony();
    colony.run_rounds(10);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sessions").join("run.json");
    save_session(&colony, &path).unwrap();
    assert!(path.exists());

    let state = load_session(&path).unwrap();
    assert_eq!(state.metadata.round, 10);
    assert_eq!(state.metadata.run_id, colony.run_id().to_string());

    let restored = restore_colony(&state).unwrap();
    assert_eq!(restored.current_round(), 10);
    assert_eq!(restored.seed(), colony.seed());
    assert_eq!(
        restored.substrate().graph().edge_count(),
        colony.substrate().graph().edge_count()
    );

    let original = colony.field().snapshot();
    let reloaded = restored.field().snapshot();
    assert_eq!(original.len(), reloaded.len());
    for (a, b) in original.iter().zip(&reloaded) {
        assert_eq!(a.edge, b.edge);
        assert!((a.intensity - b.intensity).abs() < 1e-9);
    }

    let best = colony.best().unwrap();
    let restored_best = restored.best().unwrap();
    assert_eq!(best.nodes, restored_best.nodes);
    assert_eq!(
        colony.extract_best_path().path().map(|p| p.nodes.clone()),
        restored.extract_best_path().path().map(|p| p.nodes.clone())
    );
}

#[test]
fn restored_colony_keeps_running() {
    let mut colony = seeded_colony();
    colony.run_rounds(3);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.json");
    save_session(&colony, &path).unwrap();

    let mut restored = restore_colony(&load_session(&path).unwrap()).unwrap();
    let report = restored.round();
    assert_eq!(report.round, 3);
    let best_before = colony.best().map(|p| p.length).unwrap_or(f64::INFINITY);
    let best_after = report.overall_best_length().unwrap_or(f64::INFINITY);
    assert!(best_after <= best_before + 1e-9);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_session(&dir.path().join("nope.json")).unwrap_err();
    assert!(err.to_string().starts_with("I/O error"));
}

#[test]
fn corrupt_file_is_serialization_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "{ not json").unwrap();
    let err = load_session(&path).unwrap_err();
    assert!(err.to_string().starts_with("Serialization error"));
}

#[test]
fn session_lists_start_and_goals() {
    let colony = seeded_colony();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fresh.json");
    save_session(&colony, &path).unwrap();

    let state = load_session(&path).unwrap();
    assert_eq!(state.start, NodeId(0));
    assert_eq!(state.goals, vec![NodeId(11)]);
    assert!(state.best.is_none());
    assert_eq!(state.pheromones.len(), state.edges.len() * 2);
}
