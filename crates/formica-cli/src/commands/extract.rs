//! Print the strongest trail of a saved session.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use formica::prelude::*;
use std::path::Path;

use crate::commands::format_path;

pub fn run(session: &str, goal: Option<usize>) -> Result<()> {
    let path = Path::new(session);
    if !path.exists() {
        bail!(
            "Session not found: {}. Run {} first.",
            session,
            "formica run --save <file>".cyan()
        );
    }

    let state = load_session(path)
        .with_context(|| format!("Failed to load session: {}", path.display()))?;
    let colony = restore_colony(&state).context("Failed to restore colony")?;

    let stats = colony.stats();
    println!(
        "{} Session {} (round {})",
        "→".blue(),
        state.metadata.session_id.cyan(),
        stats.round.to_string().cyan()
    );
    println!(
        "  Graph: {} nodes, {} edges",
        stats.graph_nodes.to_string().cyan(),
        stats.graph_edges.to_string().cyan()
    );
    if let Some(best) = colony.best() {
        println!(
            "  Best path seen:        {} ({:.2})",
            format_path(&best.nodes),
            best.length
        );
    }

    let extraction = match goal {
        Some(goal) => colony.extract_best_path_to(NodeId(goal)),
        None => colony.extract_best_path(),
    };
    match extraction {
        Extraction::Found(path) => {
            println!("  Greedy pheromone path: {}", format_path(&path.nodes).green());
            println!("  Greedy path length:    {:.2}", path.length);
        }
        Extraction::NoPathFound => {
            println!("  Greedy pheromone path: {}", "no path found".red());
        }
    }

    Ok(())
}
