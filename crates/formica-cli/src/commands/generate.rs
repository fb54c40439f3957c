//! Generate a random graph file.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use crate::commands::write_graph;
use crate::config::Config;

pub fn run(
    output: &str,
    nodes: Option<usize>,
    connectivity: Option<f64>,
    seed: Option<u64>,
) -> Result<()> {
    let config = Config::load()?;
    let mut spec = config.graph;
    if let Some(nodes) = nodes {
        spec.nodes = nodes;
    }
    if let Some(connectivity) = connectivity {
        spec.connectivity = connectivity;
    }
    let seed = seed.or(config.colony.seed).unwrap_or_else(rand::random);

    let generated = spec
        .generate(seed)
        .context("Failed to generate graph")?;
    write_graph(Path::new(output), &generated.edges)?;

    println!("{} Generated graph", "✓".green().bold());
    println!(
        "  Nodes: {}, edges: {}, seed: {}",
        spec.nodes.to_string().cyan(),
        generated.edges.len().to_string().cyan(),
        seed.to_string().cyan()
    );
    println!(
        "  Nest: {}, food: {}",
        generated.start.to_string().yellow(),
        generated
            .goals
            .iter()
            .map(|g| g.to_string())
            .collect::<Vec<_>>()
            .join(", ")
            .yellow()
    );
    println!("  Written to {}", output.cyan());

    Ok(())
}
