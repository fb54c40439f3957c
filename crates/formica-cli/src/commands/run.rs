//! Run the colony on a graph.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use formica::prelude::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

use crate::commands::{format_path, read_graph};
use crate::config::Config;

pub struct RunArgs {
    pub graph: Option<String>,
    pub start: usize,
    pub goals: Vec<usize>,
    pub rounds: Option<u64>,
    pub agents: Option<usize>,
    pub seed: Option<u64>,
    pub serial: bool,
    pub report_every: u64,
    pub save: Option<String>,
    pub verbose: bool,
}

pub fn run(args: RunArgs) -> Result<()> {
    let config = Config::load()?;
    let mut colony_config = config.colony;
    if let Some(rounds) = args.rounds {
        colony_config.rounds = rounds;
    }
    if let Some(agents) = args.agents {
        colony_config.agents_per_round = agents;
    }
    if args.serial {
        colony_config.parallel = false;
    }
    let seed = args.seed.or(colony_config.seed).unwrap_or_else(rand::random);
    colony_config.seed = Some(seed);

    // Load or generate the terrain
    let (edges, start, mut goals) = match &args.graph {
        Some(path) => {
            println!("{} Loading graph from {}...", "→".blue(), path.cyan());
            let edges = read_graph(Path::new(path))?;
            (edges, NodeId(args.start), Vec::new())
        }
        None => {
            println!(
                "{} Generating a {}-node graph (seed {})...",
                "→".blue(),
                config.graph.nodes.to_string().cyan(),
                seed.to_string().cyan()
            );
            let generated = config
                .graph
                .generate(seed)
                .context("Failed to generate graph")?;
            (generated.edges, generated.start, generated.goals)
        }
    };
    if !args.goals.is_empty() {
        goals = args.goals.iter().map(|g| NodeId(*g)).collect();
    } else if goals.is_empty() {
        // Food defaults to the highest node id
        match edges.iter().flat_map(|e| [e.from, e.to]).max() {
            Some(last) => goals.push(last),
            None => bail!("Graph has no edges"),
        }
    }

    let graph = WeightedGraph::from_edges(&edges).context("Invalid graph")?;
    // Three steps per node covers the longest simple path plus the trip home
    let scaled_steps = graph.node_count() * 3;
    if colony_config.max_steps < scaled_steps {
        tracing::debug!(
            configured = colony_config.max_steps,
            scaled = scaled_steps,
            "raising step budget to fit the graph"
        );
        colony_config.max_steps = scaled_steps;
    }

    let rounds = colony_config.rounds;
    let agents = colony_config.agents_per_round;
    let mut colony =
        Colony::new(colony_config, graph, start, goals.iter().copied()).context("Invalid colony")?;

    let stats = colony.stats();
    println!(
        "  Graph: {} nodes, {} edges",
        stats.graph_nodes.to_string().cyan(),
        stats.graph_edges.to_string().cyan()
    );
    println!(
        "  Nest: {}, food: {}",
        start.to_string().yellow(),
        goals.iter().map(|g| g.to_string()).collect::<Vec<_>>().join(", ").yellow()
    );
    println!(
        "{} Running {} rounds of {} ants...",
        "→".blue(),
        rounds.to_string().cyan(),
        agents.to_string().cyan()
    );

    let pb = ProgressBar::new(rounds);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} rounds")?
            .progress_chars("#>-"),
    );

    for _ in 0..rounds {
        let report = colony.round();
        let last = report.round + 1 == rounds;
        let periodic = args.report_every > 0 && report.round % args.report_every == 0;
        if periodic || last || (args.verbose && report.is_exhausted()) {
            pb.println(round_line(&report, agents));
        }
        pb.inc(1);
    }
    pb.finish_with_message("done");

    println!();
    println!("{} Run complete!", "✓".green().bold());
    let summary = RunSummary::from_reports(colony.reports());
    print_summary(&summary);

    println!();
    match colony.extract_best_path() {
        Extraction::Found(path) => {
            println!("  Greedy pheromone path: {}", format_path(&path.nodes).green());
            println!("  Greedy path length:    {:.2}", path.length);
        }
        Extraction::NoPathFound => {
            println!("  Greedy pheromone path: {}", "no path found".red());
        }
    }

    if let Some(save) = &args.save {
        let path = Path::new(save);
        save_session(&colony, path)
            .with_context(|| format!("Failed to save session: {}", path.display()))?;
        println!();
        println!("{} Session saved to {}", "✓".green().bold(), save.cyan());
    }

    Ok(())
}

fn round_line(report: &RoundReport, agents: usize) -> String {
    match (report.round_best, report.overall_best_length()) {
        (Some(best), Some(overall)) => format!(
            "  Round {:3}: success={}/{}, best={:.2}, overall_best={:.2}",
            report.round, report.successes, agents, best, overall
        ),
        _ => format!("  Round {:3}: {}", report.round, "no successful ants".yellow()),
    }
}
