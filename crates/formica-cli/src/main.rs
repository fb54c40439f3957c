//! Formica CLI - Command-line driver for ant colony optimization runs.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "formica")]
#[command(author, version, long_about = None)]
#[command(about = "Formica - Ant colony optimization over weighted graphs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (debug logging; RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default formica.toml
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Generate a random connected graph as JSON
    Generate {
        /// Output file path
        output: String,

        /// Number of nodes (default: from formica.toml)
        #[arg(short, long)]
        nodes: Option<usize>,

        /// Probability of an extra edge between two nodes
        #[arg(short, long)]
        connectivity: Option<f64>,

        /// Seed for the generator
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Run the colony on a graph
    Run {
        /// Graph JSON file (array of {from, to, distance}); generated when omitted
        #[arg(short, long)]
        graph: Option<String>,

        /// Nest node
        #[arg(long, default_value = "0")]
        start: usize,

        /// Food node(s) (default: highest node id)
        #[arg(long)]
        goal: Vec<usize>,

        /// Number of rounds (default: from formica.toml)
        #[arg(short, long)]
        rounds: Option<u64>,

        /// Ants per round (default: from formica.toml)
        #[arg(short, long)]
        agents: Option<usize>,

        /// Seed for a reproducible run
        #[arg(short, long)]
        seed: Option<u64>,

        /// Step ants one after another instead of on the thread pool
        #[arg(long)]
        serial: bool,

        /// Print a progress line every N rounds
        #[arg(long, default_value = "10")]
        report_every: u64,

        /// Save the final colony to this session file
        #[arg(long)]
        save: Option<String>,
    },

    /// Print the strongest trail of a saved session
    Extract {
        /// Session file
        #[arg(default_value = ".formica/session.json")]
        session: String,

        /// Walk to this goal only
        #[arg(long)]
        goal: Option<usize>,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Init { path } => commands::init::run(path),
        Commands::Generate { output, nodes, connectivity, seed } => {
            commands::generate::run(&output, nodes, connectivity, seed)
        }
        Commands::Run {
            graph,
            start,
            goal,
            rounds,
            agents,
            seed,
            serial,
            report_every,
            save,
        } => commands::run::run(commands::run::RunArgs {
            graph,
            start,
            goals: goal,
            rounds,
            agents,
            seed,
            serial,
            report_every,
            save,
            verbose: cli.verbose,
        }),
        Commands::Extract { session, goal } => commands::extract::run(&session, goal),
    }
}
