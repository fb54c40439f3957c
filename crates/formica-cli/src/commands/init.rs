//! Initialize a new Formica project.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::{Config, CONFIG_FILE};

pub fn run(path: Option<String>) -> Result<()> {
    let base_path = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    println!("{} Initializing Formica project...", "→".blue());

    std::fs::create_dir_all(&base_path)
        .with_context(|| format!("Failed to create {}", base_path.display()))?;

    // Create .formica directory for sessions
    let data_dir = base_path.join(".formica");
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create {}", data_dir.display()))?;
    println!("  {} Created {}", "✓".green(), data_dir.display());

    // Create default config
    let config_path = base_path.join(CONFIG_FILE);
    if !config_path.exists() {
        Config::default().save(&config_path)?;
        println!("  {} Created {}", "✓".green(), config_path.display());
    } else {
        println!("  {} {} already exists", "•".yellow(), config_path.display());
    }

    println!();
    println!("{} Formica project initialized!", "✓".green().bold());
    println!();
    println!("Next steps:");
    println!("  {} formica generate graph.json", "1.".blue());
    println!("  {} formica run --graph graph.json --save .formica/session.json", "2.".blue());
    println!("  {} formica extract", "3.".blue());

    Ok(())
}
