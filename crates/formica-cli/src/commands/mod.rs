//! CLI command implementations.

pub mod init;
pub mod generate;
pub mod run;
pub mod extract;

use anyhow::{Context, Result};
use formica::prelude::EdgeSpec;
use std::path::Path;

/// Read a graph file: a JSON array of `{from, to, distance}`.
pub fn read_graph(path: &Path) -> Result<Vec<EdgeSpec>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read graph: {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse graph: {}", path.display()))
}

/// Write a graph file.
pub fn write_graph(path: &Path, edges: &[EdgeSpec]) -> Result<()> {
    let json = serde_json::to_string_pretty(edges).context("Failed to serialize graph")?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write graph: {}", path.display()))
}

/// Render a node path as `0 → 3 → 7`.
pub fn format_path(nodes: &[formica::prelude::NodeId]) -> String {
    nodes
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(" → ")
}
