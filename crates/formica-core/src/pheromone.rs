//! Pheromone field: the colony's shared, decaying memory.
//!
//! Every directed edge carries an intensity. Successful ants reinforce
//! the trail they walked (both directions), and once per round the
//! whole field evaporates toward a floor. The floor keeps every
//! feasible edge selectable, so a bad early exploration can always be
//! undone by later rounds.

use crate::types::{EdgeKey, EdgeSpec};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Directed-edge intensity map with decay and deposit.
///
/// Persist it through `snapshot`/`restore`; edge keys are not valid
/// JSON object keys.
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneField {
    intensities: HashMap<EdgeKey, f64>,
    initial: f64,
    floor: f64,
}

/// A serializable dump of the field, sorted by edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PheromoneEntry {
    pub edge: EdgeKey,
    pub intensity: f64,
}

impl PheromoneField {
    /// An empty field. Edges are tracked once `initialize` runs.
    pub fn new(initial: f64, floor: f64) -> Self {
        Self {
            intensities: HashMap::new(),
            initial,
            floor,
        }
    }

    /// A field tracking both directions of every edge at `initial`.
    pub fn for_edges(edges: &[EdgeSpec], initial: f64, floor: f64) -> Self {
        let mut field = Self::new(initial, floor);
        field.initialize(edges, initial);
        field
    }

    /// Set both directions of every edge to `initial_value`.
    pub fn initialize(&mut self, edges: &[EdgeSpec], initial_value: f64) {
        self.initial = initial_value;
        for edge in edges {
            for key in EdgeKey::both(edge.from, edge.to) {
                self.intensities.insert(key, initial_value);
            }
        }
    }

    /// Evaporate every entry: `max(floor, intensity * (1 - rate))`.
    pub fn decay(&mut self, rate: f64) {
        let retain = 1.0 - rate;
        let floor = self.floor;
        for intensity in self.intensities.values_mut() {
            *intensity = (*intensity * retain).max(floor);
        }
    }

    /// Reinforce a walked path.
    ///
    /// Each tracked edge and its tracked reverse gain `amount`. Edges the
    /// field does not track are ignored.
    pub fn deposit(&mut self, path_edges: &[EdgeKey], amount: f64) {
        for edge in path_edges {
            if let Some(intensity) = self.intensities.get_mut(edge) {
                *intensity += amount;
            }
            if let Some(intensity) = self.intensities.get_mut(&edge.reversed()) {
                *intensity += amount;
            }
        }
    }

    /// Stored intensity, or a weak default for untracked edges.
    pub fn get(&self, edge: &EdgeKey) -> f64 {
        self.tracked(edge).unwrap_or(self.initial / 10.0)
    }

    /// Stored intensity, if the edge is tracked.
    pub fn tracked(&self, edge: &EdgeKey) -> Option<f64> {
        self.intensities.get(edge).copied()
    }

    pub fn floor(&self) -> f64 {
        self.floor
    }

    pub fn initial(&self) -> f64 {
        self.initial
    }

    /// Number of tracked directed edges.
    pub fn len(&self) -> usize {
        self.intensities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intensities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&EdgeKey, &f64)> {
        self.intensities.iter()
    }

    /// Sum over all tracked entries.
    pub fn total_intensity(&self) -> f64 {
        self.intensities.values().sum()
    }

    /// Entries sorted by edge, for persistence and display.
    pub fn snapshot(&self) -> Vec<PheromoneEntry> {
        let mut entries: Vec<PheromoneEntry> = self
            .intensities
            .iter()
            .map(|(edge, intensity)| PheromoneEntry {
                edge: *edge,
                intensity: *intensity,
            })
            .collect();
        entries.sort_by_key(|e| e.edge);
        entries
    }

    /// Overwrite tracked entries from a snapshot. Untracked edges are skipped.
    pub fn restore(&mut self, entries: &[PheromoneEntry]) -> usize {
        let mut restored = 0;
        for entry in entries {
            if let Some(intensity) = self.intensities.get_mut(&entry.edge) {
                *intensity = entry.intensity;
                restored += 1;
            }
        }
        restored
    }
}
