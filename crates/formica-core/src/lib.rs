//! # Formica Core
//!
//! Core traits and types for ant colony optimization over weighted graphs.
//!
//! The pieces every other crate builds on:
//!
//! - **WeightedGraph**: undirected terrain with strictly positive distances
//! - **PheromoneField**: directed-edge trail intensities with decay and deposit
//! - **selection**: the ACO transition rule and roulette-wheel sampling
//! - **Agent** / **Substrate**: the seam between foragers and their environment
//!
//! ## Quick Start
//!
//! ```rust
//! use formica_core::prelude::*;
//!
//! let graph = WeightedGraph::from_edges(&[
//!     EdgeSpec::new(0, 1, 2.0),
//!     EdgeSpec::new(1, 2, 2.0),
//!     EdgeSpec::new(0, 2, 1.0),
//! ]).unwrap();
//!
//! let mut field = PheromoneField::for_edges(&graph.edges(), 0.1, 0.01);
//! field.deposit(&[EdgeKey::new(0, 2)], 1.0);
//! assert!(field.get(&EdgeKey::new(2, 0)) > field.get(&EdgeKey::new(0, 1)));
//! ```

pub mod types;
pub mod error;
pub mod config;
pub mod graph;
pub mod pheromone;
pub mod selection;
pub mod substrate;
pub mod agent;
pub mod prelude;
