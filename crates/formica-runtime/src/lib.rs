//! # Formica Runtime
//!
//! Colony management, graph generation, and session persistence.
//!
//! The runtime is the "nest": it owns the terrain (graph and pheromone
//! field), sends out a batch of ants every round, lets the successful
//! ones lay down trails, and evaporates the field between rounds.

pub mod substrate_impl;
pub mod colony;
pub mod metrics;
pub mod generator;
pub mod session;
pub mod prelude;
