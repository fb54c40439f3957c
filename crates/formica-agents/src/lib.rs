//! # Formica Agents
//!
//! Traversal agent implementations for ant colony optimization.
//!
//! - **Ant**: explores without revisiting nodes, walks its trail back
//!   to the nest after reaching food, and gets stuck at dead ends

pub mod ant;
pub mod prelude;
