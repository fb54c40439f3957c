//! Error types for Formica operations.
//!
//! Only construction-time problems are errors. Agents getting stuck,
//! rounds without a single success, and failed path extraction are
//! ordinary status values, not errors.

use crate::types::NodeId;
use thiserror::Error;

/// Result type for Formica operations.
pub type Result<T> = std::result::Result<T, FormicaError>;

/// Errors that can occur while building or restoring a colony.
#[derive(Debug, Clone, Error)]
pub enum FormicaError {
    /// Graph construction errors.
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
    /// Configuration errors.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    /// I/O errors (wrapped).
    #[error("I/O error: {0}")]
    Io(String),
    /// Serialization errors.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for FormicaError {
    fn from(e: std::io::Error) -> Self {
        FormicaError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for FormicaError {
    fn from(e: serde_json::Error) -> Self {
        FormicaError::Serialization(e.to_string())
    }
}

/// Graph-related errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// Edge distance must be finite and strictly positive.
    #[error("Invalid edge {from} -> {to}: distance {distance} (must be > 0)")]
    InvalidEdge {
        from: NodeId,
        to: NodeId,
        distance: f64,
    },
    /// Node is not part of the graph.
    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Invalid value.
    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
    /// Out of range.
    #[error("{field} out of range: {value} (must be in [{min}, {max}))")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },
}

// Convenience constructors
impl FormicaError {
    pub fn invalid_edge(from: NodeId, to: NodeId, distance: f64) -> Self {
        FormicaError::Graph(GraphError::InvalidEdge { from, to, distance })
    }

    pub fn unknown_node(id: NodeId) -> Self {
        FormicaError::Graph(GraphError::UnknownNode(id))
    }

    pub fn invalid_config(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        FormicaError::Config(ConfigError::InvalidValue {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        })
    }

    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, value: f64) -> Self {
        FormicaError::Config(ConfigError::OutOfRange {
            field: field.into(),
            min,
            max,
            value,
        })
    }

    /// Whether this is an `InvalidEdge` error.
    pub fn is_invalid_edge(&self) -> bool {
        matches!(self, FormicaError::Graph(GraphError::InvalidEdge { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_edge_message_names_the_edge() {
        let err = FormicaError::invalid_edge(NodeId(1), NodeId(2), -3.0);
        assert!(err.is_invalid_edge());
        assert_eq!(
            err.to_string(),
            "Graph error: Invalid edge 1 -> 2: distance -3 (must be > 0)"
        );
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: FormicaError = io.into();
        assert!(matches!(err, FormicaError::Io(_)));
    }
}
