//! Gate and connection types.

use serde::Serialize;

use super::GateCode;

/// A raw gate row as supplied by a gate store.
///
/// `connections` is the still-encoded JSON list of `{"id", "hu"}` pairs.
/// Nothing here has been validated yet; decoding happens in the graph builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateRecord {
    pub code: String,
    pub name: String,
    pub connections: String,
}

impl GateRecord {
    /// Create a new gate record.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        connections: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            connections: connections.into(),
        }
    }
}

/// A directed, weighted edge to another gate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Connection {
    /// Target gate.
    pub target: GateCode,

    /// Travel cost in hyperspace units. Always finite and non-negative.
    pub weight: f64,
}

/// A decoded gate: code, display name and outbound connections in stored order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gate {
    pub code: GateCode,
    pub name: String,
    pub connections: Vec<Connection>,
}
