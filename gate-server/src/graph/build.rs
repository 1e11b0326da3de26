//! Graph construction from raw gate records.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::{Connection, Gate, GateCode, GateRecord};

use super::error::GraphParseError;

/// One encoded connection: `{"id": "SOL", "hu": "200"}`.
#[derive(Debug, Deserialize)]
struct EncodedConnection {
    id: String,
    hu: EncodedWeight,
}

/// Weights arrive as numeric strings, but plain JSON numbers are accepted too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EncodedWeight {
    Number(f64),
    Text(String),
}

/// Decode a raw gate record into a validated [`Gate`].
///
/// Connections keep their encoded order.
pub fn decode_gate(record: &GateRecord) -> Result<Gate, GraphParseError> {
    let code = GateCode::from_stored(&record.code).map_err(|source| {
        GraphParseError::InvalidGateCode {
            gate: record.code.clone(),
            source,
        }
    })?;

    let encoded: Vec<EncodedConnection> =
        serde_json::from_str(&record.connections).map_err(|e| {
            GraphParseError::MalformedEncoding {
                gate: code.to_string(),
                message: e.to_string(),
            }
        })?;

    let connections = encoded
        .into_iter()
        .map(|c| decode_connection(&code, c))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Gate {
        code,
        name: record.name.clone(),
        connections,
    })
}

fn decode_connection(
    gate: &GateCode,
    encoded: EncodedConnection,
) -> Result<Connection, GraphParseError> {
    let target =
        GateCode::from_stored(&encoded.id).map_err(|_| GraphParseError::InvalidTarget {
            gate: gate.to_string(),
            target: encoded.id.clone(),
        })?;

    let weight = match encoded.hu {
        EncodedWeight::Number(n) => n,
        EncodedWeight::Text(text) => {
            text.trim()
                .parse::<f64>()
                .map_err(|_| GraphParseError::NonNumericWeight {
                    gate: gate.to_string(),
                    target: target.to_string(),
                    value: text.clone(),
                })?
        }
    };

    if !weight.is_finite() || weight < 0.0 {
        return Err(GraphParseError::InvalidWeight {
            gate: gate.to_string(),
            target: target.to_string(),
            value: weight,
        });
    }

    Ok(Connection { target, weight })
}

/// Directed adjacency structure over gate codes.
///
/// Only gates that have a record are present; a connection may still point
/// at a code with no record of its own. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct GateGraph {
    adjacency: HashMap<GateCode, Vec<Connection>>,
}

impl GateGraph {
    /// Build a graph from raw gate records.
    ///
    /// Fails on the first record that cannot be decoded. If two records share
    /// a code, the later one wins.
    pub fn build(records: &[GateRecord]) -> Result<Self, GraphParseError> {
        let mut adjacency = HashMap::with_capacity(records.len());

        for record in records {
            let gate = decode_gate(record)?;
            if adjacency.contains_key(&gate.code) {
                warn!(gate = %gate.code, "duplicate gate record, keeping the later one");
            }
            adjacency.insert(gate.code, gate.connections);
        }

        let graph = Self { adjacency };
        debug!(
            gates = graph.len(),
            connections = graph.edge_count(),
            "built gate graph"
        );
        Ok(graph)
    }

    /// Whether the gate has a record in this graph.
    pub fn contains(&self, code: &GateCode) -> bool {
        self.adjacency.contains_key(code)
    }

    /// Outbound connections of a gate, in stored order.
    ///
    /// Empty for gates absent from the graph.
    pub fn neighbors(&self, code: &GateCode) -> &[Connection] {
        self.adjacency.get(code).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of gates.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns true if the graph has no gates.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Total number of directed connections.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}
