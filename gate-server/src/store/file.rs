//! JSON-file-backed gate store.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, error};

use crate::domain::GateRecord;

use super::{DataAccessError, GateSource};

/// One stored gate, in either of the accepted layouts.
///
/// Rows mirror the `(code, name, connections)` tuples of the gate table;
/// objects are easier to write by hand. In the object form `connections`
/// may be the encoded string or the list itself.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoredGate {
    Row(String, String, String),
    Object {
        code: String,
        name: String,
        connections: serde_json::Value,
    },
}

impl From<StoredGate> for GateRecord {
    fn from(stored: StoredGate) -> Self {
        match stored {
            StoredGate::Row(code, name, connections) => GateRecord::new(code, name, connections),
            StoredGate::Object {
                code,
                name,
                connections,
            } => {
                let connections = match connections {
                    serde_json::Value::String(encoded) => encoded,
                    other => other.to_string(),
                };
                GateRecord::new(code, name, connections)
            }
        }
    }
}

/// Gate store that reads a JSON file on every fetch.
///
/// The file is opened, read and closed inside each call, so no handle
/// outlives a query whether it succeeds or fails.
#[derive(Debug, Clone)]
pub struct JsonFileGateStore {
    path: PathBuf,
}

impl JsonFileGateStore {
    /// Create a store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GateSource for JsonFileGateStore {
    async fn fetch_gates(&self) -> Result<Vec<GateRecord>, DataAccessError> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| DataAccessError::Io {
                path: self.path.clone(),
                source,
            })
            .inspect_err(|e| error!(error = %e, "gate data read failed"))?;

        let stored: Vec<StoredGate> = serde_json::from_str(&contents)
            .map_err(|e| DataAccessError::Malformed {
                path: self.path.clone(),
                message: e.to_string(),
            })
            .inspect_err(|e| error!(error = %e, "gate data malformed"))?;

        debug!(path = %self.path.display(), gates = stored.len(), "loaded gate records");
        Ok(stored.into_iter().map(GateRecord::from).collect())
    }
}
