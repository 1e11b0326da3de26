//! In-memory gate store.

use std::sync::Arc;

use crate::domain::GateRecord;

use super::{DataAccessError, GateSource};

/// Gate store that serves a fixed set of records.
///
/// Cloning is cheap; clones share the same records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGateStore {
    records: Arc<Vec<GateRecord>>,
}

impl InMemoryGateStore {
    /// Create a store serving `records`.
    pub fn new(records: Vec<GateRecord>) -> Self {
        Self {
            records: Arc::new(records),
        }
    }
}

impl GateSource for InMemoryGateStore {
    async fn fetch_gates(&self) -> Result<Vec<GateRecord>, DataAccessError> {
        Ok(self.records.as_ref().clone())
    }
}
