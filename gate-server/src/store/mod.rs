//! Gate data access.
//!
//! A [`GateSource`] hands out the complete, current set of raw gate records.
//! Records are fetched fresh for every query and never cached; the route
//! planner decodes them itself.

mod error;
mod file;
mod memory;

use std::future::Future;

pub use error::DataAccessError;
pub use file::JsonFileGateStore;
pub use memory::InMemoryGateStore;

use crate::domain::{GateCode, GateRecord};

/// Trait for providing gate records.
///
/// This abstraction allows the planner and web layer to be tested with
/// in-memory data.
pub trait GateSource: Send + Sync {
    /// Fetch every gate record.
    fn fetch_gates(&self) -> impl Future<Output = Result<Vec<GateRecord>, DataAccessError>> + Send;

    /// Fetch the record for one gate, if present.
    ///
    /// Record codes are compared case-insensitively, ignoring surrounding
    /// whitespace.
    fn fetch_gate(
        &self,
        code: &GateCode,
    ) -> impl Future<Output = Result<Option<GateRecord>, DataAccessError>> + Send {
        async move {
            let records = self.fetch_gates().await?;
            Ok(records
                .into_iter()
                .find(|r| r.code.trim().eq_ignore_ascii_case(code.as_str())))
        }
    }
}
