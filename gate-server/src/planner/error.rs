//! Planner error type.

use crate::domain::ValidationError;
use crate::graph::GraphParseError;
use crate::store::DataAccessError;

/// Any failure of a planning query.
///
/// An unreachable destination is not an error; it is a successful
/// [`RouteResult`](crate::graph::RouteResult) with an empty path.
#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    /// Scalar input was malformed or out of range
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Stored gate data could not be decoded
    #[error("gate data could not be decoded: {0}")]
    GraphParse(#[from] GraphParseError),

    /// Gate records could not be retrieved
    #[error("Database query failed: {0}")]
    DataAccess(#[from] DataAccessError),
}
