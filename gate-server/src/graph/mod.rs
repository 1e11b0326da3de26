//! Gate network graph and cheapest-route search.
//!
//! Gate records are decoded into a [`GateGraph`] once per query, searched
//! with Dijkstra's algorithm, and then dropped. Nothing is shared between
//! queries.

mod build;
mod error;
mod route;

pub use build::{GateGraph, decode_gate};
pub use error::GraphParseError;
pub use route::{RouteResult, find_cheapest_route};

use crate::domain::{GateCode, GateRecord};

/// Build a graph from `records` and search it for the cheapest route.
pub fn cheapest_route(
    records: &[GateRecord],
    start: &GateCode,
    end: &GateCode,
) -> Result<RouteResult, GraphParseError> {
    let graph = GateGraph::build(records)?;
    Ok(find_cheapest_route(&graph, start, end))
}
