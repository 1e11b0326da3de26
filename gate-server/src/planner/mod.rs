//! Query orchestration.
//!
//! Ties a [`GateSource`](crate::store::GateSource) to the route finder and
//! exposes the two planning queries: cheapest route between gates and the
//! cheaper ground-transport option.

mod error;
mod service;

pub use error::PlannerError;
pub use service::Planner;
