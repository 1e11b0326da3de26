//! Web layer for the gate planner.
//!
//! Provides HTTP endpoints for gate lookup, route finding and transport
//! cost comparison.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
