//! Domain types for the gate planner.
//!
//! This module contains the core domain model types. Validated types
//! enforce their invariants at construction time, so code that receives
//! them can trust their validity.

mod error;
mod gate;
mod gate_code;

pub use error::ValidationError;
pub use gate::{Connection, Gate, GateRecord};
pub use gate_code::{GateCode, InvalidGateCode, MAX_GATE_CODE_LEN};
