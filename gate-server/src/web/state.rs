//! Application state for the web layer.

use std::sync::Arc;

/// Shared application state.
///
/// Holds the gate source every request reads from. There is no other
/// shared state: graphs are built per request.
pub struct AppState<S> {
    /// Gate record source
    pub gates: Arc<S>,
}

impl<S> AppState<S> {
    /// Create a new app state.
    pub fn new(gates: S) -> Self {
        Self {
            gates: Arc::new(gates),
        }
    }
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            gates: Arc::clone(&self.gates),
        }
    }
}
