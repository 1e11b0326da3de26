//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Connection, Gate};
use crate::graph::RouteResult;
use crate::transport::TransportQuote;

/// A connection in a gate result.
#[derive(Debug, Serialize)]
pub struct ConnectionResult {
    /// Target gate code
    pub id: String,

    /// Weight in hyperspace units
    pub hu: f64,
}

impl ConnectionResult {
    pub fn from_connection(connection: &Connection) -> Self {
        Self {
            id: connection.target.to_string(),
            hu: connection.weight,
        }
    }
}

/// A gate in responses.
#[derive(Debug, Serialize)]
pub struct GateResult {
    /// Gate code
    pub code: String,

    /// Display name
    pub name: String,

    /// Outbound connections, in stored order
    pub connections: Vec<ConnectionResult>,
}

impl GateResult {
    pub fn from_gate(gate: &Gate) -> Self {
        Self {
            code: gate.code.to_string(),
            name: gate.name.clone(),
            connections: gate
                .connections
                .iter()
                .map(ConnectionResult::from_connection)
                .collect(),
        }
    }
}

/// Response listing every gate.
#[derive(Debug, Serialize)]
pub struct GatesResponse {
    pub result: Vec<GateResult>,
}

/// Response for a single gate.
#[derive(Debug, Serialize)]
pub struct GateResponse {
    pub result: GateResult,
}

/// Response for a route query.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Gate codes from start to end; empty when there is no route
    pub cheapest_route: Vec<String>,

    /// Total route cost; `null` when there is no route (JSON has no infinity)
    pub cost: Option<f64>,

    /// Explanation when there is no route
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RouteResponse {
    pub fn from_route(result: &RouteResult) -> Self {
        Self {
            cheapest_route: result.path.iter().map(ToString::to_string).collect(),
            cost: result.cost.is_finite().then_some(result.cost),
            message: None,
        }
    }

    /// The body returned when no route exists.
    pub fn no_route(from: &str, to: &str) -> Self {
        Self {
            cheapest_route: Vec::new(),
            cost: None,
            message: Some(format!("No route found from {from} to {to}.")),
        }
    }
}

/// Query parameters for the transport endpoint.
///
/// Kept as strings so parse failures can be reported per field.
#[derive(Debug, Deserialize)]
pub struct TransportQuery {
    /// Number of passengers
    pub passengers: Option<String>,

    /// Number of parking days
    pub parking: Option<String>,
}

/// Response for the transport endpoint.
#[derive(Debug, Serialize)]
pub struct TransportResponse {
    /// "Personal Vehicle" or "HSTC Vehicle"
    pub vehicle: &'static str,

    /// Cost of the chosen option
    pub cost: f64,

    /// Vehicles of the chosen kind needed
    pub vehicles: u64,
}

impl TransportResponse {
    pub fn from_quote(quote: &TransportQuote) -> Self {
        Self {
            vehicle: quote.option.vehicle_name(),
            cost: quote.cost,
            vehicles: quote.vehicles,
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GateCode;

    #[test]
    fn route_response_serializes_cost() {
        let result = RouteResult {
            path: vec![GateCode::parse("A").unwrap(), GateCode::parse("B").unwrap()],
            cost: 10.0,
            gates_explored: 1,
        };
        let json = serde_json::to_value(RouteResponse::from_route(&result)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"cheapest_route": ["A", "B"], "cost": 10.0})
        );
    }

    #[test]
    fn no_route_serializes_null_cost() {
        let json = serde_json::to_value(RouteResponse::no_route("A", "B")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "cheapest_route": [],
                "cost": null,
                "message": "No route found from A to B."
            })
        );
    }

    #[test]
    fn unreachable_result_has_null_cost() {
        let response = RouteResponse::from_route(&RouteResult::unreachable(0));
        assert!(response.cost.is_none());
        assert!(response.cheapest_route.is_empty());
    }
}
