//! HTTP route handlers.

use std::str::FromStr;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::domain::ValidationError;
use crate::planner::{Planner, PlannerError};
use crate::store::GateSource;
use crate::transport::compare_transport_cost;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router<S: GateSource + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/gates", get(list_gates::<S>))
        .route("/gates/:gate_code", get(get_gate::<S>))
        .route("/gates/:gate_code/to/:target_gate_code", get(cheapest_route::<S>))
        .route("/transport/:distance", get(transport_cost))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List every gate.
async fn list_gates<S: GateSource>(
    State(state): State<AppState<S>>,
) -> Result<Json<GatesResponse>, AppError> {
    let gates = Planner::new(state.gates.as_ref()).list_gates().await?;

    Ok(Json(GatesResponse {
        result: gates.iter().map(GateResult::from_gate).collect(),
    }))
}

/// Look up one gate by code.
async fn get_gate<S: GateSource>(
    State(state): State<AppState<S>>,
    Path(gate_code): Path<String>,
) -> Result<Json<GateResponse>, AppError> {
    let gate = Planner::new(state.gates.as_ref())
        .gate(&gate_code)
        .await?
        .ok_or_else(|| AppError::NotFound {
            message: format!("No gate found with code {}", gate_code.trim().to_uppercase()),
        })?;

    Ok(Json(GateResponse {
        result: GateResult::from_gate(&gate),
    }))
}

/// Find the cheapest route between two gates.
///
/// Responds 404 with an empty route when the target is unreachable.
async fn cheapest_route<S: GateSource>(
    State(state): State<AppState<S>>,
    Path((gate_code, target_gate_code)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let result = Planner::new(state.gates.as_ref())
        .cheapest_route(&gate_code, &target_gate_code)
        .await?;

    if result.is_reachable() {
        Ok(Json(RouteResponse::from_route(&result)).into_response())
    } else {
        let body = RouteResponse::no_route(
            &gate_code.trim().to_uppercase(),
            &target_gate_code.trim().to_uppercase(),
        );
        Ok((StatusCode::NOT_FOUND, Json(body)).into_response())
    }
}

/// Parse a required scalar parameter, naming `field` on failure.
fn parse_param<T: FromStr>(field: &'static str, raw: Option<&str>) -> Result<T, ValidationError> {
    let raw = raw.ok_or_else(|| ValidationError::new(field, "is required"))?;
    raw.trim()
        .parse()
        .map_err(|_| ValidationError::new(field, format!("{raw:?} is not a valid number")))
}

/// Choose the cheaper vehicle for a trip.
async fn transport_cost(
    Path(distance): Path<String>,
    Query(query): Query<TransportQuery>,
) -> Result<Json<TransportResponse>, AppError> {
    let distance: f64 = parse_param("distance", Some(distance.as_str()))?;
    let passengers: i64 = parse_param("passengers", query.passengers.as_deref())?;
    let parking_days: i64 = parse_param("parking", query.parking.as_deref())?;

    let quote = compare_transport_cost(distance, parking_days, passengers)?;
    info!(
        distance,
        passengers,
        parking_days,
        vehicle = quote.option.vehicle_name(),
        cost = quote.cost,
        "transport cost compared"
    );

    Ok(Json(TransportResponse::from_quote(&quote)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<PlannerError> for AppError {
    fn from(e: PlannerError) -> Self {
        match e {
            PlannerError::Validation(v) => v.into(),
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
