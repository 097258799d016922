//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::{info, warn};

use crate::planner::SearchError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/network", get(network))
        .route("/api/route/bfs", get(route_fewest_hops))
        .route("/api/route/astar", get(route_cheapest))
        .route("/api/route/compare", get(route_compare))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// All stations and connections, for drawing the network.
async fn network(State(state): State<AppState>) -> Json<NetworkResponse> {
    Json(NetworkResponse::from_network(&state.network))
}

/// Minimum-hop path between two stations.
async fn route_fewest_hops(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Result<Json<HopsResponse>, AppError> {
    validate(&req)?;
    let path = found(state.planner().fewest_hops(&req.from, &req.to))?;
    info!(from = %req.from, to = %req.to, found = path.is_some(), "Served fewest-hops query");
    Ok(Json(HopsResponse::new(&req.from, &req.to, path.as_ref())))
}

/// Minimum-cost route between two stations.
async fn route_cheapest(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Result<Json<CostResponse>, AppError> {
    validate(&req)?;
    let route = found(state.planner().cheapest(&req.from, &req.to))?;
    info!(from = %req.from, to = %req.to, found = route.is_some(), "Served cheapest-route query");
    Ok(Json(CostResponse::new(&req.from, &req.to, route.as_ref())))
}

/// Both answers for the same pair.
async fn route_compare(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Result<Json<CompareResponse>, AppError> {
    validate(&req)?;
    let comparison = found(state.planner().compare(&req.from, &req.to))?.unwrap_or_default();
    info!(from = %req.from, to = %req.to, "Served comparison query");
    Ok(Json(CompareResponse::new(&req.from, &req.to, &comparison)))
}

fn validate(req: &RouteRequest) -> Result<(), AppError> {
    if req.from.is_empty() || req.to.is_empty() {
        return Err(AppError::BadRequest {
            message: "both 'from' and 'to' are required".to_string(),
        });
    }
    Ok(())
}

/// The only place search errors become HTTP errors. An unreachable goal is
/// a normal answer (200 with a null path), an unknown station is a 404.
fn found<T>(result: Result<T, SearchError>) -> Result<Option<T>, AppError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(SearchError::Unreachable { .. }) => Ok(None),
        Err(e @ SearchError::UnknownStation(_)) => Err(AppError::NotFound {
            message: e.to_string(),
        }),
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, %message, "Request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
