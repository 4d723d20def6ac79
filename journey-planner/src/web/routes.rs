//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::network::NetworkError;
use crate::network::spec::NetworkSpec;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/network", get(network_snapshot))
        .route("/stations", get(list_stations))
        .route("/lines", get(list_lines))
        .route("/routes", get(find_routes))
        .route("/stations/:name/close", post(close_station))
        .route("/stations/:name/open", post(open_station))
        .route("/lines/:name/suspend", post(suspend_line))
        .route("/lines/:name/resume", post(resume_line))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// The whole network as a JSON description, with current conditions.
async fn network_snapshot(State(state): State<AppState>) -> Json<NetworkSpec> {
    let network = state.network.read().await;
    Json(NetworkSpec::from_map(&network))
}

/// List stations and whether they are closed.
async fn list_stations(State(state): State<AppState>) -> Json<StationsResponse> {
    let network = state.network.read().await;
    let stations = network
        .stations()
        .iter()
        .map(StationResult::from_station)
        .collect();
    Json(StationsResponse { stations })
}

/// List lines and whether they are suspended.
async fn list_lines(State(state): State<AppState>) -> Json<LinesResponse> {
    let network = state.network.read().await;
    let lines = network.lines().iter().map(LineResult::from_line).collect();
    Json(LinesResponse { lines })
}

/// Plan routes between two stations.
async fn find_routes(
    State(state): State<AppState>,
    Query(req): Query<RoutesRequest>,
) -> Result<Json<RoutesResponse>, AppError> {
    let limit = match req.limit {
        Some(0) => {
            return Err(AppError::BadRequest {
                message: "limit must be at least 1".to_string(),
            });
        }
        Some(limit) => limit.min(state.config.max_results),
        None => state.config.max_results,
    };
    let optimise = req.optimise.unwrap_or(state.config.optimise);

    let network = state.network.read().await;
    let origin = network.station(&req.from)?;
    let destination = network.station(&req.to)?;

    let routes = network.routes_optimised(origin, destination, optimise);
    info!(
        from = %origin,
        to = %destination,
        %optimise,
        found = routes.len(),
        "Planned routes"
    );

    let routes = routes
        .iter()
        .take(limit)
        .map(RouteResult::from_route)
        .collect();

    Ok(Json(RoutesResponse { optimise, routes }))
}

async fn close_station(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<StationResult>, AppError> {
    set_station_closed(&state, &name, true).await
}

async fn open_station(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<StationResult>, AppError> {
    set_station_closed(&state, &name, false).await
}

async fn suspend_line(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<LineResult>, AppError> {
    set_line_suspended(&state, &name, true).await
}

async fn resume_line(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<LineResult>, AppError> {
    set_line_suspended(&state, &name, false).await
}

async fn set_station_closed(
    state: &AppState,
    name: &str,
    closed: bool,
) -> Result<Json<StationResult>, AppError> {
    let network = state.network.write().await;
    let station = network.station(name)?;
    if closed {
        station.close();
    } else {
        station.open();
    }
    info!(station = %station, closed, "Station state changed");
    Ok(Json(StationResult::from_station(station)))
}

async fn set_line_suspended(
    state: &AppState,
    name: &str,
    suspended: bool,
) -> Result<Json<LineResult>, AppError> {
    let network = state.network.write().await;
    let line = network.line(name)?;
    if suspended {
        line.suspend();
    } else {
        line.resume();
    }
    info!(line = %line, suspended, "Line state changed");
    Ok(Json(LineResult::from_line(line)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<NetworkError> for AppError {
    fn from(e: NetworkError) -> Self {
        match e {
            NetworkError::UnknownStation(_) | NetworkError::UnknownLine(_) => AppError::NotFound {
                message: e.to_string(),
            },
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, %message, "Request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
