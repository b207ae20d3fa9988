//! Thin HTTP boundary. Deserializes the request, runs the mapper
//! synchronously, serializes the report. No mapping decisions live here.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::matcher::{MapperImpl, RoomMapper};
use crate::model::{MapRequest, MappingReport};

pub struct AppState {
    pub mapper: MapperImpl,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/map-rooms", post(map_rooms))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(json!({
        "message": "Room mapping API is up",
        "version": env!("CARGO_PKG_VERSION"),
        "time": Utc::now().to_rfc3339(),
    }))
}

async fn map_rooms(
    State(state): State<Arc<AppState>>,
    Json(request): Json<MapRequest>,
) -> Result<Json<MappingReport>, (StatusCode, Json<Value>)> {
    match state.mapper.map_rooms(&request) {
        Ok(report) => Ok(Json(report)),
        Err(error) => {
            warn!("Rejected mapping request: {error}");
            Err((
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "error": error.to_string() })),
            ))
        }
    }
}
