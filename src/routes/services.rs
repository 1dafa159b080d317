use axum::{
    extract::{Path, State},
    response::Response,
    Json,
};

use super::{respond, respond_list};
use crate::coordinator::services;
use crate::models::ServicePayload;
use crate::state::AppState;

/// GET /api/services
pub async fn list(State(state): State<AppState>) -> Response {
    respond_list(services::list(&state.pool).await, "list services")
}

/// GET /api/services/{id}
pub async fn get(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    respond(services::get(&state.pool, id).await, "get additional service")
}

/// POST /api/services
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<ServicePayload>,
) -> Response {
    respond(
        services::create(&state.pool, &payload).await,
        "create additional service",
    )
}

/// PUT /api/services/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ServicePayload>,
) -> Response {
    respond(
        services::update(&state.pool, id, &payload).await,
        "update additional service",
    )
}

/// DELETE /api/services/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    respond(services::delete(&state.pool, id).await, "delete additional service")
}
