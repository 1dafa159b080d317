use axum::{
    extract::{Path, State},
    response::Response,
    Json,
};

use super::{respond, respond_list};
use crate::coordinator::clients;
use crate::models::ClientPayload;
use crate::state::AppState;

/// GET /api/clients
pub async fn list(State(state): State<AppState>) -> Response {
    respond_list(clients::list(&state.pool).await, "list clients")
}

/// GET /api/clients/{id}
pub async fn get(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    respond(clients::get(&state.pool, id).await, "get client")
}

/// POST /api/clients
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<ClientPayload>,
) -> Response {
    respond(
        clients::create(&state.pool, &payload).await,
        "create client",
    )
}

/// PUT /api/clients/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ClientPayload>,
) -> Response {
    respond(
        clients::update(&state.pool, id, &payload).await,
        "update client",
    )
}

/// DELETE /api/clients/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    respond(clients::delete(&state.pool, id).await, "delete client")
}
