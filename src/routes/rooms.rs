use axum::{
    extract::{Path, State},
    response::Response,
    Json,
};

use super::{respond, respond_list};
use crate::coordinator::rooms;
use crate::models::RoomPayload;
use crate::state::AppState;

/// GET /api/rooms
pub async fn list(State(state): State<AppState>) -> Response {
    respond_list(rooms::list(&state.pool).await, "list rooms")
}

/// GET /api/rooms/{id}
pub async fn get(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    respond(rooms::get(&state.pool, id).await, "get room")
}

/// POST /api/rooms
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<RoomPayload>,
) -> Response {
    respond(
        rooms::create(&state.pool, &payload).await,
        "create room",
    )
}

/// PUT /api/rooms/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<RoomPayload>,
) -> Response {
    respond(
        rooms::update(&state.pool, id, &payload).await,
        "update room",
    )
}

/// DELETE /api/rooms/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    respond(rooms::delete(&state.pool, id).await, "delete room")
}
