use axum::{
    extract::{Path, State},
    response::Response,
    Json,
};

use super::{respond, respond_list};
use crate::coordinator::reservations;
use crate::models::ReservationPayload;
use crate::state::AppState;

/// GET /api/reservations
pub async fn list(State(state): State<AppState>) -> Response {
    respond_list(reservations::list(&state.pool).await, "list reservations")
}

/// GET /api/reservations/{id}
pub async fn get(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    respond(reservations::get(&state.pool, id).await, "get reservation")
}

/// POST /api/reservations
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<ReservationPayload>,
) -> Response {
    respond(
        reservations::create(&state.pool, &payload).await,
        "create reservation",
    )
}

/// PUT /api/reservations/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ReservationPayload>,
) -> Response {
    respond(
        reservations::update(&state.pool, id, &payload).await,
        "update reservation",
    )
}

/// DELETE /api/reservations/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    respond(reservations::delete(&state.pool, id).await, "delete reservation")
}
