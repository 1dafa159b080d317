pub mod clients;
pub mod reservations;
pub mod rooms;
pub mod services;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::Outcome;
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Clients
        .route("/api/clients", get(clients::list).post(clients::create))
        .route(
            "/api/clients/{id}",
            get(clients::get)
                .put(clients::update)
                .delete(clients::delete),
        )
        // Rooms
        .route("/api/rooms", get(rooms::list).post(rooms::create))
        .route(
            "/api/rooms/{id}",
            get(rooms::get).put(rooms::update).delete(rooms::delete),
        )
        // Reservations
        .route(
            "/api/reservations",
            get(reservations::list).post(reservations::create),
        )
        .route(
            "/api/reservations/{id}",
            get(reservations::get)
                .put(reservations::update)
                .delete(reservations::delete),
        )
        // Additional services
        .route("/api/services", get(services::list).post(services::create))
        .route(
            "/api/services/{id}",
            get(services::get)
                .put(services::update)
                .delete(services::delete),
        )
        // Health check
        .route("/health", get(health))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

/// Map a coordinator result onto the wire.
///
/// Rejections are answered with 200 and the message as a plain-text body;
/// clients tell them apart from accepted records by content, not status.
fn respond<T: Serialize>(result: Result<Outcome<T>, sqlx::Error>, action: &str) -> Response {
    match result {
        Ok(Outcome::Accepted(value)) => Json(value).into_response(),
        Ok(Outcome::Rejected(rejection)) => {
            tracing::debug!("Rejected {}: {}", action, rejection);
            (StatusCode::OK, rejection.to_string()).into_response()
        }
        Err(e) => database_error(action, e),
    }
}

fn respond_list<T: Serialize>(result: Result<Vec<T>, sqlx::Error>, action: &str) -> Response {
    match result {
        Ok(values) => Json(values).into_response(),
        Err(e) => database_error(action, e),
    }
}

fn database_error(action: &str, e: sqlx::Error) -> Response {
    tracing::error!("Failed to {}: {}", action, e);
    (StatusCode::INTERNAL_SERVER_ERROR, "Database error").into_response()
}
