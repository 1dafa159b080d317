use sqlx::SqlitePool;

use super::{deleted, ensure_same_id};
use crate::db;
use crate::error::{CoreError, EntityKind, Outcome, Rejection};
use crate::models::{DeleteConfirmation, ReservationDetail, ReservationPayload};
use crate::validation::validate_reservation;

pub async fn list(pool: &SqlitePool) -> Result<Vec<ReservationDetail>, sqlx::Error> {
    let mut conn = pool.acquire().await?;
    db::reservations::list_detail(&mut conn).await
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Outcome<ReservationDetail>, sqlx::Error> {
    let mut conn = pool.acquire().await?;
    let reservation = db::reservations::find_detail(&mut conn, id).await?;
    Ok(match reservation {
        Some(reservation) => Outcome::Accepted(reservation),
        None => Outcome::Rejected(Rejection::NotFound(EntityKind::Reservation)),
    })
}

pub async fn create(
    pool: &SqlitePool,
    payload: &ReservationPayload,
) -> Result<Outcome<ReservationDetail>, sqlx::Error> {
    Outcome::settle(try_create(pool, payload).await)
}

async fn try_create(
    pool: &SqlitePool,
    payload: &ReservationPayload,
) -> Result<ReservationDetail, CoreError> {
    let mut tx = pool.begin().await?;

    validate_reservation(&mut tx, payload).await?;

    let reserved_on = payload
        .reserved_on
        .unwrap_or_else(|| chrono::Utc::now().naive_utc());
    let reservation = db::reservations::insert(&mut tx, payload, reserved_on).await?;
    let detail = db::reservations::find_detail(&mut tx, reservation.id)
        .await?
        .ok_or(sqlx::Error::RowNotFound)?;

    tx.commit().await?;
    tracing::info!(
        reservation_id = detail.id,
        client_id = detail.client.id,
        room_id = detail.room.id,
        "Created reservation"
    );
    Ok(detail)
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    payload: &ReservationPayload,
) -> Result<Outcome<ReservationDetail>, sqlx::Error> {
    Outcome::settle(try_update(pool, id, payload).await)
}

async fn try_update(
    pool: &SqlitePool,
    id: i64,
    payload: &ReservationPayload,
) -> Result<ReservationDetail, CoreError> {
    ensure_same_id(EntityKind::Reservation, id, payload.id)?;

    let mut tx = pool.begin().await?;

    let mut reservation = db::reservations::find_by_id(&mut tx, id)
        .await?
        .ok_or(Rejection::NotFound(EntityKind::Reservation))?;

    validate_reservation(&mut tx, payload).await?;

    reservation.client_id = payload.client.id;
    reservation.room_id = payload.room.id;
    if let Some(reserved_on) = payload.reserved_on {
        reservation.reserved_on = reserved_on;
    }
    reservation.starts_on = payload.starts_on;
    reservation.ends_on = payload.ends_on;
    db::reservations::update(&mut tx, &reservation).await?;

    let detail = db::reservations::find_detail(&mut tx, id)
        .await?
        .ok_or(sqlx::Error::RowNotFound)?;

    tx.commit().await?;
    tracing::info!(reservation_id = id, "Updated reservation");
    Ok(detail)
}

/// Delete a reservation. Its additional services are removed by the storage
/// layer.
pub async fn delete(
    pool: &SqlitePool,
    id: i64,
) -> Result<Outcome<DeleteConfirmation>, sqlx::Error> {
    let mut tx = pool.begin().await?;

    if !db::reservations::delete(&mut tx, id).await? {
        return Ok(Outcome::Rejected(Rejection::NotFound(
            EntityKind::Reservation,
        )));
    }

    tx.commit().await?;
    tracing::info!(reservation_id = id, "Deleted reservation");
    Ok(Outcome::Accepted(deleted(EntityKind::Reservation, id)))
}
