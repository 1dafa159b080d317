use sqlx::SqlitePool;

use super::{deleted, ensure_same_id};
use crate::db;
use crate::error::{CoreError, EntityKind, Outcome, Rejection};
use crate::models::{DeleteConfirmation, Room, RoomPayload};
use crate::validation::validate_room;

pub async fn list(pool: &SqlitePool) -> Result<Vec<Room>, sqlx::Error> {
    let mut conn = pool.acquire().await?;
    db::rooms::list(&mut conn).await
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Outcome<Room>, sqlx::Error> {
    let mut conn = pool.acquire().await?;
    let room = db::rooms::find_by_id(&mut conn, id).await?;
    Ok(match room {
        Some(room) => Outcome::Accepted(room),
        None => Outcome::Rejected(Rejection::NotFound(EntityKind::Room)),
    })
}

pub async fn create(
    pool: &SqlitePool,
    payload: &RoomPayload,
) -> Result<Outcome<Room>, sqlx::Error> {
    if let Err(rejection) = validate_room(payload) {
        return Ok(Outcome::Rejected(rejection));
    }

    let mut conn = pool.acquire().await?;
    let room = db::rooms::insert(&mut conn, payload).await?;
    tracing::info!(room_id = room.id, "Created room");
    Ok(Outcome::Accepted(room))
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    payload: &RoomPayload,
) -> Result<Outcome<Room>, sqlx::Error> {
    Outcome::settle(try_update(pool, id, payload).await)
}

async fn try_update(pool: &SqlitePool, id: i64, payload: &RoomPayload) -> Result<Room, CoreError> {
    ensure_same_id(EntityKind::Room, id, payload.id)?;

    let mut tx = pool.begin().await?;

    let mut room = db::rooms::find_by_id(&mut tx, id)
        .await?
        .ok_or(Rejection::NotFound(EntityKind::Room))?;

    validate_room(payload)?;

    room.capacity = payload.capacity;
    room.room_number = payload.room_number;
    room.cost = payload.cost;
    room.floor = payload.floor;
    room.place = payload.place.clone();
    db::rooms::update(&mut tx, &room).await?;

    tx.commit().await?;
    tracing::info!(room_id = room.id, "Updated room");
    Ok(room)
}

/// Delete a room. Reservations for it are removed by the storage layer.
pub async fn delete(
    pool: &SqlitePool,
    id: i64,
) -> Result<Outcome<DeleteConfirmation>, sqlx::Error> {
    let mut tx = pool.begin().await?;

    if !db::rooms::delete(&mut tx, id).await? {
        return Ok(Outcome::Rejected(Rejection::NotFound(EntityKind::Room)));
    }

    tx.commit().await?;
    tracing::info!(room_id = id, "Deleted room");
    Ok(Outcome::Accepted(deleted(EntityKind::Room, id)))
}
