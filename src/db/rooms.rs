use sqlx::SqliteConnection;

use crate::models::{Room, RoomPayload};

pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> Result<Option<Room>, sqlx::Error> {
    sqlx::query_as::<_, Room>(
        "SELECT id, capacity, room_number, cost, floor, place FROM rooms WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(conn)
    .await
}

pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<Room>, sqlx::Error> {
    sqlx::query_as::<_, Room>(
        "SELECT id, capacity, room_number, cost, floor, place FROM rooms ORDER BY id ASC",
    )
    .fetch_all(conn)
    .await
}

pub async fn insert(conn: &mut SqliteConnection, room: &RoomPayload) -> Result<Room, sqlx::Error> {
    sqlx::query_as::<_, Room>(
        r#"
        INSERT INTO rooms (capacity, room_number, cost, floor, place)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, capacity, room_number, cost, floor, place
        "#,
    )
    .bind(room.capacity)
    .bind(room.room_number)
    .bind(room.cost)
    .bind(room.floor)
    .bind(&room.place)
    .fetch_one(conn)
    .await
}

pub async fn update(conn: &mut SqliteConnection, room: &Room) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE rooms
        SET capacity = ?, room_number = ?, cost = ?, floor = ?, place = ?
        WHERE id = ?
        "#,
    )
    .bind(room.capacity)
    .bind(room.room_number)
    .bind(room.cost)
    .bind(room.floor)
    .bind(&room.place)
    .bind(room.id)
    .execute(conn)
    .await?;
    Ok(())
}

/// Delete a room. Its reservations go with it (ON DELETE CASCADE).
pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM rooms WHERE id = ?")
        .bind(id)
        .execute(conn)
        .await?;
    Ok(result.rows_affected() > 0)
}
