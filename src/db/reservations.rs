use chrono::NaiveDateTime;
use sqlx::SqliteConnection;

use crate::models::{Client, Reservation, ReservationDetail, ReservationPayload, Room};

/// Flat row for a reservation joined with its client and room.
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct ReservationDetailRow {
    reservation_id: i64,
    reserved_on: NaiveDateTime,
    starts_on: NaiveDateTime,
    ends_on: NaiveDateTime,
    client_id: i64,
    client_given_name: String,
    client_family_name: String,
    client_national_id: String,
    client_age: Option<i64>,
    room_id: i64,
    room_capacity: Option<i64>,
    room_number: Option<i64>,
    room_cost: f64,
    room_floor: Option<i64>,
    room_place: String,
}

impl From<ReservationDetailRow> for ReservationDetail {
    fn from(row: ReservationDetailRow) -> Self {
        Self {
            id: row.reservation_id,
            client: Client {
                id: row.client_id,
                given_name: row.client_given_name,
                family_name: row.client_family_name,
                national_id: row.client_national_id,
                age: row.client_age,
            },
            room: Room {
                id: row.room_id,
                capacity: row.room_capacity,
                room_number: row.room_number,
                cost: row.room_cost,
                floor: row.room_floor,
                place: row.room_place,
            },
            reserved_on: row.reserved_on,
            starts_on: row.starts_on,
            ends_on: row.ends_on,
        }
    }
}

pub async fn find_by_id(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<Reservation>, sqlx::Error> {
    sqlx::query_as::<_, Reservation>(
        r#"
        SELECT id, client_id, room_id, reserved_on, starts_on, ends_on
        FROM reservations
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(conn)
    .await
}

/// Load a reservation with its client and room.
pub async fn find_detail(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<ReservationDetail>, sqlx::Error> {
    let row = sqlx::query_as::<_, ReservationDetailRow>(concat!(
        "SELECT ",
        reservation_detail_columns!(),
        " FROM reservations r ",
        reservation_detail_joins!(),
        " WHERE r.id = ?"
    ))
    .bind(id)
    .fetch_optional(conn)
    .await?;

    Ok(row.map(Into::into))
}

pub async fn list_detail(
    conn: &mut SqliteConnection,
) -> Result<Vec<ReservationDetail>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ReservationDetailRow>(concat!(
        "SELECT ",
        reservation_detail_columns!(),
        " FROM reservations r ",
        reservation_detail_joins!(),
        " ORDER BY r.id ASC"
    ))
    .fetch_all(conn)
    .await?;

    Ok(rows.into_iter().map(Into::into).collect())
}

/// Insert a reservation for an already validated payload.
pub async fn insert(
    conn: &mut SqliteConnection,
    reservation: &ReservationPayload,
    reserved_on: NaiveDateTime,
) -> Result<Reservation, sqlx::Error> {
    sqlx::query_as::<_, Reservation>(
        r#"
        INSERT INTO reservations (client_id, room_id, reserved_on, starts_on, ends_on)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, client_id, room_id, reserved_on, starts_on, ends_on
        "#,
    )
    .bind(reservation.client.id)
    .bind(reservation.room.id)
    .bind(reserved_on)
    .bind(reservation.starts_on)
    .bind(reservation.ends_on)
    .fetch_one(conn)
    .await
}

pub async fn update(
    conn: &mut SqliteConnection,
    reservation: &Reservation,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE reservations
        SET client_id = ?, room_id = ?, reserved_on = ?, starts_on = ?, ends_on = ?
        WHERE id = ?
        "#,
    )
    .bind(reservation.client_id)
    .bind(reservation.room_id)
    .bind(reservation.reserved_on)
    .bind(reservation.starts_on)
    .bind(reservation.ends_on)
    .bind(reservation.id)
    .execute(conn)
    .await?;
    Ok(())
}

/// Delete a reservation. Its additional services go with it.
pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM reservations WHERE id = ?")
        .bind(id)
        .execute(conn)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Whether any reservation references the client.
pub async fn any_for_client(
    conn: &mut SqliteConnection,
    client_id: i64,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM reservations WHERE client_id = ?)",
    )
    .bind(client_id)
    .fetch_one(conn)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::{date, seed_client, seed_reservation, setup_test_db};

    #[tokio::test]
    async fn test_find_detail_loads_client_and_room() {
        let pool = setup_test_db().await;
        let mut conn = pool.acquire().await.unwrap();

        let reservation = seed_reservation(&mut conn).await;
        let detail = find_detail(&mut conn, reservation.id).await.unwrap().unwrap();

        assert_eq!(detail.id, reservation.id);
        assert_eq!(detail.client.id, reservation.client_id);
        assert_eq!(detail.client.national_id, "1710034065");
        assert_eq!(detail.room.id, reservation.room_id);
        assert_eq!(detail.room.room_number, Some(101));
        assert_eq!(detail.starts_on, date(2025, 3, 1));
        assert_eq!(detail.reserved_on, date(2025, 2, 1));
    }

    #[tokio::test]
    async fn test_find_detail_missing() {
        let pool = setup_test_db().await;
        let mut conn = pool.acquire().await.unwrap();

        assert!(find_detail(&mut conn, 1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_any_for_client() {
        let pool = setup_test_db().await;
        let mut conn = pool.acquire().await.unwrap();

        let reservation = seed_reservation(&mut conn).await;
        let lone = seed_client(&mut conn, "0102030400").await;

        assert!(any_for_client(&mut conn, reservation.client_id).await.unwrap());
        assert!(!any_for_client(&mut conn, lone.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_dates() {
        let pool = setup_test_db().await;
        let mut conn = pool.acquire().await.unwrap();

        let mut reservation = seed_reservation(&mut conn).await;
        reservation.ends_on = date(2025, 3, 10);
        update(&mut conn, &reservation).await.unwrap();

        let stored = find_by_id(&mut conn, reservation.id).await.unwrap().unwrap();
        assert_eq!(stored.ends_on, date(2025, 3, 10));
        assert_eq!(list_detail(&mut conn).await.unwrap().len(), 1);
    }
}
