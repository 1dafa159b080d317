use sqlx::SqliteConnection;

use crate::db::reservations::ReservationDetailRow;
use crate::models::{AdditionalService, AdditionalServiceDetail};
use crate::validation::ValidatedService;

#[derive(Debug, sqlx::FromRow)]
struct ServiceDetailRow {
    service_id: i64,
    service_description: String,
    service_cost: f64,
    #[sqlx(flatten)]
    reservation: ReservationDetailRow,
}

impl From<ServiceDetailRow> for AdditionalServiceDetail {
    fn from(row: ServiceDetailRow) -> Self {
        Self {
            id: row.service_id,
            description: row.service_description,
            cost: row.service_cost,
            reservation: row.reservation.into(),
        }
    }
}

pub async fn find_by_id(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<AdditionalService>, sqlx::Error> {
    sqlx::query_as::<_, AdditionalService>(
        "SELECT id, description, cost, reservation_id FROM additional_services WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(conn)
    .await
}

/// Load a service with its reservation, client and room.
pub async fn find_detail(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<AdditionalServiceDetail>, sqlx::Error> {
    let row = sqlx::query_as::<_, ServiceDetailRow>(concat!(
        "SELECT s.id AS service_id, s.description AS service_description, ",
        "s.cost AS service_cost, ",
        reservation_detail_columns!(),
        " FROM additional_services s JOIN reservations r ON r.id = s.reservation_id ",
        reservation_detail_joins!(),
        " WHERE s.id = ?"
    ))
    .bind(id)
    .fetch_optional(conn)
    .await?;

    Ok(row.map(Into::into))
}

pub async fn list_detail(
    conn: &mut SqliteConnection,
) -> Result<Vec<AdditionalServiceDetail>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ServiceDetailRow>(concat!(
        "SELECT s.id AS service_id, s.description AS service_description, ",
        "s.cost AS service_cost, ",
        reservation_detail_columns!(),
        " FROM additional_services s JOIN reservations r ON r.id = s.reservation_id ",
        reservation_detail_joins!(),
        " ORDER BY s.id ASC"
    ))
    .fetch_all(conn)
    .await?;

    Ok(rows.into_iter().map(Into::into).collect())
}

pub async fn insert(
    conn: &mut SqliteConnection,
    service: &ValidatedService,
) -> Result<AdditionalService, sqlx::Error> {
    sqlx::query_as::<_, AdditionalService>(
        r#"
        INSERT INTO additional_services (description, cost, reservation_id)
        VALUES (?, ?, ?)
        RETURNING id, description, cost, reservation_id
        "#,
    )
    .bind(&service.description)
    .bind(service.cost)
    .bind(service.reservation.id)
    .fetch_one(conn)
    .await
}

pub async fn update(
    conn: &mut SqliteConnection,
    service: &AdditionalService,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE additional_services
        SET description = ?, cost = ?, reservation_id = ?
        WHERE id = ?
        "#,
    )
    .bind(&service.description)
    .bind(service.cost)
    .bind(service.reservation_id)
    .bind(service.id)
    .execute(conn)
    .await?;
    Ok(())
}

pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM additional_services WHERE id = ?")
        .bind(id)
        .execute(conn)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Whether any stored service uses this description.
pub async fn description_taken(
    conn: &mut SqliteConnection,
    description: &str,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM additional_services WHERE description = ?)",
    )
    .bind(description)
    .fetch_one(conn)
    .await
}
