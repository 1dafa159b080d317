//! SQLite storage for hotel records.
//!
//! Every function takes a `&mut SqliteConnection` so callers decide the
//! scope: a pooled connection for reads, a transaction for mutations.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Reservation columns with their client and room, aliased for
/// `ReservationDetailRow`.
macro_rules! reservation_detail_columns {
    () => {
        r#"
        r.id AS reservation_id,
        r.reserved_on AS reserved_on,
        r.starts_on AS starts_on,
        r.ends_on AS ends_on,
        c.id AS client_id,
        c.given_name AS client_given_name,
        c.family_name AS client_family_name,
        c.national_id AS client_national_id,
        c.age AS client_age,
        m.id AS room_id,
        m.capacity AS room_capacity,
        m.room_number AS room_number,
        m.cost AS room_cost,
        m.floor AS room_floor,
        m.place AS room_place
        "#
    };
}

macro_rules! reservation_detail_joins {
    () => {
        r#"
        JOIN clients c ON c.id = r.client_id
        JOIN rooms m ON m.id = r.room_id
        "#
    };
}

pub mod clients;
pub mod reservations;
pub mod rooms;
pub mod services;

/// Initialize database connection pool with recommended pragmas.
pub async fn init_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(5))
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal);

    SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(options)
        .await
}

/// Run database migrations.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(include_str!("../../migrations/001_create_hotel_schema.sql"))
        .execute(pool)
        .await?;
    Ok(())
}
