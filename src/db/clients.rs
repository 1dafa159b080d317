use sqlx::SqliteConnection;

use crate::models::{Client, ClientPayload};

pub async fn find_by_id(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<Client>, sqlx::Error> {
    sqlx::query_as::<_, Client>(
        "SELECT id, given_name, family_name, national_id, age FROM clients WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(conn)
    .await
}

pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<Client>, sqlx::Error> {
    sqlx::query_as::<_, Client>(
        "SELECT id, given_name, family_name, national_id, age FROM clients ORDER BY id ASC",
    )
    .fetch_all(conn)
    .await
}

/// Insert a client. Returns the stored record with its generated id.
pub async fn insert(
    conn: &mut SqliteConnection,
    client: &ClientPayload,
) -> Result<Client, sqlx::Error> {
    sqlx::query_as::<_, Client>(
        r#"
        INSERT INTO clients (given_name, family_name, national_id, age)
        VALUES (?, ?, ?, ?)
        RETURNING id, given_name, family_name, national_id, age
        "#,
    )
    .bind(&client.given_name)
    .bind(&client.family_name)
    .bind(&client.national_id)
    .bind(client.age)
    .fetch_one(conn)
    .await
}

/// Overwrite every mutable column of an existing client.
pub async fn update(conn: &mut SqliteConnection, client: &Client) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE clients
        SET given_name = ?, family_name = ?, national_id = ?, age = ?
        WHERE id = ?
        "#,
    )
    .bind(&client.given_name)
    .bind(&client.family_name)
    .bind(&client.national_id)
    .bind(client.age)
    .bind(client.id)
    .execute(conn)
    .await?;
    Ok(())
}

/// Delete a client. Returns false if nothing was deleted.
pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM clients WHERE id = ?")
        .bind(id)
        .execute(conn)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Whether another client already holds this national ID.
/// `exclude_id` skips the client being updated.
pub async fn national_id_taken(
    conn: &mut SqliteConnection,
    national_id: &str,
    exclude_id: Option<i64>,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS(
            SELECT 1 FROM clients
            WHERE national_id = ?
              AND (? IS NULL OR id <> ?)
        )
        "#,
    )
    .bind(national_id)
    .bind(exclude_id)
    .bind(exclude_id)
    .fetch_one(conn)
    .await
}
