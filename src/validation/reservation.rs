use sqlx::SqliteConnection;

use crate::db;
use crate::error::{CoreError, EntityKind, Rejection};
use crate::models::ReservationPayload;

/// Validate a reservation candidate: the client and room it points at must
/// exist and the stay must not end before it starts.
pub async fn validate_reservation(
    conn: &mut SqliteConnection,
    candidate: &ReservationPayload,
) -> Result<(), CoreError> {
    if db::clients::find_by_id(conn, candidate.client.id)
        .await?
        .is_none()
    {
        return Err(Rejection::NotFound(EntityKind::Client).into());
    }

    if db::rooms::find_by_id(conn, candidate.room.id).await?.is_none() {
        return Err(Rejection::NotFound(EntityKind::Room).into());
    }

    if candidate.starts_on > candidate.ends_on {
        return Err(Rejection::InvalidDateRange.into());
    }

    Ok(())
}
