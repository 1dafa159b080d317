use sqlx::SqliteConnection;

use crate::db;
use crate::error::{CoreError, EntityKind, Rejection};
use crate::models::{ReservationDetail, ServicePayload};
use crate::validation::is_blank;

/// Upper bound (inclusive) for an additional service cost.
pub const MAX_SERVICE_COST: f64 = 200.0;

/// A service candidate that passed validation, with its reservation resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedService {
    pub description: String,
    pub cost: f64,
    pub reservation: ReservationDetail,
}

/// Validate an additional service candidate.
///
/// The description uniqueness check covers every stored service, including
/// the one being updated, so re-saving a service under its own description
/// is rejected.
///
/// On success the reservation reference is replaced by the stored
/// reservation with its client and room.
pub async fn validate_service(
    conn: &mut SqliteConnection,
    candidate: &ServicePayload,
) -> Result<ValidatedService, CoreError> {
    if is_blank(&candidate.description) {
        return Err(Rejection::MissingDescription.into());
    }

    if db::services::description_taken(conn, &candidate.description).await? {
        return Err(Rejection::DuplicateDescription.into());
    }

    if !cost_in_range(candidate.cost) {
        return Err(Rejection::ServiceCostOutOfRange.into());
    }

    let reservation = db::reservations::find_detail(conn, candidate.reservation.id)
        .await?
        .ok_or(Rejection::NotFound(EntityKind::Reservation))?;

    Ok(ValidatedService {
        description: candidate.description.clone(),
        cost: candidate.cost,
        reservation,
    })
}

/// `0 < cost <= 200`. NaN is out of range.
pub fn cost_in_range(cost: f64) -> bool {
    cost > 0.0 && cost <= MAX_SERVICE_COST
}
