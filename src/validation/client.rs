use sqlx::SqliteConnection;

use crate::db;
use crate::error::{CoreError, Rejection};
use crate::models::ClientPayload;
use crate::validation::{cedula, is_blank};

/// Inclusive age range accepted for clients.
pub const AGE_RANGE: std::ops::RangeInclusive<i64> = 18..=70;

/// Validate a client candidate.
///
/// Field rules run first, in order, and the first failure wins. The national
/// ID uniqueness check runs last against storage; `exclude_id` names the
/// record being updated so it does not collide with itself.
pub async fn validate_client(
    conn: &mut SqliteConnection,
    candidate: &ClientPayload,
    exclude_id: Option<i64>,
) -> Result<(), CoreError> {
    validate_client_fields(candidate)?;

    if db::clients::national_id_taken(conn, &candidate.national_id, exclude_id).await? {
        return Err(Rejection::DuplicateNationalId.into());
    }

    Ok(())
}

/// Field-level checks that need no storage access.
pub fn validate_client_fields(candidate: &ClientPayload) -> Result<(), Rejection> {
    if is_blank(&candidate.given_name) {
        return Err(Rejection::MissingGivenName);
    }
    if has_digit(&candidate.given_name) {
        return Err(Rejection::GivenNameHasDigits);
    }

    if is_blank(&candidate.family_name) {
        return Err(Rejection::MissingFamilyName);
    }
    if has_digit(&candidate.family_name) {
        return Err(Rejection::FamilyNameHasDigits);
    }

    if is_blank(&candidate.national_id) {
        return Err(Rejection::MissingNationalId);
    }
    if !cedula::is_valid_national_id(&candidate.national_id) {
        return Err(Rejection::InvalidNationalId);
    }

    // Storage allows a null age; a client record does not.
    match candidate.age {
        Some(age) if AGE_RANGE.contains(&age) => Ok(()),
        _ => Err(Rejection::AgeOutOfRange),
    }
}

fn has_digit(value: &str) -> bool {
    value.chars().any(char::is_numeric)
}
