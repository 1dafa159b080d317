//! Create, read, update and delete for each record kind.
//!
//! Every operation returns `Ok(Outcome)` for anything the caller can act on,
//! rejections included. Only storage failures come back as `Err`.
//!
//! Mutations run in a single transaction: validation queries and the write
//! share it, and any early return drops it, rolling back and releasing the
//! connection.

pub mod clients;
pub mod reservations;
pub mod rooms;
pub mod services;

use crate::error::{CoreError, EntityKind, Rejection};
use crate::models::DeleteConfirmation;

/// Reject an update whose path id and payload id disagree.
fn ensure_same_id(kind: EntityKind, path_id: i64, payload_id: i64) -> Result<(), CoreError> {
    if path_id != payload_id {
        return Err(Rejection::IdMismatch(kind).into());
    }
    Ok(())
}

fn deleted(kind: EntityKind, id: i64) -> DeleteConfirmation {
    DeleteConfirmation {
        id,
        message: format!("{} with ID {} was deleted", kind, id),
    }
}
