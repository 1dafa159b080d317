use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Record kinds, used to phrase rejection messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Client,
    Room,
    Reservation,
    AdditionalService,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Client => "client",
            EntityKind::Room => "room",
            EntityKind::Reservation => "reservation",
            EntityKind::AdditionalService => "additional service",
        };
        f.write_str(name)
    }
}

/// A recoverable refusal of a read or mutation.
///
/// Rejections are never fatal: they travel back to the caller as an ordinary
/// result carrying the message below.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Rejection {
    #[error("given name is required")]
    MissingGivenName,

    #[error("given name must not contain digits")]
    GivenNameHasDigits,

    #[error("family name is required")]
    MissingFamilyName,

    #[error("family name must not contain digits")]
    FamilyNameHasDigits,

    #[error("national ID is required")]
    MissingNationalId,

    #[error("national ID is not valid")]
    InvalidNationalId,

    #[error("age must be between 18 and 70")]
    AgeOutOfRange,

    #[error("a client with the same national ID already exists")]
    DuplicateNationalId,

    #[error("service description is required")]
    MissingDescription,

    #[error("an additional service with the same description already exists")]
    DuplicateDescription,

    #[error("cost must be greater than 0 and at most 200")]
    ServiceCostOutOfRange,

    #[error("place is required")]
    MissingPlace,

    #[error("room cost must be greater than 0")]
    InvalidRoomCost,

    #[error("start date must not be after end date")]
    InvalidDateRange,

    #[error("{0} does not exist")]
    NotFound(EntityKind),

    #[error("{0} ID does not match")]
    IdMismatch(EntityKind),

    #[error("client cannot be deleted because it has one or more reservations")]
    ClientHasReservations,
}

/// Failure inside a validator or coordinator step.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error(transparent)]
    Rejected(#[from] Rejection),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Result of a coordinator operation once storage has answered.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome<T> {
    Accepted(T),
    #[serde(serialize_with = "rejection_message")]
    Rejected(Rejection),
}

impl<T> Outcome<T> {
    /// Split a step result into an outcome, leaving only storage failures as
    /// errors.
    pub fn settle(result: Result<T, CoreError>) -> Result<Self, sqlx::Error> {
        match result {
            Ok(value) => Ok(Outcome::Accepted(value)),
            Err(CoreError::Rejected(rejection)) => Ok(Outcome::Rejected(rejection)),
            Err(CoreError::Database(e)) => Err(e),
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted(_))
    }

    pub fn accepted(self) -> Option<T> {
        match self {
            Outcome::Accepted(value) => Some(value),
            Outcome::Rejected(_) => None,
        }
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Outcome::Accepted(_) => None,
            Outcome::Rejected(rejection) => Some(rejection),
        }
    }
}

fn rejection_message<S: serde::Serializer>(
    rejection: &Rejection,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(rejection)
}
