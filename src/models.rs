use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A hotel guest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Client {
    pub id: i64,
    pub given_name: String,
    pub family_name: String,
    pub national_id: String,
    /// Nullable in storage; the validator still requires a value in range.
    pub age: Option<i64>,
}

/// Incoming client record for create and update.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ClientPayload {
    pub id: i64,
    pub given_name: String,
    pub family_name: String,
    pub national_id: String,
    pub age: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Room {
    pub id: i64,
    pub capacity: Option<i64>,
    pub room_number: Option<i64>,
    pub cost: f64,
    pub floor: Option<i64>,
    pub place: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RoomPayload {
    pub id: i64,
    pub capacity: Option<i64>,
    pub room_number: Option<i64>,
    pub cost: f64,
    pub floor: Option<i64>,
    pub place: String,
}

/// A reservation as stored: foreign keys only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Reservation {
    pub id: i64,
    pub client_id: i64,
    pub room_id: i64,
    pub reserved_on: NaiveDateTime,
    pub starts_on: NaiveDateTime,
    pub ends_on: NaiveDateTime,
}

/// A reservation with its client and room loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReservationDetail {
    pub id: i64,
    pub client: Client,
    pub room: Room,
    pub reserved_on: NaiveDateTime,
    pub starts_on: NaiveDateTime,
    pub ends_on: NaiveDateTime,
}

/// Reference to another record by identifier. Any other fields sent along
/// with the reference are ignored and re-resolved from storage.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct EntityRef {
    #[serde(default)]
    pub id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReservationPayload {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub client: EntityRef,
    #[serde(default)]
    pub room: EntityRef,
    /// Defaults to the time of the request when omitted.
    pub reserved_on: Option<NaiveDateTime>,
    pub starts_on: NaiveDateTime,
    pub ends_on: NaiveDateTime,
}

/// An additional service as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct AdditionalService {
    pub id: i64,
    pub description: String,
    pub cost: f64,
    pub reservation_id: i64,
}

/// An additional service with its reservation (and that reservation's client
/// and room) loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdditionalServiceDetail {
    pub id: i64,
    pub description: String,
    pub cost: f64,
    pub reservation: ReservationDetail,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ServicePayload {
    pub id: i64,
    pub description: String,
    pub cost: f64,
    pub reservation: EntityRef,
}

/// Response for a successful delete.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteConfirmation {
    pub id: i64,
    pub message: String,
}
