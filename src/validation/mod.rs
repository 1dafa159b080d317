//! Field and integrity checks run before every mutation.

pub mod cedula;
pub mod client;
pub mod reservation;
pub mod room;
pub mod service;

pub use cedula::is_valid_national_id;
pub use client::validate_client;
pub use reservation::validate_reservation;
pub use room::validate_room;
pub use service::{validate_service, ValidatedService};

/// True for empty or whitespace-only values.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
