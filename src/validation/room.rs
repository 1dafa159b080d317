use crate::error::Rejection;
use crate::models::RoomPayload;
use crate::validation::is_blank;

/// Presence checks for a room.
pub fn validate_room(candidate: &RoomPayload) -> Result<(), Rejection> {
    if is_blank(&candidate.place) {
        return Err(Rejection::MissingPlace);
    }
    if candidate.cost.is_nan() || candidate.cost <= 0.0 {
        return Err(Rejection::InvalidRoomCost);
    }
    Ok(())
}
