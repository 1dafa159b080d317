pub mod config;
pub mod coordinator;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod validation;

pub use config::Config;
pub use db::{init_pool, run_migrations};
pub use error::{CoreError, EntityKind, Outcome, Rejection};
pub use models::{
    AdditionalService, AdditionalServiceDetail, Client, ClientPayload, DeleteConfirmation,
    EntityRef, Reservation, ReservationDetail, ReservationPayload, Room, RoomPayload,
    ServicePayload,
};
pub use routes::create_router;
pub use state::AppState;
pub use validation::is_valid_national_id;
