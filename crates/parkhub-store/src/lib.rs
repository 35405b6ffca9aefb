//! # parkhub-store
//!
//! Storage traits and the in-memory reference implementation for ParkHub.
//!
//! ## Modules
//!
//! - `ledger` — atomic per-lot space accounting
//! - `lot` — parking lot records
//! - `reservation` — reservation records with per-(user, lot) uniqueness
//! - `user` — user accounts
//! - `memory` — concurrent-map implementations of all of the above

pub mod ledger;
pub mod lot;
pub mod memory;
pub mod reservation;
pub mod user;

pub use ledger::{CapacityLedger, SpaceCounters};
pub use lot::LotStore;
pub use reservation::ReservationStore;
pub use user::UserStore;
