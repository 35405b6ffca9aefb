//! Admin-only handlers.

pub mod reservations;
pub mod users;
