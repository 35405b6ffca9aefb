//! # parkhub-entity
//!
//! Domain entity models for ParkHub. Every struct in this crate represents
//! a stored record or a domain value object. All entities derive `Debug`,
//! `Clone`, `Serialize`, and `Deserialize`.

pub mod lot;
pub mod reservation;
pub mod user;

pub use lot::Lot;
pub use reservation::Reservation;
pub use user::{User, UserRole};
