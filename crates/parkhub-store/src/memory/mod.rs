//! In-memory store implementations for single-node deployments.
//!
//! All stores are backed by sharded concurrent maps. Per-entry locking
//! gives each lot its own critical section, so traffic on one lot never
//! serializes against another.

pub mod lot;
pub mod reservation;
pub mod user;

pub use lot::MemoryLotStore;
pub use reservation::MemoryReservationStore;
pub use user::MemoryUserStore;
