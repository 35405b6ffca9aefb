//! Reservation record storage.

use async_trait::async_trait;

use parkhub_core::result::AppResult;
use parkhub_core::types::{LotId, ReservationId, UserId};
use parkhub_entity::reservation::Reservation;

/// Trait for reservation record storage.
///
/// The store enforces at most one reservation per `(user, lot)` pair and
/// supports atomic removal, which callers use as a single-claimant step
/// when racing cancellations and confirmations.
#[async_trait]
pub trait ReservationStore: Send + Sync + std::fmt::Debug {
    /// Inserts a reservation.
    ///
    /// Fails with `DuplicateReservation` when the `(user, lot)` pair
    /// already holds one.
    async fn insert(&self, reservation: Reservation) -> AppResult<()>;

    /// Atomically removes and returns the reservation for `(user, lot)`.
    async fn remove(&self, user_id: UserId, lot_id: LotId) -> AppResult<Option<Reservation>>;

    /// Atomically removes and returns a reservation by its id.
    async fn remove_by_id(&self, id: ReservationId) -> AppResult<Option<Reservation>>;

    /// Checks whether `(user, lot)` currently holds a reservation.
    async fn exists(&self, user_id: UserId, lot_id: LotId) -> AppResult<bool>;

    /// Lists a user's reservations.
    async fn find_by_user(&self, user_id: UserId) -> AppResult<Vec<Reservation>>;

    /// Lists a lot's reservations.
    async fn find_by_lot(&self, lot_id: LotId) -> AppResult<Vec<Reservation>>;

    /// Lists every reservation.
    async fn list_all(&self) -> AppResult<Vec<Reservation>>;

    /// Removes every reservation for a lot. Returns the number removed.
    async fn remove_by_lot(&self, lot_id: LotId) -> AppResult<usize>;
}
