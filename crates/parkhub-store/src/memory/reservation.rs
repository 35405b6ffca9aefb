//! In-memory reservation store.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use parkhub_core::error::AppError;
use parkhub_core::result::AppResult;
use parkhub_core::types::{LotId, ReservationId, UserId};
use parkhub_entity::reservation::Reservation;

use crate::reservation::ReservationStore;

/// In-memory reservation store.
///
/// The `(user, lot)` map entry is the uniqueness claim: inserting into a
/// vacant entry and removing an occupied one are atomic, so concurrent
/// creates, cancels, and confirms arbitrate through the map itself.
#[derive(Debug, Default)]
pub struct MemoryReservationStore {
    /// Reservations keyed by holder.
    by_holder: DashMap<(UserId, LotId), Reservation>,
    /// Reservation-id index into `by_holder` keys.
    index: DashMap<ReservationId, (UserId, LotId)>,
}

impl MemoryReservationStore {
    /// Creates an empty reservation store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReservationStore for MemoryReservationStore {
    async fn insert(&self, reservation: Reservation) -> AppResult<()> {
        let key = (reservation.user_id, reservation.lot_id);
        match self.by_holder.entry(key) {
            Entry::Occupied(_) => Err(AppError::duplicate_reservation(
                "User already has a reservation for this parking lot",
            )),
            Entry::Vacant(slot) => {
                // Both writes land while the holder entry lock is held, so
                // an id lookup never observes the record without its index.
                self.index.insert(reservation.id, key);
                slot.insert(reservation);
                Ok(())
            }
        }
    }

    async fn remove(&self, user_id: UserId, lot_id: LotId) -> AppResult<Option<Reservation>> {
        match self.by_holder.remove(&(user_id, lot_id)) {
            Some((_, reservation)) => {
                self.index.remove(&reservation.id);
                Ok(Some(reservation))
            }
            None => Ok(None),
        }
    }

    async fn remove_by_id(&self, id: ReservationId) -> AppResult<Option<Reservation>> {
        // Claiming the index entry first arbitrates a race with a
        // concurrent cancel; at most one caller receives the record.
        let Some((_, key)) = self.index.remove(&id) else {
            return Ok(None);
        };
        Ok(self.by_holder.remove(&key).map(|(_, reservation)| reservation))
    }

    async fn exists(&self, user_id: UserId, lot_id: LotId) -> AppResult<bool> {
        Ok(self.by_holder.contains_key(&(user_id, lot_id)))
    }

    async fn find_by_user(&self, user_id: UserId) -> AppResult<Vec<Reservation>> {
        Ok(self
            .by_holder
            .iter()
            .filter(|entry| entry.key().0 == user_id)
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn find_by_lot(&self, lot_id: LotId) -> AppResult<Vec<Reservation>> {
        Ok(self
            .by_holder
            .iter()
            .filter(|entry| entry.key().1 == lot_id)
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn list_all(&self) -> AppResult<Vec<Reservation>> {
        Ok(self
            .by_holder
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn remove_by_lot(&self, lot_id: LotId) -> AppResult<usize> {
        // Collect keys first; we cannot remove while iterating.
        let keys: Vec<(UserId, LotId)> = self
            .by_holder
            .iter()
            .filter(|entry| entry.key().1 == lot_id)
            .map(|entry| *entry.key())
            .collect();

        let mut removed = 0;
        for key in keys {
            if let Some((_, reservation)) = self.by_holder.remove(&key) {
                self.index.remove(&reservation.id);
                removed += 1;
            }
        }
        Ok(removed)
    }
}
