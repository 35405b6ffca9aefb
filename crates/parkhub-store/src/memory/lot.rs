//! In-memory lot store and capacity ledger.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::info;

use parkhub_core::error::AppError;
use parkhub_core::result::AppResult;
use parkhub_core::types::LotId;
use parkhub_entity::lot::Lot;

use crate::ledger::{CapacityLedger, SpaceCounters};
use crate::lot::LotStore;

/// In-memory lot store keyed by lot id.
///
/// The map entry lock doubles as the per-lot critical section: every
/// counter mutation runs check-and-write under it, and no lock is ever
/// held across an `.await`.
#[derive(Debug, Default)]
pub struct MemoryLotStore {
    /// Lots keyed by id.
    lots: DashMap<LotId, Lot>,
    /// Unique name index.
    names: DashMap<String, LotId>,
}

impl MemoryLotStore {
    /// Creates an empty lot store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn lot_not_found(lot_id: LotId) -> AppError {
    AppError::not_found(format!("Parking lot {lot_id} not found"))
}

#[async_trait]
impl LotStore for MemoryLotStore {
    async fn insert(&self, lot: Lot) -> AppResult<Lot> {
        match self.names.entry(lot.name.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(format!(
                "A parking lot named '{}' already exists",
                lot.name
            ))),
            Entry::Vacant(slot) => {
                slot.insert(lot.id);
                self.lots.insert(lot.id, lot.clone());
                Ok(lot)
            }
        }
    }

    async fn find_by_id(&self, id: LotId) -> AppResult<Option<Lot>> {
        Ok(self.lots.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Lot>> {
        let Some(id) = self.names.get(name).map(|entry| *entry.value()) else {
            return Ok(None);
        };
        Ok(self.lots.get(&id).map(|entry| entry.value().clone()))
    }

    async fn list(&self) -> AppResult<Vec<Lot>> {
        Ok(self
            .lots
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn delete(&self, id: LotId) -> AppResult<bool> {
        match self.lots.remove(&id) {
            Some((_, lot)) => {
                self.names.remove(&lot.name);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl CapacityLedger for MemoryLotStore {
    async fn try_reserve(&self, lot_id: LotId) -> AppResult<SpaceCounters> {
        let mut lot = self
            .lots
            .get_mut(&lot_id)
            .ok_or_else(|| lot_not_found(lot_id))?;

        if lot.is_full() {
            return Err(AppError::lot_full(format!(
                "No available spaces in parking lot '{}'",
                lot.name
            )));
        }

        lot.reserved_spaces += 1;
        lot.updated_at = Utc::now();
        info!(
            lot_id = %lot_id,
            reserved = lot.reserved_spaces,
            total = lot.total_spaces,
            "Space reserved"
        );

        Ok(SpaceCounters::from(&*lot))
    }

    async fn release(&self, lot_id: LotId) -> AppResult<SpaceCounters> {
        let mut lot = self
            .lots
            .get_mut(&lot_id)
            .ok_or_else(|| lot_not_found(lot_id))?;

        if lot.reserved_spaces == 0 {
            return Err(AppError::already_empty(format!(
                "No reserved spaces to release in parking lot '{}'",
                lot.name
            )));
        }

        lot.reserved_spaces -= 1;
        lot.updated_at = Utc::now();
        info!(
            lot_id = %lot_id,
            reserved = lot.reserved_spaces,
            total = lot.total_spaces,
            "Space released"
        );

        Ok(SpaceCounters::from(&*lot))
    }

    async fn counters(&self, lot_id: LotId) -> AppResult<SpaceCounters> {
        let lot = self
            .lots
            .get(&lot_id)
            .ok_or_else(|| lot_not_found(lot_id))?;
        Ok(SpaceCounters::from(lot.value()))
    }

    async fn set_total_spaces(&self, lot_id: LotId, total: u32) -> AppResult<SpaceCounters> {
        let mut lot = self
            .lots
            .get_mut(&lot_id)
            .ok_or_else(|| lot_not_found(lot_id))?;

        if total == 0 {
            return Err(AppError::validation("total_spaces must be at least 1"));
        }
        if lot.reserved_spaces > total {
            return Err(AppError::validation(format!(
                "total_spaces {} would fall below the {} currently reserved",
                total, lot.reserved_spaces
            )));
        }

        lot.total_spaces = total;
        lot.updated_at = Utc::now();
        info!(lot_id = %lot_id, total = total, "Total spaces updated");

        Ok(SpaceCounters::from(&*lot))
    }

    async fn set_reserved_spaces(&self, lot_id: LotId, reserved: u32) -> AppResult<SpaceCounters> {
        let mut lot = self
            .lots
            .get_mut(&lot_id)
            .ok_or_else(|| lot_not_found(lot_id))?;

        if reserved > lot.total_spaces {
            return Err(AppError::validation(format!(
                "reserved_spaces {} would exceed the lot total of {}",
                reserved, lot.total_spaces
            )));
        }

        lot.reserved_spaces = reserved;
        lot.updated_at = Utc::now();
        info!(lot_id = %lot_id, reserved = reserved, "Reserved spaces updated");

        Ok(SpaceCounters::from(&*lot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parkhub_core::error::ErrorKind;
    use std::sync::Arc;

    fn sample_lot(name: &str, total: u32, reserved: u32) -> Lot {
        Lot {
            id: LotId::new(),
            name: name.to_string(),
            address: "Unknown".to_string(),
            total_spaces: total,
            reserved_spaces: reserved,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate_name() {
        let store = MemoryLotStore::new();
        store.insert(sample_lot("North Garage", 10, 0)).await.unwrap();
        let err = store
            .insert(sample_lot("North Garage", 5, 0))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_frees_the_name() {
        let store = MemoryLotStore::new();
        let lot = store.insert(sample_lot("North Garage", 10, 0)).await.unwrap();
        assert!(store.delete(lot.id).await.unwrap());
        assert!(!store.delete(lot.id).await.unwrap());
        assert!(store.insert(sample_lot("North Garage", 4, 0)).await.is_ok());
    }

    #[tokio::test]
    async fn test_try_reserve_counts_up_to_total() {
        let store = MemoryLotStore::new();
        let lot = store.insert(sample_lot("Garage", 2, 0)).await.unwrap();

        assert_eq!(store.try_reserve(lot.id).await.unwrap().reserved_spaces, 1);
        assert_eq!(store.try_reserve(lot.id).await.unwrap().reserved_spaces, 2);

        let err = store.try_reserve(lot.id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::LotFull);
        // A failed reserve must not mutate the counter.
        assert_eq!(store.counters(lot.id).await.unwrap().reserved_spaces, 2);
    }

    #[tokio::test]
    async fn test_release_guards_against_zero() {
        let store = MemoryLotStore::new();
        let lot = store.insert(sample_lot("Garage", 2, 0)).await.unwrap();

        let err = store.release(lot.id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::AlreadyEmpty);
        assert_eq!(store.counters(lot.id).await.unwrap().reserved_spaces, 0);

        store.try_reserve(lot.id).await.unwrap();
        assert_eq!(store.release(lot.id).await.unwrap().reserved_spaces, 0);
    }

    #[tokio::test]
    async fn test_unknown_lot_is_not_found() {
        let store = MemoryLotStore::new();
        let err = store.try_reserve(LotId::new()).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        let err = store.release(LotId::new()).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_set_total_spaces_validates() {
        let store = MemoryLotStore::new();
        let lot = store.insert(sample_lot("Garage", 5, 3)).await.unwrap();

        let err = store.set_total_spaces(lot.id, 2).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        let err = store.set_total_spaces(lot.id, 0).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);

        let counters = store.set_total_spaces(lot.id, 3).await.unwrap();
        assert_eq!(counters.total_spaces, 3);
        assert_eq!(counters.reserved_spaces, 3);
        assert_eq!(counters.available(), 0);
    }

    #[tokio::test]
    async fn test_set_reserved_spaces_validates() {
        let store = MemoryLotStore::new();
        let lot = store.insert(sample_lot("Garage", 5, 0)).await.unwrap();

        let err = store.set_reserved_spaces(lot.id, 6).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);

        let counters = store.set_reserved_spaces(lot.id, 5).await.unwrap();
        assert_eq!(counters.reserved_spaces, 5);
    }

    #[tokio::test]
    async fn test_concurrent_reserve_grants_last_space_once() {
        let store = Arc::new(MemoryLotStore::new());
        let lot = store.insert(sample_lot("Garage", 1, 0)).await.unwrap();
        let lot_id = lot.id;

        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move { store.try_reserve(lot_id).await }));
        }

        let mut granted = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                granted += 1;
            }
        }

        assert_eq!(granted, 1);
        assert_eq!(store.counters(lot_id).await.unwrap().reserved_spaces, 1);
    }
}
