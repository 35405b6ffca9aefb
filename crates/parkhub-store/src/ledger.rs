//! Capacity ledger trait and shared types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use parkhub_core::result::AppResult;
use parkhub_core::types::LotId;
use parkhub_entity::lot::Lot;

/// Snapshot of a lot's space counters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpaceCounters {
    /// Total number of spaces in the lot.
    pub total_spaces: u32,
    /// Currently reserved spaces.
    pub reserved_spaces: u32,
}

impl SpaceCounters {
    /// Number of spaces still open for reservation.
    pub fn available(&self) -> u32 {
        self.total_spaces.saturating_sub(self.reserved_spaces)
    }
}

impl From<&Lot> for SpaceCounters {
    fn from(lot: &Lot) -> Self {
        Self {
            total_spaces: lot.total_spaces,
            reserved_spaces: lot.reserved_spaces,
        }
    }
}

/// Trait for atomic per-lot space accounting.
///
/// Implementations must be thread-safe. The check-and-mutate of
/// `try_reserve` and `release` is a single atomic step per lot, and
/// operations on distinct lots must not serialize against each other.
#[async_trait]
pub trait CapacityLedger: Send + Sync + std::fmt::Debug {
    /// Atomically reserves one space if the lot has capacity left.
    ///
    /// Fails with `LotFull` when every space is reserved, without mutating
    /// anything, and with `NotFound` when the lot does not exist.
    async fn try_reserve(&self, lot_id: LotId) -> AppResult<SpaceCounters>;

    /// Atomically releases one reserved space.
    ///
    /// Fails with `AlreadyEmpty` when no spaces are reserved, without
    /// mutating anything, and with `NotFound` when the lot does not exist.
    async fn release(&self, lot_id: LotId) -> AppResult<SpaceCounters>;

    /// Returns the current counters for a lot.
    async fn counters(&self, lot_id: LotId) -> AppResult<SpaceCounters>;

    /// Overwrites the total space count.
    ///
    /// Rejected with `Validation` when the new total is zero or would fall
    /// below the number of currently reserved spaces.
    async fn set_total_spaces(&self, lot_id: LotId, total: u32) -> AppResult<SpaceCounters>;

    /// Overwrites the reserved space count.
    ///
    /// Rejected with `Validation` when the new count exceeds the total.
    async fn set_reserved_spaces(&self, lot_id: LotId, reserved: u32) -> AppResult<SpaceCounters>;
}
