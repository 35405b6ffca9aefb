//! Parking lot record storage.

use async_trait::async_trait;

use parkhub_core::result::AppResult;
use parkhub_core::types::LotId;
use parkhub_entity::lot::Lot;

/// Trait for parking lot CRUD operations.
///
/// Lookups key on the lot id; the name is display-only apart from its
/// uniqueness constraint.
#[async_trait]
pub trait LotStore: Send + Sync + std::fmt::Debug {
    /// Inserts a new lot. Fails with `Conflict` when the name is taken.
    async fn insert(&self, lot: Lot) -> AppResult<Lot>;

    /// Finds a lot by primary key.
    async fn find_by_id(&self, id: LotId) -> AppResult<Option<Lot>>;

    /// Finds a lot by its unique name.
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Lot>>;

    /// Lists all lots.
    async fn list(&self) -> AppResult<Vec<Lot>>;

    /// Deletes a lot. Returns whether it existed.
    async fn delete(&self, id: LotId) -> AppResult<bool>;
}
