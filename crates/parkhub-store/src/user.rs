//! User account storage.

use async_trait::async_trait;

use parkhub_core::result::AppResult;
use parkhub_core::types::UserId;
use parkhub_entity::user::{User, UserRole};

/// Trait for user account storage.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug {
    /// Inserts a new user. Fails with `Conflict` when the username is taken.
    async fn insert(&self, user: User) -> AppResult<User>;

    /// Finds a user by primary key.
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// Finds a user by username.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Updates a user's role. Fails with `NotFound` for unknown users.
    async fn update_role(&self, id: UserId, role: UserRole) -> AppResult<User>;
}
