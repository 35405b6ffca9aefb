//! In-memory user store.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use parkhub_core::error::AppError;
use parkhub_core::result::AppResult;
use parkhub_core::types::UserId;
use parkhub_entity::user::{User, UserRole};

use crate::user::UserStore;

/// In-memory user store with a unique username index.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    /// Users keyed by id.
    users: DashMap<UserId, User>,
    /// Unique username index.
    usernames: DashMap<String, UserId>,
}

impl MemoryUserStore {
    /// Creates an empty user store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, user: User) -> AppResult<User> {
        match self.usernames.entry(user.username.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(format!(
                "Username '{}' is already taken",
                user.username
            ))),
            Entry::Vacant(slot) => {
                slot.insert(user.id);
                self.users.insert(user.id, user.clone());
                Ok(user)
            }
        }
    }

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        Ok(self.users.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let Some(id) = self.usernames.get(username).map(|entry| *entry.value()) else {
            return Ok(None);
        };
        Ok(self.users.get(&id).map(|entry| entry.value().clone()))
    }

    async fn update_role(&self, id: UserId, role: UserRole) -> AppResult<User> {
        let mut user = self
            .users
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;

        user.role = role;
        user.updated_at = Utc::now();
        Ok(user.value().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parkhub_core::error::ErrorKind;

    fn sample_user(username: &str) -> User {
        User {
            id: UserId::new(),
            username: username.to_string(),
            password_hash: "$argon2id$stub".to_string(),
            role: UserRole::User,
            first_name: None,
            last_name: None,
            plate_number: "ABC-1234".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate_username() {
        let store = MemoryUserStore::new();
        store.insert(sample_user("alice")).await.unwrap();
        let err = store.insert(sample_user("alice")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn test_find_by_username() {
        let store = MemoryUserStore::new();
        let user = store.insert(sample_user("bob")).await.unwrap();
        let found = store.find_by_username("bob").await.unwrap().unwrap();
        assert_eq!(found.id, user.id);
        assert!(store.find_by_username("carol").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_role() {
        let store = MemoryUserStore::new();
        let user = store.insert(sample_user("dave")).await.unwrap();
        let updated = store.update_role(user.id, UserRole::Staff).await.unwrap();
        assert_eq!(updated.role, UserRole::Staff);

        let err = store
            .update_role(UserId::new(), UserRole::Admin)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }
}
