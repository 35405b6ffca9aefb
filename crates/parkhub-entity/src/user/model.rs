//! User entity model.

use chrono::{DateTime, Utc};
use parkhub_core::types::UserId;
use serde::{Deserialize, Serialize};

use super::role::UserRole;

/// A registered user in the ParkHub system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Unique login name.
    pub username: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// User role (RBAC).
    pub role: UserRole,
    /// Given name (optional).
    pub first_name: Option<String>,
    /// Family name (optional).
    pub last_name: Option<String>,
    /// Vehicle license plate number.
    pub plate_number: String,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}
