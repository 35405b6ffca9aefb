//! Request context carrying the authenticated user and their role.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use parkhub_core::types::UserId;
use parkhub_entity::user::UserRole;

/// Context for the current authenticated request.
///
/// Extracted by the auth layer and passed into service methods so that
/// every operation knows *who* is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: UserId,
    /// The username (convenience field from JWT claims).
    pub username: String,
    /// The user's role at the time the JWT was issued.
    pub role: UserRole,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: UserId, username: String, role: UserRole) -> Self {
        Self {
            user_id,
            username,
            role,
            request_time: Utc::now(),
        }
    }

    /// Returns whether the current user is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self.role, UserRole::Admin)
    }

    /// Returns whether the current user is staff or above.
    pub fn is_staff_or_above(&self) -> bool {
        matches!(self.role, UserRole::Admin | UserRole::Staff)
    }
}
