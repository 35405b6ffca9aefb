//! JWT claims structure.

use serde::{Deserialize, Serialize};

use parkhub_entity::user::UserRole;

/// JWT claims payload embedded in every token.
///
/// The role deserializes through the closed [`UserRole`] enum, so a token
/// carrying an unknown role string fails validation outright.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the username.
    pub sub: String,
    /// User role at the time of token issuance.
    pub role: UserRole,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}
