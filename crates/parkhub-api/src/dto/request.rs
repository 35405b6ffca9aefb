//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use parkhub_core::types::LotId;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Username.
    #[validate(length(min = 3, max = 20, message = "Username must be 3-20 characters"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    /// First name.
    pub first_name: Option<String>,
    /// Last name.
    pub last_name: Option<String>,
    /// Vehicle plate number.
    #[validate(length(min = 1, message = "Plate number is required"))]
    pub plate_number: String,
    /// Requested role (defaults to `user`).
    pub role: Option<String>,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Create parking lot request (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateLotRequest {
    /// Lot name.
    #[validate(length(min = 1, max = 100, message = "Lot name must be 1-100 characters"))]
    pub name: String,
    /// Street address.
    pub address: Option<String>,
    /// Total number of spaces.
    #[validate(range(min = 1, message = "total_spaces must be at least 1"))]
    pub total_spaces: u32,
    /// Initially reserved spaces.
    pub reserved_spaces: Option<u32>,
}

/// Space counter update request (admin).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSpacesRequest {
    /// New total space count.
    pub total_spaces: Option<u32>,
    /// New reserved space count.
    pub reserved_spaces: Option<u32>,
}

/// Role change request (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChangeRoleRequest {
    /// New role name.
    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,
}

/// Query parameters for the own-reservation existence check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExistsQuery {
    /// Lot to check.
    pub lot_id: LotId,
}
