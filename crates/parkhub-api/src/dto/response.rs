//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use parkhub_core::types::{LotId, ReservationId, UserId};
use parkhub_entity::lot::Lot;
use parkhub_entity::reservation::Reservation;
use parkhub_entity::user::User;
use parkhub_store::SpaceCounters;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// User summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: UserId,
    /// Username.
    pub username: String,
    /// Role name.
    pub role: String,
    /// First name.
    pub first_name: Option<String>,
    /// Last name.
    pub last_name: Option<String>,
    /// Vehicle plate number.
    pub plate_number: String,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role.to_string(),
            first_name: user.first_name,
            last_name: user.last_name,
            plate_number: user.plate_number,
            created_at: user.created_at,
        }
    }
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Signed JWT.
    pub token: String,
    /// Token expiration.
    pub expires_at: DateTime<Utc>,
    /// User info.
    pub user: UserResponse,
}

/// Parking lot details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LotResponse {
    /// Lot ID.
    pub id: LotId,
    /// Lot name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Total spaces.
    pub total_spaces: u32,
    /// Reserved spaces.
    pub reserved_spaces: u32,
    /// Spaces still open for reservation.
    pub available_spaces: u32,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Updated at.
    pub updated_at: DateTime<Utc>,
}

impl From<Lot> for LotResponse {
    fn from(lot: Lot) -> Self {
        Self {
            available_spaces: lot.available_spaces(),
            id: lot.id,
            name: lot.name,
            address: lot.address,
            total_spaces: lot.total_spaces,
            reserved_spaces: lot.reserved_spaces,
            created_at: lot.created_at,
            updated_at: lot.updated_at,
        }
    }
}

/// Reservation details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationResponse {
    /// Reservation ID.
    pub id: ReservationId,
    /// Holder's user ID.
    pub user_id: UserId,
    /// Lot ID.
    pub lot_id: LotId,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<Reservation> for ReservationResponse {
    fn from(reservation: Reservation) -> Self {
        Self {
            id: reservation.id,
            user_id: reservation.user_id,
            lot_id: reservation.lot_id,
            created_at: reservation.created_at,
        }
    }
}

/// Space counter snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpacesResponse {
    /// Total spaces.
    pub total_spaces: u32,
    /// Reserved spaces.
    pub reserved_spaces: u32,
    /// Spaces still open for reservation.
    pub available_spaces: u32,
}

impl From<SpaceCounters> for SpacesResponse {
    fn from(counters: SpaceCounters) -> Self {
        Self {
            total_spaces: counters.total_spaces,
            reserved_spaces: counters.reserved_spaces,
            available_spaces: counters.available(),
        }
    }
}

/// Own-reservation existence check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExistsResponse {
    /// Whether a reservation exists.
    pub exists: bool,
}

/// Cancellation outcome response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancelResponse {
    /// Whether a reservation was cancelled.
    pub cancelled: bool,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}
