//! Reservation entity model.

use chrono::{DateTime, Utc};
use parkhub_core::types::{LotId, ReservationId, UserId};
use serde::{Deserialize, Serialize};

/// A pending reservation held by one user for one parking lot.
///
/// A reservation exists only while it is pending. Cancelling or confirming
/// it removes the record; there is no terminal-state row to query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    /// Unique reservation identifier.
    pub id: ReservationId,
    /// The user holding the reservation.
    pub user_id: UserId,
    /// The parking lot the reservation is for.
    pub lot_id: LotId,
    /// When the reservation was created.
    pub created_at: DateTime<Utc>,
}
