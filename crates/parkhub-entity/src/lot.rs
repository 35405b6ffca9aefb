//! Parking lot entity model.

use chrono::{DateTime, Utc};
use parkhub_core::types::LotId;
use serde::{Deserialize, Serialize};

/// A parking lot with a fixed capacity and a reserved-space counter.
///
/// The invariant `reserved_spaces <= total_spaces` holds at all times;
/// every mutation site re-checks it before committing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lot {
    /// Unique lot identifier. All lookups key on this, never on the name.
    pub id: LotId,
    /// Unique human-readable name (display only).
    pub name: String,
    /// Street address.
    pub address: String,
    /// Total number of spaces in the lot.
    pub total_spaces: u32,
    /// Number of currently reserved spaces.
    pub reserved_spaces: u32,
    /// When the lot was created.
    pub created_at: DateTime<Utc>,
    /// When the lot was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Lot {
    /// Number of spaces still open for reservation.
    pub fn available_spaces(&self) -> u32 {
        self.total_spaces.saturating_sub(self.reserved_spaces)
    }

    /// Check whether every space is reserved.
    pub fn is_full(&self) -> bool {
        self.reserved_spaces >= self.total_spaces
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lot(total: u32, reserved: u32) -> Lot {
        Lot {
            id: LotId::new(),
            name: "North Garage".to_string(),
            address: "Unknown".to_string(),
            total_spaces: total,
            reserved_spaces: reserved,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_available_spaces() {
        assert_eq!(lot(10, 3).available_spaces(), 7);
        assert_eq!(lot(5, 5).available_spaces(), 0);
    }

    #[test]
    fn test_is_full() {
        assert!(!lot(10, 9).is_full());
        assert!(lot(10, 10).is_full());
    }
}
