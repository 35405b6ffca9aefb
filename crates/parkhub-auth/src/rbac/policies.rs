//! Role-to-operation mapping definitions.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use parkhub_entity::user::UserRole;

/// A guarded system operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    // Lot operations
    /// View lots and their availability.
    LotView,
    /// Create a new lot.
    LotCreate,
    /// Delete a lot (cascades to its reservations).
    LotDelete,
    /// Adjust a lot's total or reserved space counters.
    LotAdjustSpaces,

    // Reservation operations
    /// Reserve a space in a lot for oneself.
    ReservationCreate,
    /// Cancel one's own reservation.
    ReservationCancel,
    /// List one's own reservations.
    ReservationListOwn,
    /// List the reservations of a specific lot.
    ReservationListByLot,
    /// List every reservation in the system.
    ReservationListAll,
    /// Confirm (consume) a reservation at the gate.
    ReservationConfirm,

    // User management
    /// Change another user's role.
    UserChangeRole,
}

/// Defines the mapping from each role to its set of allowed operations.
#[derive(Debug, Clone)]
pub struct RbacPolicies {
    /// Role → set of operations.
    policies: HashMap<UserRole, HashSet<Operation>>,
}

impl RbacPolicies {
    /// Creates the default policy set.
    pub fn new() -> Self {
        let mut policies = HashMap::new();

        // User: lot viewing and own-reservation operations
        let mut user = HashSet::new();
        user.insert(Operation::LotView);
        user.insert(Operation::ReservationCreate);
        user.insert(Operation::ReservationCancel);
        user.insert(Operation::ReservationListOwn);
        policies.insert(UserRole::User, user);

        // Staff: user + per-lot listing and gate confirmation
        let mut staff = HashSet::new();
        staff.insert(Operation::LotView);
        staff.insert(Operation::ReservationCreate);
        staff.insert(Operation::ReservationCancel);
        staff.insert(Operation::ReservationListOwn);
        staff.insert(Operation::ReservationListByLot);
        staff.insert(Operation::ReservationConfirm);
        policies.insert(UserRole::Staff, staff);

        // Admin: everything
        let admin: HashSet<Operation> = vec![
            Operation::LotView,
            Operation::LotCreate,
            Operation::LotDelete,
            Operation::LotAdjustSpaces,
            Operation::ReservationCreate,
            Operation::ReservationCancel,
            Operation::ReservationListOwn,
            Operation::ReservationListByLot,
            Operation::ReservationListAll,
            Operation::ReservationConfirm,
            Operation::UserChangeRole,
        ]
        .into_iter()
        .collect();
        policies.insert(UserRole::Admin, admin);

        Self { policies }
    }

    /// Returns the set of operations allowed for the given role.
    pub fn operations_for_role(&self, role: &UserRole) -> HashSet<Operation> {
        self.policies.get(role).cloned().unwrap_or_default()
    }

    /// Checks whether the given role is allowed the specified operation.
    pub fn permits(&self, role: &UserRole, operation: &Operation) -> bool {
        self.policies
            .get(role)
            .map(|ops| ops.contains(operation))
            .unwrap_or(false)
    }
}

impl Default for RbacPolicies {
    fn default() -> Self {
        Self::new()
    }
}
