//! RBAC enforcement logic — checks whether a role may perform an operation.

use parkhub_core::error::AppError;
use parkhub_entity::user::UserRole;

use super::policies::{Operation, RbacPolicies};

/// Enforces role-based access control for system operations.
#[derive(Debug, Clone)]
pub struct RbacEnforcer {
    /// The policy configuration.
    policies: RbacPolicies,
}

impl RbacEnforcer {
    /// Creates a new enforcer with the default policy set.
    pub fn new() -> Self {
        Self {
            policies: RbacPolicies::new(),
        }
    }

    /// Checks whether the given role may perform the operation.
    ///
    /// Returns `Ok(())` if allowed, or `Err(AppError::Forbidden)` if denied.
    pub fn require(&self, role: &UserRole, operation: &Operation) -> Result<(), AppError> {
        if self.policies.permits(role, operation) {
            Ok(())
        } else {
            Err(AppError::forbidden(format!(
                "Role '{role}' is not allowed to perform '{operation:?}'"
            )))
        }
    }

    /// Checks whether the role may perform the operation (returns bool).
    pub fn permits(&self, role: &UserRole, operation: &Operation) -> bool {
        self.policies.permits(role, operation)
    }
}

impl Default for RbacEnforcer {
    fn default() -> Self {
        Self::new()
    }
}
