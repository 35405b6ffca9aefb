//! User account operations: registration, authentication, role changes.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use parkhub_auth::jwt::{IssuedToken, JwtEncoder};
use parkhub_auth::password::PasswordHasher;
use parkhub_auth::rbac::{Operation, RbacEnforcer};
use parkhub_core::error::AppError;
use parkhub_core::types::UserId;
use parkhub_entity::user::{User, UserRole};
use parkhub_store::UserStore;

use crate::context::RequestContext;

/// Handles user account operations.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User store.
    users: Arc<dyn UserStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// JWT encoder for issuing tokens on login.
    jwt: Arc<JwtEncoder>,
    /// RBAC enforcer.
    rbac: Arc<RbacEnforcer>,
}

/// Data for registering a new user account.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RegisterUserRequest {
    /// Username (unique).
    pub username: String,
    /// Initial password.
    pub password: String,
    /// First name (optional).
    pub first_name: Option<String>,
    /// Last name (optional).
    pub last_name: Option<String>,
    /// Vehicle plate number.
    pub plate_number: String,
    /// Requested role; defaults to `user` when omitted.
    pub role: Option<String>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        jwt: Arc<JwtEncoder>,
        rbac: Arc<RbacEnforcer>,
    ) -> Self {
        Self {
            users,
            hasher,
            jwt,
            rbac,
        }
    }

    /// Registers a new user account.
    pub async fn register(&self, req: RegisterUserRequest) -> Result<User, AppError> {
        if req.username.trim().is_empty() || req.username.len() < 3 {
            return Err(AppError::validation(
                "Username must be at least 3 characters",
            ));
        }

        let role = match req.role.as_deref() {
            Some(raw) => raw.parse::<UserRole>()?,
            None => UserRole::User,
        };

        let password_hash = self.hasher.hash_password(&req.password)?;

        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            username: req.username,
            password_hash,
            role,
            first_name: req.first_name,
            last_name: req.last_name,
            plate_number: req.plate_number,
            created_at: now,
            updated_at: now,
        };

        let user = self.users.insert(user).await?;

        info!(
            user_id = %user.id,
            username = %user.username,
            role = %user.role,
            "User registered"
        );

        Ok(user)
    }

    /// Authenticates a user and issues a JWT on success.
    ///
    /// Unknown usernames and wrong passwords are indistinguishable to the
    /// caller; both answer with `ErrorKind::Unauthorized`.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(User, IssuedToken), AppError> {
        let Some(user) = self.users.find_by_username(username).await? else {
            return Err(AppError::unauthorized("Invalid username or password"));
        };

        let valid = self.hasher.verify_password(password, &user.password_hash)?;
        if !valid {
            return Err(AppError::unauthorized("Invalid username or password"));
        }

        let token = self.jwt.issue(&user.username, user.role)?;

        info!(user_id = %user.id, username = %user.username, "User authenticated");

        Ok((user, token))
    }

    /// Changes a user's role (admin).
    pub async fn change_role(
        &self,
        ctx: &RequestContext,
        user_id: UserId,
        new_role: &str,
    ) -> Result<User, AppError> {
        self.rbac.require(&ctx.role, &Operation::UserChangeRole)?;

        // Reject unknown role strings before touching the store.
        let role = new_role.parse::<UserRole>()?;

        let user = self.users.update_role(user_id, role).await?;

        info!(
            admin_id = %ctx.user_id,
            target_id = %user_id,
            new_role = %role,
            "User role changed"
        );

        Ok(user)
    }

    /// Looks up a user by username.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        self.users.find_by_username(username).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use parkhub_core::config::auth::AuthConfig;
    use parkhub_core::error::ErrorKind;
    use parkhub_store::memory::MemoryUserStore;

    fn service() -> UserService {
        UserService::new(
            Arc::new(MemoryUserStore::new()),
            Arc::new(PasswordHasher::new()),
            Arc::new(JwtEncoder::new(&AuthConfig::default())),
            Arc::new(RbacEnforcer::new()),
        )
    }

    fn register_request(username: &str, role: Option<&str>) -> RegisterUserRequest {
        RegisterUserRequest {
            username: username.to_string(),
            password: "Str0ngPassw0rd".to_string(),
            first_name: None,
            last_name: None,
            plate_number: "59A-123.45".to_string(),
            role: role.map(String::from),
        }
    }

    fn admin_ctx() -> RequestContext {
        RequestContext::new(UserId::new(), "root".to_string(), UserRole::Admin)
    }

    #[tokio::test]
    async fn test_register_defaults_to_user_role() {
        let service = service();

        let user = service
            .register(register_request("alice", None))
            .await
            .unwrap();

        assert_eq!(user.role, UserRole::User);
        assert_ne!(user.password_hash, "Str0ngPassw0rd");
    }

    #[tokio::test]
    async fn test_register_honors_explicit_role() {
        let service = service();

        let user = service
            .register(register_request("root", Some("admin")))
            .await
            .unwrap();

        assert_eq!(user.role, UserRole::Admin);
    }

    #[tokio::test]
    async fn test_register_rejects_unknown_role() {
        let service = service();

        let err = service
            .register(register_request("mallory", Some("superadmin")))
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::InvalidRole);
    }

    #[tokio::test]
    async fn test_register_rejects_short_password() {
        let service = service();

        let mut req = register_request("alice", None);
        req.password = "secret".to_string();
        let err = service.register(req).await.unwrap_err();

        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(service.find_by_username("alice").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_register_duplicate_username_conflicts() {
        let service = service();

        service
            .register(register_request("alice", None))
            .await
            .unwrap();
        let err = service
            .register(register_request("alice", None))
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn test_authenticate_issues_token() {
        let service = service();
        service
            .register(register_request("alice", None))
            .await
            .unwrap();

        let (user, token) = service
            .authenticate("alice", "Str0ngPassw0rd")
            .await
            .unwrap();

        assert_eq!(user.username, "alice");
        assert!(!token.token.is_empty());
    }

    #[tokio::test]
    async fn test_authenticate_rejects_bad_password_and_unknown_user_alike() {
        let service = service();
        service
            .register(register_request("alice", None))
            .await
            .unwrap();

        let wrong = service.authenticate("alice", "nope").await.unwrap_err();
        let unknown = service
            .authenticate("nobody", "Str0ngPassw0rd")
            .await
            .unwrap_err();

        assert_eq!(wrong.kind, ErrorKind::Unauthorized);
        assert_eq!(unknown.kind, ErrorKind::Unauthorized);
        assert_eq!(wrong.message, unknown.message);
    }

    #[tokio::test]
    async fn test_change_role_requires_admin() {
        let service = service();
        let target = service
            .register(register_request("alice", None))
            .await
            .unwrap();

        let ctx = RequestContext::new(UserId::new(), "bob".to_string(), UserRole::Staff);
        let err = service
            .change_role(&ctx, target.id, "staff")
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::Forbidden);
    }

    #[tokio::test]
    async fn test_change_role_promotes_user() {
        let service = service();
        let target = service
            .register(register_request("alice", None))
            .await
            .unwrap();

        let updated = service
            .change_role(&admin_ctx(), target.id, "staff")
            .await
            .unwrap();

        assert_eq!(updated.role, UserRole::Staff);
    }

    #[tokio::test]
    async fn test_change_role_validates_role_before_lookup() {
        let service = service();

        // Unknown user, but the bad role string must win.
        let err = service
            .change_role(&admin_ctx(), UserId::new(), "overlord")
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::InvalidRole);
    }
}
