//! # parkhub-auth
//!
//! Authentication and authorization for the ParkHub platform.
//!
//! ## Modules
//!
//! - `jwt` — JWT token creation and validation
//! - `password` — Argon2id password hashing
//! - `rbac` — Role-based access control enforcement

pub mod jwt;
pub mod password;
pub mod rbac;

pub use jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
pub use rbac::{Operation, RbacEnforcer, RbacPolicies};
