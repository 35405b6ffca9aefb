//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use parkhub_core::config::auth::AuthConfig;
use parkhub_core::error::AppError;

use super::claims::Claims;

/// Validates JWT tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token string.
    ///
    /// Expiry is reported as [`ErrorKind::ExpiredToken`]; every other
    /// failure mode (bad signature, malformed token, unknown role in the
    /// payload) collapses to [`ErrorKind::InvalidToken`].
    ///
    /// [`ErrorKind::ExpiredToken`]: parkhub_core::error::ErrorKind::ExpiredToken
    /// [`ErrorKind::InvalidToken`]: parkhub_core::error::ErrorKind::InvalidToken
    pub fn validate(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::expired_token("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::invalid_token("Invalid token format")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::invalid_token("Invalid token signature")
                    }
                    _ => AppError::invalid_token(format!("Token validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use chrono::Utc;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use parkhub_core::error::ErrorKind;
    use parkhub_entity::user::UserRole;
    use serde::Serialize;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "unit-test-secret".to_string(),
            jwt_ttl_hours: 1,
        }
    }

    #[test]
    fn test_issue_and_validate() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);

        let issued = encoder.issue("alice", UserRole::Staff).unwrap();
        let claims = decoder.validate(&issued.token).unwrap();

        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.role, UserRole::Staff);
        assert_eq!(claims.exp, issued.expires_at.timestamp());
    }

    #[test]
    fn test_garbage_token_is_invalid() {
        let decoder = JwtDecoder::new(&test_config());
        let err = decoder.validate("not-a-jwt").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidToken);
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let encoder = JwtEncoder::new(&test_config());
        let other = AuthConfig {
            jwt_secret: "a-different-secret".to_string(),
            jwt_ttl_hours: 1,
        };
        let decoder = JwtDecoder::new(&other);

        let issued = encoder.issue("alice", UserRole::User).unwrap();
        let err = decoder.validate(&issued.token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidToken);
    }

    #[test]
    fn test_expired_token_is_distinct() {
        let config = test_config();
        let decoder = JwtDecoder::new(&config);

        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "bob".to_string(),
            role: UserRole::User,
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .unwrap();

        let err = decoder.validate(&token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::ExpiredToken);
    }

    #[test]
    fn test_unknown_role_fails_closed() {
        let config = test_config();
        let decoder = JwtDecoder::new(&config);

        #[derive(Serialize)]
        struct RawClaims {
            sub: String,
            role: String,
            iat: i64,
            exp: i64,
        }

        let now = Utc::now().timestamp();
        let raw = RawClaims {
            sub: "mallory".to_string(),
            role: "superadmin".to_string(),
            iat: now,
            exp: now + 3600,
        };
        let token = encode(
            &Header::default(),
            &raw,
            &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .unwrap();

        let err = decoder.validate(&token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidToken);
    }
}
