//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use parkhub_core::error::{AppError, ErrorKind};
use parkhub_core::types::ApiErrorResponse;

/// HTTP-facing wrapper around the domain error.
///
/// `AppError` lives in `parkhub-core`, which carries no Axum dependency,
/// so the HTTP mapping happens on this wrapper. Handlers return it and
/// `?` converts from `AppError` automatically.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;

        let status = match err.kind {
            ErrorKind::Validation | ErrorKind::InvalidRole | ErrorKind::AlreadyEmpty => {
                StatusCode::BAD_REQUEST
            }
            ErrorKind::Unauthorized | ErrorKind::InvalidToken | ErrorKind::ExpiredToken => {
                StatusCode::UNAUTHORIZED
            }
            ErrorKind::Forbidden => StatusCode::FORBIDDEN,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict | ErrorKind::DuplicateReservation | ErrorKind::LotFull => {
                StatusCode::CONFLICT
            }
            ErrorKind::Internal | ErrorKind::Configuration => {
                tracing::error!(error = %err.message, "Internal server error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ApiErrorResponse {
            error: err.kind.to_string(),
            message: err.message,
            details: None,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        ApiError(err).into_response().status()
    }

    #[test]
    fn test_client_error_statuses() {
        assert_eq!(
            status_of(AppError::already_empty("none reserved")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::invalid_role("bad role")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::expired_token("expired")),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(status_of(AppError::lot_full("full")), StatusCode::CONFLICT);
        assert_eq!(
            status_of(AppError::duplicate_reservation("dup")),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(AppError::not_found("missing")),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_error_code_comes_from_the_kind() {
        let response = ApiError(AppError::lot_full("No available spaces")).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
