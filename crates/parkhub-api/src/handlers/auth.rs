//! Auth handlers: register, login, me.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use parkhub_core::error::AppError;
use parkhub_service::user::RegisterUserRequest;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{ApiResponse, LoginResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let user = state
        .user_service
        .register(RegisterUserRequest {
            username: req.username,
            password: req.password,
            first_name: req.first_name,
            last_name: req.last_name,
            plate_number: req.plate_number,
            role: req.role,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(UserResponse::from(user))),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let (user, token) = state
        .user_service
        .authenticate(&req.username, &req.password)
        .await?;

    Ok(Json(ApiResponse::ok(LoginResponse {
        token: token.token,
        expires_at: token.expires_at,
        user: UserResponse::from(user),
    })))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state
        .user_service
        .find_by_username(&auth.username)
        .await?
        .ok_or_else(|| AppError::unauthorized("Account no longer exists"))?;

    Ok(Json(ApiResponse::ok(UserResponse::from(user))))
}
