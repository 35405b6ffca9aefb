//! Admin user management handlers.

use axum::Json;
use axum::extract::{Path, State};
use validator::Validate;

use parkhub_core::error::AppError;
use parkhub_core::types::UserId;

use crate::dto::request::ChangeRoleRequest;
use crate::dto::response::{ApiResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// PUT /api/admin/users/{id}/role
pub async fn change_role(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<UserId>,
    Json(req): Json<ChangeRoleRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let user = state.user_service.change_role(&auth, id, &req.role).await?;
    Ok(Json(ApiResponse::ok(UserResponse::from(user))))
}
