//! Parking lot handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use validator::Validate;

use parkhub_core::error::AppError;
use parkhub_core::types::LotId;
use parkhub_service::lot::CreateLotRequest as SvcCreateLot;

use crate::dto::request::{CreateLotRequest, UpdateSpacesRequest};
use crate::dto::response::{ApiResponse, LotResponse, MessageResponse, SpacesResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/lots
pub async fn list_lots(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<LotResponse>>>, ApiError> {
    let lots = state.lot_service.list_lots(&auth).await?;
    let lots = lots.into_iter().map(LotResponse::from).collect();
    Ok(Json(ApiResponse::ok(lots)))
}

/// GET /api/lots/{id}
pub async fn get_lot(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<LotId>,
) -> Result<Json<ApiResponse<LotResponse>>, ApiError> {
    let lot = state.lot_service.get_lot(&auth, id).await?;
    Ok(Json(ApiResponse::ok(LotResponse::from(lot))))
}

/// POST /api/lots
pub async fn create_lot(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateLotRequest>,
) -> Result<(StatusCode, Json<ApiResponse<LotResponse>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let lot = state
        .lot_service
        .create_lot(
            &auth,
            SvcCreateLot {
                name: req.name,
                address: req.address,
                total_spaces: req.total_spaces,
                reserved_spaces: req.reserved_spaces,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(LotResponse::from(lot))),
    ))
}

/// DELETE /api/lots/{id}
pub async fn delete_lot(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<LotId>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.lot_service.delete_lot(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Parking lot deleted".to_string(),
    })))
}

/// PATCH /api/lots/{id}/spaces
pub async fn update_spaces(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<LotId>,
    Json(req): Json<UpdateSpacesRequest>,
) -> Result<Json<ApiResponse<SpacesResponse>>, ApiError> {
    let counters = state
        .lot_service
        .set_spaces(&auth, id, req.total_spaces, req.reserved_spaces)
        .await?;
    Ok(Json(ApiResponse::ok(SpacesResponse::from(counters))))
}

/// PATCH /api/lots/{id}/increment-reserved
pub async fn increment_reserved(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<LotId>,
) -> Result<Json<ApiResponse<SpacesResponse>>, ApiError> {
    let counters = state.lot_service.increment_reserved(&auth, id).await?;
    Ok(Json(ApiResponse::ok(SpacesResponse::from(counters))))
}

/// PATCH /api/lots/{id}/decrement-reserved
pub async fn decrement_reserved(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<LotId>,
) -> Result<Json<ApiResponse<SpacesResponse>>, ApiError> {
    let counters = state.lot_service.decrement_reserved(&auth, id).await?;
    Ok(Json(ApiResponse::ok(SpacesResponse::from(counters))))
}
