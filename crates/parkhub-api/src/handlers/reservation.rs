//! Reservation handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use parkhub_core::types::{LotId, ReservationId};

use crate::dto::request::ExistsQuery;
use crate::dto::response::{ApiResponse, CancelResponse, ExistsResponse, ReservationResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/lots/{id}/reservations
pub async fn create_reservation(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(lot_id): Path<LotId>,
) -> Result<(StatusCode, Json<ApiResponse<ReservationResponse>>), ApiError> {
    let reservation = state.reservation_service.create(&auth, lot_id).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(ReservationResponse::from(reservation))),
    ))
}

/// DELETE /api/lots/{id}/reservations
pub async fn cancel_reservation(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(lot_id): Path<LotId>,
) -> Result<Json<ApiResponse<CancelResponse>>, ApiError> {
    let cancelled = state.reservation_service.cancel(&auth, lot_id).await?;
    Ok(Json(ApiResponse::ok(CancelResponse { cancelled })))
}

/// GET /api/lots/{id}/reservations
pub async fn list_lot_reservations(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(lot_id): Path<LotId>,
) -> Result<Json<ApiResponse<Vec<ReservationResponse>>>, ApiError> {
    let reservations = state.reservation_service.list_by_lot(&auth, lot_id).await?;
    let reservations = reservations
        .into_iter()
        .map(ReservationResponse::from)
        .collect();
    Ok(Json(ApiResponse::ok(reservations)))
}

/// GET /api/reservations
pub async fn list_own_reservations(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<ReservationResponse>>>, ApiError> {
    let reservations = state.reservation_service.list_own(&auth).await?;
    let reservations = reservations
        .into_iter()
        .map(ReservationResponse::from)
        .collect();
    Ok(Json(ApiResponse::ok(reservations)))
}

/// GET /api/reservations/exists?lot_id=...
pub async fn reservation_exists(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ExistsQuery>,
) -> Result<Json<ApiResponse<ExistsResponse>>, ApiError> {
    let exists = state
        .reservation_service
        .has_reservation(&auth, query.lot_id)
        .await?;
    Ok(Json(ApiResponse::ok(ExistsResponse { exists })))
}

/// POST /api/reservations/{id}/confirm
pub async fn confirm_reservation(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<ReservationId>,
) -> Result<Json<ApiResponse<ReservationResponse>>, ApiError> {
    let reservation = state.reservation_service.confirm(&auth, id).await?;
    Ok(Json(ApiResponse::ok(ReservationResponse::from(
        reservation,
    ))))
}
