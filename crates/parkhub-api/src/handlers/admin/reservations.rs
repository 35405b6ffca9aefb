//! Admin reservation overview handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{ApiResponse, ReservationResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/admin/reservations
pub async fn list_all_reservations(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<ReservationResponse>>>, ApiError> {
    let reservations = state.reservation_service.list_all(&auth).await?;
    let reservations = reservations
        .into_iter()
        .map(ReservationResponse::from)
        .collect();
    Ok(Json(ApiResponse::ok(reservations)))
}
