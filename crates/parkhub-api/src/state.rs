//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use parkhub_auth::jwt::decoder::JwtDecoder;
use parkhub_core::config::AppConfig;
use parkhub_service::lot::LotService;
use parkhub_service::reservation::ReservationService;
use parkhub_service::user::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,

    // ── Services ─────────────────────────────────────────────
    /// User account service
    pub user_service: Arc<UserService>,
    /// Parking lot service
    pub lot_service: Arc<LotService>,
    /// Reservation service
    pub reservation_service: Arc<ReservationService>,
}
