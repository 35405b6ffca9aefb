//! Application builder: wires router + middleware + state into an Axum app.

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use parkhub_auth::jwt::decoder::JwtDecoder;
use parkhub_auth::jwt::encoder::JwtEncoder;
use parkhub_auth::password::hasher::PasswordHasher;
use parkhub_auth::rbac::enforcer::RbacEnforcer;
use parkhub_core::config::AppConfig;
use parkhub_core::config::app::CorsConfig;
use parkhub_core::error::AppError;
use parkhub_service::lot::LotService;
use parkhub_service::reservation::ReservationService;
use parkhub_service::user::UserService;
use parkhub_store::memory::{MemoryLotStore, MemoryReservationStore, MemoryUserStore};
use parkhub_store::{CapacityLedger, LotStore, ReservationStore, UserStore};

use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState, cors_config: &CorsConfig) -> Router {
    build_router(state)
        .layer(build_cors_layer(cors_config))
        .layer(TraceLayer::new_for_http())
}

/// Builds the application state from configuration with fresh in-memory
/// stores.
pub fn build_state(config: AppConfig) -> AppState {
    // ── Step 1: Initialize stores ────────────────────────────────
    let lots = Arc::new(MemoryLotStore::new());
    let reservations = Arc::new(MemoryReservationStore::new());
    let users = Arc::new(MemoryUserStore::new());

    // ── Step 2: Initialize auth components ───────────────────────
    let password_hasher = Arc::new(PasswordHasher::new());
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
    let rbac_enforcer = Arc::new(RbacEnforcer::new());

    // ── Step 3: Initialize services ──────────────────────────────
    let user_service = Arc::new(UserService::new(
        Arc::clone(&users) as Arc<dyn UserStore>,
        Arc::clone(&password_hasher),
        Arc::clone(&jwt_encoder),
        Arc::clone(&rbac_enforcer),
    ));
    let lot_service = Arc::new(LotService::new(
        Arc::clone(&lots) as Arc<dyn LotStore>,
        Arc::clone(&lots) as Arc<dyn CapacityLedger>,
        Arc::clone(&reservations) as Arc<dyn ReservationStore>,
        Arc::clone(&rbac_enforcer),
    ));
    let reservation_service = Arc::new(ReservationService::new(
        Arc::clone(&reservations) as Arc<dyn ReservationStore>,
        Arc::clone(&lots) as Arc<dyn CapacityLedger>,
        Arc::clone(&lots) as Arc<dyn LotStore>,
        Arc::clone(&rbac_enforcer),
    ));

    AppState {
        config: Arc::new(config),
        jwt_decoder,
        user_service,
        lot_service,
        reservation_service,
    }
}

/// Runs the ParkHub server with the given configuration.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting ParkHub server...");

    let cors_config = config.server.cors.clone();
    let addr = format!("{}:{}", config.server.host, config.server.port);

    // ── Build state, router, and middleware ──────────────────────
    let state = build_state(config);
    let app = build_app(state, &cors_config);

    // ── Bind and serve ───────────────────────────────────────────
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("ParkHub server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
}
