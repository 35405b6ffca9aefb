//! Route definitions for the ParkHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, patch, post, put},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(lot_routes())
        .merge(reservation_routes())
        .merge(admin_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: register, login, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/me", get(handlers::auth::me))
}

/// Lot CRUD and space counter adjustments
fn lot_routes() -> Router<AppState> {
    Router::new()
        .route("/lots", get(handlers::lot::list_lots))
        .route("/lots", post(handlers::lot::create_lot))
        .route("/lots/{id}", get(handlers::lot::get_lot))
        .route("/lots/{id}", delete(handlers::lot::delete_lot))
        .route("/lots/{id}/spaces", patch(handlers::lot::update_spaces))
        .route(
            "/lots/{id}/increment-reserved",
            patch(handlers::lot::increment_reserved),
        )
        .route(
            "/lots/{id}/decrement-reserved",
            patch(handlers::lot::decrement_reserved),
        )
}

/// Reservation lifecycle and queries
fn reservation_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/lots/{id}/reservations",
            post(handlers::reservation::create_reservation),
        )
        .route(
            "/lots/{id}/reservations",
            delete(handlers::reservation::cancel_reservation),
        )
        .route(
            "/lots/{id}/reservations",
            get(handlers::reservation::list_lot_reservations),
        )
        .route(
            "/reservations",
            get(handlers::reservation::list_own_reservations),
        )
        .route(
            "/reservations/exists",
            get(handlers::reservation::reservation_exists),
        )
        .route(
            "/reservations/{id}/confirm",
            post(handlers::reservation::confirm_reservation),
        )
}

/// Admin endpoints: role changes, reservation overview
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/admin/users/{id}/role",
            put(handlers::admin::users::change_role),
        )
        .route(
            "/admin/reservations",
            get(handlers::admin::reservations::list_all_reservations),
        )
}

/// Health endpoints
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
