//! # parkhub-api
//!
//! HTTP API layer for ParkHub built on Axum.
//!
//! Provides all REST endpoints, middleware (CORS, logging), extractors,
//! DTOs, and the mapping from domain errors to HTTP responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
