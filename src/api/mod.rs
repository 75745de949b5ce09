//! HTTP API surface.
//!
//! # Routes
//! | Method | Path | Handler |
//! |---|---|---|
//! | GET | `/` | [`handlers::index`] |
//! | POST | `/api/generate-midi` | [`handlers::generate_midi`] |
//! | POST | `/api/save-composition` | [`handlers::save_composition`] |
//! | GET | `/api/load-composition` | [`handlers::load_composition`] |
//! | GET | `/health` | [`handlers::health_check`] |
//!
//! # Design Decisions
//! - Handlers are stateless; they only see their own request
//! - Composition endpoints report every failure as `{success: false, error}`
//!   with status 500 (see [`error::ApiError`])
//! - `/` and `/health` cannot fail

pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};

use self::handlers::*;

pub use error::ApiError;

pub fn router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/generate-midi", post(generate_midi))
        .route("/api/save-composition", post(save_composition))
        .route("/api/load-composition", get(load_composition))
        .route("/health", get(health_check))
}
