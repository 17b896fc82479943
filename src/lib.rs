//! Form submission service.
//!
//! Serves a browser form page and the `/api/form` endpoint behind it. The
//! building blocks are exposed here so integration tests and the binary
//! entrypoint can both assemble the application.

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::Method;
use axum::http::header::CONTENT_TYPE;
use axum::routing::{any, get};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::state::AppState;

pub mod config;
pub mod endpoints;
pub mod model;
pub mod parse;
pub mod schema;
pub mod state;
pub mod store;

/// Assembles the application router.
///
/// `/api/form` is registered for every method; the handler answers 404 to
/// anything but POST before touching the body, so no framework-level method
/// routing or body decoding happens ahead of the submission pipeline.
pub fn app(state: AppState) -> Router {
    // Allow browser form pages hosted elsewhere to reach the endpoint
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .allow_origin(AllowOrigin::any());

    Router::new()
        .route("/", get(endpoints::form_page))
        .route("/api/form", any(endpoints::handle_form))
        .layer(cors)
        .layer(DefaultBodyLimit::max(usize::MAX))
        .with_state(state)
}
