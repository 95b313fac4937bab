pub mod health;

use axum::{
    http::{header, HeaderValue},
    routing::{get, post},
    Router,
};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::contact::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/contact",
            post(handlers::handle_submit).options(handlers::handle_preflight),
        )
        .with_state(state)
}

/// Full application assembly: the router plus the middleware the binary
/// serves with. Tests drive this, not the bare router, so middleware cannot
/// drift from production behavior.
///
/// Cross-origin posts from the marketing site get `Access-Control-Allow-Origin: *`
/// stamped on every response. OPTIONS stays with the explicit preflight
/// handler, which answers 204 with the exact method/header allowances; a
/// blanket CORS middleware would answer preflights itself with 200.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
}
