//! Router assembly.

pub mod common;
pub mod resource;

pub use common::common_routes;
pub use resource::{api_routes, product_routes, resource_routes};

use crate::fallback::{handle_panic, route_not_found};
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

/// The full application: common routes and `/api/v1` resources behind [`with_middleware`].
pub fn app(state: AppState, body_limit: usize) -> Router {
    let routes = Router::new()
        .merge(common_routes())
        .nest("/api/v1", api_routes(state));
    with_middleware(routes, body_limit)
}

/// Wraps `router` in the process-wide stack: 404 fallback, request tracing,
/// panic recovery, permissive CORS and the request body limit.
pub fn with_middleware(router: Router, body_limit: usize) -> Router {
    router
        .fallback(route_not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(handle_panic))
                .layer(CorsLayer::permissive()),
        )
}
