//! Common routes: greetings, health, version, API description and Swagger UI.

use crate::fallback::route_not_found;
use crate::openapi::openapi;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use utoipa_swagger_ui::SwaggerUi;

/// Interactive API browser.
pub const SWAGGER_UI_PATH: &str = "/api-docs";
/// Raw OpenAPI document, also loaded by the Swagger UI.
pub const OPENAPI_PATH: &str = "/openapi.json";

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

async fn root() -> &'static str {
    "Hola mi server en express"
}

async fn new_route() -> &'static str {
    "hola soy una nueva ruta"
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Common routes (no state): GET /, /nuevaruta, /health, /version, /info,
/// the OpenAPI document and the Swagger UI serving it.
pub fn common_routes() -> Router {
    Router::new()
        .route("/", get(root).fallback(route_not_found))
        .route("/nuevaruta", get(new_route).fallback(route_not_found))
        .route("/health", get(health).fallback(route_not_found))
        .route("/version", get(version).fallback(route_not_found))
        .route("/info", get(version).fallback(route_not_found))
        .merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_PATH, openapi()))
}
