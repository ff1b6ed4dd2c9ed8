//! Resource CRUD routes, mounted once per record type under `/api/v1/<path>`.
//!
//! Every method router falls back to `route_not_found`, so a known path with an
//! unsupported method answers 404 `{message}` like an unknown path does.

use crate::fallback::route_not_found;
use crate::handlers::product::{list_by_brand, list_by_category};
use crate::handlers::resource::{create, delete as delete_handler, list, read, update};
use crate::model::{Product, Record};
use crate::state::{AppState, Resource};
use axum::{routing::get, Router};

/// `/<path>` (also with a trailing slash) and `/<path>/:id` for `R`.
pub fn resource_routes<R: Record>(resource: Resource<R>) -> Router {
    let collection = get(list::<R>)
        .post(create::<R>)
        .fallback(route_not_found);
    let item = get(read::<R>)
        .patch(update::<R>)
        .delete(delete_handler::<R>)
        .fallback(route_not_found);
    let base = format!("/{}", R::PATH);
    Router::new()
        .route(&base, collection.clone())
        .route(&format!("{}/", base), collection)
        .route(&format!("{}/:id", base), item)
        .with_state(resource)
}

/// Product CRUD plus the by-category and by-brand lookups.
pub fn product_routes(resource: Resource<Product>) -> Router {
    Router::new()
        .route(
            &format!("/{}/categories/:id", Product::PATH),
            get(list_by_category).fallback(route_not_found),
        )
        .route(
            &format!("/{}/brands/:id", Product::PATH),
            get(list_by_brand).fallback(route_not_found),
        )
        .with_state(resource.clone())
        .merge(resource_routes(resource))
}

/// Every collection's routes, to be nested under `/api/v1`.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .merge(product_routes(state.resource(&state.products)))
        .merge(resource_routes(state.resource(&state.users)))
        .merge(resource_routes(state.resource(&state.categories)))
        .merge(resource_routes(state.resource(&state.brands)))
        .merge(resource_routes(state.resource(&state.movies)))
}
