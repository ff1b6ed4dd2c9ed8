//! Product lookups by category and brand reference.

use crate::error::AppError;
use crate::model::product::{BRAND_ID, CATEGORY_ID};
use crate::model::Product;
use crate::state::Resource;
use axum::{
    extract::{Path, State},
    Json,
};

fn by_foreign_key(
    res: &Resource<Product>,
    field: &str,
    value: &str,
    label: &str,
) -> Result<Json<Vec<Product>>, AppError> {
    let products = res.store.find_by_foreign_key(field, value)?;
    if products.is_empty() {
        return Err(AppError::NotFound(format!("No products found for this {}", label)));
    }
    Ok(Json(products))
}

pub async fn list_by_category(
    State(res): State<Resource<Product>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Product>>, AppError> {
    by_foreign_key(&res, CATEGORY_ID, &id, "category")
}

pub async fn list_by_brand(
    State(res): State<Resource<Product>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Product>>, AppError> {
    by_foreign_key(&res, BRAND_ID, &id, "brand")
}
