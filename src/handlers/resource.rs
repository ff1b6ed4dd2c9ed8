//! Generic CRUD handlers, one set shared by every record type.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::model::Record;
use crate::response::{created, success_ok};
use crate::state::Resource;
use crate::validation::RequestValidator;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::{Map, Value};

fn body_to_map(value: Value) -> Result<Map<String, Value>, AppError> {
    match value {
        Value::Object(m) => Ok(m),
        _ => Err(AppError::Unexpected("body must be a JSON object".into())),
    }
}

fn not_found<R: Record>() -> AppError {
    AppError::NotFound(format!("{} not found", R::KIND))
}

pub async fn list<R: Record>(State(res): State<Resource<R>>) -> Result<Json<Vec<R>>, AppError> {
    let records = res.store.list_all().await?;
    Ok(Json(records))
}

pub async fn read<R: Record>(
    State(res): State<Resource<R>>,
    Path(id): Path<String>,
) -> Result<Json<R>, AppError> {
    let record = res.store.find_by_id(&id)?.ok_or_else(not_found::<R>)?;
    Ok(Json(record))
}

pub async fn create<R: Record>(
    State(res): State<Resource<R>>,
    JsonBody(body): JsonBody<Value>,
) -> Result<impl IntoResponse, AppError> {
    let mut body = body_to_map(body)?;
    if res.strict_validation {
        RequestValidator::validate(&body, R::RULES)?;
    }
    body.remove("id");
    let draft: R = serde_json::from_value(Value::Object(body))
        .map_err(|e| AppError::Unexpected(e.to_string()))?;
    let record = res.store.create(draft)?;
    Ok(created(format!("{} Created", R::KIND), record))
}

pub async fn update<R: Record>(
    State(res): State<Resource<R>>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<Value>,
) -> Result<impl IntoResponse, AppError> {
    let changes = body_to_map(body)?;
    if res.strict_validation {
        RequestValidator::validate_partial(&changes, R::RULES)?;
    }
    let record = res.store.update(&id, changes)?;
    Ok(success_ok(format!("{} Updated", R::KIND), record))
}

pub async fn delete<R: Record>(
    State(res): State<Resource<R>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let record = res.store.delete(&id)?;
    Ok(success_ok(format!("{} Deleted", R::KIND), record))
}
