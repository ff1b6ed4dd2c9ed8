//! Standard response envelope helpers.

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// `{ "message": ..., "data": ... }` returned by mutating routes.
#[derive(Serialize, Debug)]
pub struct Envelope<T> {
    pub message: String,
    pub data: T,
}

pub fn created<T: Serialize>(message: String, data: T) -> (StatusCode, Json<Envelope<T>>) {
    (StatusCode::CREATED, Json(Envelope { message, data }))
}

pub fn success_ok<T: Serialize>(message: String, data: T) -> (StatusCode, Json<Envelope<T>>) {
    (StatusCode::OK, Json(Envelope { message, data }))
}
