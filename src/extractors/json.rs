//! JSON body extractor whose rejections go to the process-wide fallback.

use crate::error::AppError;
use crate::fallback::Unhandled;
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

/// Like [`axum::Json`], but a body that cannot be read or parsed is answered
/// with the 500 `{message, stack}` fallback instead of axum's plain-text rejection.
/// Bodies over the configured limit get 413 `{message}`.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                Err(AppError::PayloadTooLarge(rejection.body_text()).into_response())
            }
            Err(rejection) => Err(Unhandled::from_error(&rejection).into_response()),
        }
    }
}
