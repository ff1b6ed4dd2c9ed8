//! Process-wide error handling for failures no route handler dealt with.

use crate::error::AppError;
use axum::{
    extract::OriginalUri,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::any::Any;
use std::error::Error as StdError;

/// A failure that escaped the route handlers. Always answered with 500.
#[derive(Debug)]
pub struct Unhandled {
    pub message: String,
    pub stack: String,
}

#[derive(Serialize)]
struct FallbackBody {
    message: String,
    stack: String,
}

impl Unhandled {
    pub fn from_error(err: &(dyn StdError + 'static)) -> Self {
        Self {
            message: err.to_string(),
            stack: error_chain(err),
        }
    }
}

impl IntoResponse for Unhandled {
    fn into_response(self) -> Response {
        tracing::error!(message = %self.message, stack = %self.stack, "unhandled error");
        let body = FallbackBody {
            message: self.message,
            stack: self.stack,
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// `err` and each of its sources, one per line.
fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut lines = vec![format!("Error: {}", err)];
    let mut source = err.source();
    while let Some(cause) = source {
        lines.push(format!("    caused by: {}", cause));
        source = cause.source();
    }
    lines.join("\n")
}

/// Panic hook for `CatchPanicLayer`.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };
    Unhandled {
        stack: format!("Error: {}\n    at request handler (panic)", message),
        message,
    }
    .into_response()
}

/// Router fallback for paths and methods with no route.
/// Uses the original URI so nested routers report the full path.
pub async fn route_not_found(method: Method, OriginalUri(uri): OriginalUri) -> AppError {
    AppError::NotFound(format!("Cannot {} {}", method, uri.path()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    #[tokio::test]
    async fn panic_payload_becomes_message_and_stack() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "boom");
        assert!(body["stack"].as_str().unwrap().contains("boom"));
    }

    #[test]
    fn chain_lists_sources() {
        let json_err = serde_json::from_str::<Value>("{").unwrap_err();
        let err = crate::error::StoreError::from(json_err);
        let unhandled = Unhandled::from_error(&err);
        assert!(unhandled.message.starts_with("malformed record"));
        let lines: Vec<&str> = unhandled.stack.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("    caused by: "));
    }
}
