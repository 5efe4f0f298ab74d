//! The `{success, message, data}` JSON envelope every route answers with.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Successful response body. `data` is omitted when there is nothing to return.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    #[serde(skip)]
    status: StatusCode,
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> Envelope<T> {
    /// 200 with a payload.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            status: StatusCode::OK,
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// 200 with a message only.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            success: true,
            message: message.into(),
            data: None,
        }
    }

    /// 201 with the inserted record.
    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            ..Self::ok(message, data)
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

/// Payload for delete routes.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub deleted_count: usize,
}

/// Payload for update routes.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    pub matched_count: usize,
}

/// Failure response body, produced by `AppError`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
