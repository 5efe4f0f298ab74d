pub mod admin;
pub mod members;
pub mod public;

use crate::error::AppError;

/// Paths with no route at all.
pub async fn route_not_found() -> AppError {
    AppError::NotFound("route not found".into())
}

/// Known paths called with a method they do not serve.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed("method not allowed".into())
}
