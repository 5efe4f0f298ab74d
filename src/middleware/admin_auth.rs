use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::db::{AppState, queries};
use crate::error::{AppError, Result};
use crate::jwt::AuthUser;

/// Require the authenticated identity to hold the admin role.
///
/// Must be layered inside `verify_token`: it reads the `AuthUser` that guard
/// attaches and treats its absence as forbidden.
pub async fn verify_admin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response> {
    let user = request
        .extensions()
        .get::<AuthUser>()
        .ok_or_else(AppError::forbidden)?;

    let is_admin = {
        let conn = state.db.get()?;
        queries::get_user_by_email(&conn, &user.email)?
            .map(|u| u.is_admin())
            .unwrap_or(false)
    };

    if !is_admin {
        tracing::warn!("Non-admin {} refused on {}", user.email, request.uri().path());
        return Err(AppError::forbidden());
    }

    Ok(next.run(request).await)
}
