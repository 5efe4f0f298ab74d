use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::db::AppState;
use crate::error::{AppError, Result};
use crate::jwt::AuthUser;
use crate::util::extract_bearer_token;

/// Verify the bearer token in `headers` and return the identity it carries.
fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<AuthUser> {
    let token = extract_bearer_token(headers).ok_or_else(AppError::unauthorized)?;
    let claims = state.tokens.verify(token)?;
    Ok(AuthUser::from(claims))
}

/// Reject requests without a valid bearer token; attach `AuthUser` otherwise.
/// Touches no store, so a bad token never reaches the database.
pub async fn verify_token(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response> {
    let user = authenticate(&state, request.headers())?;
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}
