use axum::{body::Bytes, extract::State};
use serde::{Deserialize, Serialize};

use crate::db::{AppState, queries};
use crate::envelope::Envelope;
use crate::error::{AppError, Result};
use crate::extractors::{Json, Path};
use crate::models::{UpsertUser, User};

#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Issue a one-hour access token for the posted identity.
pub async fn issue_token(
    State(state): State<AppState>,
    Json(request): Json<TokenRequest>,
) -> Result<Envelope<TokenResponse>> {
    let token = state.tokens.issue(&request.email)?;
    Ok(Envelope::ok("token issued", TokenResponse { token }))
}

/// Tokens are stateless; the client discards its copy.
pub async fn log_out() -> Envelope<()> {
    Envelope::message("logged out")
}

/// Record a user on first login. A repeat call for the same email writes nothing.
///
/// The body is optional and may carry a display name.
pub async fn upsert_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
    body: Bytes,
) -> Result<Envelope<User>> {
    let input: UpsertUser = if body.is_empty() {
        UpsertUser::default()
    } else {
        serde_json::from_slice(&body).map_err(|e| AppError::BadRequest(e.to_string()))?
    };

    let conn = state.db.get()?;
    match queries::upsert_user(&conn, &email, &input)? {
        queries::UpsertOutcome::Inserted(user) => {
            tracing::info!("New user {}", user.email);
            Ok(Envelope::created("user created", user))
        }
        queries::UpsertOutcome::Existing(_) => Ok(Envelope::message("user already exists")),
    }
}
