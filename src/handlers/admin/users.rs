use axum::extract::State;

use crate::db::{AppState, queries};
use crate::envelope::{DeleteResult, Envelope, UpdateResult};
use crate::error::Result;
use crate::extractors::Path;
use crate::models::{User, UserRole};

pub async fn list_users(State(state): State<AppState>) -> Result<Envelope<Vec<User>>> {
    let conn = state.db.get()?;
    let users = queries::list_users(&conn)?;
    Ok(Envelope::ok("users retrieved", users))
}

/// Promote a user to admin.
pub async fn make_admin(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Envelope<UpdateResult>> {
    let conn = state.db.get()?;
    let matched_count = queries::set_user_role(&conn, &id, UserRole::Admin)?;

    if matched_count > 0 {
        tracing::info!("User {} promoted to admin", id);
    }

    Ok(Envelope::ok("user role updated", UpdateResult { matched_count }))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Envelope<DeleteResult>> {
    let conn = state.db.get()?;
    let deleted_count = queries::delete_user(&conn, &id)?;
    Ok(Envelope::ok("user deleted", DeleteResult { deleted_count }))
}
