use axum::extract::{Extension, State};

use crate::db::{AppState, queries};
use crate::envelope::Envelope;
use crate::error::Result;
use crate::extractors::Path;
use crate::jwt::AuthUser;

use super::require_self;

/// Report whether the caller holds the admin role. Unknown users are not admins.
pub async fn check_admin(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(email): Path<String>,
) -> Result<Envelope<bool>> {
    require_self(&user, &email)?;

    let conn = state.db.get()?;
    let admin = queries::get_user_by_email(&conn, &email)?
        .map(|u| u.is_admin())
        .unwrap_or(false);

    Ok(Envelope::ok("admin status retrieved", admin))
}
