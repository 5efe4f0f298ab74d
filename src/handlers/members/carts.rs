use axum::extract::{Extension, State};

use crate::db::{AppState, queries};
use crate::envelope::Envelope;
use crate::error::Result;
use crate::extractors::Path;
use crate::jwt::AuthUser;
use crate::models::CartItem;

use super::require_self;

pub async fn list_cart_items(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(email): Path<String>,
) -> Result<Envelope<Vec<CartItem>>> {
    require_self(&user, &email)?;

    let conn = state.db.get()?;
    let items = queries::list_cart_items(&conn, &email)?;
    Ok(Envelope::ok("cart retrieved", items))
}
