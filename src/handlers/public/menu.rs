use axum::extract::State;

use crate::db::{AppState, queries};
use crate::envelope::Envelope;
use crate::error::{AppError, Result};
use crate::extractors::Path;
use crate::models::MenuItem;

pub async fn list_menu_items(State(state): State<AppState>) -> Result<Envelope<Vec<MenuItem>>> {
    let conn = state.db.get()?;
    let items = queries::list_menu_items(&conn)?;
    Ok(Envelope::ok("menu items retrieved", items))
}

/// Fetch one menu item, used to prefill the admin edit form.
pub async fn get_menu_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Envelope<MenuItem>> {
    let conn = state.db.get()?;
    let item = queries::get_menu_item(&conn, &id)?
        .ok_or_else(|| AppError::NotFound("menu item not found".into()))?;
    Ok(Envelope::ok("menu item retrieved", item))
}
