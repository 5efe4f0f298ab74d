use axum::extract::State;

use crate::db::{AppState, queries};
use crate::envelope::{DeleteResult, Envelope, UpdateResult};
use crate::error::Result;
use crate::extractors::{Json, Path};
use crate::models::{CreateMenuItem, MenuItem, UpdateMenuItem};

pub async fn add_menu_item(
    State(state): State<AppState>,
    Json(input): Json<CreateMenuItem>,
) -> Result<Envelope<MenuItem>> {
    let conn = state.db.get()?;
    let item = queries::create_menu_item(&conn, &input)?;

    tracing::info!("Menu item {} ({}) added", item.id, item.name);

    Ok(Envelope::created("menu item added", item))
}

pub async fn update_menu_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateMenuItem>,
) -> Result<Envelope<UpdateResult>> {
    let conn = state.db.get()?;
    let matched_count = queries::update_menu_item(&conn, &id, &input)?;
    let message = if input.is_empty() {
        "nothing to update"
    } else {
        "menu item updated"
    };
    Ok(Envelope::ok(message, UpdateResult { matched_count }))
}

pub async fn delete_menu_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Envelope<DeleteResult>> {
    let conn = state.db.get()?;
    let deleted_count = queries::delete_menu_item(&conn, &id)?;
    Ok(Envelope::ok("menu item deleted", DeleteResult { deleted_count }))
}
