use axum::extract::State;

use crate::db::{AppState, queries};
use crate::envelope::{DeleteResult, Envelope};
use crate::error::Result;
use crate::extractors::{Json, Path};
use crate::models::{CartItem, CreateCartItem};

pub async fn add_cart_item(
    State(state): State<AppState>,
    Json(input): Json<CreateCartItem>,
) -> Result<Envelope<CartItem>> {
    let conn = state.db.get()?;
    let item = queries::create_cart_item(&conn, &input)?;
    Ok(Envelope::created("item added to cart", item))
}

pub async fn remove_cart_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Envelope<DeleteResult>> {
    let conn = state.db.get()?;
    let deleted_count = queries::delete_cart_item(&conn, &id)?;
    Ok(Envelope::ok("cart item removed", DeleteResult { deleted_count }))
}
