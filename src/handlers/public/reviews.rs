use axum::extract::State;

use crate::db::{AppState, queries};
use crate::envelope::Envelope;
use crate::error::Result;
use crate::models::Review;

pub async fn list_reviews(State(state): State<AppState>) -> Result<Envelope<Vec<Review>>> {
    let conn = state.db.get()?;
    let reviews = queries::list_reviews(&conn)?;
    Ok(Envelope::ok("reviews retrieved", reviews))
}
