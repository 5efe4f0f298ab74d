use axum::extract::State;

use crate::db::{AppState, queries};
use crate::envelope::Envelope;
use crate::error::Result;
use crate::models::AdminStats;

pub async fn admin_stats(State(state): State<AppState>) -> Result<Envelope<AdminStats>> {
    let conn = state.db.get()?;
    let stats = queries::admin_stats(&conn)?;
    Ok(Envelope::ok("stats retrieved", stats))
}
