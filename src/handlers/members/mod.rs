//! Routes for any signed-in user, limited to their own records.

mod carts;
mod users;

pub use carts::*;
pub use users::*;

use axum::{
    Router, middleware,
    routing::{MethodRouter, get},
};

use crate::db::AppState;
use crate::error::{AppError, Result};
use crate::jwt::AuthUser;
use crate::middleware::verify_token;

pub fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/user/admin/{email}", signed_in(&state, get(check_admin)))
        .route("/carts/{email}", signed_in(&state, get(list_cart_items)))
}

fn signed_in(state: &AppState, route: MethodRouter<AppState>) -> MethodRouter<AppState> {
    route.route_layer(middleware::from_fn_with_state(state.clone(), verify_token))
}

/// A path email must name the caller's own account.
fn require_self(user: &AuthUser, email: &str) -> Result<()> {
    if user.email == email {
        Ok(())
    } else {
        Err(AppError::forbidden())
    }
}
