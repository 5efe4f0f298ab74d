mod menu;
mod stats;
mod users;

pub use menu::*;
pub use stats::*;
pub use users::*;

use axum::{
    Router, middleware,
    routing::{MethodRouter, delete, get, patch, post},
};

use crate::db::AppState;
use crate::middleware::{verify_admin, verify_token};

pub fn router(state: AppState) -> Router<AppState> {
    Router::new()
        // Menu management
        .route("/menu", guarded(&state, post(add_menu_item)))
        .route(
            "/menu/{id}",
            guarded(&state, patch(update_menu_item).delete(delete_menu_item)),
        )
        // User administration
        .route("/users", guarded(&state, get(list_users)))
        .route("/user/update/role/{id}", guarded(&state, patch(make_admin)))
        .route("/user/delete/{id}", guarded(&state, delete(delete_user)))
        .route("/admin-stats", guarded(&state, get(admin_stats)))
}

/// Guard only the registered methods. These paths are shared with public
/// routes, so an unmatched method must fall through to 405 instead of the guard.
fn guarded(state: &AppState, route: MethodRouter<AppState>) -> MethodRouter<AppState> {
    // Last layer runs first: token, then role.
    route
        .route_layer(middleware::from_fn_with_state(state.clone(), verify_admin))
        .route_layer(middleware::from_fn_with_state(state.clone(), verify_token))
}
