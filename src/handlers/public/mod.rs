mod auth;
mod carts;
mod menu;
mod payments;
mod reviews;

pub use auth::*;
pub use carts::*;
pub use menu::*;
pub use payments::*;
pub use reviews::*;

use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::db::AppState;

async fn root() -> &'static str {
    "Bistro boss restaurant server running..."
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/menu", get(list_menu_items))
        .route("/menu/{id}", get(get_menu_item))
        .route("/reviews", get(list_reviews))
        // Auth
        .route("/jwt", post(issue_token))
        .route("/log-out", get(log_out))
        .route("/users/{email}", patch(upsert_user))
        // Carts
        .route("/carts", post(add_cart_item))
        .route("/cart/{id}", delete(remove_cart_item))
        // Payments
        .route("/payment", post(record_payment))
        .route("/payment/{email}", get(list_payments))
        .route("/create-confirm-intent", post(create_confirm_intent))
}
