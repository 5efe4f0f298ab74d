use axum::http::StatusCode;
use serde_json::json;

use crate::common::*;

#[tokio::test]
async fn test_add_then_list_own_cart() {
    let state = create_test_app_state();
    let menu_id = {
        let conn = state.db.get().unwrap();
        create_test_menu_item(&conn, "Caesar", 12.0).id
    };
    let token = token_for(&state, "a@x.com");
    let app = test_app(state);

    let (status, json) = send(
        &app,
        "POST",
        "/carts",
        None,
        Some(json!({
            "email": "a@x.com",
            "menuId": menu_id,
            "name": "Caesar",
            "price": 12.0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["data"]["menuId"], menu_id.as_str());

    let (status, json) = send(&app, "GET", "/carts/a@x.com", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let items = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["email"], "a@x.com");
}

#[tokio::test]
async fn test_cart_listing_only_shows_own_items() {
    let state = create_test_app_state();
    {
        let conn = state.db.get().unwrap();
        let salad = create_test_menu_item(&conn, "Caesar", 12.0);
        create_test_cart_item(&conn, "a@x.com", &salad);
        create_test_cart_item(&conn, "b@x.com", &salad);
        create_test_cart_item(&conn, "b@x.com", &salad);
    }
    let token = token_for(&state, "b@x.com");
    let app = test_app(state);

    let (status, json) = send(&app, "GET", "/carts/b@x.com", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_remove_single_cart_item() {
    let state = create_test_app_state();
    let (keep, remove) = {
        let conn = state.db.get().unwrap();
        let salad = create_test_menu_item(&conn, "Caesar", 12.0);
        (
            create_test_cart_item(&conn, "a@x.com", &salad),
            create_test_cart_item(&conn, "a@x.com", &salad),
        )
    };
    let app = test_app(state.clone());

    let (status, json) = send(&app, "DELETE", &format!("/cart/{}", remove.id), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["deletedCount"], 1);

    let conn = state.db.get().unwrap();
    let remaining = queries::list_cart_items(&conn, "a@x.com").unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, keep.id);
}

#[tokio::test]
async fn test_cart_item_without_price_is_bad_request() {
    let app = test_app(create_test_app_state());

    let (status, _) = send(
        &app,
        "POST",
        "/carts",
        None,
        Some(json!({ "email": "a@x.com", "menuId": "m1" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
