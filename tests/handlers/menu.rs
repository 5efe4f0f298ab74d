use axum::http::StatusCode;
use serde_json::json;

use crate::common::*;

fn admin_setup() -> (AppState, String) {
    let state = create_test_app_state();
    {
        let conn = state.db.get().unwrap();
        create_test_user(&conn, "boss@x.com", true);
    }
    let token = token_for(&state, "boss@x.com");
    (state, token)
}

#[tokio::test]
async fn test_root_reports_liveness() {
    let app = test_app(create_test_app_state());

    let response = {
        use tower::ServiceExt;
        app.oneshot(
            axum::http::Request::builder()
                .uri("/")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
    };

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(String::from_utf8_lossy(&body).contains("running"));
}

#[tokio::test]
async fn test_menu_listing_is_stable_without_writes() {
    let state = create_test_app_state();
    {
        let conn = state.db.get().unwrap();
        create_test_menu_item(&conn, "Caesar", 12.0);
        create_test_menu_item(&conn, "Tomato Soup", 6.5);
    }
    let app = test_app(state);

    let (status, first) = send(&app, "GET", "/menu", None, None).await;
    let (_, second) = send(&app, "GET", "/menu", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["data"].as_array().unwrap().len(), 2);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_admin_adds_updates_and_deletes_menu_item() {
    let (state, token) = admin_setup();
    let app = test_app(state);

    let (status, json) = send(
        &app,
        "POST",
        "/menu",
        Some(&token),
        Some(json!({
            "name": "Pizza Margherita",
            "category": "pizza",
            "price": 14.5,
            "recipe": "Tomato, mozzarella, basil",
            "image": "https://img.example/pizza.jpg"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["data"]["description"], "Tomato, mozzarella, basil");
    let id = json["data"]["_id"].as_str().unwrap().to_string();

    let (status, json) = send(
        &app,
        "PATCH",
        &format!("/menu/{}", id),
        Some(&token),
        Some(json!({ "price": 15.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["matchedCount"], 1);

    let (status, json) = send(&app, "GET", &format!("/menu/{}", id), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["price"], 15.0);
    assert_eq!(json["data"]["name"], "Pizza Margherita");

    let (status, json) = send(&app, "DELETE", &format!("/menu/{}", id), Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["deletedCount"], 1);

    let (status, json) = send(&app, "GET", &format!("/menu/{}", id), None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn test_deleting_unknown_menu_item_reports_zero() {
    let (state, token) = admin_setup();
    let app = test_app(state);

    let (status, json) = send(&app, "DELETE", "/menu/does-not-exist", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["deletedCount"], 0);
}

#[tokio::test]
async fn test_reviews_are_listed() {
    let state = create_test_app_state();
    {
        let conn = state.db.get().unwrap();
        queries::create_review(
            &conn,
            &CreateReview {
                name: "Jane".into(),
                details: "Best soup in town".into(),
                rating: 5.0,
            },
        )
        .unwrap();
    }
    let app = test_app(state);

    let (status, json) = send(&app, "GET", "/reviews", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"][0]["name"], "Jane");
    assert_eq!(json["data"][0]["rating"], 5.0);
}

#[tokio::test]
async fn test_admin_stats_sum_revenue() {
    let (state, token) = admin_setup();
    {
        let mut conn = state.db.get().unwrap();
        create_test_menu_item(&conn, "Caesar", 12.0);
        for price in [10.0, 22.5] {
            queries::settle_payment(
                &mut conn,
                &CreatePayment {
                    email: "a@x.com".into(),
                    price,
                    transaction_id: "pi_1".into(),
                    date: "2026-01-01".into(),
                    cart_ids: vec![],
                    menu_item_ids: vec![],
                    status: "pending".into(),
                },
            )
            .unwrap();
        }
    }
    let app = test_app(state);

    let (status, json) = send(&app, "GET", "/admin-stats", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["users"], 1);
    assert_eq!(json["data"]["menuItems"], 1);
    assert_eq!(json["data"]["orders"], 2);
    assert_eq!(json["data"]["revenue"], 32.5);
}

#[tokio::test]
async fn test_empty_menu_patch_reports_nothing_to_update() {
    let (state, token) = admin_setup();
    let item = {
        let conn = state.db.get().unwrap();
        create_test_menu_item(&conn, "Caesar", 12.0)
    };
    let app = test_app(state);

    let (status, json) = send(
        &app,
        "PATCH",
        &format!("/menu/{}", item.id),
        Some(&token),
        Some(json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "nothing to update");
    assert_eq!(json["data"]["matchedCount"], 1);
}

#[tokio::test]
async fn test_unknown_route_answers_with_error_envelope() {
    let app = test_app(create_test_app_state());

    let (status, json) = send(&app, "GET", "/no-such-route", None, None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "route not found");
}

#[tokio::test]
async fn test_unserved_method_on_guarded_path_is_not_an_auth_failure() {
    let app = test_app(create_test_app_state());

    let (status, json) = send(&app, "PUT", "/menu", None, None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(json["success"], false);

    let (status, _) = send(&app, "PUT", "/carts/a@x.com", None, None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    // Registered admin methods on the same path stay guarded.
    let (status, json) = send(
        &app,
        "POST",
        "/menu",
        None,
        Some(json!({ "name": "Soup", "category": "soup", "price": 4.5 })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["message"], "unauthorized access");
}
