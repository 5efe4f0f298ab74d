use axum::http::StatusCode;
use serde_json::json;

use crate::common::*;

#[tokio::test]
async fn test_upsert_inserts_once() {
    let state = create_test_app_state();
    let app = test_app(state.clone());

    let (status, json) = send(
        &app,
        "PATCH",
        "/users/a@x.com",
        None,
        Some(json!({ "name": "Alice" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["data"]["email"], "a@x.com");
    assert_eq!(json["data"]["name"], "Alice");

    let (status, json) = send(&app, "PATCH", "/users/a@x.com", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "user already exists");
    assert!(json.get("data").is_none());

    let conn = state.db.get().unwrap();
    let users = queries::list_users(&conn).unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name.as_deref(), Some("Alice"));
}

#[tokio::test]
async fn test_upsert_rejects_malformed_body() {
    let app = test_app(create_test_app_state());

    let request = axum::http::Request::builder()
        .method("PATCH")
        .uri("/users/a@x.com")
        .header("Content-Type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();
    let (status, json) = send_request(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn test_admin_promotes_user() {
    let state = create_test_app_state();
    let guest_id = {
        let conn = state.db.get().unwrap();
        create_test_user(&conn, "boss@x.com", true);
        create_test_user(&conn, "guest@x.com", false).id
    };
    let token = token_for(&state, "boss@x.com");
    let app = test_app(state.clone());

    let (status, json) = send(
        &app,
        "PATCH",
        &format!("/user/update/role/{}", guest_id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["matchedCount"], 1);

    let guest_token = token_for(&state, "guest@x.com");
    let (_, json) = send(&app, "GET", "/user/admin/guest@x.com", Some(&guest_token), None).await;
    assert_eq!(json["data"], true);
}

#[tokio::test]
async fn test_admin_deletes_user() {
    let state = create_test_app_state();
    let guest_id = {
        let conn = state.db.get().unwrap();
        create_test_user(&conn, "boss@x.com", true);
        create_test_user(&conn, "guest@x.com", false).id
    };
    let token = token_for(&state, "boss@x.com");
    let app = test_app(state.clone());

    let (status, json) = send(
        &app,
        "DELETE",
        &format!("/user/delete/{}", guest_id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["deletedCount"], 1);

    let conn = state.db.get().unwrap();
    assert!(queries::get_user_by_email(&conn, "guest@x.com").unwrap().is_none());
}

#[tokio::test]
async fn test_log_out_is_a_no_op() {
    let app = test_app(create_test_app_state());

    let (status, json) = send(&app, "GET", "/log-out", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
}
