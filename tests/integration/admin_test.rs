//! Integration tests for the admin endpoints.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_admin_routes_reject_non_admins() {
    let app = helpers::TestApp::new().await;
    let user_token = app
        .signup("Alexandra Winchester Smith", "user@example.com", "user")
        .await;

    for path in ["/api/admin/stats", "/api/admin/users", "/api/admin/stores"] {
        let response = app.request("GET", path, None, Some(&user_token)).await;
        assert_eq!(response.status, StatusCode::FORBIDDEN, "{path}");
    }
}

#[tokio::test]
async fn test_admin_stats() {
    let app = helpers::TestApp::new().await;
    let admin_token = app.create_admin("admin@example.com").await;

    app.signup(
        "Orville Pennington Whitfield",
        "owner@example.com",
        "store_owner",
    )
    .await;
    app.signup("Alexandra Winchester Smith", "alice@example.com", "user")
        .await;

    let response = app
        .request("GET", "/api/admin/stats", None, Some(&admin_token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    // Admin + owner + user.
    assert_eq!(response.body["data"]["total_users"].as_i64().unwrap(), 3);
    assert_eq!(response.body["data"]["total_stores"].as_i64().unwrap(), 1);
    assert_eq!(response.body["data"]["total_ratings"].as_i64().unwrap(), 0);
}

#[tokio::test]
async fn test_admin_user_listing_with_filters() {
    let app = helpers::TestApp::new().await;
    let admin_token = app.create_admin("admin@example.com").await;

    app.signup(
        "Orville Pennington Whitfield",
        "owner@example.com",
        "store_owner",
    )
    .await;
    app.signup("Alexandra Winchester Smith", "alice@example.com", "user")
        .await;

    let response = app
        .request("GET", "/api/admin/users", None, Some(&admin_token))
        .await;
    assert_eq!(response.body["data"].as_array().unwrap().len(), 3);

    // Role filter.
    let response = app
        .request(
            "GET",
            "/api/admin/users?role=store_owner",
            None,
            Some(&admin_token),
        )
        .await;
    let users = response.body["data"].as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert!(users[0]["owned_store"].is_object());

    // Search filter matches name/email/address substrings.
    let response = app
        .request(
            "GET",
            "/api/admin/users?search=alice",
            None,
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_admin_create_store_rules() {
    let app = helpers::TestApp::new().await;
    let admin_token = app.create_admin("admin@example.com").await;

    app.signup(
        "Orville Pennington Whitfield",
        "owner@example.com",
        "store_owner",
    )
    .await;
    app.signup("Alexandra Winchester Smith", "alice@example.com", "user")
        .await;

    let users = app
        .request("GET", "/api/admin/users", None, Some(&admin_token))
        .await;
    let find_id = |email: &str| {
        users.body["data"]
            .as_array()
            .unwrap()
            .iter()
            .find(|u| u["email"] == email)
            .unwrap()["id"]
            .as_str()
            .unwrap()
            .to_string()
    };
    let owner_id = find_id("owner@example.com");
    let alice_id = find_id("alice@example.com");

    // The owner already has a companion store from signup.
    let response = app
        .request(
            "POST",
            "/api/admin/stores",
            Some(serde_json::json!({
                "name": "A Perfectly Valid Store Name",
                "address": "5 Market Square",
                "owner_id": owner_id,
            })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);

    // A regular user cannot own a store.
    let response = app
        .request(
            "POST",
            "/api/admin/stores",
            Some(serde_json::json!({
                "name": "A Perfectly Valid Store Name",
                "address": "5 Market Square",
                "owner_id": alice_id,
            })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_admin_create_user_with_admin_role() {
    let app = helpers::TestApp::new().await;
    let admin_token = app.create_admin("admin@example.com").await;

    let response = app
        .request(
            "POST",
            "/api/admin/users",
            Some(serde_json::json!({
                "name": "Second Administrator Account",
                "email": "admin2@example.com",
                "password": "Secret#123",
                "address": "2 Admin Plaza",
                "role": "admin",
            })),
            Some(&admin_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["role"].as_str().unwrap(), "admin");

    app.login("admin2@example.com", "Secret#123").await;
}

#[tokio::test]
async fn test_delete_user_cascades() {
    let app = helpers::TestApp::new().await;
    let admin_token = app.create_admin("admin@example.com").await;

    let owner_token = app
        .signup(
            "Orville Pennington Whitfield",
            "owner@example.com",
            "store_owner",
        )
        .await;
    let alice = app
        .signup("Alexandra Winchester Smith", "alice@example.com", "user")
        .await;

    let response = app
        .request("GET", "/api/stores/my-store", None, Some(&owner_token))
        .await;
    let store_id = response.body["data"]["id"].as_str().unwrap().to_string();

    app.request(
        "POST",
        "/api/ratings",
        Some(serde_json::json!({ "store_id": store_id, "rating_value": 5 })),
        Some(&alice),
    )
    .await;

    // Find and delete the owner; store and rating must cascade away.
    let users = app
        .request("GET", "/api/admin/users", None, Some(&admin_token))
        .await;
    let owner_id = users.body["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["email"] == "owner@example.com")
        .unwrap()["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .request(
            "DELETE",
            &format!("/api/admin/users/{owner_id}"),
            None,
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", "/api/admin/stats", None, Some(&admin_token))
        .await;
    assert_eq!(response.body["data"]["total_stores"].as_i64().unwrap(), 0);
    assert_eq!(response.body["data"]["total_ratings"].as_i64().unwrap(), 0);
}

#[tokio::test]
async fn test_admin_cannot_delete_self() {
    let app = helpers::TestApp::new().await;
    let admin_token = app.create_admin("admin@example.com").await;

    let users = app
        .request("GET", "/api/admin/users", None, Some(&admin_token))
        .await;
    let admin_id = users.body["data"].as_array().unwrap()[0]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .request(
            "DELETE",
            &format!("/api/admin/users/{admin_id}"),
            None,
            Some(&admin_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}
