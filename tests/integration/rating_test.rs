//! Integration tests for the rating lifecycle.

mod helpers;

use axum::http::StatusCode;

/// Sets up one store owner with a store and one regular user.
/// Returns (user_token, store_id).
async fn setup(app: &helpers::TestApp) -> (String, String) {
    let owner_token = app
        .signup(
            "Orville Pennington Whitfield",
            "owner@example.com",
            "store_owner",
        )
        .await;
    let user_token = app
        .signup("Alexandra Winchester Smith", "rater@example.com", "user")
        .await;

    let response = app
        .request("GET", "/api/stores/my-store", None, Some(&owner_token))
        .await;
    let store_id = response.body["data"]["id"].as_str().unwrap().to_string();

    (user_token, store_id)
}

#[tokio::test]
async fn test_submit_rating() {
    let app = helpers::TestApp::new().await;
    let (token, store_id) = setup(&app).await;

    let response = app
        .request(
            "POST",
            "/api/ratings",
            Some(serde_json::json!({ "store_id": store_id, "rating_value": 4 })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["rating_value"].as_i64().unwrap(), 4);
}

#[tokio::test]
async fn test_double_rating_conflicts_then_put_overwrites() {
    let app = helpers::TestApp::new().await;
    let (token, store_id) = setup(&app).await;

    app.request(
        "POST",
        "/api/ratings",
        Some(serde_json::json!({ "store_id": store_id, "rating_value": 4 })),
        Some(&token),
    )
    .await;

    // A second POST must conflict.
    let response = app
        .request(
            "POST",
            "/api/ratings",
            Some(serde_json::json!({ "store_id": store_id, "rating_value": 2 })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);

    // PUT overwrites instead.
    let response = app
        .request(
            "PUT",
            &format!("/api/ratings/{store_id}"),
            Some(serde_json::json!({ "rating_value": 2 })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["rating_value"].as_i64().unwrap(), 2);

    // The store listing reflects the overwritten value.
    let response = app.request("GET", "/api/stores", None, Some(&token)).await;
    let stores = response.body["data"].as_array().unwrap();
    assert_eq!(stores.len(), 1);
    assert_eq!(
        stores[0]["user_rating"]["rating_value"].as_i64().unwrap(),
        2
    );
    assert_eq!(stores[0]["average_rating"].as_f64().unwrap(), 2.0);
}

#[tokio::test]
async fn test_rating_value_out_of_range() {
    let app = helpers::TestApp::new().await;
    let (token, store_id) = setup(&app).await;

    for value in [0, 6, -1] {
        let response = app
            .request(
                "POST",
                "/api/ratings",
                Some(serde_json::json!({ "store_id": store_id, "rating_value": value })),
                Some(&token),
            )
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "value {value}");
    }
}

#[tokio::test]
async fn test_rating_unknown_store() {
    let app = helpers::TestApp::new().await;
    let (token, _) = setup(&app).await;

    let response = app
        .request(
            "POST",
            "/api/ratings",
            Some(serde_json::json!({
                "store_id": "00000000-0000-0000-0000-000000000000",
                "rating_value": 3,
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_without_existing_rating() {
    let app = helpers::TestApp::new().await;
    let (token, store_id) = setup(&app).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/ratings/{store_id}"),
            Some(serde_json::json!({ "rating_value": 3 })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_rating() {
    let app = helpers::TestApp::new().await;
    let (token, store_id) = setup(&app).await;

    app.request(
        "POST",
        "/api/ratings",
        Some(serde_json::json!({ "store_id": store_id, "rating_value": 5 })),
        Some(&token),
    )
    .await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/ratings/{store_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // Deleting again is a 404.
    let response = app
        .request(
            "DELETE",
            &format!("/api/ratings/{store_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_only_users_may_rate() {
    let app = helpers::TestApp::new().await;
    let (_, store_id) = setup(&app).await;

    let owner_token = app.login("owner@example.com", "Secret#123").await;

    let response = app
        .request(
            "POST",
            "/api/ratings",
            Some(serde_json::json!({ "store_id": store_id, "rating_value": 5 })),
            Some(&owner_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}
