//! Integration tests for store browsing and the owner dashboard.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_store_search_with_aggregates() {
    let app = helpers::TestApp::new().await;

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
    let bob = app
        .signup("Bartholomew Woodhouse Green", "bob@example.com", "user")
        .await;

    let response = app
        .request("GET", "/api/stores/my-store", None, Some(&owner_token))
        .await;
    let store_id = response.body["data"]["id"].as_str().unwrap().to_string();

    for (token, value) in [(&alice, 5), (&bob, 4)] {
        let response = app
            .request(
                "POST",
                "/api/ratings",
                Some(serde_json::json!({ "store_id": store_id, "rating_value": value })),
                Some(token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    // Average is the arithmetic mean; alice sees her own rating.
    let response = app.request("GET", "/api/stores", None, Some(&alice)).await;
    assert_eq!(response.status, StatusCode::OK);
    let stores = response.body["data"].as_array().unwrap();
    assert_eq!(stores.len(), 1);
    assert_eq!(stores[0]["average_rating"].as_f64().unwrap(), 4.5);
    assert_eq!(stores[0]["total_ratings"].as_i64().unwrap(), 2);
    assert_eq!(
        stores[0]["user_rating"]["rating_value"].as_i64().unwrap(),
        5
    );

    // The owner has no rating of their own store.
    let response = app
        .request("GET", "/api/stores", None, Some(&owner_token))
        .await;
    let stores = response.body["data"].as_array().unwrap();
    assert!(stores[0]["user_rating"].is_null());
}

#[tokio::test]
async fn test_store_search_filters() {
    let app = helpers::TestApp::new().await;

    let token = app
        .signup(
            "Orville Pennington Whitfield",
            "owner@example.com",
            "store_owner",
        )
        .await;

    let response = app
        .request(
            "GET",
            "/api/stores?search=Orville",
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.body["data"].as_array().unwrap().len(), 1);

    let response = app
        .request(
            "GET",
            "/api/stores?search=nonexistent",
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.body["data"].as_array().unwrap().len(), 0);

    let response = app
        .request(
            "GET",
            "/api/stores?address=Example",
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_my_store_lists_raters() {
    let app = helpers::TestApp::new().await;

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
        Some(serde_json::json!({ "store_id": store_id, "rating_value": 3 })),
        Some(&alice),
    )
    .await;

    let response = app
        .request("GET", "/api/stores/my-store", None, Some(&owner_token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let ratings = response.body["data"]["ratings"].as_array().unwrap();
    assert_eq!(ratings.len(), 1);
    assert_eq!(
        ratings[0]["user_name"].as_str().unwrap(),
        "Alexandra Winchester Smith"
    );
    assert_eq!(ratings[0]["rating_value"].as_i64().unwrap(), 3);
    assert_eq!(response.body["data"]["average_rating"].as_f64().unwrap(), 3.0);
}

#[tokio::test]
async fn test_my_store_is_owner_only() {
    let app = helpers::TestApp::new().await;
    let user_token = app
        .signup("Alexandra Winchester Smith", "user@example.com", "user")
        .await;

    let response = app
        .request("GET", "/api/stores/my-store", None, Some(&user_token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}
