//! Integration tests for signup, login, and password change.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_signup_and_login() {
    let app = helpers::TestApp::new().await;

    let token = app
        .signup(
            "Alexandra Winchester Smith",
            "alexandra@example.com",
            "user",
        )
        .await;
    assert!(!token.is_empty());

    let login_token = app.login("alexandra@example.com", "Secret#123").await;
    assert!(!login_token.is_empty());
}

#[tokio::test]
async fn test_signup_rejects_short_name() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(serde_json::json!({
                "name": "Too Short",
                "email": "short@example.com",
                "password": "Secret#123",
                "address": "12 Example Street",
                "role": "user",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["details"]["name"].is_array());
}

#[tokio::test]
async fn test_signup_rejects_weak_password() {
    let app = helpers::TestApp::new().await;

    // Missing uppercase and special character.
    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(serde_json::json!({
                "name": "Alexandra Winchester Smith",
                "email": "weak@example.com",
                "password": "secret123",
                "address": "12 Example Street",
                "role": "user",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_signup_rejects_duplicate_email() {
    let app = helpers::TestApp::new().await;
    app.signup("Alexandra Winchester Smith", "dup@example.com", "user")
        .await;

    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(serde_json::json!({
                "name": "Bartholomew Woodhouse Green",
                "email": "dup@example.com",
                "password": "Secret#123",
                "address": "13 Example Street",
                "role": "user",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_signup_rejects_admin_role() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(serde_json::json!({
                "name": "Alexandra Winchester Smith",
                "email": "sneaky@example.com",
                "password": "Secret#123",
                "address": "12 Example Street",
                "role": "admin",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_signup_store_owner_creates_store() {
    let app = helpers::TestApp::new().await;
    let token = app
        .signup(
            "Orville Pennington Whitfield",
            "owner@example.com",
            "store_owner",
        )
        .await;

    let response = app
        .request("GET", "/api/stores/my-store", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["data"]["name"].as_str().unwrap(),
        "Orville Pennington Whitfield's Store"
    );
    assert_eq!(response.body["data"]["average_rating"].as_f64().unwrap(), 0.0);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = helpers::TestApp::new().await;
    app.signup("Alexandra Winchester Smith", "login@example.com", "user")
        .await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "login@example.com",
                "password": "Wrong#1234",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_unknown_email() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "nobody@example.com",
                "password": "Secret#123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_update_password_requires_current() {
    let app = helpers::TestApp::new().await;
    let token = app
        .signup("Alexandra Winchester Smith", "pw@example.com", "user")
        .await;

    let response = app
        .request(
            "PUT",
            "/api/auth/update-password",
            Some(serde_json::json!({
                "current_password": "Wrong#1234",
                "new_password": "Newpass#12",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request(
            "PUT",
            "/api/auth/update-password",
            Some(serde_json::json!({
                "current_password": "Secret#123",
                "new_password": "Newpass#12",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);

    // Old password no longer works, new one does.
    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "pw@example.com",
                "password": "Secret#123",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    app.login("pw@example.com", "Newpass#12").await;
}

#[tokio::test]
async fn test_profile_requires_token() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/user/profile", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request("GET", "/api/user/profile", None, Some("garbage-token"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_profile_update() {
    let app = helpers::TestApp::new().await;
    let token = app
        .signup("Alexandra Winchester Smith", "profile@example.com", "user")
        .await;

    let response = app
        .request(
            "PUT",
            "/api/user/profile",
            Some(serde_json::json!({
                "name": "Alexandra Winchester-Brown",
                "address": "99 New Address Lane",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["data"]["name"].as_str().unwrap(),
        "Alexandra Winchester-Brown"
    );

    // Name outside 20-60 characters is rejected.
    let response = app
        .request(
            "PUT",
            "/api/user/profile",
            Some(serde_json::json!({
                "name": "Shorty",
                "address": "99 New Address Lane",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
