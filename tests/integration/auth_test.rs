//! Integration tests for registration and login.

use http::StatusCode;

use crate::helpers::{self, unique_email};

#[tokio::test]
async fn test_register_returns_token() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(serde_json::json!({
                "name": "Alice",
                "email": unique_email("alice"),
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert!(response.body.get("token").is_some());
}

#[tokio::test]
async fn test_register_rejects_short_password() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(serde_json::json!({
                "name": "Alice",
                "email": unique_email("alice-short"),
                "password": "12345",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_duplicate_registration_conflicts() {
    let app = helpers::TestApp::new().await;
    let email = unique_email("alice-dup");
    app.register("Alice", &email, "password123").await;

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(serde_json::json!({
                "name": "Alice Again",
                "email": email,
                "password": "password456",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);

    // Only the original row survives
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = $1")
        .bind(&email)
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_login_success() {
    let app = helpers::TestApp::new().await;
    let email = unique_email("alice-login");
    app.register("Alice", &email, "password123").await;

    let response = app
        .request(
            "POST",
            "/api/auth",
            Some(serde_json::json!({
                "email": email,
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.get("token").is_some());
}

#[tokio::test]
async fn test_login_invalid_password() {
    let app = helpers::TestApp::new().await;
    let email = unique_email("alice-badpw");
    app.register("Alice", &email, "password123").await;

    let response = app
        .request(
            "POST",
            "/api/auth",
            Some(serde_json::json!({
                "email": email,
                "password": "wrongpassword",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_nonexistent_user() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth",
            Some(serde_json::json!({
                "email": unique_email("nobody"),
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = helpers::TestApp::new().await;
    let email = unique_email("alice-uniform");
    app.register("Alice", &email, "password123").await;

    let wrong_password = app
        .request(
            "POST",
            "/api/auth",
            Some(serde_json::json!({
                "email": email,
                "password": "wrongpassword",
            })),
            None,
        )
        .await;
    let unknown_email = app
        .request(
            "POST",
            "/api/auth",
            Some(serde_json::json!({
                "email": unique_email("nobody-uniform"),
                "password": "wrongpassword",
            })),
            None,
        )
        .await;

    // Same status and same body either way, so a caller cannot probe which
    // emails are registered.
    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_email.body);
}

#[tokio::test]
async fn test_concurrent_duplicate_registration_single_winner() {
    let app = helpers::TestApp::new().await;
    let email = unique_email("alice-race");
    let body = serde_json::json!({
        "name": "Alice",
        "email": email,
        "password": "password123",
    });

    let (first, second) = tokio::join!(
        app.request("POST", "/api/users", Some(body.clone()), None),
        app.request("POST", "/api/users", Some(body.clone()), None),
    );

    // The unique constraint decides the race: exactly one insert wins.
    let mut statuses = [first.status, second.status];
    statuses.sort();
    assert_eq!(statuses, [StatusCode::CREATED, StatusCode::CONFLICT]);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = $1")
        .bind(&email)
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_me_authenticated() {
    let app = helpers::TestApp::new().await;
    let email = unique_email("alice-me");
    let token = app.register("Alice", &email, "password123").await;

    let response = app.request("GET", "/api/auth", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.get("email").unwrap().as_str().unwrap(), email);
    assert!(
        response.body.get("password_hash").is_none(),
        "Password hash must never be serialized"
    );
}

#[tokio::test]
async fn test_me_without_token() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/auth", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_tampered_token() {
    let app = helpers::TestApp::new().await;
    let token = app
        .register("Alice", &unique_email("alice-tamper"), "password123")
        .await;

    // Flip a character in the signature segment
    let mut chars: Vec<char> = token.chars().collect();
    let last = chars.len() - 1;
    chars[last] = if chars[last] == 'A' { 'B' } else { 'A' };
    let tampered: String = chars.into_iter().collect();

    let response = app.request("GET", "/api/auth", None, Some(&tampered)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
