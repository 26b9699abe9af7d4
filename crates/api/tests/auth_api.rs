//! HTTP-level integration tests for registration, login, and the
//! authentication requirement on the commerce endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn register_returns_token_and_user_info(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let body = serde_json::json!({ "email": "Pilot@Test.com", "password": "test_password_123!" });
    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert!(json["access_token"].is_string());
    assert_eq!(json["expires_in"], 3600);
    // Email is normalized to lowercase before storage.
    assert_eq!(json["user"]["email"], "pilot@test.com");

    let stored: String = sqlx::query_scalar("SELECT email FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(stored, "pilot@test.com");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn register_duplicate_email_returns_409(pool: PgPool) {
    let app = common::build_test_app(pool);
    common::register_user(app.clone(), "pilot@test.com").await;

    let body = serde_json::json!({ "email": "pilot@test.com", "password": "test_password_123!" });
    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(json["error"], "An account with this email already exists");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn register_rejects_invalid_email(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": "not an email", "password": "test_password_123!" });
    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Invalid email format");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn register_rejects_short_password(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": "pilot@test.com", "password": "short" });
    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_succeeds_with_correct_credentials(pool: PgPool) {
    let app = common::build_test_app(pool);
    common::register_user(app.clone(), "pilot@test.com").await;

    let body = serde_json::json!({ "email": "pilot@test.com", "password": "test_password_123!" });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["access_token"].is_string());
    assert_eq!(json["user"]["email"], "pilot@test.com");
}

/// Wrong password and unknown account give the same 401 message, so the
/// endpoint does not reveal which addresses have accounts.
#[sqlx::test(migrations = "../db/migrations")]
async fn login_failures_are_indistinguishable(pool: PgPool) {
    let app = common::build_test_app(pool);
    common::register_user(app.clone(), "pilot@test.com").await;

    let wrong_password =
        serde_json::json!({ "email": "pilot@test.com", "password": "incorrect_password" });
    let response = post_json(app.clone(), "/api/v1/auth/login", wrong_password).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let first = body_json(response).await;

    let unknown_account =
        serde_json::json!({ "email": "nobody@test.com", "password": "incorrect_password" });
    let response = post_json(app, "/api/v1/auth/login", unknown_account).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let second = body_json(response).await;

    assert_eq!(first["error"], "Invalid email or password");
    assert_eq!(first["error"], second["error"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn cart_requires_authentication(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/cart").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert_eq!(json["error"], "Missing Authorization header");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn garbage_token_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/wishlist", "not-a-real-token").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid or expired token");
}
