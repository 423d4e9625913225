//! Authentication flow tests: register, login, refresh rotation, logout,
//! lockout, and credential-failure opacity.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

use common::{body_json, build_test_app, get_auth, post_auth, post_json};

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_login_logout_flow(pool: PgPool) {
    let app = build_test_app(pool);

    // Register.
    let response = post_json(
        app.clone(),
        "/api/v1/auth/register",
        json!({
            "nombre_usuario": "mgarcia",
            "email": "mgarcia@example.com",
            "password": "hunter2hunter2"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["nombre_usuario"], "mgarcia");
    assert_eq!(body["rol"], "cliente");
    // The password hash must never leave the server.
    assert!(body.get("password_hash").is_none());

    // Login by username.
    let response = post_json(
        app.clone(),
        "/api/v1/auth/login",
        json!({ "identificador": "mgarcia", "password": "hunter2hunter2" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let access_token = body["access_token"].as_str().unwrap().to_string();
    let refresh_token = body["refresh_token"].as_str().unwrap().to_string();
    assert_eq!(body["usuario"]["nombre_usuario"], "mgarcia");
    assert_eq!(body["usuario"]["rol"], "cliente");
    assert_eq!(body["expires_in"], 15 * 60);

    // The access token opens the dashboard.
    let response = get_auth(app.clone(), "/api/v1/dashboard", &access_token).await;
    assert_eq!(response.status(), StatusCode::OK);

    // Logout revokes all sessions.
    let response = post_auth(app.clone(), "/api/v1/auth/logout", &access_token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The access token dies with the session even though its `exp` is
    // still in the future.
    let response = get_auth(app.clone(), "/api/v1/dashboard", &access_token).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // The refresh token from the revoked session no longer works.
    let response = post_json(
        app,
        "/api/v1/auth/refresh",
        json!({ "refresh_token": refresh_token }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn refresh_rotates_the_token(pool: PgPool) {
    let app = build_test_app(pool);

    post_json(
        app.clone(),
        "/api/v1/auth/register",
        json!({ "nombre_usuario": "rotator", "password": "hunter2hunter2" }),
    )
    .await;

    let response = post_json(
        app.clone(),
        "/api/v1/auth/login",
        json!({ "identificador": "rotator", "password": "hunter2hunter2" }),
    )
    .await;
    let body = body_json(response).await;
    let old_refresh = body["refresh_token"].as_str().unwrap().to_string();

    // Exchange the refresh token.
    let response = post_json(
        app.clone(),
        "/api/v1/auth/refresh",
        json!({ "refresh_token": old_refresh }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let new_refresh = body["refresh_token"].as_str().unwrap().to_string();
    assert_ne!(new_refresh, old_refresh);

    // The consumed token is dead.
    let response = post_json(
        app.clone(),
        "/api/v1/auth/refresh",
        json!({ "refresh_token": old_refresh }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // The rotated token still works.
    let response = post_json(
        app,
        "/api/v1/auth/refresh",
        json!({ "refresh_token": new_refresh }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_accepts_email_as_identifier(pool: PgPool) {
    let app = build_test_app(pool);

    post_json(
        app.clone(),
        "/api/v1/auth/register",
        json!({
            "nombre_usuario": "pereze",
            "email": "pereze@example.com",
            "password": "hunter2hunter2"
        }),
    )
    .await;

    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "identificador": "pereze@example.com", "password": "hunter2hunter2" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn credential_failures_are_indistinguishable(pool: PgPool) {
    let app = build_test_app(pool);

    post_json(
        app.clone(),
        "/api/v1/auth/register",
        json!({ "nombre_usuario": "existing", "password": "hunter2hunter2" }),
    )
    .await;

    // Wrong password for a real user.
    let response = post_json(
        app.clone(),
        "/api/v1/auth/login",
        json!({ "identificador": "existing", "password": "wrong-password" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let wrong_password = body_json(response).await;

    // Login for a user that does not exist.
    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "identificador": "nobody", "password": "wrong-password" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let unknown_user = body_json(response).await;

    // Same message either way, so the endpoint leaks no account info.
    assert_eq!(wrong_password["error"], unknown_user["error"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_username_is_409(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/auth/register",
        json!({ "nombre_usuario": "taken", "password": "hunter2hunter2" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json(
        app,
        "/api/v1/auth/register",
        json!({ "nombre_usuario": "taken", "password": "otherpassword1" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = body_json(response).await;
    assert_eq!(body["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn short_password_is_rejected(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/auth/register",
        json!({ "nombre_usuario": "shorty", "password": "short" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn repeated_failures_lock_the_account(pool: PgPool) {
    let app = build_test_app(pool);

    post_json(
        app.clone(),
        "/api/v1/auth/register",
        json!({ "nombre_usuario": "victim", "password": "hunter2hunter2" }),
    )
    .await;

    // Five consecutive failures trip the lock.
    for _ in 0..5 {
        let response = post_json(
            app.clone(),
            "/api/v1/auth/login",
            json!({ "identificador": "victim", "password": "wrong-password" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    // Even the correct password is refused while locked.
    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "identificador": "victim", "password": "hunter2hunter2" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn dashboard_requires_a_token(pool: PgPool) {
    let app = build_test_app(pool);

    let response = common::get(app.clone(), "/api/v1/dashboard").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = get_auth(app, "/api/v1/dashboard", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
