//! Error-envelope tests: every failure comes back as `{"error", "code"}`
//! JSON with the right status.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

use common::{body_json, build_test_app, get, post_json};

#[sqlx::test(migrations = "../../db/migrations")]
async fn not_found_envelope(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(app, "/api/v1/obras/424242").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(body["error"], "Obra with id 424242 not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn validation_envelope(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/obras",
        json!({ "nombre": "Obra", "porcentaje_avance": 150 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_cliente_is_a_conflict(pool: PgPool) {
    let app = build_test_app(pool);

    let payload = json!({ "razon_social": "Vialidad Sur SRL" });

    let response = post_json(app.clone(), "/api/v1/clientes", payload.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json(app, "/api/v1/clientes", payload).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = body_json(response).await;
    assert_eq!(body["code"], "CONFLICT");
    assert_eq!(body["error"], "A record with this value already exists");
    // Internal constraint names stay out of the response body.
    assert!(!body["error"].as_str().unwrap().contains("uq_"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn cliente_with_missing_contact_is_404(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/clientes",
        json!({ "razon_social": "Sin Contacto SA", "contacto_usuario_id": 9999 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_json_is_a_client_error(pool: PgPool) {
    use axum::body::Body;
    use axum::http::header::CONTENT_TYPE;
    use axum::http::{Method, Request};
    use tower::ServiceExt;

    let app = build_test_app(pool);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/obras")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert!(response.status().is_client_error());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_required_field_is_a_client_error(pool: PgPool) {
    let app = build_test_app(pool);

    // `nombre` is required.
    let response = post_json(app, "/api/v1/obras", json!({ "descripcion": "sin nombre" })).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
