mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{create_test_user, generate_unique_email, setup_test_app};
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_returns_token_pair(pool: PgPool) {
    let app = setup_test_app(pool);

    let email = generate_unique_email();
    let request = json_request(
        "POST",
        "/register",
        json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": email,
            "password": "password123",
            "user_type": "teacher"
        }),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response_json(response).await;
    assert_eq!(body["user"]["email"], email);
    assert_eq!(body["user"]["role"], "teacher");
    assert!(body["access"].is_string());
    assert!(body["refresh"].is_string());
    assert!(body["user"].get("password").is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_duplicate_email_is_bad_request(pool: PgPool) {
    let app = setup_test_app(pool);

    let email = generate_unique_email();
    let payload = json!({
        "first_name": "Ada",
        "last_name": "Lovelace",
        "email": email,
        "password": "password123",
        "user_type": "student"
    });

    let response = app
        .clone()
        .oneshot(json_request("POST", "/register", payload.clone()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(json_request("POST", "/register", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert!(body["error"].is_string());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_short_password_is_unprocessable(pool: PgPool) {
    let app = setup_test_app(pool);

    let response = app
        .oneshot(json_request(
            "POST",
            "/register",
            json!({
                "first_name": "Ada",
                "last_name": "Lovelace",
                "email": generate_unique_email(),
                "password": "short",
                "user_type": "teacher"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response_json(response).await;
    assert!(body["error"].is_string());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_then_login_resolves_same_identity(pool: PgPool) {
    let app = setup_test_app(pool);

    let email = generate_unique_email();
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/register",
            json!({
                "first_name": "Grace",
                "last_name": "Hopper",
                "email": email,
                "password": "password123",
                "user_type": "student"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let registered = response_json(response).await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/login",
            json!({"email": email, "password": "password123"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let logged_in = response_json(response).await;
    assert_eq!(logged_in["user"]["id"], registered["user"]["id"]);

    // The issued access token resolves back to the same identity.
    let request = Request::builder()
        .method("GET")
        .uri("/profile")
        .header(
            "authorization",
            format!("Bearer {}", logged_in["access"].as_str().unwrap()),
        )
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let profile = response_json(response).await;
    assert_eq!(profile["email"], email);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_wrong_password_is_unauthorized(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let email = generate_unique_email();
    create_test_user(&mut tx, &email, "correct-password", "student").await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool);
    let response = app
        .oneshot(json_request(
            "POST",
            "/login",
            json!({"email": email, "password": "wrong-password"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_profile_without_credential_is_unauthorized(pool: PgPool) {
    let app = setup_test_app(pool);

    let request = Request::builder()
        .method("GET")
        .uri("/profile")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = response_json(response).await;
    assert!(body["error"].is_string());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_profile_accepts_all_known_prefixes(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let email = generate_unique_email();
    let user = create_test_user(&mut tx, &email, "password123", "teacher").await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool);

    for prefix in ["Bearer ", "JWT ", "Token "] {
        let request = Request::builder()
            .method("GET")
            .uri("/profile")
            .header("authorization", format!("{}{}", prefix, user.token))
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "prefix {:?}", prefix);
    }

    // A bare token with no prefix works too.
    let request = Request::builder()
        .method("GET")
        .uri("/profile")
        .header("authorization", user.token.clone())
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_profile_accepts_token_query_parameter(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let email = generate_unique_email();
    let user = create_test_user(&mut tx, &email, "password123", "student").await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool);

    let request = Request::builder()
        .method("GET")
        .uri(format!("/profile?token={}", user.token))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["email"], email);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_garbage_credential_is_unauthorized_not_error(pool: PgPool) {
    let app = setup_test_app(pool);

    let request = Request::builder()
        .method("GET")
        .uri("/profile")
        .header("authorization", "Basic not-even-a-jwt")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_profile(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let email = generate_unique_email();
    let user = create_test_user(&mut tx, &email, "password123", "teacher").await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool);

    let request = Request::builder()
        .method("PUT")
        .uri("/profile")
        .header("authorization", format!("Bearer {}", user.token))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({"first_name": "Renamed"})).unwrap(),
        ))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["first_name"], "Renamed");
    assert_eq!(body["last_name"], "User");
}
