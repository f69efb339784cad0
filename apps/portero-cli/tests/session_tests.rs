//! Integration tests for stored sessions
//!
//! The stored token rides every request through `SessionCredentials`;
//! a 401 from the server must drop the session file so the next command
//! starts logged out, while any other failure leaves it alone.

mod common;

use common::TestContext;
use portero_client::models::LoginRequest;
use portero_client::{ApiClient, ListQuery};
use portero_cli::session::{Session, SessionCredentials};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

fn empty_page() -> serde_json::Value {
    json!({
        "content": [],
        "totalElements": 0,
        "totalPages": 0,
        "size": 10,
        "number": 0,
        "first": true,
        "last": true,
        "empty": true
    })
}

/// Client wired the way context.rs wires it: stored session feeding the
/// credential seam.
fn session_client(ctx: &TestContext, session: &Session) -> ApiClient {
    ApiClient::new(
        ctx.base_url(),
        Arc::new(SessionCredentials::new(session, ctx.paths())),
        Duration::from_secs(5),
    )
    .unwrap()
}

#[tokio::test]
async fn test_stored_token_rides_as_bearer_header() {
    let ctx = TestContext::new().await;
    let session = ctx.write_session("tok-vivo");

    Mock::given(method("GET"))
        .and(path("/secciones"))
        .and(header("Authorization", "Bearer tok-vivo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_page()))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let client = session_client(&ctx, &session);
    client.secciones().list(&ListQuery::default()).await.unwrap();

    assert!(ctx.paths().session_file.exists());
}

#[tokio::test]
async fn test_rejected_token_drops_the_session_file() {
    let ctx = TestContext::new().await;
    let session = ctx.write_session("tok-muerto");

    Mock::given(method("GET"))
        .and(path("/secciones"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": "Token expirado"})),
        )
        .expect(1)
        .mount(&ctx.server)
        .await;

    let client = session_client(&ctx, &session);
    let err = client
        .secciones()
        .list(&ListQuery::default())
        .await
        .unwrap_err();

    assert!(err.is_unauthorized());
    assert!(!ctx.paths().session_file.exists());
    assert!(Session::load(&ctx.paths()).unwrap().is_none());
}

#[tokio::test]
async fn test_other_failures_leave_the_session_alone() {
    let ctx = TestContext::new().await;
    let session = ctx.write_session("tok-vivo");
    let missing = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path(format!("/usuarios/{missing}")))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"error": "Registro no encontrado"})),
        )
        .mount(&ctx.server)
        .await;

    let client = session_client(&ctx, &session);
    let err = client.usuarios().get(missing).await.unwrap_err();

    assert!(err.is_not_found());
    assert!(ctx.paths().session_file.exists());
}

#[tokio::test]
async fn test_login_response_round_trips_through_the_session_file() {
    let ctx = TestContext::new().await;
    let user_id = Uuid::new_v4();

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({
            "email": "ana@example.com",
            "contrasena": "hunter2"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": user_id,
            "nombres": "Ana",
            "apellidos": "González",
            "email": "ana@example.com",
            "token": "tok-nuevo"
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let client = ApiClient::new(
        ctx.base_url(),
        Arc::new(portero_client::Anonymous),
        Duration::from_secs(5),
    )
    .unwrap();

    let response = client
        .auth()
        .login(&LoginRequest {
            email: "ana@example.com".to_string(),
            contrasena: "hunter2".to_string(),
        })
        .await
        .unwrap();

    let session = Session {
        user_id: response.id,
        nombres: response.nombres,
        apellidos: response.apellidos,
        email: response.email,
        token: response.token,
    };
    session.save(&ctx.paths()).unwrap();

    let loaded = Session::require(&ctx.paths()).unwrap();
    assert_eq!(loaded.user_id, user_id);
    assert_eq!(loaded.token, "tok-nuevo");
    assert_eq!(loaded.display_name(), "Ana González");
}
