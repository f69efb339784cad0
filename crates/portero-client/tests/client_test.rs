//! Dispatcher tests: credential attachment, error normalization, and the
//! unauthorized hook.

use portero_client::{Anonymous, ApiClient, ClientError, CredentialProvider, StaticCredentials};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use wiremock::matchers::{header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper: client pointing at a wiremock server with a fixed token.
fn bearer_client(server: &MockServer) -> ApiClient {
    ApiClient::with_http_client(
        server.uri(),
        Arc::new(StaticCredentials::new("test-token-123")),
        reqwest::Client::new(),
    )
}

fn seccion_json() -> serde_json::Value {
    json!({
        "id": "1c0a5a95-67d4-4d9f-8f1a-3f3a8c0f1a10",
        "nombre": "Reportes",
        "descripcion": "Pantallas de consulta",
        "createdAt": "2025-01-15T09:00:00Z",
        "updatedAt": null,
        "deletedAt": null
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// Credential attachment
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_bearer_header_attached_when_provider_has_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/secciones/select"))
        .and(header("Authorization", "Bearer test-token-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = bearer_client(&server);
    client.secciones().select().await.unwrap();
}

#[tokio::test]
async fn test_no_authorization_header_when_anonymous() {
    let server = MockServer::start().await;

    // A request carrying an Authorization header matches this mock first
    // and trips its expect(0) when the server verifies.
    Mock::given(method("GET"))
        .and(path("/secciones/select"))
        .and(header_exists("Authorization"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/secciones/select"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::with_http_client(
        server.uri(),
        Arc::new(Anonymous),
        reqwest::Client::new(),
    );
    client.secciones().select().await.unwrap();
}

#[tokio::test]
async fn test_base_url_trailing_slash_normalized() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/secciones/select"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::with_http_client(
        format!("{}/", server.uri()),
        Arc::new(StaticCredentials::new("t")),
        reqwest::Client::new(),
    );
    client.secciones().select().await.unwrap();
}

#[tokio::test]
async fn test_base_url_prefix_is_kept() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/secciones/select"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::with_http_client(
        format!("{}/api", server.uri()),
        Arc::new(StaticCredentials::new("t")),
        reqwest::Client::new(),
    );
    client.secciones().select().await.unwrap();
}

// ═══════════════════════════════════════════════════════════════════════════
// Error normalization
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_404_maps_to_api_error_with_envelope_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(
            "/secciones/1c0a5a95-67d4-4d9f-8f1a-3f3a8c0f1a10",
        ))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": "Seccion no encontrada",
            "code": 404,
            "exception": "EntityNotFoundException",
            "timestamp": "2025-03-01T10:15:30Z",
            "path": "/api/secciones/1c0a5a95-67d4-4d9f-8f1a-3f3a8c0f1a10"
        })))
        .mount(&server)
        .await;

    let client = bearer_client(&server);
    let err = client
        .secciones()
        .get("1c0a5a95-67d4-4d9f-8f1a-3f3a8c0f1a10".parse().unwrap())
        .await
        .unwrap_err();

    match err {
        ClientError::Api {
            status,
            message,
            path,
        } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Seccion no encontrada");
            assert!(path.contains("/secciones/"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_error_without_envelope_keeps_raw_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/secciones/select"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let client = bearer_client(&server);
    let err = client.secciones().select().await.unwrap_err();

    match err {
        ClientError::Api { status, message, .. } => {
            assert_eq!(status, 502);
            assert_eq!(message, "Bad Gateway");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_error_with_empty_body_reports_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/secciones/select"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = bearer_client(&server);
    let err = client.secciones().select().await.unwrap_err();

    match err {
        ClientError::Api { status, message, .. } => {
            assert_eq!(status, 500);
            assert!(message.contains("500"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_success_body_maps_to_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/secciones/select"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = bearer_client(&server);
    let err = client.secciones().select().await.unwrap_err();

    assert!(matches!(err, ClientError::Decode { .. }));
}

#[tokio::test]
async fn test_connection_refused_maps_to_connection_failed() {
    // Nothing listens on this port.
    let client = ApiClient::with_http_client(
        "http://127.0.0.1:1",
        Arc::new(Anonymous),
        reqwest::Client::new(),
    );

    let err = client.secciones().select().await.unwrap_err();
    assert!(matches!(err, ClientError::ConnectionFailed(_)));
}

// ═══════════════════════════════════════════════════════════════════════════
// Unauthorized handling
// ═══════════════════════════════════════════════════════════════════════════

struct CountingCredentials {
    hits: Arc<AtomicUsize>,
}

impl CredentialProvider for CountingCredentials {
    fn token(&self) -> Option<String> {
        Some("stale-token".to_string())
    }

    fn on_unauthorized(&self) {
        self.hits.fetch_add(1, Ordering::SeqCst);
    }
}

#[tokio::test]
async fn test_401_fires_provider_hook_once_and_is_distinguishable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/secciones/select"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "Token expirado",
            "code": 401
        })))
        .expect(1)
        .mount(&server)
        .await;

    let hits = Arc::new(AtomicUsize::new(0));
    let client = ApiClient::with_http_client(
        server.uri(),
        Arc::new(CountingCredentials { hits: hits.clone() }),
        reqwest::Client::new(),
    );

    let err = client.secciones().select().await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(err.status(), Some(401));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_non_401_does_not_fire_provider_hook() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/secciones/select"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": "Acceso denegado",
            "code": 403
        })))
        .mount(&server)
        .await;

    let hits = Arc::new(AtomicUsize::new(0));
    let client = ApiClient::with_http_client(
        server.uri(),
        Arc::new(CountingCredentials { hits: hits.clone() }),
        reqwest::Client::new(),
    );

    let err = client.secciones().select().await.unwrap_err();

    assert!(!err.is_unauthorized());
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

// ═══════════════════════════════════════════════════════════════════════════
// Statelessness
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_repeated_get_returns_equal_payloads() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(
            "/secciones/1c0a5a95-67d4-4d9f-8f1a-3f3a8c0f1a10",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(seccion_json()))
        .expect(2)
        .mount(&server)
        .await;

    let client = bearer_client(&server);
    let id = "1c0a5a95-67d4-4d9f-8f1a-3f3a8c0f1a10".parse().unwrap();

    let first = client.secciones().get(id).await.unwrap();
    let second = client.secciones().get(id).await.unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(first.nombre, second.nombre);
    assert_eq!(first.created_at, second.created_at);
}
