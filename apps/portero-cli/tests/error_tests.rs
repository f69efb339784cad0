//! Integration tests for error handling
//!
//! Server failures reach the user as a `CliError` with a stable exit
//! code: 2 for auth, 3 for network, 4 for client-side problems, 5 for
//! server-side ones. These drive real responses through the library
//! client and assert on the final mapping.

mod common;

use common::TestContext;
use portero_cli::error::CliError;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use portero_client::{ApiClient, ListQuery, StaticCredentials};

fn client_for(url: &str) -> ApiClient {
    ApiClient::new(
        url,
        Arc::new(StaticCredentials::new("tok-123")),
        Duration::from_secs(5),
    )
    .unwrap()
}

#[tokio::test]
async fn test_missing_record_exits_with_4_and_names_the_path() {
    let ctx = TestContext::new().await;
    let missing = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path(format!("/usuarios/{missing}")))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"error": "Registro no encontrado"})),
        )
        .mount(&ctx.server)
        .await;

    let err = client_for(&ctx.base_url())
        .usuarios()
        .get(missing)
        .await
        .unwrap_err();
    let cli_err = CliError::from(err);

    assert_eq!(cli_err.exit_code(), 4);
    match cli_err {
        CliError::NotFound(message) => {
            assert!(message.contains("Registro no encontrado"));
            assert!(message.contains(&missing.to_string()));
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_failure_exits_with_5() {
    let ctx = TestContext::new().await;

    Mock::given(method("GET"))
        .and(path("/sesiones"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"error": "Error interno"})),
        )
        .mount(&ctx.server)
        .await;

    let err = client_for(&ctx.base_url())
        .sesiones()
        .list(&ListQuery::default())
        .await
        .unwrap_err();
    let cli_err = CliError::from(err);

    assert_eq!(cli_err.exit_code(), 5);
    assert!(matches!(cli_err, CliError::Server(_)));
}

#[tokio::test]
async fn test_rejected_credential_exits_with_2() {
    let ctx = TestContext::new().await;

    Mock::given(method("GET"))
        .and(path("/secciones"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": "Token expirado"})),
        )
        .mount(&ctx.server)
        .await;

    let err = client_for(&ctx.base_url())
        .secciones()
        .list(&ListQuery::default())
        .await
        .unwrap_err();
    let cli_err = CliError::from(err);

    assert_eq!(cli_err.exit_code(), 2);
    assert!(matches!(cli_err, CliError::NotAuthenticated));
}

#[tokio::test]
async fn test_unreachable_server_exits_with_3() {
    // Nothing listens on this port.
    let err = client_for("http://127.0.0.1:1")
        .secciones()
        .list(&ListQuery::default())
        .await
        .unwrap_err();
    let cli_err = CliError::from(err);

    assert_eq!(cli_err.exit_code(), 3);
    assert!(matches!(cli_err, CliError::ConnectionFailed(_)));
}

#[tokio::test]
async fn test_malformed_response_body_exits_with_5() {
    let ctx = TestContext::new().await;

    Mock::given(method("GET"))
        .and(path("/secciones"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy page</html>"))
        .mount(&ctx.server)
        .await;

    let err = client_for(&ctx.base_url())
        .secciones()
        .list(&ListQuery::default())
        .await
        .unwrap_err();
    let cli_err = CliError::from(err);

    assert_eq!(cli_err.exit_code(), 5);
    match cli_err {
        CliError::Server(message) => assert!(message.contains("/secciones")),
        other => panic!("expected Server, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unexpected_client_status_keeps_code_and_message() {
    let ctx = TestContext::new().await;

    Mock::given(method("POST"))
        .and(path("/secciones"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({"error": "Nombre duplicado"})),
        )
        .mount(&ctx.server)
        .await;

    let request = portero_client::models::SeccionRequest {
        nombre: "Reportes".to_string(),
        descripcion: None,
    };
    let err = client_for(&ctx.base_url())
        .secciones()
        .create(&request)
        .await
        .unwrap_err();
    let cli_err = CliError::from(err);

    assert_eq!(cli_err.exit_code(), 4);
    match cli_err {
        CliError::Api { status, message } => {
            assert_eq!(status, 409);
            assert_eq!(message, "Nombre duplicado");
        }
        other => panic!("expected Api, got {other:?}"),
    }
}
