//! Access-audit tests: composite-key addressing and the read-only
//! filters.

use chrono::DateTime;
use portero_client::{ApiClient, ListQuery, PageQuery, StaticCredentials};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> ApiClient {
    ApiClient::with_http_client(
        server.uri(),
        Arc::new(StaticCredentials::new("test-token-123")),
        reqwest::Client::new(),
    )
}

fn entry_uuid() -> Uuid {
    "a2b3c4d5-e6f7-8901-2345-67890abcdef1".parse().unwrap()
}

fn entry_json(uuid_id: Uuid) -> serde_json::Value {
    json!({
        "uuidId": uuid_id,
        "fecha": "2025-03-01T10:15:30Z",
        "usuarioId": "d1e2f3a4-b5c6-7890-1234-567890abcdef",
        "usuarioNombres": "Ana María",
        "usuarioApellidos": "González",
        "emailUsuario": "ana.gonzalez@example.com",
        "aplicacionId": "5f6a7b8c-9d0e-4f1a-a2b3-c4d5e6f7a8b9",
        "aplicacionNombre": "CCA",
        "accionId": "9b2e4a1d-0c3f-4e5a-8b6c-7d8e9f0a1b2c",
        "accionNombre": "LOGIN",
        "accionDescripcion": "Inicio de sesión",
        "ipOrigen": "10.0.0.8",
        "informacionDispositivo": "Firefox / Linux",
        "mensaje": "Acceso concedido",
        "estado": "exitoso",
        "createdAt": "2025-03-01T10:15:30Z",
        "updatedAt": null,
        "deletedAt": null
    })
}

#[tokio::test]
async fn test_get_addresses_composite_key_with_fecha_in_path() {
    let server = MockServer::start().await;
    let uuid_id = entry_uuid();
    let fecha = DateTime::parse_from_rfc3339("2025-03-01T10:15:30Z").unwrap();

    // The timestamp travels in the path, colons and all, with Z for UTC.
    Mock::given(method("GET"))
        .and(path(format!(
            "/auditoria-accesos/{uuid_id}/fecha/2025-03-01T10:15:30Z"
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(entry_json(uuid_id)))
        .expect(1)
        .mount(&server)
        .await;

    let entry = client(&server)
        .auditoria_accesos()
        .get(uuid_id, fecha)
        .await
        .unwrap();

    assert_eq!(entry.uuid_id, uuid_id);
    assert_eq!(entry.mensaje.as_deref(), Some("Acceso concedido"));
}

#[tokio::test]
async fn test_list_sends_standard_pagination() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auditoria-accesos"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "10"))
        .and(query_param("searchTerm", "ana"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [entry_json(entry_uuid())],
            "totalElements": 1,
            "totalPages": 1,
            "size": 10,
            "number": 0,
            "numberOfElements": 1,
            "first": true,
            "last": true,
            "empty": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client(&server)
        .auditoria_accesos()
        .list(&ListQuery::new().with_search("ana"))
        .await
        .unwrap();

    assert_eq!(page.content[0].estado, "exitoso");
}

#[tokio::test]
async fn test_filter_by_accion() {
    let server = MockServer::start().await;
    let accion_id: Uuid = "9b2e4a1d-0c3f-4e5a-8b6c-7d8e9f0a1b2c".parse().unwrap();

    Mock::given(method("GET"))
        .and(path(format!("/auditoria-accesos/by-accion/{accion_id}")))
        .and(query_param("page", "2"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [],
            "totalElements": 0,
            "totalPages": 0,
            "size": 50,
            "number": 1,
            "numberOfElements": 0,
            "first": false,
            "last": true,
            "empty": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client(&server)
        .auditoria_accesos()
        .list_by_accion(accion_id, &PageQuery::new().with_page(2).with_limit(50))
        .await
        .unwrap();

    assert!(page.empty);
}
