//! Sesion administration tests: the query-parameter status change and
//! the reduced endpoint set.

use portero_client::{ApiClient, PageQuery, StaticCredentials};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;
use wiremock::matchers::{body_string, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> ApiClient {
    ApiClient::with_http_client(
        server.uri(),
        Arc::new(StaticCredentials::new("test-token-123")),
        reqwest::Client::new(),
    )
}

fn sesion_id() -> Uuid {
    "7a8b9c0d-1e2f-4a3b-8c4d-5e6f7a8b9c0d".parse().unwrap()
}

fn sesion_json(id: Uuid, estado: &str) -> serde_json::Value {
    json!({
        "id": id,
        "token": "eyJhbGciOiJIUzI1NiJ9.sesion.sig",
        "usuarioId": "d1e2f3a4-b5c6-7890-1234-567890abcdef",
        "usuarioNombres": "Ana María",
        "usuarioApellidos": "González",
        "emailUsuario": "ana.gonzalez@example.com",
        "ipOrigen": "10.0.0.8",
        "informacionDispositivo": "Firefox / Linux",
        "fechaInicio": "2025-03-01T08:00:00Z",
        "fechaExpiracion": "2025-03-01T20:00:00Z",
        "fechaFin": null,
        "estado": estado,
        "createdAt": "2025-03-01T08:00:00Z",
        "updatedAt": null,
        "deletedAt": null
    })
}

#[tokio::test]
async fn test_update_status_sends_new_status_as_query_param() {
    let server = MockServer::start().await;
    let id = sesion_id();

    // The server reads newStatus from the query string; the body stays
    // empty.
    Mock::given(method("PUT"))
        .and(path(format!("/sesiones/{id}/status")))
        .and(query_param("newStatus", "cerrada"))
        .and(body_string(""))
        .respond_with(ResponseTemplate::new(200).set_body_json(sesion_json(id, "cerrada")))
        .expect(1)
        .mount(&server)
        .await;

    let sesion = client(&server)
        .sesiones()
        .update_status(id, "cerrada")
        .await
        .unwrap();

    assert_eq!(sesion.estado, "cerrada");
}

#[tokio::test]
async fn test_update_status_rejection_surfaces_server_message() {
    let server = MockServer::start().await;
    let id = sesion_id();

    Mock::given(method("PUT"))
        .and(path(format!("/sesiones/{id}/status")))
        .and(query_param("newStatus", "dormida"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "Estado de sesión no válido: dormida",
            "code": 400
        })))
        .mount(&server)
        .await;

    let err = client(&server)
        .sesiones()
        .update_status(id, "dormida")
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(400));
    assert!(err.to_string().contains("dormida"));
}

#[tokio::test]
async fn test_soft_delete_addresses_soft_delete_path() {
    let server = MockServer::start().await;
    let id = sesion_id();

    Mock::given(method("DELETE"))
        .and(path(format!("/sesiones/soft-delete/{id}")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client(&server).sesiones().soft_delete(id).await.unwrap();
}

#[tokio::test]
async fn test_list_by_estado() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sesiones/estado/activa"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [sesion_json(sesion_id(), "activa")],
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
        .sesiones()
        .list_by_estado("activa", &PageQuery::default())
        .await
        .unwrap();

    assert_eq!(page.content.len(), 1);
    assert_eq!(page.content[0].ip_origen.as_deref(), Some("10.0.0.8"));
}
