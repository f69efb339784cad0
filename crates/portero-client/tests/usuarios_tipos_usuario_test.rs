//! Assignment endpoint tests, including the permission projection.

use portero_client::models::UsuarioTipoUsuarioRequest;
use portero_client::{ApiClient, PageQuery, StaticCredentials};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> ApiClient {
    ApiClient::with_http_client(
        server.uri(),
        Arc::new(StaticCredentials::new("test-token-123")),
        reqwest::Client::new(),
    )
}

fn usuario_id() -> Uuid {
    "d1e2f3a4-b5c6-7890-1234-567890abcdef".parse().unwrap()
}

fn tipo_usuario_id() -> Uuid {
    "9b2e4a1d-0c3f-4e5a-8b6c-7d8e9f0a1b2c".parse().unwrap()
}

fn asignacion_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "usuarioId": usuario_id(),
        "usuarioNombres": "Ana María",
        "usuarioApellidos": "González",
        "usuarioEmail": "ana.gonzalez@example.com",
        "tipoUsuarioId": tipo_usuario_id(),
        "tipoUsuarioNombre": "Consultor",
        "tipoUsuarioDescripcion": "Solo lectura",
        "createdAt": "2025-01-20T09:00:00Z",
        "updatedAt": null,
        "deletedAt": null
    })
}

#[tokio::test]
async fn test_create_assignment_links_both_ids() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/usuarios-tipos-usuario"))
        .and(body_json(json!({
            "usuarioId": usuario_id(),
            "tipoUsuarioId": tipo_usuario_id()
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(asignacion_json("3e2c7cb7-89f6-4fb1-ab3c-5b5c0e2b3c32")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let request = UsuarioTipoUsuarioRequest {
        usuario_id: usuario_id(),
        tipo_usuario_id: tipo_usuario_id(),
    };
    let created = client(&server)
        .usuarios_tipos_usuario()
        .create(&request)
        .await
        .unwrap();

    assert_eq!(created.tipo_usuario_nombre.as_deref(), Some("Consultor"));
}

#[tokio::test]
async fn test_list_by_usuario_filters_on_path() {
    let server = MockServer::start().await;
    let id = usuario_id();

    Mock::given(method("GET"))
        .and(path(format!("/usuarios-tipos-usuario/by-usuario/{id}")))
        .and(query_param("page", "1"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [asignacion_json("3e2c7cb7-89f6-4fb1-ab3c-5b5c0e2b3c32")],
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
        .usuarios_tipos_usuario()
        .list_by_usuario(id, &PageQuery::default())
        .await
        .unwrap();

    assert_eq!(page.content.len(), 1);
    assert_eq!(page.content[0].usuario_id, id);
}

#[tokio::test]
async fn test_permissions_by_section_returns_grouped_projection() {
    let server = MockServer::start().await;
    let id = usuario_id();

    Mock::given(method("GET"))
        .and(path(format!(
            "/usuarios-tipos-usuario/{id}/permissions-by-section/CCA_AUTH_SERVICE"
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "nombreSeccion": "Reportes",
                "descripcionSeccion": "Consultas y exportes",
                "acciones": [
                    {"nombreAccion": "VIEW_DASHBOARD", "descripcionAccion": "Ver tablero"},
                    {"nombreAccion": "EXPORT_CSV", "descripcionAccion": "Exportar"}
                ]
            },
            {
                "nombreSeccion": "Administracion",
                "descripcionSeccion": null,
                "acciones": [
                    {"nombreAccion": "MANAGE_USERS", "descripcionAccion": null}
                ]
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let grupos = client(&server)
        .usuarios_tipos_usuario()
        .permissions_by_section(id, "CCA_AUTH_SERVICE")
        .await
        .unwrap();

    assert_eq!(grupos.len(), 2);
    assert_eq!(grupos[0].nombre_seccion, "Reportes");
    assert_eq!(grupos[0].acciones.len(), 2);
    assert_eq!(grupos[1].acciones[0].nombre_accion, "MANAGE_USERS");
}

#[tokio::test]
async fn test_permissions_by_section_empty_when_no_grants() {
    let server = MockServer::start().await;
    let id = usuario_id();

    Mock::given(method("GET"))
        .and(path(format!(
            "/usuarios-tipos-usuario/{id}/permissions-by-section/SIN_PERMISOS"
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let grupos = client(&server)
        .usuarios_tipos_usuario()
        .permissions_by_section(id, "SIN_PERMISOS")
        .await
        .unwrap();

    assert!(grupos.is_empty());
}
