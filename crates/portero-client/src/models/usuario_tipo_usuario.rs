//! Usuario / tipo de usuario assignment models and the permission
//! projection shapes

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Assignment linking a usuario to a tipo de usuario, with both ends
/// denormalized into the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsuarioTipoUsuario {
    pub id: Uuid,
    pub usuario_id: Uuid,
    #[serde(default)]
    pub usuario_nombres: Option<String>,
    #[serde(default)]
    pub usuario_apellidos: Option<String>,
    #[serde(default)]
    pub usuario_email: Option<String>,
    pub tipo_usuario_id: Uuid,
    #[serde(default)]
    pub tipo_usuario_nombre: Option<String>,
    #[serde(default)]
    pub tipo_usuario_descripcion: Option<String>,
    pub created_at: DateTime<FixedOffset>,
    #[serde(default)]
    pub updated_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<FixedOffset>>,
}

/// Create/update payload for an assignment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsuarioTipoUsuarioRequest {
    pub usuario_id: Uuid,
    pub tipo_usuario_id: Uuid,
}

/// One seccion's worth of effective permissions, as the projection
/// endpoint groups them. The grouping happens server-side; the client
/// never reshapes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeccionPermisos {
    pub nombre_seccion: String,
    #[serde(default)]
    pub descripcion_seccion: Option<String>,
    #[serde(default)]
    pub acciones: Vec<PermisoAccion>,
}

/// One granted accion inside a [`SeccionPermisos`] group.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermisoAccion {
    pub nombre_accion: String,
    #[serde(default)]
    pub descripcion_accion: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_parses_grouped_shape() {
        let grupos: Vec<SeccionPermisos> = serde_json::from_str(
            r#"[
                {
                    "nombreSeccion": "Reportes",
                    "descripcionSeccion": "Consultas y exportes",
                    "acciones": [
                        {"nombreAccion": "VIEW_DASHBOARD", "descripcionAccion": "Ver tablero"},
                        {"nombreAccion": "EXPORT_CSV", "descripcionAccion": null}
                    ]
                },
                {
                    "nombreSeccion": "Administracion",
                    "descripcionSeccion": null,
                    "acciones": []
                }
            ]"#,
        )
        .unwrap();
        assert_eq!(grupos.len(), 2);
        assert_eq!(grupos[0].acciones.len(), 2);
        assert_eq!(grupos[0].acciones[0].nombre_accion, "VIEW_DASHBOARD");
        assert!(grupos[1].acciones.is_empty());
    }
}
