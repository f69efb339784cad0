//! Permiso por tipo de usuario models

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Grant linking an accion to a tipo de usuario, with both ends
/// denormalized into the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermisoTipoUsuario {
    pub id: Uuid,
    pub accion_id: Uuid,
    #[serde(default)]
    pub accion_nombre: Option<String>,
    #[serde(default)]
    pub accion_descripcion: Option<String>,
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

/// Create/update payload for a grant.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermisoTipoUsuarioRequest {
    pub accion_id: Uuid,
    pub tipo_usuario_id: Uuid,
}
