//! Tipo de usuario models

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tipo de usuario (role) record as the API returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TipoUsuario {
    pub id: Uuid,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    pub aplicacion_id: Uuid,
    #[serde(default)]
    pub nombre_aplicacion: Option<String>,
    #[serde(default)]
    pub estado: String,
    pub created_at: DateTime<FixedOffset>,
    #[serde(default)]
    pub updated_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<FixedOffset>>,
}

/// Create/update payload for a tipo de usuario.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TipoUsuarioRequest {
    pub nombre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    pub aplicacion_id: Uuid,
    pub estado: String,
}

/// Reduced projection from `GET /tipos-usuario/select`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TipoUsuarioSimple {
    pub id: Uuid,
    pub nombre: String,
}
