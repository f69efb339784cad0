//! Auditoria de accesos models

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One access-audit entry. The record key is composite (`uuid_id` plus
/// `fecha`); both travel in the path when a single entry is addressed.
/// Audit entries are written by the server on every access decision and
/// are read-only from the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditoriaAcceso {
    pub uuid_id: Uuid,
    pub fecha: DateTime<FixedOffset>,
    #[serde(default)]
    pub usuario_id: Option<Uuid>,
    #[serde(default)]
    pub usuario_nombres: Option<String>,
    #[serde(default)]
    pub usuario_apellidos: Option<String>,
    #[serde(default)]
    pub email_usuario: Option<String>,
    #[serde(default)]
    pub aplicacion_id: Option<Uuid>,
    #[serde(default)]
    pub aplicacion_nombre: Option<String>,
    #[serde(default)]
    pub accion_id: Option<Uuid>,
    #[serde(default)]
    pub accion_nombre: Option<String>,
    #[serde(default)]
    pub accion_descripcion: Option<String>,
    #[serde(default)]
    pub ip_origen: Option<String>,
    #[serde(default)]
    pub informacion_dispositivo: Option<String>,
    #[serde(default)]
    pub mensaje: Option<String>,
    #[serde(default)]
    pub estado: String,
    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<FixedOffset>>,
}
