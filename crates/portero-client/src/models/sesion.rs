//! Sesion models

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sesion record as the API returns it.
///
/// Sessions are created by the auth service when a login succeeds, never
/// through this client; the administration surface only lists them,
/// changes their `estado` (`activa`, `cerrada`, `expirada`) and
/// soft-deletes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sesion {
    pub id: Uuid,
    #[serde(default)]
    pub token: String,
    pub usuario_id: Uuid,
    #[serde(default)]
    pub usuario_nombres: Option<String>,
    #[serde(default)]
    pub usuario_apellidos: Option<String>,
    #[serde(default)]
    pub email_usuario: Option<String>,
    #[serde(default)]
    pub ip_origen: Option<String>,
    #[serde(default)]
    pub informacion_dispositivo: Option<String>,
    pub fecha_inicio: DateTime<FixedOffset>,
    #[serde(default)]
    pub fecha_expiracion: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub fecha_fin: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub estado: String,
    pub created_at: DateTime<FixedOffset>,
    #[serde(default)]
    pub updated_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<FixedOffset>>,
}
