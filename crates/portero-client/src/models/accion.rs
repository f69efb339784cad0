//! Accion models

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Accion record as the API returns it, with the owning aplicacion and
/// seccion denormalized into the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accion {
    pub id: Uuid,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    pub aplicacion_id: Uuid,
    #[serde(default)]
    pub nombre_aplicacion: Option<String>,
    pub seccion_id: Uuid,
    #[serde(default)]
    pub nombre_seccion: Option<String>,
    pub created_at: DateTime<FixedOffset>,
    #[serde(default)]
    pub updated_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<FixedOffset>>,
}

/// Create/update payload for an accion.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccionRequest {
    pub nombre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    pub aplicacion_id: Uuid,
    pub seccion_id: Uuid,
}

/// Reduced projection from `GET /acciones/select`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccionSimple {
    pub id: Uuid,
    pub nombre: String,
}
