//! Aplicacion models

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Aplicacion record as the API returns it.
///
/// `llave_identificadora` is the stable machine key other services use to
/// address the application (for example in the permission projection
/// endpoint); `nombre` is the display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aplicacion {
    pub id: Uuid,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub llave_identificadora: String,
    #[serde(default)]
    pub estado: String,
    pub created_at: DateTime<FixedOffset>,
    #[serde(default)]
    pub updated_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<FixedOffset>>,
}

/// Create/update payload for an aplicacion.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AplicacionRequest {
    pub nombre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    pub url: String,
    pub llave_identificadora: String,
}

/// Reduced projection from `GET /aplicaciones/select`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AplicacionSimple {
    pub id: Uuid,
    pub nombre: String,
}
