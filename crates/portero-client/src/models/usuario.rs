//! Usuario models

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Usuario record as the API returns it.
///
/// `estado` is one of `activo`, `inactivo`, `bloqueado`; the lockout
/// fields (`intentos_fallidos_sesion`, `fecha_bloqueo_sesion`) are managed
/// server-side and only read from here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usuario {
    pub id: Uuid,
    pub nombres: String,
    pub apellidos: String,
    pub email: String,
    #[serde(default)]
    pub estado: String,
    #[serde(default)]
    pub dos_factor_activo: bool,
    #[serde(default)]
    pub dos_factor_secreto_totp: Option<String>,
    #[serde(default)]
    pub intentos_fallidos_sesion: i32,
    #[serde(default)]
    pub fecha_ultimo_intento_fallido: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub fecha_bloqueo_sesion: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub fecha_ultimo_cambio_contrasena: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub requiere_cambio_contrasena: bool,
    pub created_at: DateTime<FixedOffset>,
    #[serde(default)]
    pub updated_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<FixedOffset>>,
}

/// Create payload for a usuario. The server hashes `contrasena` before
/// storing it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsuarioCreateRequest {
    pub nombres: String,
    pub apellidos: String,
    pub email: String,
    pub contrasena: String,
    pub estado: String,
    pub dos_factor_activo: bool,
}

/// Update payload for a usuario. The password is never updated through
/// this shape; that goes through the auth change-password endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsuarioUpdateRequest {
    pub nombres: String,
    pub apellidos: String,
    pub email: String,
    pub estado: String,
    pub dos_factor_activo: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dos_factor_secreto_totp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intentos_fallidos_sesion: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_ultimo_intento_fallido: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_bloqueo_sesion: Option<DateTime<FixedOffset>>,
    pub requiere_cambio_contrasena: bool,
}

/// Reduced projection from `GET /usuarios/select`. Unlike the other
/// select shapes this carries enough to label a person in a picker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsuarioSimple {
    pub id: Uuid,
    pub nombre: String,
    pub apellidos: String,
    pub email: String,
}
