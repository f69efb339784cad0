//! Wire models for the Centro de Control de Acceso API
//!
//! Field names mirror the API's own (Spanish, camelCase on the wire). All
//! timestamps are `chrono::DateTime<FixedOffset>` because the server serializes
//! them as ISO-8601 with an offset (`Z` for UTC).

pub mod accion;
pub mod aplicacion;
pub mod auditoria;
pub mod auth;
pub mod page;
pub mod permiso_tipo_usuario;
pub mod seccion;
pub mod sesion;
pub mod tipo_usuario;
pub mod usuario;
pub mod usuario_tipo_usuario;

pub use accion::{Accion, AccionRequest, AccionSimple};
pub use aplicacion::{Aplicacion, AplicacionRequest, AplicacionSimple};
pub use auditoria::AuditoriaAcceso;
pub use auth::{LoginRequest, LoginResponse, PasswordChangeRequest};
pub use page::Page;
pub use permiso_tipo_usuario::{PermisoTipoUsuario, PermisoTipoUsuarioRequest};
pub use seccion::{Seccion, SeccionRequest, SeccionSimple};
pub use sesion::Sesion;
pub use tipo_usuario::{TipoUsuario, TipoUsuarioRequest, TipoUsuarioSimple};
pub use usuario::{Usuario, UsuarioCreateRequest, UsuarioSimple, UsuarioUpdateRequest};
pub use usuario_tipo_usuario::{
    PermisoAccion, SeccionPermisos, UsuarioTipoUsuario, UsuarioTipoUsuarioRequest,
};
