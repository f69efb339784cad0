//! Typed access to each resource the API exposes
//!
//! One handle per resource, obtained from [`ApiClient`](crate::ApiClient)
//! (`client.secciones()`, `client.usuarios()`, ...). Each handle exposes
//! exactly the endpoint set its resource has on the server; the asymmetry
//! between resources is deliberate and preserved.

mod acciones;
mod aplicaciones;
mod auditoria;
mod auth;
mod permisos_tipo_usuario;
mod secciones;
mod sesiones;
mod tipos_usuario;
mod usuarios;
mod usuarios_tipos_usuario;

pub use acciones::AccionesApi;
pub use aplicaciones::AplicacionesApi;
pub use auditoria::AuditoriaApi;
pub use auth::AuthApi;
pub use permisos_tipo_usuario::PermisosTipoUsuarioApi;
pub use secciones::SeccionesApi;
pub use sesiones::SesionesApi;
pub use tipos_usuario::TiposUsuarioApi;
pub use usuarios::UsuariosApi;
pub use usuarios_tipos_usuario::UsuariosTiposUsuarioApi;
