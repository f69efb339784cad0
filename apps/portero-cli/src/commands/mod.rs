//! CLI command implementations

pub mod acciones;
pub mod aplicaciones;
pub mod asignaciones;
pub mod auditoria;
pub mod change_password;
pub mod login;
pub mod logout;
pub mod permisos;
pub mod secciones;
pub mod sesiones;
pub mod tipos_usuario;
pub mod usuarios;
pub mod whoami;
