//! Typed async client for the Centro de Control de Acceso REST API.
//!
//! One [`ApiClient`] per target server; resource handles hang off it and
//! cover the administration surface (secciones, aplicaciones, acciones,
//! tipos de usuario, permisos, usuarios, asignaciones, sesiones, auditoria
//! and auth), each exposing exactly the endpoints its resource has.
//!
//! ```no_run
//! use portero_client::{ApiClient, ListQuery, StaticCredentials};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # async fn run() -> portero_client::ClientResult<()> {
//! let client = ApiClient::new(
//!     "https://cca.example.com/api",
//!     Arc::new(StaticCredentials::new("token")),
//!     Duration::from_secs(30),
//! )?;
//! let page = client.usuarios().list(&ListQuery::default()).await?;
//! println!("{} usuarios", page.total_elements);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod credentials;
pub mod error;
pub mod models;
pub mod operation;

mod resource;

pub use client::ApiClient;
pub use credentials::{Anonymous, CredentialProvider, StaticCredentials};
pub use error::{ClientError, ClientResult};
pub use operation::Operation;
pub use resource::{ListQuery, PageQuery};
