//! Sesiones endpoints

use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::models::{Page, Sesion};
use crate::resource::{ListQuery, PageQuery, Resource};
use uuid::Uuid;

/// Typed access to `/sesiones`.
///
/// Sessions are born on the server when a login succeeds, so this handle
/// has no create or update; administration is limited to reading them,
/// moving their estado and soft-deleting. There is no hard delete either.
pub struct SesionesApi<'c> {
    resource: Resource<'c, Sesion>,
}

impl ApiClient {
    /// Handle for the sesiones resource.
    pub fn sesiones(&self) -> SesionesApi<'_> {
        SesionesApi {
            resource: Resource::new(self, "sesiones"),
        }
    }
}

impl SesionesApi<'_> {
    /// List sesiones one page at a time (GET /sesiones).
    pub async fn list(&self, query: &ListQuery) -> ClientResult<Page<Sesion>> {
        self.resource.list(query).await
    }

    /// Get a sesion by id (GET /sesiones/{id}).
    pub async fn get(&self, id: Uuid) -> ClientResult<Sesion> {
        self.resource.get(id).await
    }

    /// Move a sesion to another estado
    /// (PUT /sesiones/{id}/status?newStatus=...).
    ///
    /// The server takes the new estado (`activa`, `cerrada`, `expirada`)
    /// as a query parameter, not a body, and rejects anything else.
    pub async fn update_status(&self, id: Uuid, nuevo_estado: &str) -> ClientResult<Sesion> {
        let path = format!("sesiones/{}/status", id);
        let query = [("newStatus", nuevo_estado.to_string())];
        self.resource.client().put_with_params(&path, &query).await
    }

    /// Mark a sesion removed (DELETE /sesiones/soft-delete/{id}).
    pub async fn soft_delete(&self, id: Uuid) -> ClientResult<()> {
        self.resource.soft_delete(id).await
    }

    /// List sesiones in one estado (GET /sesiones/estado/{estado}).
    pub async fn list_by_estado(
        &self,
        estado: &str,
        query: &PageQuery,
    ) -> ClientResult<Page<Sesion>> {
        self.resource.list_segment("estado", estado, query).await
    }
}
