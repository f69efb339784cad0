//! Tipos de usuario endpoints

use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::models::{Page, TipoUsuario, TipoUsuarioRequest, TipoUsuarioSimple};
use crate::resource::{ListQuery, PageQuery, Resource};
use uuid::Uuid;

/// Typed access to `/tipos-usuario`.
pub struct TiposUsuarioApi<'c> {
    resource: Resource<'c, TipoUsuario>,
}

impl ApiClient {
    /// Handle for the tipos de usuario resource.
    pub fn tipos_usuario(&self) -> TiposUsuarioApi<'_> {
        TiposUsuarioApi {
            resource: Resource::new(self, "tipos-usuario"),
        }
    }
}

impl TiposUsuarioApi<'_> {
    /// List tipos de usuario one page at a time (GET /tipos-usuario).
    pub async fn list(&self, query: &ListQuery) -> ClientResult<Page<TipoUsuario>> {
        self.resource.list(query).await
    }

    /// Get a tipo de usuario by id (GET /tipos-usuario/{id}).
    pub async fn get(&self, id: Uuid) -> ClientResult<TipoUsuario> {
        self.resource.get(id).await
    }

    /// Create a tipo de usuario (POST /tipos-usuario).
    pub async fn create(&self, request: &TipoUsuarioRequest) -> ClientResult<TipoUsuario> {
        self.resource.create(request).await
    }

    /// Update a tipo de usuario (PUT /tipos-usuario/{id}).
    pub async fn update(
        &self,
        id: Uuid,
        request: &TipoUsuarioRequest,
    ) -> ClientResult<TipoUsuario> {
        self.resource.update(id, request).await
    }

    /// Mark a tipo de usuario inactive
    /// (DELETE /tipos-usuario/soft-delete/{id}).
    pub async fn soft_delete(&self, id: Uuid) -> ClientResult<()> {
        self.resource.soft_delete(id).await
    }

    /// Remove a tipo de usuario permanently (DELETE /tipos-usuario/{id}).
    pub async fn delete(&self, id: Uuid) -> ClientResult<()> {
        self.resource.delete(id).await
    }

    /// List tipos de usuario in one estado
    /// (GET /tipos-usuario/estado/{estado}).
    pub async fn list_by_estado(
        &self,
        estado: &str,
        query: &PageQuery,
    ) -> ClientResult<Page<TipoUsuario>> {
        self.resource.list_segment("estado", estado, query).await
    }

    /// List the tipos de usuario of one aplicacion
    /// (GET /tipos-usuario/by-aplicacion/{id}).
    pub async fn list_by_aplicacion(
        &self,
        aplicacion_id: Uuid,
        query: &PageQuery,
    ) -> ClientResult<Page<TipoUsuario>> {
        self.resource
            .list_segment("by-aplicacion", aplicacion_id, query)
            .await
    }

    /// Reduced list for pickers (GET /tipos-usuario/select).
    pub async fn select(&self) -> ClientResult<Vec<TipoUsuarioSimple>> {
        self.resource.select().await
    }
}
