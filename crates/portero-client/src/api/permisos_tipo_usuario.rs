//! Permisos por tipo de usuario endpoints

use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::models::{Page, PermisoTipoUsuario, PermisoTipoUsuarioRequest};
use crate::resource::{ListQuery, PageQuery, Resource};
use uuid::Uuid;

/// Typed access to `/permisos-tipo-usuario`.
///
/// Grants are plain accion/tipo-usuario links; there is no `select`
/// projection for them on the server.
pub struct PermisosTipoUsuarioApi<'c> {
    resource: Resource<'c, PermisoTipoUsuario>,
}

impl ApiClient {
    /// Handle for the permisos por tipo de usuario resource.
    pub fn permisos_tipo_usuario(&self) -> PermisosTipoUsuarioApi<'_> {
        PermisosTipoUsuarioApi {
            resource: Resource::new(self, "permisos-tipo-usuario"),
        }
    }
}

impl PermisosTipoUsuarioApi<'_> {
    /// List grants one page at a time (GET /permisos-tipo-usuario).
    pub async fn list(&self, query: &ListQuery) -> ClientResult<Page<PermisoTipoUsuario>> {
        self.resource.list(query).await
    }

    /// Get a grant by id (GET /permisos-tipo-usuario/{id}).
    pub async fn get(&self, id: Uuid) -> ClientResult<PermisoTipoUsuario> {
        self.resource.get(id).await
    }

    /// Grant an accion to a tipo de usuario (POST /permisos-tipo-usuario).
    pub async fn create(
        &self,
        request: &PermisoTipoUsuarioRequest,
    ) -> ClientResult<PermisoTipoUsuario> {
        self.resource.create(request).await
    }

    /// Repoint a grant (PUT /permisos-tipo-usuario/{id}).
    pub async fn update(
        &self,
        id: Uuid,
        request: &PermisoTipoUsuarioRequest,
    ) -> ClientResult<PermisoTipoUsuario> {
        self.resource.update(id, request).await
    }

    /// Mark a grant inactive
    /// (DELETE /permisos-tipo-usuario/soft-delete/{id}).
    pub async fn soft_delete(&self, id: Uuid) -> ClientResult<()> {
        self.resource.soft_delete(id).await
    }

    /// Remove a grant permanently (DELETE /permisos-tipo-usuario/{id}).
    pub async fn delete(&self, id: Uuid) -> ClientResult<()> {
        self.resource.delete(id).await
    }

    /// List the grants of one tipo de usuario
    /// (GET /permisos-tipo-usuario/by-tipo-usuario/{id}).
    pub async fn list_by_tipo_usuario(
        &self,
        tipo_usuario_id: Uuid,
        query: &PageQuery,
    ) -> ClientResult<Page<PermisoTipoUsuario>> {
        self.resource
            .list_segment("by-tipo-usuario", tipo_usuario_id, query)
            .await
    }

    /// List the grants under one aplicacion
    /// (GET /permisos-tipo-usuario/by-aplicacion/{id}).
    pub async fn list_by_aplicacion(
        &self,
        aplicacion_id: Uuid,
        query: &PageQuery,
    ) -> ClientResult<Page<PermisoTipoUsuario>> {
        self.resource
            .list_segment("by-aplicacion", aplicacion_id, query)
            .await
    }
}
