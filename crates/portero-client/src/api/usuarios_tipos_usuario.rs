//! Usuario / tipo de usuario assignment endpoints, including the
//! permission projection

use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::models::{Page, SeccionPermisos, UsuarioTipoUsuario, UsuarioTipoUsuarioRequest};
use crate::resource::{ListQuery, PageQuery, Resource};
use uuid::Uuid;

/// Typed access to `/usuarios-tipos-usuario`.
pub struct UsuariosTiposUsuarioApi<'c> {
    resource: Resource<'c, UsuarioTipoUsuario>,
}

impl ApiClient {
    /// Handle for the usuario/tipo-usuario assignment resource.
    pub fn usuarios_tipos_usuario(&self) -> UsuariosTiposUsuarioApi<'_> {
        UsuariosTiposUsuarioApi {
            resource: Resource::new(self, "usuarios-tipos-usuario"),
        }
    }
}

impl UsuariosTiposUsuarioApi<'_> {
    /// List assignments one page at a time (GET /usuarios-tipos-usuario).
    pub async fn list(&self, query: &ListQuery) -> ClientResult<Page<UsuarioTipoUsuario>> {
        self.resource.list(query).await
    }

    /// Get an assignment by id (GET /usuarios-tipos-usuario/{id}).
    pub async fn get(&self, id: Uuid) -> ClientResult<UsuarioTipoUsuario> {
        self.resource.get(id).await
    }

    /// Assign a tipo de usuario to a usuario
    /// (POST /usuarios-tipos-usuario).
    pub async fn create(
        &self,
        request: &UsuarioTipoUsuarioRequest,
    ) -> ClientResult<UsuarioTipoUsuario> {
        self.resource.create(request).await
    }

    /// Repoint an assignment (PUT /usuarios-tipos-usuario/{id}).
    pub async fn update(
        &self,
        id: Uuid,
        request: &UsuarioTipoUsuarioRequest,
    ) -> ClientResult<UsuarioTipoUsuario> {
        self.resource.update(id, request).await
    }

    /// Mark an assignment inactive
    /// (DELETE /usuarios-tipos-usuario/soft-delete/{id}).
    pub async fn soft_delete(&self, id: Uuid) -> ClientResult<()> {
        self.resource.soft_delete(id).await
    }

    /// Remove an assignment permanently
    /// (DELETE /usuarios-tipos-usuario/{id}).
    pub async fn delete(&self, id: Uuid) -> ClientResult<()> {
        self.resource.delete(id).await
    }

    /// List the assignments of one usuario
    /// (GET /usuarios-tipos-usuario/by-usuario/{id}).
    pub async fn list_by_usuario(
        &self,
        usuario_id: Uuid,
        query: &PageQuery,
    ) -> ClientResult<Page<UsuarioTipoUsuario>> {
        self.resource
            .list_segment("by-usuario", usuario_id, query)
            .await
    }

    /// List the assignments of one tipo de usuario
    /// (GET /usuarios-tipos-usuario/by-tipo-usuario/{id}).
    pub async fn list_by_tipo_usuario(
        &self,
        tipo_usuario_id: Uuid,
        query: &PageQuery,
    ) -> ClientResult<Page<UsuarioTipoUsuario>> {
        self.resource
            .list_segment("by-tipo-usuario", tipo_usuario_id, query)
            .await
    }

    /// Effective permissions of a usuario inside one aplicacion, already
    /// grouped by seccion on the server
    /// (GET /usuarios-tipos-usuario/{usuarioId}/permissions-by-section/{llave}).
    ///
    /// `llave_identificadora` is the aplicacion's machine key, not its id.
    pub async fn permissions_by_section(
        &self,
        usuario_id: Uuid,
        llave_identificadora: &str,
    ) -> ClientResult<Vec<SeccionPermisos>> {
        let path = format!(
            "usuarios-tipos-usuario/{}/permissions-by-section/{}",
            usuario_id,
            urlencoding::encode(llave_identificadora)
        );
        self.resource.client().get(&path).await
    }
}
