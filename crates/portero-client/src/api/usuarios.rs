//! Usuarios endpoints

use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::models::{Page, Usuario, UsuarioCreateRequest, UsuarioSimple, UsuarioUpdateRequest};
use crate::resource::{ListQuery, PageQuery, Resource};
use uuid::Uuid;

/// Typed access to `/usuarios`.
pub struct UsuariosApi<'c> {
    resource: Resource<'c, Usuario>,
}

impl ApiClient {
    /// Handle for the usuarios resource.
    pub fn usuarios(&self) -> UsuariosApi<'_> {
        UsuariosApi {
            resource: Resource::new(self, "usuarios"),
        }
    }
}

impl UsuariosApi<'_> {
    /// List usuarios one page at a time (GET /usuarios).
    pub async fn list(&self, query: &ListQuery) -> ClientResult<Page<Usuario>> {
        self.resource.list(query).await
    }

    /// Get a usuario by id (GET /usuarios/{id}).
    pub async fn get(&self, id: Uuid) -> ClientResult<Usuario> {
        self.resource.get(id).await
    }

    /// Create a usuario (POST /usuarios).
    pub async fn create(&self, request: &UsuarioCreateRequest) -> ClientResult<Usuario> {
        self.resource.create(request).await
    }

    /// Update a usuario (PUT /usuarios/{id}).
    pub async fn update(&self, id: Uuid, request: &UsuarioUpdateRequest) -> ClientResult<Usuario> {
        self.resource.update(id, request).await
    }

    /// Mark a usuario inactive (DELETE /usuarios/soft-delete/{id}).
    pub async fn soft_delete(&self, id: Uuid) -> ClientResult<()> {
        self.resource.soft_delete(id).await
    }

    /// Remove a usuario permanently (DELETE /usuarios/{id}).
    pub async fn delete(&self, id: Uuid) -> ClientResult<()> {
        self.resource.delete(id).await
    }

    /// List usuarios in one estado (GET /usuarios/estado/{estado}).
    ///
    /// Estados are `activo`, `inactivo` and `bloqueado`; unknown values
    /// come back as an empty page rather than an error.
    pub async fn list_by_estado(
        &self,
        estado: &str,
        query: &PageQuery,
    ) -> ClientResult<Page<Usuario>> {
        self.resource.list_segment("estado", estado, query).await
    }

    /// List usuarios by two-factor flag
    /// (GET /usuarios/dos-factor-activo/{activo}).
    pub async fn list_by_dos_factor_activo(
        &self,
        activo: bool,
        query: &PageQuery,
    ) -> ClientResult<Page<Usuario>> {
        self.resource
            .list_segment("dos-factor-activo", activo, query)
            .await
    }

    /// List usuarios flagged for a forced password change
    /// (GET /usuarios/requiere-cambio-contrasena/{requiere}).
    pub async fn list_by_requiere_cambio_contrasena(
        &self,
        requiere: bool,
        query: &PageQuery,
    ) -> ClientResult<Page<Usuario>> {
        self.resource
            .list_segment("requiere-cambio-contrasena", requiere, query)
            .await
    }

    /// Whether the usuario's session access is currently blocked by the
    /// lockout policy (GET /usuarios/{id}/is-session-blocked).
    pub async fn is_session_blocked(&self, id: Uuid) -> ClientResult<bool> {
        self.resource
            .client()
            .get(&format!("usuarios/{}/is-session-blocked", id))
            .await
    }

    /// Reduced list for pickers (GET /usuarios/select).
    pub async fn select(&self) -> ClientResult<Vec<UsuarioSimple>> {
        self.resource.select().await
    }
}
