//! Aplicaciones endpoints

use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::models::{Aplicacion, AplicacionRequest, AplicacionSimple, Page};
use crate::resource::{ListQuery, PageQuery, Resource};
use uuid::Uuid;

/// Typed access to `/aplicaciones`.
pub struct AplicacionesApi<'c> {
    resource: Resource<'c, Aplicacion>,
}

impl ApiClient {
    /// Handle for the aplicaciones resource.
    pub fn aplicaciones(&self) -> AplicacionesApi<'_> {
        AplicacionesApi {
            resource: Resource::new(self, "aplicaciones"),
        }
    }
}

impl AplicacionesApi<'_> {
    /// List aplicaciones one page at a time (GET /aplicaciones).
    pub async fn list(&self, query: &ListQuery) -> ClientResult<Page<Aplicacion>> {
        self.resource.list(query).await
    }

    /// Get an aplicacion by id (GET /aplicaciones/{id}).
    pub async fn get(&self, id: Uuid) -> ClientResult<Aplicacion> {
        self.resource.get(id).await
    }

    /// Register an aplicacion (POST /aplicaciones).
    pub async fn create(&self, request: &AplicacionRequest) -> ClientResult<Aplicacion> {
        self.resource.create(request).await
    }

    /// Update an aplicacion (PUT /aplicaciones/{id}).
    pub async fn update(&self, id: Uuid, request: &AplicacionRequest) -> ClientResult<Aplicacion> {
        self.resource.update(id, request).await
    }

    /// Mark an aplicacion inactive (DELETE /aplicaciones/soft-delete/{id}).
    pub async fn soft_delete(&self, id: Uuid) -> ClientResult<()> {
        self.resource.soft_delete(id).await
    }

    /// Remove an aplicacion permanently (DELETE /aplicaciones/{id}).
    pub async fn delete(&self, id: Uuid) -> ClientResult<()> {
        self.resource.delete(id).await
    }

    /// List aplicaciones in one estado (GET /aplicaciones/estado/{estado}).
    pub async fn list_by_estado(
        &self,
        estado: &str,
        query: &PageQuery,
    ) -> ClientResult<Page<Aplicacion>> {
        self.resource.list_segment("estado", estado, query).await
    }

    /// Reduced list for pickers (GET /aplicaciones/select).
    pub async fn select(&self) -> ClientResult<Vec<AplicacionSimple>> {
        self.resource.select().await
    }
}
