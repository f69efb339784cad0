//! Secciones endpoints

use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::models::{Page, Seccion, SeccionRequest, SeccionSimple};
use crate::resource::{ListQuery, Resource};
use uuid::Uuid;

/// Typed access to `/secciones`.
pub struct SeccionesApi<'c> {
    resource: Resource<'c, Seccion>,
}

impl ApiClient {
    /// Handle for the secciones resource.
    pub fn secciones(&self) -> SeccionesApi<'_> {
        SeccionesApi {
            resource: Resource::new(self, "secciones"),
        }
    }
}

impl SeccionesApi<'_> {
    /// List secciones one page at a time (GET /secciones).
    pub async fn list(&self, query: &ListQuery) -> ClientResult<Page<Seccion>> {
        self.resource.list(query).await
    }

    /// Get a seccion by id (GET /secciones/{id}).
    pub async fn get(&self, id: Uuid) -> ClientResult<Seccion> {
        self.resource.get(id).await
    }

    /// Create a seccion (POST /secciones).
    pub async fn create(&self, request: &SeccionRequest) -> ClientResult<Seccion> {
        self.resource.create(request).await
    }

    /// Update a seccion (PUT /secciones/{id}).
    pub async fn update(&self, id: Uuid, request: &SeccionRequest) -> ClientResult<Seccion> {
        self.resource.update(id, request).await
    }

    /// Mark a seccion inactive (DELETE /secciones/soft-delete/{id}).
    pub async fn soft_delete(&self, id: Uuid) -> ClientResult<()> {
        self.resource.soft_delete(id).await
    }

    /// Remove a seccion permanently (DELETE /secciones/{id}).
    pub async fn delete(&self, id: Uuid) -> ClientResult<()> {
        self.resource.delete(id).await
    }

    /// Reduced list for pickers (GET /secciones/select).
    pub async fn select(&self) -> ClientResult<Vec<SeccionSimple>> {
        self.resource.select().await
    }
}
