//! Acciones endpoints

use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::models::{Accion, AccionRequest, AccionSimple, Page};
use crate::resource::{ListQuery, PageQuery, Resource};
use uuid::Uuid;

/// Typed access to `/acciones`.
pub struct AccionesApi<'c> {
    resource: Resource<'c, Accion>,
}

impl ApiClient {
    /// Handle for the acciones resource.
    pub fn acciones(&self) -> AccionesApi<'_> {
        AccionesApi {
            resource: Resource::new(self, "acciones"),
        }
    }
}

impl AccionesApi<'_> {
    /// List acciones one page at a time (GET /acciones).
    pub async fn list(&self, query: &ListQuery) -> ClientResult<Page<Accion>> {
        self.resource.list(query).await
    }

    /// Get an accion by id (GET /acciones/{id}).
    pub async fn get(&self, id: Uuid) -> ClientResult<Accion> {
        self.resource.get(id).await
    }

    /// Create an accion (POST /acciones).
    pub async fn create(&self, request: &AccionRequest) -> ClientResult<Accion> {
        self.resource.create(request).await
    }

    /// Update an accion (PUT /acciones/{id}).
    pub async fn update(&self, id: Uuid, request: &AccionRequest) -> ClientResult<Accion> {
        self.resource.update(id, request).await
    }

    /// Mark an accion inactive (DELETE /acciones/soft-delete/{id}).
    pub async fn soft_delete(&self, id: Uuid) -> ClientResult<()> {
        self.resource.soft_delete(id).await
    }

    /// Remove an accion permanently (DELETE /acciones/{id}).
    pub async fn delete(&self, id: Uuid) -> ClientResult<()> {
        self.resource.delete(id).await
    }

    /// List the acciones of one aplicacion
    /// (GET /acciones/by-aplicacion/{id}).
    pub async fn list_by_aplicacion(
        &self,
        aplicacion_id: Uuid,
        query: &PageQuery,
    ) -> ClientResult<Page<Accion>> {
        self.resource
            .list_segment("by-aplicacion", aplicacion_id, query)
            .await
    }

    /// List the acciones of one seccion (GET /acciones/by-seccion/{id}).
    pub async fn list_by_seccion(
        &self,
        seccion_id: Uuid,
        query: &PageQuery,
    ) -> ClientResult<Page<Accion>> {
        self.resource
            .list_segment("by-seccion", seccion_id, query)
            .await
    }

    /// Reduced list for pickers (GET /acciones/select).
    pub async fn select(&self) -> ClientResult<Vec<AccionSimple>> {
        self.resource.select().await
    }
}
