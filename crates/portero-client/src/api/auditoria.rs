//! Auditoria de accesos endpoints (read-only)

use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::models::{AuditoriaAcceso, Page};
use crate::resource::{ListQuery, PageQuery, Resource};
use chrono::{DateTime, FixedOffset, SecondsFormat};
use uuid::Uuid;

/// Typed access to `/auditoria-accesos`.
///
/// The audit trail is written server-side on every access decision; the
/// client can only read it. Entries are keyed by (`uuid_id`, `fecha`),
/// so both travel in the path when one entry is addressed.
pub struct AuditoriaApi<'c> {
    resource: Resource<'c, AuditoriaAcceso>,
}

impl ApiClient {
    /// Handle for the access-audit resource.
    pub fn auditoria_accesos(&self) -> AuditoriaApi<'_> {
        AuditoriaApi {
            resource: Resource::new(self, "auditoria-accesos"),
        }
    }
}

impl AuditoriaApi<'_> {
    /// List audit entries one page at a time (GET /auditoria-accesos).
    pub async fn list(&self, query: &ListQuery) -> ClientResult<Page<AuditoriaAcceso>> {
        self.resource.list(query).await
    }

    /// Get one audit entry by its composite key
    /// (GET /auditoria-accesos/{uuidId}/fecha/{fecha}).
    ///
    /// `fecha` is rendered as RFC 3339 with its offset (`Z` for UTC) and
    /// fractional seconds kept, so the value matches the stored key
    /// exactly. Colons are legal in path segments, so it travels
    /// unencoded.
    pub async fn get(
        &self,
        uuid_id: Uuid,
        fecha: DateTime<FixedOffset>,
    ) -> ClientResult<AuditoriaAcceso> {
        let path = format!(
            "auditoria-accesos/{}/fecha/{}",
            uuid_id,
            fecha.to_rfc3339_opts(SecondsFormat::AutoSi, true)
        );
        self.resource.client().get(&path).await
    }

    /// List the audit entries of one aplicacion
    /// (GET /auditoria-accesos/by-aplicacion/{id}).
    pub async fn list_by_aplicacion(
        &self,
        aplicacion_id: Uuid,
        query: &PageQuery,
    ) -> ClientResult<Page<AuditoriaAcceso>> {
        self.resource
            .list_segment("by-aplicacion", aplicacion_id, query)
            .await
    }

    /// List the audit entries of one accion
    /// (GET /auditoria-accesos/by-accion/{id}).
    pub async fn list_by_accion(
        &self,
        accion_id: Uuid,
        query: &PageQuery,
    ) -> ClientResult<Page<AuditoriaAcceso>> {
        self.resource
            .list_segment("by-accion", accion_id, query)
            .await
    }
}
