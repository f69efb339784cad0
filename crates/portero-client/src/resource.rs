//! Generic paginated-resource layer.
//!
//! Every resource the API exposes follows one REST convention: paginated
//! list at the collection root, record addressing by id, `soft-delete/{id}`
//! next to the hard delete, filtered lists one path segment deep, and a
//! reduced `select` projection. [`Resource`] implements that family once;
//! the typed handles in [`crate::api`] expose only the subset their
//! resource actually has on the server.

use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::models::Page;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Display;
use std::marker::PhantomData;
use uuid::Uuid;

/// Query for paginated list endpoints.
///
/// `page` is 1-based; the server shifts it to its 0-based index.
/// `search_term` is an opaque server-side filter and is always sent, empty
/// or not, so the wire shape stays constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
    pub search_term: String,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            search_term: String::new(),
        }
    }
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub fn with_search(mut self, search_term: impl Into<String>) -> Self {
        self.search_term = search_term.into();
        self
    }

    pub(crate) fn to_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
            ("searchTerm", self.search_term.clone()),
        ]
    }
}

/// Query for filtered list endpoints, which paginate but do not search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u32,
    pub limit: u32,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}

impl PageQuery {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub(crate) fn to_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ]
    }
}

/// One resource's endpoint family, bound to its collection path.
pub(crate) struct Resource<'c, T> {
    client: &'c ApiClient,
    path: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<'c, T: DeserializeOwned> Resource<'c, T> {
    pub(crate) fn new(client: &'c ApiClient, path: &'static str) -> Self {
        Self {
            client,
            path,
            _marker: PhantomData,
        }
    }

    /// Dispatcher this resource is bound to, for the endpoints that fall
    /// outside the uniform family.
    pub(crate) fn client(&self) -> &'c ApiClient {
        self.client
    }

    /// GET `/{resource}` with `page`, `limit`, `searchTerm`.
    pub(crate) async fn list(&self, query: &ListQuery) -> ClientResult<Page<T>> {
        self.client
            .get_with_params(self.path, &query.to_params())
            .await
    }

    /// GET `/{resource}/{id}`.
    pub(crate) async fn get(&self, id: Uuid) -> ClientResult<T> {
        self.client.get(&format!("{}/{}", self.path, id)).await
    }

    /// POST `/{resource}`.
    pub(crate) async fn create<B: Serialize>(&self, body: &B) -> ClientResult<T> {
        self.client.post(self.path, body).await
    }

    /// PUT `/{resource}/{id}`.
    pub(crate) async fn update<B: Serialize>(&self, id: Uuid, body: &B) -> ClientResult<T> {
        self.client
            .put(&format!("{}/{}", self.path, id), body)
            .await
    }

    /// DELETE `/{resource}/soft-delete/{id}`: marks the record inactive.
    pub(crate) async fn soft_delete(&self, id: Uuid) -> ClientResult<()> {
        self.client
            .delete(&format!("{}/soft-delete/{}", self.path, id))
            .await
    }

    /// DELETE `/{resource}/{id}`: removes the record permanently.
    pub(crate) async fn delete(&self, id: Uuid) -> ClientResult<()> {
        self.client.delete(&format!("{}/{}", self.path, id)).await
    }

    /// GET `/{resource}/{segment}/{value}` with `page` and `limit`, the
    /// filtered-list shape (`by-aplicacion/{id}`, `estado/{estado}`, ...).
    pub(crate) async fn list_segment(
        &self,
        segment: &str,
        value: impl Display,
        query: &PageQuery,
    ) -> ClientResult<Page<T>> {
        let value = value.to_string();
        let path = format!(
            "{}/{}/{}",
            self.path,
            segment,
            urlencoding::encode(&value)
        );
        self.client.get_with_params(&path, &query.to_params()).await
    }

    /// GET `/{resource}/select`: flat reduced projection for pickers.
    pub(crate) async fn select<S: DeserializeOwned>(&self) -> ClientResult<Vec<S>> {
        self.client.get(&format!("{}/select", self.path)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_defaults() {
        let query = ListQuery::default();
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 10);
        assert!(query.search_term.is_empty());
    }

    #[test]
    fn test_list_query_always_sends_search_term() {
        let params = ListQuery::new().with_page(3).with_limit(25).to_params();
        assert_eq!(
            params,
            vec![
                ("page", "3".to_string()),
                ("limit", "25".to_string()),
                ("searchTerm", String::new()),
            ]
        );
    }

    #[test]
    fn test_list_query_builder_sets_search() {
        let params = ListQuery::new().with_search("login").to_params();
        assert_eq!(params[2], ("searchTerm", "login".to_string()));
    }

    #[test]
    fn test_page_query_params() {
        let params = PageQuery::new().with_page(2).with_limit(5).to_params();
        assert_eq!(
            params,
            vec![("page", "2".to_string()), ("limit", "5".to_string())]
        );
    }
}
