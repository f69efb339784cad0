//! Pagination envelope

use serde::{Deserialize, Serialize};

/// One page of results as every list endpoint returns it.
///
/// `number` is the 0-based page index the server reports; the `page`
/// request parameter is 1-based and the server shifts by one. Both pass
/// through this layer untouched. Envelope fields the client does not use
/// (`pageable`, `sort`) are ignored on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub number_of_elements: u32,
    #[serde(default)]
    pub first: bool,
    #[serde(default)]
    pub last: bool,
    #[serde(default)]
    pub empty: bool,
}
