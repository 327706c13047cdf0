//! Server-side pagination wrapper

use serde::Deserialize;

/// A single server page plus its pagination metadata
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub data: Vec<T>,
    /// 1-indexed page number this response covers
    pub page: u32,
    pub page_size: u32,
    /// Total records matching the query across all pages
    pub total: u32,
    pub total_pages: u32,
}
