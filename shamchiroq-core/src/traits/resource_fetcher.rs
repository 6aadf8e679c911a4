//! Resource fetch collaborator abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::PageResponse;

/// Resource Fetch Trait
///
/// One implementation per resource type (users, items, ...).
///
/// Platform implementation:
/// - `RestResource` (reqwest, `GET {base}{path}?page=&limit=`)
#[async_trait]
pub trait ResourceFetcher<T>: Send + Sync {
    /// Fetch one page
    ///
    /// # Arguments
    /// * `page_index` - 0-indexed page
    /// * `page_size` - Rows per page
    ///
    /// # Returns
    /// The page rows plus the total row count of the (unfiltered) query
    async fn fetch_page(&self, page_index: u32, page_size: u32) -> CoreResult<PageResponse<T>>;
}
