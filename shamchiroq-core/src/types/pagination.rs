//! 分页相关类型定义

use serde::{Deserialize, Serialize};

/// 默认每页条数
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Pagination parameters for a listing request.
///
/// `page_index` is 0-indexed; `page_size` is fixed for the lifetime of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    /// Page index (0-indexed).
    pub page_index: u32,
    /// Number of items per page.
    pub page_size: u32,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Wire shape of every listing endpoint: one page of rows plus the total
/// number of rows matching the query (not the page length).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResponse<T> {
    /// Rows of the requested page, in server order.
    #[serde(default = "Vec::new")]
    pub rows: Vec<T>,
    /// Total matching rows across all pages.
    #[serde(default)]
    pub count: u64,
}

impl<T> PageResponse<T> {
    pub fn new(rows: Vec<T>, count: u64) -> Self {
        Self { rows, count }
    }
}

/// The last successfully applied page of a paginated view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationResult<T> {
    /// Items of the current page, replaced wholesale on every fetch.
    pub items: Vec<T>,
    /// Total rows reported by the server with the latest response.
    pub total_row_count: u64,
    /// `ceil(total_row_count / page_size)`.
    pub page_count: u64,
}

impl<T> PaginationResult<T> {
    /// Build a result from a server response, computing the page count from
    /// this response's total only.
    pub fn from_response(response: PageResponse<T>, page_size: u32) -> Self {
        Self {
            page_count: page_count(response.count, page_size),
            total_row_count: response.count,
            items: response.rows,
        }
    }
}

/// Number of pages needed to show `total_rows` with `page_size` rows each.
///
/// A zero page size yields zero pages instead of dividing by zero; registry
/// and config validation reject a zero page size before it gets here.
pub fn page_count(total_rows: u64, page_size: u32) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total_rows.div_ceil(u64::from(page_size))
}
