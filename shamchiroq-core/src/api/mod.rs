//! REST API 客户端
//!
//! 所有列表接口形如 `GET {base}{path}?page={page}&limit={limit}`，
//! 返回 `{ "rows": [...], "count": n }`。

mod client;

pub use client::{ApiClient, RestResource};

/// 列表接口路径
pub mod endpoints {
    pub const USERS: &str = "/user/getUsers";
    pub const ITEMS: &str = "/item/getItems";
    pub const BLOCKS: &str = "/block/getBlocks";
    pub const NOTIFICATIONS: &str = "/notification/getNotifications";
    pub const REPORTS: &str = "/report/getReports";
}
