//! 类型定义模块

mod pagination;
mod resource;

pub use pagination::{
    page_count, PageResponse, PaginationParams, PaginationResult, DEFAULT_PAGE_SIZE,
};
pub use resource::{Block, EntityId, Item, Notification, Report, User};
