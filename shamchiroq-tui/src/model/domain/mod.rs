//! 领域模型
//!
//! 列表页展示的五种后台资源，以及它们与路由、接口、表格行的对应关系。

mod resource;

pub use resource::{ListResource, ResourceKind};
