//! 页面状态模块
//!
//! 定义列表页和弹窗的状态数据结构

mod modal;
mod resource_list;
mod resources;

pub use modal::{LogoutChoice, Modal, ModalState};
pub use resource_list::ResourceListState;
pub use resources::{Fetchers, PageAction, PendingFetch, Resources, SettledPage};
