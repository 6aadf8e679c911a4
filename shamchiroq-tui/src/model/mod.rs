//! Model 层：应用状态定义
//!
//! Model 层是应用状态的唯一来源，只包含数据结构；
//! 所有状态变更都经由 Update 层触发。
//!
//! 模块结构：
//!     mod app;        // 主应用状态
//!     mod focus;      // 焦点（抽屉 / 内容）
//!     mod page;       // 当前页面（由路由路径和会话推导）
//!     pub mod domain; // 资源种类与表格行
//!     pub mod state;  // 列表页与弹窗状态
//!
//! 导航状态（抽屉开合、登出确认）不在这里，由 core 的 `NavigationShell` 持有，
//! `App` 只保存外壳本身。
//!
//! Page 与 state/ 的区别：
//!     - Page 只标识位置（门牌号），每次从路由器读取路径后推导；
//!     - state/ 保存每个列表的分页控制器和选中行（房间里的东西）。

mod app;
pub mod domain;
mod focus;
mod page;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use page::Page;
pub use state::{
    Fetchers, LogoutChoice, Modal, ModalState, PageAction, PendingFetch, Resources, SettledPage,
};
