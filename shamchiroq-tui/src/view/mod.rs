//! View 层：UI 渲染
//!
//! 只读取 `App`，不修改任何状态。
//!
//! 模块结构：
//!     mod layout;         // 标题栏 + 抽屉 + 内容 + 状态栏
//!     mod components;     // 抽屉、状态栏、弹窗
//!     mod pages;          // 列表页、未登录页
//!     pub mod theme;      // 配色

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
