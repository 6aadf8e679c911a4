//! Event 层：事件处理
//!
//! 把终端事件（按键、尺寸变化）翻译成 `AppMessage`，由主循环交给 Update 层。
//!
//! 模块结构：
//!     mod handler; // poll_event 轮询、handle_event 翻译
//!     mod keymap;  // 快捷键表
//!
//! 按键分派顺序：
//!     1. Ctrl+C 任何时候都退出
//!     2. 登出确认框打开时只接受 Esc / Enter / 左右切换
//!     3. 其他弹窗打开时交给弹窗
//!     4. 全局快捷键（? 帮助、Alt+r 刷新、Alt+l 登出、m 抽屉、Tab 切换焦点）
//!     5. 按焦点分派给抽屉或内容面板；抽屉不可见时一律交给内容面板
//!
//! `poll_event` 最长阻塞 timeout，超时返回 `None`，主循环借此定期处理后台结果。

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
