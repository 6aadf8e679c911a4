//! Util 层：基础设施和工具函数
//!
//! 与业务无关的代码：终端初始化/恢复、日志、按显示宽度截断文本。
//!
//! 模块结构：
//!     mod logging;  // tracing 订阅者（滚动日志文件）
//!     mod terminal; // 原始模式 + 备用屏幕
//!     mod text;     // unicode 宽度截断
//!
//! `Term` 是 `Terminal<CrosstermBackend<Stdout>>` 的别名。
//!
//! 无论主循环正常退出还是返回错误，main 都要先调用 `restore_terminal`，
//! 否则终端会停留在原始模式；panic 的情况由 `install_panic_hook` 兜住。

mod logging;
mod terminal;
mod text;

pub use logging::init_logging;
pub use terminal::{init_terminal, install_panic_hook, restore_terminal, Term};
pub use text::truncate;
