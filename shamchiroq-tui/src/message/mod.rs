//!┌─────────────────────────────────────────────────────────────────────────────┐
//!│                              主循环 (app.rs)                                │
//!│                                                                             │
//!│  ┌────────────────────────────── UI 层 ────────────────────────────────┐    │
//!│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐          │    │
//!│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │          │    │
//!│  │   │   层    │   翻译   │    层     │   消费   │    层    │          │    │
//!│  │   └─────────┘          └───────────┘          └────┬─────┘          │    │
//!│  │        ▲                     ▲                     │ 修改 / Effect  │    │
//!│  │   ┌─────────┐                │                ┌────▼─────┐          │    │
//!│  │   │  View   │ ◀──── 读取 ────┼─────────────── │  Model   │          │    │
//!│  │   └─────────┘                │                └──────────┘          │    │
//!│  └──────────────────────────────│──────────────────────────────────────┘    │
//!│                                 │ BackendEvent                              │
//!│                            ┌────┴─────┐        ┌────────────────────┐       │
//!│                            │ Backend  │ ─────▶ │  shamchiroq-core   │       │
//!│                            └──────────┘        └────────────────────┘       │
//!└─────────────────────────────────────────────────────────────────────────────┘
//!
//! Message 层：事件消息定义
//!
//! Event 与 Update 之间的桥梁。按键、终端尺寸变化、路由/会话变化、
//! 后台任务完成，全都先翻译成 `AppMessage`，再由 Update 层消费。
//!
//! 模块结构：
//!     mod app;        // AppMessage 主消息
//!     mod backend;    // 后台任务结果
//!     mod content;    // 列表页子消息
//!     mod modal;      // 弹窗子消息
//!     mod navigation; // 抽屉子消息
//!
//! `AppMessage::Noop` 代替 `Option::None`，表示事件被忽略。
//! 后台结果带着不可克隆的请求结果，所以 `AppMessage` 只派生 `Debug`。

mod app;
mod backend;
mod content;
mod modal;
mod navigation;

pub use app::AppMessage;
pub use backend::BackendEvent;
pub use content::ContentMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
