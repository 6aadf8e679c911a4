//! 应用主消息枚举

use shamchiroq_core::SessionState;

use super::{BackendEvent, ContentMessage, ModalMessage, NavigationMessage};

/// 应用主消息
#[derive(Debug)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板（抽屉 / 内容）
    ToggleFocus,

    /// 窄屏下开合抽屉
    ToggleDrawer,

    /// 抽屉相关消息
    Navigation(NavigationMessage),

    /// 内容面板相关消息
    Content(ContentMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 刷新当前列表
    Refresh,

    /// 显示帮助
    ShowHelp,

    /// 打开登出确认框
    RequestLogout,

    /// 终端宽度变化
    Resize(u16),

    /// 路由器的当前路径变化
    RouteChanged,

    /// 会话状态变化
    SessionChanged(SessionState),

    /// 后台任务完成
    Backend(BackendEvent),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
