//! 应用主状态结构

use shamchiroq_core::{NavigationShell, SessionState};

use super::{FocusPanel, ModalState, Page, Resources};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 导航外壳（抽屉、布局、登出确认）
    pub shell: NavigationShell,

    /// 最近一次观察到的会话状态
    pub session: SessionState,

    /// 各列表页状态
    pub resources: Resources,

    /// 弹窗状态
    pub modal: ModalState,

    /// 状态栏消息
    pub status_message: Option<String>,
}

impl App {
    pub fn new(shell: NavigationShell, session: SessionState, resources: Resources) -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::Drawer,
            shell,
            session,
            resources,
            modal: ModalState::new(),
            status_message: None,
        }
    }

    /// 当前页面（由路由和会话推导）
    pub fn current_page(&self) -> Page {
        Page::resolve(&self.shell.active_path(), self.session.is_authenticated())
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
