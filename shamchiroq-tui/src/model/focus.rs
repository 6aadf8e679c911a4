//! 焦点状态定义

/// 焦点面板枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 抽屉
    #[default]
    Drawer,
    /// 右侧内容面板
    Content,
}

impl FocusPanel {
    /// 切换到另一个面板
    pub fn toggle(self) -> Self {
        match self {
            FocusPanel::Drawer => FocusPanel::Content,
            FocusPanel::Content => FocusPanel::Drawer,
        }
    }

    pub fn is_drawer(self) -> bool {
        matches!(self, FocusPanel::Drawer)
    }

    pub fn is_content(self) -> bool {
        matches!(self, FocusPanel::Content)
    }
}
