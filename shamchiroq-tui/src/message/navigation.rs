//! 抽屉相关消息

/// 抽屉消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMessage {
    /// 光标上移
    SelectPrevious,
    /// 光标下移
    SelectNext,
    /// 激活光标所在条目（跳转或登出）
    Confirm,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,
}
