//! 内容面板消息
//!
//! 列表页中的选择与翻页

/// 内容面板消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMessage {
    // ========== 行选择 ==========
    /// 选择上一行
    SelectPrevious,
    /// 选择下一行
    SelectNext,

    // ========== 翻页 ==========
    NextPage,
    PreviousPage,
    FirstPage,
    LastPage,

    /// 未登录页上的 Enter：打开登录框
    Activate,
}
