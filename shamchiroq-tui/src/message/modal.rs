//! 弹窗消息类型

/// 弹窗相关消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMessage {
    /// 关闭弹窗（登出确认框上等同于取消）
    Close,

    /// 确认/提交
    Confirm,

    /// 在登出确认框中切换按钮焦点
    ToggleChoice,

    /// 输入字符
    Input(char),

    /// 删除字符（Backspace）
    Backspace,
}
