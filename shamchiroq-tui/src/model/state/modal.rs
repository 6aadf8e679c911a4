//! 弹窗/对话框状态
//!
//! 登出确认框的可见性由导航外壳持有，这里只记录它的按钮焦点。

/// 登出确认框的按钮焦点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogoutChoice {
    /// 取消（默认焦点）
    #[default]
    Cancel,
    /// 确认登出
    Confirm,
}

impl LogoutChoice {
    pub fn toggle(self) -> Self {
        match self {
            Self::Cancel => Self::Confirm,
            Self::Confirm => Self::Cancel,
        }
    }
}

/// 弹窗类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 登录（粘贴 token）
    SignIn {
        /// token 输入
        token: String,
        /// 上次提交的错误
        error: Option<String>,
        /// 是否正在提交
        submitting: bool,
    },
    /// 帮助信息
    Help,
    /// 错误提示
    Error { title: String, message: String },
}

/// 弹窗状态
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
    /// 登出确认框的按钮焦点
    pub logout_choice: LogoutChoice,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 显示登录弹窗（已打开时保留输入）
    pub fn show_sign_in(&mut self) {
        if !matches!(self.active, Some(Modal::SignIn { .. })) {
            self.active = Some(Modal::SignIn {
                token: String::new(),
                error: None,
                submitting: false,
            });
        }
    }

    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    pub fn show_error(&mut self, title: &str, message: &str) {
        self.active = Some(Modal::Error {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    /// 登出确认框每次打开时焦点回到“取消”
    pub fn reset_logout_choice(&mut self) {
        self.logout_choice = LogoutChoice::Cancel;
    }
}
