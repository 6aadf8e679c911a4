//! 确认门
//!
//! 拦截破坏性操作，必须明确确认后才执行调用方提供的动作。
//!
//! 受控组件：可见性标志由调用方持有，每次操作时以 `&mut bool` 传入；
//! 门本身只保存标题、描述和待执行的动作。

/// 确认门
#[derive(Debug, Clone)]
pub struct ConfirmationGate<A> {
    title: String,
    description: String,
    armed: Option<A>,
}

impl<A> ConfirmationGate<A> {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            armed: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// 打开：装载动作并置位可见性标志
    ///
    /// 已打开时重复调用会替换为新的动作。
    pub fn open(&mut self, visible: &mut bool, proceed: A) {
        self.armed = Some(proceed);
        *visible = true;
    }

    /// 关闭且不执行动作
    pub fn dismiss(&mut self, visible: &mut bool) {
        self.armed = None;
        *visible = false;
    }

    /// 确认：先关闭，再交出动作
    ///
    /// 每个打开周期最多交出一次；未打开（或已确认过）时返回 `None`。
    pub fn confirm(&mut self, visible: &mut bool) -> Option<A> {
        if !*visible {
            self.armed = None;
            return None;
        }
        *visible = false;
        self.armed.take()
    }

    /// 确认并执行动作
    ///
    /// 动作在门关闭之后运行，所以动作失败时门依然是关闭的，
    /// 错误原样返回给调用方。
    pub fn confirm_and_run<R>(
        &mut self,
        visible: &mut bool,
        run: impl FnOnce(A) -> R,
    ) -> Option<R> {
        self.confirm(visible).map(run)
    }

    /// 绑定到调用方的可见性标志，供视图层使用
    pub fn bind<'a>(&'a mut self, visible: &'a mut bool) -> GateBinding<'a, A> {
        GateBinding { gate: self, visible }
    }
}

/// 视图层绑定的确认界面接口
pub trait ConfirmationSurface {
    /// 确认要执行的动作
    type Action;

    fn is_open(&self) -> bool;

    /// 取消
    fn request_close(&mut self);

    /// 确认
    fn request_confirm(&mut self) -> Option<Self::Action>;
}

/// 门与外部可见性标志的临时绑定
pub struct GateBinding<'a, A> {
    gate: &'a mut ConfirmationGate<A>,
    visible: &'a mut bool,
}

impl<A> GateBinding<'_, A> {
    pub fn title(&self) -> &str {
        self.gate.title()
    }

    pub fn description(&self) -> &str {
        self.gate.description()
    }
}

impl<A> ConfirmationSurface for GateBinding<'_, A> {
    type Action = A;

    fn is_open(&self) -> bool {
        *self.visible
    }

    fn request_close(&mut self) {
        self.gate.dismiss(self.visible);
    }

    fn request_confirm(&mut self) -> Option<A> {
        self.gate.confirm(self.visible)
    }
}
