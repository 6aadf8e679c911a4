//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**：所有弹窗（Modal）的内容都放在 modal 下
//! 3. **列表页内容归 `lists.*`**：每种资源一组列名和空状态文本
//! 4. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 5. **键盘提示归 `hints.*`**：按键名称和操作提示

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 抽屉导航文本
    pub nav: NavTexts,
    /// 列表页文本
    pub lists: ListTexts,
    /// 未登录页面文本
    pub signed_out: SignedOutTexts,
    /// 弹窗文本（所有弹窗的内容）
    pub modal: ModalTexts,
    /// 状态栏文本
    pub status_bar: StatusBarTexts,
    /// 帮助弹窗文本
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub cancel: &'static str,
    pub loading: &'static str,
    pub page_not_found: &'static str,
}

/// 键盘提示
pub struct HintTexts {
    /// 按键名称
    pub keys: HintKeys,
    /// 动作词
    pub actions: HintActions,
}

pub struct HintKeys {
    pub arrows_lr: &'static str,
    pub arrows_ud: &'static str,
    pub enter: &'static str,
    pub esc: &'static str,
    pub tab: &'static str,
    pub menu: &'static str,
    pub paging: &'static str,
    pub refresh: &'static str,
    pub logout: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}

pub struct HintActions {
    pub switch_panel: &'static str,
    pub move_cursor: &'static str,
    pub open: &'static str,
    pub menu: &'static str,
    pub page: &'static str,
    pub refresh: &'static str,
    pub sign_in: &'static str,
    pub logout: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
    pub cancel: &'static str,
    pub submit: &'static str,
}

// ============================================================================
// 导航
// ============================================================================

/// 抽屉导航文本（按路由路径取标签）
pub struct NavTexts {
    pub title: &'static str,
    pub reports: &'static str,
    pub users: &'static str,
    pub items: &'static str,
    pub blocks: &'static str,
    pub notifications: &'static str,
    pub logout: &'static str,
}

// ============================================================================
// 列表页
// ============================================================================

pub struct ListTexts {
    /// 分页器：`Page {page} / {pages}`
    pub page: &'static str,
    pub rows: &'static str,
    pub refreshing: &'static str,
    /// 从未取到数据且请求失败
    pub unavailable: &'static str,
    pub unavailable_hint: &'static str,
    pub reports: ResourceTexts,
    pub users: ResourceTexts,
    pub items: ResourceTexts,
    pub blocks: ResourceTexts,
    pub notifications: ResourceTexts,
}

/// 单个资源列表的文本
pub struct ResourceTexts {
    pub columns: &'static [&'static str],
    pub empty: &'static str,
}

// ============================================================================
// 未登录
// ============================================================================

pub struct SignedOutTexts {
    pub title: &'static str,
    pub message: &'static str,
    pub hint: &'static str,
}

// ============================================================================
// 弹窗
// ============================================================================

pub struct ModalTexts {
    pub logout: LogoutModalTexts,
    pub sign_in: SignInModalTexts,
    pub error: ErrorModalTexts,
}

pub struct LogoutModalTexts {
    pub title: &'static str,
    pub description: &'static str,
    pub confirm: &'static str,
}

pub struct SignInModalTexts {
    pub title: &'static str,
    pub token_label: &'static str,
    pub token_hint: &'static str,
    pub submitting: &'static str,
    pub empty_token: &'static str,
}

pub struct ErrorModalTexts {
    pub title: &'static str,
    pub close_hint: &'static str,
}

// ============================================================================
// 状态栏
// ============================================================================

pub struct StatusBarTexts {
    pub signed_in: &'static str,
    pub signed_out: &'static str,
    pub logout_failed: &'static str,
    pub fetch_failed: &'static str,
}

// ============================================================================
// 帮助
// ============================================================================

pub struct HelpTexts {
    pub title: &'static str,
    pub global: &'static str,
    pub lists: &'static str,
    pub switch_panel: &'static str,
    pub move_cursor: &'static str,
    pub open: &'static str,
    pub toggle_menu: &'static str,
    pub next_previous_page: &'static str,
    pub first_last_page: &'static str,
    pub refresh: &'static str,
    pub logout: &'static str,
    pub quit: &'static str,
    pub close_hint: &'static str,
}
