//! 导航外壳
//!
//! 抽屉（路由列表 + 登出入口）、响应式布局策略和经确认门保护的登出。
//! 当前路径始终从路由器读取，外壳自身不缓存。

use std::sync::Arc;

use futures::future::BoxFuture;

use crate::confirm::{ConfirmationGate, GateBinding};
use crate::error::{CoreError, CoreResult};
use crate::routes::{selected_route, RouteDescriptor, RouteRegistry};
use crate::traits::{Router, SessionService};

/// 窄屏断点（终端列数）
pub const NARROW_BREAKPOINT: u16 = 100;

/// 宽屏常驻抽屉宽度（终端列数）
pub const DRAWER_WIDTH: u16 = 24;

/// 登出确认框标题
pub const LOGOUT_TITLE: &str = "Are you sure";

/// 登出确认框描述
pub const LOGOUT_DESCRIPTION: &str = "Are you sure you want to log out?";

/// 确认登出后交给运行时执行的任务
pub type LogoutTask = BoxFuture<'static, CoreResult<()>>;

/// 导航状态
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationState {
    /// 窄屏下抽屉是否展开（宽屏下忽略）
    pub drawer_open_on_narrow_viewport: bool,
    /// 登出确认框是否打开
    pub is_logout_confirmation_open: bool,
}

/// 抽屉条目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerEntry<'a> {
    Route(&'a RouteDescriptor),
    Logout,
}

/// 导航外壳
pub struct NavigationShell {
    registry: RouteRegistry,
    router: Arc<dyn Router>,
    session: Arc<dyn SessionService>,
    gate: ConfirmationGate<LogoutTask>,
    state: NavigationState,
    viewport_width: u16,
    breakpoint: u16,
    /// 键盘光标（仅表示焦点，不参与高亮）
    cursor: usize,
}

impl NavigationShell {
    pub fn new(
        registry: RouteRegistry,
        router: Arc<dyn Router>,
        session: Arc<dyn SessionService>,
        viewport_width: u16,
    ) -> Self {
        let cursor = registry.position(&router.current_path()).unwrap_or(0);
        Self {
            registry,
            router,
            session,
            gate: ConfirmationGate::new(LOGOUT_TITLE, LOGOUT_DESCRIPTION),
            state: NavigationState::default(),
            viewport_width,
            breakpoint: NARROW_BREAKPOINT,
            cursor,
        }
    }

    /// 使用自定义断点（配置项）
    #[must_use]
    pub fn with_breakpoint(mut self, breakpoint: u16) -> Self {
        self.breakpoint = breakpoint;
        self
    }

    pub fn registry(&self) -> &RouteRegistry {
        &self.registry
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn viewport_width(&self) -> u16 {
        self.viewport_width
    }

    // ========== 响应式布局 ==========

    /// 记录实际视口宽度
    pub fn resize(&mut self, width: u16) {
        if self.viewport_width != width {
            log::debug!("Viewport resized: {} -> {width}", self.viewport_width);
            self.viewport_width = width;
        }
    }

    /// 当前是否窄屏（每次按宽度重新计算）
    pub fn is_narrow(&self) -> bool {
        self.viewport_width < self.breakpoint
    }

    /// 抽屉是否可见：宽屏常驻，窄屏取决于展开标志
    pub fn drawer_visible(&self) -> bool {
        !self.is_narrow() || self.state.drawer_open_on_narrow_viewport
    }

    /// 窄屏下切换抽屉，宽屏下无操作
    pub fn toggle_drawer(&mut self) {
        if self.is_narrow() {
            self.state.drawer_open_on_narrow_viewport = !self.state.drawer_open_on_narrow_viewport;
        }
    }

    // ========== 路由 ==========

    /// 当前路径（总是从路由器读取）
    pub fn active_path(&self) -> String {
        self.router.current_path()
    }

    /// 当前高亮的路由
    pub fn selected_route(&self) -> Option<&RouteDescriptor> {
        selected_route(&self.registry, &self.router.current_path())
    }

    /// 导航到注册表中的路由；窄屏下同时收起抽屉
    pub fn select_route(&mut self, path: &str) -> CoreResult<()> {
        let Some(position) = self.registry.position(path) else {
            return Err(CoreError::UnknownRoute(path.to_string()));
        };
        self.router.navigate(path);
        self.cursor = position;
        if self.is_narrow() {
            self.state.drawer_open_on_narrow_viewport = false;
        }
        Ok(())
    }

    // ========== 登出 ==========

    /// 打开登出确认框
    pub fn request_logout(&mut self) {
        let session = Arc::clone(&self.session);
        let task: LogoutTask = Box::pin(async move { session.terminate_session().await });
        self.gate.open(&mut self.state.is_logout_confirmation_open, task);
    }

    /// 取消登出
    pub fn dismiss_logout(&mut self) {
        self.gate.dismiss(&mut self.state.is_logout_confirmation_open);
    }

    /// 确认登出
    ///
    /// 关闭确认框并交出终止会话的任务；跳转到登录页由会话状态的观察者负责。
    pub fn confirm_logout(&mut self) -> Option<LogoutTask> {
        let task = self.gate.confirm(&mut self.state.is_logout_confirmation_open);
        if task.is_some() {
            log::info!("Logout confirmed");
        }
        task
    }

    pub fn is_logout_confirmation_open(&self) -> bool {
        self.state.is_logout_confirmation_open
    }

    /// 确认框绑定（视图层使用）
    pub fn logout_surface(&mut self) -> GateBinding<'_, LogoutTask> {
        self.gate.bind(&mut self.state.is_logout_confirmation_open)
    }

    // ========== 抽屉光标 ==========

    /// 抽屉条目：路由按显示顺序，最后是登出
    pub fn entries(&self) -> impl Iterator<Item = DrawerEntry<'_>> {
        self.registry
            .iter()
            .map(DrawerEntry::Route)
            .chain(std::iter::once(DrawerEntry::Logout))
    }

    pub fn entry_count(&self) -> usize {
        self.registry.len() + 1
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cursor_previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_next(&mut self) {
        if self.cursor + 1 < self.entry_count() {
            self.cursor += 1;
        }
    }

    pub fn cursor_first(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_last(&mut self) {
        self.cursor = self.entry_count() - 1;
    }

    /// 激活光标所在条目
    pub fn activate_cursor(&mut self) -> CoreResult<()> {
        match self.registry.routes().get(self.cursor).map(|route| route.path) {
            Some(path) => self.select_route(path),
            None => {
                self.request_logout();
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::{ITEMS, USERS};
    use crate::test_utils::RecordingSession;
    use crate::traits::MemoryRouter;

    fn shell(width: u16) -> (NavigationShell, Arc<MemoryRouter>, Arc<RecordingSession>) {
        let router = Arc::new(MemoryRouter::new("/"));
        let session = Arc::new(RecordingSession::new());
        let shell = NavigationShell::new(
            RouteRegistry::default_routes().unwrap(),
            router.clone(),
            session.clone(),
            width,
        );
        (shell, router, session)
    }

    #[test]
    fn initial_state_is_closed() {
        let (shell, _, _) = shell(80);
        assert_eq!(shell.state(), NavigationState::default());
        assert!(!shell.drawer_visible());
    }

    #[test]
    fn toggle_twice_restores_drawer() {
        let (mut shell, _, _) = shell(80);
        shell.toggle_drawer();
        assert!(shell.drawer_visible());
        shell.toggle_drawer();
        assert!(!shell.drawer_visible());
    }

    #[test]
    fn wide_viewport_keeps_drawer_permanent() {
        let (mut shell, _, _) = shell(140);
        assert!(!shell.is_narrow());
        assert!(shell.drawer_visible());

        shell.toggle_drawer();
        assert!(!shell.state().drawer_open_on_narrow_viewport);
        assert!(shell.drawer_visible());
    }

    #[test]
    fn resize_recomputes_mode() {
        let (mut shell, _, _) = shell(140);
        shell.resize(NARROW_BREAKPOINT - 1);
        assert!(shell.is_narrow());
        assert!(!shell.drawer_visible());
        shell.resize(NARROW_BREAKPOINT);
        assert!(!shell.is_narrow());
    }

    #[test]
    fn custom_breakpoint() {
        let (shell, _, _) = shell(90);
        let shell = shell.with_breakpoint(80);
        assert!(!shell.is_narrow());
    }

    #[test]
    fn select_route_on_narrow_closes_drawer() {
        let (mut shell, router, _) = shell(80);
        shell.toggle_drawer();

        shell.select_route("/users").unwrap();

        assert_eq!(router.current_path(), "/users");
        assert!(!shell.state().drawer_open_on_narrow_viewport);
        assert_eq!(shell.selected_route(), Some(&USERS));
    }

    #[test]
    fn select_unknown_route_is_rejected() {
        let (mut shell, router, _) = shell(80);
        let result = shell.select_route("/settings");
        assert_eq!(result, Err(CoreError::UnknownRoute("/settings".to_string())));
        assert_eq!(router.current_path(), "/");
    }

    #[test]
    fn highlight_follows_external_navigation() {
        let (shell, router, _) = shell(140);
        router.navigate("/items");
        assert_eq!(shell.active_path(), "/items");
        assert_eq!(shell.selected_route(), Some(&ITEMS));

        router.navigate("/login");
        assert_eq!(shell.selected_route(), None);
    }

    #[tokio::test]
    async fn confirmed_logout_terminates_once() {
        let (mut shell, router, session) = shell(140);
        router.navigate("/users");

        shell.request_logout();
        assert!(shell.is_logout_confirmation_open());
        assert_eq!(session.calls(), 0);

        let task = shell.confirm_logout().unwrap();
        assert!(!shell.is_logout_confirmation_open());
        task.await.unwrap();

        assert_eq!(session.calls(), 1);
        assert!(shell.confirm_logout().is_none());
        // 外壳本身不跳转
        assert_eq!(router.current_path(), "/users");
    }

    #[tokio::test]
    async fn dismissed_logout_never_terminates() {
        let (mut shell, _, session) = shell(140);
        shell.request_logout();
        shell.dismiss_logout();

        assert!(!shell.is_logout_confirmation_open());
        assert!(shell.confirm_logout().is_none());
        assert_eq!(session.calls(), 0);
    }

    #[tokio::test]
    async fn failed_logout_leaves_gate_closed() {
        let router = Arc::new(MemoryRouter::new("/"));
        let session = Arc::new(RecordingSession::failing("token store locked"));
        let mut shell = NavigationShell::new(
            RouteRegistry::default_routes().unwrap(),
            router,
            session.clone(),
            140,
        );

        shell.request_logout();
        let result = shell.confirm_logout().unwrap().await;

        assert!(matches!(result, Err(CoreError::Session(_))));
        assert!(!shell.is_logout_confirmation_open());
        assert_eq!(session.calls(), 1);
    }

    #[test]
    fn cursor_walks_routes_then_logout() {
        let (mut shell, router, _) = shell(140);
        assert_eq!(shell.cursor(), 0);

        shell.cursor_next();
        shell.activate_cursor().unwrap();
        assert_eq!(router.current_path(), "/users");

        shell.cursor_last();
        assert_eq!(shell.entries().nth(shell.cursor()), Some(DrawerEntry::Logout));
        shell.activate_cursor().unwrap();
        assert!(shell.is_logout_confirmation_open());

        shell.cursor_next();
        assert_eq!(shell.cursor(), shell.entry_count() - 1);
        shell.cursor_first();
        shell.cursor_previous();
        assert_eq!(shell.cursor(), 0);
    }

    #[test]
    fn surface_binding_closes_dialog() {
        use crate::confirm::ConfirmationSurface;

        let (mut shell, _, _) = shell(140);
        shell.request_logout();
        {
            let mut surface = shell.logout_surface();
            assert!(surface.is_open());
            surface.request_close();
        }
        assert!(!shell.is_logout_confirmation_open());
    }
}
