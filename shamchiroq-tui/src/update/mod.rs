//! Update 层：状态更新逻辑
//!
//! 唯一可以修改 Model 的地方。每条消息同步地修改 `App`，
//! 需要 await 的工作（分页请求、登出、登录）以 `Effect` 返回给主循环，
//! 由 Backend 执行；结果再以 `AppMessage::Backend` 回到这里。
//!
//! 模块结构：
//!     mod effect;     // 副作用
//!     mod navigation; // 抽屉子消息
//!     mod content;    // 列表页子消息
//!     mod modal;      // 弹窗子消息
//!
//! 列表挂载由 `sync_mounts` 统一维护：当前页面对应的列表保持挂载，
//! 其余列表全部卸载（卸载后到达的结果会被控制器丢弃）。

mod content;
mod effect;
mod modal;
mod navigation;

pub use effect::Effect;

use shamchiroq_core::{SessionState, SettleOutcome};

use crate::i18n::t;
use crate::message::{AppMessage, BackendEvent};
use crate::model::domain::ResourceKind;
use crate::model::{App, FocusPanel, Modal, PageAction};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) -> Vec<Effect> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            Vec::new()
        }

        AppMessage::ToggleFocus => {
            // 有弹窗时不切换焦点
            if !app.modal.is_open() && !app.shell.is_logout_confirmation_open() {
                app.focus = app.focus.toggle();
            }
            Vec::new()
        }

        AppMessage::ToggleDrawer => {
            app.shell.toggle_drawer();
            app.focus = if app.shell.drawer_visible() {
                FocusPanel::Drawer
            } else {
                FocusPanel::Content
            };
            Vec::new()
        }

        AppMessage::Navigation(nav_msg) => navigation::update(app, nav_msg),

        AppMessage::Content(content_msg) => content::update(app, content_msg),

        AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),

        AppMessage::Refresh => app
            .current_page()
            .resource()
            .and_then(|kind| app.resources.page(kind, PageAction::Refresh))
            .map(Effect::Fetch)
            .into_iter()
            .collect(),

        AppMessage::ShowHelp => {
            app.modal.show_help();
            Vec::new()
        }

        AppMessage::RequestLogout => {
            if app.session.is_authenticated() {
                open_logout(app);
            }
            Vec::new()
        }

        AppMessage::Resize(width) => {
            app.shell.resize(width);
            if !app.shell.drawer_visible() {
                app.focus = FocusPanel::Content;
            }
            Vec::new()
        }

        AppMessage::RouteChanged => sync_mounts(app),

        AppMessage::SessionChanged(state) => session_changed(app, state),

        AppMessage::Backend(event) => backend_event(app, event),

        AppMessage::Noop => Vec::new(),
    }
}

/// 让挂载状态与当前页面一致
///
/// 幂等：当前列表已挂载时不会重新请求。
pub(crate) fn sync_mounts(app: &mut App) -> Vec<Effect> {
    let active = app.current_page().resource();
    for kind in ResourceKind::ALL {
        if Some(kind) != active && app.resources.is_mounted(kind) {
            app.resources.unmount(kind);
        }
    }
    match active {
        Some(kind) if !app.resources.is_mounted(kind) => {
            vec![Effect::Fetch(app.resources.mount(kind))]
        }
        _ => Vec::new(),
    }
}

/// 打开登出确认框（焦点默认在“取消”）
pub(crate) fn open_logout(app: &mut App) {
    app.modal.reset_logout_choice();
    app.shell.request_logout();
}

fn session_changed(app: &mut App, state: SessionState) -> Vec<Effect> {
    let was_authenticated = app.session.is_authenticated();
    app.session = state;

    if app.session.is_authenticated() {
        if !was_authenticated {
            if matches!(app.modal.active, Some(Modal::SignIn { .. })) {
                app.modal.close();
            }
            app.set_status(t().status_bar.signed_in);
        }
    } else {
        app.shell.dismiss_logout();
        if was_authenticated {
            app.set_status(t().status_bar.signed_out);
        }
    }
    sync_mounts(app)
}

fn backend_event(app: &mut App, event: BackendEvent) -> Vec<Effect> {
    match event {
        BackendEvent::PageSettled(page) => {
            let (kind, outcome) = app.resources.settle(page);
            if outcome == SettleOutcome::Failed {
                let reason = app.resources.last_error(kind).unwrap_or_default();
                let message = format!("{}: {reason}", t().status_bar.fetch_failed);
                app.set_status(message);
            }
        }
        BackendEvent::LogoutFinished(Ok(())) => {}
        BackendEvent::LogoutFinished(Err(e)) => {
            app.set_status(format!("{}: {e}", t().status_bar.logout_failed));
        }
        BackendEvent::SignInFinished(Ok(())) => {
            if matches!(app.modal.active, Some(Modal::SignIn { .. })) {
                app.modal.close();
            }
        }
        BackendEvent::SignInFinished(Err(e)) => {
            if let Some(Modal::SignIn {
                error, submitting, ..
            }) = &mut app.modal.active
            {
                *error = Some(e.to_string());
                *submitting = false;
            }
        }
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use shamchiroq_core::traits::Router;
    use shamchiroq_core::{CoreError, ListStatus};

    use super::*;
    use crate::message::{ContentMessage, ModalMessage, NavigationMessage};
    use crate::model::{LogoutChoice, Page};
    use crate::test_support::harness;

    /// 执行所有分页请求并把结果送回 update
    fn settle_all(app: &mut App, effects: Vec<Effect>) {
        for effect in effects {
            if let Effect::Fetch(fetch) = effect {
                let settled = tokio_test::block_on(fetch.run());
                update(app, AppMessage::Backend(BackendEvent::PageSettled(settled)));
            }
        }
    }

    fn fetch_count(effects: &[Effect]) -> usize {
        effects
            .iter()
            .filter(|effect| matches!(effect, Effect::Fetch(_)))
            .count()
    }

    #[test]
    fn initial_sync_mounts_only_the_active_list() {
        let mut h = harness("/users", 120, 0);
        let effects = sync_mounts(&mut h.app);

        assert_eq!(fetch_count(&effects), 1);
        assert!(h.app.resources.is_mounted(ResourceKind::Users));
        assert!(!h.app.resources.is_mounted(ResourceKind::Reports));

        // 再次同步不会重复请求
        assert!(sync_mounts(&mut h.app).is_empty());
    }

    #[test]
    fn route_change_swaps_mounted_list() {
        let mut h = harness("/users", 120, 0);
        let effects = sync_mounts(&mut h.app);
        settle_all(&mut h.app, effects);

        h.router.navigate("/items");
        let effects = update(&mut h.app, AppMessage::RouteChanged);

        assert_eq!(fetch_count(&effects), 1);
        assert!(!h.app.resources.is_mounted(ResourceKind::Users));
        assert!(h.app.resources.is_mounted(ResourceKind::Items));
    }

    #[test]
    fn drawer_confirm_navigates_and_mounts() {
        let mut h = harness("/", 120, 0);
        let effects = sync_mounts(&mut h.app);
        settle_all(&mut h.app, effects);

        update(&mut h.app, AppMessage::Navigation(NavigationMessage::SelectNext));
        let effects = update(&mut h.app, AppMessage::Navigation(NavigationMessage::Confirm));

        assert_eq!(h.router.current_path(), "/users");
        assert_eq!(h.app.current_page(), Page::List(ResourceKind::Users));
        assert_eq!(fetch_count(&effects), 1);
    }

    #[test]
    fn narrow_selection_closes_drawer_and_focuses_content() {
        let mut h = harness("/", 80, 0);
        update(&mut h.app, AppMessage::ToggleDrawer);
        assert!(h.app.shell.drawer_visible());

        update(&mut h.app, AppMessage::Navigation(NavigationMessage::SelectNext));
        update(&mut h.app, AppMessage::Navigation(NavigationMessage::Confirm));

        assert!(!h.app.shell.drawer_visible());
        assert_eq!(h.app.focus, FocusPanel::Content);
    }

    #[test]
    fn next_page_fetches_and_clamps_at_the_end() {
        let mut h = harness("/blocks", 120, 25);
        let effects = sync_mounts(&mut h.app);
        settle_all(&mut h.app, effects);
        assert_eq!(h.app.resources.blocks.controller.page_count(), 3);

        let effects = update(&mut h.app, AppMessage::Content(ContentMessage::LastPage));
        settle_all(&mut h.app, effects);
        assert_eq!(h.app.resources.blocks.controller.page_index(), 2);

        let effects = update(&mut h.app, AppMessage::Content(ContentMessage::NextPage));
        assert!(effects.is_empty());
    }

    #[test]
    fn empty_result_is_reported_as_empty() {
        let mut h = harness("/notifications", 120, 0);
        let effects = sync_mounts(&mut h.app);
        settle_all(&mut h.app, effects);
        assert_eq!(
            h.app.resources.notifications.controller.status(),
            ListStatus::Empty
        );
    }

    #[test]
    fn logout_requires_confirmation() {
        let mut h = harness("/", 120, 0);

        update(&mut h.app, AppMessage::RequestLogout);
        assert!(h.app.shell.is_logout_confirmation_open());
        assert_eq!(h.app.modal.logout_choice, LogoutChoice::Cancel);

        // 默认焦点是取消
        let effects = update(&mut h.app, AppMessage::Modal(ModalMessage::Confirm));
        assert!(effects.is_empty());
        assert!(!h.app.shell.is_logout_confirmation_open());
        assert_eq!(h.session.calls(), 0);
    }

    #[test]
    fn confirmed_logout_runs_session_termination_once() {
        let mut h = harness("/", 120, 0);

        update(&mut h.app, AppMessage::RequestLogout);
        update(&mut h.app, AppMessage::Modal(ModalMessage::ToggleChoice));
        let effects = update(&mut h.app, AppMessage::Modal(ModalMessage::Confirm));

        assert!(!h.app.shell.is_logout_confirmation_open());
        assert_eq!(effects.len(), 1);
        for effect in effects {
            if let Effect::Logout(task) = effect {
                assert!(tokio_test::block_on(task).is_ok());
            }
        }
        assert_eq!(h.session.calls(), 1);

        // 确认框已关闭，再次确认不会产生新的登出
        assert!(update(&mut h.app, AppMessage::Modal(ModalMessage::Confirm)).is_empty());
    }

    #[test]
    fn escape_dismisses_logout() {
        let mut h = harness("/", 120, 0);
        update(&mut h.app, AppMessage::RequestLogout);
        update(&mut h.app, AppMessage::Modal(ModalMessage::Close));

        assert!(!h.app.shell.is_logout_confirmation_open());
        assert_eq!(h.session.calls(), 0);
    }

    #[test]
    fn failed_logout_shows_status() {
        let mut h = harness("/", 120, 0);
        update(
            &mut h.app,
            AppMessage::Backend(BackendEvent::LogoutFinished(Err(CoreError::Session(
                "keyring locked".to_string(),
            )))),
        );
        let status = h.app.status_message.clone().unwrap_or_default();
        assert!(status.contains("keyring locked"));
    }

    #[test]
    fn signing_out_unmounts_lists() {
        let mut h = harness("/users", 120, 0);
        let effects = sync_mounts(&mut h.app);
        settle_all(&mut h.app, effects);

        let effects = update(
            &mut h.app,
            AppMessage::SessionChanged(SessionState::Unauthenticated),
        );

        assert!(effects.is_empty());
        assert_eq!(h.app.current_page(), Page::SignedOut);
        assert!(!h.app.resources.is_mounted(ResourceKind::Users));
    }

    #[test]
    fn sign_in_flow_submits_trimmed_token() {
        let mut h = harness("/", 120, 0);
        update(
            &mut h.app,
            AppMessage::SessionChanged(SessionState::Unauthenticated),
        );
        update(&mut h.app, AppMessage::Content(ContentMessage::Activate));

        let effects = update(&mut h.app, AppMessage::Modal(ModalMessage::Confirm));
        assert!(effects.is_empty());
        assert!(matches!(
            &h.app.modal.active,
            Some(Modal::SignIn { error: Some(_), .. })
        ));

        for c in " abc ".chars() {
            update(&mut h.app, AppMessage::Modal(ModalMessage::Input(c)));
        }
        let effects = update(&mut h.app, AppMessage::Modal(ModalMessage::Confirm));
        assert!(matches!(effects.as_slice(), [Effect::SignIn(token)] if token == "abc"));

        let effects = update(
            &mut h.app,
            AppMessage::SessionChanged(SessionState::Authenticated {
                token: "abc".to_string(),
            }),
        );
        assert!(!h.app.modal.is_open());
        assert_eq!(fetch_count(&effects), 1);
    }
}
