//! 抽屉更新逻辑

use super::{open_logout, sync_mounts, Effect};
use crate::message::NavigationMessage;
use crate::model::{App, FocusPanel};

/// 处理抽屉消息
pub fn update(app: &mut App, msg: NavigationMessage) -> Vec<Effect> {
    match msg {
        NavigationMessage::SelectPrevious => app.shell.cursor_previous(),
        NavigationMessage::SelectNext => app.shell.cursor_next(),
        NavigationMessage::SelectFirst => app.shell.cursor_first(),
        NavigationMessage::SelectLast => app.shell.cursor_last(),
        NavigationMessage::Confirm => return activate(app),
    }
    Vec::new()
}

fn activate(app: &mut App) -> Vec<Effect> {
    // 光标在最后一项（登出）
    if app.shell.cursor() >= app.shell.registry().len() {
        if app.session.is_authenticated() {
            open_logout(app);
        }
        return Vec::new();
    }

    if let Err(e) = app.shell.activate_cursor() {
        log::warn!("Drawer activation failed: {e}");
        app.set_status(e.to_string());
        return Vec::new();
    }

    app.clear_status();
    // 窄屏下选中路由后抽屉收起，焦点移到内容
    if !app.shell.drawer_visible() {
        app.focus = FocusPanel::Content;
    }
    sync_mounts(app)
}
