//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::{App, Modal};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 宽度变化影响窄屏判断
        Event::Resize(width, _) => AppMessage::Resize(width),
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat（Windows 终端会重复上报）
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 登出确认框优先
    if app.shell.is_logout_confirmation_open() {
        return handle_logout_keys(key);
    }

    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }
    if DefaultKeymap::LOGOUT.matches(&key) {
        return AppMessage::RequestLogout;
    }
    if DefaultKeymap::TOGGLE_DRAWER.matches(&key) {
        return AppMessage::ToggleDrawer;
    }
    if DefaultKeymap::FOCUS_SWITCH.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    // 抽屉不可见时焦点只能在内容面板
    if app.focus.is_drawer() && app.shell.drawer_visible() {
        handle_drawer_keys(key)
    } else {
        handle_content_keys(key)
    }
}

/// 处理抽屉的按键
fn handle_drawer_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::FOCUS_RIGHT.matches(&key) {
        return AppMessage::ToggleFocus;
    }
    match key.code {
        // ↑ 或 k: 上移
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }
        // ↓ 或 j: 下移
        KeyCode::Down | KeyCode::Char('j') => {
            AppMessage::Navigation(NavigationMessage::SelectNext)
        }
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

/// 处理内容面板的按键
fn handle_content_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::FOCUS_LEFT.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    // 翻页
    if DefaultKeymap::NEXT_PAGE.matches(&key) || DefaultKeymap::NEXT_PAGE_ALT.matches(&key) {
        return AppMessage::Content(ContentMessage::NextPage);
    }
    if DefaultKeymap::PREVIOUS_PAGE.matches(&key)
        || DefaultKeymap::PREVIOUS_PAGE_ALT.matches(&key)
    {
        return AppMessage::Content(ContentMessage::PreviousPage);
    }
    if DefaultKeymap::FIRST_PAGE.matches(&key) {
        return AppMessage::Content(ContentMessage::FirstPage);
    }
    if DefaultKeymap::LAST_PAGE.matches(&key) {
        return AppMessage::Content(ContentMessage::LastPage);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Enter => AppMessage::Content(ContentMessage::Activate),
        _ => AppMessage::Noop,
    }
}

/// 处理登出确认框的按键
fn handle_logout_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Esc => AppMessage::Modal(ModalMessage::Close),
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
        KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
            AppMessage::Modal(ModalMessage::ToggleChoice)
        }
        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    if key.code == KeyCode::Esc {
        return AppMessage::Modal(ModalMessage::Close);
    }

    match &app.modal.active {
        Some(Modal::SignIn { .. }) => match key.code {
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
            KeyCode::Backspace => AppMessage::Modal(ModalMessage::Backspace),
            KeyCode::Char(c)
                if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                AppMessage::Modal(ModalMessage::Input(c))
            }
            _ => AppMessage::Noop,
        },
        Some(Modal::Help | Modal::Error { .. }) => match key.code {
            KeyCode::Enter | KeyCode::Char('q') => AppMessage::Modal(ModalMessage::Close),
            _ => AppMessage::Noop,
        },
        None => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FocusPanel;
    use crate::test_support::harness;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn press_with(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn resize_reports_width() {
        let h = harness("/", 120, 0);
        assert!(matches!(
            handle_event(Event::Resize(80, 24), &h.app),
            AppMessage::Resize(80)
        ));
    }

    #[test]
    fn global_shortcuts() {
        let h = harness("/", 120, 0);
        assert!(matches!(
            handle_event(press_with(KeyCode::Char('c'), KeyModifiers::CONTROL), &h.app),
            AppMessage::Quit
        ));
        assert!(matches!(
            handle_event(press_with(KeyCode::Char('?'), KeyModifiers::SHIFT), &h.app),
            AppMessage::ShowHelp
        ));
        assert!(matches!(
            handle_event(press_with(KeyCode::Char('l'), KeyModifiers::ALT), &h.app),
            AppMessage::RequestLogout
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('m')), &h.app),
            AppMessage::ToggleDrawer
        ));
    }

    #[test]
    fn arrows_follow_focus() {
        let mut h = harness("/", 120, 0);
        assert!(matches!(
            handle_event(press(KeyCode::Down), &h.app),
            AppMessage::Navigation(NavigationMessage::SelectNext)
        ));

        h.app.focus = FocusPanel::Content;
        assert!(matches!(
            handle_event(press(KeyCode::Down), &h.app),
            AppMessage::Content(ContentMessage::SelectNext)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::PageDown), &h.app),
            AppMessage::Content(ContentMessage::NextPage)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Home), &h.app),
            AppMessage::Content(ContentMessage::FirstPage)
        ));
    }

    #[test]
    fn hidden_drawer_routes_keys_to_content() {
        let h = harness("/", 80, 0);
        assert!(h.app.focus.is_drawer());
        assert!(matches!(
            handle_event(press(KeyCode::Char('n')), &h.app),
            AppMessage::Content(ContentMessage::NextPage)
        ));
    }

    #[test]
    fn logout_confirmation_captures_keys() {
        let mut h = harness("/", 120, 0);
        h.app.shell.request_logout();

        assert!(matches!(
            handle_event(press(KeyCode::Char('n')), &h.app),
            AppMessage::Noop
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Esc), &h.app),
            AppMessage::Modal(ModalMessage::Close)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Right), &h.app),
            AppMessage::Modal(ModalMessage::ToggleChoice)
        ));
    }

    #[test]
    fn sign_in_modal_takes_text_input() {
        let mut h = harness("/", 120, 0);
        h.app.modal.show_sign_in();

        assert!(matches!(
            handle_event(press(KeyCode::Char('m')), &h.app),
            AppMessage::Modal(ModalMessage::Input('m'))
        ));
    }

    #[test]
    fn release_events_are_ignored() {
        let h = harness("/", 120, 0);
        let mut key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert!(matches!(handle_event(Event::Key(key), &h.app), AppMessage::Noop));
    }
}
