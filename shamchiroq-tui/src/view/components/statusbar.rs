//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, FocusPanel, Modal, Page};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 状态消息显示在提示之后
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::bar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let keys = &t().hints.keys;
    let actions = &t().hints.actions;
    let mut hints = Vec::new();

    if app.shell.is_logout_confirmation_open() {
        hints.push((keys.arrows_lr, actions.move_cursor));
        hints.push((keys.enter, actions.open));
        hints.push((keys.esc, actions.cancel));
        return hints;
    }
    if let Some(modal) = &app.modal.active {
        if matches!(modal, Modal::SignIn { .. }) {
            hints.push((keys.enter, actions.submit));
        }
        hints.push((keys.esc, actions.cancel));
        return hints;
    }

    hints.push((keys.tab, actions.switch_panel));
    if app.shell.is_narrow() {
        hints.push((keys.menu, actions.menu));
    }

    let drawer_keys = app.focus == FocusPanel::Drawer && app.shell.drawer_visible();
    if drawer_keys {
        hints.push((keys.arrows_ud, actions.move_cursor));
        hints.push((keys.enter, actions.open));
    } else {
        match app.current_page() {
            Page::List(_) => {
                hints.push((keys.arrows_ud, actions.move_cursor));
                hints.push((keys.paging, actions.page));
                hints.push((keys.refresh, actions.refresh));
            }
            Page::SignedOut => hints.push((keys.enter, actions.sign_in)),
            Page::NotFound => {}
        }
    }

    if app.session.is_authenticated() {
        hints.push((keys.logout, actions.logout));
    }
    hints.push((keys.help, actions.help));
    hints.push((keys.quit, actions.quit));
    hints
}
