//! 弹窗组件
//!
//! 登出确认框的可见性来自导航外壳，其余弹窗来自 `ModalState`。

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, LogoutChoice, Modal};
use crate::view::theme::colors;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    if app.shell.is_logout_confirmation_open() {
        render_logout(frame, app.modal.logout_choice);
        return;
    }

    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::SignIn {
            token,
            error,
            submitting,
        } => render_sign_in(frame, token, error.as_deref(), *submitting),
        Modal::Help => render_help(frame),
        Modal::Error { title, message } => render_error(frame, title, message),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 弹窗边框内留出左右各 2 列、上下各 1 行
fn padded(area: Rect) -> Rect {
    Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    )
}

fn frame_block(frame: &mut Frame, area: Rect, title: &str, border: Color) {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(colors().overlay_bg));
    frame.render_widget(block, area);
}

/// 渲染登出确认框
fn render_logout(frame: &mut Frame, choice: LogoutChoice) {
    let texts = t();
    let area = centered_rect(44, 8, frame.area());
    frame_block(frame, area, texts.modal.logout.title, Color::Red);

    let cancel_style = if choice == LogoutChoice::Cancel {
        Style::default().fg(Color::Black).bg(Color::White)
    } else {
        Style::default().fg(Color::White)
    };
    let confirm_style = if choice == LogoutChoice::Confirm {
        Style::default().fg(Color::Black).bg(Color::Red)
    } else {
        Style::default().fg(Color::Red)
    };

    let lines = vec![
        Line::from(""),
        Line::styled(
            texts.modal.logout.description,
            Style::default().fg(Color::White),
        ),
        Line::from(""),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!(" {} ", texts.common.cancel), cancel_style),
            Span::raw("    "),
            Span::styled(format!(" {} ", texts.modal.logout.confirm), confirm_style),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), padded(area));
}

/// 渲染登录弹窗（token 以掩码显示）
fn render_sign_in(frame: &mut Frame, token: &str, error: Option<&str>, submitting: bool) {
    let texts = t();
    let c = colors();
    let area = centered_rect(56, 10, frame.area());
    frame_block(frame, area, texts.modal.sign_in.title, c.accent);

    let masked: String = "•".repeat(token.chars().count().min(40));
    let status = if submitting {
        Line::styled(texts.modal.sign_in.submitting, Style::default().fg(c.warning))
    } else if let Some(error) = error {
        Line::styled(error.to_string(), Style::default().fg(c.error))
    } else {
        Line::from("")
    };

    let lines = vec![
        Line::styled(
            texts.modal.sign_in.token_label,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Line::from(vec![
            Span::styled(format!("{masked}▏"), Style::default().fg(Color::Yellow)),
        ]),
        Line::styled(texts.modal.sign_in.token_hint, Style::default().fg(c.muted)),
        Line::from(""),
        status,
    ];
    frame.render_widget(Paragraph::new(lines), padded(area));
}

/// 渲染错误弹窗
fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let area = centered_rect(50, 8, frame.area());
    frame_block(frame, area, title, Color::Red);

    let lines = vec![
        Line::styled(message, Style::default().fg(Color::White)),
        Line::from(""),
        Line::styled(t().modal.error.close_hint, Style::default().fg(Color::DarkGray)),
    ];
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }),
        padded(area),
    );
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let texts = t();
    let keys = &texts.hints.keys;
    let help = &texts.help;
    let area = centered_rect(56, 20, frame.area());
    frame_block(frame, area, help.title, Color::Cyan);

    let heading = |text: &'static str| {
        Line::styled(text, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    };
    let entry = |key: &str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<10}"), Style::default().fg(Color::Yellow)),
            Span::styled(desc, Style::default().fg(Color::White)),
        ])
    };

    let lines = vec![
        heading(help.global),
        entry(&format!("{}/{}", keys.tab, keys.arrows_lr), help.switch_panel),
        entry(&format!("{}/jk", keys.arrows_ud), help.move_cursor),
        entry(keys.enter, help.open),
        entry(keys.menu, help.toggle_menu),
        entry(keys.logout, help.logout),
        entry(keys.quit, help.quit),
        Line::from(""),
        heading(help.lists),
        entry(&format!("{} PgDn/PgUp", keys.paging), help.next_previous_page),
        entry("Home/End", help.first_last_page),
        entry(keys.refresh, help.refresh),
        Line::from(""),
        Line::styled(help.close_hint, Style::default().fg(Color::DarkGray)),
    ];
    frame.render_widget(Paragraph::new(lines), padded(area));
}
