//! 主布局渲染
//!
//! 宽屏：抽屉常驻左侧固定宽度一栏。
//! 窄屏：内容占满宽度，抽屉展开时以浮层覆盖在内容左侧。

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use shamchiroq_core::navigation::DRAWER_WIDTH;

use crate::i18n::{route_label, t};
use crate::model::{App, Page};

use super::components;
use super::pages;
use super::theme::Styles;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    let title_area = main_layout[0];
    let content_area = main_layout[1];
    let status_area = main_layout[2];

    render_title_bar(app, frame, title_area);

    if app.shell.is_narrow() {
        render_page_content(app, frame, content_area);
        if app.shell.drawer_visible() {
            let overlay = Rect {
                width: DRAWER_WIDTH.min(content_area.width),
                ..content_area
            };
            frame.render_widget(Clear, overlay);
            components::drawer::render(app, frame, overlay);
        }
    } else {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(DRAWER_WIDTH), Constraint::Min(1)])
            .split(content_area);
        components::drawer::render(app, frame, columns[0]);
        render_page_content(app, frame, columns[1]);
    }

    components::statusbar::render(app, frame, status_area);

    // 弹窗在最上层
    components::modal::render(app, frame);
}

/// 渲染标题栏：窄屏下带菜单按键提示
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let mut spans = Vec::new();
    if app.shell.is_narrow() {
        spans.push(Span::styled(format!(" [{}] ", texts.hints.keys.menu), Styles::hint_key()));
    }
    spans.push(Span::raw(format!(
        " {} v{}",
        texts.common.app_name,
        env!("CARGO_PKG_VERSION")
    )));
    frame.render_widget(Paragraph::new(Line::from(spans)).style(Styles::bar()), area);
}

/// 根据当前页面渲染内容
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let page = app.current_page();

    let page_title = match page {
        Page::SignedOut => texts.signed_out.title,
        Page::List(kind) => route_label(kind.path()).unwrap_or_default(),
        Page::NotFound => texts.common.page_not_found,
    };

    let block = Block::default()
        .title(format!(" {page_title} "))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_content() || !app.shell.drawer_visible()));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    match page {
        Page::SignedOut => pages::signed_out::render(frame, inner_area),
        Page::List(kind) => pages::resource_list::render(app, kind, frame, inner_area),
        Page::NotFound => {
            let line = Line::styled(format!("  {}", texts.common.page_not_found), Styles::muted());
            frame.render_widget(Paragraph::new(vec![Line::from(""), line]), inner_area);
        }
    }
}
