//! 抽屉组件
//!
//! 路由条目按注册顺序排列，最后一项是登出。
//! 高亮跟随路由器的当前路径；`▶` 标记的是键盘光标。

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};
use shamchiroq_core::navigation::DrawerEntry;

use crate::i18n::{route_label, t};
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染抽屉
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let is_focused = app.focus.is_drawer();
    let highlighted = app.shell.selected_route().map(|route| route.path);

    let block = Block::default()
        .title(format!(" {} ", texts.nav.title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(is_focused));

    let items: Vec<ListItem> = app
        .shell
        .entries()
        .enumerate()
        .map(|(i, entry)| {
            let marker = if is_focused && i == app.shell.cursor() { "▶ " } else { "  " };
            let (icon, label, style) = match entry {
                DrawerEntry::Route(route) => {
                    let style = if Some(route.path) == highlighted {
                        Styles::selected()
                    } else {
                        Style::default().fg(c.fg)
                    };
                    (route.icon, route_label(route.path).unwrap_or(route.title), style)
                }
                DrawerEntry::Logout => ("⏻", texts.nav.logout, Style::default().fg(c.warning)),
            };
            ListItem::new(Line::from(Span::styled(format!("{marker}{icon} {label}"), style)))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
