//! 资源列表页面视图
//!
//! 表格 + 底部分页器。表格按列等分宽度，单元格按显示宽度截断。

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};
use shamchiroq_core::types::{Block, Item, Notification, Report, User};
use shamchiroq_core::ListStatus;

use crate::i18n::t;
use crate::model::domain::{ListResource, ResourceKind};
use crate::model::App;
use crate::util::truncate;
use crate::view::theme::{colors, Styles};

/// 渲染指定资源的列表页
pub fn render(app: &App, kind: ResourceKind, frame: &mut Frame, area: Rect) {
    match kind {
        ResourceKind::Reports => render_list::<Report>(app, frame, area),
        ResourceKind::Users => render_list::<User>(app, frame, area),
        ResourceKind::Items => render_list::<Item>(app, frame, area),
        ResourceKind::Blocks => render_list::<Block>(app, frame, area),
        ResourceKind::Notifications => render_list::<Notification>(app, frame, area),
    }
}

fn render_list<T: ListResource>(app: &App, frame: &mut Frame, area: Rect) {
    let list = T::list(&app.resources);
    let controller = &list.controller;
    let texts = t();

    match controller.status() {
        // 有数据时（包括刷新中）才显示分页器；空列表只显示空状态
        ListStatus::Ready => {
            let [body, pager] =
                Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);
            render_table(
                controller.items(),
                list.selected,
                app.focus.is_content(),
                frame,
                body,
            );
            render_pager(
                frame,
                pager,
                controller.page_index(),
                controller.page_count(),
                controller.total_row_count(),
                controller.is_loading(),
            );
        }
        ListStatus::Loading => render_message(frame, area, texts.common.loading, None),
        ListStatus::Empty => render_message(frame, area, T::KIND.texts().empty, None),
        ListStatus::Unavailable => render_message(
            frame,
            area,
            texts.lists.unavailable,
            controller.last_error(),
        ),
    }
}

fn render_table<T: ListResource>(
    items: &[T],
    selected: usize,
    focused: bool,
    frame: &mut Frame,
    area: Rect,
) {
    let c = colors();
    let columns = T::KIND.texts().columns;
    let count = u32::try_from(columns.len()).unwrap_or(1).max(1);
    let cell_width = usize::from(area.width) / columns.len().max(1);

    let header = Row::new(columns.iter().map(|name| Cell::from(*name)))
        .style(Style::default().fg(c.accent))
        .bottom_margin(1);

    let rows = items.iter().map(|item| {
        Row::new(
            item.cells()
                .into_iter()
                .map(|cell| Cell::from(truncate(&cell, cell_width.saturating_sub(1)))),
        )
        .style(Style::default().fg(c.fg))
    });

    let widths = columns.iter().map(|_| Constraint::Ratio(1, count));
    let table = Table::new(rows, widths)
        .header(header)
        .row_highlight_style(if focused { Styles::selected() } else { Style::default() });

    let mut state = TableState::default();
    state.select(Some(selected));
    frame.render_stateful_widget(table, area, &mut state);
}

fn render_message(frame: &mut Frame, area: Rect, message: &str, detail: Option<&str>) {
    let mut content = vec![
        Line::from(""),
        Line::styled(format!("  {message}"), Styles::muted()),
    ];
    if let Some(detail) = detail {
        content.push(Line::from(""));
        content.push(Line::styled(format!("  {detail}"), Style::default().fg(colors().error)));
        content.push(Line::styled(
            format!("  {}", t().lists.unavailable_hint),
            Styles::muted(),
        ));
    }
    frame.render_widget(Paragraph::new(content), area);
}

fn render_pager(
    frame: &mut Frame,
    area: Rect,
    page_index: u32,
    page_count: u64,
    total_rows: u64,
    is_loading: bool,
) {
    let lists = &t().lists;
    let mut spans = vec![Span::styled(
        format!(
            " {} {} / {} · {total_rows} {}",
            lists.page,
            page_index + 1,
            page_count,
            lists.rows
        ),
        Styles::muted(),
    )];
    if is_loading {
        spans.push(Span::styled(
            format!("  {}", lists.refreshing),
            Style::default().fg(colors().warning),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::test_support::harness;

    fn rendered(app: &App, kind: ResourceKind) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        terminal.draw(|frame| render(app, kind, frame, frame.area())).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn empty_result_shows_empty_state_without_pager() {
        let mut h = harness("/users", 120, 0);
        let fetch = h.app.resources.mount(ResourceKind::Users);
        h.app.resources.settle(tokio_test::block_on(fetch.run()));

        assert_eq!(h.app.resources.users.controller.page_count(), 0);
        let screen = rendered(&h.app, ResourceKind::Users);
        assert!(screen.contains(ResourceKind::Users.texts().empty));
        assert!(!screen.contains(t().lists.page));
    }

    #[test]
    fn loading_without_data_shows_no_pager() {
        let mut h = harness("/items", 120, 0);
        let _fetch = h.app.resources.mount(ResourceKind::Items);

        let screen = rendered(&h.app, ResourceKind::Items);
        assert!(screen.contains(t().common.loading));
        assert!(!screen.contains(t().lists.page));
    }
}
