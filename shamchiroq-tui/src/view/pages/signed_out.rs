//! 未登录页面视图

use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

use crate::i18n::t;
use crate::view::theme::Styles;

pub fn render(frame: &mut Frame, area: Rect) {
    let texts = &t().signed_out;
    let content = vec![
        Line::from(""),
        Line::styled(format!("  {}", texts.message), Styles::title()),
        Line::from(""),
        Line::styled(format!("  {}", texts.hint), Styles::muted()),
    ];
    frame.render_widget(Paragraph::new(content), area);
}
