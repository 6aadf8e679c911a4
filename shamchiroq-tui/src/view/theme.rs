//! 主题和样式定义
//!
//! 固定的深色配色

use ratatui::style::{Color, Modifier, Style};

/// 主题颜色
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub accent: Color,
    pub warning: Color,
    pub error: Color,
    pub muted: Color,
    pub overlay_bg: Color,
}

const DARK: ThemeColors = ThemeColors {
    fg: Color::Rgb(212, 212, 212),
    border: Color::Rgb(62, 62, 62),
    border_focused: Color::Rgb(0, 122, 204),
    highlight: Color::Rgb(0, 122, 204),
    selected_bg: Color::Rgb(38, 79, 120),
    selected_fg: Color::White,
    accent: Color::Cyan,
    warning: Color::Rgb(206, 145, 120),
    error: Color::Rgb(244, 135, 113),
    muted: Color::Rgb(128, 128, 128),
    overlay_bg: Color::Black,
};

/// 当前配色
pub fn colors() -> ThemeColors {
    DARK
}

/// 常用样式
pub struct Styles;

impl Styles {
    /// 面板边框（按是否聚焦）
    pub fn border(focused: bool) -> Style {
        let c = colors();
        Style::default().fg(if focused { c.border_focused } else { c.border })
    }

    /// 选中项样式
    pub fn selected() -> Style {
        let c = colors();
        Style::default()
            .bg(c.selected_bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// 标题样式
    pub fn title() -> Style {
        Style::default().fg(colors().fg).add_modifier(Modifier::BOLD)
    }

    /// 标题栏 / 状态栏样式
    pub fn bar() -> Style {
        Style::default().bg(colors().highlight).fg(Color::White)
    }

    /// 快捷键提示样式
    pub fn hint_key() -> Style {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }

    /// 快捷键说明样式
    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Rgb(230, 230, 230))
    }

    pub fn muted() -> Style {
        Style::default().fg(colors().muted)
    }
}
