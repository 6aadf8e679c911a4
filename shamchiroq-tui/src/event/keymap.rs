//! 快捷键配置
//!
//! 全局快捷键集中定义在这里，面板内的方向键在 handler 中按焦点分派

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    ///
    /// 字符键忽略 Shift（`?` 在多数键盘上需要 Shift）
    pub fn matches(&self, key: &KeyEvent) -> bool {
        let modifiers = match key.code {
            KeyCode::Char(_) => key.modifiers.difference(KeyModifiers::SHIFT),
            _ => key.modifiers,
        };
        modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::key(KeyCode::Char('?'));
    pub const REFRESH: KeyBinding = KeyBinding::alt(KeyCode::Char('r'));
    pub const LOGOUT: KeyBinding = KeyBinding::alt(KeyCode::Char('l'));
    pub const TOGGLE_DRAWER: KeyBinding = KeyBinding::key(KeyCode::Char('m'));

    // 面板切换
    pub const FOCUS_SWITCH: KeyBinding = KeyBinding::key(KeyCode::Tab);
    pub const FOCUS_LEFT: KeyBinding = KeyBinding::key(KeyCode::Left);
    pub const FOCUS_RIGHT: KeyBinding = KeyBinding::key(KeyCode::Right);

    // 翻页
    pub const NEXT_PAGE: KeyBinding = KeyBinding::key(KeyCode::Char('n'));
    pub const PREVIOUS_PAGE: KeyBinding = KeyBinding::key(KeyCode::Char('p'));
    pub const NEXT_PAGE_ALT: KeyBinding = KeyBinding::key(KeyCode::PageDown);
    pub const PREVIOUS_PAGE_ALT: KeyBinding = KeyBinding::key(KeyCode::PageUp);
    pub const FIRST_PAGE: KeyBinding = KeyBinding::key(KeyCode::Home);
    pub const LAST_PAGE: KeyBinding = KeyBinding::key(KeyCode::End);
}
