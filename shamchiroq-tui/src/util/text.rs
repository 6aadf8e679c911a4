//! 按显示宽度处理文本
//!
//! 表格单元格里可能有中文等双宽字符，截断必须按列宽而不是字符数。

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 截断到 `max_width` 列以内，超出时以 `…` 结尾
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}
