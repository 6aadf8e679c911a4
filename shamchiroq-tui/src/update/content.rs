//! 内容面板更新逻辑
//!
//! 列表页的选择与翻页；未登录页上的 Enter 打开登录框。

use super::Effect;
use crate::message::ContentMessage;
use crate::model::{App, Page, PageAction};

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) -> Vec<Effect> {
    match app.current_page() {
        Page::List(kind) => {
            let action = match msg {
                ContentMessage::SelectPrevious => {
                    app.resources.move_selection(kind, false);
                    return Vec::new();
                }
                ContentMessage::SelectNext => {
                    app.resources.move_selection(kind, true);
                    return Vec::new();
                }
                ContentMessage::NextPage => PageAction::Next,
                ContentMessage::PreviousPage => PageAction::Previous,
                ContentMessage::FirstPage => PageAction::First,
                ContentMessage::LastPage => PageAction::Last,
                ContentMessage::Activate => return Vec::new(),
            };
            app.resources
                .page(kind, action)
                .map(Effect::Fetch)
                .into_iter()
                .collect()
        }
        Page::SignedOut => {
            if msg == ContentMessage::Activate {
                app.modal.show_sign_in();
            }
            Vec::new()
        }
        Page::NotFound => Vec::new(),
    }
}
