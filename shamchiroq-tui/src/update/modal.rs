//! 弹窗更新逻辑
//!
//! 登出确认框优先于其他弹窗；它的可见性和待执行动作都在导航外壳里。

use shamchiroq_core::confirm::ConfirmationSurface;

use super::Effect;
use crate::i18n::t;
use crate::message::ModalMessage;
use crate::model::{App, LogoutChoice, Modal};

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) -> Vec<Effect> {
    if app.shell.is_logout_confirmation_open() {
        return handle_logout_confirmation(app, msg);
    }

    let mut close = false;
    match &mut app.modal.active {
        Some(Modal::SignIn {
            token,
            error,
            submitting,
        }) => match msg {
            ModalMessage::Input(c) if !*submitting => {
                token.push(c);
                *error = None;
            }
            ModalMessage::Backspace if !*submitting => {
                token.pop();
                *error = None;
            }
            ModalMessage::Confirm if !*submitting => {
                let trimmed = token.trim();
                if trimmed.is_empty() {
                    *error = Some(t().modal.sign_in.empty_token.to_string());
                } else {
                    *submitting = true;
                    return vec![Effect::SignIn(trimmed.to_string())];
                }
            }
            ModalMessage::Close => close = true,
            _ => {}
        },
        Some(Modal::Help | Modal::Error { .. }) => {
            close = matches!(msg, ModalMessage::Close | ModalMessage::Confirm);
        }
        None => {}
    }
    if close {
        app.modal.close();
    }
    Vec::new()
}

fn handle_logout_confirmation(app: &mut App, msg: ModalMessage) -> Vec<Effect> {
    match msg {
        ModalMessage::ToggleChoice => {
            app.modal.logout_choice = app.modal.logout_choice.toggle();
        }
        ModalMessage::Close => app.shell.logout_surface().request_close(),
        ModalMessage::Confirm => match app.modal.logout_choice {
            LogoutChoice::Cancel => app.shell.logout_surface().request_close(),
            LogoutChoice::Confirm => {
                if let Some(task) = app.shell.logout_surface().request_confirm() {
                    return vec![Effect::Logout(task)];
                }
            }
        },
        ModalMessage::Input(_) | ModalMessage::Backspace => {}
    }
    Vec::new()
}
