//! 应用主循环
//!
//! 每一轮：
//!     1. 渲染 UI
//!     2. 取走后台完成的结果（分页、登出、登录）
//!     3. 检查路由器和会话主体是否有变化
//!     4. 轮询终端事件（最多 100ms）
//! 第 2-4 步产生的消息都交给 `update::update`，返回的副作用交给 Backend 执行。

use std::time::Duration;

use anyhow::Result;
use shamchiroq_core::SessionState;
use tokio::sync::watch;

use crate::backend::Backend;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 主循环观察的外部状态
pub struct Observers {
    pub route: watch::Receiver<String>,
    pub session: watch::Receiver<SessionState>,
}

impl Observers {
    /// 收集自上一轮以来的变化
    fn changes(&mut self) -> Vec<AppMessage> {
        let mut messages = Vec::new();
        if self.session.has_changed().unwrap_or(false) {
            let state = self.session.borrow_and_update().clone();
            messages.push(AppMessage::SessionChanged(state));
        }
        if self.route.has_changed().unwrap_or(false) {
            self.route.borrow_and_update();
            messages.push(AppMessage::RouteChanged);
        }
        messages
    }
}

/// 运行应用主循环
pub async fn run(
    terminal: &mut Term,
    app: &mut App,
    backend: &mut Backend,
    mut observers: Observers,
) -> Result<()> {
    // 首屏：挂载当前路由对应的列表
    for effect in update::sync_mounts(app) {
        backend.execute(effect);
    }

    loop {
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        if app.should_quit {
            break;
        }

        let mut messages: Vec<AppMessage> = backend
            .drain()
            .into_iter()
            .map(AppMessage::Backend)
            .collect();
        messages.extend(observers.changes());

        // crossterm 的轮询是阻塞调用，放到阻塞线程池里，后台任务照常运行
        let polled =
            tokio::task::spawn_blocking(|| event::poll_event(Duration::from_millis(100))).await??;
        if let Some(event) = polled {
            messages.push(event::handle_event(event, app));
        }

        for msg in messages {
            for effect in update::update(app, msg) {
                backend.execute(effect);
            }
        }
    }

    Ok(())
}
