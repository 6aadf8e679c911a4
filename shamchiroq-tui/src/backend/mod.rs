//! Backend 层：异步执行与外部存储
//!
//! 与 UI 解耦。Update 层返回的 `Effect` 在这里被 `tokio::spawn` 执行，
//! 结果通过无界 mpsc 通道回到主循环，主循环每一轮用 `drain` 取走，
//! 再以 `AppMessage::Backend` 交给 Update 层。
//!
//! 模块结构：
//!     mod config_service; // JSON 配置文件 + 环境变量覆盖
//!     mod token_store;    // 系统钥匙串中的会话 token
//!
//! 数据流：
//!     Update 返回 Effect::Fetch
//!         ↓
//!     Backend::execute 派生任务，PageFetch::run 调用 REST 接口
//!         ↓
//!     BackendEvent::PageSettled 进入通道
//!         ↓
//!     主循环 drain，Update 调用控制器 settle（过期结果在这里被丢弃）
//!         ↓
//!     View 层重新渲染

mod config_service;
mod token_store;

pub use config_service::{config_dir, LocalConfigService};
pub use token_store::KeyringTokenStore;

use std::sync::Arc;

use shamchiroq_core::TokenSession;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::message::BackendEvent;
use crate::update::Effect;

/// 副作用执行器
pub struct Backend {
    session: Arc<TokenSession>,
    tx: UnboundedSender<BackendEvent>,
    rx: UnboundedReceiver<BackendEvent>,
}

impl Backend {
    pub fn new(session: Arc<TokenSession>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { session, tx, rx }
    }

    /// 在 tokio 上执行副作用（不等待完成）
    pub fn execute(&self, effect: Effect) {
        let tx = self.tx.clone();
        match effect {
            Effect::Fetch(fetch) => {
                let kind = fetch.kind();
                log::debug!("Fetching {kind:?}");
                tokio::spawn(async move {
                    let settled = fetch.run().await;
                    deliver(&tx, BackendEvent::PageSettled(settled));
                });
            }
            Effect::Logout(task) => {
                tokio::spawn(async move {
                    let result = task.await;
                    if let Err(e) = &result {
                        log::error!("Logout failed: {e}");
                    }
                    deliver(&tx, BackendEvent::LogoutFinished(result));
                });
            }
            Effect::SignIn(token) => {
                let session = Arc::clone(&self.session);
                tokio::spawn(async move {
                    let result = session.sign_in(&token).await;
                    if let Err(e) = &result {
                        log::warn!("Sign-in failed: {e}");
                    }
                    deliver(&tx, BackendEvent::SignInFinished(result));
                });
            }
        }
    }

    /// 取走所有已完成的结果（不阻塞）
    pub fn drain(&mut self) -> Vec<BackendEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            events.push(event);
        }
        events
    }

    /// 等待下一个结果
    #[cfg(test)]
    pub async fn next_event(&mut self) -> Option<BackendEvent> {
        self.rx.recv().await
    }
}

fn deliver(tx: &UnboundedSender<BackendEvent>, event: BackendEvent) {
    // 主循环已退出时直接丢弃
    if tx.send(event).is_err() {
        log::debug!("Backend result dropped: receiver closed");
    }
}
