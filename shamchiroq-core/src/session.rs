//! 会话状态
//!
//! 进程内唯一的会话主体：初始状态为未登录，只有 `TokenSession` 写入，
//! 其他组件（API 客户端、界面）只订阅。

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::watch;

use crate::error::{CoreError, CoreResult};
use crate::traits::{SessionService, TokenStore};

/// 会话状态
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// 未登录
    #[default]
    Unauthenticated,
    /// 已登录
    Authenticated {
        /// Bearer token
        token: String,
    },
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Authenticated { token } => Some(token),
            Self::Unauthenticated => None,
        }
    }
}

/// 会话主体（可观察值）
///
/// 克隆得到的是同一主体的另一个句柄。
#[derive(Debug, Clone)]
pub struct SessionSubject {
    sender: Arc<watch::Sender<SessionState>>,
}

impl SessionSubject {
    /// 以未登录状态创建
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = watch::channel(SessionState::Unauthenticated);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// 当前状态快照
    pub fn current(&self) -> SessionState {
        self.sender.borrow().clone()
    }

    /// 当前 token
    pub fn token(&self) -> Option<String> {
        self.sender.borrow().token().map(str::to_string)
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.sender.subscribe()
    }

    /// 发布新状态（仅供会话服务调用）
    fn publish(&self, state: SessionState) {
        self.sender.send_if_modified(|current| {
            if *current == state {
                false
            } else {
                *current = state;
                true
            }
        });
    }
}

impl Default for SessionSubject {
    fn default() -> Self {
        Self::new()
    }
}

/// 基于 token 的会话服务
///
/// 会话主体的唯一写入方。
pub struct TokenSession {
    store: Arc<dyn TokenStore>,
    subject: SessionSubject,
}

impl TokenSession {
    pub fn new(store: Arc<dyn TokenStore>, subject: SessionSubject) -> Self {
        Self { store, subject }
    }

    pub fn subject(&self) -> &SessionSubject {
        &self.subject
    }

    /// 启动时从存储恢复会话
    ///
    /// 返回是否恢复成功。
    pub async fn restore(&self) -> CoreResult<bool> {
        match self.store.load().await? {
            Some(token) if !token.trim().is_empty() => {
                self.subject.publish(SessionState::Authenticated { token });
                log::info!("Session restored from token store");
                Ok(true)
            }
            _ => {
                self.subject.publish(SessionState::Unauthenticated);
                Ok(false)
            }
        }
    }

    /// 登录：保存 token 并发布已登录状态
    pub async fn sign_in(&self, token: &str) -> CoreResult<()> {
        let token = token.trim();
        if token.is_empty() {
            return Err(CoreError::Session("token must not be empty".to_string()));
        }
        self.store.save(token).await?;
        self.subject.publish(SessionState::Authenticated {
            token: token.to_string(),
        });
        log::info!("Signed in");
        Ok(())
    }
}

#[async_trait]
impl SessionService for TokenSession {
    async fn terminate_session(&self) -> CoreResult<()> {
        // 存储清理失败时保持登录状态，用户可以重试
        self.store
            .clear()
            .await
            .map_err(|e| CoreError::Session(e.to_string()))?;
        self.subject.publish(SessionState::Unauthenticated);
        log::info!("Signed out");
        Ok(())
    }
}
