//! 测试辅助模块
//!
//! 提供 mock 协作者实现。

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::traits::{ErrorReporter, ResourceFetcher, SessionService, TokenStore};
use crate::types::PageResponse;

// ===== ScriptedFetcher =====

/// 按页码生成连续数字的 fetcher，可以让指定页失败
pub struct ScriptedFetcher {
    total: u64,
    failures: Mutex<HashMap<u32, CoreError>>,
    requests: Mutex<Vec<u32>>,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::paged(0)
    }

    /// 服务器共有 `total` 行，第 n 行的值为 n
    pub fn paged(total: u64) -> Self {
        Self {
            total,
            failures: Mutex::new(HashMap::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn fail_page(&self, page_index: u32, error: CoreError) {
        self.failures.lock().unwrap().insert(page_index, error);
    }

    pub fn requested_pages(&self) -> Vec<u32> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResourceFetcher<u32> for ScriptedFetcher {
    async fn fetch_page(&self, page_index: u32, page_size: u32) -> CoreResult<PageResponse<u32>> {
        self.requests.lock().unwrap().push(page_index);
        if let Some(error) = self.failures.lock().unwrap().get(&page_index) {
            return Err(error.clone());
        }
        let start = u64::from(page_index) * u64::from(page_size);
        let end = (start + u64::from(page_size)).min(self.total);
        let rows = (start..end)
            .map(|n| u32::try_from(n).unwrap())
            .collect();
        Ok(PageResponse::new(rows, self.total))
    }
}

// ===== RecordingReporter =====

#[derive(Default)]
pub struct RecordingReporter {
    reports: Mutex<Vec<(String, CoreError)>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<(String, CoreError)> {
        self.reports.lock().unwrap().clone()
    }
}

impl ErrorReporter for RecordingReporter {
    fn report_error(&self, context: &str, error: &CoreError) {
        self.reports
            .lock()
            .unwrap()
            .push((context.to_string(), error.clone()));
    }
}

// ===== RecordingSession =====

/// 记录 terminate_session 调用次数
pub struct RecordingSession {
    calls: AtomicUsize,
    error: Option<String>,
}

impl RecordingSession {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            error: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            error: Some(message.to_string()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionService for RecordingSession {
    async fn terminate_session(&self) -> CoreResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.error {
            Some(message) => Err(CoreError::Session(message.clone())),
            None => Ok(()),
        }
    }
}

// ===== FailingTokenStore =====

/// clear 总是失败的 token 存储
pub struct FailingTokenStore {
    token: RwLock<Option<String>>,
}

impl FailingTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: RwLock::new(Some(token.to_string())),
        }
    }
}

#[async_trait]
impl TokenStore for FailingTokenStore {
    async fn load(&self) -> CoreResult<Option<String>> {
        Ok(self.token.read().await.clone())
    }

    async fn save(&self, token: &str) -> CoreResult<()> {
        *self.token.write().await = Some(token.to_string());
        Ok(())
    }

    async fn clear(&self) -> CoreResult<()> {
        Err(CoreError::Storage("keyring locked".to_string()))
    }
}
