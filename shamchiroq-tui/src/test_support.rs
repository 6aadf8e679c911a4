//! 测试用的协作者和 App 构造

#![allow(clippy::panic)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use shamchiroq_core::traits::{LogErrorReporter, MemoryRouter};
use shamchiroq_core::types::PageResponse;
use shamchiroq_core::{
    CoreResult, ErrorReporter, NavigationShell, ResourceFetcher, RouteRegistry, SessionService,
    SessionState,
};

use crate::model::{App, Fetchers, Resources};

/// 每一页都返回空行、总数固定的 fetcher
pub struct FixedCountFetcher {
    count: u64,
}

#[async_trait]
impl<T: Send + 'static> ResourceFetcher<T> for FixedCountFetcher {
    async fn fetch_page(&self, _page_index: u32, _page_size: u32) -> CoreResult<PageResponse<T>> {
        Ok(PageResponse::new(Vec::new(), self.count))
    }
}

/// 记录调用次数的会话服务
#[derive(Default)]
pub struct CountingSession {
    calls: AtomicUsize,
}

impl CountingSession {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionService for CountingSession {
    async fn terminate_session(&self) -> CoreResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// 构造好的测试 App
pub struct Harness {
    pub app: App,
    pub router: Arc<MemoryRouter>,
    pub session: Arc<CountingSession>,
}

/// 已登录、位于 `path`、宽度为 `width` 的 App；每个列表共 `count` 行，每页 10 行
pub fn harness(path: &str, width: u16, count: u64) -> Harness {
    let router = Arc::new(MemoryRouter::new(path));
    let session = Arc::new(CountingSession::default());
    let registry = match RouteRegistry::default_routes() {
        Ok(registry) => registry,
        Err(e) => panic!("routes: {e}"),
    };
    let shell = NavigationShell::new(
        registry,
        router.clone(),
        session.clone(),
        width,
    );
    let reporter: Arc<dyn ErrorReporter> = Arc::new(LogErrorReporter);
    let fetcher = Arc::new(FixedCountFetcher { count });
    let resources = match Resources::new(Fetchers::uniform(&fetcher), &reporter, 10) {
        Ok(resources) => resources,
        Err(e) => panic!("resources: {e}"),
    };
    let signed_in = SessionState::Authenticated {
        token: "token".to_string(),
    };
    Harness {
        app: App::new(shell, signed_in, resources),
        router,
        session,
    }
}
