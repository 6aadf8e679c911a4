//! Shared collaborators for the integration tests.

use std::sync::Mutex;

use async_trait::async_trait;
use shamchiroq_core::error::{CoreError, CoreResult};
use shamchiroq_core::traits::{ErrorReporter, ResourceFetcher};
use shamchiroq_core::types::PageResponse;
use tokio::sync::{mpsc, oneshot};

/// A page request waiting for the test to answer it.
pub struct PendingPage {
    pub page_index: u32,
    pub page_size: u32,
    reply: oneshot::Sender<CoreResult<PageResponse<String>>>,
}

impl PendingPage {
    /// Answer with `page_size` rows labelled `p{page}-r{n}` out of `total`.
    pub fn respond(self, total: u64) {
        let rows = (0..self.page_size)
            .map(|n| format!("p{}-r{n}", self.page_index))
            .collect();
        let _ = self.reply.send(Ok(PageResponse::new(rows, total)));
    }

    pub fn fail(self, error: CoreError) {
        let _ = self.reply.send(Err(error));
    }
}

/// Fetcher whose responses are released by the test, in any order.
pub struct GatedFetcher {
    requests: mpsc::UnboundedSender<PendingPage>,
}

impl GatedFetcher {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<PendingPage>) {
        let (requests, rx) = mpsc::unbounded_channel();
        (Self { requests }, rx)
    }
}

#[async_trait]
impl ResourceFetcher<String> for GatedFetcher {
    async fn fetch_page(
        &self,
        page_index: u32,
        page_size: u32,
    ) -> CoreResult<PageResponse<String>> {
        let (reply, response) = oneshot::channel();
        self.requests
            .send(PendingPage {
                page_index,
                page_size,
                reply,
            })
            .map_err(|_| CoreError::Network("test harness gone".to_string()))?;
        response
            .await
            .map_err(|_| CoreError::Network("request dropped".to_string()))?
    }
}

/// Reporter that remembers every report.
#[derive(Default)]
pub struct CountingReporter {
    reports: Mutex<Vec<String>>,
}

impl CountingReporter {
    pub fn contexts(&self) -> Vec<String> {
        self.reports.lock().unwrap().clone()
    }
}

impl ErrorReporter for CountingReporter {
    fn report_error(&self, context: &str, _error: &CoreError) {
        self.reports.lock().unwrap().push(context.to_string());
    }
}
