//! 分页资源控制器
//!
//! 每个列表视图一个实例。页码变化时发起请求，请求在控制器之外执行
//! （`PageFetch::run`），结果带着发起时的代号回到 `settle`：
//! 只有最新一代的结果会被应用，旧结果和卸载后的结果都被丢弃。

use std::fmt;
use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::traits::{ErrorReporter, ResourceFetcher};
use crate::types::{PageResponse, PaginationParams, PaginationResult};

/// 一次待执行的分页请求
pub struct PageFetch<T> {
    fetcher: Arc<dyn ResourceFetcher<T>>,
    params: PaginationParams,
    generation: u64,
}

impl<T> PageFetch<T> {
    pub fn params(&self) -> PaginationParams {
        self.params
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// 执行请求
    pub async fn run(self) -> PageSettlement<T> {
        let outcome = self
            .fetcher
            .fetch_page(self.params.page_index, self.params.page_size)
            .await;
        PageSettlement {
            params: self.params,
            generation: self.generation,
            outcome,
        }
    }
}

impl<T> fmt::Debug for PageFetch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageFetch")
            .field("params", &self.params)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

/// 请求结果（携带发起时的代号）
pub struct PageSettlement<T> {
    params: PaginationParams,
    generation: u64,
    outcome: CoreResult<PageResponse<T>>,
}

impl<T> PageSettlement<T> {
    pub fn new(
        params: PaginationParams,
        generation: u64,
        outcome: CoreResult<PageResponse<T>>,
    ) -> Self {
        Self {
            params,
            generation,
            outcome,
        }
    }

    pub fn params(&self) -> PaginationParams {
        self.params
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

impl<T> fmt::Debug for PageSettlement<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageSettlement")
            .field("params", &self.params)
            .field("generation", &self.generation)
            .field("ok", &self.outcome.is_ok())
            .finish()
    }
}

/// `settle` 的处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleOutcome {
    /// 成功并已应用
    Applied,
    /// 失败，保留旧数据并已上报
    Failed,
    /// 已被更新的请求取代，丢弃
    Stale,
    /// 控制器已卸载，丢弃
    Discarded,
}

/// 列表展示状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatus {
    /// 加载中且没有可显示的数据
    Loading,
    /// 有数据
    Ready,
    /// 服务器确认没有数据
    Empty,
    /// 从未取到数据且最近一次请求失败
    Unavailable,
}

/// 分页资源控制器
pub struct PaginatedResourceController<T> {
    fetcher: Arc<dyn ResourceFetcher<T>>,
    reporter: Arc<dyn ErrorReporter>,
    context: String,
    params: PaginationParams,
    result: Option<PaginationResult<T>>,
    is_loading: bool,
    last_error: Option<String>,
    generation: u64,
    mounted: bool,
}

impl<T> PaginatedResourceController<T> {
    /// 创建控制器
    ///
    /// `page_size` 在视图生命周期内固定，为 0 时返回 `CoreError::Configuration`。
    pub fn new(
        fetcher: Arc<dyn ResourceFetcher<T>>,
        reporter: Arc<dyn ErrorReporter>,
        context: impl Into<String>,
        page_size: u32,
    ) -> CoreResult<Self> {
        if page_size == 0 {
            return Err(CoreError::Configuration(
                "page size must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            fetcher,
            reporter,
            context: context.into(),
            params: PaginationParams {
                page_index: 0,
                page_size,
            },
            result: None,
            is_loading: false,
            last_error: None,
            generation: 0,
            mounted: false,
        })
    }

    // ========== 生命周期 ==========

    /// 挂载：清空状态并请求第一页
    pub fn mount(&mut self) -> PageFetch<T> {
        self.mounted = true;
        self.params.page_index = 0;
        self.result = None;
        self.last_error = None;
        log::debug!("[{}] mounted", self.context);
        self.dispatch()
    }

    /// 卸载：此后到达的所有结果都不再应用
    pub fn unmount(&mut self) {
        if self.mounted {
            log::debug!("[{}] unmounted", self.context);
        }
        self.mounted = false;
        self.is_loading = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    // ========== 翻页 ==========

    /// 切换页码
    ///
    /// 只有页码真正变化时才发起请求；未挂载时不发起。
    pub fn set_page_index(&mut self, page_index: u32) -> Option<PageFetch<T>> {
        if !self.mounted || page_index == self.params.page_index {
            return None;
        }
        self.params.page_index = page_index;
        Some(self.dispatch())
    }

    /// 重新请求当前页
    pub fn refresh(&mut self) -> Option<PageFetch<T>> {
        if !self.mounted {
            return None;
        }
        Some(self.dispatch())
    }

    pub fn next_page(&mut self) -> Option<PageFetch<T>> {
        let next = self.params.page_index.saturating_add(1);
        if u64::from(next) >= self.page_count() {
            return None;
        }
        self.set_page_index(next)
    }

    pub fn previous_page(&mut self) -> Option<PageFetch<T>> {
        let previous = self.params.page_index.checked_sub(1)?;
        self.set_page_index(previous)
    }

    pub fn first_page(&mut self) -> Option<PageFetch<T>> {
        self.set_page_index(0)
    }

    pub fn last_page(&mut self) -> Option<PageFetch<T>> {
        let last = self.page_count().checked_sub(1)?;
        self.set_page_index(u32::try_from(last).unwrap_or(u32::MAX))
    }

    fn dispatch(&mut self) -> PageFetch<T> {
        self.generation += 1;
        self.is_loading = true;
        log::debug!(
            "[{}] fetching page {} (generation {})",
            self.context,
            self.params.page_index,
            self.generation
        );
        PageFetch {
            fetcher: Arc::clone(&self.fetcher),
            params: self.params,
            generation: self.generation,
        }
    }

    // ========== 结果 ==========

    /// 应用请求结果
    pub fn settle(&mut self, settlement: PageSettlement<T>) -> SettleOutcome {
        if !self.mounted {
            return SettleOutcome::Discarded;
        }
        if settlement.generation != self.generation {
            log::debug!(
                "[{}] dropping stale page {} (generation {} < {})",
                self.context,
                settlement.params.page_index,
                settlement.generation,
                self.generation
            );
            return SettleOutcome::Stale;
        }

        self.is_loading = false;
        match settlement.outcome {
            Ok(response) => {
                self.result = Some(PaginationResult::from_response(
                    response,
                    self.params.page_size,
                ));
                self.last_error = None;
                SettleOutcome::Applied
            }
            Err(error) => {
                self.reporter.report_error(&self.context, &error);
                self.last_error = Some(error.to_string());
                SettleOutcome::Failed
            }
        }
    }

    // ========== 只读视图 ==========

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn params(&self) -> PaginationParams {
        self.params
    }

    pub fn page_index(&self) -> u32 {
        self.params.page_index
    }

    pub fn page_size(&self) -> u32 {
        self.params.page_size
    }

    pub fn result(&self) -> Option<&PaginationResult<T>> {
        self.result.as_ref()
    }

    pub fn items(&self) -> &[T] {
        self.result
            .as_ref()
            .map_or(&[][..], |result| result.items.as_slice())
    }

    pub fn page_count(&self) -> u64 {
        self.result.as_ref().map_or(0, |result| result.page_count)
    }

    pub fn total_row_count(&self) -> u64 {
        self.result.as_ref().map_or(0, |result| result.total_row_count)
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// 展示状态
    ///
    /// 有数据时总是 `Ready`（即使正在刷新或刚刚失败）；
    /// 失败且从未取到数据时为 `Unavailable`，和服务器返回的空结果区分开。
    pub fn status(&self) -> ListStatus {
        match &self.result {
            Some(result) if !result.items.is_empty() => ListStatus::Ready,
            _ if self.is_loading => ListStatus::Loading,
            Some(_) => ListStatus::Empty,
            None if self.last_error.is_some() => ListStatus::Unavailable,
            None => ListStatus::Loading,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{RecordingReporter, ScriptedFetcher};

    fn controller(
        fetcher: &Arc<ScriptedFetcher>,
        reporter: &Arc<RecordingReporter>,
    ) -> PaginatedResourceController<u32> {
        PaginatedResourceController::new(fetcher.clone(), reporter.clone(), "numbers", 10).unwrap()
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let result = PaginatedResourceController::<u32>::new(
            Arc::new(ScriptedFetcher::new()),
            Arc::new(RecordingReporter::new()),
            "numbers",
            0,
        );
        assert!(matches!(result, Err(CoreError::Configuration(_))));
    }

    #[tokio::test]
    async fn mount_fetches_first_page() {
        let fetcher = Arc::new(ScriptedFetcher::paged(95));
        let reporter = Arc::new(RecordingReporter::new());
        let mut controller = controller(&fetcher, &reporter);

        let fetch = controller.mount();
        assert!(controller.is_loading());
        assert_eq!(controller.status(), ListStatus::Loading);
        assert_eq!(fetch.params().page_index, 0);

        let outcome = controller.settle(fetch.run().await);

        assert_eq!(outcome, SettleOutcome::Applied);
        assert!(!controller.is_loading());
        assert_eq!(controller.items(), &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(controller.page_count(), 10);
        assert_eq!(controller.status(), ListStatus::Ready);
        assert_eq!(fetcher.requested_pages(), vec![0]);
    }

    #[tokio::test]
    async fn page_count_follows_latest_total() {
        for (total, pages) in [(95, 10), (0, 0), (10, 1)] {
            let fetcher = Arc::new(ScriptedFetcher::paged(total));
            let reporter = Arc::new(RecordingReporter::new());
            let mut controller = controller(&fetcher, &reporter);

            let fetch = controller.mount();
            controller.settle(fetch.run().await);

            assert_eq!(controller.page_count(), pages, "total {total}");
        }
    }

    #[tokio::test]
    async fn zero_rows_render_empty_state() {
        let fetcher = Arc::new(ScriptedFetcher::paged(0));
        let reporter = Arc::new(RecordingReporter::new());
        let mut controller = controller(&fetcher, &reporter);

        let fetch = controller.mount();
        controller.settle(fetch.run().await);

        assert_eq!(controller.status(), ListStatus::Empty);
        assert!(controller.next_page().is_none());
        assert!(controller.last_page().is_none());
    }

    #[tokio::test]
    async fn same_index_does_not_refetch() {
        let fetcher = Arc::new(ScriptedFetcher::paged(95));
        let reporter = Arc::new(RecordingReporter::new());
        let mut controller = controller(&fetcher, &reporter);
        let fetch = controller.mount();
        controller.settle(fetch.run().await);

        assert!(controller.set_page_index(0).is_none());
        assert!(!controller.is_loading());
    }

    #[tokio::test]
    async fn late_stale_response_is_dropped() {
        let fetcher = Arc::new(ScriptedFetcher::paged(95));
        let reporter = Arc::new(RecordingReporter::new());
        let mut controller = controller(&fetcher, &reporter);

        let fetch_a = controller.mount();
        let fetch_b = controller.set_page_index(1).unwrap();
        let settled_a = fetch_a.run().await;
        let settled_b = fetch_b.run().await;

        // B 先到，A 后到
        assert_eq!(controller.settle(settled_b), SettleOutcome::Applied);
        assert_eq!(controller.settle(settled_a), SettleOutcome::Stale);

        assert_eq!(controller.items()[0], 10);
        assert_eq!(controller.page_index(), 1);
        assert!(!controller.is_loading());
    }

    #[tokio::test]
    async fn superseded_response_does_not_clear_loading() {
        let fetcher = Arc::new(ScriptedFetcher::paged(95));
        let reporter = Arc::new(RecordingReporter::new());
        let mut controller = controller(&fetcher, &reporter);

        let fetch_a = controller.mount();
        let _fetch_b = controller.set_page_index(1).unwrap();

        assert_eq!(controller.settle(fetch_a.run().await), SettleOutcome::Stale);
        assert!(controller.is_loading());
    }

    #[tokio::test]
    async fn failure_keeps_last_good_page() {
        let fetcher = Arc::new(ScriptedFetcher::paged(95));
        let reporter = Arc::new(RecordingReporter::new());
        let mut controller = controller(&fetcher, &reporter);
        let fetch = controller.mount();
        controller.settle(fetch.run().await);

        fetcher.fail_page(1, CoreError::Network("connection reset".to_string()));
        let fetch = controller.next_page().unwrap();
        let outcome = controller.settle(fetch.run().await);

        assert_eq!(outcome, SettleOutcome::Failed);
        assert!(!controller.is_loading());
        assert_eq!(controller.items()[0], 0);
        assert_eq!(controller.page_count(), 10);
        assert_eq!(controller.status(), ListStatus::Ready);
        assert!(controller.last_error().is_some());

        let reports = reporter.reports();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].0, "numbers");
    }

    #[tokio::test]
    async fn failure_without_data_is_unavailable() {
        let fetcher = Arc::new(ScriptedFetcher::paged(95));
        fetcher.fail_page(0, CoreError::Unauthorized);
        let reporter = Arc::new(RecordingReporter::new());
        let mut controller = controller(&fetcher, &reporter);

        let fetch = controller.mount();
        controller.settle(fetch.run().await);

        assert_eq!(controller.status(), ListStatus::Unavailable);
        assert!(controller.items().is_empty());
    }

    #[tokio::test]
    async fn unmount_discards_pending_result() {
        let fetcher = Arc::new(ScriptedFetcher::paged(95));
        let reporter = Arc::new(RecordingReporter::new());
        let mut controller = controller(&fetcher, &reporter);

        let fetch = controller.mount();
        controller.unmount();

        assert_eq!(controller.settle(fetch.run().await), SettleOutcome::Discarded);
        assert!(controller.items().is_empty());
        assert!(controller.set_page_index(3).is_none());
        assert!(controller.refresh().is_none());
    }

    #[tokio::test]
    async fn remount_ignores_previous_mount() {
        let fetcher = Arc::new(ScriptedFetcher::paged(95));
        let reporter = Arc::new(RecordingReporter::new());
        let mut controller = controller(&fetcher, &reporter);

        let old = controller.mount();
        controller.unmount();
        let fresh = controller.mount();

        assert_eq!(controller.settle(old.run().await), SettleOutcome::Stale);
        assert_eq!(controller.settle(fresh.run().await), SettleOutcome::Applied);
    }

    #[tokio::test]
    async fn navigation_helpers_clamp() {
        let fetcher = Arc::new(ScriptedFetcher::paged(25));
        let reporter = Arc::new(RecordingReporter::new());
        let mut controller = controller(&fetcher, &reporter);
        let fetch = controller.mount();
        controller.settle(fetch.run().await);

        assert!(controller.previous_page().is_none());
        assert!(controller.first_page().is_none());

        let fetch = controller.last_page().unwrap();
        assert_eq!(fetch.params().page_index, 2);
        controller.settle(fetch.run().await);
        assert_eq!(controller.items(), &[20, 21, 22, 23, 24]);
        assert!(controller.next_page().is_none());

        let fetch = controller.refresh().unwrap();
        assert_eq!(fetch.params().page_index, 2);
    }
}
