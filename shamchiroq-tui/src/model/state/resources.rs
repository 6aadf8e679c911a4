//! 五个列表页的状态集合
//!
//! 任一时刻最多一个列表处于挂载状态（当前路由对应的那个）。

use std::sync::Arc;

use shamchiroq_core::api::ApiClient;
use shamchiroq_core::pagination::{PageFetch, PageSettlement, SettleOutcome};
use shamchiroq_core::traits::{ErrorReporter, ResourceFetcher};
use shamchiroq_core::types::{Block, Item, Notification, Report, User};
use shamchiroq_core::{CoreResult, PaginatedResourceController};

use super::ResourceListState;
use crate::model::domain::{ListResource, ResourceKind};

/// 翻页动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    Refresh,
    Next,
    Previous,
    First,
    Last,
}

/// 等待执行的分页请求
#[derive(Debug)]
pub enum PendingFetch {
    Reports(PageFetch<Report>),
    Users(PageFetch<User>),
    Items(PageFetch<Item>),
    Blocks(PageFetch<Block>),
    Notifications(PageFetch<Notification>),
}

impl PendingFetch {
    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::Reports(_) => ResourceKind::Reports,
            Self::Users(_) => ResourceKind::Users,
            Self::Items(_) => ResourceKind::Items,
            Self::Blocks(_) => ResourceKind::Blocks,
            Self::Notifications(_) => ResourceKind::Notifications,
        }
    }

    /// 执行请求
    pub async fn run(self) -> SettledPage {
        match self {
            Self::Reports(fetch) => SettledPage::Reports(fetch.run().await),
            Self::Users(fetch) => SettledPage::Users(fetch.run().await),
            Self::Items(fetch) => SettledPage::Items(fetch.run().await),
            Self::Blocks(fetch) => SettledPage::Blocks(fetch.run().await),
            Self::Notifications(fetch) => SettledPage::Notifications(fetch.run().await),
        }
    }
}

/// 执行完毕的分页请求
#[derive(Debug)]
pub enum SettledPage {
    Reports(PageSettlement<Report>),
    Users(PageSettlement<User>),
    Items(PageSettlement<Item>),
    Blocks(PageSettlement<Block>),
    Notifications(PageSettlement<Notification>),
}

/// 各资源的 fetcher
pub struct Fetchers {
    pub reports: Arc<dyn ResourceFetcher<Report>>,
    pub users: Arc<dyn ResourceFetcher<User>>,
    pub items: Arc<dyn ResourceFetcher<Item>>,
    pub blocks: Arc<dyn ResourceFetcher<Block>>,
    pub notifications: Arc<dyn ResourceFetcher<Notification>>,
}

impl Fetchers {
    /// REST 接口
    pub fn rest(client: &ApiClient) -> Self {
        Self {
            reports: client.resource(ResourceKind::Reports.endpoint()),
            users: client.resource(ResourceKind::Users.endpoint()),
            items: client.resource(ResourceKind::Items.endpoint()),
            blocks: client.resource(ResourceKind::Blocks.endpoint()),
            notifications: client.resource(ResourceKind::Notifications.endpoint()),
        }
    }

    /// 所有资源共用同一个 fetcher
    #[cfg(test)]
    pub fn uniform<F>(fetcher: &Arc<F>) -> Self
    where
        F: ResourceFetcher<Report>
            + ResourceFetcher<User>
            + ResourceFetcher<Item>
            + ResourceFetcher<Block>
            + ResourceFetcher<Notification>
            + 'static,
    {
        Self {
            reports: fetcher.clone(),
            users: fetcher.clone(),
            items: fetcher.clone(),
            blocks: fetcher.clone(),
            notifications: fetcher.clone(),
        }
    }
}

/// 所有列表页状态
pub struct Resources {
    pub reports: ResourceListState<Report>,
    pub users: ResourceListState<User>,
    pub items: ResourceListState<Item>,
    pub blocks: ResourceListState<Block>,
    pub notifications: ResourceListState<Notification>,
}

fn list_state<T>(
    fetcher: Arc<dyn ResourceFetcher<T>>,
    reporter: &Arc<dyn ErrorReporter>,
    kind: ResourceKind,
    page_size: u32,
) -> CoreResult<ResourceListState<T>> {
    let controller =
        PaginatedResourceController::new(fetcher, Arc::clone(reporter), kind.context(), page_size)?;
    Ok(ResourceListState::new(controller))
}

impl Resources {
    pub fn new(
        fetchers: Fetchers,
        reporter: &Arc<dyn ErrorReporter>,
        page_size: u32,
    ) -> CoreResult<Self> {
        Ok(Self {
            reports: list_state(fetchers.reports, reporter, ResourceKind::Reports, page_size)?,
            users: list_state(fetchers.users, reporter, ResourceKind::Users, page_size)?,
            items: list_state(fetchers.items, reporter, ResourceKind::Items, page_size)?,
            blocks: list_state(fetchers.blocks, reporter, ResourceKind::Blocks, page_size)?,
            notifications: list_state(
                fetchers.notifications,
                reporter,
                ResourceKind::Notifications,
                page_size,
            )?,
        })
    }

    /// 挂载指定列表并请求第一页
    pub fn mount(&mut self, kind: ResourceKind) -> PendingFetch {
        match kind {
            ResourceKind::Reports => mount_list::<Report>(self),
            ResourceKind::Users => mount_list::<User>(self),
            ResourceKind::Items => mount_list::<Item>(self),
            ResourceKind::Blocks => mount_list::<Block>(self),
            ResourceKind::Notifications => mount_list::<Notification>(self),
        }
    }

    pub fn unmount(&mut self, kind: ResourceKind) {
        match kind {
            ResourceKind::Reports => self.reports.controller.unmount(),
            ResourceKind::Users => self.users.controller.unmount(),
            ResourceKind::Items => self.items.controller.unmount(),
            ResourceKind::Blocks => self.blocks.controller.unmount(),
            ResourceKind::Notifications => self.notifications.controller.unmount(),
        }
    }

    pub fn is_mounted(&self, kind: ResourceKind) -> bool {
        match kind {
            ResourceKind::Reports => self.reports.controller.is_mounted(),
            ResourceKind::Users => self.users.controller.is_mounted(),
            ResourceKind::Items => self.items.controller.is_mounted(),
            ResourceKind::Blocks => self.blocks.controller.is_mounted(),
            ResourceKind::Notifications => self.notifications.controller.is_mounted(),
        }
    }

    /// 指定列表最近一次请求失败的原因
    pub fn last_error(&self, kind: ResourceKind) -> Option<&str> {
        match kind {
            ResourceKind::Reports => self.reports.controller.last_error(),
            ResourceKind::Users => self.users.controller.last_error(),
            ResourceKind::Items => self.items.controller.last_error(),
            ResourceKind::Blocks => self.blocks.controller.last_error(),
            ResourceKind::Notifications => self.notifications.controller.last_error(),
        }
    }

    /// 对指定列表执行翻页动作
    pub fn page(&mut self, kind: ResourceKind, action: PageAction) -> Option<PendingFetch> {
        match kind {
            ResourceKind::Reports => page_list::<Report>(self, action),
            ResourceKind::Users => page_list::<User>(self, action),
            ResourceKind::Items => page_list::<Item>(self, action),
            ResourceKind::Blocks => page_list::<Block>(self, action),
            ResourceKind::Notifications => page_list::<Notification>(self, action),
        }
    }

    /// 移动选中行（`forward` 为 true 时向下）
    pub fn move_selection(&mut self, kind: ResourceKind, forward: bool) {
        match kind {
            ResourceKind::Reports => step(&mut self.reports, forward),
            ResourceKind::Users => step(&mut self.users, forward),
            ResourceKind::Items => step(&mut self.items, forward),
            ResourceKind::Blocks => step(&mut self.blocks, forward),
            ResourceKind::Notifications => step(&mut self.notifications, forward),
        }
    }

    /// 应用请求结果
    pub fn settle(&mut self, page: SettledPage) -> (ResourceKind, SettleOutcome) {
        match page {
            SettledPage::Reports(settled) => settle_list(&mut self.reports, settled),
            SettledPage::Users(settled) => settle_list(&mut self.users, settled),
            SettledPage::Items(settled) => settle_list(&mut self.items, settled),
            SettledPage::Blocks(settled) => settle_list(&mut self.blocks, settled),
            SettledPage::Notifications(settled) => {
                settle_list(&mut self.notifications, settled)
            }
        }
    }
}

fn mount_list<T: ListResource>(resources: &mut Resources) -> PendingFetch {
    let list = T::list_mut(resources);
    list.selected = 0;
    T::pending(list.controller.mount())
}

fn page_list<T: ListResource>(
    resources: &mut Resources,
    action: PageAction,
) -> Option<PendingFetch> {
    let controller = &mut T::list_mut(resources).controller;
    let fetch = match action {
        PageAction::Refresh => controller.refresh(),
        PageAction::Next => controller.next_page(),
        PageAction::Previous => controller.previous_page(),
        PageAction::First => controller.first_page(),
        PageAction::Last => controller.last_page(),
    };
    fetch.map(T::pending)
}

fn step<T>(list: &mut ResourceListState<T>, forward: bool) {
    if forward {
        list.select_next();
    } else {
        list.select_previous();
    }
}

fn settle_list<T: ListResource>(
    list: &mut ResourceListState<T>,
    settled: PageSettlement<T>,
) -> (ResourceKind, SettleOutcome) {
    let outcome = list.controller.settle(settled);
    if outcome == SettleOutcome::Applied {
        list.selected = 0;
    }
    list.clamp_selection();
    (T::KIND, outcome)
}
