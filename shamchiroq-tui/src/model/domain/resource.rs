//! 资源种类与表格行

use chrono::{DateTime, Utc};
use shamchiroq_core::api::endpoints;
use shamchiroq_core::pagination::PageFetch;
use shamchiroq_core::routes;
use shamchiroq_core::types::{Block, EntityId, Item, Notification, Report, User};

use crate::i18n::{t, ResourceTexts};
use crate::model::state::{PendingFetch, ResourceListState, Resources};

/// 资源种类（每个列表路由一种）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Reports,
    Users,
    Items,
    Blocks,
    Notifications,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 5] = [
        ResourceKind::Reports,
        ResourceKind::Users,
        ResourceKind::Items,
        ResourceKind::Blocks,
        ResourceKind::Notifications,
    ];

    /// 按路由路径解析（精确匹配）
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.path() == path)
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Reports => routes::REPORTS.path,
            Self::Users => routes::USERS.path,
            Self::Items => routes::ITEMS.path,
            Self::Blocks => routes::BLOCKS.path,
            Self::Notifications => routes::NOTIFICATIONS.path,
        }
    }

    /// 列表接口路径
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Reports => endpoints::REPORTS,
            Self::Users => endpoints::USERS,
            Self::Items => endpoints::ITEMS,
            Self::Blocks => endpoints::BLOCKS,
            Self::Notifications => endpoints::NOTIFICATIONS,
        }
    }

    /// 错误上报时使用的上下文
    pub fn context(self) -> &'static str {
        match self {
            Self::Reports => "reports.fetch_page",
            Self::Users => "users.fetch_page",
            Self::Items => "items.fetch_page",
            Self::Blocks => "blocks.fetch_page",
            Self::Notifications => "notifications.fetch_page",
        }
    }

    pub fn texts(self) -> &'static ResourceTexts {
        let lists = &t().lists;
        match self {
            Self::Reports => &lists.reports,
            Self::Users => &lists.users,
            Self::Items => &lists.items,
            Self::Blocks => &lists.blocks,
            Self::Notifications => &lists.notifications,
        }
    }
}

/// 可以放进列表页的资源
pub trait ListResource: Sized + Send + 'static {
    const KIND: ResourceKind;

    fn list(resources: &Resources) -> &ResourceListState<Self>;

    fn list_mut(resources: &mut Resources) -> &mut ResourceListState<Self>;

    /// 包装成运行时可以执行的请求
    fn pending(fetch: PageFetch<Self>) -> PendingFetch;

    /// 表格行，顺序与 `ResourceTexts::columns` 一致
    fn cells(&self) -> Vec<String>;
}

fn date(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn opt_text(value: Option<&str>) -> String {
    match value {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => "-".to_string(),
    }
}

fn opt_id(value: Option<&EntityId>) -> String {
    value.map_or_else(|| "-".to_string(), ToString::to_string)
}

fn yes_no(value: bool) -> String {
    let mark = if value { "✓" } else { "·" };
    mark.to_string()
}

impl ListResource for Report {
    const KIND: ResourceKind = ResourceKind::Reports;

    fn list(resources: &Resources) -> &ResourceListState<Self> {
        &resources.reports
    }

    fn list_mut(resources: &mut Resources) -> &mut ResourceListState<Self> {
        &mut resources.reports
    }

    fn pending(fetch: PageFetch<Self>) -> PendingFetch {
        PendingFetch::Reports(fetch)
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.reason.clone(),
            opt_id(self.reporter_id.as_ref()),
            opt_id(self.target_id.as_ref()),
            opt_text(self.status.as_deref()),
            date(self.created_at),
        ]
    }
}

impl ListResource for User {
    const KIND: ResourceKind = ResourceKind::Users;

    fn list(resources: &Resources) -> &ResourceListState<Self> {
        &resources.users
    }

    fn list_mut(resources: &mut Resources) -> &mut ResourceListState<Self> {
        &mut resources.users
    }

    fn pending(fetch: PageFetch<Self>) -> PendingFetch {
        PendingFetch::Users(fetch)
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            opt_text(self.email.as_deref()),
            opt_text(self.phone.as_deref()),
            yes_no(self.is_blocked),
            date(self.created_at),
        ]
    }
}

impl ListResource for Item {
    const KIND: ResourceKind = ResourceKind::Items;

    fn list(resources: &Resources) -> &ResourceListState<Self> {
        &resources.items
    }

    fn list_mut(resources: &mut Resources) -> &mut ResourceListState<Self> {
        &mut resources.items
    }

    fn pending(fetch: PageFetch<Self>) -> PendingFetch {
        PendingFetch::Items(fetch)
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.price
                .map_or_else(|| "-".to_string(), |price| format!("{price:.2}")),
            opt_id(self.owner_id.as_ref()),
            date(self.created_at),
        ]
    }
}

impl ListResource for Block {
    const KIND: ResourceKind = ResourceKind::Blocks;

    fn list(resources: &Resources) -> &ResourceListState<Self> {
        &resources.blocks
    }

    fn list_mut(resources: &mut Resources) -> &mut ResourceListState<Self> {
        &mut resources.blocks
    }

    fn pending(fetch: PageFetch<Self>) -> PendingFetch {
        PendingFetch::Blocks(fetch)
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            opt_id(self.user_id.as_ref()),
            opt_text(self.reason.as_deref()),
            date(self.created_at),
            date(self.expires_at),
        ]
    }
}

impl ListResource for Notification {
    const KIND: ResourceKind = ResourceKind::Notifications;

    fn list(resources: &Resources) -> &ResourceListState<Self> {
        &resources.notifications
    }

    fn list_mut(resources: &mut Resources) -> &mut ResourceListState<Self> {
        &mut resources.notifications
    }

    fn pending(fetch: PageFetch<Self>) -> PendingFetch {
        PendingFetch::Notifications(fetch)
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            opt_text(self.body.as_deref()),
            yes_no(self.is_read),
            date(self.created_at),
        ]
    }
}
