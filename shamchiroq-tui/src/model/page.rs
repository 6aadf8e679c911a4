//! 页面状态定义

use super::domain::ResourceKind;

/// 页面枚举
///
/// 由当前路由路径和会话状态推导，不单独保存。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// 未登录
    SignedOut,
    /// 资源列表
    List(ResourceKind),
    /// 路径没有对应的页面
    NotFound,
}

impl Page {
    /// 按路径解析
    pub fn resolve(path: &str, authenticated: bool) -> Self {
        if !authenticated {
            return Page::SignedOut;
        }
        ResourceKind::from_path(path).map_or(Page::NotFound, Page::List)
    }

    /// 当前页面对应的列表
    pub fn resource(self) -> Option<ResourceKind> {
        match self {
            Page::List(kind) => Some(kind),
            Page::SignedOut | Page::NotFound => None,
        }
    }
}
