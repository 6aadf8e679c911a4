//! 路由注册表
//!
//! 抽屉中可导航的目标页面列表。启动时定义一次，运行期间不可变；
//! 列表顺序即抽屉中的显示顺序。

use std::collections::HashSet;

use crate::error::{CoreError, CoreResult};

/// 路由描述
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// 绝对路径（唯一）
    pub path: &'static str,
    /// 显示名称
    pub title: &'static str,
    /// 图标（终端字形）
    pub icon: &'static str,
}

impl RouteDescriptor {
    pub const fn new(path: &'static str, title: &'static str, icon: &'static str) -> Self {
        Self { path, title, icon }
    }
}

/// 报表（首页）
pub const REPORTS: RouteDescriptor = RouteDescriptor::new("/", "Reports", "⌂");
/// 用户
pub const USERS: RouteDescriptor = RouteDescriptor::new("/users", "Users", "@");
/// 物品
pub const ITEMS: RouteDescriptor = RouteDescriptor::new("/items", "Items", "≡");
/// 封禁
pub const BLOCKS: RouteDescriptor = RouteDescriptor::new("/blocks", "Blocks", "⊘");
/// 通知
pub const NOTIFICATIONS: RouteDescriptor =
    RouteDescriptor::new("/notifications", "Notifications", "◔");

/// 控制台默认的五个页面，按抽屉显示顺序
pub const DEFAULT_ROUTES: [RouteDescriptor; 5] = [REPORTS, USERS, ITEMS, BLOCKS, NOTIFICATIONS];

/// 路由注册表
#[derive(Debug, Clone)]
pub struct RouteRegistry {
    routes: Vec<RouteDescriptor>,
}

impl RouteRegistry {
    /// 构建注册表
    ///
    /// 路径必须以 `/` 开头且互不重复，否则返回 `CoreError::Configuration`。
    pub fn new(routes: Vec<RouteDescriptor>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(routes.len());
        for route in &routes {
            if !route.path.starts_with('/') {
                return Err(CoreError::Configuration(format!(
                    "route path must be absolute: {}",
                    route.path
                )));
            }
            if !seen.insert(route.path) {
                return Err(CoreError::Configuration(format!(
                    "duplicate route path: {}",
                    route.path
                )));
            }
        }
        Ok(Self { routes })
    }

    /// 以 `DEFAULT_ROUTES` 构建注册表，与自定义路由表走同样的校验
    pub fn default_routes() -> CoreResult<Self> {
        Self::new(DEFAULT_ROUTES.to_vec())
    }

    pub fn routes(&self) -> &[RouteDescriptor] {
        &self.routes
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteDescriptor> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// 按路径查找
    pub fn get(&self, path: &str) -> Option<&RouteDescriptor> {
        self.routes.iter().find(|route| route.path == path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// 路径在显示顺序中的位置
    pub fn position(&self, path: &str) -> Option<usize> {
        self.routes.iter().position(|route| route.path == path)
    }
}

impl<'a> IntoIterator for &'a RouteRegistry {
    type Item = &'a RouteDescriptor;
    type IntoIter = std::slice::Iter<'a, RouteDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}

/// 当前应高亮的路由
///
/// 精确字符串匹配（不做前缀匹配）：`/users/3` 不会高亮 `/users`。
/// 每次渲染时重新计算，路由项本身不保存“选中”标记。
pub fn selected_route<'a>(
    routes: &'a RouteRegistry,
    current_path: &str,
) -> Option<&'a RouteDescriptor> {
    routes.get(current_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_routes_keep_display_order() {
        let registry = RouteRegistry::default_routes().unwrap();
        let paths: Vec<_> = registry.iter().map(|r| r.path).collect();
        assert_eq!(
            paths,
            vec!["/", "/users", "/items", "/blocks", "/notifications"]
        );
        assert_eq!(registry.routes(), &DEFAULT_ROUTES);
    }

    #[test]
    fn default_table_breaking_the_rules_is_rejected() {
        let mut routes = DEFAULT_ROUTES.to_vec();
        routes.push(BLOCKS);
        assert!(matches!(
            RouteRegistry::new(routes),
            Err(CoreError::Configuration(_))
        ));
    }

    #[test]
    fn duplicate_path_is_a_configuration_error() {
        let result = RouteRegistry::new(vec![
            USERS,
            RouteDescriptor::new("/users", "People", "#"),
        ]);
        assert!(matches!(result, Err(CoreError::Configuration(_))));
    }

    #[test]
    fn relative_path_is_a_configuration_error() {
        let result = RouteRegistry::new(vec![RouteDescriptor::new("users", "Users", "@")]);
        assert!(matches!(result, Err(CoreError::Configuration(_))));
    }

    #[test]
    fn selection_is_exact_match() {
        let registry = RouteRegistry::default_routes().unwrap();

        assert_eq!(selected_route(&registry, "/users"), Some(&USERS));
        assert_eq!(selected_route(&registry, "/"), Some(&REPORTS));
        assert_eq!(selected_route(&registry, "/users/3"), None);
        assert_eq!(selected_route(&registry, "/login"), None);
        assert_eq!(selected_route(&registry, ""), None);
    }

    #[test]
    fn at_most_one_route_is_selected() {
        let registry = RouteRegistry::default_routes().unwrap();
        for path in ["/", "/users", "/items", "/blocks", "/notifications", "/nope"] {
            let selected = registry
                .iter()
                .filter(|route| selected_route(&registry, path) == Some(*route))
                .count();
            assert!(selected <= 1, "{path} selected {selected} routes");
        }
    }
}
