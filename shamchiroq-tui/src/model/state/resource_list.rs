//! 列表页状态
//!
//! 分页控制器加上当前页内的选中行。

use shamchiroq_core::PaginatedResourceController;

/// 单个列表页状态
pub struct ResourceListState<T> {
    /// 分页控制器（页码、数据、加载状态）
    pub controller: PaginatedResourceController<T>,
    /// 当前页内选中的行
    pub selected: usize,
}

impl<T> ResourceListState<T> {
    pub fn new(controller: PaginatedResourceController<T>) -> Self {
        Self {
            controller,
            selected: 0,
        }
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        let len = self.controller.items().len();
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    /// 数据替换后把选中行收回范围内
    pub fn clamp_selection(&mut self) {
        let len = self.controller.items().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}
