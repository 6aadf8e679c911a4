//! 跨页面复用的组件

pub mod drawer;
pub mod modal;
pub mod statusbar;
