//! 页面内容

pub mod resource_list;
pub mod signed_out;
