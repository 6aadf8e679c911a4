//! Update 层产生的副作用
//!
//! Update 只修改状态，需要 await 的工作以 `Effect` 的形式交给 Backend 执行。

use std::fmt;

use shamchiroq_core::navigation::LogoutTask;

use crate::model::PendingFetch;

/// 待执行的副作用
pub enum Effect {
    /// 拉取一页数据
    Fetch(PendingFetch),
    /// 执行已确认的登出
    Logout(LogoutTask),
    /// 保存 token 并登录
    SignIn(String),
}

impl fmt::Debug for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch(fetch) => f.debug_tuple("Fetch").field(fetch).finish(),
            Self::Logout(_) => f.write_str("Logout"),
            Self::SignIn(_) => f.write_str("SignIn(<redacted>)"),
        }
    }
}
