//! 后台任务完成消息

use shamchiroq_core::CoreResult;

use crate::model::SettledPage;

/// 后台任务的结果，由主循环转成 `AppMessage::Backend`
#[derive(Debug)]
pub enum BackendEvent {
    /// 分页请求完成
    PageSettled(SettledPage),
    /// 登出完成
    LogoutFinished(CoreResult<()>),
    /// 登录完成
    SignInFinished(CoreResult<()>),
}
