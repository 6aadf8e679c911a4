//! Shamchiroq Admin TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新，返回副作用 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 副作用执行、配置与 token 存储 (`backend/`)
//!
//! 启动顺序：
//!     日志 → 配置 → 语言 → 会话恢复 → 路由器与导航外壳 → 列表控制器 → 终端 → 主循环
//!
//! 无论主循环成功与否，都先恢复终端再返回结果。

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use anyhow::{Context, Result};
use shamchiroq_core::api::ApiClient;
use shamchiroq_core::traits::{LogErrorReporter, MemoryRouter};
use shamchiroq_core::{
    ErrorReporter, NavigationShell, RouteRegistry, Router, SessionSubject, TokenSession,
};

use backend::{config_dir, Backend, KeyringTokenStore, LocalConfigService};
use i18n::Language;
use model::{App, Fetchers, Resources};
use util::{init_logging, init_terminal, install_panic_hook, restore_terminal};

#[tokio::main]
async fn main() -> Result<()> {
    // 1. 日志（guard 存活到退出）
    let _log_guard = init_logging(&config_dir().join("logs"))?;
    tracing::info!("Starting Shamchiroq Admin v{}", env!("CARGO_PKG_VERSION"));

    // 2. 配置
    let config_service = LocalConfigService::default_location();
    let config = config_service.load_with_env()?;
    tracing::info!(
        "Config loaded from {} (api: {}, page size: {})",
        config_service.path().display(),
        config.api_base_url,
        config.page_size
    );

    // 3. 语言
    match Language::from_code(&config.language) {
        Some(language) => {
            i18n::set_language(language);
            tracing::debug!("Language set to {}", language.code());
        }
        None => tracing::warn!("Unknown language {:?}, using en-US", config.language),
    }

    // 4. 会话
    let subject = SessionSubject::new();
    let session = Arc::new(TokenSession::new(
        Arc::new(KeyringTokenStore::new()),
        subject.clone(),
    ));
    let restore_error = match session.restore().await {
        Ok(restored) => {
            tracing::info!("Session restored: {restored}");
            None
        }
        Err(e) => {
            tracing::error!("Failed to restore session: {e}");
            Some(e)
        }
    };

    // 5. 路由与导航外壳
    let router = Arc::new(MemoryRouter::new("/"));
    let (width, _) = crossterm::terminal::size().context("Failed to read terminal size")?;
    let shell = NavigationShell::new(
        RouteRegistry::default_routes()?,
        router.clone(),
        session.clone(),
        width,
    )
    .with_breakpoint(config.narrow_breakpoint);

    // 6. 列表控制器
    let client = ApiClient::new(&config.api_base_url, subject.clone())?;
    let reporter: Arc<dyn ErrorReporter> = Arc::new(LogErrorReporter);
    let resources = Resources::new(Fetchers::rest(&client), &reporter, config.page_size)?;

    let mut app = App::new(shell, subject.current(), resources);
    if let Some(e) = restore_error {
        app.modal.show_error(i18n::t().modal.error.title, &e.to_string());
    }
    let observers = app::Observers {
        route: router.subscribe(),
        session: subject.subscribe(),
    };
    let mut backend = Backend::new(session);

    // 7. 终端与主循环
    install_panic_hook();
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, &mut backend, observers).await;
    restore_terminal(&mut terminal)?;

    tracing::info!("Exiting");
    result
}
