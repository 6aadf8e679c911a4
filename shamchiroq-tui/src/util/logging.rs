//! 日志初始化
//!
//! 终端被 TUI 占用，日志写到配置目录下按天滚动的文件里。
//! 过滤规则取自 `SHAMCHIROQ_LOG`（`EnvFilter` 语法），默认 `info`。
//! 库代码使用的 `log` 宏经由 tracing-log 桥接到同一个订阅者。

use std::path::Path;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_ENV: &str = "SHAMCHIROQ_LOG";
const LOG_FILE_PREFIX: &str = "shamchiroq-admin.log";

/// 安装全局订阅者
///
/// 返回的 guard 必须存活到程序退出，否则缓冲中的日志会丢失。
pub fn init_logging(dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(dir)?;
    let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .with(filter)
        .try_init()?;

    Ok(guard)
}
