//! 配置服务
//!
//! 配置文件：`<config_dir>/shamchiroq-admin/config.json`
//! 环境变量 `SHAMCHIROQ_API_URL`、`SHAMCHIROQ_PAGE_SIZE` 覆盖文件中的值。

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shamchiroq_core::navigation::NARROW_BREAKPOINT;
use shamchiroq_core::types::DEFAULT_PAGE_SIZE;

pub const ENV_API_URL: &str = "SHAMCHIROQ_API_URL";
pub const ENV_PAGE_SIZE: &str = "SHAMCHIROQ_PAGE_SIZE";

const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// API 根地址
    pub api_base_url: String,
    /// 每页行数
    pub page_size: u32,
    /// 界面语言（BCP 47）
    pub language: String,
    /// 窄屏断点（终端列数）
    pub narrow_breakpoint: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            language: "en-US".to_string(),
            narrow_breakpoint: NARROW_BREAKPOINT,
        }
    }
}

impl AppConfig {
    /// 应用环境变量覆盖
    ///
    /// `lookup` 一般是 `std::env::var(..).ok()`；无法解析的页大小会被忽略并记录警告。
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(ENV_API_URL).filter(|url| !url.trim().is_empty()) {
            self.api_base_url = url.trim().to_string();
        }
        if let Some(raw) = lookup(ENV_PAGE_SIZE) {
            match raw.trim().parse::<u32>() {
                Ok(size) => self.page_size = size,
                Err(e) => log::warn!("Ignoring {ENV_PAGE_SIZE}={raw:?}: {e}"),
            }
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 获取配置目录路径
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("shamchiroq-admin")
}

/// 本地 JSON 配置文件
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 默认位置
    pub fn default_location() -> Self {
        Self::new(config_dir().join("config.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 读取文件并应用环境变量
    pub fn load_with_env(&self) -> Result<AppConfig> {
        let mut config = self.load()?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        // 文件不存在时使用默认值
        if !self.path.exists() {
            log::info!("No config at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", self.path.display()))?;
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }
}
