//! 后台资源模型
//!
//! 字段全部宽松解析：接口返回的字段并不稳定，缺失字段一律落到默认值。

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 资源 ID（接口有时返回数字，有时返回字符串）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Number(u64),
    Text(String),
}

impl Default for EntityId {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// 用户
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub id: EntityId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub is_blocked: bool,
    #[serde(with = "crate::utils::datetime")]
    pub created_at: Option<DateTime<Utc>>,
}

/// 物品（用户发布的内容）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    pub id: EntityId,
    pub title: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub owner_id: Option<EntityId>,
    #[serde(with = "crate::utils::datetime")]
    pub created_at: Option<DateTime<Utc>>,
}

/// 封禁记录
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Block {
    pub id: EntityId,
    pub user_id: Option<EntityId>,
    pub reason: Option<String>,
    #[serde(with = "crate::utils::datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(with = "crate::utils::datetime")]
    pub expires_at: Option<DateTime<Utc>>,
}

/// 通知
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Notification {
    pub id: EntityId,
    pub title: String,
    pub body: Option<String>,
    pub is_read: bool,
    #[serde(with = "crate::utils::datetime")]
    pub created_at: Option<DateTime<Utc>>,
}

/// 举报
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Report {
    pub id: EntityId,
    pub reason: String,
    pub reporter_id: Option<EntityId>,
    pub target_id: Option<EntityId>,
    pub status: Option<String>,
    #[serde(with = "crate::utils::datetime")]
    pub created_at: Option<DateTime<Utc>>,
}
