//! 会话 token 存储
//!
//! 使用系统钥匙串保存 API bearer token
//! 实现 shamchiroq-core 的 TokenStore trait

use async_trait::async_trait;
use keyring::Entry;
use shamchiroq_core::{CoreError, CoreResult, TokenStore};

const SERVICE_NAME: &str = "shamchiroq-admin";
const TOKEN_KEY: &str = "__session_token__";

/// 基于系统钥匙串的 token 存储
///
/// - Windows: Credential Manager
/// - macOS: Keychain
/// - Linux: Secret Service (GNOME Keyring / KWallet)
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyringTokenStore;

impl KeyringTokenStore {
    pub fn new() -> Self {
        Self
    }

    fn entry() -> CoreResult<Entry> {
        Entry::new(SERVICE_NAME, TOKEN_KEY)
            .map_err(|e| CoreError::Storage(format!("Failed to create entry: {e}")))
    }
}

#[async_trait]
impl TokenStore for KeyringTokenStore {
    async fn load(&self) -> CoreResult<Option<String>> {
        match Self::entry()?.get_password() {
            Ok(token) => Ok(Some(token)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(CoreError::Storage(format!("Failed to load token: {e}"))),
        }
    }

    async fn save(&self, token: &str) -> CoreResult<()> {
        Self::entry()?
            .set_password(token)
            .map_err(|e| CoreError::Storage(format!("Failed to save token: {e}")))
    }

    async fn clear(&self) -> CoreResult<()> {
        match Self::entry()?.delete_credential() {
            // 已经没有 token 也算登出成功
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(CoreError::Storage(format!("Failed to delete token: {e}"))),
        }
    }
}
