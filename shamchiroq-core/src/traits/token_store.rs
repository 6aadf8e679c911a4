//! Session token storage abstract Trait

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::CoreResult;

/// Token storage Trait
///
/// Holds the bearer token sent with every API request.
///
/// Platform implementation:
/// - TUI: `KeyringTokenStore` (keyring crate)
/// - Tests: `MemoryTokenStore`
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Load the stored token
    ///
    /// # Returns
    /// * `Ok(Some(token))` - A token is stored
    /// * `Ok(None)` - No token (signed out)
    async fn load(&self) -> CoreResult<Option<String>>;

    /// Save the token
    ///
    /// # Arguments
    /// * `token` - Bearer token
    async fn save(&self, token: &str) -> CoreResult<()>;

    /// Delete the token
    async fn clear(&self) -> CoreResult<()>;
}

/// In-memory token store
#[derive(Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `token`
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn load(&self) -> CoreResult<Option<String>> {
        Ok(self.token.read().await.clone())
    }

    async fn save(&self, token: &str) -> CoreResult<()> {
        *self.token.write().await = Some(token.to_string());
        Ok(())
    }

    async fn clear(&self) -> CoreResult<()> {
        *self.token.write().await = None;
        Ok(())
    }
}
