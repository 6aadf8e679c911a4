//! Session collaborator abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;

/// Session Trait
///
/// Used by the confirmed-logout transition. The shell does not inspect the
/// outcome beyond success or failure and never redirects by itself; whoever
/// observes the session subject reacts to the signed-out state.
#[async_trait]
pub trait SessionService: Send + Sync {
    /// End the current session
    async fn terminate_session(&self) -> CoreResult<()>;
}
