//! Shamchiroq Admin Core Library
//!
//! Platform-independent building blocks of the admin console:
//! - Route registry and navigation shell (drawer, responsive layout, guarded logout)
//! - Paginated resource controller with stale-result suppression
//! - Session subject and REST listing client
//!
//! Collaborators (router, session, token storage, fetchers, error reporting)
//! are abstracted through traits so the front end can supply its own.

pub mod api;
pub mod confirm;
pub mod error;
pub mod navigation;
pub mod pagination;
pub mod routes;
pub mod session;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use navigation::NavigationShell;
pub use pagination::{ListStatus, PaginatedResourceController, SettleOutcome};
pub use routes::{RouteDescriptor, RouteRegistry};
pub use session::{SessionState, SessionSubject, TokenSession};
pub use traits::{ErrorReporter, ResourceFetcher, Router, SessionService, TokenStore};
