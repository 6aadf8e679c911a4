//! Collaborator abstraction traits
//!
//! The core never talks to the terminal, the keyring or the network directly;
//! each concern is injected through one of these traits.

mod error_reporter;
mod resource_fetcher;
mod router;
mod session_service;
mod token_store;

pub use error_reporter::{ErrorReporter, LogErrorReporter};
pub use resource_fetcher::ResourceFetcher;
pub use router::{MemoryRouter, Router};
pub use session_service::SessionService;
pub use token_store::{MemoryTokenStore, TokenStore};
