//! Routing collaborator abstract Trait

use tokio::sync::watch;

/// Routing Trait
///
/// Owns the current location. The navigation shell never stores its own copy
/// of the path; it reads `current_path()` whenever it needs the active route.
pub trait Router: Send + Sync {
    /// Move to `path`
    ///
    /// # Arguments
    /// * `path` - Absolute route path
    fn navigate(&self, path: &str);

    /// Current location path
    fn current_path(&self) -> String;

    /// Subscribe to location changes
    fn subscribe(&self) -> watch::Receiver<String>;
}

/// In-memory router
///
/// Default implementation backed by a `watch` channel, so every subscriber
/// observes the latest path.
pub struct MemoryRouter {
    location: watch::Sender<String>,
}

impl MemoryRouter {
    /// Create a router positioned at `initial_path`
    #[must_use]
    pub fn new(initial_path: impl Into<String>) -> Self {
        let (location, _) = watch::channel(initial_path.into());
        Self { location }
    }
}

impl Default for MemoryRouter {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Router for MemoryRouter {
    fn navigate(&self, path: &str) {
        let changed = self.location.send_if_modified(|current| {
            if current == path {
                false
            } else {
                path.clone_into(current);
                true
            }
        });
        if changed {
            log::debug!("Navigated to {path}");
        }
    }

    fn current_path(&self) -> String {
        self.location.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<String> {
        self.location.subscribe()
    }
}
