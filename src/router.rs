// In-process router
// Tracks the current absolute path; navigation is a plain push

use tracing::debug;

/// Current location within the dashboard
#[derive(Debug, Clone)]
pub struct Router {
    current: String,
}

impl Router {
    /// Start at `initial`
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            current: initial.into(),
        }
    }

    /// Current absolute path
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Whether the router is at `path`
    pub fn is_at(&self, path: &str) -> bool {
        self.current == path
    }

    /// Navigate to `path`
    pub fn push(&mut self, path: impl Into<String>) {
        let path = path.into();
        if path != self.current {
            debug!(from = %self.current, to = %path, "Navigating");
            self.current = path;
        }
    }
}
