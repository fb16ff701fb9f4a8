//! Which services to start, derived from CLI flags.

/// Which services a `belay` invocation starts and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchPlan {
    pub start_backend: bool,
    pub start_frontend: bool,
    /// Start the backend detached, tracked via a PID file.
    pub backend_detached: bool,
}

impl LaunchPlan {
    /// Derive the plan from the CLI flags.
    ///
    /// Backgrounding the backend implies the frontend is not started: the
    /// launcher exits as soon as the backend is up, so nothing would be
    /// left to supervise a frontend with.
    pub fn from_flags(no_backend: bool, no_frontend: bool, backend_bg: bool) -> Self {
        let start_backend = !no_backend;
        Self {
            start_backend,
            start_frontend: !no_frontend && !backend_bg,
            backend_detached: backend_bg && start_backend,
        }
    }

    /// True when there is nothing to launch.
    pub fn is_empty(self) -> bool {
        !self.start_backend && !self.start_frontend
    }
}
