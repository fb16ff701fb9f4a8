//! Subproject definitions for the backend and frontend services.

pub mod deps;

use std::path::{Path, PathBuf};

/// One of the two independently managed parts of the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Backend,
    Frontend,
}

impl Service {
    pub fn name(self) -> &'static str {
        match self {
            Service::Backend => "backend",
            Service::Frontend => "frontend",
        }
    }
}

/// A subproject with its own dependency manifest and dev-server command.
#[derive(Debug, Clone)]
pub struct Subproject {
    pub service: Service,
    /// Subproject directory (absolute, or relative to the launcher's cwd).
    pub dir: PathBuf,
    /// Package-manager invocation that installs dependencies.
    pub install_command: String,
    /// Long-running command that serves the subproject.
    pub serve_command: String,
}

impl Subproject {
    /// The Python backend, managed with uv.
    pub fn backend(dir: &Path) -> Self {
        Self {
            service: Service::Backend,
            dir: dir.to_path_buf(),
            install_command: "uv sync".to_string(),
            serve_command: "uv run main.py".to_string(),
        }
    }

    /// The Node frontend dev server.
    pub fn frontend(dir: &Path) -> Self {
        Self {
            service: Service::Frontend,
            dir: dir.to_path_buf(),
            install_command: "npm install".to_string(),
            serve_command: "npm run dev".to_string(),
        }
    }

    pub fn exists(&self) -> bool {
        self.dir.is_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn service_names() {
        assert_eq!(Service::Backend.name(), "backend");
        assert_eq!(Service::Frontend.name(), "frontend");
    }

    #[test]
    fn backend_uses_uv() {
        let sub = Subproject::backend(Path::new("/tmp/app/backend"));
        assert_eq!(sub.service, Service::Backend);
        assert!(sub.install_command.starts_with("uv"));
        assert!(sub.serve_command.starts_with("uv run"));
    }

    #[test]
    fn frontend_uses_npm() {
        let sub = Subproject::frontend(Path::new("/tmp/app/frontend"));
        assert_eq!(sub.install_command, "npm install");
        assert_eq!(sub.serve_command, "npm run dev");
    }

    #[test]
    fn exists_reflects_directory_presence() {
        let temp = TempDir::new().unwrap();
        let present = Subproject::backend(temp.path());
        let absent = Subproject::backend(&temp.path().join("nope"));

        assert!(present.exists());
        assert!(!absent.exists());
    }
}
