//! Error types for Belay operations.
//!
//! This module defines [`BelayError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Fatal conditions (a required tool that cannot be installed, a failed
//!   install, a failed spawn) surface as `BelayError` and exit non-zero
//! - Advisory conditions (missing subproject directory, stale PID file)
//!   are reported as warnings at the call site and never become errors
//! - Use `anyhow::Error` (via `BelayError::Other`) for unexpected errors

use thiserror::Error;

/// Core error type for Belay operations.
#[derive(Debug, Error)]
pub enum BelayError {
    /// A required tool is absent and cannot be auto-installed.
    #[error("Missing tool '{tool}': {hint}")]
    ToolMissing { tool: String, hint: String },

    /// Installation of a required tool failed.
    #[error("Failed to install '{tool}': {message}")]
    ToolInstallFailed { tool: String, message: String },

    /// Shell command failed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// A service child process could not be spawned.
    #[error("Failed to start {service}: {message}")]
    SpawnFailed { service: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Belay operations.
pub type Result<T> = std::result::Result<T, BelayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_missing_displays_tool_and_hint() {
        let err = BelayError::ToolMissing {
            tool: "uv".into(),
            hint: "see https://docs.astral.sh/uv/".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("uv"));
        assert!(msg.contains("docs.astral.sh"));
    }

    #[test]
    fn tool_install_failed_displays_tool_and_message() {
        let err = BelayError::ToolInstallFailed {
            tool: "node".into(),
            message: "install command exited non-zero".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("node"));
        assert!(msg.contains("non-zero"));
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = BelayError::CommandFailed {
            command: "npm install".into(),
            code: Some(1),
        };
        let msg = err.to_string();
        assert!(msg.contains("npm install"));
        assert!(msg.contains("1"));
    }

    #[test]
    fn spawn_failed_displays_service() {
        let err = BelayError::SpawnFailed {
            service: "frontend".into(),
            message: "No such file or directory".into(),
        };
        assert!(err.to_string().contains("frontend"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: BelayError = io_err.into();
        assert!(matches!(err, BelayError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(BelayError::ToolMissing {
                tool: "test".into(),
                hint: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
