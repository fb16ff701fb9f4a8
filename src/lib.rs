//! Belay - development environment bootstrapper and dev-server launcher.
//!
//! Belay replaces the ad-hoc `dev.sh` a two-subproject repo grows: it
//! verifies the external tools the project needs (installing them when
//! possible), installs dependencies for the backend and frontend
//! subprojects, starts both dev servers as child processes, and tears them
//! down on Ctrl+C or via `--stop-backend`.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface, argument parsing, and commands
//! - [`error`] - Error types and result aliases
//! - [`launcher`] - Child-process spawning, PID files, and teardown
//! - [`project`] - Subproject definitions and dependency installation
//! - [`requirements`] - External tool verification and installation
//! - [`shell`] - Shell command execution and platform detection
//! - [`ui`] - Terminal output, prompts, and spinners
//!
//! # Example
//!
//! ```
//! use belay::launcher::LaunchPlan;
//!
//! // --backend-bg implies the frontend is not started
//! let plan = LaunchPlan::from_flags(false, false, true);
//! assert!(plan.start_backend && !plan.start_frontend);
//! ```

pub mod cli;
pub mod error;
pub mod launcher;
pub mod project;
pub mod requirements;
pub mod shell;
pub mod ui;

pub use error::{BelayError, Result};
