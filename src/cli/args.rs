//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The surface is flag-driven: one binary, no subcommands.

use clap::Parser;
use std::path::PathBuf;

/// Belay - development environment bootstrapper and dev-server launcher.
///
/// Verifies the external tools the project needs, installs subproject
/// dependencies, and runs the backend and frontend dev servers until
/// interrupted.
#[derive(Debug, Clone, Parser)]
#[command(name = "belay")]
#[command(author, version, about)]
pub struct Cli {
    /// Do not start the frontend dev server
    #[arg(long)]
    pub no_frontend: bool,

    /// Do not start the backend server
    #[arg(long)]
    pub no_backend: bool,

    /// Start the backend detached, tracked via a PID file (implies --no-frontend)
    #[arg(long)]
    pub backend_bg: bool,

    /// Stop a previously backgrounded backend and exit
    #[arg(long)]
    pub stop_backend: bool,

    /// Path to project root (overrides current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Backend subproject directory, relative to the project root
    #[arg(long, default_value = "backend", env = "BELAY_BACKEND_DIR")]
    pub backend_dir: PathBuf,

    /// Frontend subproject directory, relative to the project root
    #[arg(long, default_value = "frontend", env = "BELAY_FRONTEND_DIR")]
    pub frontend_dir: PathBuf,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Answer prompts with their defaults instead of asking
    #[arg(long)]
    pub non_interactive: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_without_flags() {
        let cli = Cli::try_parse_from(["belay"]).unwrap();
        assert!(!cli.no_frontend);
        assert!(!cli.no_backend);
        assert!(!cli.backend_bg);
        assert!(!cli.stop_backend);
        assert_eq!(cli.backend_dir, PathBuf::from("backend"));
        assert_eq!(cli.frontend_dir, PathBuf::from("frontend"));
    }

    #[test]
    fn parses_service_flags() {
        let cli = Cli::try_parse_from(["belay", "--no-frontend", "--backend-bg"]).unwrap();
        assert!(cli.no_frontend);
        assert!(cli.backend_bg);
    }

    #[test]
    fn parses_stop_backend() {
        let cli = Cli::try_parse_from(["belay", "--stop-backend"]).unwrap();
        assert!(cli.stop_backend);
    }

    #[test]
    fn unknown_flag_is_a_parse_error() {
        assert!(Cli::try_parse_from(["belay", "--bogus"]).is_err());
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["belay", "--quiet", "--verbose"]).is_err());
    }

    #[test]
    fn subproject_dirs_are_overridable() {
        let cli =
            Cli::try_parse_from(["belay", "--backend-dir", "api", "--frontend-dir", "web"])
                .unwrap();
        assert_eq!(cli.backend_dir, PathBuf::from("api"));
        assert_eq!(cli.frontend_dir, PathBuf::from("web"));
    }
}
