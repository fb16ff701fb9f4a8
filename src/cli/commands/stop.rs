//! The `--stop-backend` path.
//!
//! Reads the PID file, signals the process if it is still alive, and
//! removes the file regardless of outcome. A missing or stale PID file is
//! a warning, never an error; the command always exits 0.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::launcher::pidfile::{self, PidFile};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

pub struct StopCommand {
    project_root: PathBuf,
}

impl StopCommand {
    pub fn new(project_root: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
        }
    }
}

impl Command for StopCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let pid_file = PidFile::for_project(&self.project_root);

        let Some(pid) = pid_file.read() else {
            if pid_file.exists() {
                ui.warning(&format!(
                    "PID file at {} is unreadable, removing it",
                    pid_file.path().display()
                ));
                pid_file.remove();
            } else {
                ui.warning("No background backend is running (no PID file found)");
            }
            return Ok(CommandResult::success());
        };

        // When liveness cannot be probed the PID is signaled best-effort.
        if pidfile::probe(pid).should_signal() {
            if pidfile::terminate(pid) {
                ui.success(&format!("Stopped background backend (pid {pid})"));
            } else {
                ui.warning(&format!("Could not signal backend (pid {pid})"));
            }
        } else {
            ui.warning(&format!("Stale PID file: process {pid} is not running"));
        }

        pid_file.remove();
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    #[test]
    fn no_pid_file_warns_and_succeeds() {
        let temp = TempDir::new().unwrap();
        let cmd = StopCommand::new(temp.path());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, 0);
        assert!(ui.has_warning("No background backend"));
    }

    #[test]
    fn unreadable_pid_file_is_removed() {
        let temp = TempDir::new().unwrap();
        let pid_file = PidFile::for_project(temp.path());
        std::fs::create_dir_all(pid_file.path().parent().unwrap()).unwrap();
        std::fs::write(pid_file.path(), "garbage").unwrap();

        let cmd = StopCommand::new(temp.path());
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_warning("unreadable"));
        assert!(!pid_file.exists());
    }

    #[test]
    fn stale_pid_warns_and_removes_file() {
        let temp = TempDir::new().unwrap();
        let pid_file = PidFile::for_project(temp.path());
        // Out-of-range PID can never name a live process.
        pid_file.write(u32::MAX).unwrap();

        let cmd = StopCommand::new(temp.path());
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_warning("not running"));
        assert!(!pid_file.exists());
    }

    #[test]
    fn stop_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let cmd = StopCommand::new(temp.path());
        let mut ui = MockUI::new();

        assert!(cmd.execute(&mut ui).unwrap().success);
        assert!(cmd.execute(&mut ui).unwrap().success);
    }

    #[cfg(unix)]
    #[test]
    fn live_backend_is_terminated() {
        let temp = TempDir::new().unwrap();
        let child = std::process::Command::new("sleep").arg("30").spawn().unwrap();
        let pid_file = PidFile::for_project(temp.path());
        pid_file.write(child.id()).unwrap();

        let cmd = StopCommand::new(temp.path());
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("Stopped background backend"));
        assert!(!pid_file.exists());

        // Reap the child so the test process doesn't leak it.
        let mut child = child;
        let _ = child.wait();
    }
}
