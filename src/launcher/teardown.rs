//! Signal-triggered cleanup of spawned services.

use crate::launcher::pidfile::{self, PidFile};
use crate::ui::UserInterface;
use std::process::Child;

/// Stops spawned services in a fixed order: frontend first, then the
/// in-memory backend, then any PID-file-tracked backend left over from an
/// earlier `--backend-bg` run.
///
/// [`Teardown::run`] fires once; later invocations are no-ops. Every step
/// is best-effort, so a child that already exited never causes an error.
#[derive(Default)]
pub struct Teardown {
    frontend: Option<Child>,
    backend: Option<Child>,
    pid_file: Option<PidFile>,
    done: bool,
}

impl Teardown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track_frontend(&mut self, child: Child) {
        self.frontend = Some(child);
    }

    pub fn track_backend(&mut self, child: Child) {
        self.backend = Some(child);
    }

    pub fn track_pid_file(&mut self, pid_file: PidFile) {
        self.pid_file = Some(pid_file);
    }

    /// Poll tracked children, returning true once any has exited.
    pub fn any_exited(&mut self) -> bool {
        for child in [self.frontend.as_mut(), self.backend.as_mut()]
            .into_iter()
            .flatten()
        {
            if let Ok(Some(_)) = child.try_wait() {
                return true;
            }
        }
        false
    }

    /// Stop everything that is still tracked.
    pub fn run(&mut self, ui: &mut dyn UserInterface) {
        if self.done {
            return;
        }
        self.done = true;

        if let Some(mut child) = self.frontend.take() {
            stop_child("frontend", &mut child, ui);
        }
        if let Some(mut child) = self.backend.take() {
            stop_child("backend", &mut child, ui);
        }
        if let Some(pid_file) = self.pid_file.take() {
            stop_pid_file_backend(&pid_file, ui);
        }
    }
}

fn stop_child(name: &str, child: &mut Child, ui: &mut dyn UserInterface) {
    match child.try_wait() {
        Ok(Some(status)) => {
            tracing::debug!("{} already exited with {}", name, status);
        }
        _ => {
            let _ = child.kill();
            let _ = child.wait();
            ui.message(&format!("Stopped {name}"));
        }
    }
}

fn stop_pid_file_backend(pid_file: &PidFile, ui: &mut dyn UserInterface) {
    match pid_file.read() {
        // When liveness cannot be probed the PID is signaled best-effort.
        Some(pid) if pidfile::probe(pid).should_signal() => {
            if pidfile::terminate(pid) {
                ui.message(&format!("Stopped background backend (pid {pid})"));
            } else {
                ui.warning(&format!("Could not signal background backend (pid {pid})"));
            }
        }
        Some(pid) => {
            ui.warning(&format!(
                "Stale PID file: process {pid} is not running"
            ));
        }
        None => {
            if pid_file.exists() {
                ui.warning(&format!(
                    "PID file at {} is unreadable",
                    pid_file.path().display()
                ));
            }
        }
    }
    // Removed regardless of signaling outcome.
    pid_file.remove();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    #[test]
    fn run_with_nothing_tracked_is_fine() {
        let mut teardown = Teardown::new();
        let mut ui = MockUI::new();
        teardown.run(&mut ui);
        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn run_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let pid_file = PidFile::for_project(temp.path());
        pid_file.write(u32::MAX).unwrap();

        let mut teardown = Teardown::new();
        teardown.track_pid_file(pid_file.clone());
        let mut ui = MockUI::new();

        teardown.run(&mut ui);
        let warnings_after_first = ui.warnings().len();
        teardown.run(&mut ui);

        // Second run is a no-op: no extra warnings, no resurrection.
        assert_eq!(ui.warnings().len(), warnings_after_first);
        assert!(!pid_file.exists());
    }

    #[cfg(unix)]
    #[test]
    fn kills_a_running_frontend() {
        let child = std::process::Command::new("sleep").arg("30").spawn().unwrap();

        let mut teardown = Teardown::new();
        teardown.track_frontend(child);
        let mut ui = MockUI::new();

        teardown.run(&mut ui);
        assert!(ui.has_message("Stopped frontend"));
    }

    #[test]
    fn exited_child_is_not_reported_as_stopped() {
        let mut child = std::process::Command::new(if cfg!(windows) { "cmd" } else { "true" });
        if cfg!(windows) {
            child.args(["/C", "exit 0"]);
        }
        let mut child = child.spawn().unwrap();
        child.wait().unwrap();

        let mut teardown = Teardown::new();
        teardown.track_backend(child);
        let mut ui = MockUI::new();

        teardown.run(&mut ui);
        assert!(!ui.has_message("Stopped backend"));
    }

    #[test]
    fn stale_pid_file_warns_and_is_removed() {
        let temp = TempDir::new().unwrap();
        let pid_file = PidFile::for_project(temp.path());
        pid_file.write(u32::MAX).unwrap();

        let mut teardown = Teardown::new();
        teardown.track_pid_file(pid_file.clone());
        let mut ui = MockUI::new();

        teardown.run(&mut ui);

        assert!(ui.has_warning("not running") || ui.has_warning("Could not signal"));
        assert!(!pid_file.exists());
    }

    #[cfg(unix)]
    #[test]
    fn any_exited_tracks_child_exit() {
        let child = std::process::Command::new("true").spawn().unwrap();
        let mut teardown = Teardown::new();
        teardown.track_backend(child);

        for _ in 0..50 {
            if teardown.any_exited() {
                return;
            }
            std::thread::sleep(std::time::Duration::from_millis(20));
        }
        panic!("exited child never observed");
    }
}
