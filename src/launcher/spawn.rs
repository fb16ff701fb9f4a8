//! Spawning service child processes.

use crate::error::{BelayError, Result};
use crate::launcher::pidfile::PidFile;
use crate::project::Subproject;
use crate::shell;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::{Child, Stdio};

/// Log file capturing the backgrounded backend's output.
pub fn log_path(root: &Path) -> PathBuf {
    root.join(".belay").join("backend.log")
}

/// Spawn a service in the foreground, sharing the launcher's terminal.
pub fn spawn_service(sub: &Subproject) -> Result<Child> {
    tracing::info!("starting {}: {}", sub.service.name(), sub.serve_command);
    shell::command::build(&sub.serve_command)
        .current_dir(&sub.dir)
        .spawn()
        .map_err(|e| BelayError::SpawnFailed {
            service: sub.service.name().to_string(),
            message: e.to_string(),
        })
}

/// Spawn the backend detached.
///
/// Output goes to the log file and the PID is recorded for a later
/// `--stop-backend`. On Unix the child gets its own process group so it
/// survives the launcher and never sees the terminal's SIGINT.
pub fn spawn_detached(sub: &Subproject, root: &Path) -> Result<(u32, PathBuf)> {
    let log = log_path(root);
    if let Some(parent) = log.parent() {
        fs::create_dir_all(parent)?;
    }
    let stdout = File::create(&log)?;
    let stderr = stdout.try_clone()?;

    let mut cmd = shell::command::build(&sub.serve_command);
    cmd.current_dir(&sub.dir)
        .stdin(Stdio::null())
        .stdout(Stdio::from(stdout))
        .stderr(Stdio::from(stderr));

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        cmd.process_group(0);
    }

    let child = cmd.spawn().map_err(|e| BelayError::SpawnFailed {
        service: sub.service.name().to_string(),
        message: e.to_string(),
    })?;

    let pid = child.id();
    PidFile::for_project(root).write(pid)?;
    tracing::info!("backend detached (pid {}), logging to {}", pid, log.display());

    Ok((pid, log))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::Service;
    use tempfile::TempDir;

    fn stub_subproject(dir: &Path, serve_command: &str) -> Subproject {
        Subproject {
            service: Service::Backend,
            dir: dir.to_path_buf(),
            install_command: "exit 0".to_string(),
            serve_command: serve_command.to_string(),
        }
    }

    #[test]
    fn spawn_service_runs_to_completion() {
        let temp = TempDir::new().unwrap();
        let sub = stub_subproject(temp.path(), "exit 0");

        let mut child = spawn_service(&sub).unwrap();
        let status = child.wait().unwrap();
        assert!(status.success());
    }

    #[test]
    fn spawn_service_in_missing_dir_fails() {
        let temp = TempDir::new().unwrap();
        let sub = stub_subproject(&temp.path().join("missing"), "exit 0");

        let err = spawn_service(&sub).unwrap_err();
        assert!(matches!(err, BelayError::SpawnFailed { .. }));
    }

    #[test]
    fn spawn_detached_records_pid_and_log() {
        let temp = TempDir::new().unwrap();
        let backend_dir = temp.path().join("backend");
        std::fs::create_dir_all(&backend_dir).unwrap();
        let sub = stub_subproject(&backend_dir, "echo started");

        let (pid, log) = spawn_detached(&sub, temp.path()).unwrap();

        assert!(pid > 0);
        assert!(log.ends_with(".belay/backend.log") || log.ends_with("backend.log"));
        assert!(log.is_file());

        let pid_file = PidFile::for_project(temp.path());
        assert_eq!(pid_file.read(), Some(pid));
    }

    #[test]
    fn detached_output_lands_in_log_file() {
        let temp = TempDir::new().unwrap();
        let backend_dir = temp.path().join("backend");
        std::fs::create_dir_all(&backend_dir).unwrap();
        let sub = stub_subproject(&backend_dir, "echo hello-from-backend");

        let (_, log) = spawn_detached(&sub, temp.path()).unwrap();

        // The child runs detached; give it a moment to write.
        for _ in 0..50 {
            let contents = std::fs::read_to_string(&log).unwrap_or_default();
            if contents.contains("hello-from-backend") {
                return;
            }
            std::thread::sleep(std::time::Duration::from_millis(20));
        }
        panic!("detached child output never reached the log file");
    }
}
