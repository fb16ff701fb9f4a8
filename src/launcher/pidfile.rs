//! PID file handling for the backgrounded backend.
//!
//! Everything here is best-effort: a missing, unreadable, or stale PID file
//! is advisory and never fails an invocation.

use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// PID file recording the backgrounded backend process.
#[derive(Debug, Clone)]
pub struct PidFile {
    path: PathBuf,
}

impl PidFile {
    /// Default location under the project's `.belay` directory.
    pub fn for_project(root: &Path) -> Self {
        Self {
            path: root.join(".belay").join("backend.pid"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Record a PID, creating the parent directory if needed.
    pub fn write(&self, pid: u32) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, format!("{pid}\n"))?;
        Ok(())
    }

    /// Read the recorded PID, if the file exists and parses.
    pub fn read(&self) -> Option<u32> {
        let contents = fs::read_to_string(&self.path).ok()?;
        contents.trim().parse().ok()
    }

    /// Remove the file, ignoring one that is already gone.
    pub fn remove(&self) {
        let _ = fs::remove_file(&self.path);
    }
}

/// What a liveness probe could learn about a recorded PID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Liveness {
    Alive,
    Dead,
    /// No cheap existence probe on this platform.
    Unknown,
}

impl Liveness {
    /// Whether a terminate attempt is warranted. Only a PID known to be
    /// dead is skipped; an unknown one is signaled best-effort.
    pub fn should_signal(self) -> bool {
        self != Liveness::Dead
    }
}

/// Probe whether a process with the given PID is alive.
///
/// Signal 0 probes for existence without delivering anything.
#[cfg(unix)]
pub fn probe(pid: u32) -> Liveness {
    let Some(pid) = as_signal_pid(pid) else {
        return Liveness::Dead;
    };
    if unsafe { libc::kill(pid, 0) == 0 } {
        Liveness::Alive
    } else {
        Liveness::Dead
    }
}

#[cfg(not(unix))]
pub fn probe(pid: u32) -> Liveness {
    if as_signal_pid(pid).is_none() {
        return Liveness::Dead;
    }
    Liveness::Unknown
}

/// Ask the process to terminate, best-effort.
#[cfg(unix)]
pub fn terminate(pid: u32) -> bool {
    let Some(pid) = as_signal_pid(pid) else {
        return false;
    };
    unsafe { libc::kill(pid, libc::SIGTERM) == 0 }
}

#[cfg(not(unix))]
pub fn terminate(pid: u32) -> bool {
    if as_signal_pid(pid).is_none() {
        return false;
    }
    std::process::Command::new("taskkill")
        .args(["/PID", &pid.to_string(), "/F"])
        .status()
        .is_ok_and(|s| s.success())
}

/// Reject PIDs that cannot be safely signaled (0 targets the whole process
/// group; values beyond i32 are not real PIDs).
fn as_signal_pid(pid: u32) -> Option<i32> {
    if pid == 0 || pid > i32::MAX as u32 {
        return None;
    }
    Some(pid as i32)
}
