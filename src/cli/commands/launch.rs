//! The launch path: verify tools, install dependencies, run the services.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::cli::args::Cli;
use crate::error::Result;
use crate::launcher::pidfile::{self, PidFile};
use crate::launcher::{spawn, LaunchPlan, Teardown};
use crate::project::{deps, Subproject};
use crate::requirements::installer;
use crate::shell::platform;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// How often the supervision loop polls children and the stop flag.
const POLL_INTERVAL: Duration = Duration::from_millis(200);

pub struct LaunchCommand {
    project_root: PathBuf,
    cli: Cli,
}

impl LaunchCommand {
    pub fn new(project_root: &Path, cli: Cli) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            cli,
        }
    }

    fn launch_detached(
        &self,
        backend: &Subproject,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let pid_file = PidFile::for_project(&self.project_root);
        if let Some(pid) = pid_file.read() {
            // An unprobeable PID counts as running; --stop-backend clears it.
            if pidfile::probe(pid).should_signal() {
                ui.warning(&format!(
                    "Background backend already running (pid {pid}); stop it with 'belay --stop-backend'"
                ));
                return Ok(CommandResult::success());
            }
            ui.warning(&format!("Removing stale PID file (process {pid} is gone)"));
            pid_file.remove();
        }

        config_hint(ui);

        let (pid, log) = spawn::spawn_detached(backend, &self.project_root)?;
        ui.success(&format!("Backend running in the background (pid {pid})"));
        ui.message(&format!("Logs: {}", log.display()));
        ui.message("Stop it with 'belay --stop-backend'");
        Ok(CommandResult::success())
    }

    fn launch_foreground(
        &self,
        backend: Option<&Subproject>,
        frontend: Option<&Subproject>,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let mut teardown = Teardown::new();

        // A backend backgrounded by an earlier run is torn down with
        // everything else on exit.
        let pid_file = PidFile::for_project(&self.project_root);
        if pid_file.exists() {
            teardown.track_pid_file(pid_file);
        }

        let spawned = (|| -> Result<()> {
            if let Some(sub) = backend {
                config_hint(ui);
                let child = spawn::spawn_service(sub)?;
                teardown.track_backend(child);
            }
            if let Some(sub) = frontend {
                let child = spawn::spawn_service(sub)?;
                teardown.track_frontend(child);
            }
            Ok(())
        })();

        if let Err(e) = spawned {
            teardown.run(ui);
            return Err(e);
        }

        ui.message("Services running. Press Ctrl+C to stop.");

        let stop = Arc::new(AtomicBool::new(false));
        let handler_flag = Arc::clone(&stop);
        if let Err(e) = ctrlc::set_handler(move || handler_flag.store(true, Ordering::SeqCst)) {
            tracing::warn!("could not install signal handler: {e}");
        }

        while !stop.load(Ordering::SeqCst) && !teardown.any_exited() {
            thread::sleep(POLL_INTERVAL);
        }

        if stop.load(Ordering::SeqCst) {
            tracing::debug!("interrupt received, shutting down");
        } else {
            tracing::debug!("a service exited, shutting down the rest");
        }

        teardown.run(ui);
        ui.success("All services stopped");
        Ok(CommandResult::success())
    }
}

impl Command for LaunchCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let plan =
            LaunchPlan::from_flags(self.cli.no_backend, self.cli.no_frontend, self.cli.backend_bg);
        if plan.is_empty() {
            ui.warning("Nothing to launch: both services are disabled");
            return Ok(CommandResult::success());
        }

        installer::ensure_tools(ui, &installer::default_context())?;

        let backend = Subproject::backend(&self.project_root.join(&self.cli.backend_dir));
        let frontend = Subproject::frontend(&self.project_root.join(&self.cli.frontend_dir));

        let backend_ready = plan.start_backend && deps::install(&backend, ui)?;
        let frontend_ready = plan.start_frontend && deps::install(&frontend, ui)?;

        if !backend_ready && !frontend_ready {
            ui.warning("No services to start");
            return Ok(CommandResult::success());
        }

        if plan.backend_detached {
            return self.launch_detached(&backend, ui);
        }

        self.launch_foreground(
            backend_ready.then_some(&backend),
            frontend_ready.then_some(&frontend),
            ui,
        )
    }
}

/// The backend creates its own config file from a template on first run;
/// this only points at where that will land.
fn config_hint(ui: &mut dyn UserInterface) {
    if let Some(dir) = platform::backend_config_dir() {
        if !dir.exists() {
            ui.message(&format!(
                "First run: the backend will create its configuration under {}",
                dir.display()
            ));
        }
    }
}
