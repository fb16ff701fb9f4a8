//! Dependency installation for subprojects.

use crate::error::{BelayError, Result};
use crate::project::Subproject;
use crate::shell::{self, CommandOptions};
use crate::ui::UserInterface;

/// Install dependencies for a subproject.
///
/// A missing subproject directory is advisory: a warning is emitted and
/// `Ok(false)` comes back so the caller skips the service. A failing
/// install command is an error.
pub fn install(sub: &Subproject, ui: &mut dyn UserInterface) -> Result<bool> {
    if !sub.exists() {
        ui.warning(&format!(
            "{} directory not found at {}, skipping",
            sub.service.name(),
            sub.dir.display()
        ));
        return Ok(false);
    }

    tracing::debug!(
        "installing {} dependencies with '{}'",
        sub.service.name(),
        sub.install_command
    );

    let mut spinner = ui.start_spinner(&format!("Installing {} dependencies", sub.service.name()));
    let options = CommandOptions {
        cwd: Some(sub.dir.clone()),
        capture: true,
        ..Default::default()
    };
    let result = match shell::execute(&sub.install_command, &options) {
        Ok(result) => result,
        Err(e) => {
            // The spinner must not outlive a spawn failure.
            spinner.finish_error(&format!(
                "{} dependency install failed",
                sub.service.name()
            ));
            return Err(e);
        }
    };

    if result.success {
        spinner.finish_success(&format!("{} dependencies installed", sub.service.name()));
        Ok(true)
    } else {
        spinner.finish_error(&format!(
            "{} dependency install failed",
            sub.service.name()
        ));
        if !result.stderr.trim().is_empty() {
            ui.error(result.stderr.trim_end());
        }
        Err(BelayError::CommandFailed {
            command: sub.install_command.clone(),
            code: result.exit_code,
        })
    }
}
