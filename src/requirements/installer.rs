//! Idempotent check-then-install for required tools.
//!
//! Each tool is probed first and skipped when already present. A tool that
//! is absent and cannot be installed (no automated path for this platform,
//! declined prompt, non-interactive session, or a failed install command)
//! is fatal: the launcher exits non-zero without starting anything.

use crate::error::{BelayError, Result};
use crate::requirements::checker;
use crate::requirements::registry::{required_tools, Tool};
use crate::shell::{self, CommandOptions, Platform};
use crate::ui::{Prompt, UserInterface};

/// Mockable dependencies for the installer.
pub struct InstallerContext<'a> {
    /// Probe for a tool's presence.
    pub is_available: &'a dyn Fn(&Tool) -> bool,
    /// Run a shell command with inherited stdio, returning true on success.
    pub run_command: &'a dyn Fn(&str) -> bool,
    /// Platform used to select install commands.
    pub platform: Platform,
}

/// Build the default [`InstallerContext`] for production use.
pub fn default_context() -> InstallerContext<'static> {
    InstallerContext {
        is_available: &checker::is_available,
        run_command: &|cmd| {
            // Installer output goes straight to the terminal.
            shell::execute(cmd, &CommandOptions::default())
                .map(|r| r.success)
                .unwrap_or(false)
        },
        platform: Platform::current(),
    }
}

/// Verify every required tool, installing the ones that are absent.
pub fn ensure_tools(ui: &mut dyn UserInterface, ctx: &InstallerContext<'_>) -> Result<()> {
    for tool in required_tools() {
        ensure_tool(&tool, ui, ctx)?;
    }
    Ok(())
}

fn ensure_tool(tool: &Tool, ui: &mut dyn UserInterface, ctx: &InstallerContext<'_>) -> Result<()> {
    if (ctx.is_available)(tool) {
        tracing::debug!("{} already installed", tool.name);
        return Ok(());
    }

    let Some(install) = tool.install_command(ctx.platform) else {
        return Err(BelayError::ToolMissing {
            tool: tool.name.to_string(),
            hint: tool.hint.to_string(),
        });
    };

    if !ui.is_interactive() {
        return Err(BelayError::ToolMissing {
            tool: tool.name.to_string(),
            hint: format!("{} (auto-install needs an interactive terminal)", tool.hint),
        });
    }

    let prompt = Prompt {
        key: format!("install_{}", tool.name),
        question: format!("{} is not installed. Install it now?", tool.name),
        default: true,
    };
    if !ui.confirm(&prompt)? {
        return Err(BelayError::ToolMissing {
            tool: tool.name.to_string(),
            hint: tool.hint.to_string(),
        });
    }

    ui.message(&format!("Installing {}...", tool.name));
    if !(ctx.run_command)(install) {
        return Err(BelayError::ToolInstallFailed {
            tool: tool.name.to_string(),
            message: "install command exited non-zero".to_string(),
        });
    }

    // Install exited 0; verify the tool actually landed on PATH.
    if (ctx.is_available)(tool) {
        ui.success(&format!("{} installed", tool.name));
        Ok(())
    } else {
        Err(BelayError::ToolInstallFailed {
            tool: tool.name.to_string(),
            message: "installed (exit 0) but not found on PATH; a shell restart may be needed"
                .to_string(),
        })
    }
}
