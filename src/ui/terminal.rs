//! Terminal UI for interactive and headless usage.

use std::time::Duration;

use console::style;
use dialoguer::theme::ColorfulTheme;
use indicatif::ProgressBar;

use crate::error::Result;
use crate::ui::{OutputMode, Prompt, SpinnerHandle, UserInterface};

/// Create the UI appropriate for the current session.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(interactive, mode))
}

/// Terminal-backed user interface.
///
/// When not interactive, prompts resolve to their defaults and spinners
/// degrade to plain log lines.
pub struct TerminalUI {
    interactive: bool,
    mode: OutputMode,
}

impl TerminalUI {
    pub fn new(interactive: bool, mode: OutputMode) -> Self {
        Self { interactive, mode }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode != OutputMode::Quiet {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode != OutputMode::Quiet {
            println!("{} {}", style("✓").green(), msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{} {}", style("✗").red().bold(), msg);
    }

    fn confirm(&mut self, prompt: &Prompt) -> Result<bool> {
        if !self.interactive {
            tracing::debug!(
                "non-interactive: answering '{}' with default {}",
                prompt.key,
                prompt.default
            );
            return Ok(prompt.default);
        }

        let answer = dialoguer::Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(&prompt.question)
            .default(prompt.default)
            .interact()
            .map_err(anyhow::Error::from)?;
        Ok(answer)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.interactive && self.mode != OutputMode::Quiet {
            let bar = ProgressBar::new_spinner();
            bar.enable_steady_tick(Duration::from_millis(80));
            bar.set_message(message.to_string());
            Box::new(TerminalSpinner { bar })
        } else {
            if self.mode != OutputMode::Quiet {
                println!("{}...", message);
            }
            Box::new(PlainSpinner {
                quiet: self.mode == OutputMode::Quiet,
            })
        }
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

struct TerminalSpinner {
    bar: ProgressBar,
}

impl SpinnerHandle for TerminalSpinner {
    fn set_message(&mut self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }

    fn finish_success(&mut self, msg: &str) {
        self.bar.finish_and_clear();
        println!("{} {}", style("✓").green(), msg);
    }

    fn finish_error(&mut self, msg: &str) {
        self.bar.finish_and_clear();
        eprintln!("{} {}", style("✗").red().bold(), msg);
    }
}

struct PlainSpinner {
    quiet: bool,
}

impl SpinnerHandle for PlainSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        if !self.quiet {
            println!("{} {}", style("✓").green(), msg);
        }
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("{} {}", style("✗").red().bold(), msg);
    }
}
