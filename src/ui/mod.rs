//! Terminal output and prompts.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`MockUI`] for tests
//!
//! # Example
//!
//! ```
//! use belay::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.success("Services stopped");
//! ```

pub mod mock;
pub mod terminal;

pub use mock::{MockSpinner, MockUI};
pub use terminal::{create_ui, TerminalUI};

use crate::error::Result;

/// How much output to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Quiet,
    Normal,
    Verbose,
}

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Ask a yes/no question. Non-interactive implementations return the
    /// prompt's default.
    fn confirm(&mut self, prompt: &Prompt) -> Result<bool>;

    /// Start a spinner for a long-running operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Update the spinner message.
    fn set_message(&mut self, msg: &str);

    /// Mark the operation as successful.
    fn finish_success(&mut self, msg: &str);

    /// Mark the operation as failed.
    fn finish_error(&mut self, msg: &str);
}

/// A yes/no confirmation prompt.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Unique key for the prompt (used for lookup in tests).
    pub key: String,
    /// The question to display.
    pub question: String,
    /// Answer assumed when the user just presses enter.
    pub default: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_mode_is_comparable() {
        assert_eq!(OutputMode::Quiet, OutputMode::Quiet);
        assert_ne!(OutputMode::Quiet, OutputMode::Verbose);
    }

    #[test]
    fn prompt_carries_default() {
        let prompt = Prompt {
            key: "install_uv".into(),
            question: "Install uv?".into(),
            default: true,
        };
        assert!(prompt.default);
        assert_eq!(prompt.key, "install_uv");
    }
}
