//! Registry of the external tools Belay verifies and installs.

use crate::shell::Platform;

/// An external tool required before the services can run.
#[derive(Debug, Clone)]
pub struct Tool {
    /// Tool name as shown to the user.
    pub name: &'static str,

    /// Command that exits 0 when the tool is present.
    pub probe: &'static str,

    /// Manual installation hint shown when auto-install is unavailable.
    pub hint: &'static str,
}

impl Tool {
    /// Shell command that installs this tool on the given platform.
    ///
    /// Returns `None` when no automated install path exists there; the
    /// caller falls back to [`Tool::hint`] and treats the gap as fatal.
    pub fn install_command(&self, platform: Platform) -> Option<&'static str> {
        match (self.name, platform) {
            ("uv", Platform::MacOs | Platform::Linux) => {
                Some("curl -LsSf https://astral.sh/uv/install.sh | sh")
            }
            ("uv", Platform::Windows) => {
                Some("powershell -ExecutionPolicy ByPass -c \"irm https://astral.sh/uv/install.ps1 | iex\"")
            }
            ("node", Platform::MacOs) => Some("brew install node"),
            _ => None,
        }
    }
}

/// Tools required before any service can be launched, in install order.
pub fn required_tools() -> Vec<Tool> {
    vec![
        Tool {
            name: "uv",
            probe: "uv --version",
            hint: "Install uv from https://docs.astral.sh/uv/getting-started/installation/",
        },
        Tool {
            name: "node",
            probe: "node --version",
            hint: "Install Node.js from https://nodejs.org/",
        },
    ]
}
