//! Presence checks for required tools.

use crate::requirements::registry::Tool;
use crate::shell;

/// Check whether a tool answers its probe command on the current PATH.
pub fn is_available(tool: &Tool) -> bool {
    let available = shell::execute_check(tool.probe, None);
    tracing::debug!("probe '{}' -> {}", tool.probe, available);
    available
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_success_means_available() {
        let tool = Tool {
            name: "fake",
            probe: "exit 0",
            hint: "",
        };
        assert!(is_available(&tool));
    }

    #[test]
    fn probe_failure_means_unavailable() {
        let tool = Tool {
            name: "fake",
            probe: "exit 7",
            hint: "",
        };
        assert!(!is_available(&tool));
    }
}
