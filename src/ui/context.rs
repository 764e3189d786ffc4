//! Detects whether output goes to an interactive terminal

use std::io::IsTerminal;

/// Environment variables set by common CI providers
const CI_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "BUILDKITE",
    "JENKINS_URL",
    "TF_BUILD",
];

/// UI context that determines output behavior
#[derive(Debug, Clone, Copy)]
pub struct UiContext {
    fancy: bool,
}

impl UiContext {
    /// Detect the current environment
    pub fn detect() -> Self {
        let terminal = std::io::stdout().is_terminal();
        let ci = CI_VARS.iter().any(|var| std::env::var_os(var).is_some());
        let no_color = std::env::var_os("NO_COLOR").is_some();
        Self {
            fancy: terminal && !ci && !no_color,
        }
    }

    /// Plain output regardless of environment
    pub fn plain() -> Self {
        Self { fancy: false }
    }

    /// Whether to use cliclack styling
    pub fn use_fancy_output(&self) -> bool {
        self.fancy
    }
}
