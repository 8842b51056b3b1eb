//! Value objects: starter templates and JavaScript package managers.

use std::fmt;
use std::str::FromStr;

use crate::domain::DomainError;

// ============================================================================
// TemplateKind
// ============================================================================

/// Starter template controlling the entry file and dependency set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TemplateKind {
    /// Sync coordinator plus stack metadata logging.
    #[default]
    Minimal,
    /// Every stack namespace imported, edge AI sketched in comments.
    Full,
    /// Async entry point driving the edge inference SDK.
    EdgeAi,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 3] = [Self::Minimal, Self::Full, Self::EdgeAi];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Full => "full",
            Self::EdgeAi => "edge-ai",
        }
    }

    /// One-line description used in help output.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Minimal => "Minimal starter (default)",
            Self::Full => "Full-stack with all packages",
            Self::EdgeAi => "Edge AI focused starter",
        }
    }

    /// Whether the generated project depends on the UI framework and its DOM binding.
    pub const fn includes_ui_framework(self) -> bool {
        matches!(self, Self::Full | Self::EdgeAi)
    }

    /// Parse a user-supplied template name, falling back to the default.
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_else(|_| {
            tracing::debug!(template = value, "Unknown template, using minimal");
            Self::default()
        })
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimal" => Ok(Self::Minimal),
            "full" => Ok(Self::Full),
            "edge-ai" => Ok(Self::EdgeAi),
            _ => Err(DomainError::UnknownTemplate { value: s.into() }),
        }
    }
}

// ============================================================================
// PackageManager
// ============================================================================

/// JavaScript package managers the scaffolder knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PackageManager {
    #[default]
    Npm,
    Bun,
    Pnpm,
    Yarn,
}

impl PackageManager {
    /// Managers recognisable from a user-agent hint, in priority order.
    const USER_AGENT_PRIORITY: [PackageManager; 3] = [Self::Bun, Self::Pnpm, Self::Yarn];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Bun => "bun",
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
        }
    }

    /// Executable name.
    pub const fn program(self) -> &'static str {
        self.as_str()
    }

    /// Arguments of the dependency install command.
    pub fn install_args(self) -> Vec<String> {
        vec!["install".to_string()]
    }

    /// Human-readable install command, e.g. `pnpm install`.
    pub fn install_command(self) -> String {
        format!("{} {}", self.program(), self.install_args().join(" "))
    }

    /// Command that runs a package script, e.g. `bun run dev`.
    pub fn run_script(self, script: &str) -> String {
        format!("{} run {}", self.program(), script)
    }

    /// Pick the manager named in a user-agent string such as
    /// `pnpm/9.1.0 npm/? node/v20.11.0 linux x64`.
    ///
    /// `npm` is never inferred here; every agent string mentions it.
    pub fn from_user_agent(user_agent: &str) -> Option<Self> {
        Self::USER_AGENT_PRIORITY
            .into_iter()
            .find(|pm| user_agent.contains(pm.as_str()))
    }

    /// Parse a `--pm` value; unknown values yield `None` so detection runs.
    pub fn parse_lenient(value: &str) -> Option<Self> {
        match value.parse() {
            Ok(pm) => Some(pm),
            Err(_) => {
                tracing::debug!(pm = value, "Unknown package manager, detecting instead");
                None
            }
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageManager {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "npm" => Ok(Self::Npm),
            "bun" => Ok(Self::Bun),
            "pnpm" => Ok(Self::Pnpm),
            "yarn" => Ok(Self::Yarn),
            _ => Err(DomainError::UnknownPackageManager { value: s.into() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_round_trips_through_display() {
        for kind in TemplateKind::ALL {
            assert_eq!(kind.to_string().parse::<TemplateKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_template_falls_back_to_minimal() {
        assert_eq!(TemplateKind::parse_lenient("vue"), TemplateKind::Minimal);
        assert_eq!(TemplateKind::parse_lenient("EDGE-AI"), TemplateKind::EdgeAi);
    }

    #[test]
    fn only_full_and_edge_ai_pull_in_the_ui_framework() {
        assert!(!TemplateKind::Minimal.includes_ui_framework());
        assert!(TemplateKind::Full.includes_ui_framework());
        assert!(TemplateKind::EdgeAi.includes_ui_framework());
    }

    #[test]
    fn user_agent_priority_is_bun_pnpm_yarn() {
        assert_eq!(
            PackageManager::from_user_agent("pnpm/9.1.0 npm/? node/v20.11.0"),
            Some(PackageManager::Pnpm)
        );
        assert_eq!(
            PackageManager::from_user_agent("yarn/4.0.0 npm/? node/v20"),
            Some(PackageManager::Yarn)
        );
        // bun outranks anything else mentioned in the same string
        assert_eq!(
            PackageManager::from_user_agent("bun/1.1.0 pnpm-compat yarn"),
            Some(PackageManager::Bun)
        );
        assert_eq!(
            PackageManager::from_user_agent("npm/10.2.0 node/v20.11.0"),
            None
        );
    }

    #[test]
    fn unknown_pm_is_ignored() {
        assert_eq!(PackageManager::parse_lenient("deno"), None);
        assert_eq!(PackageManager::parse_lenient("Yarn"), Some(PackageManager::Yarn));
    }

    #[test]
    fn commands_are_rendered_per_manager() {
        assert_eq!(PackageManager::Bun.install_command(), "bun install");
        assert_eq!(PackageManager::Pnpm.run_script("dev"), "pnpm run dev");
    }
}
