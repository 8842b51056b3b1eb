//! Command selection.
//!
//! Precedence: version, then help, then the command name. Unknown or missing
//! commands fall through to the welcome screen.

use aeon_core::domain::{PackageManager, ScaffoldOptions, TemplateKind};

use super::parser::ParsedInvocation;
use crate::config::Defaults;

/// What the binary will do for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Version,
    Help,
    Init(InitRequest),
    Info,
    Welcome,
}

impl Action {
    pub fn resolve(invocation: &ParsedInvocation) -> Self {
        if invocation.has_flag("version") || invocation.has_flag("v") {
            return Self::Version;
        }
        if invocation.has_flag("help") || invocation.has_flag("h") || invocation.command() == "help" {
            return Self::Help;
        }

        match invocation.command() {
            "init" | "create" | "new" => Self::Init(InitRequest::from_invocation(invocation)),
            "info" | "stack" | "status" => Self::Info,
            _ => Self::Welcome,
        }
    }
}

/// Raw `init` arguments, before defaults are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitRequest {
    pub name: Option<String>,
    pub template: Option<String>,
    pub skip_install: bool,
    pub package_manager: Option<String>,
}

impl InitRequest {
    fn from_invocation(invocation: &ParsedInvocation) -> Self {
        // the first positional wins over --name; empty values count as absent
        let name = invocation
            .positionals()
            .first()
            .map(String::as_str)
            .filter(|n| !n.is_empty())
            .or_else(|| invocation.flag_text("name"))
            .filter(|n| !n.is_empty())
            .map(str::to_string);

        Self {
            name,
            template: invocation.flag_text("template").map(str::to_string),
            skip_install: invocation.has_flag("skip-install"),
            package_manager: invocation.flag_text("pm").map(str::to_string),
        }
    }

    /// Merge with configured defaults. Flags win; unknown values fall back
    /// (template to minimal, package manager to detection).
    pub fn into_options(self, defaults: &Defaults) -> ScaffoldOptions {
        let template = self
            .template
            .as_deref()
            .or(defaults.template.as_deref())
            .map(TemplateKind::parse_lenient)
            .unwrap_or_default();
        let package_manager = self
            .package_manager
            .as_deref()
            .or(defaults.package_manager.as_deref())
            .and_then(PackageManager::parse_lenient);

        ScaffoldOptions {
            name: self.name,
            template,
            skip_install: self.skip_install || defaults.skip_install,
            package_manager,
        }
    }
}
