//! `--version` and `--help`.

use std::io;

use aeon_core::{VERSION, domain::TemplateKind, domain::stack::FOUNDATION_PACKAGE};

use super::{GITHUB_URL, NPM_URL, WEBSITE_URL, short_import_line};
use crate::output::OutputManager;
use crate::ui::palette::{self, pad};

/// Print the bare version string.
pub fn version(out: &OutputManager) -> io::Result<()> {
    out.print(VERSION)
}

/// Print the usage guide.
pub fn execute(out: &OutputManager) -> io::Result<()> {
    let p = out.palette();

    out.blank()?;
    out.print(&format!(
        "  {} {} {}  {}",
        p.paint(">", palette::AEON),
        p.bold("aeon-foundation"),
        p.dim(&format!("v{VERSION}")),
        p.dim("The complete Aeon stack")
    ))?;

    out.group_header("Quick Start")?;
    out.command_example(&format!("npx {FOUNDATION_PACKAGE}"), "Interactive setup")?;
    out.command_example(
        &format!("npx {FOUNDATION_PACKAGE} init my-app"),
        "Scaffold a project",
    )?;

    out.group_header("Commands")?;
    out.command_example("init [name]", "Create a new Aeon Foundation project")?;
    out.command_example("info", "Show the full stack diagram & package info")?;
    out.command_example("help", "Show this help")?;

    out.group_header("Init Options")?;
    for template in TemplateKind::ALL {
        out.command_example(&format!("--template {template}"), template.description())?;
    }
    out.command_example("--skip-install", "Skip dependency installation")?;
    out.command_example("--pm npm|bun|pnpm|yarn", "Package manager to use")?;

    out.group_header("Imports")?;
    out.colored_line(&short_import_line(), palette::ELECTRIC)?;
    out.blank()?;
    out.dim_line("Or individual modules:")?;
    out.colored_line(
        &format!("import {{ SyncCoordinator }} from '{FOUNDATION_PACKAGE}/aeon'"),
        palette::ELECTRIC,
    )?;
    out.colored_line(
        &format!("import {{ Edgework }} from '{FOUNDATION_PACKAGE}/edgework'"),
        palette::ELECTRIC,
    )?;

    out.group_header("Links")?;
    for (label, url) in [("GitHub", GITHUB_URL), ("npm", NPM_URL), ("Website", WEBSITE_URL)] {
        out.print(&format!("  {}{url}", p.dim(&pad(label, 9))))?;
    }
    out.blank()
}
