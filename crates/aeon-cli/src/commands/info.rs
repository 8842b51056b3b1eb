//! `info`: stack diagram, install commands, import paths and links.

use std::io;

use aeon_core::domain::{STACK, stack::FOUNDATION_PACKAGE};

use super::{GITHUB_URL, NPM_URL, WEBSITE_URL, bun_add_line, npm_install_line};
use crate::output::OutputManager;
use crate::ui::{diagram, palette, splash};

pub fn execute(out: &OutputManager) -> io::Result<()> {
    splash::show_minimal(out)?;
    diagram::show(out)?;

    let p = out.palette();

    out.section_header("Quick Start")?;
    out.blank()?;
    out.print(&format!(
        "  {}  {}",
        p.dim("Install:"),
        p.paint(&npm_install_line(), palette::AEON)
    ))?;
    out.print(&format!(
        "  {}  {}",
        p.dim("   or  "),
        p.paint(&bun_add_line(), palette::AEON)
    ))?;
    out.blank()?;

    out.section_header("Imports")?;
    out.blank()?;
    for (path, description) in imports() {
        out.colored_line(&path, palette::ELECTRIC)?;
        out.dim_line(&description)?;
        out.blank()?;
    }

    out.section_header("Links")?;
    out.blank()?;
    out.key_value("GitHub", GITHUB_URL)?;
    out.key_value("npm", NPM_URL)?;
    out.key_value("Website", WEBSITE_URL)?;
    out.blank()
}

/// Root import first, then one subpath per stack package.
fn imports() -> Vec<(String, String)> {
    let namespaces: Vec<_> = STACK.iter().map(|p| p.namespace).collect();
    let mut imports = vec![(
        FOUNDATION_PACKAGE.to_string(),
        format!("Everything ({})", namespaces.join(", ")),
    )];
    imports.extend(
        STACK
            .iter()
            .map(|package| (package.import_path(), package.summary.to_string())),
    );
    imports
}
