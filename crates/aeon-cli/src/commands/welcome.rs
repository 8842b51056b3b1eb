//! Default screen for a missing or unknown command.

use std::io;

use aeon_core::domain::stack::FOUNDATION_PACKAGE;

use super::{GITHUB_URL, bun_add_line, npm_install_line, short_import_line};
use crate::output::OutputManager;
use crate::ui::{diagram, palette, splash};

/// Splash, stack diagram and a getting-started guide.
///
/// The tagline is typed out only when stdout is a terminal.
pub fn execute(out: &OutputManager) -> io::Result<()> {
    splash::show(out, out.is_interactive())?;
    diagram::show(out)?;

    out.bold_line("Get started:")?;
    out.blank()?;
    out.command_example(
        &format!("npx {FOUNDATION_PACKAGE} init my-app"),
        "Scaffold a new project",
    )?;
    out.command_example(&format!("npx {FOUNDATION_PACKAGE} info"), "Explore the stack")?;
    out.blank()?;

    out.dim_line("Or just install it:")?;
    out.shell_line(&npm_install_line())?;
    out.shell_line(&bun_add_line())?;
    out.blank()?;

    out.dim_line("Then import everything:")?;
    out.colored_line(&format!("{};", short_import_line()), palette::ELECTRIC)?;
    out.blank()?;

    out.dim_line(GITHUB_URL)?;
    out.blank()
}
