//! The stack diagram: one boxed row per layer, top to bottom.

use std::io;

use aeon_core::domain::stack;

use crate::output::OutputManager;
use crate::ui::palette::{self, pad};

pub fn show(out: &OutputManager) -> io::Result<()> {
    let p = out.palette();
    let layers = stack::layers();
    let name_width = layers.iter().map(|l| l.label.chars().count()).max().unwrap_or(0);
    let pkg_width = layers.iter().map(|l| l.package.chars().count()).max().unwrap_or(0);
    let desc_width = layers
        .iter()
        .map(|l| l.description.chars().count())
        .max()
        .unwrap_or(0);
    // icon, name and package on one row; description indented below
    let inner = (name_width + pkg_width + 7).max(desc_width + 4);

    out.blank()?;
    out.bold_line("The Aeon Stack")?;
    out.blank()?;

    for (i, layer) in layers.iter().enumerate() {
        let color = palette::accent(layer.accent);

        if i == 0 {
            out.print(&format!(
                "  {}",
                p.paint(&format!("  ╭{}╮", "─".repeat(inner)), color)
            ))?;
        }

        let used = name_width + pkg_width + 5;
        out.print(&format!(
            "  {} {} {}  {}{}{}",
            p.paint("  │", color),
            p.paint(layer.icon, color),
            p.bold(&pad(layer.label, name_width)),
            p.dim(&pad(layer.package, pkg_width)),
            " ".repeat(inner - used),
            p.paint("│", color)
        ))?;

        let fill = inner - 3 - layer.description.chars().count();
        out.print(&format!(
            "  {}   {}{}{}",
            p.paint("  │", color),
            p.dim(layer.description),
            " ".repeat(fill),
            p.paint("│", color)
        ))?;

        match layers.get(i + 1) {
            Some(next) => {
                let next_color = palette::accent(next.accent);
                out.print(&format!(
                    "  {}{}{}",
                    p.paint("  ├", color),
                    p.paint(&"─".repeat(inner), next_color),
                    p.paint("┤", next_color)
                ))?;
            }
            None => out.print(&format!(
                "  {}",
                p.paint(&format!("  ╰{}╯", "─".repeat(inner)), color)
            ))?,
        }
    }

    out.blank()
}
