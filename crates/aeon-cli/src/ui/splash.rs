//! Splash screen.

use std::io;
use std::thread;
use std::time::Duration;

use aeon_core::VERSION;
use aeon_core::domain::stack;

use crate::output::OutputManager;
use crate::ui::palette::{self, center};

const CHAR_DELAY: Duration = Duration::from_millis(8);
const MOTTO: &str = "The complete stack. One import away.";

const WORDMARK: [&str; 7] = [
    "┌─┐ ┌─┐ ┌─┐ ┌┐┌",
    "├─┤ ├┤  │ │ │││",
    "┴ ┴ └─┘ └─┘ ┘└┘",
    "",
    "┌─┐ ┌─┐ ┬ ┬ ┌┐┌ ┌┬┐ ┌─┐ ┌┬┐ ┬ ┌─┐ ┌┐┌",
    "├┤  │ │ │ │ │││  │││ ├─┤  │  │ │ │ │││",
    "┴   └─┘ └─┘ ┘└┘ ─┴┘ ┴ ┴  ┴  ┴ └─┘ ┘└┘",
];

/// Draw `rows` inside a rounded box with a blank row above and below.
fn framed(rows: &[String], inner: usize) -> Vec<String> {
    let mut lines = vec![format!("╭{}╮", "─".repeat(inner)), format!("│{}│", " ".repeat(inner))];
    for row in rows {
        let fill = inner.saturating_sub(row.chars().count());
        lines.push(format!("│{row}{}│", " ".repeat(fill)));
    }
    lines.push(format!("│{}│", " ".repeat(inner)));
    lines.push(format!("╰{}╯", "─".repeat(inner)));
    lines
}

/// Logo sized for the terminal: one line below 50 columns, a small box
/// below 70, the block-letter wordmark otherwise.
pub fn logo(width: usize) -> Vec<String> {
    if width < 50 {
        return vec!["> aeon foundation".to_string()];
    }
    if width < 70 {
        let rows = [
            format!("{}{}", " ".repeat(8), "A E O N   F O U N D A T I O N"),
            String::new(),
            format!("{}{}", " ".repeat(5), MOTTO),
        ];
        return framed(&rows, 45);
    }

    let mut rows: Vec<String> = WORDMARK
        .iter()
        .map(|row| if row.is_empty() { String::new() } else { format!("    {row}") })
        .collect();
    rows.push(String::new());
    rows.push(format!("    {MOTTO}"));
    framed(&rows, 54)
}

/// `Aeon · Pages · Dash · Relay · Edgework · Aegis · Neural`.
pub fn tagline() -> String {
    stack::namespaces().join(" · ")
}

/// One-line banner shown before `init` and `info`.
pub fn show_minimal(out: &OutputManager) -> io::Result<()> {
    let p = out.palette();
    out.blank()?;
    out.print(&format!(
        "  {} {} {}",
        p.paint(">", palette::AEON),
        p.bold("aeon-foundation"),
        p.dim(&format!("v{VERSION}"))
    ))
}

/// Full splash: gradient logo, tagline, version and site.
pub fn show(out: &OutputManager, animate: bool) -> io::Result<()> {
    let p = out.palette();
    let width = out.width();
    let lines = logo(width);
    let last = lines.len().saturating_sub(1).max(1) as f32;

    out.blank()?;
    for (i, line) in lines.iter().enumerate() {
        let color = palette::interpolate(palette::AEON, palette::ELECTRIC, i as f32 / last);
        out.print(&p.paint(&center(line, width), color))?;
    }
    out.blank()?;

    if animate {
        out.write("  ")?;
        for (i, ch) in tagline().chars().enumerate() {
            // shimmer between violet and a hint of gold
            let t = ((i * 7) % 10) as f32 / 10.0 * 0.3;
            let color = palette::interpolate(palette::AEON, palette::GOLD, t);
            out.write(&p.paint(&ch.to_string(), color))?;
            thread::sleep(CHAR_DELAY);
        }
        out.blank()?;
    } else {
        out.print(&p.dim(&center(&tagline(), width)))?;
    }

    out.print(&p.dim(&center(&format!("v{VERSION}"), width)))?;
    out.print(&p.dim(&center("affectively.ai", width)))?;
    out.blank()
}
