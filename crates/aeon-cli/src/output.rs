//! Output management and formatting.
//!
//! [`OutputManager`] is the single stdout sink. Commands and the scaffold
//! service (through the [`Reporter`] port) write every line through it.

use std::io::{self, IsTerminal};
#[cfg(test)]
use std::sync::{Arc, Mutex, PoisonError};

use aeon_core::application::ports::{Reporter, TaskProgress};
use console::Term;
use owo_colors::Rgb;

use crate::config::AppConfig;
use crate::ui::palette::{self, Palette};
use crate::ui::Spinner;

const DEFAULT_WIDTH: usize = 80;

enum Sink {
    Terminal(Term),
    #[cfg(test)]
    Buffer(SharedBuffer),
}

/// In-memory sink used by tests.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

#[cfg(test)]
impl SharedBuffer {
    /// Everything written so far.
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }

    fn push(&self, text: &str) {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(text.as_bytes());
    }
}

/// Manages CLI output based on configuration and the attached terminal.
pub struct OutputManager {
    palette: Palette,
    interactive: bool,
    width: usize,
    sink: Sink,
}

impl OutputManager {
    /// Build an `OutputManager` for the real stdout.
    pub fn new(config: &AppConfig) -> Self {
        let term = Term::stdout();
        let interactive = io::stdout().is_terminal();
        let colored = palette::color_enabled(
            config.output.no_color || palette::env_flag("NO_COLOR"),
            palette::env_flag("FORCE_COLOR"),
            interactive,
        );
        let width = term
            .size_checked()
            .map(|(_, cols)| usize::from(cols))
            .unwrap_or(DEFAULT_WIDTH);

        Self {
            palette: Palette::new(colored),
            interactive,
            width,
            sink: Sink::Terminal(term),
        }
    }

    /// Non-interactive manager writing into a buffer.
    #[cfg(test)]
    pub fn buffered(colored: bool, width: usize) -> (Self, SharedBuffer) {
        let buffer = SharedBuffer::default();
        let manager = Self {
            palette: Palette::new(colored),
            interactive: false,
            width,
            sink: Sink::Buffer(buffer.clone()),
        };
        (manager, buffer)
    }

    // ── Raw writes ────────────────────────────────────────────────────────

    /// Write a full line.
    pub fn print(&self, line: &str) -> io::Result<()> {
        match &self.sink {
            Sink::Terminal(term) => term.write_line(line),
            #[cfg(test)]
            Sink::Buffer(buffer) => {
                buffer.push(line);
                buffer.push("\n");
                Ok(())
            }
        }
    }

    /// Write without a trailing newline.
    pub fn write(&self, text: &str) -> io::Result<()> {
        match &self.sink {
            Sink::Terminal(term) => {
                term.write_str(text)?;
                term.flush()
            }
            #[cfg(test)]
            Sink::Buffer(buffer) => {
                buffer.push(text);
                Ok(())
            }
        }
    }

    pub fn blank(&self) -> io::Result<()> {
        self.print("")
    }

    // ── Styled lines ──────────────────────────────────────────────────────

    /// Blank line, then a bold group title.
    pub fn group_header(&self, title: &str) -> io::Result<()> {
        self.blank()?;
        self.print(&format!("  {}", self.palette.bold(title)))
    }

    /// Blank line, then `│ title` with a violet bar.
    pub fn section_header(&self, title: &str) -> io::Result<()> {
        self.blank()?;
        self.print(&format!(
            "  {} {}",
            self.palette.paint("│", palette::AEON),
            self.palette.bold(title)
        ))
    }

    /// `$ command  description`.
    pub fn command_example(&self, command: &str, description: &str) -> io::Result<()> {
        self.print(&format!(
            "  {} {}  {}",
            self.palette.dim("$"),
            self.palette.paint(command, palette::AEON),
            self.palette.dim(description)
        ))
    }

    /// `$ command` without a description.
    pub fn shell_line(&self, command: &str) -> io::Result<()> {
        self.print(&format!(
            "  {} {}",
            self.palette.dim("$"),
            self.palette.paint(command, palette::AEON)
        ))
    }

    /// Key padded to 16 columns, then the value.
    pub fn key_value(&self, key: &str, value: &str) -> io::Result<()> {
        self.print(&format!(
            "  {} {}",
            self.palette.paint(&palette::pad(key, 16), palette::STEEL),
            value
        ))
    }

    /// Indented line in a single colour.
    pub fn colored_line(&self, text: &str, color: Rgb) -> io::Result<()> {
        self.print(&format!("  {}", self.palette.paint(text, color)))
    }

    /// Indented dimmed line.
    pub fn dim_line(&self, text: &str) -> io::Result<()> {
        self.print(&format!("  {}", self.palette.dim(text)))
    }

    /// Indented bold line.
    pub fn bold_line(&self, text: &str) -> io::Result<()> {
        self.print(&format!("  {}", self.palette.bold(text)))
    }

    fn status(&self, icon: &str, color: Rgb, message: &str, detail: Option<&str>) -> io::Result<()> {
        let icon = self.palette.paint(icon, color);
        match detail {
            Some(detail) => self.print(&format!("  {icon} {message} {}", self.palette.dim(detail))),
            None => self.print(&format!("  {icon} {message}")),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// `true` when stdout is a terminal (spinner and animation are drawn).
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Terminal width in columns.
    pub fn width(&self) -> usize {
        self.width
    }
}

impl Reporter for OutputManager {
    fn section(&self, title: &str) -> io::Result<()> {
        self.section_header(title)
    }

    fn step(&self, message: &str) -> io::Result<()> {
        self.print(&format!(
            "  {} {message}",
            self.palette.paint("◐", palette::AEON)
        ))
    }

    fn done(&self, message: &str, detail: Option<&str>) -> io::Result<()> {
        self.status("✓", palette::SUCCESS, message, detail)
    }

    fn fail(&self, message: &str, detail: Option<&str>) -> io::Result<()> {
        self.status("✗", palette::ERROR, message, detail)
    }

    fn note(&self, message: &str) -> io::Result<()> {
        self.dim_line(message)
    }

    fn spacer(&self) -> io::Result<()> {
        self.blank()
    }

    fn begin_task(&self, message: &str) -> io::Result<Box<dyn TaskProgress + '_>> {
        Ok(Box::new(Spinner::start(self, message, self.interactive)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_status_lines() {
        let (output, buffer) = OutputManager::buffered(false, 80);
        output.done("Created package.json", None).unwrap();
        output.done("Created src/index.ts", Some("(full template)")).unwrap();
        output.fail("Directory already exists: demo", None).unwrap();
        output.note("Choose a different name").unwrap();

        assert_eq!(
            buffer.contents(),
            "  ✓ Created package.json\n\
             \x20 ✓ Created src/index.ts (full template)\n\
             \x20 ✗ Directory already exists: demo\n\
             \x20 Choose a different name\n"
        );
    }

    #[test]
    fn section_header_starts_with_blank_line() {
        let (output, buffer) = OutputManager::buffered(false, 80);
        output.section("Scaffolding").unwrap();
        assert_eq!(buffer.contents(), "\n  │ Scaffolding\n");
    }

    #[test]
    fn key_value_pads_keys() {
        let (output, buffer) = OutputManager::buffered(false, 80);
        output.key_value("npm", "https://npmjs.com").unwrap();
        assert_eq!(buffer.contents(), format!("  npm{} https://npmjs.com\n", " ".repeat(13)));
    }

    #[test]
    fn colored_output_carries_brand_colors() {
        let (output, buffer) = OutputManager::buffered(true, 80);
        output.done("ok", None).unwrap();
        assert!(buffer.contents().contains("38;2;34;197;94"));
    }

    #[test]
    fn command_examples_keep_two_space_gap() {
        let (output, buffer) = OutputManager::buffered(false, 80);
        output.command_example("info", "Show the stack").unwrap();
        assert_eq!(buffer.contents(), "  $ info  Show the stack\n");
    }
}
