//! Spinner for long-running steps, drawn with indicatif.

use std::io;
use std::time::Duration;

use aeon_core::application::ports::{Reporter, TaskProgress};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::output::OutputManager;
use crate::ui::palette::{self, Palette};

const FRAMES: [&str; 6] = ["◜", "◠", "◝", "◞", "◡", "◟"];
const TICK: Duration = Duration::from_millis(60);

/// A running spinner. The ticker stops on `succeed`, `fail` or drop.
pub struct Spinner<'a> {
    bar: ProgressBar,
    output: &'a OutputManager,
}

impl<'a> Spinner<'a> {
    /// Start spinning. Nothing is drawn when `visible` is false.
    pub fn start(output: &'a OutputManager, message: &str, visible: bool) -> Self {
        let target = if visible {
            ProgressDrawTarget::stdout()
        } else {
            ProgressDrawTarget::hidden()
        };
        let bar = ProgressBar::with_draw_target(None, target);
        bar.set_style(style(output.palette()));
        bar.set_message(message.to_string());
        if visible {
            bar.enable_steady_tick(TICK);
        }
        Self { bar, output }
    }

    fn stop(&self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}

fn style(palette: Palette) -> ProgressStyle {
    let mut frames: Vec<String> = FRAMES
        .iter()
        .map(|f| palette.paint(f, palette::AEON))
        .collect();
    // indicatif shows the last tick string once finished.
    frames.push(" ".to_string());
    let frames: Vec<&str> = frames.iter().map(String::as_str).collect();

    ProgressStyle::with_template("  {spinner} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&frames)
}

impl TaskProgress for Spinner<'_> {
    fn succeed(self: Box<Self>, message: &str) -> io::Result<()> {
        self.stop();
        self.output.done(message, None)
    }

    fn fail(self: Box<Self>, message: &str) -> io::Result<()> {
        self.stop();
        self.output.fail(message, None)
    }
}

impl Drop for Spinner<'_> {
    fn drop(&mut self) {
        self.stop();
    }
}
