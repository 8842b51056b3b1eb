//! # aeon-foundation
//!
//! Entry point for the Aeon Foundation CLI.
//!
//! ## Startup sequence
//!
//! 1. Load `.env`, if present.
//! 2. Parse the arguments with the permissive parser in [`cli`].
//! 3. Initialise the tracing subscriber (`AEON_LOG`, then `RUST_LOG`).
//! 4. Load configuration (file + env + defaults).
//! 5. Build the [`OutputManager`] and dispatch the resolved [`Action`].
//! 6. Turn any [`CliError`] into `✗ message` on stderr and exit 1.
//!
//! An existing target directory during `init` is reported but is not an
//! error, so it still exits 0. So is a stdout closed early by a pipe.

use std::io::IsTerminal as _;
use std::process::ExitCode;

use tracing::{debug, info, instrument};

use crate::{
    cli::{Action, ParsedInvocation},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
    ui::palette,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
mod ui;

fn main() -> ExitCode {
    // Missing .env is normal.
    let _ = dotenvy::dotenv();

    let invocation = ParsedInvocation::parse(
        std::env::args_os()
            .skip(1)
            .map(|arg| arg.to_string_lossy().into_owned()),
    );

    let stderr_color = palette::color_enabled(
        palette::env_flag("NO_COLOR"),
        palette::env_flag("FORCE_COLOR"),
        std::io::stderr().is_terminal(),
    );
    if let Err(e) = init_logging(stderr_color) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        command = invocation.command(),
        flags = ?invocation.flags(),
        positionals = ?invocation.positionals(),
        "Arguments parsed"
    );

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => return handle_error(CliError::from(e), stderr_color),
    };

    let output = OutputManager::new(&config);
    let action = Action::resolve(&invocation);

    match run(action, &config, &output) {
        Ok(()) => {
            info!("aeon-foundation finished");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, stderr_color && !config.output.no_color),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all, fields(action = ?action))]
fn run(action: Action, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    match action {
        Action::Version => commands::help::version(output)?,
        Action::Help => commands::help::execute(output)?,
        Action::Init(request) => commands::init::execute(request, config, output)?,
        Action::Info => commands::info::execute(output)?,
        Action::Welcome => commands::welcome::execute(output)?,
    }
    Ok(())
}

/// Log the error, print it to stderr and map it to an exit code.
///
/// A closed stdout is not reported; the reader already has what it wanted.
fn handle_error(err: CliError, colored: bool) -> ExitCode {
    if err.is_broken_pipe() {
        debug!("stdout closed by reader");
        return ExitCode::SUCCESS;
    }

    err.log();

    let msg = if colored {
        err.format_colored()
    } else {
        err.format_plain()
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}
