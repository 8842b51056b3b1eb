//! Tracing subscriber initialisation.
//!
//! Only the CLI crate calls [`init_logging`]; `aeon-core` and
//! `aeon-adapters` only emit spans and events.
//!
//! The filter comes from `AEON_LOG`, then `RUST_LOG`, then `warn`, so a
//! normal run shows nothing but the UI. Logs go to stderr.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Variable holding the tracing filter.
pub const LOG_ENV: &str = "AEON_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

/// Initialise the global tracing subscriber.
///
/// Must be called once, before any tracing macros fire.
pub fn init_logging(color: bool) -> anyhow::Result<()> {
    let directive = filter_directive(
        std::env::var(LOG_ENV).ok(),
        std::env::var(EnvFilter::DEFAULT_ENV).ok(),
    );
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| {
        eprintln!("Ignoring invalid log filter '{directive}'");
        EnvFilter::new(DEFAULT_DIRECTIVE)
    });

    let use_ansi = color && std::io::stderr().is_terminal();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

/// First non-empty of `AEON_LOG` and `RUST_LOG`, else `warn`.
fn filter_directive(aeon_log: Option<String>, rust_log: Option<String>) -> String {
    [aeon_log, rust_log]
        .into_iter()
        .flatten()
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_DIRECTIVE.to_string())
}
