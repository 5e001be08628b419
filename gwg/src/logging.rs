//! Log output for the CLI.
//!
//! Logs go to stderr so that `gwg preview` output can be piped.

use std::io;

use eyre::{Result, eyre};
use tracing_subscriber::{filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Crates whose events are shown at the requested level.
const TARGETS: &[&str] = &["gwg", "gwg_core", "gwg_codegen_go", "gwg_manifest"];

/// Map the number of `-v` flags to a level name.
pub fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Build the default filter directives for a level.
fn directives(level: &str) -> String {
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the global subscriber. `RUST_LOG` takes precedence over `-v`.
pub fn init(verbose: u8) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directives(level_for(verbose))))
        .map_err(|e| eyre!("failed to create tracing filter: {e}"))?;

    let layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(layer)
        .try_init()?;

    Ok(())
}
