//! Process-wide tracing subscriber for hosts that don't install their own.

use std::sync::OnceLock;
use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

static TELEMETRY_INIT: OnceLock<()> = OnceLock::new();

/// Filter used when `RUST_LOG` is unset: the two crates that emit events.
const DEFAULT_DIRECTIVES: &str = "spectra_core=info,spectra_math=info";

/// Install a compact fmt subscriber filtered by `RUST_LOG`, falling back to
/// info-level output for the Spectra crates. Safe to call repeatedly.
pub fn init() {
    TELEMETRY_INIT.get_or_init(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(DEFAULT_DIRECTIVES))
            .unwrap_or_else(|_| EnvFilter::default().add_directive(Level::INFO.into()));

        if let Err(err) = fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .compact()
            .try_init()
        {
            eprintln!("[telemetry] failed to initialise tracing subscriber: {err}");
        }
    });
}
