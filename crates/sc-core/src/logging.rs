//! Structured logging setup.
//!
//! stdout is reserved for command payloads (JSON or tables); all log
//! output goes to stderr, human-readable by default or JSON lines for
//! machine collection. `SPARECAST_LOG` overrides the verbosity-derived
//! filter with full `EnvFilter` syntax.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Log output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable console lines.
    Text,
    /// JSON lines for machine consumption.
    Json,
}

/// Initializes the global tracing subscriber.
///
/// `verbose` counts `-v` flags (0 = warn, 1 = info, 2 = debug,
/// 3+ = trace); `quiet` wins over verbosity and shows errors only.
/// Safe to call once; later calls are ignored.
pub fn init_logging(verbose: u8, quiet: bool, format: LogFormat) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_env("SPARECAST_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal());

    let result = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
    // A second init (e.g. in tests) is fine; the first subscriber wins.
    let _ = result;
}
