//! Log setup for the hello_bus programs
//!
//! `--verbosity` controls how much the middleware logs; the programs' own
//! diagnostics stay at `info`. A `RUST_LOG` value takes precedence.

use tracing_subscriber::EnvFilter;

/// Middleware log level for a verbosity between 0 and 5
pub fn middleware_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "off",
        1 => "error",
        2 => "warn",
        3 => "info",
        4 => "debug",
        _ => "trace",
    }
}

/// Filter directives used when `RUST_LOG` is unset
pub fn filter_directives(verbosity: u8) -> String {
    format!("info,zenoh={}", middleware_level(verbosity))
}

/// Install the global subscriber, writing to stderr. Later calls are ignored.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
