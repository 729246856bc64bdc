//! CHILD command line.
//!
//! The `child` binary is a thin shell over the library crates:
//!
//! ```text
//! source text
//!     │
//!     ▼
//! Program::parse ──► classified lines
//!     │
//!     ├── check ──► findings ──► diagnostics
//!     │
//!     ▼
//! Interpreter::run ──► output, or EvalError ──► diagnostic
//! ```
//!
//! Everything here is about options, reporting and exit codes.

pub mod commands;
pub mod options;
pub mod problem;

/// Install a tracing subscriber.
///
/// Only does anything when `RUST_LOG` is set or `trace` is true (`--trace`),
/// in which case interpreter tracing goes to stderr.
pub fn init_tracing(trace: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if trace {
        EnvFilter::new("child_eval=trace,child_parse=debug")
    } else if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        return;
    };

    // A subscriber may already be installed (tests); keep the first one.
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .with(filter)
        .try_init();
}
