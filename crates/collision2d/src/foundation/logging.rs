//! Logging setup
//!
//! The library itself only emits through the `log` facade; binaries and
//! tests pick the backend. This installs `env_logger`.

/// Initialize logging with a default level
///
/// `RUST_LOG` still takes precedence when it is set. Safe to call more than
/// once; only the first call installs the logger.
pub fn init_with_level(level: log::LevelFilter) {
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}
