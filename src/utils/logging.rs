//! Logging utilities
//!
//! Provides logging setup and configuration.

use env_logger::Env;

/// Setup logging from `RUST_LOG`, defaulting to `info`.
///
/// Repeated calls are ignored.
pub fn setup_logging() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .is_test(cfg!(test))
        .try_init();
}
